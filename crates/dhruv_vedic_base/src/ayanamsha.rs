//! Ayanamsha: offset between the tropical and sidereal zodiacs.
//!
//! Each system is defined by its value at J2000.0; the value at any other
//! epoch adds the IAU 2006 general precession in ecliptic longitude.

use serde::{Deserialize, Serialize};

/// Julian Date of the J2000.0 epoch.
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch (1970-01-01T00:00:00Z).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Sidereal reference systems.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AyanamshaSystem {
    /// Lahiri (Chitrapaksha): Spica at 0 Libra sidereal.
    #[default]
    Lahiri,
    /// Krishnamurti: minimal offset from Lahiri.
    KP,
    /// B.V. Raman: zero year ~397 CE.
    Raman,
    /// Fagan-Bradley SVP calibration.
    FaganBradley,
    /// Sri Yukteshwar, "The Holy Science".
    Yukteshwar,
}

/// All supported systems.
pub const ALL_SYSTEMS: [AyanamshaSystem; 5] = [
    AyanamshaSystem::Lahiri,
    AyanamshaSystem::KP,
    AyanamshaSystem::Raman,
    AyanamshaSystem::FaganBradley,
    AyanamshaSystem::Yukteshwar,
];

impl AyanamshaSystem {
    /// Reference ayanamsha at J2000.0 in degrees.
    pub const fn reference_j2000_deg(self) -> f64 {
        match self {
            Self::Lahiri => 23.853,
            Self::KP => 23.850,
            Self::Raman => 22.370,
            Self::FaganBradley => 24.736,
            Self::Yukteshwar => 22.376,
        }
    }
}

/// IAU 2006 general precession in ecliptic longitude, degrees.
///
/// `t` = Julian centuries since J2000.0.
pub fn general_precession_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    let arcsec =
        5028.796195 * t + 1.1054348 * t2 + 0.00007964 * t3 - 0.000023857 * t4 - 0.0000000383 * t5;
    arcsec / 3600.0
}

/// Mean ayanamsha in degrees at `t` Julian centuries since J2000.0.
pub fn ayanamsha_deg(system: AyanamshaSystem, t_centuries: f64) -> f64 {
    system.reference_j2000_deg() + general_precession_deg(t_centuries)
}

/// Julian Date to Julian centuries since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / 36525.0
}

/// Unix seconds (UTC) to Julian Date.
pub fn unix_seconds_to_jd(seconds: i64) -> f64 {
    seconds as f64 / 86_400.0 + UNIX_EPOCH_JD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lahiri_at_j2000() {
        let val = ayanamsha_deg(AyanamshaSystem::Lahiri, 0.0);
        assert!((val - 23.853).abs() < 1e-15, "Lahiri at J2000 = {val}");
    }

    #[test]
    fn precession_forward() {
        let diff = ayanamsha_deg(AyanamshaSystem::Lahiri, 1.0)
            - ayanamsha_deg(AyanamshaSystem::Lahiri, 0.0);
        // ~1.397 deg/century
        assert!((diff - 1.397).abs() < 0.01, "one century drift = {diff}");
    }

    #[test]
    fn precession_backward() {
        assert!(
            ayanamsha_deg(AyanamshaSystem::Lahiri, -0.3) < ayanamsha_deg(AyanamshaSystem::Lahiri, 0.0)
        );
    }

    #[test]
    fn all_references_in_range() {
        for sys in ALL_SYSTEMS {
            let val = sys.reference_j2000_deg();
            assert!((19.0..=28.0).contains(&val), "{sys:?} reference = {val}");
        }
    }

    #[test]
    fn unix_epoch_conversion() {
        assert!((unix_seconds_to_jd(0) - UNIX_EPOCH_JD).abs() < 1e-12);
        // 2000-01-01T12:00:00Z
        assert!((unix_seconds_to_jd(946_728_000) - J2000_JD).abs() < 1e-9);
        assert!(jd_to_centuries(J2000_JD).abs() < 1e-15);
    }
}
