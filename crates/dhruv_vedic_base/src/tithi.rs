//! Tithi (lunar day) from Sun and Moon longitudes.
//!
//! A tithi spans 12 degrees of Moon-Sun elongation, giving 30 per synodic
//! month: 15 in the bright half (Shukla paksha) ending at Purnima, and 15
//! in the dark half (Krishna paksha) ending at Amavasya.

use serde::{Deserialize, Serialize};

use crate::util::forward_separation;

/// Elongation covered by one tithi.
pub const TITHI_SPAN: f64 = 12.0;

/// Lunar half-month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Paksha {
    /// Waxing half (tithis 1-15).
    Shukla,
    /// Waning half (tithis 16-30).
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Shukla => "Waxing",
            Self::Krishna => "Waning",
        }
    }
}

/// Tithi name. The 14 regular names repeat in both pakshas; the 15th is
/// Purnima in Shukla and Amavasya in Krishna.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tithi {
    Pratipada,
    Dwitiya,
    Tritiya,
    Chaturthi,
    Panchami,
    Shashthi,
    Saptami,
    Ashtami,
    Navami,
    Dashami,
    Ekadashi,
    Dwadashi,
    Trayodashi,
    Chaturdashi,
    Purnima,
    Amavasya,
}

const REGULAR_TITHIS: [Tithi; 14] = [
    Tithi::Pratipada,
    Tithi::Dwitiya,
    Tithi::Tritiya,
    Tithi::Chaturthi,
    Tithi::Panchami,
    Tithi::Shashthi,
    Tithi::Saptami,
    Tithi::Ashtami,
    Tithi::Navami,
    Tithi::Dashami,
    Tithi::Ekadashi,
    Tithi::Dwadashi,
    Tithi::Trayodashi,
    Tithi::Chaturdashi,
];

impl Tithi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pratipada => "Pratipada",
            Self::Dwitiya => "Dwitiya",
            Self::Tritiya => "Tritiya",
            Self::Chaturthi => "Chaturthi",
            Self::Panchami => "Panchami",
            Self::Shashthi => "Shashthi",
            Self::Saptami => "Saptami",
            Self::Ashtami => "Ashtami",
            Self::Navami => "Navami",
            Self::Dashami => "Dashami",
            Self::Ekadashi => "Ekadashi",
            Self::Dwadashi => "Dwadashi",
            Self::Trayodashi => "Trayodashi",
            Self::Chaturdashi => "Chaturdashi",
            Self::Purnima => "Purnima",
            Self::Amavasya => "Amavasya",
        }
    }

    /// Tithi for a 1-based number in 1..=30 (wraps beyond).
    pub const fn from_number(number: u8) -> Self {
        let n = (number.saturating_sub(1) % 30) + 1;
        match n {
            15 => Self::Purnima,
            30 => Self::Amavasya,
            _ => REGULAR_TITHIS[((n - 1) % 15) as usize],
        }
    }
}

/// Tithi placement for a Sun/Moon pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TithiPosition {
    pub tithi: Tithi,
    /// 1-based tithi in the synodic month (1-30).
    pub number: u8,
    pub paksha: Paksha,
    /// 1-based tithi within its paksha (1-15).
    pub tithi_in_paksha: u8,
    /// Moon - Sun in [0, 360).
    pub elongation: f64,
}

/// Determine the tithi from sidereal (or tropical) Sun and Moon longitudes.
pub fn tithi_from_longitudes(sun_lon_deg: f64, moon_lon_deg: f64) -> TithiPosition {
    let elongation = forward_separation(sun_lon_deg, moon_lon_deg);
    let number = ((elongation / TITHI_SPAN).floor() as u8).min(29) + 1;
    let paksha = if number <= 15 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    };
    TithiPosition {
        tithi: Tithi::from_number(number),
        number,
        paksha,
        tithi_in_paksha: (number - 1) % 15 + 1,
        elongation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ekadashi_shukla() {
        let t = tithi_from_longitudes(10.0, 130.0);
        assert_eq!(t.number, 11);
        assert_eq!(t.tithi, Tithi::Ekadashi);
        assert_eq!(t.paksha, Paksha::Shukla);
        assert!((t.elongation - 120.0).abs() < 1e-10);
    }

    #[test]
    fn moon_behind_sun_wraps() {
        // Moon 350, Sun 10 → elongation 340 → tithi 29
        let t = tithi_from_longitudes(10.0, 350.0);
        assert_eq!(t.number, 29);
        assert_eq!(t.tithi, Tithi::Chaturdashi);
        assert_eq!(t.paksha, Paksha::Krishna);
        assert_eq!(t.tithi_in_paksha, 14);
    }

    #[test]
    fn full_and_new_moon_names() {
        assert_eq!(Tithi::from_number(15), Tithi::Purnima);
        assert_eq!(Tithi::from_number(30), Tithi::Amavasya);
        assert_eq!(Tithi::from_number(16), Tithi::Pratipada);
        assert_eq!(tithi_from_longitudes(0.0, 170.0).tithi, Tithi::Purnima);
        assert_eq!(tithi_from_longitudes(0.0, 359.0).tithi, Tithi::Amavasya);
    }

    #[test]
    fn conjunction_is_first_tithi() {
        let t = tithi_from_longitudes(100.0, 100.0);
        assert_eq!(t.number, 1);
        assert_eq!(t.tithi, Tithi::Pratipada);
    }
}
