//! Rashi (zodiac sign) identification and cyclic sign arithmetic.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Mesha (Aries) at 0 deg sidereal. Sign arithmetic is
//! cyclic: the 12th sign from Mesha is Meena, the 13th wraps back.
//!
//! Two numbering conventions coexist in jyotish material: 0-based indices
//! (array slots, used by the rule tables) and 1-based sign numbers (1 =
//! Mesha, used when counting houses). `Rashi` exposes both.

use serde::{Deserialize, Serialize};

use crate::tattva::Tattva;
use crate::util::normalize_360;

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based sign number (Mesha=1 .. Meena=12).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Rashi for a 0-based index, wrapping modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_RASHIS[(index % 12) as usize]
    }

    /// Rashi for a 1-based sign number. Returns None outside 1..=12.
    pub const fn from_number(number: u8) -> Option<Self> {
        if number >= 1 && number <= 12 {
            Some(ALL_RASHIS[(number - 1) as usize])
        } else {
            None
        }
    }

    /// The n-th rashi counted from this one (1-based: 1 = same sign).
    ///
    /// `Mesha.nth(4)` = Karka, `Meena.nth(2)` = Mesha.
    pub const fn nth(self, n: u8) -> Self {
        Self::from_index(nth_rashi_from(self.index(), n))
    }

    /// 1-based count from `self` to `other` (1 = same sign, 7 = opposite).
    pub const fn count_to(self, other: Rashi) -> u8 {
        (other.index() + 12 - self.index()) % 12 + 1
    }

    /// Elemental (trine) group of this rashi.
    pub const fn tattva(self) -> Tattva {
        Tattva::of_index(self.index())
    }

    /// All 12 rashis in order.
    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

/// Compute the n-th rashi from a given rashi (0-based indices, 1-based offset).
///
/// `nth_rashi_from(0, 1)` = 0 (same rashi), `nth_rashi_from(0, 2)` = 1 (next rashi).
pub const fn nth_rashi_from(rashi_index: u8, offset: u8) -> u8 {
    ((rashi_index as u16 + offset as u16 + 11) % 12) as u8
}

/// Rashi lookup result for a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiInfo {
    /// The rashi (zodiac sign).
    pub rashi: Rashi,
    /// 0-based rashi index (0 = Mesha).
    pub rashi_index: u8,
    /// Decimal degrees within the rashi [0.0, 30.0).
    pub degrees_in_rashi: f64,
}

/// Determine rashi from sidereal ecliptic longitude.
///
/// Each rashi spans exactly 30 degrees: Mesha = [0, 30), Vrishabha = [30, 60), etc.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    // Clamp to 11 in case of floating point edge (exactly 360.0)
    let rashi_index = ((lon / 30.0).floor() as u8).min(11);
    RashiInfo {
        rashi: ALL_RASHIS[rashi_index as usize],
        rashi_index,
        degrees_in_rashi: lon - rashi_index as f64 * 30.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rashi_indices_sequential() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
            assert_eq!(r.number() as usize, i + 1);
        }
    }

    #[test]
    fn from_number_bounds() {
        assert_eq!(Rashi::from_number(1), Some(Rashi::Mesha));
        assert_eq!(Rashi::from_number(12), Some(Rashi::Meena));
        assert_eq!(Rashi::from_number(0), None);
        assert_eq!(Rashi::from_number(13), None);
    }

    #[test]
    fn nth_rashi_same() {
        assert_eq!(nth_rashi_from(0, 1), 0);
        assert_eq!(nth_rashi_from(5, 1), 5);
    }

    #[test]
    fn nth_rashi_wrap() {
        assert_eq!(nth_rashi_from(11, 2), 0);
        assert_eq!(nth_rashi_from(0, 12), 11);
        assert_eq!(Rashi::Meena.nth(2), Rashi::Mesha);
    }

    #[test]
    fn count_to_is_inverse_of_nth() {
        for r in ALL_RASHIS {
            for n in 1..=12u8 {
                assert_eq!(r.count_to(r.nth(n)), n);
            }
        }
    }

    #[test]
    fn opposite_sign_is_seventh() {
        assert_eq!(Rashi::Mesha.count_to(Rashi::Tula), 7);
        assert_eq!(Rashi::Tula.count_to(Rashi::Mesha), 7);
    }

    #[test]
    fn rashi_all_boundaries() {
        for i in 0..12u8 {
            let info = rashi_from_longitude(i as f64 * 30.0);
            assert_eq!(info.rashi_index, i);
            assert!(info.degrees_in_rashi.abs() < 1e-10);
        }
    }

    #[test]
    fn rashi_negative() {
        let info = rashi_from_longitude(-10.0);
        assert_eq!(info.rashi, Rashi::Meena);
        assert!((info.degrees_in_rashi - 20.0).abs() < 1e-10);
    }
}
