//! Vedic planet (graha) enum and rashi lordship.
//!
//! Ashtakavarga scores only the seven classical grahas; Rahu and Ketu are
//! kept in the enum because they still transit and are tracked as slow
//! movers.

use serde::{Deserialize, Serialize};

use crate::rashi::Rashi;

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// The 7 classical grahas (sapta grahas), excluding Rahu and Ketu.
/// Used for Ashtakavarga and other calculations that only consider the 7 planets.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Whether this graha is one of the seven scored by Ashtakavarga.
    pub const fn is_sapta(self) -> bool {
        !matches!(self, Self::Rahu | Self::Ketu)
    }

    /// Parse an English or Sanskrit graha name, case-insensitive.
    ///
    /// Returns None for anything outside the closed set of nine.
    pub fn from_name(name: &str) -> Option<Graha> {
        let name = name.trim();
        ALL_GRAHAS.iter().copied().find(|g| {
            g.english_name().eq_ignore_ascii_case(name) || g.name().eq_ignore_ascii_case(name)
        })
    }
}

/// Get the planetary lord of a rashi.
///
/// - Mesha/Vrischika → Mangal (Mars)
/// - Vrishabha/Tula → Shukra (Venus)
/// - Mithuna/Kanya → Buddh (Mercury)
/// - Karka → Chandra (Moon)
/// - Simha → Surya (Sun)
/// - Dhanu/Meena → Guru (Jupiter)
/// - Makara/Kumbha → Shani (Saturn)
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha | Rashi::Vrischika => Graha::Mangal,
        Rashi::Vrishabha | Rashi::Tula => Graha::Shukra,
        Rashi::Mithuna | Rashi::Kanya => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Dhanu | Rashi::Meena => Graha::Guru,
        Rashi::Makara | Rashi::Kumbha => Graha::Shani,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graha_indices_sequential() {
        for (i, g) in ALL_GRAHAS.iter().enumerate() {
            assert_eq!(g.index() as usize, i);
        }
    }

    #[test]
    fn sapta_excludes_nodes() {
        assert!(SAPTA_GRAHAS.iter().all(|g| g.is_sapta()));
        assert!(!Graha::Rahu.is_sapta());
        assert!(!Graha::Ketu.is_sapta());
    }

    #[test]
    fn parse_english_and_sanskrit() {
        assert_eq!(Graha::from_name("Jupiter"), Some(Graha::Guru));
        assert_eq!(Graha::from_name("guru"), Some(Graha::Guru));
        assert_eq!(Graha::from_name(" saturn "), Some(Graha::Shani));
    }

    #[test]
    fn parse_unknown_is_none() {
        assert_eq!(Graha::from_name("Pluto"), None);
        assert_eq!(Graha::from_name(""), None);
    }

    #[test]
    fn rashi_lordship_dual_ruled() {
        assert_eq!(rashi_lord(Rashi::Mesha), Graha::Mangal);
        assert_eq!(rashi_lord(Rashi::Vrischika), Graha::Mangal);
        assert_eq!(rashi_lord(Rashi::Mithuna), Graha::Buddh);
        assert_eq!(rashi_lord(Rashi::Kanya), Graha::Buddh);
        assert_eq!(rashi_lord(Rashi::Makara), Graha::Shani);
        assert_eq!(rashi_lord(Rashi::Kumbha), Graha::Shani);
    }

    #[test]
    fn luminaries_rule_single_signs() {
        assert_eq!(rashi_lord(Rashi::Simha), Graha::Surya);
        assert_eq!(rashi_lord(Rashi::Karka), Graha::Chandra);
    }
}
