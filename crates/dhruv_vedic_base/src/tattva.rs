//! Tattva (elemental) groups and their directions.
//!
//! The 12 rashis fall into four trines of three signs each, four signs
//! apart. The same partition drives Trikona Sodhana, elemental balance,
//! and directional strength:
//!
//! | Tattva  | Rashis (1-based) | Disha |
//! |---------|------------------|-------|
//! | Agni    | 1, 5, 9          | East  |
//! | Prithvi | 2, 6, 10         | South |
//! | Vayu    | 3, 7, 11         | West  |
//! | Jala    | 4, 8, 12         | North |

use serde::{Deserialize, Serialize};

/// Elemental group of a rashi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tattva {
    /// Fire.
    Agni,
    /// Earth.
    Prithvi,
    /// Air.
    Vayu,
    /// Water.
    Jala,
}

/// All 4 tattvas in table order.
pub const ALL_TATTVAS: [Tattva; 4] = [Tattva::Agni, Tattva::Prithvi, Tattva::Vayu, Tattva::Jala];

/// Trikona groups as 0-based rashi indices, in `ALL_TATTVAS` order.
pub const TRIKONA_GROUPS: [[usize; 3]; 4] = [[0, 4, 8], [1, 5, 9], [2, 6, 10], [3, 7, 11]];

/// Cardinal direction associated with a tattva.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Disha {
    Purva,
    Dakshina,
    Paschima,
    Uttara,
}

impl Disha {
    /// English name of the direction.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Purva => "East",
            Self::Dakshina => "South",
            Self::Paschima => "West",
            Self::Uttara => "North",
        }
    }
}

impl Tattva {
    /// Tattva of a 0-based rashi index (wraps modulo 12).
    pub const fn of_index(rashi_index: u8) -> Self {
        ALL_TATTVAS[(rashi_index % 4) as usize]
    }

    /// 0-based position in `ALL_TATTVAS`.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// English element name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Agni => "Fire",
            Self::Prithvi => "Earth",
            Self::Vayu => "Air",
            Self::Jala => "Water",
        }
    }

    /// Direction ruled by this element.
    pub const fn disha(self) -> Disha {
        match self {
            Self::Agni => Disha::Purva,
            Self::Prithvi => Disha::Dakshina,
            Self::Vayu => Disha::Paschima,
            Self::Jala => Disha::Uttara,
        }
    }

    /// 0-based rashi indices of this trine.
    pub const fn rashi_indices(self) -> [usize; 3] {
        TRIKONA_GROUPS[self as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_partition_all_rashis() {
        let mut seen = [false; 12];
        for group in TRIKONA_GROUPS {
            for i in group {
                assert!(!seen[i], "rashi {i} appears twice");
                seen[i] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn group_members_share_tattva() {
        for t in ALL_TATTVAS {
            for i in t.rashi_indices() {
                assert_eq!(Tattva::of_index(i as u8), t);
            }
        }
    }

    #[test]
    fn fire_is_east() {
        assert_eq!(Tattva::Agni.disha(), Disha::Purva);
        assert_eq!(Tattva::Jala.disha().english_name(), "North");
    }
}
