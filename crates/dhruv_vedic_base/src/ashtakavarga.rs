//! Ashtakavarga (benefic points) calculations.
//!
//! Implements Bhinna Ashtakavarga (BAV), Sarvashtakavarga (SAV), and the
//! two Sodhana (reduction) passes: Trikona (trine) and Ekadhipatya
//! (same-lord pair).
//!
//! For each of 7 grahas (Sun through Saturn), 8 contributors (7 grahas + Lagna)
//! assign benefic points to rashis based on their relative offset.
//!
//! Mathematical invariants (totals across 12 rashis, constant for ALL charts):
//! - Sun: 48, Moon: 49, Mars: 40, Mercury: 54, Jupiter: 56, Venus: 52, Saturn: 39
//! - SAV total: 338
//!
//! The Lagna is the only contributor that depends on birth time and place.
//! Excluding it yields the "fixed" distribution shared by every chart cast
//! for the same day.

use serde::{Deserialize, Serialize};

use crate::graha::{Graha, SAPTA_GRAHAS};
use crate::tattva::TRIKONA_GROUPS;

/// Benefic points per rashi (0-based rashi index).
pub type Bindus = [u8; 12];

// ---------------------------------------------------------------------------
// Contributors
// ---------------------------------------------------------------------------

/// A point that donates bindus: one of the seven grahas or the Lagna.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Contributor {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Lagna,
}

/// All 8 contributors in rule-table order.
pub const ALL_CONTRIBUTORS: [Contributor; 8] = [
    Contributor::Surya,
    Contributor::Chandra,
    Contributor::Mangal,
    Contributor::Buddh,
    Contributor::Guru,
    Contributor::Shukra,
    Contributor::Shani,
    Contributor::Lagna,
];

impl Contributor {
    /// 0-based column in the rule table (7 = Lagna).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The graha behind this contributor, None for the Lagna.
    pub const fn graha(self) -> Option<Graha> {
        match self {
            Self::Lagna => None,
            _ => Some(SAPTA_GRAHAS[self as usize]),
        }
    }

    /// Contributor for one of the seven grahas. None for Rahu/Ketu.
    pub const fn from_graha(graha: Graha) -> Option<Contributor> {
        if graha.is_sapta() {
            Some(ALL_CONTRIBUTORS[graha.index() as usize])
        } else {
            None
        }
    }

    /// Parse "Lagna"/"Ascendant" or any graha name accepted by [`Graha::from_name`].
    pub fn from_name(name: &str) -> Option<Contributor> {
        let trimmed = name.trim();
        if trimmed.eq_ignore_ascii_case("lagna") || trimmed.eq_ignore_ascii_case("ascendant") {
            return Some(Self::Lagna);
        }
        Graha::from_name(trimmed).and_then(Self::from_graha)
    }
}

// ---------------------------------------------------------------------------
// Rules table (bitmask encoding)
// ---------------------------------------------------------------------------

/// Build a bitmask from 1-based offset values.
/// Bit i is set if offset i appears in the list.
const fn bits(offsets: &[u8]) -> u16 {
    let mut mask = 0u16;
    let mut i = 0;
    while i < offsets.len() {
        mask |= 1u16 << offsets[i];
        i += 1;
    }
    mask
}

/// Ashtakavarga rules: RULES[target_graha][contributor] = bitmask of favorable offsets.
///
/// target_graha: 0=Sun, 1=Moon, 2=Mars, 3=Mercury, 4=Jupiter, 5=Venus, 6=Saturn
/// contributor:  0=Sun, 1=Moon, 2=Mars, 3=Mercury, 4=Jupiter, 5=Venus, 6=Saturn, 7=Lagna
///
/// Offsets are 1-based (1=same rashi, 2=next rashi, ..., 12=previous rashi).
const RULES: [[u16; 8]; 7] = [
    // Sun (total: 48)
    [
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),
        bits(&[3, 6, 10, 11]),
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),
        bits(&[3, 5, 6, 9, 10, 11, 12]),
        bits(&[5, 6, 9, 11]),
        bits(&[6, 7, 12]),
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),
        bits(&[3, 4, 6, 10, 11, 12]),
    ],
    // Moon (total: 49)
    [
        bits(&[3, 6, 7, 8, 10, 11]),
        bits(&[1, 3, 6, 7, 10, 11]),
        bits(&[2, 3, 5, 6, 9, 10, 11]),
        bits(&[1, 3, 4, 5, 7, 8, 10, 11]),
        bits(&[1, 4, 7, 8, 10, 11, 12]),
        bits(&[3, 4, 5, 7, 9, 10, 11]),
        bits(&[3, 5, 6, 11]),
        bits(&[3, 6, 10, 11]),
    ],
    // Mars (total: 40); Mars also favours its own 9th
    [
        bits(&[3, 5, 6, 10, 11]),
        bits(&[3, 6, 11]),
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),
        bits(&[3, 5, 6, 11]),
        bits(&[6, 10, 11, 12]),
        bits(&[6, 8, 11, 12]),
        bits(&[1, 4, 7, 8, 9, 10, 11]),
        bits(&[1, 3, 6, 10, 11]),
    ],
    // Mercury (total: 54)
    [
        bits(&[5, 6, 9, 11, 12]),
        bits(&[2, 4, 6, 8, 10, 11]),
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),
        bits(&[1, 3, 5, 6, 9, 10, 11, 12]),
        bits(&[6, 8, 11, 12]),
        bits(&[1, 2, 3, 4, 5, 8, 9, 11]),
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),
        bits(&[1, 2, 4, 6, 8, 10, 11]),
    ],
    // Jupiter (total: 56)
    [
        bits(&[1, 2, 3, 4, 7, 8, 9, 10, 11]),
        bits(&[2, 5, 7, 9, 11]),
        bits(&[1, 2, 4, 7, 8, 10, 11]),
        bits(&[1, 2, 4, 5, 6, 9, 10, 11]),
        bits(&[1, 2, 3, 4, 7, 8, 10, 11]),
        bits(&[2, 5, 6, 9, 10, 11]),
        bits(&[3, 5, 6, 12]),
        bits(&[1, 2, 4, 5, 6, 7, 9, 10, 11]),
    ],
    // Venus (total: 52)
    [
        bits(&[8, 11, 12]),
        bits(&[1, 2, 3, 4, 5, 8, 9, 11, 12]),
        bits(&[3, 4, 6, 9, 11, 12]),
        bits(&[3, 5, 6, 9, 11]),
        bits(&[5, 8, 9, 10, 11]),
        bits(&[1, 2, 3, 4, 5, 8, 9, 10, 11]),
        bits(&[3, 4, 5, 8, 9, 10, 11]),
        bits(&[1, 2, 3, 4, 5, 8, 9, 11]),
    ],
    // Saturn (total: 39)
    [
        bits(&[1, 2, 4, 7, 8, 10, 11]),
        bits(&[3, 6, 11]),
        bits(&[3, 5, 6, 10, 11, 12]),
        bits(&[6, 8, 9, 10, 11, 12]),
        bits(&[5, 6, 11, 12]),
        bits(&[6, 11, 12]),
        bits(&[3, 5, 6, 11]),
        bits(&[1, 3, 4, 6, 10, 11]),
    ],
];

/// Expected BAV totals per graha (for validation).
pub const BAV_TOTALS: [u8; 7] = [48, 49, 40, 54, 56, 52, 39];

/// Expected SAV total (constant for all charts).
pub const SAV_TOTAL: u16 = 338;

// ---------------------------------------------------------------------------
// Bhinna Ashtakavarga (BAV)
// ---------------------------------------------------------------------------

/// Bhinna Ashtakavarga for a single graha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BhinnaAshtakavarga {
    /// Target graha index (0=Sun through 6=Saturn).
    pub graha_index: u8,
    /// Benefic points per rashi (0-based index, max 8 points each).
    pub points: Bindus,
}

impl BhinnaAshtakavarga {
    /// Total points across all 12 rashis.
    pub fn total(&self) -> u8 {
        self.points.iter().sum()
    }
}

/// Calculate BAV for a single graha with all 8 contributors.
///
/// Arguments:
/// - `graha_index`: target graha (0=Sun through 6=Saturn)
/// - `graha_rashis`: 0-based rashi index for each graha (7 entries: Sun..Saturn)
/// - `lagna_rashi`: 0-based rashi index of the Ascendant
pub fn calculate_bav(graha_index: u8, graha_rashis: &[u8; 7], lagna_rashi: u8) -> BhinnaAshtakavarga {
    calculate_bav_excluding(graha_index, graha_rashis, lagna_rashi, &[])
}

/// Calculate BAV for a single graha, skipping the listed contributors.
///
/// A `graha_index` outside 0..7 yields all-zero points.
pub fn calculate_bav_excluding(
    graha_index: u8,
    graha_rashis: &[u8; 7],
    lagna_rashi: u8,
    exclude: &[Contributor],
) -> BhinnaAshtakavarga {
    let mut points = [0u8; 12];
    let Some(rules) = RULES.get(graha_index as usize) else {
        return BhinnaAshtakavarga { graha_index, points };
    };

    for contributor in ALL_CONTRIBUTORS {
        if exclude.contains(&contributor) {
            continue;
        }
        let contributor_rashi = match contributor {
            Contributor::Lagna => lagna_rashi,
            _ => graha_rashis[contributor.index() as usize],
        };
        let mask = rules[contributor.index() as usize];

        for rashi in 0u8..12 {
            // 1-based offset from contributor to this rashi
            let offset = (rashi + 12 - contributor_rashi % 12) % 12 + 1;
            if (mask >> offset) & 1 == 1 {
                points[rashi as usize] += 1;
            }
        }
    }

    BhinnaAshtakavarga { graha_index, points }
}

/// Calculate a BAV by graha name.
///
/// Names outside the seven grahas return an all-zero distribution rather
/// than failing.
pub fn calculate_bav_by_name(name: &str, graha_rashis: &[u8; 7], lagna_rashi: u8) -> Bindus {
    match Graha::from_name(name).filter(|g| g.is_sapta()) {
        Some(graha) => calculate_bav(graha.index(), graha_rashis, lagna_rashi).points,
        None => [0; 12],
    }
}

/// Calculate BAV for all 7 grahas, skipping the listed contributors.
pub fn calculate_all_bav_excluding(
    graha_rashis: &[u8; 7],
    lagna_rashi: u8,
    exclude: &[Contributor],
) -> [BhinnaAshtakavarga; 7] {
    std::array::from_fn(|i| calculate_bav_excluding(i as u8, graha_rashis, lagna_rashi, exclude))
}

/// Calculate BAV for all 7 grahas.
pub fn calculate_all_bav(graha_rashis: &[u8; 7], lagna_rashi: u8) -> [BhinnaAshtakavarga; 7] {
    calculate_all_bav_excluding(graha_rashis, lagna_rashi, &[])
}

// ---------------------------------------------------------------------------
// Sarvashtakavarga (SAV)
// ---------------------------------------------------------------------------

/// Sarvashtakavarga: combined points with a per-graha breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SarvaAshtakavarga {
    /// SAV total per rashi (sum of all 7 BAVs).
    pub total_points: Bindus,
    /// `breakdown[rashi][graha]`: points each graha's BAV holds in that rashi.
    pub breakdown: [[u8; 7]; 12],
}

impl SarvaAshtakavarga {
    /// Points the given graha's BAV contributes to a rashi. Zero when
    /// either index is out of range.
    pub fn contribution(&self, rashi_index: u8, graha_index: u8) -> u8 {
        self.breakdown
            .get(rashi_index as usize)
            .and_then(|row| row.get(graha_index as usize))
            .copied()
            .unwrap_or(0)
    }
}

/// Calculate SAV from all 7 BAVs.
pub fn calculate_sav(bavs: &[BhinnaAshtakavarga; 7]) -> SarvaAshtakavarga {
    let mut total_points = [0u8; 12];
    let mut breakdown = [[0u8; 7]; 12];
    for (g, bav) in bavs.iter().enumerate() {
        for r in 0..12 {
            total_points[r] += bav.points[r];
            breakdown[r][g] = bav.points[r];
        }
    }
    SarvaAshtakavarga {
        total_points,
        breakdown,
    }
}

// ---------------------------------------------------------------------------
// Sodhana (reductions)
// ---------------------------------------------------------------------------

/// Apply Trikona Sodhana: subtract minimum from each trikona triangle.
///
/// Every group ends with at least one zero and no value increases.
pub fn trikona_sodhana(points: &Bindus) -> Bindus {
    let mut result = *points;

    for group in &TRIKONA_GROUPS {
        let min_val = group.iter().map(|&i| result[i]).min().unwrap_or(0);
        for &i in group {
            result[i] -= min_val;
        }
    }

    result
}

/// Same-lord pairs for Ekadhipatya Sodhana (0-based rashi indices).
///
/// Karka (Moon) and Simha (Sun) have a single lord sign and are unpaired.
pub const EKADHIPATYA_PAIRS: [[usize; 2]; 5] = [
    [0, 7],  // Mars: Mesha, Vrischika
    [1, 6],  // Venus: Vrishabha, Tula
    [2, 5],  // Mercury: Mithuna, Kanya
    [8, 11], // Jupiter: Dhanu, Meena
    [9, 10], // Saturn: Makara, Kumbha
];

/// Which rashis hold at least one of the seven grahas.
pub fn occupied_rashis(graha_rashis: &[u8; 7]) -> [bool; 12] {
    let mut occupied = [false; 12];
    for &r in graha_rashis {
        occupied[(r % 12) as usize] = true;
    }
    occupied
}

/// Reduce one same-lord pair.
///
/// - both zero, or both occupied: unchanged
/// - neither occupied: equal values both become zero, otherwise both lose the smaller
/// - one occupied: an unoccupied zero stays; an unoccupied value above the
///   occupied one drops to it; otherwise the unoccupied value is taken out
///   of both signs, leaving the unoccupied one at zero.
pub fn reduce_pair(b1: u8, b2: u8, occupied1: bool, occupied2: bool) -> (u8, u8) {
    if (b1 == 0 && b2 == 0) || (occupied1 && occupied2) {
        return (b1, b2);
    }
    if !occupied1 && !occupied2 {
        if b1 == b2 {
            return (0, 0);
        }
        let min_val = b1.min(b2);
        return (b1 - min_val, b2 - min_val);
    }

    let (occ, unocc) = if occupied1 { (b1, b2) } else { (b2, b1) };
    let (occ, unocc) = if unocc == 0 {
        (occ, 0)
    } else if unocc > occ {
        (occ, occ)
    } else {
        (occ - unocc, 0)
    };
    if occupied1 { (occ, unocc) } else { (unocc, occ) }
}

/// Apply Ekadhipatya Sodhana to the output of [`trikona_sodhana`].
///
/// Rashis outside the five pairs keep their trikona value.
pub fn ekadhipatya_sodhana(after_trikona: &Bindus, occupied: &[bool; 12]) -> Bindus {
    let mut result = *after_trikona;

    for &[a, b] in &EKADHIPATYA_PAIRS {
        let (ra, rb) = reduce_pair(result[a], result[b], occupied[a], occupied[b]);
        result[a] = ra;
        result[b] = rb;
    }

    result
}

/// Per-graha BAVs after both sodhana passes, and their sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShodhitaAshtakavarga {
    /// Each graha's BAV after Trikona Sodhana.
    pub after_trikona: [Bindus; 7],
    /// Each graha's BAV after Ekadhipatya Sodhana.
    pub after_ekadhipatya: [Bindus; 7],
    /// Purified total per rashi (sum of `after_ekadhipatya`).
    pub total_points: Bindus,
}

/// Reduce every BAV (trikona, then ekadhipatya) and sum the results.
///
/// Occupancy for the pair rule comes from `graha_rashis`.
pub fn calculate_shodhita(
    bavs: &[BhinnaAshtakavarga; 7],
    graha_rashis: &[u8; 7],
) -> ShodhitaAshtakavarga {
    let occupied = occupied_rashis(graha_rashis);
    let after_trikona: [Bindus; 7] = std::array::from_fn(|g| trikona_sodhana(&bavs[g].points));
    let after_ekadhipatya: [Bindus; 7] =
        std::array::from_fn(|g| ekadhipatya_sodhana(&after_trikona[g], &occupied));

    let mut total_points = [0u8; 12];
    for reduced in &after_ekadhipatya {
        for r in 0..12 {
            total_points[r] += reduced[r];
        }
    }

    ShodhitaAshtakavarga {
        after_trikona,
        after_ekadhipatya,
        total_points,
    }
}

// ---------------------------------------------------------------------------
// Combined result
// ---------------------------------------------------------------------------

/// Complete Ashtakavarga result: all 7 BAVs, SAV, and the purified totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AshtakavargaResult {
    pub bavs: [BhinnaAshtakavarga; 7],
    pub sav: SarvaAshtakavarga,
    pub shodhita: ShodhitaAshtakavarga,
}

fn assemble(bavs: [BhinnaAshtakavarga; 7], graha_rashis: &[u8; 7]) -> AshtakavargaResult {
    let sav = calculate_sav(&bavs);
    let shodhita = calculate_shodhita(&bavs, graha_rashis);
    AshtakavargaResult { bavs, sav, shodhita }
}

/// Calculate complete Ashtakavarga for given planetary positions.
///
/// Arguments:
/// - `graha_rashis`: 0-based rashi index for 7 grahas (Sun..Saturn)
/// - `lagna_rashi`: 0-based rashi index of the Ascendant
pub fn calculate_ashtakavarga(graha_rashis: &[u8; 7], lagna_rashi: u8) -> AshtakavargaResult {
    assemble(calculate_all_bav(graha_rashis, lagna_rashi), graha_rashis)
}

/// Ashtakavarga with the Lagna's contributions left out.
///
/// Depends only on the graha placements, so it is identical for every
/// birth time on a day where no graha changes sign.
pub fn calculate_fixed_ashtakavarga(graha_rashis: &[u8; 7]) -> AshtakavargaResult {
    assemble(
        calculate_all_bav_excluding(graha_rashis, 0, &[Contributor::Lagna]),
        graha_rashis,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
