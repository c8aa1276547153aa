//! Chart patterns read from the reference chart and checked across the
//! matrix: planetary power, consistency, peak ascendants, elemental and
//! directional balance, yogas and universal nakshatras.

use std::collections::BTreeSet;

use chrono::NaiveTime;
use dhruv_vedic_base::{ALL_TATTVAS, Disha, Graha, Nakshatra, Rashi, SAPTA_GRAHAS, Tattva};
use serde::Serialize;
use tracing::warn;

use crate::chart::ChartSnapshot;
use crate::matrix::SampleMatrix;

// ---------------------------------------------------------------------------
// Planetary power
// ---------------------------------------------------------------------------

/// Number of houses in which a graha contributes at least one bindu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanetPower {
    pub graha: Graha,
    pub houses: u8,
}

/// Rank the seven grahas by reach, strongest first. Ties keep graha order.
pub fn planet_power(chart: &ChartSnapshot) -> Vec<PlanetPower> {
    let mut ranking: Vec<PlanetPower> = SAPTA_GRAHAS
        .iter()
        .enumerate()
        .map(|(g, &graha)| PlanetPower {
            graha,
            houses: chart.houses.iter().filter(|h| h.bav[g] >= 1).count() as u8,
        })
        .collect();
    ranking.sort_by(|a, b| b.houses.cmp(&a.houses));
    ranking
}

// ---------------------------------------------------------------------------
// Reference consistency
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VaryingGraha {
    pub graha: Graha,
    /// Every rashi the graha occupies somewhere in the matrix.
    pub rashis: Vec<Rashi>,
}

/// Whether each graha keeps one rashi through the whole sampled day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceConsistency {
    pub stable: Vec<Graha>,
    pub varying: Vec<VaryingGraha>,
}

impl ReferenceConsistency {
    /// True when the reference chart's placements hold for every entry.
    pub fn is_consistent(&self) -> bool {
        self.varying.is_empty()
    }
}

pub fn reference_consistency(matrix: &SampleMatrix) -> ReferenceConsistency {
    let mut stable = Vec::new();
    let mut varying = Vec::new();
    for (g, &graha) in SAPTA_GRAHAS.iter().enumerate() {
        let rashis: BTreeSet<Rashi> = matrix.iter().map(|e| e.chart.grahas[g].rashi).collect();
        if rashis.len() <= 1 {
            stable.push(graha);
        } else {
            warn!(
                graha = graha.english_name(),
                rashis = rashis.len(),
                "graha changes rashi within the day"
            );
            varying.push(VaryingGraha {
                graha,
                rashis: rashis.into_iter().collect(),
            });
        }
    }
    ReferenceConsistency { stable, varying }
}

// ---------------------------------------------------------------------------
// Peak ascendants
// ---------------------------------------------------------------------------

/// Houses whose SAV forms the power score: the kendras plus the trikonas.
pub const POWER_HOUSES: [u8; 6] = [1, 4, 5, 7, 9, 10];

/// Best moment for one rising sign at the reference location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeakAscendant {
    pub ascendant: Rashi,
    pub score: u32,
    pub time_slice: usize,
    /// UTC time of day.
    pub time: NaiveTime,
}

/// Sum of SAV over [`POWER_HOUSES`].
pub fn power_score(chart: &ChartSnapshot) -> u32 {
    POWER_HOUSES
        .iter()
        .filter_map(|&n| chart.house(n))
        .map(|h| h.sav as u32)
        .sum()
}

/// Highest-scoring slice per ascendant at one location, best first.
///
/// Ties within an ascendant go to the earliest slice; ties between
/// ascendants keep rashi order. Ascendants that never rise are omitted.
pub fn peak_ascendants(matrix: &SampleMatrix, location: usize) -> Vec<PeakAscendant> {
    let mut best: [Option<PeakAscendant>; 12] = [None; 12];
    for entry in matrix.at_location(location) {
        let chart = &entry.chart;
        let score = power_score(chart);
        let slot = &mut best[chart.lagna.index() as usize];
        let better = match slot {
            Some(p) => score > p.score || (score == p.score && entry.time_slice < p.time_slice),
            None => true,
        };
        if better {
            *slot = Some(PeakAscendant {
                ascendant: chart.lagna,
                score,
                time_slice: entry.time_slice,
                time: chart.instant.time(),
            });
        }
    }
    let mut peaks: Vec<PeakAscendant> = best.into_iter().flatten().collect();
    peaks.sort_by(|a, b| b.score.cmp(&a.score));
    peaks
}

// ---------------------------------------------------------------------------
// Elemental and directional balance
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElementCount {
    pub tattva: Tattva,
    pub grahas: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementalBalance {
    /// In `ALL_TATTVAS` order.
    pub counts: Vec<ElementCount>,
    pub dominant: Tattva,
}

/// Index of the first maximum under `gt`.
fn first_max<T>(items: &[T], gt: impl Fn(&T, &T) -> bool) -> usize {
    let mut best = 0;
    for (i, item) in items.iter().enumerate().skip(1) {
        if gt(item, &items[best]) {
            best = i;
        }
    }
    best
}

/// Distribution of the seven grahas over the four elements.
pub fn elemental_balance(chart: &ChartSnapshot) -> ElementalBalance {
    let counts: Vec<ElementCount> = ALL_TATTVAS
        .iter()
        .map(|&tattva| ElementCount {
            tattva,
            grahas: chart
                .grahas
                .iter()
                .filter(|b| b.rashi.tattva() == tattva)
                .count() as u8,
        })
        .collect();
    let dominant = counts[first_max(&counts, |a, b| a.grahas > b.grahas)].tattva;
    ElementalBalance { counts, dominant }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DirectionScore {
    pub disha: Disha,
    pub tattva: Tattva,
    pub mean_sav: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectionalStrength {
    pub scores: Vec<DirectionScore>,
    pub strongest: Disha,
}

/// Mean house SAV grouped by the direction of the house's element.
pub fn directional_strength(matrix: &SampleMatrix) -> DirectionalStrength {
    let mut sums = [0u64; 4];
    let mut counts = [0u64; 4];
    for entry in matrix {
        for house in &entry.chart.houses {
            let t = house.rashi.tattva().index() as usize;
            sums[t] += house.sav as u64;
            counts[t] += 1;
        }
    }
    let scores: Vec<DirectionScore> = ALL_TATTVAS
        .iter()
        .map(|&tattva| {
            let t = tattva.index() as usize;
            DirectionScore {
                disha: tattva.disha(),
                tattva,
                mean_sav: if counts[t] == 0 {
                    0.0
                } else {
                    sums[t] as f64 / counts[t] as f64
                },
            }
        })
        .collect();
    let strongest = scores[first_max(&scores, |a, b| a.mean_sav > b.mean_sav)].disha;
    DirectionalStrength { scores, strongest }
}

// ---------------------------------------------------------------------------
// Yogas
// ---------------------------------------------------------------------------

/// Planetary combinations checked on every chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Yoga {
    Budhaditya,
    ChandraMangala,
    ChandraMangalaOpposition,
    Gajakesari,
    ShaniMangalaDrishti,
}

pub const ALL_YOGAS: [Yoga; 5] = [
    Yoga::Budhaditya,
    Yoga::ChandraMangala,
    Yoga::ChandraMangalaOpposition,
    Yoga::Gajakesari,
    Yoga::ShaniMangalaDrishti,
];

fn rashi(chart: &ChartSnapshot, graha: Graha) -> Rashi {
    chart.grahas[graha.index() as usize].rashi
}

impl Yoga {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Budhaditya => "Budhaditya",
            Self::ChandraMangala => "Chandra-Mangala",
            Self::ChandraMangalaOpposition => "Chandra-Mangala (opposition)",
            Self::Gajakesari => "Gajakesari",
            Self::ShaniMangalaDrishti => "Shani-Mangala drishti",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Budhaditya => "Sun and Mercury conjunct",
            Self::ChandraMangala => "Moon and Mars conjunct",
            Self::ChandraMangalaOpposition => "Moon and Mars in mutual 7th",
            Self::Gajakesari => "Moon in a kendra from Jupiter",
            Self::ShaniMangalaDrishti => "Saturn and Mars in mutual aspect",
        }
    }

    /// Counted only when it holds in every entry.
    ///
    /// Gajakesari depends on the exact Moon-Jupiter distance, which the
    /// Moon can change within a day.
    pub const fn requires_universal(self) -> bool {
        matches!(self, Self::Gajakesari)
    }

    pub fn holds(self, chart: &ChartSnapshot) -> bool {
        let sun = rashi(chart, Graha::Surya);
        let moon = rashi(chart, Graha::Chandra);
        let mars = rashi(chart, Graha::Mangal);
        match self {
            Self::Budhaditya => sun == rashi(chart, Graha::Buddh),
            Self::ChandraMangala => moon == mars,
            Self::ChandraMangalaOpposition => moon.count_to(mars) == 7,
            Self::Gajakesari => {
                matches!(rashi(chart, Graha::Guru).count_to(moon), 1 | 4 | 7 | 10)
            }
            Self::ShaniMangalaDrishti => {
                let saturn = rashi(chart, Graha::Shani);
                matches!(saturn.count_to(mars), 3 | 7 | 10)
                    || matches!(mars.count_to(saturn), 4 | 7 | 8)
            }
        }
    }
}

/// A yoga present in the reference chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YogaFinding {
    pub yoga: Yoga,
    pub name: &'static str,
    pub description: &'static str,
    /// Fraction of entries in which the yoga holds.
    pub coverage: f64,
    pub universal: bool,
}

pub fn detect_yogas(matrix: &SampleMatrix, reference: &ChartSnapshot) -> Vec<YogaFinding> {
    let total = matrix.len();
    ALL_YOGAS
        .iter()
        .filter(|y| y.holds(reference))
        .filter_map(|&yoga| {
            let holding = matrix.iter().filter(|e| yoga.holds(&e.chart)).count();
            let universal = total > 0 && holding == total;
            if yoga.requires_universal() && !universal {
                return None;
            }
            Some(YogaFinding {
                yoga,
                name: yoga.name(),
                description: yoga.description(),
                coverage: if total == 0 {
                    0.0
                } else {
                    holding as f64 / total as f64
                },
                universal,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Universal nakshatras
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UniversalNakshatra {
    pub graha: Graha,
    pub nakshatra: Nakshatra,
}

/// Grahas whose nakshatra is the same in every entry.
pub fn universal_nakshatras(matrix: &SampleMatrix) -> Vec<UniversalNakshatra> {
    let Some(first) = matrix.entries().first() else {
        return Vec::new();
    };
    SAPTA_GRAHAS
        .iter()
        .enumerate()
        .filter_map(|(g, &graha)| {
            let nakshatra = first.chart.grahas[g].nakshatra;
            matrix
                .iter()
                .all(|e| e.chart.grahas[g].nakshatra == nakshatra)
                .then_some(UniversalNakshatra { graha, nakshatra })
        })
        .collect()
}
