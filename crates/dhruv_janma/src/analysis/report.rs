//! The serializable result of one analysis run.

use chrono::{NaiveDate, NaiveDateTime};
use dhruv_vedic_base::{Graha, Rashi, TithiPosition};
use serde::Serialize;

use super::patterns::{
    DirectionalStrength, ElementalBalance, PeakAscendant, PlanetPower, ReferenceConsistency,
    UniversalNakshatra, YogaFinding,
};
use super::stats::{HouseStats, RashiStats, SignClassification};
use super::transit::LifeWindow;
use crate::chart::BodyPosition;
use crate::config::ReferenceSample;

/// Where and when the reference chart was cast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceChart {
    pub sample: ReferenceSample,
    pub instant: NaiveDateTime,
    pub location: String,
    pub lagna: Rashi,
    pub grahas: Vec<BodyPosition>,
    pub rahu: Option<BodyPosition>,
}

/// Birth-date signature: everything the matrix says about one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignatureReport {
    pub date: NaiveDate,
    /// Clock used for life-window projection.
    pub today: NaiveDate,
    pub sample_count: usize,
    pub reference: ReferenceChart,
    pub house_stats: Vec<HouseStats>,
    pub rashi_stats: Vec<RashiStats>,
    pub sign_classification: Vec<SignClassification>,
    pub planet_power: Vec<PlanetPower>,
    /// Graha with the widest reach in the reference chart.
    pub kingmaker: Graha,
    pub reference_consistency: ReferenceConsistency,
    pub peak_ascendants: Vec<PeakAscendant>,
    pub elemental_balance: ElementalBalance,
    pub directional_strength: DirectionalStrength,
    pub yogas: Vec<YogaFinding>,
    pub universal_nakshatras: Vec<UniversalNakshatra>,
    pub tithi: TithiPosition,
    pub life_windows: Vec<LifeWindow>,
}
