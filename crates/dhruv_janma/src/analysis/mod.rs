//! Statistical analysis of a purified sample matrix.
//!
//! Matrix-wide measures (house and rashi statistics, directional strength,
//! yoga coverage, universal nakshatras) use every entry. Chart-level
//! measures (planetary power, elemental balance, tithi, transit origins)
//! read the explicit reference entry, and [`reference_consistency`]
//! reports how far that entry can stand for the whole day.

pub mod patterns;
pub mod report;
pub mod stats;
pub mod transit;

use chrono::NaiveDate;
use dhruv_vedic_base::{Graha, tithi_from_longitudes};
use tracing::debug;

use crate::config::{AnalysisConfig, ReferenceSample};
use crate::error::AnalysisError;
use crate::matrix::SampleMatrix;

pub use patterns::{
    ALL_YOGAS, DirectionScore, DirectionalStrength, ElementCount, ElementalBalance,
    POWER_HOUSES, PeakAscendant, PlanetPower, ReferenceConsistency, UniversalNakshatra,
    VaryingGraha, Yoga, YogaFinding, detect_yogas, directional_strength, elemental_balance,
    peak_ascendants, planet_power, power_score, reference_consistency, universal_nakshatras,
};
pub use report::{ReferenceChart, SignatureReport};
pub use stats::{
    HouseStats, RashiStats, SignClassification, SignKind, StrengthTier, Summary, classify_signs,
    house_statistics, rashi_statistics,
};
pub use transit::{LifeWindow, Significance, life_windows, signs_moved, strongest_rashis};

/// Analyse a purified matrix.
///
/// `origin` is the birth date and `today` the clock for life-window
/// projection; neither is read from the system.
pub fn analyze(
    matrix: &SampleMatrix,
    config: &AnalysisConfig,
    reference: ReferenceSample,
    origin: NaiveDate,
    today: NaiveDate,
) -> Result<SignatureReport, AnalysisError> {
    if matrix.is_empty() {
        return Err(AnalysisError::EmptyMatrix);
    }
    let entry = matrix
        .reference(reference)
        .ok_or(AnalysisError::MissingReference {
            time_slice: reference.time_slice,
            location: reference.location,
        })?;
    let chart = &entry.chart;
    debug!(entries = matrix.len(), ?reference, "analysing matrix");

    let house_stats = house_statistics(matrix);
    let rashi_stats = rashi_statistics(matrix);
    let sign_classification = classify_signs(&rashi_stats, config.fixed_share_tolerance);
    let planet_power = planet_power(chart);
    let kingmaker = planet_power.first().map_or(Graha::Surya, |p| p.graha);
    let sun = chart.grahas[Graha::Surya.index() as usize].longitude;
    let moon = chart.grahas[Graha::Chandra.index() as usize].longitude;
    let life_windows = life_windows(chart, &rashi_stats, config, origin, today);

    Ok(SignatureReport {
        date: origin,
        today,
        sample_count: matrix.len(),
        reference: ReferenceChart {
            sample: reference,
            instant: chart.instant,
            location: chart.location.name.clone(),
            lagna: chart.lagna,
            grahas: chart.grahas.to_vec(),
            rahu: chart.rahu,
        },
        house_stats,
        rashi_stats,
        sign_classification,
        planet_power,
        kingmaker,
        reference_consistency: reference_consistency(matrix),
        peak_ascendants: peak_ascendants(matrix, reference.location),
        elemental_balance: elemental_balance(chart),
        directional_strength: directional_strength(matrix),
        yogas: detect_yogas(matrix, chart),
        universal_nakshatras: universal_nakshatras(matrix),
        tithi: tithi_from_longitudes(sun, moon),
        life_windows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AnchorLocation, DEFAULT_RASHI_MULTIPLIERS, SamplingConfig};
    use crate::matrix::generate_matrix;
    use crate::purifier::purify_matrix;
    use crate::source::FixedSkySource;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn small_matrix() -> SampleMatrix {
        let cfg = SamplingConfig {
            time_slices: 8,
            slice_minutes: 180,
            locations: vec![
                AnchorLocation::new("Mumbai", 19.076, 72.8777, "West"),
                AnchorLocation::new("Kolkata", 22.5726, 88.3639, "East"),
            ],
            ..SamplingConfig::default()
        };
        let mut m = generate_matrix(&FixedSkySource::default(), ymd(1989, 10, 12), &cfg).unwrap();
        purify_matrix(&mut m, &DEFAULT_RASHI_MULTIPLIERS);
        m
    }

    #[test]
    fn report_covers_matrix() {
        let m = small_matrix();
        let r = analyze(
            &m,
            &AnalysisConfig::default(),
            ReferenceSample::default(),
            ymd(1989, 10, 12),
            ymd(2026, 10, 18),
        )
        .unwrap();
        assert_eq!(r.sample_count, 16);
        assert_eq!(r.house_stats.len(), 12);
        assert_eq!(r.rashi_stats.len(), 12);
        assert_eq!(r.planet_power.len(), 7);
        assert_eq!(r.kingmaker, r.planet_power[0].graha);
        assert_eq!(r.reference.location, "Mumbai");
        // Moon at 310 + drift stays in Kumbha all day
        assert!(r.reference_consistency.is_consistent());
        assert!(r.life_windows.len() <= 8);
        for h in &r.house_stats {
            assert_eq!(h.sav.count, 16);
        }
    }

    #[test]
    fn empty_matrix_rejected() {
        let m = SampleMatrix::from_entries(Vec::new(), 0, 0).unwrap();
        let err = analyze(
            &m,
            &AnalysisConfig::default(),
            ReferenceSample::default(),
            ymd(1989, 10, 12),
            ymd(2026, 10, 18),
        )
        .unwrap_err();
        assert_eq!(err, AnalysisError::EmptyMatrix);
    }

    #[test]
    fn missing_reference_rejected() {
        let m = small_matrix();
        let reference = ReferenceSample {
            time_slice: 8,
            location: 0,
        };
        let err = analyze(
            &m,
            &AnalysisConfig::default(),
            reference,
            ymd(1989, 10, 12),
            ymd(2026, 10, 18),
        )
        .unwrap_err();
        assert_eq!(
            err,
            AnalysisError::MissingReference {
                time_slice: 8,
                location: 0
            }
        );
    }

    #[test]
    fn reference_location_drives_peaks() {
        let m = small_matrix();
        let r = analyze(
            &m,
            &AnalysisConfig::default(),
            ReferenceSample {
                time_slice: 3,
                location: 1,
            },
            ymd(1989, 10, 12),
            ymd(2026, 10, 18),
        )
        .unwrap();
        let slices: usize = 8;
        assert!(r.peak_ascendants.iter().all(|p| p.time_slice < slices));
        assert_eq!(r.reference.location, "Kolkata");
        assert_eq!(r.reference.sample.time_slice, 3);
    }
}
