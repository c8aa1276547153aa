//! Sampling and analysis configuration.
//!
//! Every field has a default, so a JSON file only needs the keys it wants
//! to override:
//!
//! ```json
//! { "sampling": { "time_slices": 24, "slice_minutes": 60 } }
//! ```

use std::fs;
use std::path::Path;

use dhruv_vedic_base::Graha;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Pure-potential multiplier per rashi (Mesha..Meena).
pub const DEFAULT_RASHI_MULTIPLIERS: [u32; 12] = [7, 10, 8, 4, 10, 5, 7, 8, 9, 5, 11, 12];

/// A representative place at which every time slice is cast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorLocation {
    pub name: String,
    /// Geographic latitude in degrees, north positive.
    pub latitude: f64,
    /// Geographic longitude in degrees, east positive.
    pub longitude: f64,
    /// Free-form grouping label (e.g. "North").
    pub region: String,
}

impl AnchorLocation {
    pub fn new(name: &str, latitude: f64, longitude: f64, region: &str) -> Self {
        Self {
            name: name.to_string(),
            latitude,
            longitude,
            region: region.to_string(),
        }
    }
}

/// The 20 Indian anchor cities sampled by default.
pub fn default_locations() -> Vec<AnchorLocation> {
    [
        ("Srinagar", 34.0837, 74.7973, "North"),
        ("Bhuj", 23.2420, 69.6669, "West"),
        ("Guwahati", 26.1445, 91.7362, "East"),
        ("Kanyakumari", 8.0883, 77.5385, "South"),
        ("New Delhi", 28.6139, 77.2090, "North"),
        ("Mumbai", 19.0760, 72.8777, "West"),
        ("Kolkata", 22.5726, 88.3639, "East"),
        ("Chennai", 13.0827, 80.2707, "South"),
        ("Bengaluru", 12.9716, 77.5946, "South"),
        ("Hyderabad", 17.3850, 78.4867, "South"),
        ("Ahmedabad", 23.0225, 72.5714, "West"),
        ("Jaipur", 26.9124, 75.7873, "North"),
        ("Lucknow", 26.8467, 80.9462, "North"),
        ("Patna", 25.5941, 85.1376, "East"),
        ("Bhopal", 23.2599, 77.4126, "Central"),
        ("Nagpur", 21.1458, 79.0882, "Central"),
        ("Bhubaneswar", 20.2961, 85.8245, "East"),
        ("Thiruvananthapuram", 8.5241, 76.9366, "South"),
        ("Shillong", 25.5788, 91.8933, "Northeast"),
        ("Amritsar", 31.6340, 74.8723, "North"),
    ]
    .into_iter()
    .map(|(name, lat, lon, region)| AnchorLocation::new(name, lat, lon, region))
    .collect()
}

/// Matrix cell that stands for the whole day in reference-based analyses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReferenceSample {
    pub time_slice: usize,
    pub location: usize,
}

/// How the day is sampled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Number of slices starting at UTC midnight.
    pub time_slices: u32,
    /// Spacing between slices in minutes.
    pub slice_minutes: u32,
    pub locations: Vec<AnchorLocation>,
    pub rashi_multipliers: [u32; 12],
    /// Extra attempts for a cell whose source call fails transiently.
    pub source_retries: u32,
    pub reference: ReferenceSample,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            time_slices: 96,
            slice_minutes: 15,
            locations: default_locations(),
            rashi_multipliers: DEFAULT_RASHI_MULTIPLIERS,
            source_retries: 2,
            reference: ReferenceSample::default(),
        }
    }
}

impl SamplingConfig {
    /// Total number of matrix cells.
    pub fn cell_count(&self) -> usize {
        self.time_slices as usize * self.locations.len()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.time_slices == 0 {
            return Err(ConfigError::Invalid("time_slices must be at least 1".into()));
        }
        if self.slice_minutes == 0 {
            return Err(ConfigError::Invalid("slice_minutes must be at least 1".into()));
        }
        if self.locations.is_empty() {
            return Err(ConfigError::Invalid("at least one location is required".into()));
        }
        for loc in &self.locations {
            if !loc.latitude.is_finite() || !(-90.0..=90.0).contains(&loc.latitude) {
                return Err(ConfigError::Invalid(format!(
                    "location {:?}: latitude {} out of range",
                    loc.name, loc.latitude
                )));
            }
            if !loc.longitude.is_finite() || !(-180.0..=180.0).contains(&loc.longitude) {
                return Err(ConfigError::Invalid(format!(
                    "location {:?}: longitude {} out of range",
                    loc.name, loc.longitude
                )));
            }
        }
        if self.reference.time_slice >= self.time_slices as usize
            || self.reference.location >= self.locations.len()
        {
            return Err(ConfigError::Invalid(format!(
                "reference ({}, {}) outside the {}x{} grid",
                self.reference.time_slice,
                self.reference.location,
                self.time_slices,
                self.locations.len()
            )));
        }
        Ok(())
    }
}

/// A slow body whose sign ingresses are projected into life windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitBody {
    pub graha: Graha,
    /// Average months spent in one rashi.
    pub months_per_sign: u32,
    /// Moves backwards through the zodiac.
    pub retrograde: bool,
}

/// How the matrix is interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Largest Lagna share of a rashi's SAV that still counts as fixed.
    pub fixed_share_tolerance: f64,
    /// Years after `today` in which projected windows are kept.
    pub horizon_years: u32,
    pub max_windows: usize,
    pub transits: Vec<TransitBody>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            // Lagna is one of eight contributors
            fixed_share_tolerance: 0.125,
            horizon_years: 15,
            max_windows: 8,
            transits: vec![
                TransitBody {
                    graha: Graha::Guru,
                    months_per_sign: 12,
                    retrograde: false,
                },
                TransitBody {
                    graha: Graha::Shani,
                    months_per_sign: 30,
                    retrograde: false,
                },
                TransitBody {
                    graha: Graha::Rahu,
                    months_per_sign: 18,
                    retrograde: true,
                },
            ],
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.fixed_share_tolerance.is_finite()
            || !(0.0..=1.0).contains(&self.fixed_share_tolerance)
        {
            return Err(ConfigError::Invalid(format!(
                "fixed_share_tolerance {} must lie in [0, 1]",
                self.fixed_share_tolerance
            )));
        }
        for body in &self.transits {
            if body.months_per_sign == 0 {
                return Err(ConfigError::Invalid(format!(
                    "transit {}: months_per_sign must be at least 1",
                    body.graha.english_name()
                )));
            }
            if body.graha == Graha::Ketu {
                return Err(ConfigError::Invalid(
                    "Ketu has no tracked position; project Rahu instead".into(),
                ));
            }
        }
        Ok(())
    }
}

/// Complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JanmaConfig {
    pub sampling: SamplingConfig,
    pub analysis: AnalysisConfig,
}

impl JanmaConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sampling.validate()?;
        self.analysis.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_is_96_by_20() {
        let cfg = SamplingConfig::default();
        assert_eq!(cfg.time_slices, 96);
        assert_eq!(cfg.locations.len(), 20);
        assert_eq!(cfg.cell_count(), 1920);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn default_covers_a_full_day() {
        let cfg = SamplingConfig::default();
        assert_eq!(cfg.time_slices * cfg.slice_minutes, 24 * 60);
    }

    #[test]
    fn zero_slices_rejected() {
        let cfg = SamplingConfig {
            time_slices: 0,
            ..SamplingConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn empty_locations_rejected() {
        let cfg = SamplingConfig {
            locations: Vec::new(),
            ..SamplingConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn non_finite_latitude_rejected() {
        let mut cfg = SamplingConfig::default();
        cfg.locations[3].latitude = f64::NAN;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn reference_outside_grid_rejected() {
        let cfg = SamplingConfig {
            reference: ReferenceSample {
                time_slice: 96,
                location: 0,
            },
            ..SamplingConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = JanmaConfig::from_json(r#"{"sampling": {"time_slices": 24, "slice_minutes": 60}}"#)
            .unwrap();
        assert_eq!(cfg.sampling.time_slices, 24);
        assert_eq!(cfg.sampling.locations.len(), 20);
        assert_eq!(cfg.analysis.max_windows, 8);
        assert_eq!(cfg.analysis.transits.len(), 3);
    }

    #[test]
    fn json_validation_runs() {
        let err = JanmaConfig::from_json(r#"{"analysis": {"fixed_share_tolerance": 2.0}}"#);
        assert!(matches!(err, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        assert!(matches!(
            JanmaConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = JanmaConfig::load(Path::new("/nonexistent/janma.json"));
        assert!(matches!(err, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn transit_ketu_rejected() {
        let mut cfg = AnalysisConfig::default();
        cfg.transits[0].graha = Graha::Ketu;
        assert!(cfg.validate().is_err());
    }
}
