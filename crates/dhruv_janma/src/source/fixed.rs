//! A frozen sky for tests and demos.

use chrono::{NaiveDateTime, Timelike};
use dhruv_vedic_base::normalize_360;

use crate::chart::SkyPositions;
use crate::config::AnchorLocation;
use crate::error::SourceError;

/// Mean daily motion of the Moon used by [`FixedSkySource`].
pub const MOON_DEG_PER_DAY: f64 = 13.2;

/// Fixed graha longitudes; only the Moon and Lagna move.
///
/// The calendar date is ignored. Within a day the Moon advances from its base
/// longitude at 13.2 deg/day starting at UTC midnight, and the Lagna turns
/// 15 deg per hour of local mean time:
/// `lagna = ((utc_hours + longitude / 15) * 15 + 180) mod 360`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedSkySource {
    /// Sidereal longitudes at UTC midnight, Sun..Saturn.
    pub grahas: [f64; 7],
    pub rahu: Option<f64>,
}

impl Default for FixedSkySource {
    /// Approximate sidereal sky of 12 October 1989.
    fn default() -> Self {
        Self {
            grahas: [175.0, 310.0, 195.0, 170.0, 75.0, 225.0, 255.0],
            rahu: Some(299.0),
        }
    }
}

impl FixedSkySource {
    pub fn new(grahas: [f64; 7], rahu: Option<f64>) -> Self {
        Self { grahas, rahu }
    }
}

impl super::PositionSource for FixedSkySource {
    fn sky_positions(
        &self,
        instant: NaiveDateTime,
        location: &AnchorLocation,
    ) -> Result<SkyPositions, SourceError> {
        let utc_hours = instant.num_seconds_from_midnight() as f64 / 3600.0;

        let mut grahas = self.grahas;
        grahas[1] = normalize_360(grahas[1] + utc_hours / 24.0 * MOON_DEG_PER_DAY);

        let lagna = normalize_360((utc_hours + location.longitude / 15.0) * 15.0 + 180.0);

        Ok(SkyPositions {
            grahas,
            rahu: self.rahu,
            lagna,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::PositionSource;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(1989, 10, 12)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn lagna_at_greenwich_midnight() {
        let src = FixedSkySource::default();
        let loc = AnchorLocation::new("Greenwich", 51.48, 0.0, "West");
        let sky = src.sky_positions(at(0, 0), &loc).unwrap();
        assert!((sky.lagna - 180.0).abs() < 1e-10);
    }

    #[test]
    fn lagna_turns_fifteen_degrees_per_hour() {
        let src = FixedSkySource::default();
        let loc = AnchorLocation::new("New Delhi", 28.6139, 77.2090, "North");
        let a = src.sky_positions(at(3, 0), &loc).unwrap().lagna;
        let b = src.sky_positions(at(4, 0), &loc).unwrap().lagna;
        assert!((normalize_360(b - a) - 15.0).abs() < 1e-9);
    }

    #[test]
    fn moon_advances_half_day() {
        let src = FixedSkySource::default();
        let loc = AnchorLocation::new("Bhuj", 23.242, 69.6669, "West");
        let sky = src.sky_positions(at(12, 0), &loc).unwrap();
        assert!((sky.grahas[1] - 316.6).abs() < 1e-9);
        // slow bodies untouched
        assert_eq!(sky.grahas[6], 255.0);
        assert_eq!(sky.rahu, Some(299.0));
    }
}
