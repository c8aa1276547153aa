//! Position sources: where sidereal longitudes come from.
//!
//! The engine only needs longitudes for the seven grahas, optionally Rahu,
//! and the Lagna at a given UTC instant and place. Anything that can supply
//! them implements [`PositionSource`]. Two deterministic sources ship with
//! the crate:
//!
//! - [`FixedSkySource`]: a frozen sky with a moving Moon and rotating Lagna,
//!   for tests and demos.
//! - [`MeanMotionSource`]: mean orbital elements, good to about a degree.

mod fixed;
mod mean_motion;

use chrono::NaiveDateTime;

use crate::chart::{ChartSnapshot, SkyPositions};
use crate::config::AnchorLocation;
use crate::error::SourceError;

pub use fixed::FixedSkySource;
pub use mean_motion::{MeanMotionSource, mean_tropical_longitudes};

/// Supplies sidereal positions for an instant and place.
///
/// Implementations are called from many threads at once.
pub trait PositionSource: Sync {
    fn sky_positions(
        &self,
        instant: NaiveDateTime,
        location: &AnchorLocation,
    ) -> Result<SkyPositions, SourceError>;
}

impl<S: PositionSource + ?Sized> PositionSource for &S {
    fn sky_positions(
        &self,
        instant: NaiveDateTime,
        location: &AnchorLocation,
    ) -> Result<SkyPositions, SourceError> {
        (**self).sky_positions(instant, location)
    }
}

impl<S: PositionSource + ?Sized> PositionSource for Box<S> {
    fn sky_positions(
        &self,
        instant: NaiveDateTime,
        location: &AnchorLocation,
    ) -> Result<SkyPositions, SourceError> {
        (**self).sky_positions(instant, location)
    }
}

/// Query the source and score the resulting chart.
pub fn compute_chart<S: PositionSource + ?Sized>(
    source: &S,
    instant: NaiveDateTime,
    location: &AnchorLocation,
) -> Result<ChartSnapshot, SourceError> {
    let sky = source.sky_positions(instant, location)?;
    ChartSnapshot::from_sky(instant, location, &sky)
}
