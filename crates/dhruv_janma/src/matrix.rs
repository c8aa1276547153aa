//! Sampling matrix: one chart per (time slice, location) cell.
//!
//! Cells are computed in parallel and stored in slice-major order, so the
//! entry for `(t, l)` lives at index `t * locations + l`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::chart::ChartSnapshot;
use crate::config::{AnchorLocation, ReferenceSample, SamplingConfig};
use crate::error::{JanmaError, SourceError};
use crate::source::{PositionSource, compute_chart};

/// A sampled instant of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlice {
    pub index: usize,
    /// UTC instant.
    pub instant: NaiveDateTime,
}

/// Instants sampled for `date`: UTC midnight plus `i * slice_minutes`.
pub fn time_slices(date: NaiveDate, config: &SamplingConfig) -> Vec<TimeSlice> {
    let midnight = date.and_time(NaiveTime::MIN);
    (0..config.time_slices as usize)
        .map(|index| TimeSlice {
            index,
            instant: midnight + TimeDelta::minutes(index as i64 * config.slice_minutes as i64),
        })
        .collect()
}

/// One cell of the matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixEntry {
    pub time_slice: usize,
    pub location: usize,
    pub chart: ChartSnapshot,
}

/// The full time x location grid of charts for a day.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleMatrix {
    entries: Vec<MatrixEntry>,
    time_slices: usize,
    locations: usize,
}

impl SampleMatrix {
    /// Build a matrix from entries in any order.
    ///
    /// Every `(time_slice, location)` pair of the `time_slices x locations`
    /// grid must appear exactly once.
    pub fn from_entries(
        mut entries: Vec<MatrixEntry>,
        time_slices: usize,
        locations: usize,
    ) -> Result<Self, JanmaError> {
        let expected = time_slices * locations;
        if entries.len() != expected {
            return Err(JanmaError::MatrixSize {
                expected,
                actual: entries.len(),
            });
        }

        let mut seen = vec![false; expected];
        for e in &entries {
            let cell = (e.time_slice < time_slices && e.location < locations)
                .then(|| e.time_slice * locations + e.location);
            match cell {
                Some(i) if !seen[i] => seen[i] = true,
                _ => {
                    return Err(JanmaError::MatrixCoverage {
                        time_slice: e.time_slice,
                        location: e.location,
                    });
                }
            }
        }

        entries.sort_by_key(|e| (e.time_slice, e.location));
        Ok(Self {
            entries,
            time_slices,
            locations,
        })
    }

    pub fn entry(&self, time_slice: usize, location: usize) -> Option<&MatrixEntry> {
        if time_slice >= self.time_slices || location >= self.locations {
            return None;
        }
        self.entries.get(time_slice * self.locations + location)
    }

    pub fn reference(&self, reference: ReferenceSample) -> Option<&MatrixEntry> {
        self.entry(reference.time_slice, reference.location)
    }

    /// Entries of one location, in time order.
    pub fn at_location(&self, location: usize) -> impl Iterator<Item = &MatrixEntry> {
        self.entries.iter().filter(move |e| e.location == location)
    }

    pub fn entries(&self) -> &[MatrixEntry] {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [MatrixEntry] {
        &mut self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatrixEntry> {
        self.entries.iter()
    }

    pub fn time_slices(&self) -> usize {
        self.time_slices
    }

    pub fn locations(&self) -> usize {
        self.locations
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a SampleMatrix {
    type Item = &'a MatrixEntry;
    type IntoIter = std::slice::Iter<'a, MatrixEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn compute_cell<S: PositionSource + ?Sized>(
    source: &S,
    slice: &TimeSlice,
    location_index: usize,
    location: &AnchorLocation,
    retries: u32,
) -> Result<MatrixEntry, JanmaError> {
    let mut attempt = 0;
    loop {
        match compute_chart(source, slice.instant, location) {
            Ok(chart) => {
                return Ok(MatrixEntry {
                    time_slice: slice.index,
                    location: location_index,
                    chart,
                });
            }
            Err(err) if err.is_transient() && attempt < retries => {
                attempt += 1;
                warn!(
                    time_slice = slice.index,
                    location = %location.name,
                    attempt,
                    error = %err,
                    "retrying cell"
                );
            }
            Err(source_err) => {
                return Err(cell_error(slice.index, location_index, source_err));
            }
        }
    }
}

fn cell_error(time_slice: usize, location: usize, source: SourceError) -> JanmaError {
    JanmaError::Source {
        time_slice,
        location,
        source,
    }
}

/// Cast one chart per cell of the `time_slices x locations` grid for `date`.
///
/// A cell failing with a transient source error is retried up to
/// `source_retries` times. Any remaining failure aborts the whole run.
pub fn generate_matrix<S: PositionSource + ?Sized>(
    source: &S,
    date: NaiveDate,
    config: &SamplingConfig,
) -> Result<SampleMatrix, JanmaError> {
    config.validate()?;

    let slices = time_slices(date, config);
    let n_loc = config.locations.len();
    let cells = slices.len() * n_loc;
    debug!(%date, time_slices = slices.len(), locations = n_loc, cells, "generating matrix");

    let entries = (0..cells)
        .into_par_iter()
        .map(|cell| {
            let slice = &slices[cell / n_loc];
            let l = cell % n_loc;
            compute_cell(source, slice, l, &config.locations[l], config.source_retries)
        })
        .collect::<Result<Vec<_>, _>>()?;

    SampleMatrix::from_entries(entries, slices.len(), n_loc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnchorLocation;
    use crate::source::FixedSkySource;
    use chrono::Timelike;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(1989, 10, 12).unwrap()
    }

    fn small_config() -> SamplingConfig {
        SamplingConfig {
            time_slices: 4,
            slice_minutes: 360,
            locations: vec![
                AnchorLocation::new("Bhuj", 23.242, 69.6669, "West"),
                AnchorLocation::new("Guwahati", 26.1445, 91.7362, "East"),
            ],
            ..SamplingConfig::default()
        }
    }

    #[test]
    fn slices_start_at_midnight() {
        let slices = time_slices(date(), &SamplingConfig::default());
        assert_eq!(slices.len(), 96);
        assert_eq!(slices[0].instant.num_seconds_from_midnight(), 0);
        assert_eq!(slices[1].instant.minute(), 15);
        assert_eq!(slices[95].instant.hour(), 23);
        assert_eq!(slices[95].instant.minute(), 45);
    }

    #[test]
    fn matrix_is_slice_major() {
        let m = generate_matrix(&FixedSkySource::default(), date(), &small_config()).unwrap();
        assert_eq!(m.len(), 8);
        for (i, e) in m.iter().enumerate() {
            assert_eq!(e.time_slice, i / 2);
            assert_eq!(e.location, i % 2);
        }
        assert_eq!(m.entry(2, 1).map(|e| e.chart.location.name.as_str()), Some("Guwahati"));
        assert!(m.entry(4, 0).is_none());
        assert_eq!(m.at_location(1).count(), 4);
    }

    #[test]
    fn from_entries_rejects_wrong_size() {
        let m = generate_matrix(&FixedSkySource::default(), date(), &small_config()).unwrap();
        let mut entries = m.entries().to_vec();
        entries.pop();
        assert!(matches!(
            SampleMatrix::from_entries(entries, 4, 2),
            Err(JanmaError::MatrixSize { expected: 8, actual: 7 })
        ));
    }

    #[test]
    fn from_entries_rejects_duplicates() {
        let m = generate_matrix(&FixedSkySource::default(), date(), &small_config()).unwrap();
        let mut entries = m.entries().to_vec();
        entries[7] = entries[0].clone();
        assert!(matches!(
            SampleMatrix::from_entries(entries, 4, 2),
            Err(JanmaError::MatrixCoverage { time_slice: 0, location: 0 })
        ));
    }

    #[test]
    fn from_entries_sorts() {
        let m = generate_matrix(&FixedSkySource::default(), date(), &small_config()).unwrap();
        let mut entries = m.entries().to_vec();
        entries.reverse();
        let rebuilt = SampleMatrix::from_entries(entries, 4, 2).unwrap();
        assert_eq!(rebuilt, m);
    }

    #[test]
    fn invalid_config_rejected_before_work() {
        let cfg = SamplingConfig {
            slice_minutes: 0,
            ..small_config()
        };
        assert!(matches!(
            generate_matrix(&FixedSkySource::default(), date(), &cfg),
            Err(JanmaError::Config(_))
        ));
    }
}
