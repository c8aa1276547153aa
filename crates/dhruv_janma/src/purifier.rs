//! Purifier: trikona-reduced SAV and pure potential per house.
//!
//! Reads only the unreduced SAV of each house, so running it twice yields
//! the same cache.

use dhruv_vedic_base::trikona_sodhana;
use rayon::prelude::*;
use tracing::debug;

use crate::chart::ChartSnapshot;
use crate::matrix::SampleMatrix;

/// Fill the purifier cache of every house of one chart.
pub fn purify_chart(chart: &mut ChartSnapshot, multipliers: &[u32; 12]) {
    let reduced = trikona_sodhana(&chart.sav_by_rashi());
    for house in &mut chart.houses {
        let r = house.rashi.index() as usize;
        house.trikona_sav = reduced[r];
        house.pure_potential = reduced[r] as u32 * multipliers[r];
    }
}

/// Purify every chart of the matrix.
pub fn purify_matrix(matrix: &mut SampleMatrix, multipliers: &[u32; 12]) {
    debug!(entries = matrix.len(), "purifying matrix");
    matrix
        .entries_mut()
        .par_iter_mut()
        .for_each(|entry| purify_chart(&mut entry.chart, multipliers));
}
