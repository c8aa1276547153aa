//! Mean lunar node (Rahu) longitude.
//!
//! Rahu is the Moon's mean ascending node, taken from the 5th Delaunay
//! argument (IERS Conventions 2010, Table 5.2e).

use crate::util::normalize_360;

/// Mean Rahu tropical longitude in degrees [0, 360).
///
/// `t` = Julian centuries since J2000.0.
pub fn mean_rahu_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let arcsec = 450160.398036 - 6962890.5431 * t + 7.4722 * t2 + 0.007702 * t3 - 0.00005939 * t4;
    normalize_360(arcsec / 3600.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_rahu_at_j2000_approx_125() {
        let deg = mean_rahu_deg(0.0);
        assert!((deg - 125.04).abs() < 0.1, "mean Rahu at J2000 = {deg}");
    }

    #[test]
    fn node_regresses_about_19_deg_per_year() {
        let r1 = mean_rahu_deg(0.0);
        let r2 = mean_rahu_deg(0.01);
        let moved = normalize_360(r1 - r2);
        assert!((moved - 19.34).abs() < 0.5, "regression = {moved} deg/yr");
    }
}
