//! Angle helpers shared by the lookup and astronomy modules.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Angle travelled going forward (increasing longitude) from `from_deg`
/// to `to_deg`, in [0, 360). Inputs need not be normalized.
pub fn forward_separation(from_deg: f64, to_deg: f64) -> f64 {
    normalize_360(to_deg - from_deg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert!((normalize_360(0.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_360_wraps() {
        assert!((normalize_360(360.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_large() {
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn separation_forward() {
        assert!((forward_separation(10.0, 130.0) - 120.0).abs() < 1e-12);
    }

    #[test]
    fn separation_wraps_when_behind() {
        assert!((forward_separation(350.0, 20.0) - 30.0).abs() < 1e-12);
    }

    #[test]
    fn separation_of_unnormalized_inputs() {
        assert!((forward_separation(-10.0, 725.0) - 15.0).abs() < 1e-10);
        assert!(forward_separation(400.0, 40.0).abs() < 1e-12);
    }
}
