//! Lagna (Ascendant) from sidereal time.
//!
//! Standard spherical astronomy formulas (Meeus, "Astronomical Algorithms",
//! 2nd ed, Ch. 12-13). All outputs are tropical ecliptic longitudes; subtract
//! an ayanamsha for the sidereal value.

use std::f64::consts::TAU;

use crate::ayanamsha::J2000_JD;
use crate::util::normalize_360;

/// Mean obliquity of the ecliptic at J2000.0 in degrees.
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_291_111;

/// Greenwich Mean Sidereal Time in degrees [0, 360).
///
/// `jd_ut` is a UT Julian Date. Uses the Earth Rotation Angle plus the
/// Capitaine et al. 2003 polynomial.
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    let era = TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du);
    let t = du / 36525.0;
    let poly_arcsec = 0.014506 + 4612.156534 * t + 1.3915817 * t * t;
    normalize_360(era.to_degrees() + poly_arcsec / 3600.0)
}

/// Local Sidereal Time in degrees from GMST and east longitude.
pub fn local_sidereal_time_deg(gmst_deg: f64, longitude_east_deg: f64) -> f64 {
    normalize_360(gmst_deg + longitude_east_deg)
}

/// Ecliptic longitude of the Lagna in degrees [0, 360).
///
/// `Asc = atan2(-cos(LST), sin(LST)*cos(eps) + tan(phi)*sin(eps))`
pub fn lagna_longitude_deg(lst_deg: f64, latitude_deg: f64) -> f64 {
    let lst = lst_deg.to_radians();
    let eps = OBLIQUITY_J2000_DEG.to_radians();
    let phi = latitude_deg.to_radians();
    let asc = f64::atan2(-lst.cos(), lst.sin() * eps.cos() + phi.tan() * eps.sin());
    normalize_360(asc.to_degrees())
}
