//! Kakshya: the eight Ashtakavarga sub-divisions of a rashi.
//!
//! Each 30 deg rashi splits into 8 kakshyas of 3 deg 45'. Each kakshya is
//! owned by one Ashtakavarga contributor, in descending order of orbital
//! period and ending with the Lagna.

use crate::ashtakavarga::Contributor;
use crate::rashi::rashi_from_longitude;

/// Span of one kakshya: 30/8 = 3.75 degrees.
pub const KAKSHYA_SPAN: f64 = 30.0 / 8.0;

/// Kakshya lords in order (kakshya 1 = Saturn .. kakshya 8 = Lagna).
pub const KAKSHYA_LORDS: [Contributor; 8] = [
    Contributor::Shani,
    Contributor::Guru,
    Contributor::Mangal,
    Contributor::Surya,
    Contributor::Shukra,
    Contributor::Buddh,
    Contributor::Chandra,
    Contributor::Lagna,
];

/// Kakshya placement of a longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KakshyaInfo {
    /// 1-based kakshya within the rashi (1-8).
    pub kakshya: u8,
    /// Contributor owning this kakshya.
    pub lord: Contributor,
    /// Degrees into the kakshya [0.0, 3.75).
    pub degrees_in_kakshya: f64,
}

/// Determine kakshya and its lord from sidereal ecliptic longitude.
pub fn kakshya_from_longitude(sidereal_lon_deg: f64) -> KakshyaInfo {
    let deg = rashi_from_longitude(sidereal_lon_deg).degrees_in_rashi;
    let idx = ((deg / KAKSHYA_SPAN).floor() as u8).min(7);
    KakshyaInfo {
        kakshya: idx + 1,
        lord: KAKSHYA_LORDS[idx as usize],
        degrees_in_kakshya: deg - idx as f64 * KAKSHYA_SPAN,
    }
}
