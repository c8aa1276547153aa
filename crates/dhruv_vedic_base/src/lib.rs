//! Closed-form Vedic primitives for birth-date signature analysis.
//!
//! This crate provides:
//! - Rashi, tattva/disha, graha, nakshatra, kakshya and tithi lookups
//! - Ashtakavarga rule tables (BAV/SAV) and the Trikona/Ekadhipatya reductions
//! - Mean-element astronomy helpers: ayanamsha, sidereal time, Lagna, mean nodes
//!
//! Everything here is pure arithmetic on longitudes and sign indices. No
//! ephemeris files or I/O are involved.

pub mod ashtakavarga;
pub mod ayanamsha;
pub mod graha;
pub mod kakshya;
pub mod lagna;
pub mod lunar_nodes;
pub mod nakshatra;
pub mod rashi;
pub mod tattva;
pub mod tithi;
pub mod util;

pub use ashtakavarga::{
    ALL_CONTRIBUTORS, AshtakavargaResult, BAV_TOTALS, BhinnaAshtakavarga, Bindus, Contributor,
    EKADHIPATYA_PAIRS, SAV_TOTAL, SarvaAshtakavarga, ShodhitaAshtakavarga, calculate_all_bav,
    calculate_all_bav_excluding, calculate_ashtakavarga, calculate_bav, calculate_bav_by_name,
    calculate_bav_excluding, calculate_fixed_ashtakavarga, calculate_sav, calculate_shodhita,
    ekadhipatya_sodhana, occupied_rashis, reduce_pair, trikona_sodhana,
};
pub use ayanamsha::{
    ALL_SYSTEMS, AyanamshaSystem, J2000_JD, ayanamsha_deg, general_precession_deg,
    jd_to_centuries, unix_seconds_to_jd,
};
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, rashi_lord};
pub use kakshya::{KAKSHYA_LORDS, KAKSHYA_SPAN, KakshyaInfo, kakshya_from_longitude};
pub use lagna::{OBLIQUITY_J2000_DEG, gmst_deg, lagna_longitude_deg, local_sidereal_time_deg};
pub use lunar_nodes::mean_rahu_deg;
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude,
};
pub use rashi::{ALL_RASHIS, Rashi, RashiInfo, nth_rashi_from, rashi_from_longitude};
pub use tattva::{ALL_TATTVAS, Disha, TRIKONA_GROUPS, Tattva};
pub use tithi::{Paksha, TITHI_SPAN, Tithi, TithiPosition, tithi_from_longitudes};
pub use util::{forward_separation, normalize_360};
