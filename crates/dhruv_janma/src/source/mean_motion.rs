//! Mean-element position source.
//!
//! Planets use the JPL "Approximate Positions of the Planets" Keplerian
//! elements (Standish, table 1, valid 1800-2050) reduced to geocentric
//! ecliptic longitude. The Moon uses its mean longitude plus the six largest
//! periodic terms (Meeus, Ch. 47). Rahu is the mean node. The Lagna comes
//! from GMST via the spherical-astronomy formula in `dhruv_vedic_base`.
//!
//! Longitudes are typically within a degree of a full ephemeris, which
//! is enough for sign-level scoring but not for cusp-sensitive work.

use chrono::NaiveDateTime;
use dhruv_vedic_base::{
    AyanamshaSystem, ayanamsha_deg, gmst_deg, jd_to_centuries, lagna_longitude_deg,
    local_sidereal_time_deg, mean_rahu_deg, normalize_360, unix_seconds_to_jd,
};

use crate::chart::SkyPositions;
use crate::config::AnchorLocation;
use crate::error::SourceError;

/// Keplerian elements at J2000 and their rates per Julian century.
///
/// Each pair is `(value, rate)`. Angles in degrees, `a` in AU.
#[derive(Debug, Clone, Copy)]
struct Elements {
    a: (f64, f64),
    e: (f64, f64),
    incl: (f64, f64),
    mean_lon: (f64, f64),
    peri_lon: (f64, f64),
    node_lon: (f64, f64),
}

const MERCURY: Elements = Elements {
    a: (0.38709927, 0.00000037),
    e: (0.20563593, 0.00001906),
    incl: (7.00497902, -0.00594749),
    mean_lon: (252.25032350, 149472.67411175),
    peri_lon: (77.45779628, 0.16047689),
    node_lon: (48.33076593, -0.12534081),
};

const VENUS: Elements = Elements {
    a: (0.72333566, 0.00000390),
    e: (0.00677672, -0.00004107),
    incl: (3.39467605, -0.00078890),
    mean_lon: (181.97909950, 58517.81538729),
    peri_lon: (131.60246718, 0.00268329),
    node_lon: (76.67984255, -0.27769418),
};

const EARTH_MOON: Elements = Elements {
    a: (1.00000261, 0.00000562),
    e: (0.01671123, -0.00004392),
    incl: (-0.00001531, -0.01294668),
    mean_lon: (100.46457166, 35999.37244981),
    peri_lon: (102.93768193, 0.32327364),
    node_lon: (0.0, 0.0),
};

const MARS: Elements = Elements {
    a: (1.52371034, 0.00001847),
    e: (0.09339410, 0.00007882),
    incl: (1.84969142, -0.00813131),
    mean_lon: (-4.55343205, 19140.30268499),
    peri_lon: (-23.94362959, 0.44441088),
    node_lon: (49.55953891, -0.29257343),
};

const JUPITER: Elements = Elements {
    a: (5.20288700, -0.00011607),
    e: (0.04838624, -0.00013253),
    incl: (1.30439695, -0.00183714),
    mean_lon: (34.39644051, 3034.74612775),
    peri_lon: (14.72847983, 0.21252668),
    node_lon: (100.47390909, 0.20469106),
};

const SATURN: Elements = Elements {
    a: (9.53667594, -0.00125060),
    e: (0.05386179, -0.00050991),
    incl: (2.48599187, 0.00193609),
    mean_lon: (49.95424423, 1222.49362201),
    peri_lon: (92.59887831, -0.41897216),
    node_lon: (113.66242448, -0.28867794),
};

fn at(pair: (f64, f64), t: f64) -> f64 {
    pair.0 + pair.1 * t
}

/// Solve Kepler's equation `M = E - e sin E` (radians).
fn eccentric_anomaly(mean_anomaly: f64, e: f64) -> f64 {
    let mut ea = mean_anomaly + e * mean_anomaly.sin();
    for _ in 0..12 {
        let delta = (mean_anomaly - (ea - e * ea.sin())) / (1.0 - e * ea.cos());
        ea += delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    ea
}

/// Heliocentric ecliptic (J2000) x, y of a body in AU.
fn heliocentric_xy(el: &Elements, t: f64) -> (f64, f64) {
    let a = at(el.a, t);
    let e = at(el.e, t);
    let incl = at(el.incl, t).to_radians();
    let peri = at(el.peri_lon, t);
    let node = at(el.node_lon, t);
    let arg_peri = (peri - node).to_radians();
    let node = node.to_radians();
    let mean_anomaly = normalize_360(at(el.mean_lon, t) - peri).to_radians();

    let ea = eccentric_anomaly(mean_anomaly, e);
    let xp = a * (ea.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ea.sin();

    let (sw, cw) = arg_peri.sin_cos();
    let (sn, cn) = node.sin_cos();
    let ci = incl.cos();
    let x = (cw * cn - sw * sn * ci) * xp + (-sw * cn - cw * sn * ci) * yp;
    let y = (cw * sn + sw * cn * ci) * xp + (-sw * sn + cw * cn * ci) * yp;
    (x, y)
}

/// Geocentric longitude of a planet, degrees.
fn geocentric_longitude(el: &Elements, earth: (f64, f64), t: f64) -> f64 {
    let (x, y) = heliocentric_xy(el, t);
    normalize_360((y - earth.1).atan2(x - earth.0).to_degrees())
}

/// Moon longitude from the mean arguments and main periodic terms.
fn moon_longitude(t: f64) -> f64 {
    let mean_lon = 218.3164477 + 481267.88123421 * t;
    let d = (297.8501921 + 445267.1114034 * t).to_radians();
    let m = (357.5291092 + 35999.0502909 * t).to_radians();
    let mp = (134.9633964 + 477198.8675055 * t).to_radians();
    let f = (93.2720950 + 483202.0175233 * t).to_radians();
    normalize_360(
        mean_lon + 6.288774 * mp.sin() + 1.274027 * (2.0 * d - mp).sin()
            + 0.658314 * (2.0 * d).sin()
            + 0.213618 * (2.0 * mp).sin()
            - 0.185116 * m.sin()
            - 0.114332 * (2.0 * f).sin(),
    )
}

/// Tropical geocentric longitudes of Sun..Saturn at `t` Julian centuries
/// from J2000.0.
pub fn mean_tropical_longitudes(t: f64) -> [f64; 7] {
    let earth = heliocentric_xy(&EARTH_MOON, t);
    let sun = normalize_360((-earth.1).atan2(-earth.0).to_degrees());
    [
        sun,
        moon_longitude(t),
        geocentric_longitude(&MARS, earth, t),
        geocentric_longitude(&MERCURY, earth, t),
        geocentric_longitude(&JUPITER, earth, t),
        geocentric_longitude(&VENUS, earth, t),
        geocentric_longitude(&SATURN, earth, t),
    ]
}

/// Sidereal positions from mean orbital elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeanMotionSource {
    pub ayanamsha: AyanamshaSystem,
}

impl MeanMotionSource {
    pub fn new(ayanamsha: AyanamshaSystem) -> Self {
        Self { ayanamsha }
    }
}

impl super::PositionSource for MeanMotionSource {
    fn sky_positions(
        &self,
        instant: NaiveDateTime,
        location: &AnchorLocation,
    ) -> Result<SkyPositions, SourceError> {
        let jd = unix_seconds_to_jd(instant.and_utc().timestamp());
        let t = jd_to_centuries(jd);
        let aya = ayanamsha_deg(self.ayanamsha, t);

        let grahas = mean_tropical_longitudes(t).map(|lon| normalize_360(lon - aya));
        let lst = local_sidereal_time_deg(gmst_deg(jd), location.longitude);
        let lagna = normalize_360(lagna_longitude_deg(lst, location.latitude) - aya);

        Ok(SkyPositions {
            grahas,
            rahu: Some(normalize_360(mean_rahu_deg(t) - aya)),
            lagna,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::PositionSource;
    use chrono::NaiveDate;
    use dhruv_vedic_base::{Rashi, rashi_from_longitude};

    fn angle_diff(a: f64, b: f64) -> f64 {
        let d = normalize_360(a - b);
        d.min(360.0 - d)
    }

    #[test]
    fn tropical_positions_at_j2000() {
        // Published geocentric longitudes at 2000-01-01 12:00 TT
        let expected = [280.37, 223.32, 327.96, 271.89, 25.25, 241.57, 40.40];
        let got = mean_tropical_longitudes(0.0);
        for (i, (&g, &e)) in got.iter().zip(expected.iter()).enumerate() {
            assert!(angle_diff(g, e) < 0.5, "body {i}: got {g}, expected {e}");
        }
    }

    #[test]
    fn kepler_circular_orbit_is_identity() {
        assert!((eccentric_anomaly(1.234, 0.0) - 1.234).abs() < 1e-15);
    }

    #[test]
    fn sidereal_signs_at_j2000() {
        let src = MeanMotionSource::default();
        let instant = NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let loc = AnchorLocation::new("New Delhi", 28.6139, 77.2090, "North");
        let sky = src.sky_positions(instant, &loc).unwrap();
        assert_eq!(rashi_from_longitude(sky.grahas[0]).rashi, Rashi::Dhanu);
        assert_eq!(rashi_from_longitude(sky.grahas[1]).rashi, Rashi::Tula);
        assert_eq!(rashi_from_longitude(sky.grahas[6]).rashi, Rashi::Mesha);
        let rahu = sky.rahu.unwrap();
        // mean node 125.04 tropical → ~101.2 sidereal
        assert!(angle_diff(rahu, 101.19) < 0.1, "rahu = {rahu}");
    }

    #[test]
    fn lagna_turns_through_a_day() {
        let src = MeanMotionSource::default();
        let loc = AnchorLocation::new("Chennai", 13.0827, 80.2707, "South");
        let day = NaiveDate::from_ymd_opt(1989, 10, 12).unwrap();
        let mut seen = std::collections::BTreeSet::new();
        for h in 0..24 {
            let sky = src
                .sky_positions(day.and_hms_opt(h, 0, 0).unwrap(), &loc)
                .unwrap();
            seen.insert(rashi_from_longitude(sky.lagna).rashi);
        }
        // every sign rises at least once in a day at this latitude
        assert_eq!(seen.len(), 12);
    }
}
