//! Chart snapshot: one hypothetical birth chart with Ashtakavarga scores.
//!
//! A snapshot is built once from a set of sidereal longitudes. The only
//! fields written afterwards are the per-house purifier cache
//! (`trikona_sav`, `pure_potential`), which is always recomputable from the
//! unreduced SAV.

use chrono::NaiveDateTime;
use dhruv_vedic_base::{
    Bindus, Contributor, Graha, Nakshatra, Rashi, SAPTA_GRAHAS, calculate_ashtakavarga,
    calculate_fixed_ashtakavarga, kakshya_from_longitude, nakshatra_from_longitude, normalize_360,
    rashi_from_longitude,
};
use serde::Serialize;

use crate::config::AnchorLocation;
use crate::error::SourceError;

/// Sidereal longitudes delivered by a position source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyPositions {
    /// Sun..Saturn in `SAPTA_GRAHAS` order, degrees.
    pub grahas: [f64; 7],
    /// Mean or true Rahu, if the source tracks it.
    pub rahu: Option<f64>,
    /// Ascendant longitude in degrees.
    pub lagna: f64,
}

impl SkyPositions {
    fn check(&self) -> Result<(), SourceError> {
        for (g, lon) in SAPTA_GRAHAS.iter().zip(self.grahas) {
            if !lon.is_finite() {
                return Err(SourceError::Unusable(format!(
                    "{} longitude is {lon}",
                    g.english_name()
                )));
            }
        }
        if let Some(rahu) = self.rahu.filter(|lon| !lon.is_finite()) {
            return Err(SourceError::Unusable(format!("Rahu longitude is {rahu}")));
        }
        if !self.lagna.is_finite() {
            return Err(SourceError::Unusable(format!("Lagna longitude is {}", self.lagna)));
        }
        Ok(())
    }
}

/// Placement of one body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyPosition {
    pub graha: Graha,
    /// Sidereal longitude in [0, 360).
    pub longitude: f64,
    pub rashi: Rashi,
    pub nakshatra: Nakshatra,
    pub pada: u8,
    /// 1-based kakshya within the rashi (1-8).
    pub kakshya: u8,
    pub kakshya_lord: Contributor,
}

impl BodyPosition {
    pub fn from_longitude(graha: Graha, longitude: f64) -> Self {
        let longitude = normalize_360(longitude);
        let nak = nakshatra_from_longitude(longitude);
        let kakshya = kakshya_from_longitude(longitude);
        Self {
            graha,
            longitude,
            rashi: rashi_from_longitude(longitude).rashi,
            nakshatra: nak.nakshatra,
            pada: nak.pada,
            kakshya: kakshya.kakshya,
            kakshya_lord: kakshya.lord,
        }
    }
}

/// One of the twelve houses of a snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct House {
    /// 1-based house number.
    pub number: u8,
    pub rashi: Rashi,
    /// Sarvashtakavarga points of this rashi.
    pub sav: u8,
    /// Each graha's BAV points in this rashi (Sun..Saturn).
    pub bav: [u8; 7],
    /// SAV after both sodhana passes.
    pub shodhita: u8,
    /// SAV without the Lagna's contributions.
    pub fixed_sav: u8,
    pub fixed_shodhita: u8,
    /// Purifier cache: SAV after trikona reduction.
    pub trikona_sav: u8,
    /// Purifier cache: `trikona_sav` times the rashi multiplier.
    pub pure_potential: u32,
}

/// A fully scored chart for one instant and location.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSnapshot {
    /// UTC instant.
    pub instant: NaiveDateTime,
    pub location: AnchorLocation,
    /// Sun..Saturn.
    pub grahas: [BodyPosition; 7],
    pub rahu: Option<BodyPosition>,
    pub lagna_longitude: f64,
    pub lagna: Rashi,
    /// Houses 1..=12 at indices 0..12.
    pub houses: [House; 12],
}

impl ChartSnapshot {
    /// Score a chart from sidereal longitudes.
    pub fn from_sky(
        instant: NaiveDateTime,
        location: &AnchorLocation,
        sky: &SkyPositions,
    ) -> Result<Self, SourceError> {
        sky.check()?;

        let grahas: [BodyPosition; 7] =
            std::array::from_fn(|i| BodyPosition::from_longitude(SAPTA_GRAHAS[i], sky.grahas[i]));
        let rahu = sky.rahu.map(|lon| BodyPosition::from_longitude(Graha::Rahu, lon));
        let lagna_longitude = normalize_360(sky.lagna);
        let lagna = rashi_from_longitude(lagna_longitude).rashi;

        let graha_rashis: [u8; 7] = std::array::from_fn(|i| grahas[i].rashi.index());
        let full = calculate_ashtakavarga(&graha_rashis, lagna.index());
        let fixed = calculate_fixed_ashtakavarga(&graha_rashis);

        let houses: [House; 12] = std::array::from_fn(|h| {
            let rashi = lagna.nth(h as u8 + 1);
            let r = rashi.index() as usize;
            House {
                number: h as u8 + 1,
                rashi,
                sav: full.sav.total_points[r],
                bav: full.sav.breakdown[r],
                shodhita: full.shodhita.total_points[r],
                fixed_sav: fixed.sav.total_points[r],
                fixed_shodhita: fixed.shodhita.total_points[r],
                trikona_sav: 0,
                pure_potential: 0,
            }
        });

        Ok(Self {
            instant,
            location: location.clone(),
            grahas,
            rahu,
            lagna_longitude,
            lagna,
            houses,
        })
    }

    /// House by 1-based number. None outside 1..=12.
    pub fn house(&self, number: u8) -> Option<&House> {
        number
            .checked_sub(1)
            .and_then(|i| self.houses.get(i as usize))
    }

    /// House occupying a rashi.
    pub fn house_of(&self, rashi: Rashi) -> &House {
        &self.houses[self.lagna.count_to(rashi) as usize - 1]
    }

    /// Position of a graha. None for Ketu, and for Rahu when untracked.
    pub fn body(&self, graha: Graha) -> Option<&BodyPosition> {
        match graha {
            Graha::Rahu => self.rahu.as_ref(),
            Graha::Ketu => None,
            _ => self.grahas.get(graha.index() as usize),
        }
    }

    /// Rashi of one of the seven grahas.
    pub fn rashi_of(&self, graha: Graha) -> Option<Rashi> {
        self.body(graha).map(|b| b.rashi)
    }

    /// Unreduced SAV indexed by rashi (0 = Mesha).
    pub fn sav_by_rashi(&self) -> Bindus {
        let mut out = [0u8; 12];
        for house in &self.houses {
            out[house.rashi.index() as usize] = house.sav;
        }
        out
    }
}
