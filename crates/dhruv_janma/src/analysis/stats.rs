//! Descriptive statistics over houses and rashis.

use dhruv_vedic_base::{ALL_RASHIS, Graha, Rashi, rashi_lord};
use serde::Serialize;

use crate::matrix::SampleMatrix;

/// Count, mean, sample standard deviation, min and max of a sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    /// Sample deviation (n - 1 divisor); 0 for fewer than two values.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl Summary {
    /// Summarise a sample. An empty sample yields all zeros.
    pub fn from_values(values: &[f64]) -> Self {
        let count = values.len();
        if count == 0 {
            return Self::default();
        }
        let mean = values.iter().sum::<f64>() / count as f64;
        let std_dev = if count >= 2 {
            let ss: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
            (ss / (count - 1) as f64).sqrt()
        } else {
            0.0
        };
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self {
            count,
            mean,
            std_dev,
            min,
            max,
        }
    }
}

/// SAV distribution of one house across the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HouseStats {
    pub house: u8,
    pub sav: Summary,
}

/// Broad strength band of a rashi by mean SAV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StrengthTier {
    /// Mean SAV above 30.
    High,
    /// Mean SAV above 25.
    Average,
    Low,
}

impl StrengthTier {
    pub fn from_mean(mean: f64) -> Self {
        if mean > 30.0 {
            Self::High
        } else if mean > 25.0 {
            Self::Average
        } else {
            Self::Low
        }
    }
}

/// Scores of one rashi across every chart, whichever house it falls in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RashiStats {
    pub rashi: Rashi,
    /// Sign lord, the primary driver of the rashi's results.
    pub lord: Graha,
    pub sav: Summary,
    pub fixed_sav: Summary,
    pub mean_shodhita: f64,
    pub mean_fixed_shodhita: f64,
    pub mean_pure_potential: f64,
    pub tier: StrengthTier,
}

/// Whether a rashi's strength survives a change of birth time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SignKind {
    /// Mostly carried by the seven grahas; shared by everyone born that day.
    Fixed,
    /// Depends materially on the Lagna, hence on birth time and place.
    Variable,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignClassification {
    pub rashi: Rashi,
    /// Fraction of the mean SAV contributed by the Lagna.
    pub lagna_share: f64,
    pub kind: SignKind,
}

/// Per-house SAV summaries for houses 1..=12.
pub fn house_statistics(matrix: &SampleMatrix) -> Vec<HouseStats> {
    (0..12usize)
        .map(|h| {
            let values: Vec<f64> = matrix.iter().map(|e| e.chart.houses[h].sav as f64).collect();
            HouseStats {
                house: h as u8 + 1,
                sav: Summary::from_values(&values),
            }
        })
        .collect()
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Per-rashi summaries, Mesha..Meena.
pub fn rashi_statistics(matrix: &SampleMatrix) -> Vec<RashiStats> {
    ALL_RASHIS
        .iter()
        .map(|&rashi| {
            let houses: Vec<_> = matrix.iter().map(|e| *e.chart.house_of(rashi)).collect();
            let col = |f: fn(&crate::chart::House) -> f64| -> Vec<f64> {
                houses.iter().map(f).collect()
            };
            let sav = Summary::from_values(&col(|h| h.sav as f64));
            RashiStats {
                rashi,
                lord: rashi_lord(rashi),
                sav,
                fixed_sav: Summary::from_values(&col(|h| h.fixed_sav as f64)),
                mean_shodhita: mean(&col(|h| h.shodhita as f64)),
                mean_fixed_shodhita: mean(&col(|h| h.fixed_shodhita as f64)),
                mean_pure_potential: mean(&col(|h| h.pure_potential as f64)),
                tier: StrengthTier::from_mean(sav.mean),
            }
        })
        .collect()
}

/// Classify each rashi as fixed or variable by the Lagna's share of its SAV.
pub fn classify_signs(rashis: &[RashiStats], tolerance: f64) -> Vec<SignClassification> {
    rashis
        .iter()
        .map(|s| {
            let lagna_share = if s.sav.mean > 0.0 {
                (s.sav.mean - s.fixed_sav.mean) / s.sav.mean
            } else {
                0.0
            };
            let kind = if lagna_share <= tolerance {
                SignKind::Fixed
            } else {
                SignKind::Variable
            };
            SignClassification {
                rashi: s.rashi,
                lagna_share,
                kind,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_value_summary() {
        let s = Summary::from_values(&[29.0]);
        assert_eq!(s.count, 1);
        assert_eq!(s.mean, 29.0);
        assert_eq!(s.std_dev, 0.0);
        assert_eq!(s.min, 29.0);
        assert_eq!(s.max, 29.0);
    }

    #[test]
    fn empty_summary_is_zero() {
        assert_eq!(Summary::from_values(&[]), Summary::default());
    }

    #[test]
    fn sample_std_dev() {
        // mean 5, squared deviations sum 32, n-1 = 7
        let s = Summary::from_values(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((s.mean - 5.0).abs() < 1e-12);
        assert!((s.std_dev - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
        assert_eq!(s.min, 2.0);
        assert_eq!(s.max, 9.0);
    }

    #[test]
    fn tiers() {
        assert_eq!(StrengthTier::from_mean(30.5), StrengthTier::High);
        assert_eq!(StrengthTier::from_mean(30.0), StrengthTier::Average);
        assert_eq!(StrengthTier::from_mean(25.0), StrengthTier::Low);
    }

    fn stats(rashi: Rashi, sav: f64, fixed: f64) -> RashiStats {
        RashiStats {
            rashi,
            lord: rashi_lord(rashi),
            sav: Summary::from_values(&[sav]),
            fixed_sav: Summary::from_values(&[fixed]),
            mean_shodhita: 0.0,
            mean_fixed_shodhita: 0.0,
            mean_pure_potential: 0.0,
            tier: StrengthTier::from_mean(sav),
        }
    }

    #[test]
    fn classification_threshold() {
        let rashis = [
            stats(Rashi::Mesha, 32.0, 31.0),
            stats(Rashi::Vrishabha, 32.0, 28.0),
            stats(Rashi::Mithuna, 32.0, 27.0),
            stats(Rashi::Karka, 0.0, 0.0),
        ];
        let c = classify_signs(&rashis, 0.125);
        assert_eq!(c[0].kind, SignKind::Fixed);
        // exactly 4/32 = 0.125 is still fixed
        assert_eq!(c[1].kind, SignKind::Fixed);
        assert_eq!(c[2].kind, SignKind::Variable);
        assert_eq!(c[3].lagna_share, 0.0);
        assert_eq!(c[3].kind, SignKind::Fixed);
    }
}
