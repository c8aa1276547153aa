//! Life activation windows: projected ingresses of slow bodies into the
//! strongest rashis.

use chrono::{Datelike, Days, NaiveDate};
use dhruv_vedic_base::{Graha, Rashi};
use serde::Serialize;
use tracing::debug;

use super::stats::RashiStats;
use crate::chart::ChartSnapshot;
use crate::config::{AnalysisConfig, TransitBody};

/// Average month length in hundredths of a day (30.44 days).
const CENTIDAYS_PER_MONTH: u64 = 3044;

/// Number of strongest rashis targeted.
pub const TARGET_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Significance {
    /// Ingress into the strongest rashi.
    High,
    Medium,
}

/// A projected period in which a slow body occupies a strong rashi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LifeWindow {
    pub graha: Graha,
    pub target: Rashi,
    /// Projected ingress date.
    pub entry: NaiveDate,
    /// Age in whole calendar years at ingress.
    pub age: i32,
    pub duration_months: u32,
    pub significance: Significance,
}

/// The `n` rashis with the highest mean SAV. Ties keep rashi order.
pub fn strongest_rashis(rashis: &[RashiStats], n: usize) -> Vec<Rashi> {
    let mut ranked: Vec<&RashiStats> = rashis.iter().collect();
    ranked.sort_by(|a, b| b.sav.mean.total_cmp(&a.sav.mean));
    ranked.into_iter().take(n).map(|s| s.rashi).collect()
}

/// Whole signs a body has moved between the birth year and `today`'s year.
pub fn signs_moved(origin: NaiveDate, today: NaiveDate, months_per_sign: u32) -> i64 {
    let months = (today.year() as i64 - origin.year() as i64) * 12;
    months.div_euclid(months_per_sign as i64)
}

/// Sign held by `body` today, projected from its natal rashi.
fn current_rashi(natal: Rashi, body: &TransitBody, moved: i64) -> Rashi {
    let step = if body.retrograde { -moved } else { moved };
    Rashi::from_index((natal.index() as i64 + step).rem_euclid(12) as u8)
}

/// Signs to travel from `from` to `to` in the body's direction of motion.
fn distance(from: Rashi, to: Rashi, retrograde: bool) -> u64 {
    let (a, b) = (from.index() as i64, to.index() as i64);
    let d = if retrograde { a - b } else { b - a };
    d.rem_euclid(12) as u64
}

/// Project each configured transit body into the strongest rashis.
///
/// Bodies the reference chart does not track (Rahu from a source without
/// nodes) are skipped. Windows are sorted by entry date and capped at
/// `config.max_windows`.
pub fn life_windows(
    reference: &ChartSnapshot,
    rashis: &[RashiStats],
    config: &AnalysisConfig,
    origin: NaiveDate,
    today: NaiveDate,
) -> Vec<LifeWindow> {
    let targets = strongest_rashis(rashis, TARGET_COUNT);
    let last_year = today.year() + config.horizon_years as i32;
    let mut windows = Vec::new();

    for body in &config.transits {
        let Some(natal) = reference.rashi_of(body.graha) else {
            debug!(graha = body.graha.english_name(), "no natal position, skipping transit");
            continue;
        };
        let moved = signs_moved(origin, today, body.months_per_sign);
        let now = current_rashi(natal, body, moved);

        for (rank, &target) in targets.iter().enumerate() {
            let signs = distance(now, target, body.retrograde);
            let days = signs * body.months_per_sign as u64 * CENTIDAYS_PER_MONTH / 100;
            let Some(entry) = today.checked_add_days(Days::new(days)) else {
                continue;
            };
            if entry.year() < today.year() || entry.year() > last_year {
                continue;
            }
            windows.push(LifeWindow {
                graha: body.graha,
                target,
                entry,
                age: entry.year() - origin.year(),
                duration_months: body.months_per_sign,
                significance: if rank == 0 {
                    Significance::High
                } else {
                    Significance::Medium
                },
            });
        }
    }

    // stable: equal dates keep body then rank order
    windows.sort_by_key(|w| w.entry);
    windows.truncate(config.max_windows);
    windows
}
