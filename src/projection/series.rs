//! Daily applicant projection series.
//!
//! Each row holds one calendar day and the projected applicants per source
//! key. A source's value for day `i` of an `N`-day window is
//! `round2(rate · crest(i, N, k))`, where `k` is the source key's fixed
//! phase (see [`source_phase`]).

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::rate::{applicants_per_day, crest, source_phase, DEFAULT_SOURCE_PHASES};
use crate::models::{inclusive_day_count, safe_iso, Source};

/// Projected applicants for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyProjection {
    /// Day index within the window (0-based).
    pub day: usize,
    pub date: NaiveDate,
    /// Applicants per source key. Unproductive sources appear with 0.
    pub by_source: BTreeMap<String, f64>,
}

impl DailyProjection {
    /// Sum over all sources for the day.
    pub fn total(&self) -> f64 {
        self.by_source.values().sum()
    }

    /// Value for one source key (0 when absent).
    pub fn get(&self, key: &str) -> f64 {
        self.by_source.get(key).copied().unwrap_or(0.0)
    }

    /// Axis label, `"MM-DD"`.
    pub fn label(&self) -> String {
        self.date.format("%m-%d").to_string()
    }

    /// Short weekday, e.g. `"Sat"`.
    pub fn weekday_label(&self) -> String {
        self.date.format("%a").to_string()
    }
}

/// Projects applicants per day and per source over `[start, end]`.
///
/// A window with `end < start` is treated as the single day `start`.
///
/// ```
/// use chrono::NaiveDate;
/// use recruit_planner::models::Source;
/// use recruit_planner::projection::{project_daily_applicants, sum_projection};
///
/// let start = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 11, 7).unwrap();
/// let series = project_daily_applicants(&[Source::new("indeed", 200.0, 20.0)], start, end);
/// assert_eq!(series.len(), 7);
/// assert_eq!(series[0].label(), "11-01");
/// assert!(sum_projection(&series) > 0);
/// ```
pub fn project_daily_applicants(
    sources: &[Source],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<DailyProjection> {
    project_daily_applicants_with_phases(sources, start, end, &DEFAULT_SOURCE_PHASES)
}

/// Same as [`project_daily_applicants`] with an explicit key → crest phase
/// table. Keys missing from `phases` use their list position.
pub fn project_daily_applicants_with_phases<S: AsRef<str>>(
    sources: &[Source],
    start: NaiveDate,
    end: NaiveDate,
    phases: &[S],
) -> Vec<DailyProjection> {
    let days = inclusive_day_count(start, end);
    let rates: Vec<f64> = sources.iter().map(applicants_per_day).collect();
    let source_phases: Vec<usize> = sources
        .iter()
        .enumerate()
        .map(|(pos, s)| source_phase(&s.key, pos, phases))
        .collect();

    let series: Vec<DailyProjection> = (0..days)
        .map(|day| {
            let by_source = sources
                .iter()
                .zip(rates.iter().zip(&source_phases))
                .map(|(source, (&rate, &k))| {
                    let value = if rate > 0.0 {
                        round2(rate * crest(day, days, k))
                    } else {
                        0.0
                    };
                    (source.key.clone(), value)
                })
                .collect();
            DailyProjection {
                day,
                date: start + Duration::days(day as i64),
                by_source,
            }
        })
        .collect();

    debug!(
        days,
        sources = sources.len(),
        total = sum_projection(&series),
        "projected daily applicants"
    );
    series
}

/// Same as [`project_daily_applicants`] for ISO `YYYY-MM-DD` strings.
///
/// Malformed dates fall back to today.
pub fn project_daily_applicants_iso(
    sources: &[Source],
    start: &str,
    end: &str,
) -> Vec<DailyProjection> {
    project_daily_applicants(sources, safe_iso(start), safe_iso(end))
}

/// Grand total over the series, rounded to the nearest whole applicant.
pub fn sum_projection(series: &[DailyProjection]) -> i64 {
    series
        .iter()
        .flat_map(|row| row.by_source.values())
        .sum::<f64>()
        .round() as i64
}

/// Rounds to two decimals.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
