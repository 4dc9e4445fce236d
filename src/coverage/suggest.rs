//! Suggested priority recruiting ranges.
//!
//! # Algorithm
//!
//! 1. For each day, collect open cells classified red, with magnitude `-delta`.
//! 2. Group gap-free slot runs; keep runs of at least `min_run_slots`.
//! 3. Score each run by its mean magnitude.
//! 4. Merge runs with identical `[start, end)` across days into one
//!    suggestion (score = mean of the merged runs' scores).
//! 5. Sort by descending score, keep the top `max_suggestions`.
//!
//! A constant "All Times" suggestion is offered alongside, unranked.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::severity::{classify_delta, Classification};
use crate::config::SuggestionConfig;
use crate::models::{slot_to_time, CoverageMatrix, TimeRange, DAYS_PER_WEEK, DAY_NAMES};

/// A ranked suggestion for priority recruiting hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub start: String,
    pub end: String,
    /// Weekdays, sorted ascending.
    pub days: Vec<usize>,
    /// Display label, e.g. `"Mon-Fri 17:00-20:00"`.
    pub label: String,
    /// Mean shortfall magnitude (`-delta`); higher is worse.
    pub severity: f64,
}

impl Suggestion {
    /// The range a host stores when the planner accepts this suggestion.
    pub fn to_time_range(&self) -> TimeRange {
        TimeRange::new(self.start.clone(), self.end.clone()).with_days(self.days.iter().copied())
    }
}

/// The always-available "All Times" suggestion (08:00–23:30, every day).
pub fn all_times_suggestion() -> Suggestion {
    Suggestion {
        start: "08:00".to_string(),
        end: "23:30".to_string(),
        days: (0..DAYS_PER_WEEK).collect(),
        label: "All Times".to_string(),
        severity: 0.0,
    }
}

/// Ranks under-staffed runs with default parameters (runs ≥ 2 hours).
///
/// ```
/// use recruit_planner::coverage::suggest_priority_ranges;
/// use recruit_planner::models::{CoverageCell, CoverageMatrix};
///
/// let mut m = CoverageMatrix::all_closed();
/// for slot in 34..40 {
///     m.set(0, slot, CoverageCell::open(10.0, 6.0));
/// }
/// let s = suggest_priority_ranges(&m, 3);
/// assert_eq!(s.len(), 1);
/// assert_eq!(s[0].label, "Mon 17:00-20:00");
/// ```
pub fn suggest_priority_ranges(matrix: &CoverageMatrix, max_suggestions: usize) -> Vec<Suggestion> {
    let params = SuggestionConfig {
        max_suggestions,
        ..SuggestionConfig::default()
    };
    suggest_priority_ranges_with(matrix, &params)
}

/// Ranks under-staffed runs with explicit parameters.
pub fn suggest_priority_ranges_with(
    matrix: &CoverageMatrix,
    params: &SuggestionConfig,
) -> Vec<Suggestion> {
    let min_run = params.min_run_slots.max(1);
    // (start, end) → (days, per-run mean magnitudes)
    let mut merged: BTreeMap<(usize, usize), (Vec<usize>, Vec<f64>)> = BTreeMap::new();

    for (day, row) in matrix.rows() {
        let mut run: Vec<(usize, f64)> = Vec::new();
        let mut flush = |run: &mut Vec<(usize, f64)>| {
            if run.len() >= min_run {
                let start = run[0].0;
                let end = run[run.len() - 1].0 + 1;
                let mean = run.iter().map(|(_, m)| m).sum::<f64>() / run.len() as f64;
                let entry = merged.entry((start, end)).or_default();
                entry.0.push(day);
                entry.1.push(mean);
            }
            run.clear();
        };

        for (slot, cell) in row.iter().enumerate() {
            if cell.closed {
                flush(&mut run);
                continue;
            }
            let delta = cell.delta();
            if classify_delta(delta) != Classification::Red {
                flush(&mut run);
                continue;
            }
            run.push((slot, -delta));
        }
        flush(&mut run);
    }

    let mut suggestions: Vec<Suggestion> = merged
        .into_iter()
        .map(|((start, end), (days, means))| {
            let severity = means.iter().sum::<f64>() / means.len() as f64;
            let start = slot_to_time(start);
            let end = slot_to_time(end);
            let label = format!("{} {start}-{end}", days_label(&days));
            Suggestion {
                start,
                end,
                days,
                label,
                severity,
            }
        })
        .collect();

    suggestions.sort_by(|a, b| b.severity.total_cmp(&a.severity));
    suggestions.truncate(params.max_suggestions);
    debug!(count = suggestions.len(), "ranked priority range suggestions");
    suggestions
}

/// Describes a sorted day list: `"All Week"`, `"Mon-Fri"`, `"Weekend"`,
/// a single day, a contiguous span (`"Tue-Thu"`), or a comma list.
pub fn days_label(days: &[usize]) -> String {
    let name = |d: usize| DAY_NAMES.get(d).copied().unwrap_or("?");
    match days {
        [] => String::new(),
        _ if days.len() == DAYS_PER_WEEK => "All Week".to_string(),
        [0, 1, 2, 3, 4] => "Mon-Fri".to_string(),
        [5, 6] => "Weekend".to_string(),
        [d] => name(*d).to_string(),
        _ if days.windows(2).all(|w| w[1] == w[0] + 1) => {
            format!("{}-{}", name(days[0]), name(days[days.len() - 1]))
        }
        _ => days.iter().map(|d| name(*d)).collect::<Vec<_>>().join(", "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CoverageCell;

    fn short(m: &mut CoverageMatrix, day: usize, slots: std::ops::Range<usize>, supply: f64) {
        for slot in slots {
            m.set(day, slot, CoverageCell::open(10.0, supply));
        }
    }

    #[test]
    fn test_days_label() {
        assert_eq!(days_label(&[0, 1, 2, 3, 4, 5, 6]), "All Week");
        assert_eq!(days_label(&[0, 1, 2, 3, 4]), "Mon-Fri");
        assert_eq!(days_label(&[5, 6]), "Weekend");
        assert_eq!(days_label(&[1, 2, 3]), "Tue-Thu");
        assert_eq!(days_label(&[0, 2]), "Mon, Wed");
        assert_eq!(days_label(&[4]), "Fri");
    }

    #[test]
    fn test_short_runs_ignored() {
        let mut m = CoverageMatrix::all_closed();
        short(&mut m, 0, 30..33, 5.0); // 3 slots only
        assert!(suggest_priority_ranges(&m, 3).is_empty());
    }

    #[test]
    fn test_gap_splits_run() {
        let mut m = CoverageMatrix::all_closed();
        short(&mut m, 0, 20..23, 5.0);
        m.set(0, 23, CoverageCell::open(10.0, 10.0)); // balanced breaks the run
        short(&mut m, 0, 24..27, 5.0);
        assert!(suggest_priority_ranges(&m, 3).is_empty());
    }

    #[test]
    fn test_merge_across_days() {
        let mut m = CoverageMatrix::all_closed();
        for day in 0..5 {
            short(&mut m, day, 34..40, 7.0);
        }
        let s = suggest_priority_ranges(&m, 3);
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].days, vec![0, 1, 2, 3, 4]);
        assert_eq!(s[0].label, "Mon-Fri 17:00-20:00");
        assert!((s[0].severity - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_sorted_by_severity_and_truncated() {
        let mut m = CoverageMatrix::all_closed();
        short(&mut m, 0, 18..22, 9.0); // -0.1
        short(&mut m, 1, 24..28, 5.0); // -0.5
        short(&mut m, 2, 30..34, 7.0); // -0.3
        short(&mut m, 3, 36..40, 8.0); // -0.2
        let s = suggest_priority_ranges(&m, 3);
        assert_eq!(s.len(), 3);
        assert_eq!(s[0].days, vec![1]);
        assert_eq!(s[1].days, vec![2]);
        assert_eq!(s[2].days, vec![3]);
        assert!(s.windows(2).all(|w| w[0].severity >= w[1].severity));
    }

    #[test]
    fn test_weekend_label() {
        let mut m = CoverageMatrix::all_closed();
        short(&mut m, 5, 36..44, 6.0);
        short(&mut m, 6, 36..44, 6.0);
        let s = suggest_priority_ranges(&m, 3);
        assert_eq!(s[0].label, "Weekend 18:00-22:00");
        assert_eq!(s[0].to_time_range(), TimeRange::new("18:00", "22:00").with_days([5, 6]));
    }

    #[test]
    fn test_custom_min_run() {
        let mut m = CoverageMatrix::all_closed();
        short(&mut m, 0, 30..32, 5.0);
        let params = SuggestionConfig {
            min_run_slots: 2,
            max_suggestions: 3,
        };
        assert_eq!(suggest_priority_ranges_with(&m, &params).len(), 1);
    }

    #[test]
    fn test_all_times() {
        let s = all_times_suggestion();
        assert_eq!(s.label, "All Times");
        assert_eq!((s.start.as_str(), s.end.as_str()), ("08:00", "23:30"));
        assert_eq!(s.days.len(), 7);
    }
}
