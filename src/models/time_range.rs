//! Recurring priority time ranges.
//!
//! A [`TimeRange`] is the canonical persisted form of a job's or campaign's
//! priority recruiting hours: `{ start, end, days }` where `start`/`end` are
//! zero-padded `HH:MM` strings on the 30-minute grid and `end` is exclusive.
//!
//! `days == None` (or all seven days) means every day.

use serde::{Deserialize, Serialize};

use super::cell::{DAYS_PER_WEEK, DAY_NAMES};
use super::slot::parse_slot_time;
use crate::error::Result;

/// A recurring `[start, end)` window on a set of weekdays.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    /// Inclusive start, `HH:MM`.
    pub start: String,
    /// Exclusive end, `HH:MM` (`"24:00"` allowed).
    pub end: String,
    /// Weekdays (0 = Monday), sorted ascending without duplicates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<Vec<usize>>,
}

impl TimeRange {
    /// Creates a range applying to every day.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            days: None,
        }
    }

    /// Restricts the range to the given weekdays.
    ///
    /// Days are sorted and deduplicated; days outside `0..7` are dropped.
    pub fn with_days(mut self, days: impl IntoIterator<Item = usize>) -> Self {
        let mut days: Vec<usize> = days.into_iter().filter(|d| *d < DAYS_PER_WEEK).collect();
        days.sort_unstable();
        days.dedup();
        self.days = Some(days);
        self
    }

    /// Start/end as slot indices `[start, end)`.
    pub fn slot_bounds(&self) -> Result<(usize, usize)> {
        Ok((parse_slot_time(&self.start)?, parse_slot_time(&self.end)?))
    }

    /// Weekdays this range applies to. Absent days expand to all seven.
    pub fn effective_days(&self) -> Vec<usize> {
        match &self.days {
            Some(days) if !days.is_empty() => days.clone(),
            _ => (0..DAYS_PER_WEEK).collect(),
        }
    }

    /// Whether the range covers every weekday.
    pub fn is_every_day(&self) -> bool {
        self.effective_days().len() == DAYS_PER_WEEK
    }
}

/// Formats a day list for display.
///
/// Empty or missing → `""`, all seven → `"All days"`, otherwise
/// comma-separated short names.
///
/// ```
/// use recruit_planner::models::format_days;
///
/// assert_eq!(format_days(Some(&[0, 2])), "Mon, Wed");
/// assert_eq!(format_days(Some(&[0, 1, 2, 3, 4, 5, 6])), "All days");
/// assert_eq!(format_days(None), "");
/// ```
pub fn format_days(days: Option<&[usize]>) -> String {
    match days {
        None | Some([]) => String::new(),
        Some(d) if d.len() == DAYS_PER_WEEK => "All days".to_string(),
        Some(d) => d
            .iter()
            .filter_map(|i| DAY_NAMES.get(*i))
            .copied()
            .collect::<Vec<_>>()
            .join(", "),
    }
}
