//! Business-hours calendar and calendar-day arithmetic.
//!
//! Two concerns live here:
//! - The weekly open-hours policy that decides which half-hour cells of a
//!   coverage matrix are open.
//! - Date helpers for week/month navigation and display labels.
//!
//! # Time Model
//! Dates are [`NaiveDate`] calendar days. They carry no zone, so an ISO
//! string like `"2025-11-01"` is always November 1st regardless of where
//! the process runs.
//!
//! # Open Hours
//! Each weekday has one half-open hour window `[open_hour, close_hour)`.
//! A slot is open iff its hour (`slot / 2`) falls inside the window.

use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::cell::DAYS_PER_WEEK;
use crate::error::{PlannerError, Result};

/// Business hours for one weekday, `[open_hour, close_hour)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourWindow {
    /// First open hour (inclusive).
    pub open_hour: usize,
    /// First closed hour after opening (exclusive).
    pub close_hour: usize,
}

impl HourWindow {
    pub fn new(open_hour: usize, close_hour: usize) -> Self {
        Self {
            open_hour,
            close_hour,
        }
    }

    /// Window that never opens.
    pub fn closed_all_day() -> Self {
        Self::new(0, 0)
    }

    /// Open hours in this window.
    #[inline]
    pub fn duration_hours(&self) -> usize {
        self.close_hour.saturating_sub(self.open_hour)
    }

    /// Whether an hour of day falls within this window.
    #[inline]
    pub fn contains(&self, hour: usize) -> bool {
        hour >= self.open_hour && hour < self.close_hour
    }
}

/// Weekly open-hours policy, Monday first.
///
/// Days missing from the list are treated as closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklyHours {
    days: Vec<HourWindow>,
}

impl WeeklyHours {
    /// Creates a policy from per-day windows (Monday first).
    pub fn new(days: Vec<HourWindow>) -> Self {
        Self { days }
    }

    /// Mon–Fri 09:00–21:00, Sat–Sun 10:00–22:00.
    pub fn standard() -> Self {
        let weekday = HourWindow::new(9, 21);
        let weekend = HourWindow::new(10, 22);
        Self::new(vec![
            weekday, weekday, weekday, weekday, weekday, weekend, weekend,
        ])
    }

    /// The window for a weekday (closed if undefined).
    pub fn window(&self, day: usize) -> HourWindow {
        self.days
            .get(day)
            .copied()
            .unwrap_or_else(HourWindow::closed_all_day)
    }

    /// Whether a (day, slot) cell is within business hours.
    pub fn is_open(&self, day: usize, slot: usize) -> bool {
        day < DAYS_PER_WEEK && self.window(day).contains(slot / 2)
    }

    /// Open half-hour slots on a weekday.
    pub fn open_slots(&self, day: usize) -> usize {
        self.window(day).duration_hours() * 2
    }
}

impl Default for WeeklyHours {
    fn default() -> Self {
        Self::standard()
    }
}

// ================================
// Calendar days
// ================================

/// A month reference with a 0-based month (0 = January).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    /// 0 = January .. 11 = December.
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// First calendar day of the month, if representable.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
    }

    /// Number of days in the month (0 if the month is not representable).
    pub fn day_count(&self) -> u32 {
        let next = roll_month(self.year, self.month, 1);
        match (self.first_day(), next.first_day()) {
            (Some(first), Some(after)) => (after - first).num_days() as u32,
            _ => 0,
        }
    }
}

/// Moves a 0-based month by `delta` months, carrying into the year.
///
/// ```
/// use recruit_planner::models::{roll_month, YearMonth};
///
/// assert_eq!(roll_month(2025, 0, -1), YearMonth::new(2024, 11));
/// assert_eq!(roll_month(2025, 11, 1), YearMonth::new(2026, 0));
/// ```
pub fn roll_month(year: i32, month: u32, delta: i32) -> YearMonth {
    let total = year as i64 * 12 + month as i64 + delta as i64;
    YearMonth {
        year: total.div_euclid(12) as i32,
        month: total.rem_euclid(12) as u32,
    }
}

/// Weekday index with Monday = 0.
#[inline]
pub fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_monday() as usize
}

/// Parses a strict ISO `YYYY-MM-DD` string as a local calendar day.
pub fn parse_local_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| PlannerError::InvalidDate(s.to_string()))
}

/// Parses a date, falling back to `fallback` when malformed.
pub fn safe_iso_or(s: &str, fallback: NaiveDate) -> NaiveDate {
    parse_local_date(s).unwrap_or_else(|_| {
        warn!(input = s, %fallback, "malformed date, substituting fallback");
        fallback
    })
}

/// Parses a date, falling back to today's local date when malformed.
pub fn safe_iso(s: &str) -> NaiveDate {
    safe_iso_or(s, today())
}

/// Today's date in the local zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Short display label, e.g. `"Nov 1"`.
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Formats an ISO date string for display (`"2025-11-01"` → `"Nov 1"`).
///
/// Malformed input is returned unchanged.
pub fn format_iso_short(s: &str) -> String {
    match parse_local_date(s) {
        Ok(date) => format_short_date(date),
        Err(_) => s.to_string(),
    }
}

/// Number of calendar days in `[start, end]`, never less than 1.
pub fn inclusive_day_count(start: NaiveDate, end: NaiveDate) -> usize {
    ((end - start).num_days() + 1).max(1) as usize
}

/// Monday of the week containing `date`.
pub fn monday_of_date(date: NaiveDate) -> NaiveDate {
    date - Duration::days(weekday_index(date) as i64)
}

/// Monday of the week `week_offset` weeks away from the week containing `today`.
pub fn monday_of(today: NaiveDate, week_offset: i64) -> NaiveDate {
    monday_of_date(today) + Duration::weeks(week_offset)
}

/// Week offset (relative to `today`'s week) of the week containing `date`.
pub fn week_offset_of(today: NaiveDate, date: NaiveDate) -> i64 {
    (monday_of_date(date) - monday_of_date(today)).num_days() / 7
}

/// Header label for a planning week, e.g. `"Nov 3 – Nov 9"`.
pub fn week_label(today: NaiveDate, week_offset: i64) -> String {
    let start = monday_of(today, week_offset);
    let end = start + Duration::days(6);
    format!("{} – {}", format_short_date(start), format_short_date(end))
}
