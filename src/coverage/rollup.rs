//! Month and year rollups of a weekly coverage matrix.
//!
//! The coverage model is weekday-periodic, so every calendar date shares
//! the stripe of its weekday: the share of that weekday's open half-hours
//! classified green, yellow, and red.

use serde::{Deserialize, Serialize};

use super::severity::{classify_delta, Classification};
use crate::models::{roll_month, weekday_index, CoverageMatrix, YearMonth, DAYS_PER_WEEK};

/// Cells in a month grid (6 weeks × 7 days).
pub const MONTH_GRID_CELLS: usize = 42;

/// Open-slot classification counts for one weekday.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayCounts {
    pub green: usize,
    pub yellow: usize,
    pub red: usize,
    pub open: usize,
}

impl WeekdayCounts {
    fn record(&mut self, class: Classification) {
        self.open += 1;
        match class {
            Classification::Green => self.green += 1,
            Classification::Yellow => self.yellow += 1,
            Classification::Red => self.red += 1,
        }
    }

    /// Proportional stripe, or `None` when the weekday has no open slots.
    pub fn stripe(&self) -> Option<Stripe> {
        let total = self.green + self.yellow + self.red;
        if self.open == 0 || total == 0 {
            return None;
        }
        let pct = |n: usize| n as f64 / total as f64 * 100.0;
        Some(Stripe {
            green_pct: pct(self.green),
            yellow_pct: pct(self.yellow),
            red_pct: pct(self.red),
        })
    }
}

/// Green/yellow/red shares of a day, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stripe {
    pub green_pct: f64,
    pub yellow_pct: f64,
    pub red_pct: f64,
}

/// Counts each weekday's open slots by 3-bucket classification.
pub fn weekday_counts(matrix: &CoverageMatrix) -> [WeekdayCounts; DAYS_PER_WEEK] {
    let mut counts = [WeekdayCounts::default(); DAYS_PER_WEEK];
    for (day, row) in matrix.rows() {
        for cell in row.iter().filter(|c| !c.closed) {
            counts[day].record(classify_delta(cell.delta()));
        }
    }
    counts
}

/// One cell of a month calendar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DayCell {
    /// Padding outside the displayed month.
    Empty,
    /// Day of month whose weekday has no open slots.
    Closed { day: u32 },
    /// Day of month with its weekday's stripe.
    Stripe { day: u32, stripe: Stripe },
}

/// A month rendered as a Monday-first 6×7 grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthGrid {
    pub month: YearMonth,
    /// Always [`MONTH_GRID_CELLS`] long.
    pub cells: Vec<DayCell>,
}

/// Builds the month grid for a 0-based `month` of `year`.
///
/// Months chrono cannot represent come back fully empty.
pub fn month_grid(matrix: &CoverageMatrix, year: i32, month: u32) -> MonthGrid {
    month_grid_from_counts(&weekday_counts(matrix), roll_month(year, month, 0))
}

/// Builds all twelve month grids of a year.
pub fn year_grid(matrix: &CoverageMatrix, year: i32) -> Vec<MonthGrid> {
    let counts = weekday_counts(matrix);
    (0..12)
        .map(|m| month_grid_from_counts(&counts, YearMonth::new(year, m)))
        .collect()
}

fn month_grid_from_counts(counts: &[WeekdayCounts; DAYS_PER_WEEK], ym: YearMonth) -> MonthGrid {
    let mut cells = vec![DayCell::Empty; MONTH_GRID_CELLS];
    if let Some(first) = ym.first_day() {
        let lead = weekday_index(first);
        let last_day = ym.day_count() as usize;
        for (idx, cell) in cells.iter_mut().enumerate() {
            if idx < lead || idx - lead >= last_day {
                continue;
            }
            let day = (idx - lead + 1) as u32;
            let weekday = (lead + day as usize - 1) % DAYS_PER_WEEK;
            *cell = match counts[weekday].stripe() {
                Some(stripe) => DayCell::Stripe { day, stripe },
                None => DayCell::Closed { day },
            };
        }
    }
    MonthGrid { month: ym, cells }
}
