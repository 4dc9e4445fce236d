//! Demand/supply coverage model.
//!
//! Generates synthetic per-week staffing matrices, classifies each cell's
//! supply gap, rolls weeks up into month/year calendars, and derives
//! suggested priority recruiting hours from under-staffed runs.
//!
//! # Flow
//!
//! ```text
//! CoverageModel::generate ──► CoverageMatrix ──┬─► cell_severity / classify_delta
//!                                              ├─► month_grid / year_grid
//!                                              ├─► suggest_priority_ranges
//!                                              └─► CoverageKpi
//! ```

mod generator;
mod kpi;
mod rollup;
mod severity;
mod suggest;

pub use generator::{generate_coverage_matrix, CoverageModel};
pub use kpi::{coverage_pct, gap_label, CoverageKpi};
pub use rollup::{
    month_grid, weekday_counts, year_grid, DayCell, MonthGrid, Stripe, WeekdayCounts,
    MONTH_GRID_CELLS,
};
pub use severity::{
    cell_severity, classify_delta, severity_of_delta, Classification, Severity,
    CLASSIFY_THRESHOLD,
};
pub use suggest::{
    all_times_suggestion, days_label, suggest_priority_ranges, suggest_priority_ranges_with,
    Suggestion,
};
