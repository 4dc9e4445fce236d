//! Applicant projection aggregator.
//!
//! Turns a source budget configuration and a date window into a per-day,
//! per-source applicant series, its rounded grand total, and stacked chart
//! layers.
//!
//! # Reference
//! Rates are flat budget/CPA quotients; the only time variation is the
//! deterministic crest curve. There is no randomness.

mod rate;
mod series;
mod stack;

pub use rate::{
    applicants_per_day, crest, source_phase, CREST_MAX, CREST_MIN, DEFAULT_SOURCE_PHASES,
};
pub use series::{
    project_daily_applicants, project_daily_applicants_iso, project_daily_applicants_with_phases,
    round2, sum_projection, DailyProjection,
};
pub use stack::{stack_series, Layer, StackedChart, StackedDay};
