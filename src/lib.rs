//! Recruiting-operations planning core.
//!
//! Pure, synchronous computations behind a staffing dashboard: where the
//! team is short-handed, which hours to prioritize for hiring, and how many
//! applicants a budget buys over a campaign window.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `CoverageMatrix`, `DaySlot`, `TimeRange`,
//!   `Source`, `Campaign`, `WeeklyHours`, date helpers
//! - **`coverage`**: Synthetic demand/supply matrices, severity buckets,
//!   month/year rollups, priority-range suggestions, KPIs
//! - **`ranges`**: Slot selection editing and the slot ⇄ time-range codec
//! - **`projection`**: Per-day, per-source applicant projection, totals,
//!   stacked chart layers
//! - **`validation`**: Input integrity checks (malformed times, duplicate
//!   source keys, negative amounts, inverted date ranges)
//! - **`config`**: Demo tables (open hours, role demand, location targets,
//!   default sources) as a serde-loadable `PlannerConfig`
//!
//! # Architecture
//!
//! Every algorithm entry point is total over well-typed input: empty input
//! yields empty output, bad amounts are clamped and malformed dates fall
//! back to today, with a `tracing` event recording the substitution. Strict
//! parsers return [`Result`] for hosts that prefer to reject input.
//!
//! # Example
//!
//! ```
//! use recruit_planner::coverage::{generate_coverage_matrix, suggest_priority_ranges};
//! use recruit_planner::ranges::{decode_ranges_to_slots, encode_slots_to_ranges};
//!
//! let matrix = generate_coverage_matrix(Some("Cook"), 0, None);
//! let ranges: Vec<_> = suggest_priority_ranges(&matrix, 3)
//!     .iter()
//!     .map(|s| s.to_time_range())
//!     .collect();
//! let slots = decode_ranges_to_slots(&ranges);
//! assert_eq!(decode_ranges_to_slots(&encode_slots_to_ranges(&slots)), slots);
//! ```

pub mod config;
pub mod coverage;
pub mod error;
pub mod models;
pub mod projection;
pub mod ranges;
pub mod validation;

pub use error::{PlannerError, Result};
