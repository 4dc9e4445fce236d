//! Planning domain models.
//!
//! Plain data exchanged with the host dashboard: the coverage grid, slot
//! addressing, persisted time ranges, acquisition sources, campaigns, and
//! the business-hours calendar.
//!
//! # Grid Conventions
//!
//! | Axis | Range | Origin |
//! |------|-------|--------|
//! | Day | 0..7 | Monday |
//! | Slot | 0..48 | 00:00, 30 minutes each |

mod calendar;
mod campaign;
mod cell;
mod slot;
mod source;
mod time_range;

pub use calendar::{
    format_iso_short, format_short_date, inclusive_day_count, monday_of, monday_of_date,
    parse_local_date, roll_month, safe_iso, safe_iso_or, today, week_label, week_offset_of,
    weekday_index, HourWindow, WeeklyHours, YearMonth,
};
pub use campaign::{Campaign, CampaignStatus, EndCriterion};
pub use cell::{
    relative_gap, CoverageCell, CoverageMatrix, DAYS_PER_WEEK, DAY_NAMES, SLOTS_PER_DAY,
};
pub use slot::{parse_slot_time, slot_to_time, DaySlot, SLOT_MINUTES};
pub use source::Source;
pub use time_range::{format_days, TimeRange};
