//! Half-hour slot addressing.
//!
//! Slot `i` starts at `i * 30` minutes after midnight. Slot 48 is only
//! meaningful as an exclusive end bound and renders as `"24:00"`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::cell::{DAYS_PER_WEEK, SLOTS_PER_DAY};
use crate::error::{PlannerError, Result};

/// Minutes per slot.
pub const SLOT_MINUTES: usize = 30;

/// One (weekday, slot) coordinate.
///
/// Ordered by day, then slot. Renders as the host's `"day-slot"` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DaySlot {
    /// Weekday, 0 = Monday.
    pub day: usize,
    /// Half-hour slot index, 0 = 00:00.
    pub slot: usize,
}

impl DaySlot {
    pub fn new(day: usize, slot: usize) -> Self {
        Self { day, slot }
    }

    /// Whether this coordinate lies on the 7×48 grid.
    #[inline]
    pub fn in_grid(&self) -> bool {
        self.day < DAYS_PER_WEEK && self.slot < SLOTS_PER_DAY
    }
}

impl fmt::Display for DaySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.day, self.slot)
    }
}

impl FromStr for DaySlot {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        let bad = || PlannerError::InvalidSlotKey(s.to_string());
        let (day, slot) = s.split_once('-').ok_or_else(bad)?;
        let day = day.parse().map_err(|_| bad())?;
        let slot = slot.parse().map_err(|_| bad())?;
        Ok(Self { day, slot })
    }
}

/// Formats a slot index as a zero-padded `HH:MM` string.
///
/// ```
/// use recruit_planner::models::slot_to_time;
///
/// assert_eq!(slot_to_time(0), "00:00");
/// assert_eq!(slot_to_time(19), "09:30");
/// assert_eq!(slot_to_time(48), "24:00");
/// ```
pub fn slot_to_time(slot: usize) -> String {
    let minutes = slot * SLOT_MINUTES;
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Parses a `HH:MM` string into a slot index.
///
/// Accepts `00:00` through `24:00` on the 30-minute grid.
pub fn parse_slot_time(s: &str) -> Result<usize> {
    let bad = || PlannerError::InvalidTime(s.to_string());
    let (h, m) = s.split_once(':').ok_or_else(bad)?;
    let two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
    if !two_digits(h) || !two_digits(m) {
        return Err(bad());
    }
    let hours: usize = h.parse().map_err(|_| bad())?;
    let minutes: usize = m.parse().map_err(|_| bad())?;
    if minutes >= 60 || minutes % SLOT_MINUTES != 0 {
        return Err(bad());
    }
    let slot = hours * 2 + minutes / SLOT_MINUTES;
    if slot > SLOTS_PER_DAY {
        return Err(bad());
    }
    Ok(slot)
}
