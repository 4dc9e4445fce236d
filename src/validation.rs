//! Input validation for planner records.
//!
//! The algorithm entry points are total and quietly clamp or skip bad
//! input. These checks let a host reject such input up front instead.
//! Detects:
//! - Malformed or off-grid `HH:MM` times
//! - Empty or inverted time ranges
//! - Weekdays outside `0..7` and unsorted/duplicated day lists
//! - Duplicate source keys
//! - Negative or non-finite budgets, caps and CPAs
//! - Campaign end dates before the start date
//!
//! All issues are collected, not just the first.

use std::collections::HashSet;

use crate::models::{parse_slot_time, Campaign, EndCriterion, Source, TimeRange, DAYS_PER_WEEK};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A time is not `HH:MM` on the 30-minute grid.
    MalformedTime,
    /// A range ends at or before its start.
    EmptyRange,
    /// A weekday index is 7 or larger.
    DayOutOfRange,
    /// A day list is not strictly ascending.
    UnsortedDays,
    /// Two sources share the same key.
    DuplicateSourceKey,
    /// A budget, cap or CPA is negative or not finite.
    NegativeAmount,
    /// A campaign ends before it starts.
    InvalidDateRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a list of priority time ranges.
///
/// Checks:
/// 1. `start` and `end` parse as grid times
/// 2. `start < end`
/// 3. Every day is in `0..7`
/// 4. Day lists are strictly ascending (sorted, no duplicates)
pub fn validate_time_ranges(ranges: &[TimeRange]) -> ValidationResult {
    let mut errors = Vec::new();
    check_time_ranges(ranges, &mut errors);
    finish(errors)
}

/// Validates a source configuration.
///
/// Checks:
/// 1. No duplicate keys
/// 2. `dailyBudget`, `dailyCap`, `cpa` are finite and non-negative
pub fn validate_sources(sources: &[Source]) -> ValidationResult {
    let mut errors = Vec::new();
    check_sources(sources, &mut errors);
    finish(errors)
}

/// Validates a campaign: its time ranges, its sources, and its end date.
pub fn validate_campaign(campaign: &Campaign) -> ValidationResult {
    let mut errors = Vec::new();
    check_time_ranges(&campaign.time_ranges, &mut errors);
    check_sources(&campaign.sources, &mut errors);

    if let EndCriterion::Date(end) = campaign.end {
        if end < campaign.start_date {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDateRange,
                format!(
                    "Campaign '{}' ends {} before it starts {}",
                    campaign.id, end, campaign.start_date
                ),
            ));
        }
    }

    finish(errors)
}

fn check_time_ranges(ranges: &[TimeRange], errors: &mut Vec<ValidationError>) {
    for (i, range) in ranges.iter().enumerate() {
        let start = parse_time(i, "start", &range.start, errors);
        let end = parse_time(i, "end", &range.end, errors);
        if let (Some(start), Some(end)) = (start, end) {
            if start >= end {
                errors.push(ValidationError::new(
                    ValidationErrorKind::EmptyRange,
                    format!("Range {i} is empty: {}-{}", range.start, range.end),
                ));
            }
        }

        let Some(days) = &range.days else { continue };
        for &day in days {
            if day >= DAYS_PER_WEEK {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DayOutOfRange,
                    format!("Range {i} has weekday {day} outside 0..{DAYS_PER_WEEK}"),
                ));
            }
        }
        if days.windows(2).any(|w| w[0] >= w[1]) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnsortedDays,
                format!("Range {i} days are not strictly ascending: {days:?}"),
            ));
        }
    }
}

fn parse_time(
    index: usize,
    field: &str,
    value: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<usize> {
    match parse_slot_time(value) {
        Ok(slot) => Some(slot),
        Err(_) => {
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedTime,
                format!("Range {index} has malformed {field} time '{value}'"),
            ));
            None
        }
    }
}

fn check_sources(sources: &[Source], errors: &mut Vec<ValidationError>) {
    let mut keys = HashSet::new();
    for source in sources {
        if !keys.insert(source.key.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSourceKey,
                format!("Duplicate source key: {}", source.key),
            ));
        }

        for (field, value) in [
            ("dailyBudget", source.daily_budget),
            ("dailyCap", source.daily_cap),
            ("cpa", source.cpa),
        ] {
            if !value.is_finite() || value < 0.0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NegativeAmount,
                    format!("Source '{}' has invalid {field}: {value}", source.key),
                ));
            }
        }
    }
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
