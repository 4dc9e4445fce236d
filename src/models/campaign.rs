//! Recruiting campaign record and lifecycle.
//!
//! # State Machine
//!
//! ```text
//! Draft ──► Active ◄──► Suspended
//!   │         │            │
//!   └─────────┴────────────┴──► Archived (terminal)
//! ```
//!
//! Mutations are driven by the host; this module only guards transitions
//! and derives display/projection data from the record.

use std::fmt;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::calendar::format_short_date;
use super::source::Source;
use super::time_range::TimeRange;
use crate::config::PlannerConfig;
use crate::error::{PlannerError, Result};
use crate::projection::{
    project_daily_applicants, project_daily_applicants_with_phases, DailyProjection,
};

/// Campaign lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    #[default]
    Draft,
    Active,
    Suspended,
    /// Terminal.
    Archived,
}

impl CampaignStatus {
    /// Statuses reachable from this one.
    pub fn valid_transitions(self) -> &'static [CampaignStatus] {
        use CampaignStatus::*;
        match self {
            Draft => &[Active, Archived],
            Active => &[Suspended, Archived],
            Suspended => &[Active, Archived],
            Archived => &[],
        }
    }

    /// Whether `self -> to` is allowed.
    pub fn can_transition(self, to: CampaignStatus) -> bool {
        self.valid_transitions().contains(&to)
    }

    pub fn is_terminal(self) -> bool {
        self.valid_transitions().is_empty()
    }

    fn as_str(self) -> &'static str {
        match self {
            CampaignStatus::Draft => "draft",
            CampaignStatus::Active => "active",
            CampaignStatus::Suspended => "suspended",
            CampaignStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// When a campaign stops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "lowercase")]
pub enum EndCriterion {
    /// Runs through this date (inclusive).
    Date(NaiveDate),
    /// Runs until this much has been spent.
    Budget(u64),
    /// Runs until this many hires are made.
    Hires(u32),
}

/// A recruiting campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub created_at: NaiveDate,
    pub status: CampaignStatus,
    /// Acquisition channels with their budgets.
    pub sources: Vec<Source>,
    /// Location codes targeted.
    pub locations: Vec<String>,
    /// Roles recruited for.
    pub jobs: Vec<String>,
    pub start_date: NaiveDate,
    pub end: EndCriterion,
    /// Priority recruiting hours.
    #[serde(default)]
    pub time_ranges: Vec<TimeRange>,
}

impl Campaign {
    /// Creates a draft campaign running four weeks from `start_date`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start_date: NaiveDate,
        sources: Vec<Source>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            created_at: start_date,
            status: CampaignStatus::Draft,
            sources,
            locations: Vec::new(),
            jobs: Vec::new(),
            start_date,
            end: EndCriterion::Date(start_date + Duration::days(27)),
            time_ranges: Vec::new(),
        }
    }

    /// Sets the end criterion.
    pub fn with_end(mut self, end: EndCriterion) -> Self {
        self.end = end;
        self
    }

    /// Sets the targeted locations.
    pub fn with_locations(mut self, locations: Vec<String>) -> Self {
        self.locations = locations;
        self
    }

    /// Sets the roles recruited for.
    pub fn with_jobs(mut self, jobs: Vec<String>) -> Self {
        self.jobs = jobs;
        self
    }

    /// Sets the priority time ranges.
    pub fn with_time_ranges(mut self, ranges: Vec<TimeRange>) -> Self {
        self.time_ranges = ranges;
        self
    }

    /// Moves to `to`, rejecting moves the state machine forbids.
    pub fn transition(&mut self, to: CampaignStatus) -> Result<()> {
        if !self.status.can_transition(to) {
            return Err(PlannerError::InvalidTransition {
                from: self.status,
                to,
            });
        }
        self.status = to;
        Ok(())
    }

    /// Launch/suspend toggle: active campaigns suspend, anything else launches.
    pub fn toggle_launch(&mut self) -> Result<CampaignStatus> {
        let to = match self.status {
            CampaignStatus::Active => CampaignStatus::Suspended,
            _ => CampaignStatus::Active,
        };
        self.transition(to)?;
        Ok(to)
    }

    /// Duplicates this campaign as a fresh draft named `"<name> (Copy)"`.
    pub fn copy_as(&self, id: impl Into<String>, created_at: NaiveDate) -> Self {
        Self {
            id: id.into(),
            name: format!("{} (Copy)", self.name),
            created_at,
            status: CampaignStatus::Draft,
            ..self.clone()
        }
    }

    /// Date window used for applicant projections.
    ///
    /// A date-bounded campaign projects through its end date; budget- or
    /// hire-bounded campaigns project `default_days` from the start.
    pub fn projection_window(&self, default_days: u32) -> (NaiveDate, NaiveDate) {
        match &self.end {
            EndCriterion::Date(end) => (self.start_date, *end),
            _ => {
                let span = i64::from(default_days.max(1)) - 1;
                (self.start_date, self.start_date + Duration::days(span))
            }
        }
    }

    /// Projected daily applicants over the campaign's projection window.
    pub fn projection(&self, default_days: u32) -> Vec<DailyProjection> {
        let (start, end) = self.projection_window(default_days);
        project_daily_applicants(&self.sources, start, end)
    }

    /// Projection using the config's window length and crest phase table.
    pub fn projection_with(&self, config: &PlannerConfig) -> Vec<DailyProjection> {
        let (start, end) = self.projection_window(config.projection_days);
        project_daily_applicants_with_phases(&self.sources, start, end, &config.source_phases)
    }

    /// List-row summary: date span, budget, or hires target.
    pub fn summary_label(&self) -> String {
        match &self.end {
            EndCriterion::Date(end) => format!(
                "{} - {}",
                format_short_date(self.start_date),
                format_short_date(*end)
            ),
            EndCriterion::Budget(amount) => format!("Budget: $ {}", group_thousands(*amount)),
            EndCriterion::Hires(n) => format!("Target: {n} hires"),
        }
    }
}

/// `5000` → `"5,000"`.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
