//! Applicant acquisition source.
//!
//! A source is one advertising channel (job board, social ad, referral
//! program) with a daily budget ceiling, an applicant-count ceiling, and a
//! cost per applicant.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// One acquisition channel's daily budget configuration.
///
/// # Invariants
/// `daily_cap >= 0` (0 = unlimited), `daily_budget >= 0`, `cpa >= 0`.
/// Use [`Source::sanitized`] at the boundary to enforce them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    /// Stable channel key (e.g. `"indeed"`).
    pub key: String,
    /// Whether the channel is currently running.
    pub enabled: bool,
    /// Max applicants per day; 0 = unlimited.
    pub daily_cap: f64,
    /// Spend per day.
    pub daily_budget: f64,
    /// Cost per applicant.
    pub cpa: f64,
}

impl Source {
    /// Creates an enabled source with no cap.
    pub fn new(key: impl Into<String>, daily_budget: f64, cpa: f64) -> Self {
        Self {
            key: key.into(),
            enabled: true,
            daily_cap: 0.0,
            daily_budget,
            cpa,
        }
    }

    /// Sets the daily applicant cap (0 = unlimited).
    pub fn with_cap(mut self, daily_cap: f64) -> Self {
        self.daily_cap = daily_cap;
        self
    }

    /// Sets the enabled flag.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Copy with negative or non-finite amounts clamped to zero.
    pub fn sanitized(&self) -> Self {
        let clamp = |field: &str, v: f64| {
            if v.is_finite() && v >= 0.0 {
                v
            } else {
                warn!(source = %self.key, field, value = v, "clamping source amount to zero");
                0.0
            }
        };
        Self {
            key: self.key.clone(),
            enabled: self.enabled,
            daily_cap: clamp("dailyCap", self.daily_cap),
            daily_budget: clamp("dailyBudget", self.daily_budget),
            cpa: clamp("cpa", self.cpa),
        }
    }

    /// Whether this source can produce applicants at all.
    pub fn is_productive(&self) -> bool {
        self.enabled && self.cpa > 0.0 && self.daily_budget > 0.0
    }

    /// Human label: underscores become spaces (`"qr_posters"` → `"qr posters"`).
    pub fn display_name(&self) -> String {
        self.key.replace('_', " ")
    }
}
