//! Planner configuration.
//!
//! The demo tables (per-role base demand, role×location coverage targets,
//! default acquisition sources, business hours) are data, not code, so real
//! forecasting inputs can replace them without touching the algorithms.
//!
//! Every field has a serde default, so a config file only needs the keys
//! it overrides:
//!
//! ```
//! use recruit_planner::config::PlannerConfig;
//!
//! let cfg = PlannerConfig::from_json_str(r#"{ "defaultBaseDemand": 6 }"#).unwrap();
//! assert_eq!(cfg.base_demand("Dishwasher"), 6.0);
//! assert_eq!(cfg.base_demand("Cook"), 10.0);
//! ```

use std::fs;
use std::path::Path;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PlannerError, Result};
use crate::models::{Campaign, EndCriterion, Source, WeeklyHours};
use crate::projection::DEFAULT_SOURCE_PHASES;

/// Top-level planner configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerConfig {
    #[serde(default)]
    pub open_hours: WeeklyHours,
    #[serde(default = "default_roles")]
    pub roles: Vec<RoleDemand>,
    /// Base demand for roles missing from `roles`.
    #[serde(default = "default_base_demand")]
    pub default_base_demand: f64,
    #[serde(default)]
    pub supply: SupplyConfig,
    #[serde(default = "default_location_targets")]
    pub location_targets: Vec<LocationTarget>,
    /// Sources a new campaign starts with.
    #[serde(default = "default_sources")]
    pub sources: Vec<Source>,
    /// Source keys in crest phase order; unlisted keys use their list position.
    #[serde(default = "default_source_phases")]
    pub source_phases: Vec<String>,
    /// Read by [`CoverageModel::suggest`](crate::coverage::CoverageModel::suggest).
    #[serde(default)]
    pub suggestions: SuggestionConfig,
    /// Length of a new campaign, and the projection length for campaigns
    /// bounded by budget or hires.
    #[serde(default = "default_projection_days")]
    pub projection_days: u32,
}

/// Base half-hourly demand for a role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDemand {
    pub role: String,
    pub base_demand: f64,
}

impl RoleDemand {
    pub fn new(role: impl Into<String>, base_demand: f64) -> Self {
        Self {
            role: role.into(),
            base_demand,
        }
    }
}

/// Target share (percent) of good/ok/bad cells for a role at a location.
///
/// Biases the synthetic supply toward a realistic split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationTarget {
    pub role: String,
    pub location: String,
    pub good: f64,
    pub ok: f64,
    pub bad: f64,
}

impl LocationTarget {
    pub fn new(role: &str, location: &str, good: f64, ok: f64, bad: f64) -> Self {
        Self {
            role: role.to_string(),
            location: location.to_string(),
            good,
            ok,
            bad,
        }
    }

    /// `good - bad` as a fraction (-1.0..=1.0).
    pub fn balance(&self) -> f64 {
        (self.good - self.bad) / 100.0
    }
}

/// Supply-scaling parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyConfig {
    /// Supply/demand ratio before any adjustment.
    #[serde(default = "default_nominal_factor")]
    pub nominal_factor: f64,
    /// Added per `day % 3` step.
    #[serde(default = "default_day_step")]
    pub day_step: f64,
    /// Scale applied to a location target's good/bad balance.
    #[serde(default = "default_location_spread")]
    pub location_spread: f64,
}

impl SupplyConfig {
    /// Supply factor for a weekday, optionally biased by a location target.
    pub fn factor(&self, day: usize, target: Option<&LocationTarget>) -> f64 {
        let flat = self.nominal_factor + (day % 3) as f64 * self.day_step;
        match target {
            Some(t) => flat + self.location_spread * t.balance(),
            None => flat,
        }
    }
}

impl Default for SupplyConfig {
    fn default() -> Self {
        Self {
            nominal_factor: default_nominal_factor(),
            day_step: default_day_step(),
            location_spread: default_location_spread(),
        }
    }
}

/// Priority-range suggestion parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionConfig {
    /// Shortest under-staffed run worth suggesting (slots).
    #[serde(default = "default_min_run_slots")]
    pub min_run_slots: usize,
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            min_run_slots: default_min_run_slots(),
            max_suggestions: default_max_suggestions(),
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            open_hours: WeeklyHours::standard(),
            roles: default_roles(),
            default_base_demand: default_base_demand(),
            supply: SupplyConfig::default(),
            location_targets: default_location_targets(),
            sources: default_sources(),
            source_phases: default_source_phases(),
            suggestions: SuggestionConfig::default(),
            projection_days: default_projection_days(),
        }
    }
}

impl PlannerConfig {
    /// Parses a JSON config; missing keys take their defaults.
    pub fn from_json_str(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    /// Loads a JSON config file. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path).map_err(|source| PlannerError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&data)
    }

    /// Base demand for a role, falling back to `default_base_demand`.
    pub fn base_demand(&self, role: &str) -> f64 {
        self.roles
            .iter()
            .find(|r| r.role == role)
            .map(|r| r.base_demand)
            .unwrap_or(self.default_base_demand)
    }

    /// Configured role names, in table order.
    pub fn role_names(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(|r| r.role.as_str())
    }

    /// A draft campaign with the configured sources, running
    /// `projection_days` from `start_date`.
    pub fn draft_campaign(
        &self,
        id: impl Into<String>,
        name: impl Into<String>,
        start_date: NaiveDate,
    ) -> Campaign {
        let span = i64::from(self.projection_days.max(1)) - 1;
        Campaign::new(id, name, start_date, self.sources.clone())
            .with_end(EndCriterion::Date(start_date + Duration::days(span)))
    }

    /// Coverage target for a role at a location.
    pub fn location_target(&self, role: &str, location: &str) -> Option<&LocationTarget> {
        self.location_targets
            .iter()
            .find(|t| t.role == role && t.location == location)
    }
}

fn default_roles() -> Vec<RoleDemand> {
    vec![
        RoleDemand::new("Cook", 10.0),
        RoleDemand::new("Server", 8.0),
        RoleDemand::new("Bartender", 5.0),
        RoleDemand::new("Host", 4.0),
    ]
}

fn default_base_demand() -> f64 {
    4.0
}

fn default_nominal_factor() -> f64 {
    0.86
}

fn default_day_step() -> f64 {
    0.03
}

fn default_location_spread() -> f64 {
    0.3
}

fn default_location_targets() -> Vec<LocationTarget> {
    vec![
        LocationTarget::new("Cook", "BOS", 25.0, 30.0, 45.0),
        LocationTarget::new("Cook", "LGA", 30.0, 35.0, 35.0),
        LocationTarget::new("Cook", "DCA", 20.0, 30.0, 50.0),
        LocationTarget::new("Cook", "ORD", 35.0, 35.0, 30.0),
        LocationTarget::new("Server", "BOS", 40.0, 35.0, 25.0),
        LocationTarget::new("Server", "LGA", 35.0, 40.0, 25.0),
        LocationTarget::new("Server", "DCA", 30.0, 40.0, 30.0),
        LocationTarget::new("Server", "ORD", 45.0, 35.0, 20.0),
        LocationTarget::new("Bartender", "BOS", 20.0, 30.0, 50.0),
        LocationTarget::new("Bartender", "LGA", 25.0, 30.0, 45.0),
        LocationTarget::new("Bartender", "DCA", 15.0, 35.0, 50.0),
        LocationTarget::new("Bartender", "ORD", 30.0, 30.0, 40.0),
        LocationTarget::new("Host", "BOS", 50.0, 30.0, 20.0),
        LocationTarget::new("Host", "LGA", 45.0, 35.0, 20.0),
        LocationTarget::new("Host", "DCA", 40.0, 35.0, 25.0),
        LocationTarget::new("Host", "ORD", 55.0, 30.0, 15.0),
    ]
}

/// Demo acquisition channels.
pub fn default_sources() -> Vec<Source> {
    vec![
        Source::new("indeed", 300.0, 18.43).with_cap(40.0),
        Source::new("facebook", 250.0, 23.12).with_cap(35.0),
        Source::new("craigslist", 65.0, 12.40).with_cap(14.0),
        Source::new("referrals", 55.0, 6.25).with_cap(12.0),
        Source::new("qr_posters", 0.0, 0.0).with_enabled(false),
    ]
}

fn default_source_phases() -> Vec<String> {
    DEFAULT_SOURCE_PHASES.iter().map(|k| k.to_string()).collect()
}

fn default_min_run_slots() -> usize {
    4
}

fn default_max_suggestions() -> usize {
    3
}

fn default_projection_days() -> u32 {
    28
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = PlannerConfig::default();
        assert_eq!(cfg.base_demand("Cook"), 10.0);
        assert_eq!(cfg.base_demand("Server"), 8.0);
        assert_eq!(cfg.base_demand("Bartender"), 5.0);
        assert_eq!(cfg.base_demand("Host"), 4.0);
        assert_eq!(cfg.base_demand("Busser"), 4.0);
        assert_eq!(cfg.role_names().count(), 4);
        assert_eq!(cfg.sources.len(), 5);
        assert_eq!(cfg.suggestions.min_run_slots, 4);
        assert_eq!(cfg.suggestions.max_suggestions, 3);
        assert_eq!(cfg.projection_days, 28);
    }

    #[test]
    fn test_empty_json_is_default() {
        let cfg = PlannerConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, PlannerConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let cfg = PlannerConfig::from_json_str(
            r#"{
                "roles": [{ "role": "Cook", "baseDemand": 12 }],
                "supply": { "nominalFactor": 0.9 },
                "suggestions": { "maxSuggestions": 5 }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.base_demand("Cook"), 12.0);
        assert_eq!(cfg.base_demand("Server"), 4.0); // no longer listed
        assert!((cfg.supply.nominal_factor - 0.9).abs() < 1e-12);
        assert!((cfg.supply.day_step - 0.03).abs() < 1e-12);
        assert_eq!(cfg.suggestions.max_suggestions, 5);
        assert_eq!(cfg.suggestions.min_run_slots, 4);
    }

    #[test]
    fn test_malformed_json() {
        let err = PlannerConfig::from_json_str("{ roles: ").unwrap_err();
        assert!(matches!(err, PlannerError::ConfigParse(_)));
    }

    #[test]
    fn test_load_missing_file_defaults() {
        let cfg = PlannerConfig::load("/definitely/not/here/planner.json").unwrap();
        assert_eq!(cfg, PlannerConfig::default());
    }

    #[test]
    fn test_draft_campaign_uses_config() {
        let start = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
        let cfg = PlannerConfig::from_json_str(r#"{ "projectionDays": 14 }"#).unwrap();
        let c = cfg.draft_campaign("c1", "Fall", start);
        assert_eq!(c.sources, default_sources());
        assert_eq!(
            c.end,
            EndCriterion::Date(NaiveDate::from_ymd_opt(2025, 11, 14).unwrap())
        );
        assert_eq!(c.projection_with(&cfg).len(), 14);
    }

    #[test]
    fn test_source_phases_default() {
        let cfg = PlannerConfig::default();
        assert_eq!(
            cfg.source_phases,
            vec!["indeed", "facebook", "craigslist", "referrals", "qr_posters"]
        );
    }

    #[test]
    fn test_supply_factor() {
        let supply = SupplyConfig::default();
        assert!((supply.factor(0, None) - 0.86).abs() < 1e-12);
        assert!((supply.factor(1, None) - 0.89).abs() < 1e-12);
        assert!((supply.factor(5, None) - 0.92).abs() < 1e-12);

        let cfg = PlannerConfig::default();
        let host_ord = cfg.location_target("Host", "ORD").unwrap();
        let cook_dca = cfg.location_target("Cook", "DCA").unwrap();
        assert!(supply.factor(0, Some(host_ord)) > supply.factor(0, None));
        assert!(supply.factor(0, Some(cook_dca)) < supply.factor(0, None));
        assert!(cfg.location_target("Cook", "JFK").is_none());
    }
}
