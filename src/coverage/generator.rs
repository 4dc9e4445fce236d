//! Synthetic demand/supply matrix generation.
//!
//! # Model
//!
//! For each open (day, slot) cell:
//!
//! ```text
//! demand = round(base · phase · (0.25 + 1.2·(0.7·lunch + 1.0·dinner)) · weekend)
//! supply = max(0, round(demand · factor + jitter))
//! ```
//!
//! - `lunch`, `dinner`: Gaussian bumps `exp(-((hour - c) / 2)²)` at c = 12, 19
//! - `weekend`: ×1.25 on Saturday/Sunday
//! - `phase`: `1 + 0.03·sin((weekOffset·7 + day + slot/48) · 0.9)`
//! - `factor`: [`SupplyConfig::factor`](crate::config::SupplyConfig::factor)
//! - `jitter`: sine-hash noise in [-1, 1), a pure function of
//!   `(weekOffset, day, slot)`
//!
//! The same inputs always reproduce the same matrix.

use tracing::debug;

use super::suggest::{suggest_priority_ranges_with, Suggestion};
use crate::config::PlannerConfig;
use crate::models::{CoverageCell, CoverageMatrix};

const LUNCH_PEAK_HOUR: f64 = 12.0;
const DINNER_PEAK_HOUR: f64 = 19.0;
const PEAK_WIDTH_HOURS: f64 = 2.0;
const LUNCH_WEIGHT: f64 = 0.7;
const DINNER_WEIGHT: f64 = 1.0;
const WEEKEND_MULTIPLIER: f64 = 1.25;
const PHASE_AMPLITUDE: f64 = 0.03;

/// Generates coverage matrices from a [`PlannerConfig`].
///
/// # Example
///
/// ```
/// use recruit_planner::coverage::CoverageModel;
///
/// let model = CoverageModel::new();
/// let a = model.generate(Some("Cook"), 0, None);
/// let b = model.generate(Some("Cook"), 0, None);
/// assert_eq!(a, b);
/// assert!(a[(0, 0)].closed); // Monday 00:00
/// assert!(!a[(0, 24)].closed); // Monday 12:00
/// ```
#[derive(Debug, Clone, Default)]
pub struct CoverageModel {
    config: PlannerConfig,
}

impl CoverageModel {
    /// Creates a model with the demo configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the given configuration.
    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Generates the week matrix for one role, or for all configured roles
    /// summed when `role` is `None`.
    ///
    /// In aggregate mode a cell is closed only if it is closed for every role.
    pub fn generate(
        &self,
        role: Option<&str>,
        week_offset: i64,
        location: Option<&str>,
    ) -> CoverageMatrix {
        let matrix = match role {
            Some(role) => self.role_matrix(role, week_offset, location),
            None => self.aggregate_matrix(week_offset, location),
        };
        debug!(
            role = role.unwrap_or("*"),
            week_offset,
            location = location.unwrap_or("-"),
            open_cells = matrix.open_count(),
            "generated coverage matrix"
        );
        matrix
    }

    /// Ranks priority ranges using the configured suggestion parameters.
    pub fn suggest(&self, matrix: &CoverageMatrix) -> Vec<Suggestion> {
        suggest_priority_ranges_with(matrix, &self.config.suggestions)
    }

    fn role_matrix(&self, role: &str, week_offset: i64, location: Option<&str>) -> CoverageMatrix {
        let base = self.config.base_demand(role);
        let target = location.and_then(|loc| self.config.location_target(role, loc));

        CoverageMatrix::from_fn(|day, slot| {
            if !self.config.open_hours.is_open(day, slot) {
                return CoverageCell::closed();
            }
            let demand = demand_at(base, week_offset, day, slot);
            let factor = self.config.supply.factor(day, target);
            let supply = (demand * factor + noise(week_offset, day, slot))
                .round()
                .max(0.0);
            CoverageCell::open(demand, supply)
        })
    }

    fn aggregate_matrix(&self, week_offset: i64, location: Option<&str>) -> CoverageMatrix {
        let per_role: Vec<CoverageMatrix> = self
            .config
            .role_names()
            .map(|role| self.role_matrix(role, week_offset, location))
            .collect();

        if per_role.is_empty() {
            return CoverageMatrix::all_closed();
        }

        CoverageMatrix::from_fn(|day, slot| {
            let cells = per_role.iter().map(|m| m[(day, slot)]);
            if cells.clone().all(|c| c.closed) {
                return CoverageCell::closed();
            }
            let (demand, supply) = cells.fold((0.0, 0.0), |(d, s), c| (d + c.demand, s + c.supply));
            CoverageCell::open(demand, supply)
        })
    }
}

/// Generates a week matrix with the demo configuration.
pub fn generate_coverage_matrix(
    role: Option<&str>,
    week_offset: i64,
    location: Option<&str>,
) -> CoverageMatrix {
    CoverageModel::new().generate(role, week_offset, location)
}

/// Rounded synthetic demand for an open cell.
fn demand_at(base: f64, week_offset: i64, day: usize, slot: usize) -> f64 {
    let hour = (slot / 2) as f64;
    let lunch = gaussian_bump(hour, LUNCH_PEAK_HOUR);
    let dinner = gaussian_bump(hour, DINNER_PEAK_HOUR);
    let weekend = if day >= 5 { WEEKEND_MULTIPLIER } else { 1.0 };
    let t = week_offset as f64 * 7.0 + day as f64 + slot as f64 / 48.0;
    let phase = 1.0 + PHASE_AMPLITUDE * (t * 0.9).sin();
    let curve = 0.25 + 1.2 * (LUNCH_WEIGHT * lunch + DINNER_WEIGHT * dinner);
    (base * phase * curve * weekend).round()
}

#[inline]
fn gaussian_bump(hour: f64, center: f64) -> f64 {
    (-((hour - center) / PEAK_WIDTH_HOURS).powi(2)).exp()
}

/// Deterministic jitter in [-1, 1).
pub(crate) fn noise(seed: i64, day: usize, slot: usize) -> f64 {
    let x = ((seed as f64 + 1.0) * 9301.0 + day as f64 * 49297.0 + slot as f64 * 233280.0).sin()
        * 43758.5453;
    (x - x.floor()) * 2.0 - 1.0
}
