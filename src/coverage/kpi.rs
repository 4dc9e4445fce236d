//! Coverage quality metrics (KPIs).
//!
//! Summarizes a coverage matrix for the role list and header tiles.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Demand | Sum of demand over open cells |
//! | Total Supply | Sum of supply over open cells |
//! | Coverage % | `clamp(supply / max(1, demand) · 100, 0, 100)` |
//! | Gap | `demand - supply` (positive = shortfall) |
//! | Severity Histogram | Open cells per 7-bucket severity |

use std::collections::HashMap;

use super::severity::{cell_severity, classify_delta, Classification, Severity};
use crate::models::CoverageMatrix;

/// Coverage indicators for one matrix.
#[derive(Debug, Clone)]
pub struct CoverageKpi {
    pub total_demand: f64,
    pub total_supply: f64,
    /// Open (non-closed) cells.
    pub open_slots: usize,
    /// Supply as a share of demand, 0..=100.
    pub coverage_pct: f64,
    /// Open cells per 7-bucket severity.
    pub by_severity: HashMap<Severity, usize>,
    /// Open cells per 3-bucket classification.
    pub by_class: HashMap<Classification, usize>,
}

impl CoverageKpi {
    /// Computes KPIs over the open cells of a matrix.
    pub fn calculate(matrix: &CoverageMatrix) -> Self {
        let mut total_demand = 0.0;
        let mut total_supply = 0.0;
        let mut open_slots = 0;
        let mut by_severity: HashMap<Severity, usize> = HashMap::new();
        let mut by_class: HashMap<Classification, usize> = HashMap::new();

        for (_, cell) in matrix.cells().filter(|(_, c)| !c.closed) {
            open_slots += 1;
            total_demand += cell.demand;
            total_supply += cell.supply;
            *by_severity
                .entry(cell_severity(cell.demand, cell.supply))
                .or_insert(0) += 1;
            *by_class.entry(classify_delta(cell.delta())).or_insert(0) += 1;
        }

        Self {
            total_demand,
            total_supply,
            open_slots,
            coverage_pct: coverage_pct(total_demand, total_supply),
            by_severity,
            by_class,
        }
    }

    /// Shortfall (positive) or surplus (negative).
    pub fn gap(&self) -> f64 {
        self.total_demand - self.total_supply
    }

    /// Role-list badge: `"+N"` when short, `"OK"` otherwise.
    pub fn gap_label(&self) -> String {
        gap_label(self.total_demand, self.total_supply)
    }

    /// Open cells in a severity bucket.
    pub fn count(&self, severity: Severity) -> usize {
        self.by_severity.get(&severity).copied().unwrap_or(0)
    }

    /// Fraction of open cells classified red (0.0..1.0).
    pub fn red_share(&self) -> f64 {
        if self.open_slots == 0 {
            return 0.0;
        }
        self.by_class.get(&Classification::Red).copied().unwrap_or(0) as f64
            / self.open_slots as f64
    }
}

/// `clamp(supply / max(1, demand) · 100, 0, 100)`.
pub fn coverage_pct(demand: f64, supply: f64) -> f64 {
    (supply / demand.max(1.0) * 100.0).clamp(0.0, 100.0)
}

/// `"+N"` when demand exceeds supply, else `"OK"`.
pub fn gap_label(demand: f64, supply: f64) -> String {
    let gap = (demand - supply).round();
    if gap > 0.0 {
        format!("+{gap}")
    } else {
        "OK".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coverage::generate_coverage_matrix;
    use crate::models::CoverageCell;

    #[test]
    fn test_kpi_basic() {
        let mut m = CoverageMatrix::all_closed();
        m.set(0, 20, CoverageCell::open(10.0, 7.0));
        m.set(0, 21, CoverageCell::open(10.0, 13.0));
        m.set(1, 20, CoverageCell::open(10.0, 10.0));

        let kpi = CoverageKpi::calculate(&m);
        assert_eq!(kpi.open_slots, 3);
        assert!((kpi.total_demand - 30.0).abs() < 1e-10);
        assert!((kpi.total_supply - 30.0).abs() < 1e-10);
        assert!((kpi.coverage_pct - 100.0).abs() < 1e-10);
        assert_eq!(kpi.count(Severity::StrongUnder), 1);
        assert_eq!(kpi.count(Severity::StrongOver), 1);
        assert_eq!(kpi.count(Severity::Balanced), 1);
        assert_eq!(kpi.count(Severity::Closed), 0);
        assert_eq!(kpi.gap_label(), "OK");
        assert!((kpi.red_share() - 1.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = CoverageKpi::calculate(&CoverageMatrix::all_closed());
        assert_eq!(kpi.open_slots, 0);
        assert!((kpi.coverage_pct - 0.0).abs() < 1e-10);
        assert!((kpi.red_share() - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_role_badges() {
        assert_eq!(gap_label(10.0, 7.0), "+3");
        assert_eq!(gap_label(8.0, 8.0), "OK");
        assert_eq!(gap_label(4.0, 5.0), "OK");
        assert!((coverage_pct(5.0, 3.0) - 60.0).abs() < 1e-10);
        assert!((coverage_pct(4.0, 5.0) - 100.0).abs() < 1e-10);
        assert!((coverage_pct(0.0, 0.0) - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_histogram_covers_open_slots() {
        let m = generate_coverage_matrix(Some("Bartender"), 0, Some("BOS"));
        let kpi = CoverageKpi::calculate(&m);
        let total: usize = kpi.by_severity.values().sum();
        assert_eq!(total, kpi.open_slots);
        let classes: usize = kpi.by_class.values().sum();
        assert_eq!(classes, kpi.open_slots);
    }
}
