//! Supply-vs-demand severity buckets.
//!
//! Two granularities over the same relative gap
//! `delta = (supply - max(0, demand)) / max(1, demand)`:
//!
//! | Severity (7) | delta | Classification (3) |
//! |--------------|-------|--------------------|
//! | StrongOver | ≥ +0.30 | Green |
//! | Over | ≥ +0.20 | Green |
//! | OverLight | ≥ +0.10 | Green |
//! | Balanced | (-0.10, +0.10) | Green ≥ +0.05, Red ≤ -0.05, else Yellow |
//! | UnderLight | ≤ -0.10 | Red |
//! | Under | ≤ -0.20 | Red |
//! | StrongUnder | ≤ -0.30 | Red |
//!
//! Ties go to the threshold's named bucket, never the middle one.

use serde::{Deserialize, Serialize};

use crate::models::relative_gap;

/// 3-bucket classification threshold.
pub const CLASSIFY_THRESHOLD: f64 = 0.05;

/// Coarse good/ok/bad classification used by rollups and target bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Supply at least 5% above demand.
    Green,
    /// Within ±5%.
    Yellow,
    /// Supply at least 5% below demand.
    Red,
}

impl Classification {
    /// Legend color.
    pub fn color_hex(self) -> &'static str {
        match self {
            Classification::Green => "#10b981",
            Classification::Yellow => "#fde047",
            Classification::Red => "#ef4444",
        }
    }
}

/// Classifies a relative gap at ±5%.
///
/// ```
/// use recruit_planner::coverage::{classify_delta, Classification};
///
/// assert_eq!(classify_delta(0.05), Classification::Green);
/// assert_eq!(classify_delta(-0.05), Classification::Red);
/// assert_eq!(classify_delta(0.049), Classification::Yellow);
/// ```
pub fn classify_delta(delta: f64) -> Classification {
    if delta >= CLASSIFY_THRESHOLD {
        Classification::Green
    } else if delta <= -CLASSIFY_THRESHOLD {
        Classification::Red
    } else {
        Classification::Yellow
    }
}

/// Fine-grained heatmap severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// No demand and no supply.
    Closed,
    StrongUnder,
    Under,
    UnderLight,
    Balanced,
    OverLight,
    Over,
    StrongOver,
}

impl Severity {
    /// Every bucket in legend order (most over-staffed first, closed last).
    pub const LEGEND: [Severity; 8] = [
        Severity::StrongOver,
        Severity::Over,
        Severity::OverLight,
        Severity::Balanced,
        Severity::UnderLight,
        Severity::Under,
        Severity::StrongUnder,
        Severity::Closed,
    ];

    /// Signed rank, -3 (strong under) ..= +3 (strong over). `None` if closed.
    pub fn rank(self) -> Option<i8> {
        match self {
            Severity::Closed => None,
            Severity::StrongUnder => Some(-3),
            Severity::Under => Some(-2),
            Severity::UnderLight => Some(-1),
            Severity::Balanced => Some(0),
            Severity::OverLight => Some(1),
            Severity::Over => Some(2),
            Severity::StrongOver => Some(3),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::StrongOver => "30%+ over",
            Severity::Over => "20% over",
            Severity::OverLight => "10% over",
            Severity::Balanced => "match",
            Severity::UnderLight => "10% short",
            Severity::Under => "20% short",
            Severity::StrongUnder => "30%+ short",
            Severity::Closed => "closed / no demand",
        }
    }

    pub fn color_hex(self) -> &'static str {
        match self {
            Severity::StrongOver => "#065f46",
            Severity::Over => "#047857",
            Severity::OverLight => "#10b981",
            Severity::Balanced => "#fde047",
            Severity::UnderLight => "#ef4444",
            Severity::Under => "#b91c1c",
            Severity::StrongUnder => "#7f1d1d",
            Severity::Closed => "#e5e7eb",
        }
    }
}

/// 7-bucket severity of a cell from its demand and supply.
pub fn cell_severity(demand: f64, supply: f64) -> Severity {
    if demand <= 0.0 && supply <= 0.0 {
        return Severity::Closed;
    }
    severity_of_delta(relative_gap(demand, supply))
}

/// 7-bucket severity of a relative gap.
pub fn severity_of_delta(delta: f64) -> Severity {
    if delta >= 0.30 {
        Severity::StrongOver
    } else if delta >= 0.20 {
        Severity::Over
    } else if delta >= 0.10 {
        Severity::OverLight
    } else if delta <= -0.30 {
        Severity::StrongUnder
    } else if delta <= -0.20 {
        Severity::Under
    } else if delta <= -0.10 {
        Severity::UnderLight
    } else {
        Severity::Balanced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify_delta(0.05), Classification::Green);
        assert_eq!(classify_delta(-0.05), Classification::Red);
        assert_eq!(classify_delta(0.049), Classification::Yellow);
        assert_eq!(classify_delta(-0.049), Classification::Yellow);
        assert_eq!(classify_delta(0.03), Classification::Yellow);
        assert_eq!(classify_delta(-0.03), Classification::Yellow);
        assert_eq!(classify_delta(0.0), Classification::Yellow);
    }

    #[test]
    fn test_cell_severity_boundaries() {
        assert_eq!(cell_severity(10.0, 10.0), Severity::Balanced);
        assert_eq!(cell_severity(10.0, 11.0), Severity::OverLight);
        assert_eq!(cell_severity(10.0, 12.0), Severity::Over);
        assert_eq!(cell_severity(10.0, 13.0), Severity::StrongOver);
        assert_eq!(cell_severity(10.0, 9.0), Severity::UnderLight);
        assert_eq!(cell_severity(10.0, 8.0), Severity::Under);
        assert_eq!(cell_severity(10.0, 7.0), Severity::StrongUnder);
        assert_eq!(cell_severity(0.0, 0.0), Severity::Closed);
    }

    #[test]
    fn test_zero_demand_with_supply() {
        // delta = 1 / 1
        assert_eq!(cell_severity(0.0, 1.0), Severity::StrongOver);
    }

    #[test]
    fn test_symmetry() {
        for delta in [0.0, 0.05, 0.1, 0.15, 0.2, 0.25, 0.3, 0.5] {
            let pos = severity_of_delta(delta).rank().unwrap();
            let neg = severity_of_delta(-delta).rank().unwrap();
            assert_eq!(pos, -neg, "asymmetric at {delta}");
        }
    }

    #[test]
    fn test_monotonic() {
        let mut prev = i8::MIN;
        let mut delta = -0.6;
        while delta <= 0.6 {
            let rank = severity_of_delta(delta).rank().unwrap();
            assert!(rank >= prev);
            prev = rank;
            delta += 0.01;
        }
    }

    #[test]
    fn test_granularities_agree_on_side() {
        // Whenever the 7-bucket view leaves Balanced, the 3-bucket view agrees on direction.
        for delta in [-0.4, -0.25, -0.1, 0.1, 0.25, 0.4] {
            let rank = severity_of_delta(delta).rank().unwrap();
            let class = classify_delta(delta);
            if rank > 0 {
                assert_eq!(class, Classification::Green);
            } else {
                assert_eq!(class, Classification::Red);
            }
        }
    }

    #[test]
    fn test_legend() {
        assert_eq!(Severity::LEGEND.len(), 8);
        assert_eq!(Severity::StrongOver.label(), "30%+ over");
        assert_eq!(Severity::Closed.color_hex(), "#e5e7eb");
        assert_eq!(Classification::Red.color_hex(), "#ef4444");
    }
}
