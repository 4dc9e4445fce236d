//! Coverage cell and weekly matrix.
//!
//! A coverage matrix holds one [`CoverageCell`] per (weekday, half-hour slot)
//! pair: 7 days (0 = Monday) by 48 slots (0 = 00:00).
//!
//! # Invariants
//! - `demand >= 0` and `supply >= 0`
//! - A closed cell always carries `demand == 0` and `supply == 0`

use std::ops::Index;

use serde::{Deserialize, Serialize};

use super::slot::DaySlot;
use crate::error::PlannerError;

/// Days in the planning week (0 = Monday .. 6 = Sunday).
pub const DAYS_PER_WEEK: usize = 7;

/// Half-hour slots per day (0 = 00:00 .. 47 = 23:30).
pub const SLOTS_PER_DAY: usize = 48;

/// Short weekday names, Monday first.
pub const DAY_NAMES: [&str; DAYS_PER_WEEK] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Projected staffing need and availability for one half-hour slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageCell {
    /// Staff needed.
    pub demand: f64,
    /// Staff available.
    pub supply: f64,
    /// Outside business hours. Excluded from every severity calculation.
    pub closed: bool,
}

impl CoverageCell {
    /// Creates an open cell. Negative inputs are clamped to zero.
    pub fn open(demand: f64, supply: f64) -> Self {
        Self {
            demand: demand.max(0.0),
            supply: supply.max(0.0),
            closed: false,
        }
    }

    /// Creates a closed cell (`demand = supply = 0`).
    pub fn closed() -> Self {
        Self {
            demand: 0.0,
            supply: 0.0,
            closed: true,
        }
    }

    /// Relative supply gap: `(supply - max(0, demand)) / max(1, demand)`.
    ///
    /// Positive means over-staffed, negative under-staffed.
    #[inline]
    pub fn delta(&self) -> f64 {
        relative_gap(self.demand, self.supply)
    }
}

/// Relative gap between supply and demand.
///
/// The denominator is floored at 1 so tiny demands don't explode the ratio.
#[inline]
pub fn relative_gap(demand: f64, supply: f64) -> f64 {
    (supply - demand.max(0.0)) / demand.max(1.0)
}

/// A 7×48 grid of coverage cells for one role/location/week.
///
/// Serializes as a bare `[[cell; 48]; 7]` array. Deserializing rejects any
/// other shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<Vec<CoverageCell>>",
    into = "Vec<Vec<CoverageCell>>"
)]
pub struct CoverageMatrix {
    days: Vec<Vec<CoverageCell>>,
}

impl CoverageMatrix {
    /// Creates a matrix where every cell is closed.
    pub fn all_closed() -> Self {
        Self::from_fn(|_, _| CoverageCell::closed())
    }

    /// Builds a matrix by evaluating `f(day, slot)` for every cell.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> CoverageCell) -> Self {
        let days = (0..DAYS_PER_WEEK)
            .map(|d| (0..SLOTS_PER_DAY).map(|s| f(d, s)).collect())
            .collect();
        Self { days }
    }

    /// Builds a matrix from raw rows. Returns `None` unless the shape is 7×48.
    pub fn from_rows(rows: Vec<Vec<CoverageCell>>) -> Option<Self> {
        let well_formed =
            rows.len() == DAYS_PER_WEEK && rows.iter().all(|r| r.len() == SLOTS_PER_DAY);
        well_formed.then_some(Self { days: rows })
    }

    /// Cells of one weekday, in slot order; `None` when `day >= 7`.
    pub fn day(&self, day: usize) -> Option<&[CoverageCell]> {
        self.days.get(day).map(Vec::as_slice)
    }

    /// Cell lookup; `None` when outside the grid.
    pub fn get(&self, day: usize, slot: usize) -> Option<&CoverageCell> {
        self.days.get(day).and_then(|d| d.get(slot))
    }

    /// Replaces a cell. Out-of-grid coordinates are ignored.
    pub fn set(&mut self, day: usize, slot: usize, cell: CoverageCell) {
        if let Some(c) = self.days.get_mut(day).and_then(|d| d.get_mut(slot)) {
            *c = cell;
        }
    }

    /// Iterates `(day, cells)` rows.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &[CoverageCell])> {
        self.days.iter().enumerate().map(|(d, r)| (d, r.as_slice()))
    }

    /// Iterates every cell with its coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (DaySlot, &CoverageCell)> {
        self.rows().flat_map(|(day, row)| {
            row.iter()
                .enumerate()
                .map(move |(slot, cell)| (DaySlot { day, slot }, cell))
        })
    }

    /// Number of open (non-closed) cells.
    pub fn open_count(&self) -> usize {
        self.cells().filter(|(_, c)| !c.closed).count()
    }
}

impl TryFrom<Vec<Vec<CoverageCell>>> for CoverageMatrix {
    type Error = PlannerError;

    fn try_from(rows: Vec<Vec<CoverageCell>>) -> Result<Self, Self::Error> {
        let shape = (rows.len(), rows.iter().map(Vec::len).max().unwrap_or(0));
        Self::from_rows(rows).ok_or(PlannerError::InvalidMatrixShape {
            days: shape.0,
            slots: shape.1,
        })
    }
}

impl From<CoverageMatrix> for Vec<Vec<CoverageCell>> {
    fn from(matrix: CoverageMatrix) -> Self {
        matrix.days
    }
}

impl Index<(usize, usize)> for CoverageMatrix {
    type Output = CoverageCell;

    fn index(&self, (day, slot): (usize, usize)) -> &CoverageCell {
        &self.days[day][slot]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_constructors() {
        let c = CoverageCell::open(-3.0, 5.0);
        assert_eq!(c.demand, 0.0);
        assert_eq!(c.supply, 5.0);
        assert!(!c.closed);

        let closed = CoverageCell::closed();
        assert!(closed.closed);
        assert_eq!(closed.demand, 0.0);
        assert_eq!(closed.supply, 0.0);
    }

    #[test]
    fn test_relative_gap() {
        assert!((relative_gap(10.0, 12.0) - 0.2).abs() < 1e-12);
        assert!((relative_gap(10.0, 7.0) + 0.3).abs() < 1e-12);
        // Denominator floored at 1
        assert!((relative_gap(0.0, 2.0) - 2.0).abs() < 1e-12);
        assert!((relative_gap(0.5, 0.0) + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_matrix_shape() {
        let m = CoverageMatrix::all_closed();
        assert_eq!(m.rows().count(), DAYS_PER_WEEK);
        assert_eq!(m.cells().count(), DAYS_PER_WEEK * SLOTS_PER_DAY);
        assert_eq!(m.open_count(), 0);
        assert!(m.get(7, 0).is_none());
        assert!(m.get(0, 48).is_none());
    }

    #[test]
    fn test_matrix_set_and_index() {
        let mut m = CoverageMatrix::all_closed();
        m.set(2, 20, CoverageCell::open(8.0, 6.0));
        m.set(9, 99, CoverageCell::open(1.0, 1.0)); // ignored
        assert_eq!(m[(2, 20)].demand, 8.0);
        assert_eq!(m.open_count(), 1);
    }

    #[test]
    fn test_day_lookup() {
        let mut m = CoverageMatrix::all_closed();
        m.set(6, 47, CoverageCell::open(3.0, 2.0));
        let sunday = m.day(6).unwrap();
        assert_eq!(sunday.len(), SLOTS_PER_DAY);
        assert_eq!(sunday[47].demand, 3.0);
        assert!(m.day(7).is_none());
    }

    #[test]
    fn test_json_round_trip() {
        let mut m = CoverageMatrix::all_closed();
        m.set(1, 20, CoverageCell::open(8.0, 6.0));
        let json = serde_json::to_string(&m).unwrap();
        assert!(json.starts_with("[[{"));
        let back: CoverageMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn test_json_rejects_bad_shape() {
        let rows = vec![vec![CoverageCell::closed(); 48]; 6];
        let json = serde_json::to_string(&rows).unwrap();
        let err = serde_json::from_str::<CoverageMatrix>(&json).unwrap_err();
        assert!(err.to_string().contains("6×48"));
    }

    #[test]
    fn test_from_rows_rejects_bad_shape() {
        assert!(CoverageMatrix::from_rows(vec![vec![CoverageCell::closed(); 48]; 6]).is_none());
        assert!(CoverageMatrix::from_rows(vec![vec![CoverageCell::closed(); 47]; 7]).is_none());
        assert!(CoverageMatrix::from_rows(vec![vec![CoverageCell::closed(); 48]; 7]).is_some());
    }
}
