//! Editable half-hour slot selection.
//!
//! The transient form a planner edits on the heatmap before it is encoded
//! into [`TimeRange`](crate::models::TimeRange)s.
//!
//! # Gestures
//! - Click toggles one cell.
//! - Drag starts on an anchor cell. If the anchor was selected the drag
//!   deselects, otherwise it selects. Extending the drag only touches the
//!   anchor's day column; cells in other columns are never affected.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::{DaySlot, SLOTS_PER_DAY};

/// A set of selected (day, slot) cells on the 7×48 grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotSelection {
    slots: BTreeSet<DaySlot>,
}

impl SlotSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a cell. Off-grid cells are rejected (`false`).
    pub fn insert(&mut self, day: usize, slot: usize) -> bool {
        let ds = DaySlot::new(day, slot);
        ds.in_grid() && self.slots.insert(ds)
    }

    /// Deselects a cell; `true` if it was selected.
    pub fn remove(&mut self, day: usize, slot: usize) -> bool {
        self.slots.remove(&DaySlot::new(day, slot))
    }

    /// Flips a cell, returning whether it is now selected.
    pub fn toggle(&mut self, day: usize, slot: usize) -> bool {
        if self.remove(day, slot) {
            false
        } else {
            self.insert(day, slot)
        }
    }

    pub fn contains(&self, day: usize, slot: usize) -> bool {
        self.slots.contains(&DaySlot::new(day, slot))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Selected cells ordered by day, then slot.
    pub fn iter(&self) -> impl Iterator<Item = DaySlot> + '_ {
        self.slots.iter().copied()
    }

    /// Selected slots of one day, ascending.
    pub fn slots_of(&self, day: usize) -> Vec<usize> {
        self.slots
            .range(DaySlot::new(day, 0)..DaySlot::new(day.saturating_add(1), 0))
            .map(|ds| ds.slot)
            .collect()
    }

    /// Starts a drag on an anchor cell and applies it to the anchor.
    pub fn begin_drag(&mut self, day: usize, slot: usize) -> DragGesture {
        let mode = if self.contains(day, slot) {
            DragMode::Deselect
        } else {
            DragMode::Select
        };
        let gesture = DragGesture {
            day,
            anchor: slot,
            mode,
        };
        gesture.apply(self, slot, slot);
        gesture
    }
}

impl FromIterator<DaySlot> for SlotSelection {
    fn from_iter<I: IntoIterator<Item = DaySlot>>(iter: I) -> Self {
        let mut sel = Self::new();
        for ds in iter {
            sel.insert(ds.day, ds.slot);
        }
        sel
    }
}

impl FromIterator<(usize, usize)> for SlotSelection {
    fn from_iter<I: IntoIterator<Item = (usize, usize)>>(iter: I) -> Self {
        iter.into_iter().map(|(d, s)| DaySlot::new(d, s)).collect()
    }
}

/// Whether a drag adds or removes cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    Select,
    Deselect,
}

/// An in-progress vertical drag within one day column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragGesture {
    /// Column the drag started in.
    pub day: usize,
    /// Slot the drag started on.
    pub anchor: usize,
    pub mode: DragMode,
}

impl DragGesture {
    /// Extends the drag to `(day, slot)`.
    ///
    /// Applies the drag mode to every slot between the anchor and `slot`.
    /// Cells in another day column are ignored.
    pub fn extend_to(&self, selection: &mut SlotSelection, day: usize, slot: usize) {
        if day != self.day {
            return;
        }
        let (lo, hi) = if slot < self.anchor {
            (slot, self.anchor)
        } else {
            (self.anchor, slot)
        };
        self.apply(selection, lo, hi);
    }

    fn apply(&self, selection: &mut SlotSelection, lo: usize, hi: usize) {
        for slot in lo..=hi.min(SLOTS_PER_DAY - 1) {
            match self.mode {
                DragMode::Select => {
                    selection.insert(self.day, slot);
                }
                DragMode::Deselect => {
                    selection.remove(self.day, slot);
                }
            }
        }
    }
}
