//! Priority time-range editing.
//!
//! [`SlotSelection`] is what the planner toggles and drags on the heatmap;
//! `Vec<TimeRange>` is what a job or campaign persists. The codec converts
//! between them losslessly for any selection made of contiguous runs.

mod codec;
mod selection;

pub use codec::{decode_ranges_to_slots, encode_slots_to_ranges};
pub use selection::{DragGesture, DragMode, SlotSelection};
