//! Slot selection ⇄ time range codec.
//!
//! # Encode
//! 1. Group selected slots by day, ascending.
//! 2. Merge consecutive slots into runs `[first, last]`.
//! 3. Render each run as `start = time(first)`, `end = time(last + 1)`.
//! 4. Merge runs with identical `(start, end)` across days into one range.
//! 5. Sort by `start` (zero-padded strings sort chronologically).
//!
//! # Decode
//! Expands each range to `[start, end)` on each of its days (all seven when
//! absent). Decode is the left inverse of encode:
//! `encode(decode(encode(s))) == encode(s)`.

use std::collections::BTreeMap;

use tracing::warn;

use super::selection::SlotSelection;
use crate::models::{slot_to_time, TimeRange, SLOTS_PER_DAY};

/// Encodes a slot selection into a minimal ordered range list.
///
/// ```
/// use recruit_planner::models::TimeRange;
/// use recruit_planner::ranges::{encode_slots_to_ranges, SlotSelection};
///
/// let sel: SlotSelection = [(0, 16), (0, 17), (2, 16), (2, 17)].into_iter().collect();
/// assert_eq!(
///     encode_slots_to_ranges(&sel),
///     vec![TimeRange::new("08:00", "09:00").with_days([0, 2])],
/// );
/// ```
pub fn encode_slots_to_ranges(selection: &SlotSelection) -> Vec<TimeRange> {
    // (start, end) → days; days arrive ascending because the selection is ordered.
    let mut grouped: BTreeMap<(usize, usize), Vec<usize>> = BTreeMap::new();
    let mut current: Option<(usize, usize, usize)> = None; // (day, first, last)

    for ds in selection.iter().filter(|ds| ds.in_grid()) {
        current = match current {
            Some((day, first, last)) if day == ds.day && ds.slot == last + 1 => {
                Some((day, first, ds.slot))
            }
            Some((day, first, last)) => {
                push_run(&mut grouped, day, first, last);
                Some((ds.day, ds.slot, ds.slot))
            }
            None => Some((ds.day, ds.slot, ds.slot)),
        };
    }
    if let Some((day, first, last)) = current {
        push_run(&mut grouped, day, first, last);
    }

    let mut ranges: Vec<TimeRange> = grouped
        .into_iter()
        .map(|((start, end), days)| TimeRange {
            start: slot_to_time(start),
            end: slot_to_time(end),
            days: Some(days),
        })
        .collect();
    ranges.sort();
    ranges
}

fn push_run(
    grouped: &mut BTreeMap<(usize, usize), Vec<usize>>,
    day: usize,
    first: usize,
    last: usize,
) {
    let days = grouped.entry((first, last + 1)).or_default();
    if days.last() != Some(&day) {
        days.push(day);
    }
}

/// Expands ranges back into the slot selection they cover.
///
/// Ranges with malformed or inverted times are skipped with a warning.
pub fn decode_ranges_to_slots(ranges: &[TimeRange]) -> SlotSelection {
    let mut selection = SlotSelection::new();
    for range in ranges {
        let (start, end) = match range.slot_bounds() {
            Ok(bounds) => bounds,
            Err(err) => {
                warn!(%err, "skipping unparseable time range");
                continue;
            }
        };
        if start >= end {
            warn!(start = %range.start, end = %range.end, "skipping empty time range");
            continue;
        }
        for day in range.effective_days() {
            for slot in start..end.min(SLOTS_PER_DAY) {
                selection.insert(day, slot);
            }
        }
    }
    selection
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn sel(cells: &[(usize, usize)]) -> SlotSelection {
        cells.iter().copied().collect()
    }

    #[test]
    fn test_encode_empty() {
        assert!(encode_slots_to_ranges(&SlotSelection::new()).is_empty());
        assert!(decode_ranges_to_slots(&[]).is_empty());
    }

    #[test]
    fn test_encode_single_run() {
        let ranges = encode_slots_to_ranges(&sel(&[(0, 16), (0, 17), (0, 18)]));
        assert_eq!(ranges, vec![TimeRange::new("08:00", "09:30").with_days([0])]);
    }

    #[test]
    fn test_encode_merges_across_days() {
        let ranges = encode_slots_to_ranges(&sel(&[(0, 16), (0, 17), (2, 16), (2, 17)]));
        assert_eq!(ranges, vec![TimeRange::new("08:00", "09:00").with_days([0, 2])]);
    }

    #[test]
    fn test_encode_splits_runs_and_sorts_by_start() {
        // Monday: 18:00-19:00 and 08:00-08:30; Tuesday: 08:00-08:30
        let ranges = encode_slots_to_ranges(&sel(&[(0, 36), (0, 37), (0, 16), (1, 16)]));
        assert_eq!(
            ranges,
            vec![
                TimeRange::new("08:00", "08:30").with_days([0, 1]),
                TimeRange::new("18:00", "19:00").with_days([0]),
            ]
        );
    }

    #[test]
    fn test_encode_runs_do_not_cross_days() {
        // Monday 23:30 and Tuesday 00:00 are consecutive in order but different days.
        let ranges = encode_slots_to_ranges(&sel(&[(0, 47), (1, 0)]));
        assert_eq!(
            ranges,
            vec![
                TimeRange::new("00:00", "00:30").with_days([1]),
                TimeRange::new("23:30", "24:00").with_days([0]),
            ]
        );
    }

    #[test]
    fn test_decode_absent_days_means_every_day() {
        let slots = decode_ranges_to_slots(&[TimeRange::new("10:00", "11:00")]);
        assert_eq!(slots.len(), 14);
        for day in 0..7 {
            assert_eq!(slots.slots_of(day), vec![20, 21]);
        }
    }

    #[test]
    fn test_decode_skips_bad_ranges() {
        let slots = decode_ranges_to_slots(&[
            TimeRange::new("10:15", "11:00"),
            TimeRange::new("11:00", "10:00"),
            TimeRange::new("09:00", "09:30").with_days([3]),
        ]);
        assert_eq!(slots.len(), 1);
        assert!(slots.contains(3, 18));
    }

    #[test]
    fn test_decode_overlapping_ranges_union() {
        let slots = decode_ranges_to_slots(&[
            TimeRange::new("08:00", "09:00").with_days([0]),
            TimeRange::new("08:30", "10:00").with_days([0]),
        ]);
        assert_eq!(slots.slots_of(0), vec![16, 17, 18, 19]);
        // Re-encoding yields the canonical single run
        assert_eq!(
            encode_slots_to_ranges(&slots),
            vec![TimeRange::new("08:00", "10:00").with_days([0])]
        );
    }

    #[test]
    fn test_round_trip_seeded() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..200 {
            let mut selection = SlotSelection::new();
            for day in 0..7 {
                for slot in 0..SLOTS_PER_DAY {
                    if rng.random_bool(0.3) {
                        selection.insert(day, slot);
                    }
                }
            }
            let ranges = encode_slots_to_ranges(&selection);
            let decoded = decode_ranges_to_slots(&ranges);
            assert_eq!(decoded, selection);
            assert_eq!(encode_slots_to_ranges(&decoded), ranges);
        }
    }

    #[test]
    fn test_encoded_ranges_are_well_formed() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            let selection: SlotSelection = (0..40)
                .map(|_| (rng.random_range(0..7usize), rng.random_range(0..SLOTS_PER_DAY)))
                .collect();
            for r in encode_slots_to_ranges(&selection) {
                assert!(r.start < r.end);
                let days = r.days.unwrap();
                assert!(!days.is_empty());
                assert!(days.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }
}
