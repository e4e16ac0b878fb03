//! Walk the ordered mark sequence and emit maximal free intervals.

use crate::marks::{MarkKind, TimeMark};
use crate::range::{TimeRange, START_OF_DAY};

/// Sweep the ordered marks and collect every maximal free interval of at
/// least `duration` minutes.
///
/// When `include_advisory` is false, advisory marks are skipped entirely --
/// they neither open nor close a window in that pass.
///
/// The counter is signed: a zero-length event sorts its END before its own
/// START, driving the count to -1 and back to 0, which suppresses any
/// spurious gap at that minute without disturbing the surrounding window.
pub fn sweep(marks: &[TimeMark], duration: u32, include_advisory: bool) -> Vec<TimeRange> {
    let mut open_slots = Vec::new();
    let mut overlapping: i32 = 0;
    let mut candidate_start = START_OF_DAY;

    for mark in marks.iter().filter(|m| include_advisory || !m.advisory) {
        match mark.kind {
            MarkKind::End => {
                overlapping -= 1;
                if overlapping == 0 {
                    // A free window opens here.
                    candidate_start = mark.time;
                }
            }
            MarkKind::Start => {
                if overlapping == 0 {
                    let candidate_end = mark.time;
                    if candidate_end - candidate_start >= duration {
                        open_slots.push(TimeRange {
                            start: candidate_start,
                            end: candidate_end,
                        });
                    }
                }
                overlapping += 1;
            }
        }
    }

    open_slots
}
