//! The single external operation: find open slots for a meeting request.

use crate::marks::sequence_marks;
use crate::range::{Event, MeetingRequest, TimeRange};
use crate::sweep::sweep;

/// Find every free interval of at least `request.duration` minutes in which
/// the meeting could be scheduled.
///
/// Two passes at most: the first honors both mandatory and optional
/// attendees' events; if it yields nothing, a second pass considers only the
/// mandatory attendees' events and its result is returned even if empty.
/// There is no third attempt and no partial satisfaction of optional
/// attendees.
///
/// The result is sorted by start time, non-overlapping, and deterministic
/// for identical inputs. The function is pure and total: no events means the
/// whole day is returned (when `duration <= 1440`), and a duration longer
/// than the day always yields an empty result.
pub fn find_open_slots(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    let marks = sequence_marks(events, request);

    let with_optional = sweep(&marks, request.duration, true);
    if !with_optional.is_empty() {
        return with_optional;
    }

    sweep(&marks, request.duration, false)
}
