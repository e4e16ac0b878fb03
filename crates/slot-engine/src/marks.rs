//! Convert relevant events into a chronologically ordered stream of
//! start/end boundary markers.
//!
//! The ordering contract is load-bearing: at equal times, END marks sort
//! before START marks, so an event ending at minute `t` and another starting
//! at minute `t` read as contiguous busy time with no zero-length gap
//! between them. The derived `Ord` on [`MarkKind`] encodes the tie-break
//! (`End` is declared first), letting a plain sort on `(time, kind)` do the
//! whole job.

use crate::range::{Event, MeetingRequest, END_OF_DAY};
use crate::relevance::{classify, Relevance};

/// Time of the synthetic trailing START mark. It sits one minute past the
/// last valid minute of the day so the sweep always closes the final free
/// interval.
pub const SENTINEL_TIME: u32 = END_OF_DAY + 1;

/// The type of a time marking. Declaration order matters: `End` before
/// `Start` gives END marks precedence at equal times under the derived `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MarkKind {
    End,
    Start,
}

/// A mark in time: either the start or end of a relevant event.
///
/// Ephemeral; produced only within a single query and discarded afterwards.
/// `advisory` marks come from events whose attendees are all optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeMark {
    pub time: u32,
    pub kind: MarkKind,
    pub advisory: bool,
}

/// Build the ordered mark sequence for a query.
///
/// Events classified [`Relevance::None`] contribute nothing. Every other
/// event contributes a START mark at its start and an END mark at its end,
/// tagged advisory when the classification is [`Relevance::Optional`]. A
/// non-advisory sentinel START at [`SENTINEL_TIME`] is always appended.
pub fn sequence_marks(events: &[Event], request: &MeetingRequest) -> Vec<TimeMark> {
    let mut marks = Vec::with_capacity(events.len() * 2 + 1);

    for event in events {
        let advisory = match classify(event, request) {
            Relevance::Mandatory => false,
            Relevance::Optional => true,
            Relevance::None => continue,
        };
        marks.push(TimeMark {
            time: event.when.start,
            kind: MarkKind::Start,
            advisory,
        });
        marks.push(TimeMark {
            time: event.when.end,
            kind: MarkKind::End,
            advisory,
        });
    }

    marks.push(TimeMark {
        time: SENTINEL_TIME,
        kind: MarkKind::Start,
        advisory: false,
    });

    marks.sort_by_key(|m| (m.time, m.kind));
    marks
}
