//! Decide whether an event constrains a meeting request at all, and whether
//! the constraint is mandatory or advisory.

use crate::range::{Event, MeetingRequest};

/// How an event's attendees relate to a meeting request's attendees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relevance {
    /// The event involves at least one mandatory attendee; it always blocks.
    Mandatory,
    /// The event involves only optional attendees; it blocks on the first
    /// pass and is ignored on the fallback pass.
    Optional,
    /// The event involves nobody on the request; it is ignored entirely.
    None,
}

/// Classify an event against a meeting request.
///
/// Rules, evaluated in order:
/// 1. Any shared mandatory attendee → `Mandatory`.
/// 2. Otherwise, any shared optional attendee → `Mandatory` if the request
///    has no mandatory attendees at all (the optional attendees become the
///    only relevant constraint), else `Optional`.
/// 3. Otherwise → `None`.
pub fn classify(event: &Event, request: &MeetingRequest) -> Relevance {
    if !event.attendees.is_disjoint(&request.attendees) {
        return Relevance::Mandatory;
    }
    if !event.attendees.is_disjoint(&request.optional_attendees) {
        if request.attendees.is_empty() {
            return Relevance::Mandatory;
        }
        return Relevance::Optional;
    }
    Relevance::None
}
