//! # slot-engine
//!
//! Single-day meeting slot finder with mandatory/optional attendee fallback.
//!
//! Given a collection of pre-existing calendar events and a meeting request
//! (mandatory attendees, optional attendees, required duration), the engine
//! computes the ordered list of free intervals long enough to hold the
//! meeting. Times are whole minutes since midnight within one day; free
//! intervals are half-open `[start, end)` ranges.
//!
//! The query tries to satisfy everyone first. If no slot accommodates both
//! mandatory and optional attendees, it falls back to mandatory attendees
//! only and reports whatever that leaves -- possibly nothing.
//!
//! ## Quick start
//!
//! ```rust
//! use slot_engine::{find_open_slots, Event, MeetingRequest, TimeRange};
//!
//! let events = vec![
//!     Event::new("standup", TimeRange::new(540, 555).unwrap(), ["alice"]),
//!     Event::new("1:1", TimeRange::new(600, 630).unwrap(), ["bob"]),
//! ];
//! let request = MeetingRequest::new(["alice", "bob"], ["carol"], 60);
//!
//! let slots = find_open_slots(&events, &request);
//! assert_eq!(slots[0], TimeRange::new(0, 540).unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`query`] — `find_open_slots`, the two-pass fallback query
//! - [`relevance`] — classify events as mandatory, optional, or irrelevant
//! - [`marks`] — ordered start/end boundary markers with the END-before-START
//!   tie-break
//! - [`sweep`] — overlap-counting sweep that emits maximal free intervals
//! - [`range`] — `TimeRange`, `Event`, `MeetingRequest`, day constants
//! - [`error`] — error types for the validating constructors
//!
//! The engine is purely synchronous and stateless: each query is a pure
//! function of its inputs, so callers may invoke it concurrently without
//! coordination.

pub mod error;
pub mod marks;
pub mod query;
pub mod range;
pub mod relevance;
pub mod sweep;

pub use error::SlotError;
pub use query::find_open_slots;
pub use range::{
    minute_of_day, Event, MeetingRequest, TimeRange, END_OF_DAY, MINUTES_PER_DAY, START_OF_DAY,
};
pub use relevance::{classify, Relevance};
