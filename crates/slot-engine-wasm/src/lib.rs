//! WASM bindings for slot-engine.
//!
//! Exposes the open-slot query to JavaScript via `wasm-bindgen`. All complex
//! types are passed as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/slot-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use slot_engine::{
    find_open_slots, minute_of_day, Event, MeetingRequest, TimeRange, MINUTES_PER_DAY,
};

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// Input format for events passed from JavaScript.
#[derive(Deserialize)]
struct EventInput {
    name: String,
    start: String,
    end: String,
    attendees: Vec<String>,
}

/// Input format for the meeting request passed from JavaScript.
#[derive(Deserialize)]
struct RequestInput {
    #[serde(default)]
    attendees: Vec<String>,
    #[serde(default)]
    optional_attendees: Vec<String>,
    duration: u32,
}

#[derive(Serialize)]
struct SlotDto {
    start: String,
    end: String,
    duration_minutes: u32,
}

impl From<&TimeRange> for SlotDto {
    fn from(slot: &TimeRange) -> Self {
        Self {
            start: format_minute(slot.start),
            end: format_minute(slot.end),
            duration_minutes: slot.duration(),
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers: wall-clock "HH:MM" strings <-> minute-of-day
// ---------------------------------------------------------------------------

/// Parse an `"HH:MM"` wall-clock string into a minute-of-day.
///
/// `"24:00"` is accepted as the exclusive end-of-day boundary, which
/// `NaiveTime` cannot represent.
fn parse_minute(s: &str) -> Result<u32, JsValue> {
    if s == "24:00" {
        return Ok(MINUTES_PER_DAY);
    }
    NaiveTime::parse_from_str(s, "%H:%M")
        .map(minute_of_day)
        .map_err(|e| JsValue::from_str(&format!("Invalid wall-clock time '{}': {}", s, e)))
}

/// Format a minute-of-day back to `"HH:MM"` (`1440` renders as `"24:00"`).
fn format_minute(minute: u32) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

/// Convert a JSON array of `{name, start, end, attendees}` objects into
/// engine events.
fn parse_events_json(json: &str) -> Result<Vec<Event>, JsValue> {
    let inputs: Vec<EventInput> = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid events JSON: {}", e)))?;

    inputs
        .into_iter()
        .map(|input| {
            let start = parse_minute(&input.start)?;
            let end = parse_minute(&input.end)?;
            let when = TimeRange::new(start, end).map_err(|e| {
                JsValue::from_str(&format!("Event '{}': {}", input.name, e))
            })?;
            Ok(Event::new(input.name, when, input.attendees))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Find every open slot for a meeting request against a day of events.
///
/// `events_json` must be a JSON array of `{name, start, end, attendees}`
/// objects with `"HH:MM"` wall-clock times. `request_json` must be a
/// `{attendees, optional_attendees, duration}` object where `duration` is in
/// minutes. Returns a JSON string containing an array of
/// `{start, end, duration_minutes}` objects sorted by start time.
///
/// If no slot satisfies both mandatory and optional attendees, the query
/// falls back to mandatory attendees only; the result is empty when even
/// that fails.
#[wasm_bindgen(js_name = "findOpenSlots")]
pub fn find_open_slots_json(events_json: &str, request_json: &str) -> Result<String, JsValue> {
    let events = parse_events_json(events_json)?;

    let input: RequestInput = serde_json::from_str(request_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid request JSON: {}", e)))?;
    let request = MeetingRequest::new(input.attendees, input.optional_attendees, input.duration);

    let slots = find_open_slots(&events, &request);

    let dtos: Vec<SlotDto> = slots.iter().map(SlotDto::from).collect();
    serde_json::to_string(&dtos)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
