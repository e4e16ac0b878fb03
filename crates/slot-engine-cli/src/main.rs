//! `slots` CLI — find open meeting slots in a day of calendar events.
//!
//! ## Usage
//!
//! ```sh
//! # Find hour-long slots that work for alice and bob (events from a file)
//! slots find -i day.json -a alice -a bob -d 60
//!
//! # Events via stdin, carol preferred but not required
//! cat day.json | slots find -a alice --optional carol -d 30
//!
//! # Machine-readable output
//! slots find -i day.json -a alice -d 45 --json
//! ```
//!
//! The events file is a JSON array of `{name, start, end, attendees}` objects
//! with wall-clock `"HH:MM"` times; `"24:00"` is accepted as an end time for
//! events that run to the end of the day.

use anyhow::{Context, Result};
use chrono::NaiveTime;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::io::{self, Read};

use slot_engine::{find_open_slots, minute_of_day, Event, MeetingRequest, TimeRange, MINUTES_PER_DAY};

#[derive(Parser)]
#[command(name = "slots", version, about = "Meeting slot finder CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find open slots for a meeting request against a day of events
    Find {
        /// Events JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Mandatory attendee (repeatable)
        #[arg(short, long = "attendee")]
        attendees: Vec<String>,
        /// Optional attendee (repeatable)
        #[arg(long = "optional")]
        optional_attendees: Vec<String>,
        /// Required meeting duration in minutes
        #[arg(short, long)]
        duration: u32,
        /// Emit JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },
}

/// Input format for events in the JSON file.
#[derive(Deserialize)]
struct EventInput {
    name: String,
    start: String,
    end: String,
    attendees: Vec<String>,
}

/// Output format for a single open slot (with --json).
#[derive(Serialize)]
struct SlotOutput {
    start: String,
    end: String,
    duration_minutes: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Find {
            input,
            output,
            attendees,
            optional_attendees,
            duration,
            json,
        } => {
            let raw = read_input(input.as_deref())?;
            let events = parse_events(&raw)?;
            let request = MeetingRequest::new(attendees, optional_attendees, duration);

            let slots = find_open_slots(&events, &request);

            let rendered = if json {
                render_json(&slots)?
            } else {
                render_text(&slots)
            };
            write_output(output.as_deref(), &rendered)?;
        }
    }

    Ok(())
}

/// Parse the events JSON into engine events, converting wall-clock times to
/// minutes since midnight.
fn parse_events(raw: &str) -> Result<Vec<Event>> {
    let inputs: Vec<EventInput> =
        serde_json::from_str(raw).context("Failed to parse events JSON")?;

    inputs
        .into_iter()
        .map(|input| {
            let start = parse_minute(&input.start)
                .with_context(|| format!("Event '{}': bad start time", input.name))?;
            let end = parse_minute(&input.end)
                .with_context(|| format!("Event '{}': bad end time", input.name))?;
            let when = TimeRange::new(start, end)
                .with_context(|| format!("Event '{}': invalid time range", input.name))?;
            Ok(Event::new(input.name, when, input.attendees))
        })
        .collect()
}

/// Parse an `"HH:MM"` wall-clock string into a minute-of-day.
///
/// `"24:00"` is accepted as the exclusive end-of-day boundary, which
/// `NaiveTime` cannot represent.
fn parse_minute(s: &str) -> Result<u32> {
    if s == "24:00" {
        return Ok(MINUTES_PER_DAY);
    }
    let t = NaiveTime::parse_from_str(s, "%H:%M")
        .with_context(|| format!("Invalid wall-clock time '{}', expected HH:MM", s))?;
    Ok(minute_of_day(t))
}

/// Format a minute-of-day back to `"HH:MM"` (`1440` renders as `"24:00"`).
fn format_minute(minute: u32) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

fn render_text(slots: &[TimeRange]) -> String {
    if slots.is_empty() {
        return "No open slots.\n".to_string();
    }
    let mut out = String::new();
    for slot in slots {
        out.push_str(&format!(
            "{}-{} ({} min)\n",
            format_minute(slot.start),
            format_minute(slot.end),
            slot.duration()
        ));
    }
    out
}

fn render_json(slots: &[TimeRange]) -> Result<String> {
    let outputs: Vec<SlotOutput> = slots
        .iter()
        .map(|slot| SlotOutput {
            start: format_minute(slot.start),
            end: format_minute(slot.end),
            duration_minutes: slot.duration(),
        })
        .collect();
    let mut rendered =
        serde_json::to_string_pretty(&outputs).context("Failed to serialize slots")?;
    rendered.push('\n');
    Ok(rendered)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
