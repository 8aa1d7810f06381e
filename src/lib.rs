//! Recovery of structured calendar events from free-form model responses.
//!
//! A text-generation model asked to emit calendar events returns anything
//! from clean JSON to JSON buried in prose or markdown fences, or no JSON
//! at all. This crate digs the payload out and checks its shape:
//! [`extract_json_from_text`] walks an ordered chain of parsing
//! strategies, [`collect_events`] fans the result into candidate records
//! and validates each one against the minimal calendar-event contract.
//! Nothing here panics or returns an error for malformed input; a
//! response without usable events collects to an empty report.

pub mod collector;
pub mod error;
pub mod extractor;
pub mod model;
pub mod summary;
pub mod utils;
pub mod validator;

pub use collector::collect_events;
pub use extractor::extract_json_from_text;
pub use model::{EventRecord, ExtractionReport};
pub use summary::format_events_summary;
pub use validator::{is_valid_event, validate_event};

/// Run the full pipeline on one model response
///
/// Extracts the first parseable JSON value from the text and collects the
/// valid calendar events out of it. The report is a plain value; any
/// accumulation across conversation turns belongs to the caller.
pub fn parse_events(text: &str) -> ExtractionReport {
    collector::collect_events(extractor::extract_json_from_text(text))
}
