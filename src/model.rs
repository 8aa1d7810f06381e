use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A validated calendar event extracted from a model response
///
/// Wraps the raw JSON object so any extra keys supplied by the model
/// survive round-tripping. Validation guarantees the required keys exist;
/// the accessors still return `Option` because values are checked for
/// presence, not type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventRecord(pub Map<String, Value>);

impl EventRecord {
    /// Event title
    pub fn summary(&self) -> Option<&str> {
        self.0.get("summary").and_then(Value::as_str)
    }

    /// Event location
    pub fn location(&self) -> Option<&str> {
        self.0.get("location").and_then(Value::as_str)
    }

    /// Event description
    pub fn description(&self) -> Option<&str> {
        self.0.get("description").and_then(Value::as_str)
    }

    /// Start timestamp exactly as the model produced it
    pub fn start_date_time(&self) -> Option<&str> {
        self.date_time("start")
    }

    /// End timestamp exactly as the model produced it
    pub fn end_date_time(&self) -> Option<&str> {
        self.date_time("end")
    }

    fn date_time(&self, field: &str) -> Option<&str> {
        self.0
            .get(field)
            .and_then(Value::as_object)
            .and_then(|time| time.get("dateTime"))
            .and_then(Value::as_str)
    }
}

impl From<Map<String, Value>> for EventRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Result of collecting events from one extracted JSON value
///
/// Every record in `events` passed validation at collection time, in the
/// order the source value listed them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtractionReport {
    /// Events that passed validation
    pub events: Vec<EventRecord>,
    /// Number of candidates dropped by validation
    pub rejected: usize,
}

impl ExtractionReport {
    /// Number of accepted events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True when no events were accepted
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
