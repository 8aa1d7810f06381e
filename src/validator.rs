use crate::error::{Error, ParseResult};
use serde_json::Value;
use tracing::warn;

/// Keys every calendar event must carry
pub const REQUIRED_FIELDS: [&str; 5] = ["summary", "start", "end", "location", "description"];

/// Keys whose value must be an object holding a dateTime entry
const TIME_FIELDS: [&str; 2] = ["start", "end"];

/// Check a candidate against the minimal calendar-event shape
///
/// Presence and shape only. Values are never coerced, and a `dateTime`
/// string is not checked for being a well-formed timestamp; deeper
/// semantic validation belongs to the downstream calendar system.
pub fn validate_event(record: &Value) -> ParseResult<()> {
    let event = record.as_object().ok_or(Error::NotAnObject)?;

    for field in REQUIRED_FIELDS {
        if !event.contains_key(field) {
            return Err(Error::MissingField(field));
        }
    }

    for field in TIME_FIELDS {
        let valid = event
            .get(field)
            .and_then(Value::as_object)
            .is_some_and(|time| time.contains_key("dateTime"));
        if !valid {
            return Err(Error::InvalidTime(field));
        }
    }

    Ok(())
}

/// Boolean form of [`validate_event`]; failures are logged, not returned
pub fn is_valid_event(record: &Value) -> bool {
    match validate_event(record) {
        Ok(()) => true,
        Err(e) => {
            warn!("invalid calendar event: {}", e);
            false
        }
    }
}
