use crate::model::EventRecord;

/// Render accepted events as a short human-readable list
///
/// Tolerates sparse records: a missing or ill-typed field falls back to
/// placeholder text instead of failing the whole summary.
pub fn format_events_summary(events: &[EventRecord]) -> String {
    if events.is_empty() {
        return "No events found.".to_string();
    }

    let mut lines = vec![format!("Found {} event(s):", events.len())];

    for (i, event) in events.iter().enumerate() {
        let title = event.summary().unwrap_or("Untitled Event");
        let start_time = event.start_date_time().unwrap_or("Unknown time");
        let location = event.location().unwrap_or("No location");

        lines.push(format!("{}. {} - {} at {}", i + 1, title, start_time, location));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn record(value: Value) -> EventRecord {
        match value {
            Value::Object(map) => EventRecord::from(map),
            _ => panic!("test records must be objects"),
        }
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(format_events_summary(&[]), "No events found.");
    }

    #[test]
    fn test_numbered_summary() {
        let events = vec![
            record(json!({
                "summary": "Team sync",
                "start": {"dateTime": "2024-03-15T14:00:00"},
                "location": "Room A"
            })),
            record(json!({
                "summary": "Lunch",
                "start": {"dateTime": "2024-03-15T12:00:00"},
                "location": "Cafeteria"
            })),
        ];

        assert_eq!(
            format_events_summary(&events),
            "Found 2 event(s):\n\
             1. Team sync - 2024-03-15T14:00:00 at Room A\n\
             2. Lunch - 2024-03-15T12:00:00 at Cafeteria"
        );
    }

    #[test]
    fn test_sparse_record_uses_placeholders() {
        let events = vec![record(json!({"summary": "Dentist"}))];
        assert_eq!(
            format_events_summary(&events),
            "Found 1 event(s):\n1. Dentist - Unknown time at No location"
        );
    }
}
