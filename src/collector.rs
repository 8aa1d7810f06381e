use crate::model::{EventRecord, ExtractionReport};
use crate::validator;
use serde_json::Value;
use tracing::{debug, info, warn};

/// Fan an extracted JSON value into validated event records
///
/// `None` input (nothing was extracted) and non-container values both
/// collect to an empty report; neither is an error. Candidates that fail
/// validation are dropped and counted, so the caller can observe how much
/// of the response was unusable without any of it aborting the rest.
pub fn collect_events(value: Option<Value>) -> ExtractionReport {
    let candidates = match value {
        None => Vec::new(),
        Some(Value::Array(items)) => items,
        Some(object @ Value::Object(_)) => vec![object],
        Some(other) => {
            debug!("extracted JSON is not an object or array: {}", other);
            Vec::new()
        }
    };

    let mut report = ExtractionReport::default();
    for candidate in candidates {
        match validator::validate_event(&candidate) {
            Ok(()) => {
                if let Value::Object(map) = candidate {
                    report.events.push(EventRecord::from(map));
                }
            }
            Err(e) => {
                warn!("dropping candidate event: {}", e);
                report.rejected += 1;
            }
        }
    }

    info!(
        "collected {} event(s), rejected {}",
        report.events.len(),
        report.rejected
    );
    report
}
