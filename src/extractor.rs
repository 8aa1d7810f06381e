use crate::error::{Error, ParseResult};
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

lazy_static! {
    /// Labeled ```json code block
    static ref JSON_FENCE: Regex =
        Regex::new(r"(?s)```json\s*\n(.*?)\n\s*```").expect("valid fence pattern");
    /// Unlabeled ``` code block
    static ref BARE_FENCE: Regex =
        Regex::new(r"(?s)```\s*\n(.*?)\n\s*```").expect("valid fence pattern");
    /// Single-backtick inline span
    static ref INLINE_SPAN: Regex = Regex::new(r"`([^`]+)`").expect("valid span pattern");
    /// Non-greedy bracket-shaped substring
    static ref BRACKET_PATTERN: Regex =
        Regex::new(r"(?s)\[.*?\]|\{.*?\}").expect("valid bracket pattern");
}

/// One extraction heuristic: a name for diagnostics plus the attempt itself
type Strategy = (&'static str, fn(&str) -> ParseResult<Value>);

/// Ordered strategy chain; earlier entries win
const STRATEGIES: [Strategy; 4] = [
    ("fenced-block", extract_from_code_block),
    ("leading-array", extract_leading_array),
    ("leading-object", extract_leading_object),
    ("embedded-pattern", extract_embedded),
];

/// Extract the first parseable JSON value from free-form model output
///
/// Tries each strategy in order and short-circuits on the first success.
/// Returns `None` when no strategy can produce a JSON value; for a prose
/// response that is the expected outcome, not an error.
pub fn extract_json_from_text(text: &str) -> Option<Value> {
    let text = text.trim();
    if text.is_empty() {
        debug!("empty response text, nothing to extract");
        return None;
    }

    for (name, attempt) in STRATEGIES {
        match attempt(text) {
            Ok(value) => {
                debug!("strategy {} produced a JSON value", name);
                return Some(value);
            }
            Err(e) => debug!("strategy {} failed: {}", name, e),
        }
    }

    warn!("all extraction strategies failed on response text");
    None
}

/// Strategy 1: JSON inside markdown code fences
///
/// Only the first match of each pattern is tried, most specific fence
/// first. A fence whose body does not parse fails over to the next
/// pattern, not to a wider search.
fn extract_from_code_block(text: &str) -> ParseResult<Value> {
    for pattern in [&*JSON_FENCE, &*BARE_FENCE, &*INLINE_SPAN] {
        if let Some(caps) = pattern.captures(text) {
            if let Some(body) = caps.get(1) {
                match serde_json::from_str(body.as_str().trim()) {
                    Ok(value) => return Ok(value),
                    Err(e) => debug!("code block body is not JSON: {}", e),
                }
            }
        }
    }

    Err(Error::NoCandidate)
}

/// Strategy 2: response begins with a JSON array
fn extract_leading_array(text: &str) -> ParseResult<Value> {
    if !text.starts_with('[') {
        return Err(Error::NoCandidate);
    }

    // Models sometimes close with a stray fence; drop trailing backticks
    let cleaned = text.trim_end_matches('`').trim_end();
    let value: Value = serde_json::from_str(cleaned)?;
    if value.is_array() {
        Ok(value)
    } else {
        Err(Error::NoCandidate)
    }
}

/// Strategy 3: response begins with a JSON object
fn extract_leading_object(text: &str) -> ParseResult<Value> {
    if !text.starts_with('{') {
        return Err(Error::NoCandidate);
    }

    let cleaned = text.trim_end_matches('`').trim_end();
    let value: Value = serde_json::from_str(cleaned)?;
    if value.is_object() {
        Ok(value)
    } else {
        Err(Error::NoCandidate)
    }
}

/// Strategy 4: whole-text parse, then embedded bracket patterns
///
/// The bracket scan is best-effort. The non-greedy pattern stops at the
/// first closing bracket, so when that slice fails to parse the scan
/// retries from the same opening bracket with a prefix parse that reads
/// one complete JSON value. A bracket inside a string literal ahead of
/// the real payload can still mislead it.
fn extract_embedded(text: &str) -> ParseResult<Value> {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => return Ok(value),
        Err(e) => debug!("whole-text parse failed: {}", e),
    }

    for found in BRACKET_PATTERN.find_iter(text) {
        if let Ok(value) = serde_json::from_str::<Value>(found.as_str()) {
            return Ok(value);
        }
        if let Ok(value) = parse_value_prefix(&text[found.start()..]) {
            return Ok(value);
        }
    }

    Err(Error::NoCandidate)
}

/// Parse a single JSON value from the start of the text, ignoring the rest
fn parse_value_prefix(text: &str) -> ParseResult<Value> {
    let mut stream = serde_json::Deserializer::from_str(text).into_iter::<Value>();
    match stream.next() {
        Some(Ok(value)) => Ok(value),
        Some(Err(e)) => Err(e.into()),
        None => Err(Error::NoCandidate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_labeled_fence() {
        let text = "Here are your events:\n```json\n[{\"summary\": \"Lunch\"}]\n```\nLet me know!";
        assert_eq!(
            extract_json_from_text(text),
            Some(json!([{"summary": "Lunch"}]))
        );
    }

    #[test]
    fn test_unlabeled_fence() {
        let text = "```\n{\"summary\": \"Lunch\"}\n```";
        assert_eq!(
            extract_json_from_text(text),
            Some(json!({"summary": "Lunch"}))
        );
    }

    #[test]
    fn test_inline_span() {
        let text = "The payload is `{\"a\": 1}` as requested.";
        assert_eq!(extract_json_from_text(text), Some(json!({"a": 1})));
    }

    #[test]
    fn test_fence_with_bad_json_falls_through() {
        // The fence body is not JSON, but the prose carries a parseable object
        let text = "```json\nnot json at all\n```\nmeanwhile {\"a\": 1} elsewhere";
        assert_eq!(extract_json_from_text(text), Some(json!({"a": 1})));
    }

    #[test]
    fn test_leading_array() {
        assert_eq!(
            extract_json_from_text("[1, 2, 3]"),
            Some(json!([1, 2, 3]))
        );

        // Trailing fence backticks left over from a truncated code block
        assert_eq!(
            extract_json_from_text("[{\"a\": 1}]```"),
            Some(json!([{"a": 1}]))
        );
    }

    #[test]
    fn test_leading_object() {
        assert_eq!(
            extract_json_from_text("{\"a\": 1}  "),
            Some(json!({"a": 1}))
        );
        assert_eq!(
            extract_json_from_text("{\"a\": 1}`"),
            Some(json!({"a": 1}))
        );
    }

    #[test]
    fn test_embedded_object_in_prose() {
        let text = "Sure! {\"summary\": \"Call\", \"start\": {\"dateTime\": \"t1\"}} works for me.";
        assert_eq!(
            extract_json_from_text(text),
            Some(json!({"summary": "Call", "start": {"dateTime": "t1"}}))
        );
    }

    #[test]
    fn test_embedded_array_in_prose() {
        let text = "How about these: [{\"summary\": \"A\"}, {\"summary\": \"B\"}] instead?";
        assert_eq!(
            extract_json_from_text(text),
            Some(json!([{"summary": "A"}, {"summary": "B"}]))
        );
    }

    #[test]
    fn test_fence_preferred_over_leading_object() {
        let text = "{\"bare\": true}\n```json\n{\"fenced\": true}\n```";
        assert_eq!(extract_json_from_text(text), Some(json!({"fenced": true})));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(extract_json_from_text(""), None);
        assert_eq!(extract_json_from_text("   \n  "), None);
        assert_eq!(
            extract_json_from_text("I could not find a time that works."),
            None
        );
        // Inline span present but nothing in it parses
        assert_eq!(extract_json_from_text("run `cargo test` first"), None);
        // Brackets that never close into valid JSON
        assert_eq!(extract_json_from_text("mismatched { brackets ]"), None);
    }

    #[test]
    fn test_idempotent() {
        let text = "Sure! {\"a\": [1, {\"b\": 2}]} done";
        let first = extract_json_from_text(text);
        let second = extract_json_from_text(text);
        assert_eq!(first, second);
        assert_eq!(first, Some(json!({"a": [1, {"b": 2}]})));
    }
}
