use miette::Diagnostic;
use thiserror::Error;

/// Main error type for the extraction pipeline
///
/// None of these variants cross the public API boundary: extraction and
/// validation convert every failure into a sentinel result (`None`,
/// `false`, an empty report). They exist so that strategy and validation
/// failures carry a diagnosable cause for logging.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("JSON parse failed: {0}")]
    #[diagnostic(code(tapahtuma::parse))]
    Parse(#[from] serde_json::Error),

    #[error("no JSON-shaped content found")]
    #[diagnostic(code(tapahtuma::no_candidate))]
    NoCandidate,

    #[error("candidate is not a JSON object")]
    #[diagnostic(code(tapahtuma::not_an_object))]
    NotAnObject,

    #[error("missing required field: {0}")]
    #[diagnostic(code(tapahtuma::missing_field))]
    MissingField(&'static str),

    #[error("invalid {0} format: expected an object with a dateTime key")]
    #[diagnostic(code(tapahtuma::invalid_time))]
    InvalidTime(&'static str),
}

/// Type alias for Result with our Error type
pub type ParseResult<T> = Result<T, Error>;
