use std::num::ParseIntError;

use thiserror::Error;

/// Failure that aborts a whole fetch. No results are produced.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request timed out after {timeout_secs:.3}s: {source}")]
    Timeout {
        timeout_secs: f64,
        #[source]
        source: reqwest::Error,
    },

    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("unexpected status code: {status}")]
    UnexpectedStatus { status: u16 },

    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("failed to decode response body as JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("response body is not a JSON object (got {kind})")]
    NotAnObject { kind: &'static str },
}

/// Failure isolated to one field of a fetch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error(transparent)]
    Selector(#[from] SelectorError),

    #[error(transparent)]
    Convert(#[from] ConvertError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("no value found for selector `{selector}`")]
    NotFound { selector: String },

    #[error("selector `{selector}` matched {count} values, expected exactly one")]
    Ambiguous { selector: String, count: usize },

    #[error("invalid selector `{selector}`: {reason}")]
    Invalid { selector: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("cannot parse `{input}` as an integer: {source}")]
    InvalidInteger {
        input: String,
        #[source]
        source: ParseIntError,
    },
}
