use reqwest::StatusCode;
use thiserror::Error;

/// Failure of the single best-effort weather fetch.
///
/// Callers treat every variant the same way: log it and leave the loading
/// view in place.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to weather provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("weather provider returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("could not parse weather provider response: {0}")]
    Parse(#[from] serde_json::Error),
}
