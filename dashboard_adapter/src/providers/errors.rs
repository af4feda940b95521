use std::fmt;

use thiserror::Error;

/// Which side of the fetch boundary a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchFailureKind {
    /// Non-success status, network failure, or the body could not be read.
    Transport,
    /// The body was read but does not have the expected shape.
    Parse,
}

impl fmt::Display for FetchFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchFailureKind::Transport => f.write_str("transport"),
            FetchFailureKind::Parse => f.write_str("parse"),
        }
    }
}

/// The underlying reason an analytics fetch failed.
#[derive(Debug, Error)]
pub enum FetchCause {
    /// The backend answered with a non-success status.
    #[error("API returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// An error during the request itself (e.g., connection refused, body read).
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The body is not valid JSON or is missing required keys.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The payload parsed, but a chart the dashboard layout requires is absent.
    #[error("response is missing chart `{0}`")]
    MissingChart(String),
}

impl FetchCause {
    /// Classifies the cause into the two-way transport/parse taxonomy.
    pub fn kind(&self) -> FetchFailureKind {
        match self {
            FetchCause::Status { .. } | FetchCause::Request(_) => FetchFailureKind::Transport,
            FetchCause::Decode(_) | FetchCause::MissingChart(_) => FetchFailureKind::Parse,
        }
    }
}
