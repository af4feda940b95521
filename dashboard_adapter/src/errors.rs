use std::path::PathBuf;

use shared_utils::env::MissingEnvVarError;
use thiserror::Error;

use crate::providers::{Endpoint, FetchCause, FetchFailureKind};

/// A failed dashboard fetch, normalized at the fetch boundary.
///
/// Transport and parse problems both end up here; `kind` tells them apart
/// for callers that care, while callers that only need "render nothing"
/// can discard it (see the `load_*` methods on
/// [`DashboardClient`](crate::client::DashboardClient)).
#[derive(Debug, Error)]
#[error("{kind} failure fetching {}: {cause}", .endpoint.path())]
pub struct FetchFailure {
    /// Transport vs. parse.
    pub kind: FetchFailureKind,
    /// The endpoint the failing request targeted.
    pub endpoint: Endpoint,
    /// What actually went wrong.
    #[source]
    pub cause: FetchCause,
}

impl FetchFailure {
    pub fn new(endpoint: Endpoint, cause: FetchCause) -> Self {
        Self {
            kind: cause.kind(),
            endpoint,
            cause,
        }
    }
}

/// Errors related to adapter configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error(transparent)]
    MissingEnvVar(#[from] MissingEnvVarError),

    /// The config file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has unknown keys.
    #[error("failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// The base URL does not parse or is not http(s).
    #[error("invalid base URL `{url}`: {message}")]
    InvalidBaseUrl { url: String, message: String },

    /// A chart style override names a chart no dashboard renders.
    #[error("style override for unknown chart `{0}`")]
    UnknownChart(String),

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}
