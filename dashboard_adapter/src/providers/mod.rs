//! Provider abstraction for analytic result sets.
//!
//! This module defines the [`AnalyticsProvider`] trait, the single seam between
//! the adapter and whatever serves the analytics JSON. The production
//! implementation is [`http::HttpProvider`], which talks to the backend over
//! HTTP; [`memory::MemoryProvider`] serves canned bodies for tests and demos.
//!
//! Providers only move bytes and report transport problems. Parsing and
//! projection happen in [`fetch_payload`] and the dashboard assemblers, so a
//! test double never has to know anything about chart shapes.
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use dashboard_adapter::providers::{AnalyticsProvider, Endpoint, FetchCause};
//!
//! struct Offline;
//!
//! #[async_trait]
//! impl AnalyticsProvider for Offline {
//!     async fn fetch_body(&self, _endpoint: Endpoint) -> Result<String, FetchCause> {
//!         Err(FetchCause::Status { status: 503, body: "offline".into() })
//!     }
//! }
//! ```

pub mod errors;
pub mod http;
pub mod memory;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

pub use errors::{FetchCause, FetchFailureKind};

/// The analytic endpoints the backend exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// KPIs and chart data for the wine dashboard.
    WineDashboard,
    /// Product → county → supplier forecast tables.
    OliveForecasting,
}

impl Endpoint {
    /// Path relative to the configured base URL.
    pub const fn path(self) -> &'static str {
        match self {
            Endpoint::WineDashboard => "/api/wine-dashboard",
            Endpoint::OliveForecasting => "/api/olive-forecasting",
        }
    }

    /// Operation name used in diagnostics.
    pub const fn operation(self) -> &'static str {
        match self {
            Endpoint::WineDashboard => "wine_dashboard",
            Endpoint::OliveForecasting => "olive_forecast",
        }
    }
}

/// Trait for fetching raw analytics bodies from a backend.
///
/// Implementations must be usable from concurrent calls; none of the
/// adapter's operations share mutable state through a provider.
#[async_trait]
pub trait AnalyticsProvider: Send + Sync {
    /// Fetches the raw response body for `endpoint`.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The body of a successful (2xx) response.
    /// * `Err(FetchCause)` - A transport-level failure: non-success status,
    ///   network error, or an unreadable body.
    async fn fetch_body(&self, endpoint: Endpoint) -> Result<String, FetchCause>;
}

#[async_trait]
impl<P: AnalyticsProvider + ?Sized> AnalyticsProvider for Box<P> {
    async fn fetch_body(&self, endpoint: Endpoint) -> Result<String, FetchCause> {
        (**self).fetch_body(endpoint).await
    }
}

/// Fetches `endpoint` and deserializes the body into `T`.
///
/// Transport problems come back unchanged; a body that does not deserialize
/// becomes [`FetchCause::Decode`]. Nothing is logged here; the caller owns
/// the single diagnostic per failed operation.
pub async fn fetch_payload<T, P>(provider: &P, endpoint: Endpoint) -> Result<T, FetchCause>
where
    T: DeserializeOwned,
    P: AnalyticsProvider + ?Sized,
{
    let body = provider.fetch_body(endpoint).await?;
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::memory::MemoryProvider;
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        value: u32,
    }

    #[test]
    fn endpoint_paths_are_fixed() {
        assert_eq!(Endpoint::WineDashboard.path(), "/api/wine-dashboard");
        assert_eq!(Endpoint::OliveForecasting.path(), "/api/olive-forecasting");
    }

    #[tokio::test]
    async fn fetch_payload_parses_body() {
        let provider = MemoryProvider::new().with_body(Endpoint::WineDashboard, r#"{"value": 7}"#);
        let probe: Probe = fetch_payload(&provider, Endpoint::WineDashboard).await.unwrap();
        assert_eq!(probe.value, 7);
    }

    #[tokio::test]
    async fn fetch_payload_separates_parse_from_transport() {
        let provider = MemoryProvider::new()
            .with_body(Endpoint::WineDashboard, "not json")
            .with_status(Endpoint::OliveForecasting, 500, r#"{"error":"csv missing"}"#);

        let parse = fetch_payload::<Probe, _>(&provider, Endpoint::WineDashboard)
            .await
            .unwrap_err();
        assert_eq!(parse.kind(), FetchFailureKind::Parse);

        let transport = fetch_payload::<Probe, _>(&provider, Endpoint::OliveForecasting)
            .await
            .unwrap_err();
        assert_eq!(transport.kind(), FetchFailureKind::Transport);
    }

    #[tokio::test]
    async fn boxed_providers_dispatch_dynamically() {
        let provider: Box<dyn AnalyticsProvider> =
            Box::new(MemoryProvider::new().with_body(Endpoint::WineDashboard, r#"{"value": 1}"#));
        let probe: Probe = fetch_payload(&provider, Endpoint::WineDashboard).await.unwrap();
        assert_eq!(probe.value, 1);
    }
}
