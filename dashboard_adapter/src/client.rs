//! The fetch boundary: one operation per dashboard.
//!
//! Each operation fetches its endpoint, validates and parses the body, and
//! (for the wine dashboard) projects the charts. Any failure along the way
//! is logged once at `error` level and returned as a [`FetchFailure`]; the
//! `load_*` variants turn that into `None` for callers that only need to know
//! whether there is something to render.

use indexmap::IndexMap;
use tracing::error;

use crate::{
    config::AdapterConfig,
    dashboards::wine::assemble_wine_dashboard,
    errors::{ConfigError, FetchFailure},
    models::{
        dashboard::{DashboardViewModel, WineDashboardPayload},
        forecast::OliveForecast,
    },
    providers::{AnalyticsProvider, Endpoint, FetchCause, fetch_payload, http::HttpProvider},
    style::ChartStyle,
};

/// Dashboard operations over an [`AnalyticsProvider`].
///
/// The client holds no per-call state, so a single instance can serve
/// concurrent calls.
#[derive(Debug, Clone)]
pub struct DashboardClient<P = HttpProvider> {
    provider: P,
    chart_styles: IndexMap<String, ChartStyle>,
}

impl DashboardClient<HttpProvider> {
    /// Builds an HTTP-backed client from a validated configuration.
    pub fn from_config(config: &AdapterConfig) -> Result<Self, ConfigError> {
        let provider = HttpProvider::new(&config.base_url)?;
        Ok(Self::new(provider).with_chart_styles(config.charts.clone()))
    }
}

impl<P: AnalyticsProvider> DashboardClient<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            chart_styles: IndexMap::new(),
        }
    }

    /// Per-chart style overrides applied during wine dashboard assembly.
    pub fn with_chart_styles(mut self, chart_styles: IndexMap<String, ChartStyle>) -> Self {
        self.chart_styles = chart_styles;
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Fetches the wine dashboard and projects every chart in its layout.
    pub async fn wine_dashboard(&self) -> Result<DashboardViewModel, FetchFailure> {
        self.fetch_wine_dashboard()
            .await
            .map_err(|cause| report_failure(Endpoint::WineDashboard, cause))
    }

    async fn fetch_wine_dashboard(&self) -> Result<DashboardViewModel, FetchCause> {
        let payload: WineDashboardPayload =
            fetch_payload(&self.provider, Endpoint::WineDashboard).await?;
        assemble_wine_dashboard(payload, &self.chart_styles)
    }

    /// Like [`Self::wine_dashboard`], with failures collapsed to `None`.
    pub async fn load_wine_dashboard(&self) -> Option<DashboardViewModel> {
        self.wine_dashboard().await.ok()
    }

    /// Fetches the full olive forecast result (products and scorecard).
    pub async fn olive_forecast(&self) -> Result<OliveForecast, FetchFailure> {
        let endpoint = Endpoint::OliveForecasting;
        fetch_payload(&self.provider, endpoint)
            .await
            .map_err(|cause| report_failure(endpoint, cause))
    }

    /// Like [`Self::olive_forecast`], with failures collapsed to `None`.
    pub async fn load_olive_forecast(&self) -> Option<OliveForecast> {
        self.olive_forecast().await.ok()
    }
}

fn report_failure(endpoint: Endpoint, cause: FetchCause) -> FetchFailure {
    let failure = FetchFailure::new(endpoint, cause);
    error!(
        operation = endpoint.operation(),
        endpoint = endpoint.path(),
        kind = %failure.kind,
        error = %failure.cause,
        "dashboard fetch failed"
    );
    failure
}
