use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::descriptor::ChartDescriptor;

/// Headline metrics of the wine dashboard, passed through unchanged.
///
/// Each key must be present, but its value is not interpreted: an empty
/// dataset reports `topCountry: null`, and an integral `avgRating` stays
/// integral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WineKpis {
    pub total_wines: Value,
    pub avg_rating: Value,
    pub top_country: Value,
    pub variety_count: Value,
}

/// Body of `GET /api/wine-dashboard`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WineDashboardPayload {
    pub kpis: WineKpis,
    /// Chart name → raw chart JSON, in the order the backend sent them.
    ///
    /// Entries stay untyped until assembly so that a malformed chart the
    /// layout does not use cannot fail the whole dashboard.
    pub charts: IndexMap<String, Value>,
}

/// What the rendering layer receives for one dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardViewModel {
    pub kpis: WineKpis,
    /// Chart name → descriptor, in layout order.
    pub charts: IndexMap<String, ChartDescriptor>,
}

impl DashboardViewModel {
    pub fn chart(&self, name: &str) -> Option<&ChartDescriptor> {
        self.charts.get(name)
    }
}
