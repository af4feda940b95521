//! Olive oil demand forecast, grouped product → county → supplier.
//!
//! The forecast endpoint returns tables rather than chart data; a drill-down
//! UI picks one supplier at a time and renders it with
//! [`SupplierForecast::to_line_chart`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    formatters::line::format_line_chart,
    models::{
        descriptor::ChartDescriptor,
        raw::{Axis, NamedSeries, RawChartData, RawChartOptions, SeriesEntry},
    },
    style::ChartStyle,
};

/// Body of `GET /api/olive-forecasting`, kept whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OliveForecast {
    /// Product id → per-county breakdown, in backend order.
    pub products: IndexMap<String, Vec<CountyForecast>>,
    /// Optional summary section, passed through verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scorecard: Option<IndexMap<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountyForecast {
    pub county: String,
    pub suppliers: Vec<SupplierForecast>,
}

/// Quarterly figures for one supplier; all lists are aligned with `quarters`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierForecast {
    pub supplier: String,
    pub quarters: Vec<Value>,
    pub units_sold: Vec<i64>,
    pub forecasted: Vec<i64>,
    pub inventory: Vec<i64>,
}

impl OliveForecast {
    /// Counties reported for `product`, or an empty slice if it is unknown.
    pub fn counties(&self, product: &str) -> &[CountyForecast] {
        self.products.get(product).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn supplier(
        &self,
        product: &str,
        county: &str,
        supplier: &str,
    ) -> Option<&SupplierForecast> {
        self.counties(product)
            .iter()
            .find(|c| c.county == county)?
            .suppliers
            .iter()
            .find(|s| s.supplier == supplier)
    }
}

impl SupplierForecast {
    /// Projects this supplier into a smoothed line chart with three series
    /// (units sold, forecast, inventory) over the quarters.
    pub fn to_line_chart(&self, style: &ChartStyle) -> ChartDescriptor {
        let raw = RawChartData {
            series: vec![
                SeriesEntry::Named(NamedSeries::new("Units Sold", self.units_sold.iter().copied())),
                SeriesEntry::Named(NamedSeries::new("Forecasted", self.forecasted.iter().copied())),
                SeriesEntry::Named(NamedSeries::new("Inventory", self.inventory.iter().copied())),
            ],
            chart_options: RawChartOptions {
                xaxis: Some(Axis::with_categories(self.quarters.iter().cloned())),
                labels: None,
            },
        };
        format_line_chart(&raw, style)
    }
}
