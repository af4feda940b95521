//! Chart descriptors: the `{ series, chartOptions }` view models handed to
//! the rendering layer.
//!
//! Field names serialize in camelCase so the JSON matches what an
//! ApexCharts-style component expects. Optional sections are omitted rather
//! than serialized as `null`.

use serde::Serialize;
use serde_json::Value;

use crate::models::raw::{Axis, SeriesEntry};

/// A ready-to-render chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDescriptor {
    pub series: Vec<SeriesEntry>,
    pub chart_options: ChartOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Pie,
    Line,
}

/// Fully populated rendering configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub chart: ChartSettings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_options: Option<PlotOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<Fill>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Stroke>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_labels: Option<DataLabels>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<Tooltip>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub responsive: Vec<ResponsiveRule>,
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSettings {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toolbar: Option<Toolbar>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Toolbar {
    pub show: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotOptions {
    pub bar: BarPlotOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarPlotOptions {
    pub horizontal: bool,
    pub column_width: String,
    pub border_radius: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fill {
    pub opacity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Curve {
    Smooth,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stroke {
    pub curve: Curve,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataLabels {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub y: TooltipValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipValue {
    pub formatter: ValueFormatter,
}

/// How the renderer should turn a data point into tooltip text.
///
/// Serialized as a tag; the renderer maps it to its own formatter callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueFormatter {
    /// The value exactly as sent, with no rounding, units or separators.
    Raw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub position: LegendPosition,
}

/// Options applied by the renderer below a viewport width.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponsiveRule {
    pub breakpoint: u32,
    pub options: ResponsiveOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponsiveOptions {
    pub chart: ResponsiveChart,
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponsiveChart {
    pub width: u32,
}
