//! Dashboard assembly: which raw chart goes through which formatter.

pub mod wine;

use indexmap::IndexMap;

use crate::{
    formatters::format_chart,
    models::{
        descriptor::{ChartDescriptor, ChartKind},
        raw::RawChartData,
    },
    style::ChartStyle,
};

/// One row of a dashboard layout table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartLayout {
    /// Key of the chart in the payload and in the view model.
    pub name: &'static str,
    pub kind: ChartKind,
    /// Colours for this chart; empty means the formatter's default palette.
    pub colors: &'static [&'static str],
}

impl ChartLayout {
    pub fn default_style(&self) -> ChartStyle {
        if self.colors.is_empty() {
            ChartStyle::Default
        } else {
            ChartStyle::custom(self.colors.iter().copied())
        }
    }

    /// Projects `data` with the override for this chart if there is one,
    /// otherwise with the layout's own style.
    pub fn project(
        &self,
        data: &RawChartData,
        overrides: &IndexMap<String, ChartStyle>,
    ) -> ChartDescriptor {
        match overrides.get(self.name) {
            Some(style) => format_chart(self.kind, data, style),
            None => format_chart(self.kind, data, &self.default_style()),
        }
    }
}

/// Whether any dashboard layout renders a chart called `name`.
pub fn is_known_chart(name: &str) -> bool {
    wine::WINE_DASHBOARD_LAYOUT.iter().any(|l| l.name == name)
}
