//! Projection of raw chart data into chart descriptors.
//!
//! Every formatter is a pure function of `(&RawChartData, &ChartStyle)`:
//! it never mutates its input, and the descriptor it returns owns copies of
//! the series and axis metadata. Calling a formatter twice with the same
//! input yields equal descriptors.

pub mod bar;
pub mod line;
pub mod pie;

use crate::{
    models::{
        descriptor::{ChartDescriptor, ChartKind, DataLabels, Tooltip, TooltipValue, ValueFormatter},
        raw::RawChartData,
    },
    style::ChartStyle,
};

/// Height of every chart the formatters produce, in pixels.
pub const CHART_HEIGHT: u32 = 300;

/// Dispatches to the formatter for `kind`.
pub fn format_chart(kind: ChartKind, data: &RawChartData, style: &ChartStyle) -> ChartDescriptor {
    match kind {
        ChartKind::Bar => bar::format_bar_chart(data, style),
        ChartKind::Pie => pie::format_pie_chart(data, style),
        ChartKind::Line => line::format_line_chart(data, style),
    }
}

fn raw_value_tooltip() -> Tooltip {
    Tooltip {
        y: TooltipValue {
            formatter: ValueFormatter::Raw,
        },
    }
}

fn no_data_labels() -> DataLabels {
    DataLabels { enabled: false }
}
