use crate::{
    formatters::{CHART_HEIGHT, no_data_labels, raw_value_tooltip},
    models::{
        descriptor::{
            ChartDescriptor, ChartKind, ChartOptions, ChartSettings, Curve, Stroke, Toolbar,
        },
        raw::RawChartData,
    },
    style::{ChartStyle, DEFAULT_LINE_PALETTE},
};

/// Formats `data` as a smoothed line chart over the input's x-axis.
pub fn format_line_chart(data: &RawChartData, style: &ChartStyle) -> ChartDescriptor {
    ChartDescriptor {
        series: data.series.clone(),
        chart_options: ChartOptions {
            chart: ChartSettings {
                kind: ChartKind::Line,
                height: CHART_HEIGHT,
                toolbar: Some(Toolbar { show: false }),
            },
            plot_options: None,
            xaxis: data.chart_options.xaxis.clone(),
            labels: None,
            fill: None,
            stroke: Some(Stroke {
                curve: Curve::Smooth,
            }),
            data_labels: Some(no_data_labels()),
            tooltip: Some(raw_value_tooltip()),
            legend: None,
            responsive: Vec::new(),
            colors: style.resolve(&DEFAULT_LINE_PALETTE),
        },
    }
}
