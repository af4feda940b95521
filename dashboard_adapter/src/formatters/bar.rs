use crate::{
    formatters::{CHART_HEIGHT, no_data_labels, raw_value_tooltip},
    models::{
        descriptor::{
            BarPlotOptions, ChartDescriptor, ChartKind, ChartOptions, ChartSettings, Fill,
            PlotOptions, Toolbar,
        },
        raw::RawChartData,
    },
    style::{ChartStyle, DEFAULT_BAR_ACCENT},
};

/// Formats `data` as a vertical column chart in a single accent colour.
///
/// Only the first colour of a custom style is used; bars are never
/// multi-coloured. The x-axis is copied from the input as-is.
pub fn format_bar_chart(data: &RawChartData, style: &ChartStyle) -> ChartDescriptor {
    let accent = style
        .resolve(&[DEFAULT_BAR_ACCENT])
        .into_iter()
        .next()
        .unwrap_or_else(|| DEFAULT_BAR_ACCENT.to_string());

    ChartDescriptor {
        series: data.series.clone(),
        chart_options: ChartOptions {
            chart: ChartSettings {
                kind: ChartKind::Bar,
                height: CHART_HEIGHT,
                toolbar: Some(Toolbar { show: false }),
            },
            plot_options: Some(PlotOptions {
                bar: BarPlotOptions {
                    horizontal: false,
                    column_width: "55%".to_string(),
                    border_radius: 6,
                },
            }),
            xaxis: data.chart_options.xaxis.clone(),
            labels: None,
            fill: Some(Fill { opacity: 1.0 }),
            stroke: None,
            data_labels: Some(no_data_labels()),
            tooltip: Some(raw_value_tooltip()),
            legend: None,
            responsive: Vec::new(),
            colors: vec![accent],
        },
    }
}
