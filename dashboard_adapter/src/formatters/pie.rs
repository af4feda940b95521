use crate::{
    formatters::CHART_HEIGHT,
    models::{
        descriptor::{
            ChartDescriptor, ChartKind, ChartOptions, ChartSettings, Legend, LegendPosition,
            ResponsiveChart, ResponsiveOptions, ResponsiveRule,
        },
        raw::RawChartData,
    },
    style::{ChartStyle, DEFAULT_PIE_PALETTE},
};

/// Viewport width (px) below which the pie shrinks.
pub const NARROW_BREAKPOINT: u32 = 480;
/// Pie width (px) on narrow viewports.
pub const NARROW_WIDTH: u32 = 200;

/// Formats `data` as a pie chart, reading slice names from
/// `chartOptions.labels`.
///
/// Colours are applied to slices in order. A palette shorter than the slice
/// count is passed on as-is; the renderer decides how to cycle it.
pub fn format_pie_chart(data: &RawChartData, style: &ChartStyle) -> ChartDescriptor {
    let bottom = || Legend {
        position: LegendPosition::Bottom,
    };

    ChartDescriptor {
        series: data.series.clone(),
        chart_options: ChartOptions {
            chart: ChartSettings {
                kind: ChartKind::Pie,
                height: CHART_HEIGHT,
                toolbar: None,
            },
            plot_options: None,
            xaxis: None,
            labels: data.chart_options.labels.clone(),
            fill: None,
            stroke: None,
            data_labels: None,
            tooltip: None,
            legend: Some(bottom()),
            responsive: vec![ResponsiveRule {
                breakpoint: NARROW_BREAKPOINT,
                options: ResponsiveOptions {
                    chart: ResponsiveChart {
                        width: NARROW_WIDTH,
                    },
                    legend: bottom(),
                },
            }],
            colors: style.resolve(&DEFAULT_PIE_PALETTE),
        },
    }
}
