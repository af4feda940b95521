use indexmap::IndexMap;

use crate::{
    dashboards::ChartLayout,
    models::{
        dashboard::{DashboardViewModel, WineDashboardPayload},
        descriptor::ChartKind,
        raw::RawChartData,
    },
    providers::FetchCause,
    style::ChartStyle,
};

const fn bar(name: &'static str, colors: &'static [&'static str]) -> ChartLayout {
    ChartLayout {
        name,
        kind: ChartKind::Bar,
        colors,
    }
}

const fn pie(name: &'static str, colors: &'static [&'static str]) -> ChartLayout {
    ChartLayout {
        name,
        kind: ChartKind::Pie,
        colors,
    }
}

const fn line(name: &'static str, colors: &'static [&'static str]) -> ChartLayout {
    ChartLayout {
        name,
        kind: ChartKind::Line,
        colors,
    }
}

/// Charts of the wine dashboard, in display order.
pub const WINE_DASHBOARD_LAYOUT: [ChartLayout; 12] = [
    bar("countryChart", &[]),
    pie("typeChart", &[]),
    line("ratingOverYearChart", &[]),
    bar("regionChart", &["#60a5fa"]),
    bar("wineryChart", &["#f59e0b"]),
    bar("priceCountryChart", &["#10b981"]),
    pie("priceTypeChart", &["#a78bfa", "#34d399", "#fbbf24", "#60a5fa"]),
    bar("priceBucketChart", &["#f87171"]),
    pie("bestValueChart", &["#4ade80", "#6366f1", "#facc15", "#ec4899"]),
    bar("vintageChart", &["#c084fc"]),
    bar("wineryRatingChart", &["#ec4899"]),
    bar("typePriceChart", &["#fcd34d"]),
];

/// Builds the wine view model from a parsed payload.
///
/// Every chart in [`WINE_DASHBOARD_LAYOUT`] must be present and well formed;
/// the first one that is not aborts assembly, so a partial view model is
/// never returned. Charts the layout does not name are ignored.
pub fn assemble_wine_dashboard(
    mut payload: WineDashboardPayload,
    overrides: &IndexMap<String, ChartStyle>,
) -> Result<DashboardViewModel, FetchCause> {
    let mut charts = IndexMap::with_capacity(WINE_DASHBOARD_LAYOUT.len());

    for layout in &WINE_DASHBOARD_LAYOUT {
        let raw = payload
            .charts
            .swap_remove(layout.name)
            .ok_or_else(|| FetchCause::MissingChart(layout.name.to_string()))?;
        let data: RawChartData = serde_json::from_value(raw)?;
        charts.insert(layout.name.to_string(), layout.project(&data, overrides));
    }

    Ok(DashboardViewModel {
        kpis: payload.kpis,
        charts,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::providers::FetchFailureKind;

    fn payload_with(charts: Value) -> WineDashboardPayload {
        payload_with_kpis(
            json!({ "totalWines": 10, "avgRating": 3.9, "topCountry": "Spain", "varietyCount": 4 }),
            charts,
        )
    }

    fn payload_with_kpis(kpis: Value, charts: Value) -> WineDashboardPayload {
        serde_json::from_value(json!({ "kpis": kpis, "charts": charts })).unwrap()
    }

    fn full_charts() -> Value {
        let mut charts = serde_json::Map::new();
        for layout in &WINE_DASHBOARD_LAYOUT {
            let chart = match layout.kind {
                ChartKind::Pie => {
                    json!({ "series": [1, 2], "chartOptions": { "labels": ["a", "b"] } })
                }
                _ => json!({
                    "series": [{ "name": layout.name, "data": [1, 2] }],
                    "chartOptions": { "xaxis": { "categories": ["a", "b"] } }
                }),
            };
            charts.insert(layout.name.to_string(), chart);
        }
        Value::Object(charts)
    }

    #[test]
    fn layout_names_are_unique() {
        let mut names: Vec<_> = WINE_DASHBOARD_LAYOUT.iter().map(|l| l.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), WINE_DASHBOARD_LAYOUT.len());
    }

    #[test]
    fn assembles_every_chart_in_layout_order() {
        let vm = assemble_wine_dashboard(payload_with(full_charts()), &IndexMap::new()).unwrap();

        let names: Vec<_> = vm.charts.keys().map(String::as_str).collect();
        let expected: Vec<_> = WINE_DASHBOARD_LAYOUT.iter().map(|l| l.name).collect();
        assert_eq!(names, expected);

        assert_eq!(vm.chart("countryChart").unwrap().chart_options.colors, vec!["#8b5cf6"]);
        assert_eq!(vm.chart("regionChart").unwrap().chart_options.colors, vec!["#60a5fa"]);
        assert_eq!(
            vm.chart("bestValueChart").unwrap().chart_options.colors,
            vec!["#4ade80", "#6366f1", "#facc15", "#ec4899"]
        );
        assert_eq!(
            vm.chart("ratingOverYearChart").unwrap().chart_options.chart.kind,
            ChartKind::Line
        );
    }

    #[test]
    fn override_replaces_only_its_chart() {
        let mut overrides = IndexMap::new();
        overrides.insert("wineryChart".to_string(), ChartStyle::accent("#000000"));

        let vm = assemble_wine_dashboard(payload_with(full_charts()), &overrides).unwrap();
        assert_eq!(vm.chart("wineryChart").unwrap().chart_options.colors, vec!["#000000"]);
        assert_eq!(vm.chart("vintageChart").unwrap().chart_options.colors, vec!["#c084fc"]);
    }

    #[test]
    fn missing_chart_aborts_assembly() {
        let mut charts = full_charts();
        charts.as_object_mut().unwrap().remove("typePriceChart");

        let err = assemble_wine_dashboard(payload_with(charts), &IndexMap::new()).unwrap_err();
        assert_eq!(err.kind(), FetchFailureKind::Parse);
        assert!(matches!(err, FetchCause::MissingChart(ref name) if name == "typePriceChart"));
    }

    #[test]
    fn malformed_chart_is_a_parse_error_but_extra_charts_are_ignored() {
        let mut charts = full_charts();
        charts["extraChart"] = json!("not a chart");
        assert!(assemble_wine_dashboard(payload_with(charts.clone()), &IndexMap::new()).is_ok());

        charts["typeChart"] = json!({ "series": "oops" });
        let err = assemble_wine_dashboard(payload_with(charts), &IndexMap::new()).unwrap_err();
        assert!(matches!(err, FetchCause::Decode(_)));
    }

    #[test]
    fn kpis_pass_through_exactly() {
        let kpis = json!({
            "totalWines": 0,
            "avgRating": 4,
            "topCountry": null,
            "varietyCount": "n/a"
        });
        let payload = payload_with_kpis(kpis.clone(), full_charts());
        let vm = assemble_wine_dashboard(payload, &IndexMap::new()).unwrap();

        assert_eq!(vm.charts.len(), WINE_DASHBOARD_LAYOUT.len());
        assert_eq!(serde_json::to_value(&vm.kpis).unwrap(), kpis);
        assert_eq!(
            serde_json::to_string(&vm.kpis).unwrap(),
            r#"{"totalWines":0,"avgRating":4,"topCountry":null,"varietyCount":"n/a"}"#
        );
    }

    #[test]
    fn kpi_keys_are_still_required() {
        let err = serde_json::from_value::<WineDashboardPayload>(json!({
            "kpis": { "totalWines": 1, "avgRating": 4.0, "topCountry": "Chile" },
            "charts": {}
        }))
        .unwrap_err();
        assert!(err.to_string().contains("varietyCount"));
    }
}
