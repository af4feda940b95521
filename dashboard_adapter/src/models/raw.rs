//! Raw chart data as the backend sends it.
//!
//! These types deserialize the `charts.<name>` entries of an analytics
//! payload. Anything the adapter does not interpret (extra axis keys, extra
//! series fields) is kept in `extra` maps so it survives projection verbatim.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// One chart's worth of raw data: `{ series, chartOptions }`.
///
/// The backend is responsible for `series` and the category/label list
/// having matching lengths; that is not checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawChartData {
    pub series: Vec<SeriesEntry>,
    pub chart_options: RawChartOptions,
}

/// The subset of chart options the backend provides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawChartOptions {
    /// Category axis, used by bar and line charts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    /// Slice labels, used by pie charts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<Value>>,
}

/// An x-axis definition, kept as the backend sent it.
///
/// `categories` usually holds strings or numbers (years), but neither its
/// presence nor its shape is checked; a `null` or scalar value is copied like
/// any other key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Axis(pub IndexMap<String, Value>);

impl Axis {
    pub fn with_categories<I, V>(categories: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let categories = categories.into_iter().map(Into::into).collect();
        Self(IndexMap::from([("categories".to_string(), Value::Array(categories))]))
    }

    pub fn categories(&self) -> Option<&Value> {
        self.0.get("categories")
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

/// One entry of a `series` array.
///
/// Pie charts send bare numbers, one per slice; bar and line charts send
/// objects with a `data` array. Anything else is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeriesEntry {
    Scalar(Number),
    Named(NamedSeries),
    Other(Value),
}

/// A named data series, e.g. `{ "name": "Wines", "data": [12, 30] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedSeries {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub data: Vec<Value>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl NamedSeries {
    pub fn new<I, V>(name: impl Into<String>, data: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            name: Some(name.into()),
            data: data.into_iter().map(Into::into).collect(),
            extra: IndexMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_bar_shape_and_keeps_extra_keys() {
        let raw: RawChartData = serde_json::from_value(json!({
            "series": [{ "name": "Wines", "data": [3, 4], "type": "column" }],
            "chartOptions": {
                "xaxis": { "categories": ["France", "Italy"], "title": { "text": "Country" } }
            }
        }))
        .unwrap();

        match &raw.series[0] {
            SeriesEntry::Named(s) => {
                assert_eq!(s.name.as_deref(), Some("Wines"));
                assert_eq!(s.data, vec![json!(3), json!(4)]);
                assert_eq!(s.extra.get("type"), Some(&json!("column")));
            }
            other => panic!("expected named series, got {other:?}"),
        }

        let xaxis = raw.chart_options.xaxis.as_ref().unwrap();
        assert_eq!(xaxis.categories(), Some(&json!(["France", "Italy"])));
        assert_eq!(xaxis.get("title"), Some(&json!({ "text": "Country" })));
    }

    #[test]
    fn parses_pie_shape_with_scalar_series() {
        let raw: RawChartData = serde_json::from_value(json!({
            "series": [10, 20.5],
            "chartOptions": { "labels": ["Red", "White"] }
        }))
        .unwrap();

        assert!(matches!(raw.series[0], SeriesEntry::Scalar(_)));
        assert!(raw.chart_options.xaxis.is_none());
        assert_eq!(raw.chart_options.labels, Some(vec![json!("Red"), json!("White")]));
        assert_eq!(serde_json::to_value(&raw.series).unwrap(), json!([10, 20.5]));
    }

    #[test]
    fn missing_chart_options_is_rejected() {
        let err = serde_json::from_value::<RawChartData>(json!({ "series": [] })).unwrap_err();
        assert!(err.to_string().contains("chartOptions"));
    }

    #[test]
    fn axis_round_trips_unusual_categories() {
        let input = r#"{"title":"t","categories":null,"tickAmount":4}"#;
        let axis: Axis = serde_json::from_str(input).unwrap();
        assert_eq!(axis.categories(), Some(&Value::Null));
        assert_eq!(serde_json::to_string(&axis).unwrap(), input);

        let axis: Axis = serde_json::from_value(json!({ "categories": "2019-2023" })).unwrap();
        assert_eq!(axis.categories(), Some(&json!("2019-2023")));
    }
}
