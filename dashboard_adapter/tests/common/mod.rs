#![allow(dead_code)]

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use dashboard_adapter::dashboards::wine::WINE_DASHBOARD_LAYOUT;
use dashboard_adapter::models::descriptor::ChartKind;
use serde_json::{Value, json};
use tracing::{Event, Level, Subscriber, subscriber::DefaultGuard};
use tracing_subscriber::{
    Registry,
    layer::{Context, Layer, SubscriberExt},
};

/// Counts `error`-level events seen on the current thread.
#[derive(Clone, Default)]
pub struct ErrorCounter(Arc<AtomicUsize>);

impl ErrorCounter {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Installs a thread-local subscriber that counts error events. Keep the
/// guard alive for the duration of the test.
pub fn capture_errors() -> (ErrorCounter, DefaultGuard) {
    let counter = ErrorCounter::default();
    let subscriber = Registry::default().with(counter.clone());
    let guard = tracing::subscriber::set_default(subscriber);
    (counter, guard)
}

pub fn sample_kpis() -> Value {
    json!({ "totalWines": 100, "avgRating": 4.2, "topCountry": "France", "varietyCount": 15 })
}

/// A wine dashboard body with every chart of the layout present.
pub fn wine_dashboard_body() -> Value {
    let mut charts = serde_json::Map::new();
    for layout in &WINE_DASHBOARD_LAYOUT {
        let chart = match layout.kind {
            ChartKind::Pie => json!({
                "series": [30, 50, 20],
                "chartOptions": { "labels": ["Red", "White", "Sparkling"] }
            }),
            _ => json!({
                "series": [{ "data": [1, 2] }],
                "chartOptions": { "xaxis": { "categories": ["A", "B"] } }
            }),
        };
        charts.insert(layout.name.to_string(), chart);
    }
    json!({ "kpis": sample_kpis(), "charts": charts })
}
