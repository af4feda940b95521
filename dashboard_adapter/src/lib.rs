//! Fetches analytic result sets from the dashboard backend and reshapes them
//! into chart-ready view models.
//!
//! The crate does no analytics of its own. It fetches a payload through an
//! [`AnalyticsProvider`](providers::AnalyticsProvider), fails closed on any
//! transport or shape problem, and projects raw chart data into
//! `{ series, chartOptions }` descriptors (bar, pie, line) for the renderer.
//!
//! ```no_run
//! use dashboard_adapter::{client::DashboardClient, config::load_config_str};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config_str(r#"base_url = "http://localhost:5000""#)?;
//! let client = DashboardClient::from_config(&config)?;
//!
//! match client.load_wine_dashboard().await {
//!     Some(view) => println!("{}", serde_json::to_string(&view)?),
//!     None => println!("nothing to render"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod dashboards;
pub mod errors;
pub mod formatters;
pub mod models;
pub mod providers;
pub mod style;
