//! Colour presets for chart formatters.
//!
//! A [`ChartStyle`] is either the formatter's own default palette or a
//! caller-supplied list of colours. In TOML it reads as
//! `{ preset = "default" }` or `{ preset = "custom", colors = ["#60a5fa"] }`.

use serde::{Deserialize, Serialize};

/// Accent of a bar chart when no colour is given.
pub const DEFAULT_BAR_ACCENT: &str = "#8b5cf6";
/// Slice palette of a pie chart when no colours are given.
pub const DEFAULT_PIE_PALETTE: [&str; 4] = ["#f87171", "#34d399", "#fbbf24", "#60a5fa"];
/// Line palette when no colours are given.
pub const DEFAULT_LINE_PALETTE: [&str; 2] = ["#8b5cf6", "#34d399"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "preset", rename_all = "lowercase")]
pub enum ChartStyle {
    /// Use the formatter's built-in palette.
    #[default]
    Default,
    /// Use these colours, applied positionally.
    Custom { colors: Vec<String> },
}

impl ChartStyle {
    pub fn custom<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ChartStyle::Custom {
            colors: colors.into_iter().map(Into::into).collect(),
        }
    }

    /// A single-colour style, the usual choice for bar charts.
    pub fn accent(color: impl Into<String>) -> Self {
        ChartStyle::Custom {
            colors: vec![color.into()],
        }
    }

    /// The colours to render with. An empty custom list falls back to
    /// `defaults`.
    pub fn resolve(&self, defaults: &[&str]) -> Vec<String> {
        match self {
            ChartStyle::Custom { colors } if !colors.is_empty() => colors.clone(),
            _ => defaults.iter().map(|c| c.to_string()).collect(),
        }
    }
}
