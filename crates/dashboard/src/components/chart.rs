//! Chart component types.
//!
//! These types serialize to a Chart.js configuration object. Pages embed the
//! JSON in a `<script type="application/json">` block and the browser only
//! hands it to `new Chart(...)`; all numbers are computed server-side.

use serde::Serialize;
use serde_json::{Value, json};

/// Palette for per-bucket colors, cycled when there are more buckets.
pub const STATUS_PALETTE: &[&str] = &["#36A2EB", "#4BC0C0", "#FFCE56", "#FF6384", "#9966FF"];

/// Chart.js chart type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    /// Vertical bars.
    Bar,
    /// Polar area (radial slices sized by value).
    PolarArea,
}

/// A single data series.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Legend label.
    pub label: String,
    /// One value per chart label.
    pub data: Vec<f64>,
    /// Fill colors; a single entry applies to every bar.
    pub background_color: Vec<String>,
    /// Border color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    /// Border width in pixels.
    pub border_width: u32,
}

impl Dataset {
    /// Create a dataset filled with one color per value from [`STATUS_PALETTE`].
    #[must_use]
    pub fn with_palette(label: &str, data: Vec<f64>) -> Self {
        let background_color = STATUS_PALETTE
            .iter()
            .cycle()
            .take(data.len())
            .map(|c| (*c).to_string())
            .collect();
        Self {
            label: label.to_string(),
            data,
            background_color,
            border_color: None,
            border_width: 1,
        }
    }

    /// Create a dataset filled with a single color.
    #[must_use]
    pub fn single_color(label: &str, data: Vec<f64>, fill: &str, border: &str) -> Self {
        Self {
            label: label.to_string(),
            data,
            background_color: vec![fill.to_string()],
            border_color: Some(border.to_string()),
            border_width: 1,
        }
    }

    /// Set the border color and width.
    #[must_use]
    pub fn border(mut self, color: &str, width: u32) -> Self {
        self.border_color = Some(color.to_string());
        self.border_width = width;
        self
    }
}

/// Labels plus datasets.
#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// A complete Chart.js configuration.
#[derive(Debug, Clone, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: Value,
}

impl ChartConfig {
    /// Create a responsive chart with a legend and no title.
    #[must_use]
    pub fn new(kind: ChartKind, labels: Vec<String>, dataset: Dataset) -> Self {
        Self {
            kind,
            data: ChartData {
                labels,
                datasets: vec![dataset],
            },
            options: json!({
                "responsive": true,
                "maintainAspectRatio": false,
                "plugins": { "legend": { "position": "top" } }
            }),
        }
    }

    /// Show a title above the chart.
    #[must_use]
    pub fn title(mut self, text: &str) -> Self {
        self.options["plugins"]["title"] = json!({ "display": true, "text": text });
        self
    }

    /// Move the legend.
    #[must_use]
    pub fn legend_position(mut self, position: &str) -> Self {
        self.options["plugins"]["legend"]["position"] = json!(position);
        self
    }

    /// Titled x/y axes with the y axis starting at zero.
    #[must_use]
    pub fn axes(mut self, x_title: &str, y_title: &str) -> Self {
        self.options["scales"] = json!({
            "x": { "title": { "display": true, "text": x_title } },
            "y": { "beginAtZero": true, "title": { "display": true, "text": y_title } }
        });
        self
    }

    /// Serialize for embedding inside a `<script>` element.
    ///
    /// `<`, `>` and `&` are written as unicode escapes so label text can
    /// never close the script block.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_script_json(&self) -> Result<String, serde_json::Error> {
        let raw = serde_json::to_string(self)?;
        Ok(raw
            .replace('<', "\\u003c")
            .replace('>', "\\u003e")
            .replace('&', "\\u0026"))
    }
}
