use serde::{Deserialize, Serialize};

use crate::core::{Margins, Viewport};
use crate::error::{ChartError, ChartResult};

/// Per-render chart parameters.
///
/// Serializable so hosts can persist/load chart setup without inventing their
/// own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub x_label: String,
    #[serde(default)]
    pub y_label: String,
}

impl ChartConfig {
    #[must_use]
    pub fn new(
        width: u32,
        height: u32,
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            margins: Margins::FIXED,
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
        }
    }

    /// Inner plot size after margins.
    #[must_use]
    pub fn plot_size(&self) -> (f64, f64) {
        (
            f64::from(self.viewport.width) - self.margins.left - self.margins.right,
            f64::from(self.viewport.height) - self.margins.top - self.margins.bottom,
        )
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))
    }
}
