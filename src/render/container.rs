use std::fmt;

use serde::{Deserialize, Serialize};

/// Selector-like reference to the element a chart is mounted into,
/// for example `#plot_data_today`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainerRef(String);

impl ContainerRef {
    #[must_use]
    pub fn new(selector: impl Into<String>) -> Self {
        Self(selector.into())
    }

    #[must_use]
    pub fn selector(&self) -> &str {
        &self.0
    }

    /// Element id when the selector is an `#id` selector.
    #[must_use]
    pub fn element_id(&self) -> Option<&str> {
        self.0.strip_prefix('#').filter(|id| !id.is_empty())
    }
}

impl fmt::Display for ContainerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContainerRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ContainerRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}
