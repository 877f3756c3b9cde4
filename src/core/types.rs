use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Space reserved around the plot area for title and axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub const FIXED: Self = Self {
        top: 40.0,
        right: 40.0,
        bottom: 30.0,
        left: 60.0,
    };
}

impl Default for Margins {
    fn default() -> Self {
        Self::FIXED
    }
}

/// Discrete category label on the horizontal axis.
///
/// Upstream statistics emit either labels (`"Jan"`) or integer indices
/// (hours, days, years), so both shapes decode from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Bin {
    Index(i64),
    Label(String),
}

impl fmt::Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Label(label) => f.write_str(label),
        }
    }
}

impl From<&str> for Bin {
    fn from(value: &str) -> Self {
        Self::Label(value.to_owned())
    }
}

impl From<String> for Bin {
    fn from(value: String) -> Self {
        Self::Label(value)
    }
}

impl From<i64> for Bin {
    fn from(value: i64) -> Self {
        Self::Index(value)
    }
}

impl From<i32> for Bin {
    fn from(value: i32) -> Self {
        Self::Index(i64::from(value))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub bin: Bin,
    pub value: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(bin: impl Into<Bin>, value: f64) -> Self {
        Self {
            bin: bin.into(),
            value,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.value.is_finite() || self.value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "value for bin `{}` must be finite and >= 0",
                self.bin
            )));
        }
        Ok(())
    }
}
