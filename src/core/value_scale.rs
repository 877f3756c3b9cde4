use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::types::DataPoint;
use crate::error::{ChartError, ChartResult};

/// Linear value scale with domain `[0, max]` and an inverted pixel range
/// `[plot_height, 0]`, so larger values map closer to the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    domain_max: f64,
    plot_height: f64,
}

impl ValueScale {
    pub fn new(domain_max: f64, plot_height: f64) -> ChartResult<Self> {
        if !domain_max.is_finite() || domain_max < 0.0 {
            return Err(ChartError::InvalidData(
                "value domain max must be finite and >= 0".to_owned(),
            ));
        }
        if !plot_height.is_finite() || plot_height < 0.0 {
            return Err(ChartError::InvalidData(
                "plot height must be finite and >= 0".to_owned(),
            ));
        }

        Ok(Self {
            domain_max,
            plot_height,
        })
    }

    /// Builds the scale from the maximum value of `points`.
    ///
    /// An empty slice yields a zero-span domain.
    pub fn from_points(points: &[DataPoint], plot_height: f64) -> ChartResult<Self> {
        let max = points
            .iter()
            .map(|point| OrderedFloat(point.value))
            .max()
            .map_or(0.0, OrderedFloat::into_inner);
        Self::new(max, plot_height)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (0.0, self.domain_max)
    }

    #[must_use]
    pub fn plot_height(self) -> f64 {
        self.plot_height
    }

    /// Maps a value to its pixel row. A zero-span domain maps everything to
    /// the baseline.
    #[must_use]
    pub fn value_to_pixel(self, value: f64) -> f64 {
        if self.domain_max == 0.0 {
            return self.plot_height;
        }
        self.plot_height - value / self.domain_max * self.plot_height
    }

    #[must_use]
    pub fn bar_height(self, value: f64) -> f64 {
        self.plot_height - self.value_to_pixel(value)
    }

    /// Domain used for axis ticks; a degenerate domain falls back to `[0, 1]`.
    #[must_use]
    pub fn tick_domain(self) -> (f64, f64) {
        if self.domain_max > 0.0 {
            (0.0, self.domain_max)
        } else {
            (0.0, 1.0)
        }
    }

    /// Pixel row for a tick value, using the tick domain.
    #[must_use]
    pub fn tick_to_pixel(self, value: f64) -> f64 {
        let (_, max) = self.tick_domain();
        self.plot_height - value / max * self.plot_height
    }
}
