use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::band_scale::{BandScale, DEFAULT_BAND_PADDING};
use crate::core::ticks::{DEFAULT_TICK_COUNT, format_tick, linear_ticks, tick_precision};
use crate::core::types::{Bin, DataPoint, Margins, Viewport};
use crate::core::value_scale::ValueScale;
use crate::error::{ChartError, ChartResult};

/// Geometry of one bar in plot-local pixels (origin at the plot's top-left).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub index: usize,
    pub bin: Bin,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarGeometry {
    /// Half-open hit area; zero-height bars are never hit.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// One axis tick: its offset along the axis and the printed label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub offset: f64,
    pub label: String,
}

/// Everything derived from one dataset and one viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub viewport: Viewport,
    pub margins: Margins,
    pub plot_width: f64,
    pub plot_height: f64,
    pub band_scale: BandScale,
    pub value_scale: ValueScale,
    pub bars: Vec<BarGeometry>,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
}

impl ChartLayout {
    /// Computes scales, bar rectangles and axis ticks for `points`.
    ///
    /// Empty input produces a layout without bars. Negative or non-finite
    /// values are rejected.
    pub fn build(points: &[DataPoint], viewport: Viewport, margins: Margins) -> ChartResult<Self> {
        let plot_width = f64::from(viewport.width) - margins.left - margins.right;
        let plot_height = f64::from(viewport.height) - margins.top - margins.bottom;
        if !viewport.is_valid() || plot_width <= 0.0 || plot_height <= 0.0 {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        for (index, point) in points.iter().enumerate() {
            point.validate().map_err(|err| {
                ChartError::InvalidData(format!("data point {index} rejected: {err}"))
            })?;
        }

        let band_scale = BandScale::new(
            points.iter().map(|point| &point.bin),
            plot_width,
            DEFAULT_BAND_PADDING,
        )?;
        let value_scale = ValueScale::from_points(points, plot_height)?;

        let mut bars = Vec::with_capacity(points.len());
        for (index, point) in points.iter().enumerate() {
            let Some(x) = band_scale.position(&point.bin) else {
                continue;
            };
            bars.push(BarGeometry {
                index,
                bin: point.bin.clone(),
                value: point.value,
                x,
                y: value_scale.value_to_pixel(point.value),
                width: band_scale.bandwidth(),
                height: value_scale.bar_height(point.value),
            });
        }

        let x_ticks = band_scale
            .domain()
            .filter_map(|bin| {
                band_scale.center(bin).map(|offset| AxisTick {
                    offset,
                    label: bin.to_string(),
                })
            })
            .collect();

        let (tick_start, tick_stop) = value_scale.tick_domain();
        let (values, step) = linear_ticks(tick_start, tick_stop, DEFAULT_TICK_COUNT);
        let precision = tick_precision(step);
        let y_ticks = values
            .iter()
            .map(|&value| AxisTick {
                offset: value_scale.tick_to_pixel(value),
                label: format_tick(value, precision),
            })
            .collect();

        trace!(
            bars = points.len(),
            bins = band_scale.len(),
            plot_width,
            plot_height,
            "chart layout built"
        );

        Ok(Self {
            viewport,
            margins,
            plot_width,
            plot_height,
            band_scale,
            value_scale,
            bars,
            x_ticks,
            y_ticks,
        })
    }

    /// Bar under a point given in container pixels, if any.
    #[must_use]
    pub fn bar_at(&self, x: f64, y: f64) -> Option<&BarGeometry> {
        let local_x = x - self.margins.left;
        let local_y = y - self.margins.top;
        // Later bars paint over earlier ones when bins repeat.
        self.bars
            .iter()
            .rev()
            .find(|bar| bar.contains(local_x, local_y))
    }
}
