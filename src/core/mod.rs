pub mod band_scale;
pub mod layout;
pub mod ticks;
pub mod types;
pub mod value_scale;

pub use band_scale::{BandScale, DEFAULT_BAND_PADDING};
pub use layout::{AxisTick, BarGeometry, ChartLayout};
pub use ticks::{DEFAULT_TICK_COUNT, format_tick, linear_ticks, nice_tick_step};
pub use types::{Bin, DataPoint, Margins, Viewport};
pub use value_scale::ValueScale;
