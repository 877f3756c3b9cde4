mod bar_chart;
mod chart_config;
mod render_frame_builder;
mod render_style;

pub use bar_chart::{BarChart, render_bar_chart};
pub use chart_config::ChartConfig;
pub use render_frame_builder::build_render_frame;
pub use render_style::RenderStyle;
