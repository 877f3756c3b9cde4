//! bar-chart-rs: bar chart rendering over a pluggable drawing backend.
//!
//! Geometry (band and value scales, bars, axis ticks) is computed in `core`,
//! materialized into a backend-agnostic frame by `api`, and drawn by any
//! `render::Renderer`. Charts own their tooltip and hover state.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod statistics;
pub mod telemetry;

pub use api::{BarChart, ChartConfig, render_bar_chart};
pub use error::{ChartError, ChartResult};
