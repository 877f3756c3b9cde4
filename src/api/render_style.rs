use crate::render::Color;

/// Fixed presentation constants for every bar chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub bar_color: Color,
    pub axis_color: Color,
    pub text_color: Color,
    pub axis_stroke_width: f64,
    pub tick_size_px: f64,
    pub tick_padding_px: f64,
    pub tick_font_size_px: f64,
    pub title_font_size_px: f64,
    pub label_font_size_px: f64,
    pub title_font_family: &'static str,
    pub label_font_family: &'static str,
    pub tick_font_family: &'static str,
    /// Offset of the x-axis label past the plot's right edge.
    pub x_label_overhang_px: f64,
    pub x_label_baseline_px: f64,
    pub y_label_offset_px: f64,
    pub y_label_dy_em: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            bar_color: Color::rgb(0.275, 0.51, 0.706),
            axis_color: Color::rgb(0.0, 0.0, 0.0),
            text_color: Color::rgb(0.0, 0.0, 0.0),
            axis_stroke_width: 1.0,
            tick_size_px: 6.0,
            tick_padding_px: 3.0,
            tick_font_size_px: 10.0,
            title_font_size_px: 16.0,
            label_font_size_px: 10.0,
            title_font_family: "'Quicksand', Arial, sans-serif",
            label_font_family: "'Droid Serif', Arial, sans-serif",
            tick_font_family: "sans-serif",
            x_label_overhang_px: 40.0,
            x_label_baseline_px: 19.0,
            y_label_offset_px: -50.0,
            y_label_dy_em: 0.71,
        }
    }
}
