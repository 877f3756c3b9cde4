use crate::core::ChartLayout;
use crate::render::{
    FrameLayer, LayerKind, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::{ChartConfig, RenderStyle};

/// Materializes the frame for `layout`: title, both axes and one bar per
/// data point. Empty labels are skipped.
#[must_use]
pub fn build_render_frame(
    layout: &ChartLayout,
    config: &ChartConfig,
    style: RenderStyle,
) -> RenderFrame {
    let mut frame = RenderFrame::new(layout.viewport)
        .with_plot_origin(layout.margins.left, layout.margins.top);

    *frame.layer_mut(LayerKind::Title) = title_layer(layout, config, style);
    *frame.layer_mut(LayerKind::XAxis) = x_axis_layer(layout, config, style);
    *frame.layer_mut(LayerKind::YAxis) = y_axis_layer(layout, config, style);
    *frame.layer_mut(LayerKind::Bars) = bar_layer(layout, style);

    frame
}

fn title_layer(layout: &ChartLayout, config: &ChartConfig, style: RenderStyle) -> FrameLayer {
    let mut layer = FrameLayer::new(LayerKind::Title);
    if !config.title.is_empty() {
        layer.texts.push(
            TextPrimitive::new(
                config.title.clone(),
                layout.plot_width / 2.0,
                -layout.margins.top / 2.0,
                style.title_font_size_px,
                style.text_color,
                TextHAlign::Center,
            )
            .with_font_family(style.title_font_family)
            .bold(),
        );
    }
    layer
}

fn x_axis_layer(layout: &ChartLayout, config: &ChartConfig, style: RenderStyle) -> FrameLayer {
    let mut layer = FrameLayer::new(LayerKind::XAxis).translated(0.0, layout.plot_height);
    let tick = style.tick_size_px;

    // Domain path with outer ticks at both ends.
    layer.lines.push(axis_line(0.0, 0.0, layout.plot_width, 0.0, style));
    layer.lines.push(axis_line(0.0, 0.0, 0.0, tick, style));
    layer
        .lines
        .push(axis_line(layout.plot_width, 0.0, layout.plot_width, tick, style));

    for axis_tick in &layout.x_ticks {
        layer
            .lines
            .push(axis_line(axis_tick.offset, 0.0, axis_tick.offset, tick, style));
        if axis_tick.label.is_empty() {
            continue;
        }
        layer.texts.push(
            TextPrimitive::new(
                axis_tick.label.clone(),
                axis_tick.offset,
                tick + style.tick_padding_px,
                style.tick_font_size_px,
                style.text_color,
                TextHAlign::Center,
            )
            .with_font_family(style.tick_font_family)
            .with_dy_em(0.71),
        );
    }

    if !config.x_label.is_empty() {
        layer.texts.push(
            TextPrimitive::new(
                config.x_label.clone(),
                layout.plot_width + style.x_label_overhang_px,
                style.x_label_baseline_px,
                style.label_font_size_px,
                style.text_color,
                TextHAlign::Right,
            )
            .with_font_family(style.label_font_family),
        );
    }
    layer
}

fn y_axis_layer(layout: &ChartLayout, config: &ChartConfig, style: RenderStyle) -> FrameLayer {
    let mut layer = FrameLayer::new(LayerKind::YAxis);
    let tick = style.tick_size_px;

    layer.lines.push(axis_line(0.0, 0.0, 0.0, layout.plot_height, style));
    layer.lines.push(axis_line(-tick, 0.0, 0.0, 0.0, style));
    layer
        .lines
        .push(axis_line(-tick, layout.plot_height, 0.0, layout.plot_height, style));

    for axis_tick in &layout.y_ticks {
        layer
            .lines
            .push(axis_line(-tick, axis_tick.offset, 0.0, axis_tick.offset, style));
        layer.texts.push(
            TextPrimitive::new(
                axis_tick.label.clone(),
                -(tick + style.tick_padding_px),
                axis_tick.offset,
                style.tick_font_size_px,
                style.text_color,
                TextHAlign::Right,
            )
            .with_font_family(style.tick_font_family)
            .with_dy_em(0.32),
        );
    }

    if !config.y_label.is_empty() {
        layer.texts.push(
            TextPrimitive::new(
                config.y_label.clone(),
                0.0,
                style.y_label_offset_px,
                style.label_font_size_px,
                style.text_color,
                TextHAlign::Right,
            )
            .with_font_family(style.label_font_family)
            .with_dy_em(style.y_label_dy_em)
            .with_rotation(-90.0),
        );
    }
    layer
}

fn bar_layer(layout: &ChartLayout, style: RenderStyle) -> FrameLayer {
    let mut layer = FrameLayer::new(LayerKind::Bars);
    layer.rects = layout
        .bars
        .iter()
        .map(|bar| {
            RectPrimitive::new(bar.x, bar.y, bar.width, bar.height, style.bar_color)
                .with_data_index(bar.index)
        })
        .collect();
    layer
}

fn axis_line(x1: f64, y1: f64, x2: f64, y2: f64, style: RenderStyle) -> LinePrimitive {
    LinePrimitive::new(x1, y1, x2, y2, style.axis_stroke_width, style.axis_color)
}
