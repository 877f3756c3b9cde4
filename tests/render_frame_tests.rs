use approx::assert_relative_eq;
use bar_chart_rs::api::{ChartConfig, RenderStyle, build_render_frame};
use bar_chart_rs::core::{ChartLayout, DataPoint};
use bar_chart_rs::render::{
    Color, FontWeight, LayerKind, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign,
    TextPrimitive,
};

fn sample_frame(config: &ChartConfig) -> (ChartLayout, RenderFrame) {
    let points = vec![
        DataPoint::new("Mon", 10.0),
        DataPoint::new("Tue", 20.0),
        DataPoint::new("Wed", 5.0),
    ];
    let layout = ChartLayout::build(&points, config.viewport, config.margins).expect("layout");
    let frame = build_render_frame(&layout, config, RenderStyle::default());
    (layout, frame)
}

#[test]
fn frame_is_translated_to_plot_origin() {
    let config = ChartConfig::new(800, 300, "Transferred data", "Time", "Data [kB]");
    let (_, frame) = sample_frame(&config);

    assert_eq!(frame.plot_origin_x, 60.0);
    assert_eq!(frame.plot_origin_y, 40.0);
    assert_eq!(frame.viewport, config.viewport);
    frame.validate().expect("frame should validate");

    let kinds: Vec<LayerKind> = frame.layers.iter().map(|layer| layer.kind).collect();
    assert_eq!(kinds, LayerKind::CANONICAL_ORDER.to_vec());
}

#[test]
fn title_is_centered_above_plot() {
    let config = ChartConfig::new(800, 300, "Transferred data", "Time", "Data [kB]");
    let (layout, frame) = sample_frame(&config);

    let title = &frame.layer(LayerKind::Title).expect("title layer").texts[0];
    assert_eq!(title.text, "Transferred data");
    assert_eq!(title.h_align, TextHAlign::Center);
    assert_eq!(title.font_weight, FontWeight::Bold);
    assert_relative_eq!(title.font_size_px, 16.0);
    assert_relative_eq!(title.x, layout.plot_width / 2.0);
    assert_relative_eq!(title.y, -20.0);
}

#[test]
fn x_axis_sits_on_baseline_with_trailing_label() {
    let config = ChartConfig::new(800, 300, "Transferred data", "Time", "Data [kB]");
    let (layout, frame) = sample_frame(&config);

    let axis = frame.layer(LayerKind::XAxis).expect("x axis layer");
    assert_relative_eq!(axis.translate_y, layout.plot_height);

    let label = axis
        .texts
        .iter()
        .find(|text| text.text == "Time")
        .expect("x label");
    assert_relative_eq!(label.x, layout.plot_width + 40.0);
    assert_relative_eq!(label.y, 19.0);
    assert_eq!(label.h_align, TextHAlign::Right);

    let tick_labels: Vec<&str> = axis
        .texts
        .iter()
        .filter(|text| text.text != "Time")
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(tick_labels, vec!["Mon", "Tue", "Wed"]);
}

#[test]
fn y_axis_label_is_rotated() {
    let config = ChartConfig::new(800, 300, "Transferred data", "Time", "Data [kB]");
    let (_, frame) = sample_frame(&config);

    let axis = frame.layer(LayerKind::YAxis).expect("y axis layer");
    let label = axis
        .texts
        .iter()
        .find(|text| text.text == "Data [kB]")
        .expect("y label");
    assert_relative_eq!(label.rotation_deg, -90.0);
    assert_relative_eq!(label.y, -50.0);
    assert_relative_eq!(label.dy_em, 0.71);
    assert_eq!(label.h_align, TextHAlign::Right);
}

#[test]
fn one_bar_rect_per_data_point() {
    let config = ChartConfig::new(800, 300, "Transferred data", "Time", "Data [kB]");
    let (layout, frame) = sample_frame(&config);

    let bars: Vec<&RectPrimitive> = frame.bars().collect();
    assert_eq!(bars.len(), 3);
    for (rect, bar) in bars.iter().zip(&layout.bars) {
        assert_eq!(rect.data_index, Some(bar.index));
        assert_relative_eq!(rect.height, bar.height);
        assert_relative_eq!(rect.x, bar.x);
    }
}

#[test]
fn empty_labels_are_skipped() {
    let config = ChartConfig::new(800, 300, "", "", "");
    let (_, frame) = sample_frame(&config);

    assert!(frame.layer(LayerKind::Title).expect("title layer").texts.is_empty());
    frame.validate().expect("frame without labels should validate");
}

#[test]
fn frame_validation_catches_bad_primitives() {
    let config = ChartConfig::new(800, 300, "t", "x", "y");
    let (_, mut frame) = sample_frame(&config);

    frame.layer_mut(LayerKind::Bars).rects.push(RectPrimitive::new(
        0.0,
        0.0,
        -1.0,
        5.0,
        Color::rgb(0.0, 0.0, 0.0),
    ));
    assert!(frame.validate().is_err());

    let line = LinePrimitive::new(0.0, 0.0, f64::NAN, 1.0, 1.0, Color::rgb(0.0, 0.0, 0.0));
    assert!(line.validate().is_err());

    let text = TextPrimitive::new("", 0.0, 0.0, 10.0, Color::rgb(0.0, 0.0, 0.0), TextHAlign::Left);
    assert!(text.validate().is_err());

    assert!(Color::rgba(1.2, 0.0, 0.0, 1.0).validate().is_err());
}

#[test]
fn color_hex_encoding() {
    assert_eq!(Color::rgb(1.0, 0.0, 0.0).to_hex(), "#ff0000");
    assert_eq!(RenderStyle::default().bar_color.to_hex(), "#4682b4");
}

#[test]
fn chart_config_json_roundtrip_and_margin_default() {
    let config = ChartConfig::new(640, 240, "Files this month", "Day", "Number");
    let json = config.to_json_pretty().expect("serialize");
    let restored = ChartConfig::from_json_str(&json).expect("deserialize");
    assert_eq!(restored, config);

    let minimal = r#"{"viewport": {"width": 800, "height": 300}, "title": "t"}"#;
    let parsed = ChartConfig::from_json_str(minimal).expect("minimal config");
    assert_eq!(parsed.plot_size(), (700.0, 230.0));
    assert!(parsed.x_label.is_empty());
}
