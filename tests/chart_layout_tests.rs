use approx::assert_relative_eq;
use bar_chart_rs::ChartError;
use bar_chart_rs::core::{Bin, ChartLayout, DataPoint, Margins, Viewport};

fn week_points() -> Vec<DataPoint> {
    vec![DataPoint::new("Mon", 10.0), DataPoint::new("Tue", 20.0)]
}

#[test]
fn inner_area_subtracts_fixed_margins() {
    let layout =
        ChartLayout::build(&week_points(), Viewport::new(800, 300), Margins::FIXED).expect("layout");

    assert_relative_eq!(layout.plot_width, 700.0);
    assert_relative_eq!(layout.plot_height, 230.0);
    assert_eq!(layout.margins, Margins::FIXED);
}

#[test]
fn two_day_example_has_twice_as_tall_second_bar() {
    let layout =
        ChartLayout::build(&week_points(), Viewport::new(800, 300), Margins::FIXED).expect("layout");

    assert_eq!(layout.bars.len(), 2);
    let mon = &layout.bars[0];
    let tue = &layout.bars[1];
    assert_eq!(mon.bin, Bin::from("Mon"));
    assert_eq!(tue.bin, Bin::from("Tue"));
    assert_relative_eq!(mon.height, 115.0);
    assert_relative_eq!(tue.height, 230.0);
    assert_relative_eq!(tue.height, mon.height * 2.0);
    assert_relative_eq!(tue.y, 0.0);
    assert_relative_eq!(mon.y + mon.height, layout.plot_height);
    assert_eq!(mon.width, layout.band_scale.bandwidth());
}

#[test]
fn bars_follow_input_order() {
    let points = vec![
        DataPoint::new(5, 1.0),
        DataPoint::new(3, 4.0),
        DataPoint::new(9, 2.0),
        DataPoint::new(1, 8.0),
    ];
    let layout = ChartLayout::build(&points, Viewport::new(640, 240), Margins::FIXED).expect("layout");

    let indices: Vec<usize> = layout.bars.iter().map(|bar| bar.index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
    for pair in layout.bars.windows(2) {
        assert!(pair[0].x < pair[1].x);
    }
}

#[test]
fn empty_data_yields_axes_without_bars() {
    let layout = ChartLayout::build(&[], Viewport::new(800, 300), Margins::FIXED).expect("layout");

    assert!(layout.bars.is_empty());
    assert!(layout.x_ticks.is_empty());
    assert!(!layout.y_ticks.is_empty());
    assert_eq!(layout.y_ticks.first().map(|tick| tick.label.as_str()), Some("0.0"));
    assert_eq!(layout.y_ticks.last().map(|tick| tick.label.as_str()), Some("1.0"));
}

#[test]
fn all_zero_values_draw_flat_bars() {
    let points = vec![DataPoint::new(0, 0.0), DataPoint::new(1, 0.0)];
    let layout = ChartLayout::build(&points, Viewport::new(800, 300), Margins::FIXED).expect("layout");

    assert!(layout.bars.iter().all(|bar| bar.height == 0.0));
    assert!(layout.bars.iter().all(|bar| bar.y == layout.plot_height));
}

#[test]
fn negative_and_non_finite_values_are_rejected() {
    for bad in [-1.0, f64::NAN, f64::INFINITY] {
        let points = vec![DataPoint::new("ok", 1.0), DataPoint::new("bad", bad)];
        let err = ChartLayout::build(&points, Viewport::new(800, 300), Margins::FIXED)
            .expect_err("invalid value must fail");
        match err {
            ChartError::InvalidData(message) => assert!(message.contains("data point 1")),
            other => panic!("unexpected error: {other}"),
        }
    }
}

#[test]
fn viewport_smaller_than_margins_is_rejected() {
    let err = ChartLayout::build(&week_points(), Viewport::new(100, 70), Margins::FIXED)
        .expect_err("no plot area");
    assert!(matches!(
        err,
        ChartError::InvalidViewport {
            width: 100,
            height: 70
        }
    ));
}

#[test]
fn x_ticks_sit_at_band_centers() {
    let layout =
        ChartLayout::build(&week_points(), Viewport::new(800, 300), Margins::FIXED).expect("layout");

    let labels: Vec<&str> = layout.x_ticks.iter().map(|tick| tick.label.as_str()).collect();
    assert_eq!(labels, vec!["Mon", "Tue"]);
    for (tick, bar) in layout.x_ticks.iter().zip(&layout.bars) {
        assert_relative_eq!(tick.offset, bar.x + bar.width / 2.0);
    }
}

#[test]
fn y_ticks_use_nice_steps_within_domain() {
    let layout =
        ChartLayout::build(&week_points(), Viewport::new(800, 300), Margins::FIXED).expect("layout");

    let labels: Vec<&str> = layout.y_ticks.iter().map(|tick| tick.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["0", "2", "4", "6", "8", "10", "12", "14", "16", "18", "20"]
    );
    assert_relative_eq!(layout.y_ticks[0].offset, layout.plot_height);
    assert_relative_eq!(layout.y_ticks[10].offset, 0.0);
}

#[test]
fn large_values_get_grouped_tick_labels() {
    let points = vec![DataPoint::new(0, 12_000.0), DataPoint::new(1, 3_000.0)];
    let layout = ChartLayout::build(&points, Viewport::new(800, 300), Margins::FIXED).expect("layout");

    assert!(layout.y_ticks.iter().any(|tick| tick.label == "10,000"));
}

#[test]
fn hit_testing_uses_container_coordinates() {
    let layout =
        ChartLayout::build(&week_points(), Viewport::new(800, 300), Margins::FIXED).expect("layout");
    let tue = &layout.bars[1];

    let x = layout.margins.left + tue.x + tue.width / 2.0;
    let y = layout.margins.top + layout.plot_height - 1.0;
    assert_eq!(layout.bar_at(x, y).map(|bar| bar.index), Some(1));

    // Above the shorter bar, inside its band.
    let mon = &layout.bars[0];
    let x = layout.margins.left + mon.x + 1.0;
    let y = layout.margins.top + 10.0;
    assert!(layout.bar_at(x, y).is_none());

    // Between bands.
    let gap_x = layout.margins.left + mon.x + mon.width + 1.0;
    assert!(layout.bar_at(gap_x, layout.margins.top + 200.0).is_none());
}

#[test]
fn zero_height_bars_are_never_hit() {
    let points = vec![DataPoint::new(0, 0.0), DataPoint::new(1, 4.0)];
    let layout = ChartLayout::build(&points, Viewport::new(800, 300), Margins::FIXED).expect("layout");
    let flat = &layout.bars[0];
    let x = layout.margins.left + flat.x + flat.width / 2.0;

    assert!(!flat.contains(flat.x + 1.0, flat.y));
    assert!(layout.bar_at(x, layout.margins.top + layout.plot_height).is_none());
}
