use bar_chart_rs::core::{ChartLayout, DataPoint, Margins, Viewport};
use bar_chart_rs::render::{ContainerRef, SvgDocument};
use bar_chart_rs::{ChartConfig, render_bar_chart};
use proptest::prelude::*;

fn points_from(values: &[f64]) -> Vec<DataPoint> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| DataPoint::new(index as i64, *value))
        .collect()
}

proptest! {
    #[test]
    fn bar_height_is_proportional_to_value(
        values in prop::collection::vec(0.0f64..1_000_000.0, 1..64),
        width in 200u32..2_000,
        height in 120u32..1_200
    ) {
        prop_assume!(values.iter().any(|value| *value > 0.0));
        let points = points_from(&values);
        let layout = ChartLayout::build(&points, Viewport::new(width, height), Margins::FIXED)
            .expect("layout");
        let max = values.iter().copied().fold(0.0f64, f64::max);

        prop_assert_eq!(layout.bars.len(), values.len());
        for bar in &layout.bars {
            let expected = layout.plot_height * bar.value / max;
            prop_assert!((bar.height - expected).abs() <= 1e-6 * layout.plot_height.max(1.0));
            prop_assert!((bar.y + bar.height - layout.plot_height).abs() <= 1e-6);
        }
    }

    #[test]
    fn bars_keep_input_order_inside_plot(
        values in prop::collection::vec(0.0f64..500.0, 1..40),
        width in 400u32..1_600
    ) {
        let points = points_from(&values);
        let layout = ChartLayout::build(&points, Viewport::new(width, 300), Margins::FIXED)
            .expect("layout");

        for (index, bar) in layout.bars.iter().enumerate() {
            prop_assert_eq!(bar.index, index);
            prop_assert!(bar.x >= 0.0);
            prop_assert!(bar.x + bar.width <= layout.plot_width + 1.0);
        }
        for pair in layout.bars.windows(2) {
            prop_assert!(pair[0].x < pair[1].x);
        }
    }

    #[test]
    fn rerender_never_accumulates_children(
        first in prop::collection::vec(0.0f64..100.0, 0..20),
        second in prop::collection::vec(0.0f64..100.0, 0..20)
    ) {
        let container = ContainerRef::new("#plot");
        let mut document = SvgDocument::new().with_container(container.clone());
        let config = ChartConfig::new(800, 300, "t", "x", "y");

        render_bar_chart(&mut document, &points_from(&first), &container, &config)
            .expect("first render");
        render_bar_chart(&mut document, &points_from(&second), &container, &config)
            .expect("second render");

        let markup = document.markup(&container).expect("markup");
        prop_assert_eq!(document.child_count(&container), 1);
        prop_assert_eq!(markup.matches("<svg").count(), 1);
        prop_assert_eq!(markup.matches(r#"class="bar""#).count(), second.len());
    }
}
