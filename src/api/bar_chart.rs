use std::time::Duration;

use tracing::{debug, trace};

use crate::core::{ChartLayout, DataPoint};
use crate::error::ChartResult;
use crate::interaction::{HoverChange, HoverState, PointerEvent, Tooltip};
use crate::render::{ContainerRef, Renderer};

use super::render_frame_builder::build_render_frame;
use super::{ChartConfig, RenderStyle};

/// Renders one bar chart into `container`, replacing its previous content.
///
/// Input is validated before the container is touched, so a rejected dataset
/// leaves the previous chart in place.
pub fn render_bar_chart<R: Renderer + ?Sized>(
    renderer: &mut R,
    data: &[DataPoint],
    container: &ContainerRef,
    config: &ChartConfig,
) -> ChartResult<ChartLayout> {
    let layout = ChartLayout::build(data, config.viewport, config.margins)?;
    mount_layout(renderer, &layout, container, config)?;
    Ok(layout)
}

fn mount_layout<R: Renderer + ?Sized>(
    renderer: &mut R,
    layout: &ChartLayout,
    container: &ContainerRef,
    config: &ChartConfig,
) -> ChartResult<()> {
    let frame = build_render_frame(layout, config, RenderStyle::default());

    renderer.clear(container)?;
    renderer.mount(container, &frame)?;
    debug!(
        container = %container,
        bars = layout.bars.len(),
        width = config.viewport.width,
        height = config.viewport.height,
        "bar chart rendered"
    );
    Ok(())
}

/// Chart instance bound to one container.
///
/// Owns its renderer, the tooltip and the hover state; every `render` call
/// rebuilds all geometry from scratch.
pub struct BarChart<R: Renderer> {
    renderer: R,
    container: ContainerRef,
    config: Option<ChartConfig>,
    layout: Option<ChartLayout>,
    tooltip: Tooltip,
    hover: HoverState,
}

impl<R: Renderer> BarChart<R> {
    #[must_use]
    pub fn new(renderer: R, container: impl Into<ContainerRef>) -> Self {
        Self {
            renderer,
            container: container.into(),
            config: None,
            layout: None,
            tooltip: Tooltip::default(),
            hover: HoverState::default(),
        }
    }

    /// Renders `data`, dropping any hover and tooltip state of the previous
    /// render.
    ///
    /// Rejected data keeps the previous chart interactive. Once the container
    /// has been touched, a backend failure leaves the chart without geometry
    /// so stale bars are never hit-tested.
    pub fn render(&mut self, data: &[DataPoint], config: ChartConfig) -> ChartResult<()> {
        let layout = ChartLayout::build(data, config.viewport, config.margins)?;

        self.layout = None;
        self.config = None;
        self.hover = HoverState::default();
        self.tooltip.reset();

        mount_layout(&mut self.renderer, &layout, &self.container, &config)?;
        self.layout = Some(layout);
        self.config = Some(config);
        self.renderer
            .update_tooltip(&self.container, &self.tooltip.to_primitive())
    }

    /// Hit-tests the pointer against the bars and drives the tooltip.
    pub fn pointer_move(&mut self, event: PointerEvent) -> ChartResult<HoverChange> {
        let target = self
            .layout
            .as_ref()
            .and_then(|layout| layout.bar_at(event.x, event.y))
            .map(|bar| (bar.index, bar.value));

        let change = self.hover.update(target.map(|(index, _)| index));
        match (change, target) {
            (HoverChange::Entered { index }, Some((_, value))) => {
                trace!(index, value, "bar pointer enter");
                self.tooltip.show(value, event);
            }
            (HoverChange::Left { index }, _) => {
                trace!(index, "bar pointer leave");
                self.tooltip.hide();
            }
            _ => return Ok(change),
        }
        self.sync_tooltip()?;
        Ok(change)
    }

    /// Pointer left the container.
    pub fn pointer_leave(&mut self) -> ChartResult<HoverChange> {
        let change = self.hover.clear();
        if let HoverChange::Left { index } = change {
            trace!(index, "bar pointer leave");
            self.tooltip.hide();
            self.sync_tooltip()?;
        }
        Ok(change)
    }

    /// Advances running tooltip fades by `delta`.
    pub fn tick(&mut self, delta: Duration) -> ChartResult<()> {
        if self.tooltip.advance(delta) {
            self.sync_tooltip()?;
        }
        Ok(())
    }

    /// Clears the container and removes the tooltip, returning the renderer.
    pub fn destroy(mut self) -> ChartResult<R> {
        self.renderer.remove_tooltip(&self.container)?;
        self.renderer.clear(&self.container)?;
        debug!(container = %self.container, "bar chart destroyed");
        Ok(self.renderer)
    }

    #[must_use]
    pub fn container(&self) -> &ContainerRef {
        &self.container
    }

    #[must_use]
    pub fn config(&self) -> Option<&ChartConfig> {
        self.config.as_ref()
    }

    #[must_use]
    pub fn layout(&self) -> Option<&ChartLayout> {
        self.layout.as_ref()
    }

    #[must_use]
    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    #[must_use]
    pub fn hovered_bar(&self) -> Option<usize> {
        self.hover.hovered()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn sync_tooltip(&mut self) -> ChartResult<()> {
        self.renderer
            .update_tooltip(&self.container, &self.tooltip.to_primitive())
    }
}
