mod container;
mod frame;
mod layer_stack;
mod null_renderer;
mod primitives;
mod svg_document;

pub use container::ContainerRef;
pub use frame::{FrameLayer, RenderFrame};
pub use layer_stack::LayerKind;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, FontWeight, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive, TooltipPrimitive,
};
pub use svg_document::SvgDocument;

use crate::error::ChartResult;

/// Rendering capability a chart draws through.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from chart domain and interaction logic.
/// Mounting replaces whatever the container held before.
pub trait Renderer {
    fn clear(&mut self, container: &ContainerRef) -> ChartResult<()>;

    fn mount(&mut self, container: &ContainerRef, frame: &RenderFrame) -> ChartResult<()>;

    /// Creates or updates the tooltip owned by the chart in `container`.
    fn update_tooltip(
        &mut self,
        container: &ContainerRef,
        tooltip: &TooltipPrimitive,
    ) -> ChartResult<()>;

    fn remove_tooltip(&mut self, container: &ContainerRef) -> ChartResult<()>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn clear(&mut self, container: &ContainerRef) -> ChartResult<()> {
        (**self).clear(container)
    }

    fn mount(&mut self, container: &ContainerRef, frame: &RenderFrame) -> ChartResult<()> {
        (**self).mount(container, frame)
    }

    fn update_tooltip(
        &mut self,
        container: &ContainerRef,
        tooltip: &TooltipPrimitive,
    ) -> ChartResult<()> {
        (**self).update_tooltip(container, tooltip)
    }

    fn remove_tooltip(&mut self, container: &ContainerRef) -> ChartResult<()> {
        (**self).remove_tooltip(container)
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer};
