use crate::error::ChartResult;
use crate::render::{ContainerRef, RenderFrame, Renderer, TooltipPrimitive};

/// No-op renderer used by tests and headless chart usage.
///
/// It still validates frame content so tests can catch invalid geometry before
/// a real backend is involved.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_line_count: usize,
    pub last_rect_count: usize,
    pub last_text_count: usize,
    pub mount_count: usize,
    pub clear_count: usize,
    pub tooltip: Option<TooltipPrimitive>,
}

impl Renderer for NullRenderer {
    fn clear(&mut self, _container: &ContainerRef) -> ChartResult<()> {
        self.clear_count += 1;
        self.last_line_count = 0;
        self.last_rect_count = 0;
        self.last_text_count = 0;
        Ok(())
    }

    fn mount(&mut self, _container: &ContainerRef, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.mount_count += 1;
        self.last_line_count = frame.lines().count();
        self.last_rect_count = frame.rects().count();
        self.last_text_count = frame.texts().count();
        Ok(())
    }

    fn update_tooltip(
        &mut self,
        _container: &ContainerRef,
        tooltip: &TooltipPrimitive,
    ) -> ChartResult<()> {
        tooltip.validate()?;
        self.tooltip = Some(tooltip.clone());
        Ok(())
    }

    fn remove_tooltip(&mut self, _container: &ContainerRef) -> ChartResult<()> {
        self.tooltip = None;
        Ok(())
    }
}
