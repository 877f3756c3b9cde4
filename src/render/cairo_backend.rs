use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, ContainerRef, FontWeight, FrameLayer, RenderFrame, Renderer, TextHAlign,
    TooltipPrimitive,
};

const TOOLTIP_PADDING_PX: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
    pub tooltips_drawn: usize,
}

/// Cairo + Pango raster backend drawing one container into an image surface.
///
/// The last frame is kept so tooltip updates can repaint the chart with the
/// tooltip composited on top.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_frame: Option<RenderFrame>,
    tooltip: Option<TooltipPrimitive>,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_frame: None,
            tooltip: None,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    pub fn write_png(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        let mut file = File::create(path.as_ref())?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| ChartError::InvalidData(format!("failed to write png: {err}")))
    }

    fn repaint(&mut self) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;

        apply_color(&context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();
        if let Some(frame) = &self.last_frame {
            context.save().map_err(|err| map_backend_error("failed to save state", err))?;
            context.translate(frame.plot_origin_x, frame.plot_origin_y);
            for layer in &frame.layers {
                draw_layer(&context, layer, &mut stats)?;
            }
            context
                .restore()
                .map_err(|err| map_backend_error("failed to restore state", err))?;
        }

        if let Some(tooltip) = self.tooltip.as_ref().filter(|tooltip| tooltip.visible) {
            draw_tooltip(&context, tooltip)?;
            stats.tooltips_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn clear(&mut self, _container: &ContainerRef) -> ChartResult<()> {
        self.last_frame = None;
        self.repaint()
    }

    fn mount(&mut self, container: &ContainerRef, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_frame = Some(frame.clone());
        self.repaint()?;
        debug!(container = %container, stats = ?self.last_stats, "cairo frame painted");
        Ok(())
    }

    fn update_tooltip(
        &mut self,
        _container: &ContainerRef,
        tooltip: &TooltipPrimitive,
    ) -> ChartResult<()> {
        tooltip.validate()?;
        self.tooltip = Some(tooltip.clone());
        self.repaint()
    }

    fn remove_tooltip(&mut self, _container: &ContainerRef) -> ChartResult<()> {
        self.tooltip = None;
        self.repaint()
    }
}

fn draw_layer(
    context: &Context,
    layer: &FrameLayer,
    stats: &mut CairoRenderStats,
) -> ChartResult<()> {
    context.save().map_err(|err| map_backend_error("failed to save state", err))?;
    context.translate(layer.translate_x, layer.translate_y);

    for line in &layer.lines {
        apply_color(context, line.color);
        context.set_line_width(line.stroke_width);
        context.move_to(line.x1, line.y1);
        context.line_to(line.x2, line.y2);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err))?;
        stats.lines_drawn += 1;
    }

    for rect in &layer.rects {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        apply_color(context, rect.fill_color);
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        stats.rects_drawn += 1;
    }

    for text in &layer.texts {
        context.save().map_err(|err| map_backend_error("failed to save state", err))?;
        context.rotate(text.rotation_deg.to_radians());

        let layout = pangocairo::functions::create_layout(context);
        let weight = match text.font_weight {
            FontWeight::Normal => "",
            FontWeight::Bold => " Bold",
        };
        let family = text.font_family.replace('\'', "");
        let font_description =
            FontDescription::from_string(&format!("{family}{weight} {}px", text.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, text_height) = layout.pixel_size();
        let x = match text.h_align {
            TextHAlign::Left => text.x,
            TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
            TextHAlign::Right => text.x - f64::from(text_width),
        };
        // Pango positions from the top of the layout; SVG text sits on its baseline.
        let y = text.y + text.dy_em * text.font_size_px - f64::from(text_height) * 0.8;

        apply_color(context, text.color);
        context.move_to(x, y);
        pangocairo::functions::show_layout(context, &layout);
        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore state", err))?;
        stats.texts_drawn += 1;
    }

    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore state", err))
}

fn draw_tooltip(context: &Context, tooltip: &TooltipPrimitive) -> ChartResult<()> {
    let layout = pangocairo::functions::create_layout(context);
    layout.set_font_description(Some(&FontDescription::from_string("Sans 12px")));
    layout.set_text(&tooltip.text);
    let (width, height) = layout.pixel_size();

    context.rectangle(
        tooltip.left,
        tooltip.top,
        f64::from(width) + 2.0 * TOOLTIP_PADDING_PX,
        f64::from(height) + 2.0 * TOOLTIP_PADDING_PX,
    );
    context.set_source_rgba(0.69, 0.77, 0.87, tooltip.opacity);
    context
        .fill()
        .map_err(|err| map_backend_error("failed to fill tooltip", err))?;

    context.set_source_rgba(0.0, 0.0, 0.0, tooltip.opacity);
    context.move_to(
        tooltip.left + TOOLTIP_PADDING_PX,
        tooltip.top + TOOLTIP_PADDING_PX,
    );
    pangocairo::functions::show_layout(context, &layout);
    Ok(())
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
