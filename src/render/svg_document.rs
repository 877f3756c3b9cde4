use std::fmt::Write as _;
use std::path::Path;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, ContainerRef, FontWeight, FrameLayer, LayerKind, RenderFrame, Renderer, TextHAlign,
    TooltipPrimitive,
};

#[derive(Debug, Default, Clone, PartialEq)]
struct ContainerNode {
    children: Vec<String>,
    element_count: usize,
    tooltip: Option<String>,
}

/// In-memory document of named containers that charts mount SVG into.
///
/// Mounting into a container that was never registered is a silent no-op
/// (logged at `warn`), mirroring a selector that matches nothing.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SvgDocument {
    containers: IndexMap<ContainerRef, ContainerNode>,
}

impl SvgDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_container(mut self, container: impl Into<ContainerRef>) -> Self {
        self.register(container);
        self
    }

    pub fn register(&mut self, container: impl Into<ContainerRef>) {
        self.containers.entry(container.into()).or_default();
    }

    #[must_use]
    pub fn contains(&self, container: &ContainerRef) -> bool {
        self.containers.contains_key(container)
    }

    /// Direct children of `container` (one `<svg>` after a render).
    #[must_use]
    pub fn child_count(&self, container: &ContainerRef) -> usize {
        self.containers
            .get(container)
            .map_or(0, |node| node.children.len())
    }

    /// All elements below `container`, nested ones included.
    #[must_use]
    pub fn element_count(&self, container: &ContainerRef) -> usize {
        self.containers
            .get(container)
            .map_or(0, |node| node.element_count)
    }

    #[must_use]
    pub fn markup(&self, container: &ContainerRef) -> Option<String> {
        self.containers
            .get(container)
            .map(|node| node.children.concat())
    }

    #[must_use]
    pub fn tooltip_markup(&self, container: &ContainerRef) -> Option<&str> {
        self.containers
            .get(container)
            .and_then(|node| node.tooltip.as_deref())
    }

    /// Tooltip elements across the whole document.
    #[must_use]
    pub fn tooltip_count(&self) -> usize {
        self.containers
            .values()
            .filter(|node| node.tooltip.is_some())
            .count()
    }

    /// Writes the container's markup as a standalone SVG file.
    pub fn write_svg(&self, container: &ContainerRef, path: impl AsRef<Path>) -> ChartResult<()> {
        let markup = self
            .markup(container)
            .ok_or_else(|| ChartError::InvalidData(format!("unknown container `{container}`")))?;
        std::fs::write(path.as_ref(), markup)?;
        Ok(())
    }
}

impl Renderer for SvgDocument {
    fn clear(&mut self, container: &ContainerRef) -> ChartResult<()> {
        if let Some(node) = self.containers.get_mut(container) {
            node.children.clear();
            node.element_count = 0;
        }
        Ok(())
    }

    fn mount(&mut self, container: &ContainerRef, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        let Some(node) = self.containers.get_mut(container) else {
            warn!(container = %container, "mount target not found; nothing rendered");
            return Ok(());
        };

        let (markup, element_count) = write_frame(frame)?;
        node.children.clear();
        node.children.push(markup);
        node.element_count = element_count;
        debug!(container = %container, element_count, "svg mounted");
        Ok(())
    }

    fn update_tooltip(
        &mut self,
        container: &ContainerRef,
        tooltip: &TooltipPrimitive,
    ) -> ChartResult<()> {
        tooltip.validate()?;
        let Some(node) = self.containers.get_mut(container) else {
            return Ok(());
        };

        let display = if tooltip.visible { "block" } else { "none" };
        node.tooltip = Some(format!(
            r#"<div class="tooltip" style="position: absolute; left: {}px; top: {}px; opacity: {}; display: {display}">{}</div>"#,
            tooltip.left,
            tooltip.top,
            tooltip.opacity,
            escape(&tooltip.text)
        ));
        Ok(())
    }

    fn remove_tooltip(&mut self, container: &ContainerRef) -> ChartResult<()> {
        if let Some(node) = self.containers.get_mut(container) {
            node.tooltip = None;
        }
        Ok(())
    }
}

fn write_frame(frame: &RenderFrame) -> ChartResult<(String, usize)> {
    let mut out = String::new();
    let mut elements = 2;
    write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}"><g transform="translate({},{})">"#,
        frame.viewport.width, frame.viewport.height, frame.plot_origin_x, frame.plot_origin_y
    )
    .map_err(fmt_error)?;

    for layer in &frame.layers {
        elements += write_layer(&mut out, layer)?;
    }

    out.push_str("</g></svg>");
    Ok((out, elements))
}

fn write_layer(out: &mut String, layer: &FrameLayer) -> ChartResult<usize> {
    let grouped = matches!(layer.kind, LayerKind::XAxis | LayerKind::YAxis);
    let mut elements = 0;
    if grouped {
        write!(
            out,
            r#"<g class="{}" transform="translate({},{})">"#,
            layer.kind.css_class(),
            layer.translate_x,
            layer.translate_y
        )
        .map_err(fmt_error)?;
        elements += 1;
    }

    for line in &layer.lines {
        write!(
            out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"{}/>"#,
            line.x1,
            line.y1,
            line.x2,
            line.y2,
            line.color.to_hex(),
            line.stroke_width,
            opacity_attr("stroke-opacity", line.color)
        )
        .map_err(fmt_error)?;
        elements += 1;
    }

    for text in &layer.texts {
        let anchor = match text.h_align {
            TextHAlign::Left => "start",
            TextHAlign::Center => "middle",
            TextHAlign::Right => "end",
        };
        let weight = match text.font_weight {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        };
        out.push_str("<text");
        if text.rotation_deg != 0.0 {
            write!(out, r#" transform="rotate({})""#, text.rotation_deg).map_err(fmt_error)?;
        }
        write!(out, r#" x="{}" y="{}""#, text.x, text.y).map_err(fmt_error)?;
        if text.dy_em != 0.0 {
            write!(out, r#" dy="{}em""#, text.dy_em).map_err(fmt_error)?;
        }
        write!(
            out,
            r#" text-anchor="{anchor}" fill="{}" style="font-family: {}; font-weight: {weight}; font-size: {}px">{}</text>"#,
            text.color.to_hex(),
            escape(text.font_family),
            text.font_size_px,
            escape(&text.text)
        )
        .map_err(fmt_error)?;
        elements += 1;
    }

    for rect in &layer.rects {
        let class = if rect.data_index.is_some() {
            r#" class="bar""#
        } else {
            ""
        };
        write!(
            out,
            r#"<rect{class} x="{}" y="{}" width="{}" height="{}" fill="{}"{}/>"#,
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            rect.fill_color.to_hex(),
            opacity_attr("fill-opacity", rect.fill_color)
        )
        .map_err(fmt_error)?;
        elements += 1;
    }

    if grouped {
        out.push_str("</g>");
    }
    Ok(elements)
}

fn opacity_attr(name: &str, color: Color) -> String {
    if color.alpha < 1.0 {
        format!(r#" {name}="{}""#, color.alpha)
    } else {
        String::new()
    }
}

fn escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn fmt_error(err: std::fmt::Error) -> ChartError {
    ChartError::InvalidData(format!("failed to write svg markup: {err}"))
}
