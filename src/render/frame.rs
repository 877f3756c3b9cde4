use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{LayerKind, LinePrimitive, RectPrimitive, TextPrimitive};

/// Primitives of one layer, positioned relative to `translate_x`/`translate_y`
/// inside the plot group.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameLayer {
    pub kind: LayerKind,
    pub translate_x: f64,
    pub translate_y: f64,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl FrameLayer {
    #[must_use]
    pub fn new(kind: LayerKind) -> Self {
        Self {
            kind,
            translate_x: 0.0,
            translate_y: 0.0,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn translated(mut self, x: f64, y: f64) -> Self {
        self.translate_x = x;
        self.translate_y = y;
        self
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.lines.len() + self.rects.len() + self.texts.len()
    }
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Layers live inside a plot group whose origin sits at
/// `(plot_origin_x, plot_origin_y)` of the `viewport`-sized surface.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub plot_origin_x: f64,
    pub plot_origin_y: f64,
    pub layers: Vec<FrameLayer>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            plot_origin_x: 0.0,
            plot_origin_y: 0.0,
            layers: LayerKind::CANONICAL_ORDER
                .into_iter()
                .map(FrameLayer::new)
                .collect(),
        }
    }

    #[must_use]
    pub fn with_plot_origin(mut self, x: f64, y: f64) -> Self {
        self.plot_origin_x = x;
        self.plot_origin_y = y;
        self
    }

    #[must_use]
    pub fn layer(&self, kind: LayerKind) -> Option<&FrameLayer> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    pub fn layer_mut(&mut self, kind: LayerKind) -> &mut FrameLayer {
        if let Some(position) = self.layers.iter().position(|layer| layer.kind == kind) {
            return &mut self.layers[position];
        }
        self.layers.push(FrameLayer::new(kind));
        let last = self.layers.len() - 1;
        &mut self.layers[last]
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.layers.iter().flat_map(|layer| layer.lines.iter())
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.layers.iter().flat_map(|layer| layer.rects.iter())
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.layers.iter().flat_map(|layer| layer.texts.iter())
    }

    /// Bars in paint order.
    pub fn bars(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.rects().filter(|rect| rect.data_index.is_some())
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.plot_origin_x.is_finite() || !self.plot_origin_y.is_finite() {
            return Err(ChartError::InvalidData(
                "plot origin must be finite".to_owned(),
            ));
        }

        for layer in &self.layers {
            if !layer.translate_x.is_finite() || !layer.translate_y.is_finite() {
                return Err(ChartError::InvalidData(
                    "layer translation must be finite".to_owned(),
                ));
            }
            for line in &layer.lines {
                line.validate()?;
            }
            for rect in &layer.rects {
                rect.validate()?;
            }
            for text in &layer.texts {
                text.validate()?;
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(|layer| layer.primitive_count() == 0)
    }
}
