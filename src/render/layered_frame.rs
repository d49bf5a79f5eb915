use serde::{Deserialize, Serialize};

use crate::core::Viewport;

use super::{CanvasLayerKind, Drawable, RenderFrame};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerPrimitives {
    pub kind: CanvasLayerKind,
    pub content: Drawable,
}

/// Scene split into paint-ordered layers so hosts can redraw or inspect one
/// layer without the others.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayeredRenderFrame {
    pub viewport: Viewport,
    pub layers: Vec<LayerPrimitives>,
}

impl LayeredRenderFrame {
    #[must_use]
    pub fn canonical(viewport: Viewport) -> Self {
        let layers = CanvasLayerKind::CANONICAL
            .into_iter()
            .map(|kind| LayerPrimitives {
                kind,
                content: Drawable::new(),
            })
            .collect();
        Self { viewport, layers }
    }

    pub fn push(&mut self, kind: CanvasLayerKind, drawable: Drawable) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.content.extend(drawable);
        }
    }

    #[must_use]
    pub fn layer(&self, kind: CanvasLayerKind) -> Option<&Drawable> {
        self.layers
            .iter()
            .find(|layer| layer.kind == kind)
            .map(|layer| &layer.content)
    }

    #[must_use]
    pub fn flatten(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport);
        for layer in &self.layers {
            frame.content.extend(layer.content.clone());
        }
        frame
    }

    #[must_use]
    pub fn flatten_layers(&self, include_layers: &[CanvasLayerKind]) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport);
        for layer in &self.layers {
            if !include_layers.contains(&layer.kind) {
                continue;
            }
            frame.content.extend(layer.content.clone());
        }
        frame
    }

    fn layer_mut(&mut self, kind: CanvasLayerKind) -> Option<&mut LayerPrimitives> {
        self.layers.iter_mut().find(|layer| layer.kind == kind)
    }
}
