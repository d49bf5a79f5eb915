mod drawable;
mod frame;
mod layer_stack;
mod layered_frame;
mod null_renderer;
mod primitives;

pub use drawable::Drawable;
pub use frame::RenderFrame;
pub use layer_stack::CanvasLayerKind;
pub use layered_frame::{LayerPrimitives, LayeredRenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, PolygonPrimitive, RectPrimitive, Stroke, TextHAlign,
    TextPrimitive,
};

use crate::error::NumberLineResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame` so drawing code stays
/// isolated from number line state and drag interaction.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> NumberLineResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
