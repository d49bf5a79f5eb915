use crate::error::NumberLineResult;
use crate::extensions::{NumberLinePlugin, PluginEvent};
use crate::interaction::{ContainerOrigin, DragController};
use crate::render::{RenderFrame, Renderer};

use super::{ApplicationState, ComposedScene, SceneComposer, SceneInput, ViewportTracker};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `NumberLineEngine` owns the application state, routes pointer events
/// through the drag controller, tracks the container extent and hands
/// composed scenes to the renderer.
pub struct NumberLineEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) state: ApplicationState,
    pub(super) drag: DragController,
    pub(super) viewport: ViewportTracker,
    pub(super) container_origin: ContainerOrigin,
    pub(super) composer: SceneComposer,
    pub(super) plugins: Vec<Box<dyn NumberLinePlugin>>,
}

impl<R: Renderer> NumberLineEngine<R> {
    #[must_use]
    pub fn composer(&self) -> &SceneComposer {
        &self.composer
    }

    /// Replaces the theme/glyph tables and tick density used for new frames.
    pub fn set_composer(&mut self, composer: SceneComposer) {
        self.composer = composer;
    }

    #[must_use]
    pub fn scene_input(&self) -> SceneInput {
        SceneInput::from_state(&self.state, self.viewport.measured())
    }

    /// Composes the current scene without rendering it.
    #[must_use]
    pub fn compose(&self) -> ComposedScene {
        self.composer.compose(&self.scene_input())
    }

    /// Flattened frame for the current state, as handed to the renderer.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        self.compose().frame.flatten()
    }

    pub fn render(&mut self) -> NumberLineResult<()> {
        let frame = self.build_render_frame();
        self.renderer.render(&frame)?;
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> NumberLineResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame();
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
