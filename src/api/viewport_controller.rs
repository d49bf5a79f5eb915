use crate::core::{AxisScale, Viewport};
use crate::error::NumberLineResult;
use crate::extensions::PluginEvent;
use crate::render::Renderer;

use super::{ContainerMeasure, NumberLineEngine};

impl<R: Renderer> NumberLineEngine<R> {
    /// Container extent as last measured, zeros included.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport.measured()
    }

    /// Extent geometry is built from: zero dimensions, and an axis extent
    /// with no span after padding, take their fallback.
    #[must_use]
    pub fn effective_viewport(&self) -> Viewport {
        AxisScale::effective_viewport(self.orientation(), self.viewport.measured())
    }

    #[must_use]
    pub fn has_pending_measure(&self) -> bool {
        self.viewport.has_pending_measure()
    }

    /// Mount: measures the container and arms the deferred re-measure.
    pub fn mount<M: ContainerMeasure + ?Sized>(&mut self, measure: &mut M) -> bool {
        let changed = self.viewport.mount(measure);
        if changed {
            self.after_viewport_change();
        }
        changed
    }

    /// Container resize notification.
    pub fn resize<M: ContainerMeasure + ?Sized>(&mut self, measure: &mut M) -> bool {
        let changed = self.viewport.resize(measure);
        if changed {
            self.after_viewport_change();
        }
        changed
    }

    /// Direct extent update for hosts that already know the size.
    pub fn set_viewport(&mut self, viewport: Viewport) -> bool {
        let changed = self.viewport.set_measured(viewport);
        if changed {
            self.after_viewport_change();
        }
        changed
    }

    /// Advances the deferred re-measure clock by `delta_seconds`.
    pub fn step_deferred_measure<M: ContainerMeasure + ?Sized>(
        &mut self,
        delta_seconds: f64,
        measure: &mut M,
    ) -> NumberLineResult<bool> {
        let changed = self.viewport.step(delta_seconds, measure)?;
        if changed {
            self.after_viewport_change();
        }
        Ok(changed)
    }

    fn after_viewport_change(&mut self) {
        let scale = self.current_scale();
        self.drag.refresh_scale(scale);
        let Viewport { width, height } = self.viewport.measured();
        self.emit_plugin_event(PluginEvent::ViewportChanged { width, height });
    }
}
