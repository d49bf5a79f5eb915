use tracing::trace;

use crate::core::PointId;
use crate::extensions::{PluginContext, PluginEvent};
use crate::render::Renderer;

use super::NumberLineEngine;

impl<R: Renderer> NumberLineEngine<R> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            viewport: self.viewport.measured(),
            mode: self.state.mode(),
            orientation: self.state.orientation(),
            point_a: self.state.point(PointId::A),
            point_b: self.state.point(PointId::B),
            distance: self.state.distance(),
            flags: self.state.flags(),
            active_drags: self.drag.active_session_count(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        trace!(?event, plugins = self.plugins.len(), "dispatching plugin event");
        for plugin in &mut self.plugins {
            plugin.on_event(event, context);
        }
    }
}
