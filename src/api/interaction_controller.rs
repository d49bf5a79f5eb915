use smallvec::SmallVec;
use tracing::trace;

use crate::core::{AxisScale, PointId};
use crate::extensions::PluginEvent;
use crate::interaction::{
    ContainerOrigin, DragPhase, DragStart, PointerId, PointerSample, ValueChange,
};
use crate::render::Renderer;

use super::NumberLineEngine;

impl<R: Renderer> NumberLineEngine<R> {
    /// Scale for the current orientation and measured extent.
    #[must_use]
    pub fn current_scale(&self) -> AxisScale {
        self.scene_input().scale()
    }

    #[must_use]
    pub fn container_origin(&self) -> ContainerOrigin {
        self.container_origin
    }

    /// Screen position of the container's top-left corner; pointer samples
    /// are client coordinates and are made relative to it.
    pub fn set_container_origin(&mut self, origin: ContainerOrigin) {
        self.container_origin = origin;
    }

    /// Pointer-down on a known point glyph.
    pub fn pointer_down(&mut self, point: PointId, pointer: PointerId) -> DragStart {
        let scale = self.current_scale();
        let start = self.drag.begin(point, pointer, scale);
        self.emit_plugin_event(PluginEvent::DragStarted { point, pointer });
        start
    }

    /// Pointer-down at a client position: starts a drag on the glyph under
    /// the pointer, if any.
    pub fn pointer_down_at(&mut self, pointer: PointerId, sample: PointerSample) -> Option<PointId> {
        let x = sample.client_x - self.container_origin.left;
        let y = sample.client_y - self.container_origin.top;
        let Some(point) = self.composer.geometry(&self.scene_input()).hit_test(x, y) else {
            trace!(pointer, x, y, "pointer down missed both glyphs");
            return None;
        };
        self.pointer_down(point, pointer);
        Some(point)
    }

    /// Pointer-move: commits every snapped value change immediately.
    pub fn pointer_move(
        &mut self,
        pointer: PointerId,
        sample: PointerSample,
    ) -> SmallVec<[ValueChange; 2]> {
        let changes =
            self.drag
                .pointer_move(pointer, sample, self.container_origin, |point| {
                    self.state.point(point)
                });
        for change in &changes {
            self.state.set_point(change.point, change.value);
            self.emit_plugin_event(PluginEvent::PointChanged {
                point: change.point,
                value: change.value,
            });
        }
        changes
    }

    /// Pointer-up: ends every session bound to `pointer`.
    pub fn pointer_up(&mut self, pointer: PointerId) -> SmallVec<[PointId; 2]> {
        let ended = self.drag.pointer_up(pointer);
        for point in &ended {
            self.emit_plugin_event(PluginEvent::DragEnded { point: *point });
        }
        ended
    }

    /// Ends the drag on `point` regardless of pointer.
    pub fn end_drag(&mut self, point: PointId) -> bool {
        let ended = self.drag.end(point);
        if ended {
            self.emit_plugin_event(PluginEvent::DragEnded { point });
        }
        ended
    }

    #[must_use]
    pub fn drag_phase(&self, point: PointId) -> DragPhase {
        self.drag.phase(point)
    }

    #[must_use]
    pub fn is_dragging(&self, point: PointId) -> bool {
        self.drag.is_dragging(point)
    }

    #[must_use]
    pub fn active_drag_count(&self) -> usize {
        self.drag.active_session_count()
    }

    /// Pointer listeners currently held by live drag sessions.
    #[must_use]
    pub fn active_listener_count(&self) -> usize {
        self.drag.active_listener_count()
    }

    /// Unmount path: ends every drag, releases every listener and drops the
    /// pending deferred re-measure.
    pub fn teardown(&mut self) {
        let cancelled = self.drag.cancel_all();
        for point in cancelled {
            self.emit_plugin_event(PluginEvent::DragEnded { point });
        }
        self.viewport.cancel();
    }
}
