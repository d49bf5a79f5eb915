use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{AxisScale, DomainValue, Orientation, PointId};

use super::listener_registry::{ListenerKind, ListenerRegistry, SubscriptionHandle};

/// Identifier of one physical pointer (mouse, pen or touch contact).
pub type PointerId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragPhase {
    Idle,
    Dragging,
}

/// Screen position of the container's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContainerOrigin {
    pub left: f64,
    pub top: f64,
}

impl ContainerOrigin {
    #[must_use]
    pub const fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// Pointer position in client (screen) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    pub client_x: f64,
    pub client_y: f64,
}

impl PointerSample {
    #[must_use]
    pub const fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }

    /// Offset along the axis that carries the domain, relative to `origin`.
    #[must_use]
    pub fn axis_offset(self, orientation: Orientation, origin: ContainerOrigin) -> f64 {
        match orientation {
            Orientation::Horizontal => self.client_x - origin.left,
            Orientation::Vertical => self.client_y - origin.top,
        }
    }
}

/// Notification that a drag moved a point onto a new integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueChange {
    pub point: PointId,
    pub value: DomainValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragStart {
    Started,
    /// A session for the same point was already live and has been replaced.
    Restarted,
}

/// One live drag between pointer-down and pointer-up on a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    point: PointId,
    pointer: PointerId,
    scale: AxisScale,
    move_listener: SubscriptionHandle,
    up_listener: SubscriptionHandle,
}

impl DragSession {
    #[must_use]
    pub fn point(&self) -> PointId {
        self.point
    }

    #[must_use]
    pub fn pointer(&self) -> PointerId {
        self.pointer
    }

    #[must_use]
    pub fn scale(&self) -> AxisScale {
        self.scale
    }

    #[must_use]
    pub fn listeners(&self) -> (SubscriptionHandle, SubscriptionHandle) {
        (self.move_listener, self.up_listener)
    }
}

/// Per-point `Idle -> Dragging -> Idle` state machine.
///
/// Sessions for A and B are independent and may be live at the same time
/// when driven by different pointers. Every exit path (pointer-up, explicit
/// end, teardown, restart) releases the session's listeners.
#[derive(Debug, Default)]
pub struct DragController {
    listeners: ListenerRegistry,
    sessions: [Option<DragSession>; 2],
}

impl DragController {
    #[must_use]
    pub fn phase(&self, point: PointId) -> DragPhase {
        if self.sessions[point.index()].is_some() {
            DragPhase::Dragging
        } else {
            DragPhase::Idle
        }
    }

    #[must_use]
    pub fn is_dragging(&self, point: PointId) -> bool {
        self.phase(point) == DragPhase::Dragging
    }

    #[must_use]
    pub fn session(&self, point: PointId) -> Option<&DragSession> {
        self.sessions[point.index()].as_ref()
    }

    #[must_use]
    pub fn active_session_count(&self) -> usize {
        self.sessions.iter().flatten().count()
    }

    /// Number of global listeners currently registered by live sessions.
    #[must_use]
    pub fn active_listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Pointer-down on `point`: opens a session bound to `pointer`.
    ///
    /// A second pointer-down on a point that is already dragging restarts the
    /// session with the new pointer and scale; the previous listeners are
    /// released first.
    pub fn begin(&mut self, point: PointId, pointer: PointerId, scale: AxisScale) -> DragStart {
        let restarted = self.release(point).is_some();
        let session = DragSession {
            point,
            pointer,
            scale,
            move_listener: self.listeners.subscribe(ListenerKind::PointerMove),
            up_listener: self.listeners.subscribe(ListenerKind::PointerUp),
        };
        self.sessions[point.index()] = Some(session);
        debug!(%point, pointer, restarted, "drag session started");
        if restarted {
            DragStart::Restarted
        } else {
            DragStart::Started
        }
    }

    /// Pointer-move: converts the sample through each matching session's scale.
    ///
    /// `current` reports the committed value of a point; a change is emitted
    /// only when the snapped value differs from it. A jump across several
    /// integers yields a single change to the final integer.
    pub fn pointer_move<F>(
        &mut self,
        pointer: PointerId,
        sample: PointerSample,
        origin: ContainerOrigin,
        current: F,
    ) -> SmallVec<[ValueChange; 2]>
    where
        F: Fn(PointId) -> DomainValue,
    {
        let mut changes = SmallVec::new();
        for session in self.sessions.iter().flatten() {
            if session.pointer != pointer {
                continue;
            }
            let offset = sample.axis_offset(session.scale.orientation(), origin);
            let Some(value) = session.scale.snap_pixel(offset) else {
                trace!(point = %session.point, "ignoring non-numeric pointer sample");
                continue;
            };
            if value != current(session.point) {
                trace!(point = %session.point, value = value.get(), "drag value change");
                changes.push(ValueChange {
                    point: session.point,
                    value,
                });
            }
        }
        changes
    }

    /// Pointer-up: ends every session bound to `pointer`.
    pub fn pointer_up(&mut self, pointer: PointerId) -> SmallVec<[PointId; 2]> {
        let ended: SmallVec<[PointId; 2]> = self
            .sessions
            .iter()
            .flatten()
            .filter(|session| session.pointer == pointer)
            .map(|session| session.point)
            .collect();
        for point in &ended {
            self.release(*point);
            debug!(%point, pointer, "drag session ended");
        }
        ended
    }

    /// Ends the session on `point`, if any.
    pub fn end(&mut self, point: PointId) -> bool {
        let ended = self.release(point).is_some();
        if ended {
            debug!(%point, "drag session ended explicitly");
        }
        ended
    }

    /// Teardown path: ends all sessions and releases all listeners.
    pub fn cancel_all(&mut self) -> SmallVec<[PointId; 2]> {
        let cancelled: SmallVec<[PointId; 2]> = PointId::ALL
            .into_iter()
            .filter(|point| self.release(*point).is_some())
            .collect();
        if !cancelled.is_empty() {
            debug!(count = cancelled.len(), "drag sessions cancelled");
        }
        cancelled
    }

    /// Re-targets live sessions after the scale inputs changed mid-drag.
    pub fn refresh_scale(&mut self, scale: AxisScale) {
        for session in self.sessions.iter_mut().flatten() {
            session.scale = scale;
        }
    }

    fn release(&mut self, point: PointId) -> Option<DragSession> {
        let session = self.sessions[point.index()].take()?;
        self.listeners.unsubscribe(session.move_listener);
        self.listeners.unsubscribe(session.up_listener);
        Some(session)
    }
}
