mod drag_controller;
mod listener_registry;

pub use drag_controller::{
    ContainerOrigin, DragController, DragPhase, DragSession, DragStart, PointerId, PointerSample,
    ValueChange,
};
pub use listener_registry::{ListenerKind, ListenerRegistry, SubscriptionHandle};
