use serde::{Deserialize, Serialize};

use crate::api::{DisplayFlag, DisplayFlags};
use crate::core::{DomainValue, Orientation, PointId, ViewMode, Viewport};
use crate::interaction::PointerId;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginContext {
    /// Container extent as last measured.
    pub viewport: Viewport,
    pub mode: ViewMode,
    pub orientation: Orientation,
    pub point_a: DomainValue,
    pub point_b: DomainValue,
    pub distance: u32,
    pub flags: DisplayFlags,
    pub active_drags: usize,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PluginEvent {
    PointChanged { point: PointId, value: DomainValue },
    DragStarted { point: PointId, pointer: PointerId },
    DragEnded { point: PointId },
    ModeChanged { mode: ViewMode },
    OrientationChanged { orientation: Orientation },
    FlagChanged { flag: DisplayFlag, value: bool },
    Reset,
    ViewportChanged { width: u32, height: u32 },
    Rendered,
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins observe events and read engine context without mutating the
/// number line directly.
pub trait NumberLinePlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PluginEvent, context: PluginContext);
}
