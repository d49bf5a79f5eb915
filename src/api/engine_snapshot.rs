use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{PointId, Viewport};

use super::{ApplicationState, DistanceReadout};

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Extent as measured.
    pub viewport: Viewport,
    /// Extent geometry was built from.
    pub effective_viewport: Viewport,
    pub state: ApplicationState,
    pub axis_range: (f64, f64),
    pub point_pixels: IndexMap<PointId, f64>,
    pub midpoint_px: f64,
    pub annotation_visible: bool,
    pub tick_values: Vec<f64>,
    pub dragging: Vec<PointId>,
    pub readout: DistanceReadout,
}
