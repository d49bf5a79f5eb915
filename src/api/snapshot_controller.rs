use crate::core::PointId;
use crate::error::{NumberLineError, NumberLineResult};
use crate::render::Renderer;

use super::{EngineSnapshot, NumberLineEngine};

impl<R: Renderer> NumberLineEngine<R> {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let geometry = self.composer.geometry(&self.scene_input());
        EngineSnapshot {
            viewport: self.viewport.measured(),
            effective_viewport: geometry.viewport,
            state: self.state,
            axis_range: geometry.scale.range(),
            point_pixels: geometry
                .points
                .iter()
                .map(|placement| (placement.point, placement.pixel))
                .collect(),
            midpoint_px: geometry.midpoint_px,
            annotation_visible: geometry.annotation_visible,
            tick_values: geometry.ticks.iter().map(|tick| tick.value).collect(),
            dragging: PointId::ALL
                .into_iter()
                .filter(|point| self.drag.is_dragging(*point))
                .collect(),
            readout: self.readout(),
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> NumberLineResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| NumberLineError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
