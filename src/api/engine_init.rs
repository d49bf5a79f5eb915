use tracing::debug;

use crate::core::PointId;
use crate::error::NumberLineResult;
use crate::interaction::{ContainerOrigin, DragController};
use crate::render::Renderer;

use super::{
    ApplicationState, NumberLineConfig, NumberLineEngine, SceneComposer, ViewportTracker,
};

impl<R: Renderer> NumberLineEngine<R> {
    /// Creates an engine from a bootstrap config.
    ///
    /// The config viewport may be zero in either dimension; geometry falls
    /// back to the default extent until a real measurement arrives.
    pub fn new(renderer: R, config: NumberLineConfig) -> NumberLineResult<Self> {
        config.validate()?;

        let mut state = ApplicationState::new();
        state.set_point(PointId::A, config.point_a);
        state.set_point(PointId::B, config.point_b);
        state.set_flags(config.flags);
        // Orientation first, while the mode is still General, so the mode's
        // constraint wins.
        state.set_orientation(config.orientation);
        state.set_mode(config.mode);

        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            mode = ?state.mode(),
            orientation = ?state.orientation(),
            "number line engine initialized"
        );

        Ok(Self {
            renderer,
            state,
            drag: DragController::default(),
            viewport: ViewportTracker::new(config.viewport),
            container_origin: ContainerOrigin::default(),
            composer: SceneComposer::new().with_tick_count(config.tick_count),
            plugins: Vec::new(),
        })
    }
}
