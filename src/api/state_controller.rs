use crate::core::{DomainValue, Orientation, PointId, ViewMode};
use crate::extensions::PluginEvent;
use crate::render::Renderer;

use super::{ApplicationState, DisplayFlag, DisplayFlags, DistanceReadout, NumberLineEngine};

impl<R: Renderer> NumberLineEngine<R> {
    #[must_use]
    pub fn state(&self) -> &ApplicationState {
        &self.state
    }

    #[must_use]
    pub fn point(&self, point: PointId) -> DomainValue {
        self.state.point(point)
    }

    #[must_use]
    pub fn mode(&self) -> ViewMode {
        self.state.mode()
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.state.orientation()
    }

    #[must_use]
    pub fn flags(&self) -> DisplayFlags {
        self.state.flags()
    }

    #[must_use]
    pub fn distance(&self) -> u32 {
        self.state.distance()
    }

    /// Control-panel text for the current points and flags.
    #[must_use]
    pub fn readout(&self) -> DistanceReadout {
        DistanceReadout::build(
            self.state.point(PointId::A),
            self.state.point(PointId::B),
            self.state.flags(),
        )
    }

    /// Switches view mode, forcing the orientation the mode requires.
    pub fn set_mode(&mut self, mode: ViewMode) {
        let previous = self.state.mode();
        let orientation_changed = self.state.set_mode(mode);
        if previous != mode {
            self.emit_plugin_event(PluginEvent::ModeChanged { mode });
        }
        if orientation_changed {
            self.after_orientation_change();
        }
    }

    /// Applies a user orientation choice. Ignored outside General mode.
    ///
    /// Returns `true` when the choice was accepted.
    pub fn set_orientation(&mut self, orientation: Orientation) -> bool {
        let previous = self.state.orientation();
        if !self.state.set_orientation(orientation) {
            return false;
        }
        if previous != orientation {
            self.after_orientation_change();
        }
        true
    }

    /// Stores a point value, e.g. from a control-panel input.
    pub fn set_point(&mut self, point: PointId, value: DomainValue) {
        if self.state.point(point) == value {
            return;
        }
        self.state.set_point(point, value);
        self.emit_plugin_event(PluginEvent::PointChanged { point, value });
    }

    /// Restores the reset defaults. Live drags keep running and continue
    /// from the reset values on their next move.
    pub fn reset(&mut self) {
        let previous_orientation = self.state.orientation();
        self.state.reset();
        if self.state.orientation() != previous_orientation {
            let scale = self.current_scale();
            self.drag.refresh_scale(scale);
        }
        self.emit_plugin_event(PluginEvent::Reset);
    }

    pub fn toggle_flag(&mut self, flag: DisplayFlag, value: bool) {
        if self.state.flags().get(flag) == value {
            return;
        }
        self.state.toggle_flag(flag, value);
        self.emit_plugin_event(PluginEvent::FlagChanged { flag, value });
    }

    fn after_orientation_change(&mut self) {
        let scale = self.current_scale();
        self.drag.refresh_scale(scale);
        let orientation = self.state.orientation();
        self.emit_plugin_event(PluginEvent::OrientationChanged { orientation });
    }
}
