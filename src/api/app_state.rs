use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{DomainValue, Orientation, PointId, ViewMode};

/// Default value of point A on mount and after reset.
pub const DEFAULT_POINT_A: DomainValue = DomainValue::saturating(-3);
/// Default value of point B on mount and after reset.
pub const DEFAULT_POINT_B: DomainValue = DomainValue::saturating(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayFlag {
    ShowValues,
    ShowDistance,
    ShowDescription,
    ShowFormula,
}

/// Independent display toggles read by the composer and the control panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFlags {
    pub show_values: bool,
    pub show_distance: bool,
    pub show_description: bool,
    pub show_formula: bool,
}

impl DisplayFlags {
    /// Flags in effect when the visualization is first mounted.
    #[must_use]
    pub const fn mount_defaults() -> Self {
        Self {
            show_values: true,
            show_distance: true,
            show_description: true,
            show_formula: true,
        }
    }

    /// Flags restored by [`ApplicationState::reset`]. Unlike the mount
    /// defaults, description and formula are hidden.
    #[must_use]
    pub const fn reset_defaults() -> Self {
        Self {
            show_values: true,
            show_distance: true,
            show_description: false,
            show_formula: false,
        }
    }

    #[must_use]
    pub fn get(self, flag: DisplayFlag) -> bool {
        match flag {
            DisplayFlag::ShowValues => self.show_values,
            DisplayFlag::ShowDistance => self.show_distance,
            DisplayFlag::ShowDescription => self.show_description,
            DisplayFlag::ShowFormula => self.show_formula,
        }
    }

    pub fn set(&mut self, flag: DisplayFlag, value: bool) {
        let slot = match flag {
            DisplayFlag::ShowValues => &mut self.show_values,
            DisplayFlag::ShowDistance => &mut self.show_distance,
            DisplayFlag::ShowDescription => &mut self.show_description,
            DisplayFlag::ShowFormula => &mut self.show_formula,
        };
        *slot = value;
    }
}

impl Default for DisplayFlags {
    fn default() -> Self {
        Self::mount_defaults()
    }
}

/// Authoritative state: the two points, mode, orientation and display flags.
///
/// Mode changes apply the orientation coupling immediately, so the stored
/// orientation is always compatible with the stored mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationState {
    point_a: DomainValue,
    point_b: DomainValue,
    mode: ViewMode,
    orientation: Orientation,
    flags: DisplayFlags,
}

impl Default for ApplicationState {
    fn default() -> Self {
        Self {
            point_a: DEFAULT_POINT_A,
            point_b: DEFAULT_POINT_B,
            mode: ViewMode::General,
            orientation: Orientation::Horizontal,
            flags: DisplayFlags::mount_defaults(),
        }
    }
}

impl ApplicationState {
    /// State with mount defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn point(&self, id: PointId) -> DomainValue {
        match id {
            PointId::A => self.point_a,
            PointId::B => self.point_b,
        }
    }

    #[must_use]
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn flags(&self) -> DisplayFlags {
        self.flags
    }

    /// `|A - B|`.
    #[must_use]
    pub fn distance(&self) -> u32 {
        self.point_a.distance(self.point_b)
    }

    /// Switches mode and applies its orientation constraint.
    ///
    /// Returns `true` when the orientation changed as a consequence.
    pub fn set_mode(&mut self, mode: ViewMode) -> bool {
        self.mode = mode;
        let forced = mode.forced_orientation();
        let orientation_changed = forced.is_some_and(|orientation| orientation != self.orientation);
        if let Some(orientation) = forced {
            self.orientation = orientation;
        }
        debug!(?mode, orientation = ?self.orientation, orientation_changed, "view mode set");
        orientation_changed
    }

    /// Applies a user orientation choice; ignored unless the mode is General.
    ///
    /// Returns `true` when the orientation was accepted.
    pub fn set_orientation(&mut self, orientation: Orientation) -> bool {
        if !self.mode.allows_orientation_choice() {
            warn!(
                mode = ?self.mode,
                requested = ?orientation,
                "orientation change rejected for mode"
            );
            return false;
        }
        self.orientation = orientation;
        debug!(?orientation, "orientation set");
        true
    }

    /// Stores a point value as given.
    pub fn set_point(&mut self, id: PointId, value: DomainValue) {
        match id {
            PointId::A => self.point_a = value,
            PointId::B => self.point_b = value,
        }
    }

    /// Restores the reset defaults (note: different flags from mount).
    pub fn reset(&mut self) {
        *self = Self {
            flags: DisplayFlags::reset_defaults(),
            ..Self::default()
        };
        debug!("application state reset");
    }

    pub fn toggle_flag(&mut self, flag: DisplayFlag, value: bool) {
        self.flags.set(flag, value);
    }

    /// Replaces all flags at once, used when restoring a configuration.
    pub fn set_flags(&mut self, flags: DisplayFlags) {
        self.flags = flags;
    }
}

#[cfg(test)]
mod tests {
    use super::{ApplicationState, DisplayFlag, DisplayFlags};
    use crate::core::{DomainValue, Orientation, PointId, ViewMode};

    #[test]
    fn mount_and_reset_defaults_differ_only_in_text_flags() {
        let mut state = ApplicationState::new();
        assert_eq!(state.flags(), DisplayFlags::mount_defaults());

        state.reset();
        assert_eq!(state.flags(), DisplayFlags::reset_defaults());
        assert_eq!(state.point(PointId::A).get(), -3);
        assert_eq!(state.point(PointId::B).get(), 4);
    }

    #[test]
    fn orientation_is_locked_outside_general() {
        let mut state = ApplicationState::new();
        assert!(state.set_mode(ViewMode::Ocean));
        assert!(!state.set_orientation(Orientation::Horizontal));
        assert_eq!(state.orientation(), Orientation::Vertical);

        state.set_mode(ViewMode::General);
        assert_eq!(state.orientation(), Orientation::Vertical);
        assert!(state.set_orientation(Orientation::Horizontal));
    }

    #[test]
    fn flags_toggle_independently() {
        let mut state = ApplicationState::new();
        state.toggle_flag(DisplayFlag::ShowFormula, false);
        let flags = state.flags();
        assert!(!flags.show_formula);
        assert!(flags.show_values && flags.show_distance && flags.show_description);
    }

    #[test]
    fn set_point_stores_value_verbatim() {
        let mut state = ApplicationState::new();
        state.set_point(PointId::B, DomainValue::MIN);
        assert_eq!(state.point(PointId::B), DomainValue::MIN);
        assert_eq!(state.distance(), 7);
    }
}
