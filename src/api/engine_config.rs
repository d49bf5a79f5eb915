use serde::{Deserialize, Serialize};

use crate::core::{DomainValue, Orientation, ViewMode, Viewport};
use crate::error::{NumberLineError, NumberLineResult};

use super::scene_composer::DEFAULT_TICK_COUNT;
use super::{DEFAULT_POINT_A, DEFAULT_POINT_B, DisplayFlags};

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can keep a number line setup in a file. Every field
/// has a default, so a partial JSON object is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberLineConfig {
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default = "default_point_a")]
    pub point_a: DomainValue,
    #[serde(default = "default_point_b")]
    pub point_b: DomainValue,
    #[serde(default)]
    pub mode: ViewMode,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default)]
    pub flags: DisplayFlags,
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
}

impl Default for NumberLineConfig {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl NumberLineConfig {
    /// Mount defaults for the given container extent.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            point_a: default_point_a(),
            point_b: default_point_b(),
            mode: ViewMode::default(),
            orientation: Orientation::default(),
            flags: DisplayFlags::mount_defaults(),
            tick_count: default_tick_count(),
        }
    }

    #[must_use]
    pub fn with_points(mut self, point_a: DomainValue, point_b: DomainValue) -> Self {
        self.point_a = point_a;
        self.point_b = point_b;
        self
    }

    /// Sets the initial mode. The mode's orientation constraint is applied
    /// when the engine is built, after `orientation`.
    #[must_use]
    pub fn with_mode(mut self, mode: ViewMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: DisplayFlags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    pub fn validate(self) -> NumberLineResult<()> {
        if self.tick_count == 0 {
            return Err(NumberLineError::InvalidData(
                "tick count must be > 0".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn to_json_pretty(self) -> NumberLineResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| NumberLineError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> NumberLineResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| NumberLineError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_point_a() -> DomainValue {
    DEFAULT_POINT_A
}

fn default_point_b() -> DomainValue {
    DEFAULT_POINT_B
}

fn default_tick_count() -> usize {
    DEFAULT_TICK_COUNT
}
