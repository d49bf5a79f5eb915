use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{NumberLineError, NumberLineResult};

/// Lowest integer on the number line.
pub const DOMAIN_MIN: i32 = -10;
/// Highest integer on the number line.
pub const DOMAIN_MAX: i32 = 10;

/// Width substituted when the container reports zero width.
pub const FALLBACK_VIEWPORT_WIDTH: u32 = 800;
/// Height substituted when the container reports zero height.
pub const FALLBACK_VIEWPORT_HEIGHT: u32 = 400;

/// Container extent in pixels.
///
/// A zero dimension is legal and expected transiently during layout; consumers
/// go through [`Viewport::effective`] before building any geometry from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Returns the extent with each zero dimension replaced by its fallback.
    #[must_use]
    pub fn effective(self) -> Self {
        Self {
            width: if self.width == 0 {
                FALLBACK_VIEWPORT_WIDTH
            } else {
                self.width
            },
            height: if self.height == 0 {
                FALLBACK_VIEWPORT_HEIGHT
            } else {
                self.height
            },
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(FALLBACK_VIEWPORT_WIDTH, FALLBACK_VIEWPORT_HEIGHT)
    }
}

/// Integer position on the number line, always inside `[DOMAIN_MIN, DOMAIN_MAX]`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "i32", into = "i32")]
pub struct DomainValue(i32);

impl DomainValue {
    pub const MIN: Self = Self(DOMAIN_MIN);
    pub const MAX: Self = Self(DOMAIN_MAX);

    /// Creates a value, rejecting integers outside the domain.
    pub fn new(value: i32) -> NumberLineResult<Self> {
        if !(DOMAIN_MIN..=DOMAIN_MAX).contains(&value) {
            return Err(NumberLineError::InvalidData(format!(
                "domain value {value} outside [{DOMAIN_MIN}, {DOMAIN_MAX}]"
            )));
        }
        Ok(Self(value))
    }

    /// Creates a value, clamping integers outside the domain to its bounds.
    #[must_use]
    pub const fn saturating(value: i32) -> Self {
        if value < DOMAIN_MIN {
            Self(DOMAIN_MIN)
        } else if value > DOMAIN_MAX {
            Self(DOMAIN_MAX)
        } else {
            Self(value)
        }
    }

    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Absolute distance between two values.
    #[must_use]
    pub fn distance(self, other: Self) -> u32 {
        self.0.abs_diff(other.0)
    }
}

impl TryFrom<i32> for DomainValue {
    type Error = NumberLineError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DomainValue> for i32 {
    fn from(value: DomainValue) -> Self {
        value.0
    }
}

impl fmt::Display for DomainValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of one of the two draggable points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PointId {
    A,
    B,
}

impl PointId {
    pub const ALL: [Self; 2] = [Self::A, Self::B];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Domain runs left to right along x.
    #[default]
    Horizontal,
    /// Domain runs bottom to top along y.
    Vertical,
}

impl Orientation {
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Horizontal)
    }
}

/// Thematic skin applied to the same two domain values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    General,
    House,
    Ocean,
    Thermometer,
}

impl ViewMode {
    pub const ALL: [Self; 4] = [Self::General, Self::House, Self::Ocean, Self::Thermometer];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::General => 0,
            Self::House => 1,
            Self::Ocean => 2,
            Self::Thermometer => 3,
        }
    }

    /// Orientation imposed by this mode, `None` when the user may choose.
    #[must_use]
    pub const fn forced_orientation(self) -> Option<Orientation> {
        match self {
            Self::General => None,
            Self::House => Some(Orientation::Horizontal),
            Self::Ocean | Self::Thermometer => Some(Orientation::Vertical),
        }
    }

    #[must_use]
    pub const fn allows_orientation_choice(self) -> bool {
        self.forced_orientation().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::{DomainValue, Orientation, Viewport, ViewMode};

    #[test]
    fn effective_viewport_replaces_each_zero_dimension_independently() {
        assert_eq!(Viewport::new(0, 0).effective(), Viewport::new(800, 400));
        assert_eq!(Viewport::new(1024, 0).effective(), Viewport::new(1024, 400));
        assert_eq!(Viewport::new(0, 300).effective(), Viewport::new(800, 300));
    }

    #[test]
    fn domain_value_rejects_out_of_range_and_saturates() {
        assert!(DomainValue::new(11).is_err());
        assert!(DomainValue::new(-11).is_err());
        assert_eq!(DomainValue::saturating(42), DomainValue::MAX);
        assert_eq!(DomainValue::saturating(-42), DomainValue::MIN);
        assert_eq!(
            DomainValue::saturating(-3).distance(DomainValue::saturating(4)),
            7
        );
    }

    #[test]
    fn domain_value_deserialization_enforces_range() {
        let ok: DomainValue = serde_json::from_str("-3").expect("in range");
        assert_eq!(ok.get(), -3);
        assert!(serde_json::from_str::<DomainValue>("12").is_err());
    }

    #[test]
    fn modes_force_expected_orientation() {
        assert_eq!(ViewMode::General.forced_orientation(), None);
        assert_eq!(
            ViewMode::House.forced_orientation(),
            Some(Orientation::Horizontal)
        );
        assert_eq!(
            ViewMode::Ocean.forced_orientation(),
            Some(Orientation::Vertical)
        );
        assert_eq!(
            ViewMode::Thermometer.forced_orientation(),
            Some(Orientation::Vertical)
        );
    }
}
