use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::ticks::nice_ticks;
use crate::core::types::{
    DOMAIN_MAX, DOMAIN_MIN, DomainValue, FALLBACK_VIEWPORT_HEIGHT, FALLBACK_VIEWPORT_WIDTH,
    Orientation, Viewport,
};

/// Pixel margin kept free at both ends of the axis.
pub const AXIS_PADDING_PX: f64 = 80.0;

/// Affine mapping between the integer domain and one screen axis.
///
/// Horizontal maps `-10` to the left padding edge. Vertical reverses the
/// domain so `10` sits at the top padding edge and values increase upward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisScale {
    orientation: Orientation,
    extent_px: f64,
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl AxisScale {
    /// Extent the scale for `orientation` is built from.
    ///
    /// Zero dimensions take their fallback. The axis dimension also takes its
    /// fallback when it equals twice the padding, where the span would be
    /// zero. Any other extent is kept, so a container narrower than the
    /// padding yields a compressed, reversed range rather than one that
    /// disagrees with the frame.
    #[must_use]
    pub fn effective_viewport(orientation: Orientation, viewport: Viewport) -> Viewport {
        let mut effective = viewport.effective();
        let (axis, fallback) = match orientation {
            Orientation::Horizontal => (&mut effective.width, FALLBACK_VIEWPORT_WIDTH),
            Orientation::Vertical => (&mut effective.height, FALLBACK_VIEWPORT_HEIGHT),
        };
        if f64::from(*axis) == AXIS_PADDING_PX * 2.0 {
            trace!(measured = *axis, fallback, "substituting fallback axis extent");
            *axis = fallback;
        }
        effective
    }

    /// Builds the scale for the current orientation and container extent,
    /// through [`AxisScale::effective_viewport`].
    #[must_use]
    pub fn build(orientation: Orientation, viewport: Viewport) -> Self {
        let effective = Self::effective_viewport(orientation, viewport);
        let extent_px = f64::from(match orientation {
            Orientation::Horizontal => effective.width,
            Orientation::Vertical => effective.height,
        });

        let (domain_start, domain_end) = match orientation {
            Orientation::Horizontal => (f64::from(DOMAIN_MIN), f64::from(DOMAIN_MAX)),
            Orientation::Vertical => (f64::from(DOMAIN_MAX), f64::from(DOMAIN_MIN)),
        };

        Self {
            orientation,
            extent_px,
            domain_start,
            domain_end,
            range_start: AXIS_PADDING_PX,
            range_end: extent_px - AXIS_PADDING_PX,
        }
    }

    #[must_use]
    pub fn orientation(self) -> Orientation {
        self.orientation
    }

    /// Axis length in pixels actually used for the mapping.
    #[must_use]
    pub fn extent_px(self) -> f64 {
        self.extent_px
    }

    #[must_use]
    pub fn to_pixel(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn value_to_pixel(self, value: DomainValue) -> f64 {
        self.to_pixel(f64::from(value.get()))
    }

    /// Inverse of [`AxisScale::to_pixel`]; not rounded, not clamped.
    #[must_use]
    pub fn to_domain(self, pixel: f64) -> f64 {
        let normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    /// Pixel range `(start, end)` the domain occupies: `start` is the
    /// padding edge. `end < start` when the extent is narrower than the
    /// padding on both sides.
    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Clamps a pixel into [`AxisScale::range`], whichever way it runs.
    /// Infinite inputs land on the nearest end; `NaN` yields `None`.
    #[must_use]
    pub fn clamp_pixel(self, pixel: f64) -> Option<f64> {
        if pixel.is_nan() {
            return None;
        }
        let low = self.range_start.min(self.range_end);
        let high = self.range_start.max(self.range_end);
        Some(pixel.clamp(low, high))
    }

    /// Maps any pixel to the nearest integer domain value.
    ///
    /// Rounding follows the half-up convention (`-2.5` becomes `-2`).
    #[must_use]
    pub fn snap_pixel(self, pixel: f64) -> Option<DomainValue> {
        let clamped = self.clamp_pixel(pixel)?;
        let rounded = (self.to_domain(clamped) + 0.5).floor();
        Some(DomainValue::saturating(rounded as i32))
    }

    /// Evenly spaced human-friendly tick values spanning the domain, ascending.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        nice_ticks(f64::from(DOMAIN_MIN), f64::from(DOMAIN_MAX), count)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::{AXIS_PADDING_PX, AxisScale};
    use crate::core::{DomainValue, Orientation, Viewport};

    #[test]
    fn horizontal_scale_matches_reference_positions() {
        let scale = AxisScale::build(Orientation::Horizontal, Viewport::new(800, 400));
        assert_abs_diff_eq!(scale.to_pixel(-3.0), 304.0, epsilon = 1e-9);
        assert_abs_diff_eq!(scale.to_pixel(4.0), 528.0, epsilon = 1e-9);
        assert_eq!(scale.range(), (80.0, 720.0));
    }

    #[test]
    fn vertical_scale_puts_max_value_at_top() {
        let scale = AxisScale::build(Orientation::Vertical, Viewport::new(800, 400));
        assert_abs_diff_eq!(scale.to_pixel(10.0), AXIS_PADDING_PX, epsilon = 1e-9);
        assert_abs_diff_eq!(scale.to_pixel(-10.0), 400.0 - AXIS_PADDING_PX, epsilon = 1e-9);
    }

    #[test]
    fn zero_span_extent_uses_fallback() {
        let scale = AxisScale::build(Orientation::Horizontal, Viewport::new(160, 0));
        assert_eq!(scale.extent_px(), 800.0);
        let scale = AxisScale::build(Orientation::Vertical, Viewport::new(0, 0));
        assert_eq!(scale.extent_px(), 400.0);
        assert_eq!(
            AxisScale::effective_viewport(Orientation::Vertical, Viewport::new(160, 160)),
            Viewport::new(160, 400)
        );
    }

    #[test]
    fn narrow_extent_keeps_reversed_range() {
        let scale = AxisScale::build(Orientation::Horizontal, Viewport::new(150, 400));
        assert_eq!(scale.extent_px(), 150.0);
        assert_eq!(scale.range(), (80.0, 70.0));
        assert_abs_diff_eq!(scale.to_pixel(0.0), 75.0, epsilon = 1e-9);
        assert_eq!(scale.clamp_pixel(150.0), Some(80.0));
        assert_eq!(scale.clamp_pixel(0.0), Some(70.0));
        assert_eq!(scale.snap_pixel(150.0), Some(DomainValue::MIN));
        assert_eq!(scale.snap_pixel(0.0), Some(DomainValue::MAX));
    }

    #[test]
    fn snap_pixel_rounds_half_up_and_handles_non_finite() {
        let scale = AxisScale::build(Orientation::Horizontal, Viewport::new(800, 400));
        // -2.5 sits at 80 + 0.375 * 640 = 320.
        assert_eq!(scale.snap_pixel(320.0), Some(DomainValue::saturating(-2)));
        assert_eq!(scale.snap_pixel(f64::NEG_INFINITY), Some(DomainValue::MIN));
        assert_eq!(scale.snap_pixel(f64::INFINITY), Some(DomainValue::MAX));
        assert_eq!(scale.snap_pixel(f64::NAN), None);
    }
}
