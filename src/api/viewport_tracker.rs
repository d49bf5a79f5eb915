use tracing::debug;

use crate::core::Viewport;
use crate::error::{NumberLineError, NumberLineResult};

/// Delay between mount and the one-shot corrective re-measure.
pub const DEFERRED_MEASURE_DELAY_SECONDS: f64 = 0.1;

/// Remaining delay treated as elapsed, absorbing accumulated rounding from
/// fractional steps.
const DEADLINE_TOLERANCE_SECONDS: f64 = 1e-9;

/// Host capability that reports the container's current pixel extent.
///
/// Implementations may report `0` in either dimension while layout is still
/// settling.
pub trait ContainerMeasure {
    fn measure(&mut self) -> Viewport;
}

impl<F> ContainerMeasure for F
where
    F: FnMut() -> Viewport,
{
    fn measure(&mut self) -> Viewport {
        self()
    }
}

/// Last measured container extent plus the pending post-mount re-measure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTracker {
    measured: Viewport,
    pending_remaining_seconds: Option<f64>,
}

impl ViewportTracker {
    #[must_use]
    pub fn new(initial: Viewport) -> Self {
        Self {
            measured: initial,
            pending_remaining_seconds: None,
        }
    }

    /// Extent as last reported, zeros included.
    #[must_use]
    pub fn measured(&self) -> Viewport {
        self.measured
    }

    #[must_use]
    pub fn has_pending_measure(&self) -> bool {
        self.pending_remaining_seconds.is_some()
    }

    /// Measures now and arms exactly one deferred re-measure.
    ///
    /// Returns `true` when the extent changed.
    pub fn mount<M: ContainerMeasure + ?Sized>(&mut self, measure: &mut M) -> bool {
        let changed = self.set_measured(measure.measure());
        self.pending_remaining_seconds = Some(DEFERRED_MEASURE_DELAY_SECONDS);
        changed
    }

    /// Resize notification: measures immediately.
    pub fn resize<M: ContainerMeasure + ?Sized>(&mut self, measure: &mut M) -> bool {
        self.set_measured(measure.measure())
    }

    pub fn set_measured(&mut self, viewport: Viewport) -> bool {
        if viewport == self.measured {
            return false;
        }
        debug!(
            from_width = self.measured.width,
            from_height = self.measured.height,
            width = viewport.width,
            height = viewport.height,
            "container re-measured"
        );
        self.measured = viewport;
        true
    }

    /// Advances the deferred re-measure clock.
    ///
    /// Returns `Ok(true)` only when the re-measure fired and changed the
    /// extent. Once fired the re-measure is disarmed.
    pub fn step<M: ContainerMeasure + ?Sized>(
        &mut self,
        delta_seconds: f64,
        measure: &mut M,
    ) -> NumberLineResult<bool> {
        if !delta_seconds.is_finite() || delta_seconds <= 0.0 {
            return Err(NumberLineError::InvalidData(
                "deferred measure delta seconds must be finite and > 0".to_owned(),
            ));
        }
        let Some(remaining) = self.pending_remaining_seconds else {
            return Ok(false);
        };
        let remaining = remaining - delta_seconds;
        if remaining > DEADLINE_TOLERANCE_SECONDS {
            self.pending_remaining_seconds = Some(remaining);
            return Ok(false);
        }
        self.pending_remaining_seconds = None;
        Ok(self.set_measured(measure.measure()))
    }

    /// Drops the pending re-measure. Returns `true` if one was armed.
    pub fn cancel(&mut self) -> bool {
        self.pending_remaining_seconds.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFERRED_MEASURE_DELAY_SECONDS, ViewportTracker};
    use crate::core::Viewport;

    #[test]
    fn deferred_measure_fires_once_after_delay() {
        let mut tracker = ViewportTracker::new(Viewport::new(0, 0));
        let mut reports = vec![Viewport::new(1024, 600), Viewport::new(0, 0)];
        let mut measure = move || reports.pop().unwrap_or(Viewport::new(1, 1));

        assert!(!tracker.mount(&mut measure));
        assert!(tracker.has_pending_measure());

        assert!(!tracker.step(0.05, &mut measure).expect("valid delta"));
        assert!(tracker.step(0.05, &mut measure).expect("valid delta"));
        assert_eq!(tracker.measured(), Viewport::new(1024, 600));
        assert!(!tracker.has_pending_measure());

        assert!(!tracker.step(1.0, &mut measure).expect("valid delta"));
        assert_eq!(tracker.measured(), Viewport::new(1024, 600));
    }

    #[test]
    fn fractional_steps_reach_the_deadline() {
        for steps in [3_u32, 7, 10] {
            let mut tracker = ViewportTracker::new(Viewport::new(0, 0));
            let mut measure = || Viewport::new(0, 0);
            tracker.mount(&mut measure);

            let delta = DEFERRED_MEASURE_DELAY_SECONDS / f64::from(steps);
            let mut settled = || Viewport::new(900, 450);
            for _ in 1..steps {
                assert!(!tracker.step(delta, &mut settled).expect("valid delta"));
            }
            assert!(tracker.has_pending_measure());
            assert!(tracker.step(delta, &mut settled).expect("valid delta"), "{steps} steps");
            assert!(!tracker.has_pending_measure());
            assert_eq!(tracker.measured(), Viewport::new(900, 450));
        }
    }

    #[test]
    fn cancel_disarms_pending_measure() {
        let mut tracker = ViewportTracker::new(Viewport::default());
        let mut measure = || Viewport::new(640, 480);
        tracker.mount(&mut measure);
        assert!(tracker.cancel());
        assert!(!tracker.cancel());
        assert!(!tracker.step(1.0, &mut || Viewport::new(1, 1)).expect("valid"));
        assert_eq!(tracker.measured(), Viewport::new(640, 480));
    }

    #[test]
    fn step_rejects_non_positive_delta() {
        let mut tracker = ViewportTracker::new(Viewport::default());
        let mut measure = || Viewport::default();
        assert!(tracker.step(0.0, &mut measure).is_err());
        assert!(tracker.step(f64::NAN, &mut measure).is_err());
    }
}
