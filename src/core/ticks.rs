//! Human-friendly tick generation.
//!
//! The step is the power of ten times 1, 2, 5 or 10 closest to
//! `span / count`, and ticks are the multiples of that step inside the span.

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Returns ascending tick values covering `[start, end]`.
///
/// Degenerate inputs (non-finite bounds, zero count) produce no ticks; a
/// zero-width span produces the single bound.
#[must_use]
pub fn nice_ticks(start: f64, end: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !end.is_finite() || count == 0 {
        return Vec::new();
    }
    let (low, high) = if start <= end {
        (start, end)
    } else {
        (end, start)
    };
    if low == high {
        return vec![low];
    }

    let step = tick_step(low, high, count);
    if !step.is_finite() || step <= 0.0 {
        return Vec::new();
    }

    let first = (low / step).ceil() as i64;
    let last = (high / step).floor() as i64;
    (first..=last).map(|index| index as f64 * step).collect()
}

/// Nice step size for `count` intervals over `[low, high]`.
#[must_use]
pub fn tick_step(low: f64, high: f64, count: usize) -> f64 {
    let raw = (high - low) / count.max(1) as f64;
    let power = raw.log10().floor();
    let error = raw / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    factor * 10f64.powf(power)
}

#[cfg(test)]
mod tests {
    use super::{nice_ticks, tick_step};

    #[test]
    fn twenty_ticks_over_the_domain_are_unit_steps() {
        let ticks = nice_ticks(-10.0, 10.0, 20);
        assert_eq!(ticks.len(), 21);
        assert_eq!(ticks.first(), Some(&-10.0));
        assert_eq!(ticks.last(), Some(&10.0));
        assert!(ticks.windows(2).all(|pair| (pair[1] - pair[0] - 1.0).abs() < 1e-12));
    }

    #[test]
    fn coarse_counts_pick_nice_steps() {
        assert_eq!(tick_step(-10.0, 10.0, 5), 5.0);
        assert_eq!(tick_step(-10.0, 10.0, 10), 2.0);
        assert_eq!(nice_ticks(-10.0, 10.0, 4), vec![-10.0, -5.0, 0.0, 5.0, 10.0]);
    }

    #[test]
    fn reversed_bounds_still_ascend() {
        assert_eq!(nice_ticks(10.0, -10.0, 4), vec![-10.0, -5.0, 0.0, 5.0, 10.0]);
    }

    #[test]
    fn degenerate_inputs_are_safe() {
        assert!(nice_ticks(-10.0, 10.0, 0).is_empty());
        assert!(nice_ticks(f64::NAN, 10.0, 5).is_empty());
        assert_eq!(nice_ticks(3.0, 3.0, 5), vec![3.0]);
    }
}
