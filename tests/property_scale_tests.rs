use number_line_rs::core::{AxisScale, DOMAIN_MAX, DOMAIN_MIN, Orientation, Viewport};
use proptest::prelude::*;

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

proptest! {
    #[test]
    fn domain_round_trips_through_pixels(
        value in DOMAIN_MIN..=DOMAIN_MAX,
        orientation in orientation(),
        width in 0u32..4_000,
        height in 0u32..4_000,
    ) {
        let scale = AxisScale::build(orientation, Viewport::new(width, height));
        let pixel = scale.to_pixel(f64::from(value));
        prop_assert_eq!(scale.to_domain(pixel).round() as i32, value);
        prop_assert_eq!(scale.snap_pixel(pixel).map(|snapped| snapped.get()), Some(value));
    }

    #[test]
    fn any_pixel_snaps_inside_domain(
        pixel in prop::num::f64::ANY,
        orientation in orientation(),
        width in 0u32..4_000,
        height in 0u32..4_000,
    ) {
        let scale = AxisScale::build(orientation, Viewport::new(width, height));
        match scale.snap_pixel(pixel) {
            Some(value) => prop_assert!((DOMAIN_MIN..=DOMAIN_MAX).contains(&value.get())),
            None => prop_assert!(pixel.is_nan()),
        }
    }

    #[test]
    fn clamped_pixel_stays_in_range(
        pixel in -1.0e9f64..1.0e9,
        orientation in orientation(),
        width in 1u32..4_000,
    ) {
        let scale = AxisScale::build(orientation, Viewport::new(width, width));
        let (start, end) = scale.range();
        let (low, high) = (start.min(end), start.max(end));
        let clamped = scale.clamp_pixel(pixel).expect("finite pixel");
        prop_assert!(clamped >= low && clamped <= high);
        if (low..=high).contains(&pixel) {
            prop_assert_eq!(clamped, pixel);
        }
    }
}
