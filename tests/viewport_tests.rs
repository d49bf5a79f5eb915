use std::cell::Cell;

use approx::assert_abs_diff_eq;
use number_line_rs::api::{DEFERRED_MEASURE_DELAY_SECONDS, NumberLineConfig, NumberLineEngine};
use number_line_rs::core::{PointId, Viewport};
use number_line_rs::interaction::PointerSample;
use number_line_rs::render::NullRenderer;

fn unmeasured_engine() -> NumberLineEngine<NullRenderer> {
    NumberLineEngine::new(
        NullRenderer::default(),
        NumberLineConfig::new(Viewport::new(0, 0)),
    )
    .expect("zero viewport is accepted")
}

#[test]
fn zero_measurement_uses_fallback_extent() {
    let mut engine = unmeasured_engine();
    engine.mount(&mut || Viewport::new(0, 0));
    assert_eq!(engine.viewport(), Viewport::new(0, 0));
    assert_eq!(engine.effective_viewport(), Viewport::new(800, 400));
    assert_eq!(engine.current_scale().range(), (80.0, 720.0));
    engine.render().expect("fallback frame renders");
}

#[test]
fn deferred_measure_corrects_initial_layout() {
    let mut engine = unmeasured_engine();
    let settled = Cell::new(false);
    let mut measure = || {
        if settled.get() {
            Viewport::new(1040, 500)
        } else {
            Viewport::new(0, 0)
        }
    };

    engine.mount(&mut measure);
    assert!(engine.has_pending_measure());
    settled.set(true);

    assert!(!engine.step_deferred_measure(0.04, &mut measure).expect("step"));
    assert_eq!(engine.viewport(), Viewport::new(0, 0));
    assert!(
        engine
            .step_deferred_measure(DEFERRED_MEASURE_DELAY_SECONDS, &mut measure)
            .expect("step")
    );
    assert_eq!(engine.viewport(), Viewport::new(1040, 500));
    assert!(!engine.has_pending_measure());

    // 1040 px: (1040 - 160) / 20 = 44 px per unit.
    assert_abs_diff_eq!(
        engine.compose().geometry.placement(PointId::A).pixel,
        80.0 + 7.0 * 44.0,
        epsilon = 1e-9
    );
}

#[test]
fn invalid_step_delta_is_rejected() {
    let mut engine = unmeasured_engine();
    let mut measure = || Viewport::new(800, 400);
    engine.mount(&mut measure);
    assert!(engine.step_deferred_measure(-1.0, &mut measure).is_err());
    assert!(engine.step_deferred_measure(f64::INFINITY, &mut measure).is_err());
    assert!(engine.has_pending_measure());
}

#[test]
fn resize_mid_drag_uses_new_scale() {
    let mut engine = unmeasured_engine();
    engine.mount(&mut || Viewport::new(800, 400));
    engine.pointer_down(PointId::A, 1);

    assert!(engine.resize(&mut || Viewport::new(400, 400)));
    // 400 px wide: 80..320, 12 px per unit. x = 200 is 0.
    engine.pointer_move(1, PointerSample::new(200.0, 0.0));
    assert_eq!(engine.point(PointId::A).get(), 0);
}

#[test]
fn resize_without_change_reports_false() {
    let mut engine = unmeasured_engine();
    engine.mount(&mut || Viewport::new(640, 480));
    assert!(!engine.resize(&mut || Viewport::new(640, 480)));
}

#[test]
fn narrow_container_keeps_its_own_extent() {
    let mut engine = unmeasured_engine();
    engine.mount(&mut || Viewport::new(150, 400));
    assert_eq!(engine.effective_viewport(), Viewport::new(150, 400));
    assert_eq!(engine.current_scale().range(), (80.0, 70.0));

    let geometry = engine.compose().geometry;
    assert_eq!(geometry.viewport, Viewport::new(150, 400));
    for placement in geometry.points {
        let (x, _) = placement.anchor;
        assert!((0.0..=150.0).contains(&x), "{:?} drawn at {x}", placement.point);
    }

    engine.pointer_down(PointId::B, 1);
    engine.pointer_move(1, PointerSample::new(75.0, 200.0));
    assert_eq!(engine.point(PointId::B).get(), 0);
    engine.pointer_move(1, PointerSample::new(150.0, 200.0));
    assert_eq!(engine.point(PointId::B).get(), -10);
    engine.pointer_move(1, PointerSample::new(0.0, 200.0));
    assert_eq!(engine.point(PointId::B).get(), 10);
    engine.render().expect("narrow frame renders");
}
