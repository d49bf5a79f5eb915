use approx::assert_abs_diff_eq;
use number_line_rs::api::{
    DisplayFlag, NumberLineConfig, NumberLineEngine, POINT_A_COLOR, POINT_B_COLOR,
};
use number_line_rs::core::{DomainValue, Orientation, PointId, ViewMode, Viewport};
use number_line_rs::render::{CanvasLayerKind, NullRenderer};

fn engine_with(config: NumberLineConfig) -> NumberLineEngine<NullRenderer> {
    NumberLineEngine::new(NullRenderer::default(), config).expect("engine init")
}

fn engine() -> NumberLineEngine<NullRenderer> {
    engine_with(NumberLineConfig::new(Viewport::new(800, 400)))
}

fn annotation_texts(engine: &NumberLineEngine<NullRenderer>) -> Vec<String> {
    engine
        .compose()
        .frame
        .layer(CanvasLayerKind::Annotation)
        .map(|layer| layer.texts.iter().map(|text| text.text.clone()).collect())
        .unwrap_or_default()
}

#[test]
fn reference_scene_geometry() {
    let scene = engine().compose();
    let geometry = &scene.geometry;
    assert_abs_diff_eq!(geometry.placement(PointId::A).pixel, 304.0, epsilon = 1e-9);
    assert_abs_diff_eq!(geometry.placement(PointId::B).pixel, 528.0, epsilon = 1e-9);
    assert_abs_diff_eq!(geometry.midpoint_px, 416.0, epsilon = 1e-9);
    assert_eq!(geometry.distance, 7);
    assert!(geometry.annotation_visible);
    assert_eq!(geometry.placement(PointId::A).anchor.1, 200.0);
}

#[test]
fn reference_scene_annotation_label() {
    let engine = engine();
    assert_eq!(annotation_texts(&engine), vec!["7".to_owned()]);
}

#[test]
fn house_mode_labels_distance_in_metres() {
    let mut engine = engine();
    engine.set_mode(ViewMode::House);
    assert_eq!(annotation_texts(&engine), vec!["7 m".to_owned()]);
}

#[test]
fn vertical_modes_use_plain_distance_and_degree_ticks() {
    let mut engine = engine();
    engine.set_mode(ViewMode::Ocean);
    assert_eq!(annotation_texts(&engine), vec!["7".to_owned()]);

    let scene = engine.compose();
    let axis = scene.frame.layer(CanvasLayerKind::Axis).expect("axis layer");
    assert!(axis.texts.iter().any(|text| text.text == "-10°"));
    assert!(axis.texts.iter().all(|text| text.text.ends_with('°')));
}

#[test]
fn annotation_shown_at_exactly_fifteen_pixels() {
    // 220 px leaves 60 px for 20 units: five units span 15 px.
    let config = NumberLineConfig::new(Viewport::new(220, 400))
        .with_points(DomainValue::saturating(0), DomainValue::saturating(5));
    let engine = engine_with(config);
    let scene = engine.compose();
    let a = scene.geometry.placement(PointId::A).pixel;
    let b = scene.geometry.placement(PointId::B).pixel;
    assert_eq!(b - a, 15.0);
    assert!(scene.geometry.annotation_visible);
    assert_eq!(annotation_texts(&engine), vec!["5".to_owned()]);
}

#[test]
fn annotation_hidden_below_fifteen_pixels() {
    // 216 px: five units span 14 px.
    let config = NumberLineConfig::new(Viewport::new(216, 400))
        .with_points(DomainValue::saturating(0), DomainValue::saturating(5));
    let engine = engine_with(config);
    let scene = engine.compose();
    assert!(!scene.geometry.annotation_visible);
    assert!(
        scene
            .frame
            .layer(CanvasLayerKind::Annotation)
            .is_some_and(|layer| layer.is_empty())
    );
}

#[test]
fn coincident_points_hide_annotation() {
    let mut engine = engine();
    engine.set_point(PointId::A, DomainValue::saturating(4));
    assert!(!engine.compose().geometry.annotation_visible);
    assert!(annotation_texts(&engine).is_empty());
}

#[test]
fn show_distance_flag_hides_annotation() {
    let mut engine = engine();
    engine.toggle_flag(DisplayFlag::ShowDistance, false);
    let scene = engine.compose();
    assert!(!scene.geometry.annotation_visible);
    assert!(annotation_texts(&engine).is_empty());
}

#[test]
fn value_chips_follow_show_values() {
    let mut engine = engine();
    let chips = |engine: &NumberLineEngine<NullRenderer>| {
        engine
            .compose()
            .frame
            .layer(CanvasLayerKind::Points)
            .map(|layer| {
                layer
                    .rects
                    .iter()
                    .filter(|rect| rect.fill_color == POINT_A_COLOR || rect.fill_color == POINT_B_COLOR)
                    .count()
            })
            .unwrap_or(0)
    };
    assert_eq!(chips(&engine), 2);
    engine.toggle_flag(DisplayFlag::ShowValues, false);
    assert_eq!(chips(&engine), 0);
}

#[test]
fn every_mode_and_orientation_composes_valid_frames() {
    for mode in ViewMode::ALL {
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            let mut engine = engine();
            engine.set_orientation(orientation);
            engine.set_mode(mode);
            let scene = engine.compose();
            for kind in CanvasLayerKind::CANONICAL {
                assert!(scene.frame.layer(kind).is_some());
            }
            engine.build_render_frame().validate().expect("valid frame");
        }
    }
}

#[test]
fn zero_viewport_composes_with_fallback_extent() {
    let engine = engine_with(NumberLineConfig::new(Viewport::new(0, 0)));
    let scene = engine.compose();
    assert_eq!(scene.geometry.viewport, Viewport::new(800, 400));
    assert_abs_diff_eq!(scene.geometry.placement(PointId::A).pixel, 304.0, epsilon = 1e-9);
}

#[test]
fn custom_theme_replaces_one_mode() {
    use number_line_rs::api::{SceneComposer, ThemeContext, ThemeTable};
    use number_line_rs::render::{Color, Drawable, RectPrimitive};

    fn flat_background(ctx: &ThemeContext) -> Drawable {
        Drawable::new().with_rect(RectPrimitive::new(
            0.0,
            0.0,
            f64::from(ctx.viewport.width),
            f64::from(ctx.viewport.height),
            Color::hex(0x112233),
        ))
    }

    let mut engine = engine();
    let themes = ThemeTable::default().with_renderer(ViewMode::General, flat_background);
    engine.set_composer(SceneComposer::new().with_themes(themes));

    let scene = engine.compose();
    let background = scene
        .frame
        .layer(CanvasLayerKind::Background)
        .expect("background layer");
    assert_eq!(background.rects.len(), 1);
    assert!(background.circles.is_empty());

    engine.set_mode(ViewMode::House);
    let house = engine.compose();
    assert!(
        house
            .frame
            .layer(CanvasLayerKind::Background)
            .is_some_and(|layer| layer.rects.len() > 1)
    );
}
