use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{AxisScale, DomainValue, Orientation, PointId, ViewMode, Viewport};
use crate::render::{
    CanvasLayerKind, Color, Drawable, LayeredRenderFrame, RectPrimitive, Stroke, TextHAlign,
    TextPrimitive,
};

use super::axis_scene_builder::{AxisSceneContext, AxisTick, build_axis_scene, project_ticks};
use super::distance_annotation_builder::{
    DistanceAnnotationContext, annotation_visible, build_distance_annotation,
};
use super::glyph::{GlyphContext, GlyphTable};
use super::scene_style::{GLYPH_HIT_RADIUS_PX, point_color};
use super::theme::{ThemeContext, ThemeTable};
use super::{ApplicationState, DisplayFlags};

/// Default number of ticks requested from the scale.
pub const DEFAULT_TICK_COUNT: usize = 20;

/// Everything the composer reads for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneInput {
    pub mode: ViewMode,
    pub orientation: Orientation,
    pub point_a: DomainValue,
    pub point_b: DomainValue,
    pub flags: DisplayFlags,
    /// Container extent as measured; may contain zeros.
    pub viewport: Viewport,
}

impl SceneInput {
    #[must_use]
    pub fn from_state(state: &ApplicationState, viewport: Viewport) -> Self {
        Self {
            mode: state.mode(),
            orientation: state.orientation(),
            point_a: state.point(PointId::A),
            point_b: state.point(PointId::B),
            flags: state.flags(),
            viewport,
        }
    }

    #[must_use]
    pub fn point(&self, point: PointId) -> DomainValue {
        match point {
            PointId::A => self.point_a,
            PointId::B => self.point_b,
        }
    }

    /// Scale derived from the current orientation and extent.
    #[must_use]
    pub fn scale(&self) -> AxisScale {
        AxisScale::build(self.orientation, self.viewport)
    }
}

/// Where one point lands on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointPlacement {
    pub point: PointId,
    pub value: DomainValue,
    /// Position along the axis.
    pub pixel: f64,
    /// Glyph origin in viewport coordinates.
    pub anchor: (f64, f64),
}

/// Derived values recomputed on every composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneGeometry {
    pub viewport: Viewport,
    pub scale: AxisScale,
    pub distance: u32,
    pub midpoint_px: f64,
    pub points: [PointPlacement; 2],
    pub annotation_visible: bool,
    pub ticks: Vec<AxisTick>,
}

impl SceneGeometry {
    #[must_use]
    pub fn placement(&self, point: PointId) -> PointPlacement {
        self.points[point.index()]
    }

    /// Point whose glyph hit circle contains `(x, y)`. B is painted above A
    /// and wins when both circles contain the position.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<PointId> {
        [PointId::B, PointId::A].into_iter().find(|point| {
            let (anchor_x, anchor_y) = self.placement(*point).anchor;
            (x - anchor_x).hypot(y - anchor_y) <= GLYPH_HIT_RADIUS_PX
        })
    }
}

/// Composer output: derived geometry plus the layered draw list.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedScene {
    pub geometry: SceneGeometry,
    pub frame: LayeredRenderFrame,
}

/// Glyph origin for a domain value: on the axis, which crosses the viewport
/// center.
#[must_use]
pub fn glyph_anchor(scale: AxisScale, viewport: Viewport, value: DomainValue) -> (f64, f64) {
    let pixel = scale.value_to_pixel(value);
    match scale.orientation() {
        Orientation::Horizontal => (pixel, f64::from(viewport.height) / 2.0),
        Orientation::Vertical => (f64::from(viewport.width) / 2.0, pixel),
    }
}

/// Builds the full layered scene from a [`SceneInput`].
///
/// Theme and glyph selection are table lookups; swapping a table entry is the
/// only thing needed to restyle a mode.
#[derive(Debug, Clone, Copy)]
pub struct SceneComposer {
    themes: ThemeTable,
    glyphs: GlyphTable,
    tick_count: usize,
}

impl Default for SceneComposer {
    fn default() -> Self {
        Self {
            themes: ThemeTable::default(),
            glyphs: GlyphTable::default(),
            tick_count: DEFAULT_TICK_COUNT,
        }
    }
}

impl SceneComposer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_themes(mut self, themes: ThemeTable) -> Self {
        self.themes = themes;
        self
    }

    #[must_use]
    pub fn with_glyphs(mut self, glyphs: GlyphTable) -> Self {
        self.glyphs = glyphs;
        self
    }

    #[must_use]
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.tick_count
    }

    #[must_use]
    pub fn themes(&self) -> &ThemeTable {
        &self.themes
    }

    #[must_use]
    pub fn glyphs(&self) -> &GlyphTable {
        &self.glyphs
    }

    /// Derived geometry only, without building draw primitives.
    #[must_use]
    pub fn geometry(&self, input: &SceneInput) -> SceneGeometry {
        let viewport = AxisScale::effective_viewport(input.orientation, input.viewport);
        let scale = input.scale();
        let points = PointId::ALL.map(|point| {
            let value = input.point(point);
            PointPlacement {
                point,
                value,
                pixel: scale.value_to_pixel(value),
                anchor: glyph_anchor(scale, viewport, value),
            }
        });
        let [a, b] = points;
        SceneGeometry {
            viewport,
            scale,
            distance: input.point_a.distance(input.point_b),
            midpoint_px: (a.pixel + b.pixel) / 2.0,
            points,
            annotation_visible: input.flags.show_distance && annotation_visible(a.pixel, b.pixel),
            ticks: project_ticks(scale, self.tick_count),
        }
    }

    #[must_use]
    pub fn compose(&self, input: &SceneInput) -> ComposedScene {
        let geometry = self.geometry(input);
        let viewport = geometry.viewport;
        let scale = geometry.scale;
        let mut frame = LayeredRenderFrame::canonical(viewport);

        frame.push(
            CanvasLayerKind::Background,
            self.themes.render(&ThemeContext {
                mode: input.mode,
                viewport,
                scale,
            }),
        );

        frame.push(
            CanvasLayerKind::Axis,
            build_axis_scene(
                AxisSceneContext {
                    mode: input.mode,
                    viewport,
                    scale,
                },
                &geometry.ticks,
            ),
        );

        if input.flags.show_distance {
            let annotation = build_distance_annotation(DistanceAnnotationContext {
                mode: input.mode,
                viewport,
                scale,
                point_a: input.point_a,
                point_b: input.point_b,
            });
            if let Some(annotation) = annotation {
                frame.push(CanvasLayerKind::Annotation, annotation);
            }
        }

        for placement in geometry.points {
            let mut glyph = self.glyphs.render(&GlyphContext {
                mode: input.mode,
                point: placement.point,
                value: placement.value,
            });
            if input.flags.show_values {
                glyph.extend(value_chip(placement.point, placement.value, scale.orientation()));
            }
            let (x, y) = placement.anchor;
            frame.push(CanvasLayerKind::Points, glyph.translated(x, y));
        }

        trace!(
            mode = ?input.mode,
            orientation = ?input.orientation,
            distance = geometry.distance,
            annotation = geometry.annotation_visible,
            "scene composed"
        );
        ComposedScene { geometry, frame }
    }
}

/// Rounded value badge, above a horizontal axis or left of a vertical one,
/// away from the tick labels.
fn value_chip(point: PointId, value: DomainValue, orientation: Orientation) -> Drawable {
    let (dx, dy) = match orientation {
        Orientation::Horizontal => (0.0, -50.0),
        Orientation::Vertical => (-45.0, 5.0),
    };
    Drawable::new()
        .with_rect(
            RectPrimitive::new(-18.0, -12.0, 36.0, 24.0, point_color(point))
                .with_corner_radius(12.0)
                .with_stroke(Stroke::new(2.0, Color::WHITE)),
        )
        .with_text(
            TextPrimitive::new(
                value.to_string(),
                0.0,
                5.0,
                14.0,
                Color::WHITE,
                TextHAlign::Center,
            )
            .bold(true),
        )
        .translated(dx, dy)
}
