use crate::core::{DomainValue, PointId, ViewMode};
use crate::render::{
    CirclePrimitive, Color, Drawable, PolygonPrimitive, Stroke, TextHAlign, TextPrimitive,
};

use super::scene_style::point_color;

/// Inputs available to a point glyph renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphContext {
    pub mode: ViewMode,
    pub point: PointId,
    pub value: DomainValue,
}

/// Draws one point glyph around the local origin `(0, 0)`; the composer
/// translates it onto the axis.
pub type GlyphRenderer = fn(&GlyphContext) -> Drawable;

/// `ViewMode x PointId -> GlyphRenderer` lookup.
#[derive(Clone, Copy)]
pub struct GlyphTable {
    renderers: [[GlyphRenderer; 2]; 4],
}

impl Default for GlyphTable {
    fn default() -> Self {
        Self {
            renderers: [
                [general_badge, general_badge],
                [house_runner, house_home],
                [ocean_bird, ocean_fish],
                [thermometer_tag, thermometer_tag],
            ],
        }
    }
}

impl std::fmt::Debug for GlyphTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphTable").finish_non_exhaustive()
    }
}

impl GlyphTable {
    #[must_use]
    pub fn renderer(&self, mode: ViewMode, point: PointId) -> GlyphRenderer {
        self.renderers[mode.index()][point.index()]
    }

    #[must_use]
    pub fn with_renderer(mut self, mode: ViewMode, point: PointId, renderer: GlyphRenderer) -> Self {
        self.renderers[mode.index()][point.index()] = renderer;
        self
    }

    #[must_use]
    pub fn render(&self, context: &GlyphContext) -> Drawable {
        (self.renderer(context.mode, context.point))(context)
    }
}

const BUBBLE_OUTLINE: Color = Color::hex(0x374151);
const WHITE_RIM: Stroke = Stroke::new(2.0, Color::WHITE);

/// Filled disc with the point letter.
pub fn general_badge(context: &GlyphContext) -> Drawable {
    Drawable::new()
        .with_circle(
            CirclePrimitive::new(0.0, 0.0, 16.0, point_color(context.point))
                .with_stroke(Stroke::new(3.0, Color::WHITE)),
        )
        .with_text(
            TextPrimitive::new(
                context.point.label(),
                0.0,
                5.0,
                12.0,
                Color::WHITE,
                TextHAlign::Center,
            )
            .bold(true),
        )
}

pub fn house_runner(context: &GlyphContext) -> Drawable {
    speech_bubble(context.point, "🏃")
}

pub fn house_home(context: &GlyphContext) -> Drawable {
    speech_bubble(context.point, "🏠")
}

pub fn ocean_bird(context: &GlyphContext) -> Drawable {
    emoji_with_marker(context.point, "🕊️", -10.0)
}

pub fn ocean_fish(context: &GlyphContext) -> Drawable {
    emoji_with_marker(context.point, "🐠", 10.0)
}

/// Arrow tag pointing at the axis, lettered with the point id.
pub fn thermometer_tag(context: &GlyphContext) -> Drawable {
    Drawable::new()
        .with_polygon(
            PolygonPrimitive::new(
                [(0.0, 0.0), (10.0, -10.0), (40.0, -10.0), (40.0, 10.0), (10.0, 10.0)],
                point_color(context.point),
            )
            .with_stroke(WHITE_RIM),
        )
        .with_text(
            TextPrimitive::new(
                context.point.label(),
                25.0,
                4.0,
                10.0,
                Color::WHITE,
                TextHAlign::Center,
            )
            .bold(true),
        )
}

fn speech_bubble(point: PointId, icon: &str) -> Drawable {
    let outline = [
        (-20.0, -35.0),
        (20.0, -35.0),
        (25.0, -30.0),
        (25.0, -10.0),
        (20.0, -5.0),
        (5.0, -5.0),
        (0.0, 5.0),
        (-5.0, -5.0),
        (-20.0, -5.0),
        (-25.0, -10.0),
        (-25.0, -30.0),
    ];
    Drawable::new()
        .with_polygon(
            PolygonPrimitive::new(outline, Color::WHITE)
                .with_stroke(Stroke::new(2.0, BUBBLE_OUTLINE)),
        )
        .with_circle(marker(point, 6.0))
        .with_text(TextPrimitive::new(
            icon,
            0.0,
            -16.0,
            16.0,
            BUBBLE_OUTLINE,
            TextHAlign::Center,
        ))
}

fn emoji_with_marker(point: PointId, icon: &str, baseline: f64) -> Drawable {
    Drawable::new()
        .with_circle(marker(point, 4.0))
        .with_text(TextPrimitive::new(
            icon,
            -15.0,
            baseline,
            32.0,
            Color::WHITE,
            TextHAlign::Left,
        ))
}

fn marker(point: PointId, radius: f64) -> CirclePrimitive {
    CirclePrimitive::new(0.0, 0.0, radius, point_color(point)).with_stroke(WHITE_RIM)
}

#[cfg(test)]
mod tests {
    use super::{GlyphContext, GlyphTable};
    use crate::api::scene_style::{POINT_A_COLOR, POINT_B_COLOR};
    use crate::core::{DomainValue, PointId, ViewMode};
    use crate::render::Drawable;

    fn context(mode: ViewMode, point: PointId) -> GlyphContext {
        GlyphContext {
            mode,
            point,
            value: DomainValue::saturating(0),
        }
    }

    #[test]
    fn all_eight_combinations_render_valid_glyphs() {
        let table = GlyphTable::default();
        for mode in ViewMode::ALL {
            for point in PointId::ALL {
                let glyph = table.render(&context(mode, point));
                assert!(!glyph.is_empty(), "{mode:?}/{point} glyph is empty");
                glyph.validate().expect("glyph primitives are valid");
            }
        }
    }

    #[test]
    fn general_badge_is_colored_per_point_and_lettered() {
        let table = GlyphTable::default();
        let a = table.render(&context(ViewMode::General, PointId::A));
        let b = table.render(&context(ViewMode::General, PointId::B));
        assert_eq!(a.circles[0].fill_color, POINT_A_COLOR);
        assert_eq!(b.circles[0].fill_color, POINT_B_COLOR);
        assert_eq!(a.texts[0].text, "A");
        assert_eq!(b.texts[0].text, "B");
    }

    #[test]
    fn house_glyphs_differ_between_points() {
        let table = GlyphTable::default();
        let a = table.render(&context(ViewMode::House, PointId::A));
        let b = table.render(&context(ViewMode::House, PointId::B));
        assert_ne!(a.texts[0].text, b.texts[0].text);
    }

    #[test]
    fn single_cell_override() {
        fn dot(_: &GlyphContext) -> Drawable {
            Drawable::new()
        }
        let table = GlyphTable::default().with_renderer(ViewMode::Ocean, PointId::B, dot);
        assert!(table.render(&context(ViewMode::Ocean, PointId::B)).is_empty());
        assert!(!table.render(&context(ViewMode::Ocean, PointId::A)).is_empty());
    }
}
