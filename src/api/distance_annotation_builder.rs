use crate::core::{AxisScale, DomainValue, Orientation, ViewMode, Viewport};
use crate::render::{
    Color, Drawable, LinePrimitive, RectPrimitive, Stroke, TextHAlign, TextPrimitive,
};

use super::label_format::format_distance_label;
use super::scene_style::{ANNOTATION_BOX_FILL, ANNOTATION_LABEL_COLOR, bracket_color};

/// Minimum on-screen separation, in pixels, for the distance annotation.
pub const DISTANCE_VISIBILITY_THRESHOLD_PX: f64 = 15.0;

const BRACKET_WIDTH_PX: f64 = 2.0;
const BRACKET_TICK_PX: f64 = 10.0;

/// Whether two glyph pixels are far enough apart to annotate.
#[must_use]
pub fn annotation_visible(pixel_a: f64, pixel_b: f64) -> bool {
    (pixel_a - pixel_b).abs() >= DISTANCE_VISIBILITY_THRESHOLD_PX
}

#[derive(Debug, Clone, Copy)]
pub(super) struct DistanceAnnotationContext {
    pub mode: ViewMode,
    pub viewport: Viewport,
    pub scale: AxisScale,
    pub point_a: DomainValue,
    pub point_b: DomainValue,
}

/// Bracket spanning both points and a rounded label box at its middle.
///
/// Returns `None` when the points are closer than
/// [`DISTANCE_VISIBILITY_THRESHOLD_PX`].
pub(super) fn build_distance_annotation(ctx: DistanceAnnotationContext) -> Option<Drawable> {
    let pixel_a = ctx.scale.value_to_pixel(ctx.point_a);
    let pixel_b = ctx.scale.value_to_pixel(ctx.point_b);
    if !annotation_visible(pixel_a, pixel_b) {
        return None;
    }

    let low = pixel_a.min(pixel_b);
    let high = pixel_a.max(pixel_b);
    let mid = (pixel_a + pixel_b) / 2.0;
    let orientation = ctx.scale.orientation();
    let color = bracket_color(ctx.mode);
    let label = format_distance_label(ctx.point_a.distance(ctx.point_b), ctx.mode, orientation);

    let drawable = match orientation {
        Orientation::Horizontal => {
            let y = f64::from(ctx.viewport.height) / 2.0 + 50.0;
            Drawable::new()
                .with_line(bracket(low, y - BRACKET_TICK_PX, low, y, color))
                .with_line(bracket(low, y, high, y, color))
                .with_line(bracket(high, y, high, y - BRACKET_TICK_PX, color))
                .with_rect(label_box(mid - 25.0, y - 12.0, 50.0, color))
                .with_text(label_text(label, mid, y + 5.0))
        }
        Orientation::Vertical => {
            let x = f64::from(ctx.viewport.width) / 2.0 - 60.0;
            Drawable::new()
                .with_line(bracket(x + BRACKET_TICK_PX, low, x, low, color))
                .with_line(bracket(x, low, x, high, color))
                .with_line(bracket(x, high, x + BRACKET_TICK_PX, high, color))
                .with_rect(label_box(x - 15.0, mid - 12.0, 30.0, color))
                .with_text(label_text(label, x, mid + 5.0))
        }
    };
    Some(drawable)
}

fn bracket(x1: f64, y1: f64, x2: f64, y2: f64, color: Color) -> LinePrimitive {
    LinePrimitive::new(x1, y1, x2, y2, BRACKET_WIDTH_PX, color)
}

fn label_box(x: f64, y: f64, width: f64, outline: Color) -> RectPrimitive {
    RectPrimitive::new(x, y, width, 24.0, ANNOTATION_BOX_FILL)
        .with_corner_radius(12.0)
        .with_stroke(Stroke::new(1.0, outline))
}

fn label_text(label: String, x: f64, y: f64) -> TextPrimitive {
    TextPrimitive::new(label, x, y, 14.0, ANNOTATION_LABEL_COLOR, TextHAlign::Center).bold(true)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::{DistanceAnnotationContext, annotation_visible, build_distance_annotation};
    use crate::core::{AxisScale, DomainValue, Orientation, ViewMode, Viewport};

    fn context(
        mode: ViewMode,
        orientation: Orientation,
        viewport: Viewport,
        a: i32,
        b: i32,
    ) -> DistanceAnnotationContext {
        DistanceAnnotationContext {
            mode,
            viewport,
            scale: AxisScale::build(orientation, viewport),
            point_a: DomainValue::saturating(a),
            point_b: DomainValue::saturating(b),
        }
    }

    #[test]
    fn threshold_is_inclusive_at_fifteen_pixels() {
        assert!(annotation_visible(100.0, 115.0));
        assert!(!annotation_visible(100.0, 114.9));
        assert!(!annotation_visible(200.0, 200.0));
    }

    #[test]
    fn horizontal_annotation_centers_label_between_points() {
        let ctx = context(
            ViewMode::General,
            Orientation::Horizontal,
            Viewport::new(800, 400),
            -3,
            4,
        );
        let drawable = build_distance_annotation(ctx).expect("points are far apart");
        assert_eq!(drawable.lines.len(), 3);
        assert_eq!(drawable.texts[0].text, "7");
        assert_abs_diff_eq!(drawable.texts[0].x, 416.0, epsilon = 1e-9);
        assert_abs_diff_eq!(drawable.texts[0].y, 255.0, epsilon = 1e-9);
        assert_abs_diff_eq!(drawable.rects[0].x, 391.0, epsilon = 1e-9);
    }

    #[test]
    fn house_label_reads_metres() {
        let ctx = context(
            ViewMode::House,
            Orientation::Horizontal,
            Viewport::new(800, 400),
            -3,
            4,
        );
        let drawable = build_distance_annotation(ctx).expect("visible");
        assert_eq!(drawable.texts[0].text, "7 m");
    }

    #[test]
    fn coincident_points_suppress_annotation() {
        let ctx = context(
            ViewMode::Ocean,
            Orientation::Vertical,
            Viewport::new(800, 400),
            2,
            2,
        );
        assert!(build_distance_annotation(ctx).is_none());
    }

    #[test]
    fn vertical_bracket_sits_left_of_axis() {
        let ctx = context(
            ViewMode::Thermometer,
            Orientation::Vertical,
            Viewport::new(800, 600),
            -5,
            5,
        );
        let drawable = build_distance_annotation(ctx).expect("visible");
        assert_eq!(drawable.lines[1].x1, 340.0);
        assert_eq!(drawable.texts[0].x, 340.0);
        assert_eq!(drawable.texts[0].text, "10");
    }
}
