use serde::{Deserialize, Serialize};

use crate::core::{AxisScale, ViewMode, Viewport};
use crate::render::{Drawable, LinePrimitive, TextHAlign, TextPrimitive};

use super::label_format::format_tick_label;
use super::scene_style::{TICK_FONT_SIZE_PX, TICK_HALF_LENGTH_PX, axis_line_style, tick_colors};

/// One projected tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub pixel: f64,
}

#[derive(Debug, Clone, Copy)]
pub(super) struct AxisSceneContext {
    pub mode: ViewMode,
    pub viewport: Viewport,
    pub scale: AxisScale,
}

pub(super) fn project_ticks(scale: AxisScale, tick_count: usize) -> Vec<AxisTick> {
    scale
        .ticks(tick_count)
        .into_iter()
        .map(|value| AxisTick {
            value,
            pixel: scale.to_pixel(value),
        })
        .collect()
}

/// Tick marks, tick labels and the main axis line.
///
/// The axis crosses the viewport center on the cross axis. Tick labels sit
/// below a horizontal axis and to the right of a vertical one.
pub(super) fn build_axis_scene(ctx: AxisSceneContext, ticks: &[AxisTick]) -> Drawable {
    let width = f64::from(ctx.viewport.width);
    let height = f64::from(ctx.viewport.height);
    let orientation = ctx.scale.orientation();
    let horizontal = orientation.is_horizontal();
    let mut drawable = Drawable::new();

    for tick in ticks {
        let is_zero = tick.value == 0.0;
        let (tick_color, text_color) = tick_colors(ctx.mode, tick.value);
        let stroke_width = if is_zero { 3.0 } else { 2.0 };
        let label = format_tick_label(tick.value, orientation);

        let (line, text) = if horizontal {
            let center_y = height / 2.0;
            (
                LinePrimitive::new(
                    tick.pixel,
                    center_y - TICK_HALF_LENGTH_PX,
                    tick.pixel,
                    center_y + TICK_HALF_LENGTH_PX,
                    stroke_width,
                    tick_color,
                ),
                TextPrimitive::new(
                    label,
                    tick.pixel,
                    center_y + 28.0,
                    TICK_FONT_SIZE_PX,
                    text_color,
                    TextHAlign::Center,
                ),
            )
        } else {
            let center_x = width / 2.0;
            (
                LinePrimitive::new(
                    center_x - TICK_HALF_LENGTH_PX,
                    tick.pixel,
                    center_x + TICK_HALF_LENGTH_PX,
                    tick.pixel,
                    stroke_width,
                    tick_color,
                ),
                TextPrimitive::new(
                    label,
                    center_x + 25.0,
                    tick.pixel + 4.0,
                    TICK_FONT_SIZE_PX,
                    text_color,
                    TextHAlign::Left,
                ),
            )
        };
        drawable = drawable.with_line(line).with_text(text.bold(is_zero));
    }

    let (axis_color, axis_width) = axis_line_style(ctx.mode, horizontal);
    let (range_start, range_end) = ctx.scale.range();
    let axis_line = if horizontal {
        LinePrimitive::new(
            range_start,
            height / 2.0,
            range_end,
            height / 2.0,
            axis_width,
            axis_color,
        )
    } else {
        LinePrimitive::new(
            width / 2.0,
            range_end,
            width / 2.0,
            range_start,
            axis_width,
            axis_color,
        )
    };
    drawable.with_line(axis_line)
}
