//! Palette and fixed geometry shared by the scene builders.

use crate::core::{PointId, ViewMode};
use crate::render::Color;

pub const POINT_A_COLOR: Color = Color::hex(0xEF4444);
pub const POINT_B_COLOR: Color = Color::hex(0x3B82F6);

pub const TICK_COLOR: Color = Color::hex(0x9CA3AF);
pub const TICK_TEXT_COLOR: Color = Color::hex(0x6B7280);
pub const HOUSE_TICK_TEXT_COLOR: Color = Color::hex(0x4B5563);
pub const OCEAN_TICK_COLOR: Color = Color::WHITE.with_alpha(0.6);
pub const OCEAN_SKY_TEXT_COLOR: Color = Color::hex(0x0EA5E9);
pub const OCEAN_SEA_LEVEL_TEXT_COLOR: Color = Color::hex(0x0284C7);

pub const TICK_HALF_LENGTH_PX: f64 = 8.0;
pub const TICK_FONT_SIZE_PX: f64 = 14.0;

pub const ANNOTATION_LABEL_COLOR: Color = Color::hex(0x1F2937);
pub const ANNOTATION_BOX_FILL: Color = Color::WHITE.with_alpha(0.9);

/// Radius around a glyph anchor that accepts pointer-down.
pub const GLYPH_HIT_RADIUS_PX: f64 = 30.0;

#[must_use]
pub const fn point_color(point: PointId) -> Color {
    match point {
        PointId::A => POINT_A_COLOR,
        PointId::B => POINT_B_COLOR,
    }
}

/// Tick mark color and tick label color for one tick value.
#[must_use]
pub fn tick_colors(mode: ViewMode, tick_value: f64) -> (Color, Color) {
    match mode {
        ViewMode::Ocean => {
            let text = if tick_value == 0.0 {
                OCEAN_SEA_LEVEL_TEXT_COLOR
            } else if tick_value > 0.0 {
                OCEAN_SKY_TEXT_COLOR
            } else {
                Color::WHITE
            };
            (OCEAN_TICK_COLOR, text)
        }
        ViewMode::House => (TICK_COLOR, HOUSE_TICK_TEXT_COLOR),
        ViewMode::General | ViewMode::Thermometer => (TICK_COLOR, TICK_TEXT_COLOR),
    }
}

/// Main axis color and stroke width.
#[must_use]
pub fn axis_line_style(mode: ViewMode, horizontal: bool) -> (Color, f64) {
    let color = match (mode, horizontal) {
        (ViewMode::Ocean, true) => Color::WHITE.with_alpha(0.8),
        (ViewMode::Ocean, false) => Color::WHITE.with_alpha(0.3),
        _ => TICK_COLOR,
    };
    let width = if mode == ViewMode::General { 2.0 } else { 4.0 };
    (color, width)
}

#[must_use]
pub fn bracket_color(mode: ViewMode) -> Color {
    if mode == ViewMode::General {
        Color::hex(0x6B7280)
    } else {
        ANNOTATION_LABEL_COLOR
    }
}
