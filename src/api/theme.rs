//! Decorative backgrounds keyed by view mode.
//!
//! Themes are pure functions of `(mode, viewport, scale)` and never touch the
//! point values. The built-in set is static artwork; hosts can swap any entry
//! through [`ThemeTable::with_renderer`].

use crate::core::{AXIS_PADDING_PX, AxisScale, ViewMode, Viewport};
use crate::render::{
    CirclePrimitive, Color, Drawable, LinePrimitive, RectPrimitive, Stroke, TextHAlign,
    TextPrimitive,
};

/// Inputs available to a theme renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeContext {
    pub mode: ViewMode,
    /// Effective (non-zero) viewport.
    pub viewport: Viewport,
    pub scale: AxisScale,
}

pub type ThemeRenderer = fn(&ThemeContext) -> Drawable;

/// `ViewMode -> ThemeRenderer` lookup.
#[derive(Clone, Copy)]
pub struct ThemeTable {
    renderers: [ThemeRenderer; 4],
}

impl Default for ThemeTable {
    fn default() -> Self {
        Self {
            renderers: [
                general_background,
                house_background,
                ocean_background,
                thermometer_background,
            ],
        }
    }
}

impl std::fmt::Debug for ThemeTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeTable").finish_non_exhaustive()
    }
}

impl ThemeTable {
    #[must_use]
    pub fn renderer(&self, mode: ViewMode) -> ThemeRenderer {
        self.renderers[mode.index()]
    }

    #[must_use]
    pub fn with_renderer(mut self, mode: ViewMode, renderer: ThemeRenderer) -> Self {
        self.renderers[mode.index()] = renderer;
        self
    }

    #[must_use]
    pub fn render(&self, context: &ThemeContext) -> Drawable {
        (self.renderer(context.mode))(context)
    }
}

const GRID_DOT_COLOR: Color = Color::hex(0xE5E7EB);
const CLOUD_COLOR: Color = Color::WHITE.with_alpha(0.8);

/// Dotted paper.
pub fn general_background(context: &ThemeContext) -> Drawable {
    let width = f64::from(context.viewport.width);
    let height = f64::from(context.viewport.height);
    let mut drawable = Drawable::new();
    let mut y = 2.0;
    while y < height {
        let mut x = 2.0;
        while x < width {
            drawable = drawable.with_circle(CirclePrimitive::new(x, y, 1.0, GRID_DOT_COLOR));
            x += 20.0;
        }
        y += 20.0;
    }
    drawable
}

/// Sky, lawn, trees along the street and the road the axis runs on.
pub fn house_background(context: &ThemeContext) -> Drawable {
    let width = f64::from(context.viewport.width);
    let height = f64::from(context.viewport.height);
    let horizon = height * 0.65;

    let mut drawable = Drawable::new()
        .with_rect(RectPrimitive::new(
            0.0,
            0.0,
            width,
            horizon,
            Color::hex(0xBFDBFE),
        ))
        .with_rect(RectPrimitive::new(
            0.0,
            horizon,
            width,
            height - horizon,
            Color::hex(0x86EFAC),
        ));
    drawable.extend(cloud(50.0, 40.0, 1.0));
    drawable.extend(cloud(300.0, 20.0, 0.7));
    drawable.extend(cloud(600.0, 50.0, 1.1));
    for (value, lift) in [(-8.0, 20.0), (-4.0, 25.0), (6.0, 20.0)] {
        drawable.extend(tree(context.scale.to_pixel(value), horizon - lift));
    }
    drawable.with_rect(
        RectPrimitive::new(0.0, height / 2.0 - 20.0, width, 40.0, Color::hex(0xF3F4F6))
            .with_stroke(Stroke::new(1.0, Color::hex(0xE5E7EB))),
    )
}

/// Sky above sea level (domain 0), water below, with a marked water line.
pub fn ocean_background(context: &ThemeContext) -> Drawable {
    let width = f64::from(context.viewport.width);
    let height = f64::from(context.viewport.height);
    let sea_level = context.scale.to_pixel(0.0).clamp(0.0, height);

    let mut drawable = Drawable::new()
        .with_rect(RectPrimitive::new(
            0.0,
            0.0,
            width,
            sea_level,
            Color::hex(0xBAE6FD),
        ))
        .with_rect(RectPrimitive::new(
            0.0,
            sea_level,
            width,
            height - sea_level,
            Color::hex(0x38BDF8),
        ))
        .with_circle(CirclePrimitive::new(
            50.0,
            50.0,
            30.0,
            Color::hex(0xFDB813).with_alpha(0.8),
        ));
    drawable.extend(cloud(100.0, 50.0, 0.8));
    drawable.extend(cloud(width - 150.0, 80.0, 1.2));
    for ratio in [0.3, 0.5, 0.7] {
        drawable = drawable.with_circle(CirclePrimitive::new(
            width * ratio,
            height - 40.0,
            4.0,
            Color::WHITE.with_alpha(0.4),
        ));
    }
    drawable
        .with_line(LinePrimitive::new(
            0.0,
            sea_level,
            width,
            sea_level,
            3.0,
            Color::WHITE.with_alpha(0.5),
        ))
        .with_text(
            TextPrimitive::new(
                "Sea level 0m",
                width - 10.0,
                sea_level - 10.0,
                14.0,
                Color::hex(0x0369A1),
                TextHAlign::Right,
            )
            .bold(true),
        )
}

/// Lab grid with a thermometer tube around the vertical axis.
pub fn thermometer_background(context: &ThemeContext) -> Drawable {
    let width = f64::from(context.viewport.width);
    let height = f64::from(context.viewport.height);
    let center = width / 2.0;
    let mut drawable = Drawable::new();

    let mut x = 0.0;
    while x <= width {
        drawable = drawable.with_line(LinePrimitive::new(x, 0.0, x, height, 1.0, GRID_DOT_COLOR));
        x += 40.0;
    }
    let mut y = 0.0;
    while y <= height {
        drawable = drawable.with_line(LinePrimitive::new(0.0, y, width, y, 1.0, GRID_DOT_COLOR));
        y += 40.0;
    }

    let tube_height = (height - AXIS_PADDING_PX * 2.0 + 40.0).max(0.0);
    let column_height = (height - AXIS_PADDING_PX * 2.0).max(0.0);
    drawable
        .with_rect(
            RectPrimitive::new(
                center - 30.0,
                AXIS_PADDING_PX - 20.0,
                60.0,
                tube_height,
                Color::WHITE,
            )
            .with_corner_radius(30.0)
            .with_stroke(Stroke::new(4.0, Color::hex(0xD1D5DB))),
        )
        .with_rect(
            RectPrimitive::new(
                center - 10.0,
                AXIS_PADDING_PX,
                20.0,
                column_height,
                Color::hex(0xF3F4F6),
            )
            .with_corner_radius(10.0),
        )
        .with_text(TextPrimitive::new(
            "☀",
            center + 40.0,
            AXIS_PADDING_PX + 20.0,
            24.0,
            Color::hex(0xEF4444),
            TextHAlign::Left,
        ))
        .with_text(TextPrimitive::new(
            "❄",
            center + 40.0,
            height - AXIS_PADDING_PX,
            24.0,
            Color::hex(0x3B82F6),
            TextHAlign::Left,
        ))
}

fn cloud(x: f64, y: f64, scale: f64) -> Drawable {
    Drawable::new()
        .with_circle(CirclePrimitive::new(x, y + 20.0 * scale, 18.0 * scale, CLOUD_COLOR))
        .with_circle(CirclePrimitive::new(
            x + 20.0 * scale,
            y + 12.0 * scale,
            22.0 * scale,
            CLOUD_COLOR,
        ))
        .with_circle(CirclePrimitive::new(
            x + 42.0 * scale,
            y + 22.0 * scale,
            16.0 * scale,
            CLOUD_COLOR,
        ))
}

fn tree(x: f64, y: f64) -> Drawable {
    let leaves_dark = Color::hex(0x16A34A);
    Drawable::new()
        .with_rect(RectPrimitive::new(x - 5.0, y, 10.0, 30.0, Color::hex(0x854D0E)))
        .with_circle(CirclePrimitive::new(x, y - 10.0, 20.0, Color::hex(0x22C55E)))
        .with_circle(CirclePrimitive::new(x - 10.0, y - 5.0, 15.0, leaves_dark))
        .with_circle(CirclePrimitive::new(x + 10.0, y - 5.0, 15.0, leaves_dark))
}
