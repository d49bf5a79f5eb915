use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::io::Write;

use cairo::{Context, Format, ImageSurface};
use pango::{FontDescription, Weight};

use crate::error::{NumberLineError, NumberLineResult};
use crate::render::{
    CirclePrimitive, Color, Drawable, LinePrimitive, PolygonPrimitive, RectPrimitive, RenderFrame,
    Renderer, Stroke, TextHAlign, TextPrimitive,
};

/// Primitive counts painted by the last frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub rects_drawn: usize,
    pub polygons_drawn: usize,
    pub circles_drawn: usize,
    pub lines_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderers that can also paint into a Cairo context they do not own, such
/// as the one handed to a GTK draw callback.
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> NumberLineResult<()>;
}

/// Cairo/Pango backend painting onto an owned ARGB32 image surface.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> NumberLineResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(NumberLineError::InvalidData(format!(
                "cairo surface size must be > 0, got {width}x{height}"
            )));
        }
        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| backend_error("create surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::WHITE,
            last_stats: CairoRenderStats::default(),
        })
    }

    pub fn set_clear_color(&mut self, color: Color) -> NumberLineResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Encodes the owned surface, as painted by the last `render`, as PNG.
    pub fn write_png<W: Write>(&mut self, writer: &mut W) -> NumberLineResult<()> {
        self.surface.flush();
        self.surface
            .write_to_png(writer)
            .map_err(|err| NumberLineError::InvalidData(format!("cairo png export failed: {err}")))
    }

    fn paint_frame(&mut self, context: &Context, frame: &RenderFrame) -> NumberLineResult<()> {
        frame.validate()?;
        set_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| backend_error("clear", err))?;
        self.last_stats = paint_drawable(context, &frame.content)?;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> NumberLineResult<()> {
        let context =
            Context::new(&self.surface).map_err(|err| backend_error("create context", err))?;
        self.paint_frame(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> NumberLineResult<()> {
        self.paint_frame(context, frame)
    }
}

/// Paints in `Drawable` order: rects, polygons, circles, lines, texts.
fn paint_drawable(context: &Context, content: &Drawable) -> NumberLineResult<CairoRenderStats> {
    for rect in &content.rects {
        paint_rect(context, rect)?;
    }
    for polygon in &content.polygons {
        paint_polygon(context, polygon)?;
    }
    for circle in &content.circles {
        paint_circle(context, circle)?;
    }
    for line in &content.lines {
        paint_line(context, line)?;
    }
    for text in &content.texts {
        paint_text(context, text);
    }
    Ok(CairoRenderStats {
        rects_drawn: content.rects.len(),
        polygons_drawn: content.polygons.len(),
        circles_drawn: content.circles.len(),
        lines_drawn: content.lines.len(),
        texts_drawn: content.texts.len(),
    })
}

fn paint_rect(context: &Context, rect: &RectPrimitive) -> NumberLineResult<()> {
    let radius = rect
        .corner_radius
        .min(rect.width / 2.0)
        .min(rect.height / 2.0);
    if radius > 0.0 {
        let (left, top) = (rect.x, rect.y);
        let (right, bottom) = (rect.x + rect.width, rect.y + rect.height);
        context.new_sub_path();
        context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
        context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
        context.arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
        context.arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
        context.close_path();
    } else {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
    }
    fill_then_outline(context, rect.fill_color, rect.stroke)
}

fn paint_polygon(context: &Context, polygon: &PolygonPrimitive) -> NumberLineResult<()> {
    let mut vertices = polygon.points.iter().copied();
    if let Some((x, y)) = vertices.next() {
        context.new_sub_path();
        context.move_to(x, y);
        vertices.for_each(|(x, y)| context.line_to(x, y));
        context.close_path();
    }
    fill_then_outline(context, polygon.fill_color, polygon.stroke)
}

fn paint_circle(context: &Context, circle: &CirclePrimitive) -> NumberLineResult<()> {
    context.new_sub_path();
    context.arc(circle.cx, circle.cy, circle.radius, 0.0, TAU);
    context.close_path();
    fill_then_outline(context, circle.fill_color, circle.stroke)
}

fn paint_line(context: &Context, line: &LinePrimitive) -> NumberLineResult<()> {
    set_color(context, line.color);
    context.set_line_width(line.stroke_width);
    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    context
        .stroke()
        .map_err(|err| backend_error("stroke line", err))
}

/// `text.y` is the baseline; emoji glyphs resolve through Pango font fallback.
fn paint_text(context: &Context, text: &TextPrimitive) {
    let layout = pangocairo::functions::create_layout(context);
    let mut font = FontDescription::from_string(&format!("Sans {}px", text.font_size_px));
    if text.bold {
        font.set_weight(Weight::Bold);
    }
    layout.set_font_description(Some(&font));
    layout.set_text(&text.text);

    let width = f64::from(layout.pixel_size().0);
    let left = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - width / 2.0,
        TextHAlign::Right => text.x - width,
    };
    let ascent = f64::from(layout.baseline()) / f64::from(pango::SCALE);

    set_color(context, text.color);
    context.move_to(left, text.y - ascent);
    pangocairo::functions::show_layout(context, &layout);
}

fn fill_then_outline(context: &Context, fill: Color, stroke: Option<Stroke>) -> NumberLineResult<()> {
    set_color(context, fill);
    let Some(stroke) = stroke else {
        return context.fill().map_err(|err| backend_error("fill", err));
    };
    context
        .fill_preserve()
        .map_err(|err| backend_error("fill", err))?;
    set_color(context, stroke.color);
    context.set_line_width(stroke.width);
    context
        .stroke()
        .map_err(|err| backend_error("stroke outline", err))
}

fn set_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn backend_error(action: &str, err: cairo::Error) -> NumberLineError {
    NumberLineError::InvalidData(format!("cairo {action} failed: {err}"))
}
