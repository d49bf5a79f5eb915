use serde::{Deserialize, Serialize};

use crate::error::NumberLineResult;

use super::{CirclePrimitive, LinePrimitive, PolygonPrimitive, RectPrimitive, TextPrimitive};

/// Bag of primitives drawn in declaration order: rects, polygons, circles,
/// lines, then texts.
///
/// Glyph and theme collaborators return a `Drawable`; glyphs are built around
/// a local origin and moved into place with [`Drawable::translated`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Drawable {
    pub rects: Vec<RectPrimitive>,
    pub polygons: Vec<PolygonPrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl Drawable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    #[must_use]
    pub fn with_polygon(mut self, polygon: PolygonPrimitive) -> Self {
        self.polygons.push(polygon);
        self
    }

    #[must_use]
    pub fn with_circle(mut self, circle: CirclePrimitive) -> Self {
        self.circles.push(circle);
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn extend(&mut self, other: Drawable) {
        self.rects.extend(other.rects);
        self.polygons.extend(other.polygons);
        self.circles.extend(other.circles);
        self.lines.extend(other.lines);
        self.texts.extend(other.texts);
    }

    #[must_use]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self {
            rects: self
                .rects
                .into_iter()
                .map(|rect| rect.translated(dx, dy))
                .collect(),
            polygons: self
                .polygons
                .into_iter()
                .map(|polygon| polygon.translated(dx, dy))
                .collect(),
            circles: self
                .circles
                .into_iter()
                .map(|circle| circle.translated(dx, dy))
                .collect(),
            lines: self
                .lines
                .into_iter()
                .map(|line| line.translated(dx, dy))
                .collect(),
            texts: self
                .texts
                .into_iter()
                .map(|text| text.translated(dx, dy))
                .collect(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
            && self.polygons.is_empty()
            && self.circles.is_empty()
            && self.lines.is_empty()
            && self.texts.is_empty()
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.rects.len()
            + self.polygons.len()
            + self.circles.len()
            + self.lines.len()
            + self.texts.len()
    }

    pub fn validate(&self) -> NumberLineResult<()> {
        for rect in &self.rects {
            rect.validate()?;
        }
        for polygon in &self.polygons {
            polygon.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }
}
