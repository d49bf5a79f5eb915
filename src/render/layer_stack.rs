use serde::{Deserialize, Serialize};

/// Draw layers of a number line scene, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    /// Theme artwork.
    Background,
    /// Axis line, tick marks and tick labels.
    Axis,
    /// Distance bracket and label.
    Annotation,
    /// Point glyphs with their value chips.
    Points,
}

impl CanvasLayerKind {
    /// Canonical paint order.
    pub const CANONICAL: [Self; 4] = [Self::Background, Self::Axis, Self::Annotation, Self::Points];
}

#[cfg(test)]
mod tests {
    use super::CanvasLayerKind;

    #[test]
    fn points_paint_above_annotation() {
        let order = CanvasLayerKind::CANONICAL;
        let annotation = order.iter().position(|k| *k == CanvasLayerKind::Annotation);
        let points = order.iter().position(|k| *k == CanvasLayerKind::Points);
        assert!(annotation < points);
        assert_eq!(order[0], CanvasLayerKind::Background);
    }
}
