use crate::core::Viewport;
use crate::error::{NumberLineError, NumberLineResult};
use crate::render::Drawable;

/// Backend-agnostic scene for one draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub content: Drawable,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            content: Drawable::new(),
        }
    }

    #[must_use]
    pub fn with_drawable(mut self, drawable: Drawable) -> Self {
        self.content.extend(drawable);
        self
    }

    pub fn validate(&self) -> NumberLineResult<()> {
        if !self.viewport.is_valid() {
            return Err(NumberLineError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.content.validate()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
