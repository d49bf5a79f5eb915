pub mod scale;
pub mod ticks;
pub mod types;

pub use scale::{AXIS_PADDING_PX, AxisScale};
pub use ticks::nice_ticks;
pub use types::{
    DOMAIN_MAX, DOMAIN_MIN, DomainValue, FALLBACK_VIEWPORT_HEIGHT, FALLBACK_VIEWPORT_WIDTH,
    Orientation, PointId, ViewMode, Viewport,
};
