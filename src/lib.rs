//! number-line-rs: interactive number line engine.
//!
//! Two labeled points (A, B) live on an integer axis `[-10, 10]`. The crate
//! maps that axis onto screen pixels, turns pointer drags into snapped domain
//! values and composes a themed, backend-agnostic scene for four view modes.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{NumberLineConfig, NumberLineEngine};
pub use error::{NumberLineError, NumberLineResult};
