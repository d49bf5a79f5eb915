//! Optional hooks layered on top of the engine.
//!
//! Keep extensions observational and out of core paths.

mod plugins;

pub use plugins::{NumberLinePlugin, PluginContext, PluginEvent};
