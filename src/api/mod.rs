mod app_state;
mod axis_scene_builder;
mod distance_annotation_builder;
mod engine;
mod engine_config;
mod engine_init;
mod engine_snapshot;
mod glyph;
mod interaction_controller;
mod json_contract;
mod label_format;
mod plugin_dispatch;
mod plugin_registry;
mod readout;
mod scene_composer;
mod scene_style;
mod snapshot_controller;
mod state_controller;
mod theme;
mod viewport_controller;
mod viewport_tracker;

pub use app_state::{
    ApplicationState, DEFAULT_POINT_A, DEFAULT_POINT_B, DisplayFlag, DisplayFlags,
};
pub use axis_scene_builder::AxisTick;
pub use distance_annotation_builder::{DISTANCE_VISIBILITY_THRESHOLD_PX, annotation_visible};
pub use engine::NumberLineEngine;
pub use engine_config::NumberLineConfig;
pub use engine_snapshot::EngineSnapshot;
pub use glyph::{
    GlyphContext, GlyphRenderer, GlyphTable, general_badge, house_home, house_runner, ocean_bird,
    ocean_fish, thermometer_tag,
};
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};
pub use label_format::{format_distance_label, format_tick_label};
pub use readout::DistanceReadout;
pub use scene_composer::{
    ComposedScene, DEFAULT_TICK_COUNT, PointPlacement, SceneComposer, SceneGeometry, SceneInput,
    glyph_anchor,
};
pub use scene_style::{GLYPH_HIT_RADIUS_PX, POINT_A_COLOR, POINT_B_COLOR, point_color};
pub use theme::{
    ThemeContext, ThemeRenderer, ThemeTable, general_background, house_background,
    ocean_background, thermometer_background,
};
pub use viewport_tracker::{ContainerMeasure, DEFERRED_MEASURE_DELAY_SECONDS, ViewportTracker};
