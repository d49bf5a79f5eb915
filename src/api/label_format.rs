use crate::core::{Orientation, ViewMode};

/// Formats a tick value: integers without decimals, and a degree suffix on
/// vertical axes where the scale reads as a temperature/depth gauge.
#[must_use]
pub fn format_tick_label(value: f64, orientation: Orientation) -> String {
    let number = format_number(value);
    match orientation {
        Orientation::Horizontal => number,
        Orientation::Vertical => format!("{number}°"),
    }
}

/// Distance label text; House mode reads distances in metres.
#[must_use]
pub fn format_distance_label(distance: u32, mode: ViewMode, orientation: Orientation) -> String {
    if mode == ViewMode::House && orientation.is_horizontal() {
        format!("{distance} m")
    } else {
        distance.to_string()
    }
}

fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Avoid "-0".
        return "0".to_owned();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    format!("{value}")
}
