//! Formatting utilities

use glam::{Vec3, Vec4};

/// Format an angle in degrees with one decimal
pub fn format_degrees(degrees: f32) -> String {
    format!("{degrees:.1}")
}

/// Format a point as `(x, y, z)` with three decimals
pub fn format_point(point: Vec3) -> String {
    format!("({:.3}, {:.3}, {:.3})", point.x, point.y, point.z)
}

/// Format the translation column of a transform
pub fn format_origin(w_axis: Vec4) -> String {
    format_point(w_axis.truncate())
}

/// Format a slider ratio as a percentage
pub fn format_ratio(ratio: f32) -> String {
    format!("{:.1}%", ratio * 100.0)
}
