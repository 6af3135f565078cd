//! Shared utility functions for chart calculations.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Wrap a longitude that may overshoot the circle by at most one turn.
///
/// Only a single subtraction is applied; values >= 720 stay out of range.
pub fn wrap_once(deg: f64) -> f64 {
    if deg < 360.0 { deg } else { deg - 360.0 }
}
