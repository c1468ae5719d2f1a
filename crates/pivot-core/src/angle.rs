//! Degree/radian conversion.
//!
//! Public entry points take degrees; drawing contexts take radians. These two
//! helpers are the only place the conversion happens, so every caller agrees
//! on the constant.

use std::f64::consts::PI;

/// Convert an angle in degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Convert an angle in radians to degrees.
#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Sine and cosine of an angle in degrees.
///
/// The angle is reduced modulo 360 first, and quarter turns return exact
/// values so axis-aligned rotations stay on the pixel grid.
pub(crate) fn sin_cos_degrees(angle_degrees: f64) -> (f64, f64) {
    let normalized = angle_degrees.rem_euclid(360.0);

    if normalized == 0.0 {
        (0.0, 1.0)
    } else if normalized == 90.0 {
        (1.0, 0.0)
    } else if normalized == 180.0 {
        (0.0, -1.0)
    } else if normalized == 270.0 {
        (-1.0, 0.0)
    } else {
        degrees_to_radians(normalized).sin_cos()
    }
}

/// Snap `degrees` to the nearest quarter turn when a unit conversion has
/// only introduced rounding noise.
pub(crate) fn snap_quarter_turn(degrees: f64) -> f64 {
    let quarter = (degrees / 90.0).round() * 90.0;
    if (degrees - quarter).abs() < 1e-9 {
        quarter
    } else {
        degrees
    }
}
