//! Bounding box of a rotated rectangle.

use crate::angle::sin_cos_degrees;
use crate::geometry::Size;

/// Compute the size of the axis-aligned box that contains `size` rotated by
/// `angle_degrees` about its center.
///
/// ```text
/// new_w = |w*cos θ| + |h*sin θ|
/// new_h = |w*sin θ| + |h*cos θ|
/// ```
///
/// Mirroring is a reflection about the vertical axis and does not change the
/// box, so it is not a parameter here. The angle is reduced modulo 360 first
/// so full turns give identical results, and exact quarter turns use exact
/// sines and cosines so that `100x50` at 90° is exactly `50x100`.
///
/// A zero-width or zero-height source yields a zero-area box for every angle.
pub fn compute_rotated_bounds(size: Size, angle_degrees: f64) -> Size {
    if size.width == 0.0 || size.height == 0.0 {
        return Size::ZERO;
    }

    let (sin, cos) = sin_cos_degrees(angle_degrees);
    let (sin, cos) = (sin.abs(), cos.abs());

    Size::new(
        size.width * cos + size.height * sin,
        size.width * sin + size.height * cos,
    )
}
