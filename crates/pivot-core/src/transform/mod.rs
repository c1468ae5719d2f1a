//! Image transformation operations: scaling, rotation and cropping.
//!
//! Every operation takes its input by reference and returns a new buffer.
//! Operations that composite pixels allocate a canvas from the given
//! [`Surface`](crate::surface::Surface) and release it before returning.
//!
//! # Coordinate System
//!
//! - Sizes, offsets and crop rectangles are in pixels, origin top-left
//! - Rotation angles are in degrees, positive = clockwise on screen
//! - Mirroring reflects about the vertical axis

mod bounds;
mod crop;
mod rotation;
mod scale;

pub use bounds::compute_rotated_bounds;
pub use crop::{crop, crop_image};
pub use rotation::{rotate_image_pixels, rotate_oriented, rotate_pixels, rotate_pixels_radians};
pub use scale::{
    plan_contain, plan_cover, plan_scale, scale_to_fill, scale_to_fit, ScalePlan, ScalePolicy,
};
