//! Arbitrary-angle rotation of pixel data.
//!
//! Two entry points with deliberately different meanings:
//!
//! - [`rotate_pixels`] turns the stored pixels and knows nothing about
//!   orientation metadata.
//! - [`rotate_oriented`] first bakes the image's [`Orientation`] into the
//!   request, so the rotation is relative to how the image is *displayed*.
//!
//! Both produce upright pixels. Rotating an oriented image with
//! [`rotate_image_pixels`] still resets its tag to [`Orientation::Up`] while
//! ignoring what the tag said, which is rarely what a caller wants.
//!
//! # Compositing
//!
//! The output canvas is the rotated bounding box. The context is prepared as
//! translate to the canvas center → rotate → scale `(±1, -1)`, and the source
//! is then drawn as a bottom-up bitmap centered on the origin. The `-1` on y
//! cancels the bitmap's bottom-left image space; the x factor is `-1` only
//! when mirroring. Rotation and reflection do not commute, so the order is
//! fixed.

use tracing::{debug, span, warn, Level};

use super::bounds::compute_rotated_bounds;
use crate::angle::{degrees_to_radians, radians_to_degrees};
use crate::buffer::{Image, PixelBuffer};
use crate::error::{TransformError, TransformResult};
use crate::geometry::Rect;
use crate::orientation::{Orientation, OrientationTransform};
use crate::surface::{render, Canvas, Surface};

/// Rotate the pixels of `source` by `degrees` (clockwise), optionally
/// mirroring them about the vertical axis.
///
/// The canvas grows to the rotated bounding box so nothing is clipped; the
/// uncovered corners are left as the surface's background.
///
/// # Errors
///
/// - `TransformError::DegenerateInput` for an empty source
/// - `TransformError::AllocationFailure` if the surface cannot provide the
///   canvas
pub fn rotate_pixels<S: Surface>(
    surface: &S,
    source: &PixelBuffer,
    degrees: f64,
    mirror: bool,
) -> TransformResult<PixelBuffer> {
    let span = span!(Level::INFO, "rotate_pixels", degrees, mirror);
    let _guard = span.enter();

    if source.is_empty() {
        warn!(
            width = source.width(),
            height = source.height(),
            "cannot rotate an empty buffer"
        );
        return Err(TransformError::DegenerateInput(format!(
            "cannot rotate a {}x{} buffer",
            source.width(),
            source.height()
        )));
    }

    let size = source.size();
    let rotated_size = compute_rotated_bounds(size, degrees);
    debug!(
        width = rotated_size.width,
        height = rotated_size.height,
        "rotated bounds"
    );

    render(surface, rotated_size, |canvas| {
        let center = canvas.size();
        canvas.translate(center.width / 2.0, center.height / 2.0);
        canvas.rotate(degrees_to_radians(degrees));
        canvas.scale(if mirror { -1.0 } else { 1.0 }, -1.0);
        canvas.draw_bitmap(
            source,
            Rect::from_xywh(-size.width / 2.0, -size.height / 2.0, size.width, size.height),
        )
    })
    .inspect_err(|e| {
        warn!(error = %e, "could not rotate image");
    })
}

/// Same as [`rotate_pixels`] with the angle given in radians.
pub fn rotate_pixels_radians<S: Surface>(
    surface: &S,
    source: &PixelBuffer,
    radians: f64,
    mirror: bool,
) -> TransformResult<PixelBuffer> {
    rotate_pixels(surface, source, radians_to_degrees(radians), mirror)
}

/// Rotate the stored pixels of `image`, ignoring its orientation.
///
/// The result is tagged [`Orientation::Up`] whatever the input tag was, so
/// an image tagged `Right` and rotated by 90° here ends up a quarter turn
/// away from what [`rotate_oriented`] would produce.
pub fn rotate_image_pixels<S: Surface>(
    surface: &S,
    image: &Image,
    degrees: f64,
    mirror: bool,
) -> TransformResult<Image> {
    rotate_pixels(surface, &image.buffer, degrees, mirror).map(Image::new)
}

/// Rotate `image` relative to how it is displayed.
///
/// The image's orientation is resolved to its equivalent rotation and
/// mirror, the request is applied on top (angles add, mirrors cancel), and
/// the pixels are rotated once with the composite. The tag is then redundant
/// and the result is tagged [`Orientation::Up`].
///
/// # Errors
///
/// Propagates any failure from [`rotate_pixels`] unchanged.
pub fn rotate_oriented<S: Surface>(
    surface: &S,
    image: &Image,
    degrees: f64,
    mirror: bool,
) -> TransformResult<Image> {
    let span = span!(
        Level::INFO,
        "rotate_oriented",
        orientation = ?image.orientation,
        degrees,
        mirror
    );
    let _guard = span.enter();

    let composite = image
        .orientation
        .resolve()
        .then(OrientationTransform::new(degrees, mirror));
    debug!(
        degrees = composite.degrees,
        mirror = composite.mirror,
        "composite transform"
    );

    let buffer = rotate_pixels(surface, &image.buffer, composite.degrees, composite.mirror)?;
    Ok(Image::with_orientation(buffer, Orientation::Up))
}
