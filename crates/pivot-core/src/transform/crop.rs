//! Image cropping.
//!
//! Crops use the surface's native sub-region copy: no canvas, no transform
//! and no resampling. The rectangle is in the buffer's own pixel
//! coordinates, origin top-left.

use tracing::{debug, span, warn, Level};

use crate::buffer::{Image, PixelBuffer};
use crate::error::TransformResult;
use crate::geometry::Rect;
use crate::surface::Surface;

/// Extract `rect` from `source`.
///
/// Fractional edges are expanded outward to whole pixels.
///
/// # Errors
///
/// Returns `TransformError::InvalidRegion` if `rect` is empty or does not
/// lie within the buffer.
pub fn crop<S: Surface>(
    surface: &S,
    source: &PixelBuffer,
    rect: Rect,
) -> TransformResult<PixelBuffer> {
    let span = span!(
        Level::INFO,
        "crop",
        width = source.width(),
        height = source.height()
    );
    let _guard = span.enter();

    let cropped = surface.crop(source, rect).inspect_err(|e| {
        warn!(error = %e, "could not crop image");
    })?;
    debug!(
        width = cropped.width(),
        height = cropped.height(),
        "cropped"
    );
    Ok(cropped)
}

/// Crop the stored pixels of `image`, keeping its orientation tag.
///
/// `rect` addresses stored pixels, not the displayed image.
pub fn crop_image<S: Surface>(surface: &S, image: &Image, rect: Rect) -> TransformResult<Image> {
    let buffer = crop(surface, &image.buffer, rect)?;
    Ok(Image::with_orientation(buffer, image.orientation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransformError;
    use crate::orientation::Orientation;
    use crate::surface::SkiaSurface;

    /// Create a test image where each pixel has a unique value based on position.
    fn test_image(width: u32, height: u32) -> PixelBuffer {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&[x as u8, y as u8, ((x + y) % 256) as u8, 255]);
            }
        }
        PixelBuffer::new(width, height, pixels).unwrap()
    }

    #[test]
    fn test_crop_exact_region() {
        let img = test_image(64, 48);
        let result = crop(
            &SkiaSurface::default(),
            &img,
            Rect::from_xywh(10.0, 10.0, 20.0, 20.0),
        )
        .unwrap();

        assert_eq!((result.width(), result.height()), (20, 20));
        for y in 0..20 {
            for x in 0..20 {
                assert_eq!(result.pixel(x, y), img.pixel(x + 10, y + 10));
            }
        }
    }

    #[test]
    fn test_crop_keeps_translucent_pixels() {
        let img = PixelBuffer::filled(4, 4, [201, 77, 13, 90]);
        let result = crop(
            &SkiaSurface::default(),
            &img,
            Rect::from_xywh(1.0, 1.0, 2.0, 2.0),
        )
        .unwrap();
        assert_eq!(result.pixel(0, 0), Some([201, 77, 13, 90]));

        // Color under zero alpha is stored data too
        let img = PixelBuffer::filled(4, 4, [255, 0, 0, 0]);
        let result = crop(
            &SkiaSurface::default(),
            &img,
            Rect::from_xywh(1.0, 1.0, 2.0, 2.0),
        )
        .unwrap();
        assert_eq!(result.pixel(1, 1), Some([255, 0, 0, 0]));
    }

    #[test]
    fn test_full_crop() {
        let img = test_image(30, 20);
        let result = crop(
            &SkiaSurface::default(),
            &img,
            Rect::from_xywh(0.0, 0.0, 30.0, 20.0),
        )
        .unwrap();
        assert_eq!(result, img);
    }

    #[test]
    fn test_crop_rectangular() {
        let img = test_image(200, 100);
        let result = crop(
            &SkiaSurface::default(),
            &img,
            Rect::from_xywh(0.0, 0.0, 50.0, 100.0),
        )
        .unwrap();
        assert_eq!((result.width(), result.height()), (50, 100));
    }

    #[test]
    fn test_crop_fractional_expands_outward() {
        let img = test_image(10, 10);
        let result = crop(
            &SkiaSurface::default(),
            &img,
            Rect::from_xywh(2.5, 3.2, 2.0, 2.0),
        )
        .unwrap();
        // 2.5..4.5 -> 2..5, 3.2..5.2 -> 3..6
        assert_eq!((result.width(), result.height()), (3, 3));
        assert_eq!(result.pixel(0, 0), img.pixel(2, 3));
    }

    #[test]
    fn test_crop_outside_bounds_fails() {
        let img = test_image(10, 10);
        for rect in [
            Rect::from_xywh(5.0, 5.0, 10.0, 2.0),
            Rect::from_xywh(-1.0, 0.0, 4.0, 4.0),
            Rect::from_xywh(0.0, 0.0, 11.0, 10.0),
            Rect::from_xywh(3.0, 3.0, 0.0, 2.0),
        ] {
            assert!(
                matches!(
                    crop(&SkiaSurface::default(), &img, rect),
                    Err(TransformError::InvalidRegion(_))
                ),
                "{:?}",
                rect
            );
        }
    }

    #[test]
    fn test_crop_image_keeps_orientation() {
        let image = Image::with_orientation(test_image(10, 10), Orientation::Left);
        let result = crop_image(
            &SkiaSurface::default(),
            &image,
            Rect::from_xywh(1.0, 1.0, 4.0, 4.0),
        )
        .unwrap();
        assert_eq!(result.orientation, Orientation::Left);
        assert_eq!(result.size().width, 4.0);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
