//! Pixel buffers and oriented images.

use crate::error::{TransformError, TransformResult};
use crate::geometry::Size;
use crate::orientation::Orientation;

/// Bytes per RGBA8 pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// An owned grid of straight-alpha RGBA8 pixels.
///
/// Pixels are stored row-major, 4 bytes per pixel. A buffer never changes
/// after construction; every transform produces a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer from dimensions and RGBA pixel data.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::DegenerateInput` if `pixels.len()` is not
    /// `width * height * 4`.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> TransformResult<Self> {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if pixels.len() != expected {
            return Err(TransformError::DegenerateInput(format!(
                "{}x{} buffer needs {} bytes, got {}",
                width,
                height,
                expected,
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a buffer filled with a single RGBA color.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let count = width as usize * height as usize;
        let mut pixels = Vec::with_capacity(count * BYTES_PER_PIXEL);
        for _ in 0..count {
            pixels.extend_from_slice(&rgba);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a PixelBuffer from an image::RgbaImage.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Convert to an image::RgbaImage for further processing.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::from_pixels(self.width, self.height)
    }

    /// Raw RGBA bytes, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    /// RGBA value at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let px = &self.pixels[idx..idx + BYTES_PER_PIXEL];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Check if this is an empty image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A pixel buffer together with its display orientation.
///
/// This is the "logical" image: what a viewer shows is `buffer` with
/// `orientation` applied. Only [`crate::transform::rotate_oriented`] reads
/// the tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub buffer: PixelBuffer,
    pub orientation: Orientation,
}

impl Image {
    /// Wrap a buffer stored upright.
    pub fn new(buffer: PixelBuffer) -> Self {
        Self::with_orientation(buffer, Orientation::Up)
    }

    pub fn with_orientation(buffer: PixelBuffer, orientation: Orientation) -> Self {
        Self {
            buffer,
            orientation,
        }
    }

    /// Size of the stored pixels.
    pub fn size(&self) -> Size {
        self.buffer.size()
    }

    /// Size as displayed once the orientation is applied.
    pub fn oriented_size(&self) -> Size {
        let size = self.size();
        if self.orientation.swaps_dimensions() {
            Size::new(size.height, size.width)
        } else {
            size
        }
    }
}

impl From<PixelBuffer> for Image {
    fn from(buffer: PixelBuffer) -> Self {
        Image::new(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_creation() {
        let buffer = PixelBuffer::new(100, 50, vec![0u8; 100 * 50 * 4]).unwrap();
        assert_eq!(buffer.width(), 100);
        assert_eq!(buffer.height(), 50);
        assert_eq!(buffer.size(), Size::new(100.0, 50.0));
        assert!(!buffer.is_empty());
    }

    #[test]
    fn test_buffer_length_mismatch() {
        let result = PixelBuffer::new(10, 10, vec![0u8; 10 * 10 * 3]);
        assert!(matches!(result, Err(TransformError::DegenerateInput(_))));
    }

    #[test]
    fn test_buffer_empty() {
        let buffer = PixelBuffer::new(0, 10, vec![]).unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_pixel_access() {
        let pixels = vec![
            255, 0, 0, 255, // Red
            0, 255, 0, 255, // Green
            0, 0, 255, 255, // Blue
            255, 255, 0, 255, // Yellow
        ];
        let buffer = PixelBuffer::new(2, 2, pixels).unwrap();
        assert_eq!(buffer.pixel(0, 0), Some([255, 0, 0, 255]));
        assert_eq!(buffer.pixel(1, 0), Some([0, 255, 0, 255]));
        assert_eq!(buffer.pixel(0, 1), Some([0, 0, 255, 255]));
        assert_eq!(buffer.pixel(1, 1), Some([255, 255, 0, 255]));
        assert_eq!(buffer.pixel(2, 0), None);
        assert_eq!(buffer.pixel(0, 2), None);
    }

    #[test]
    fn test_filled() {
        let buffer = PixelBuffer::filled(3, 2, [1, 2, 3, 4]);
        assert_eq!(buffer.pixels().len(), 3 * 2 * 4);
        assert_eq!(buffer.pixel(2, 1), Some([1, 2, 3, 4]));
    }

    #[test]
    fn test_rgba_image_conversion() {
        let buffer = PixelBuffer::filled(4, 3, [9, 8, 7, 255]);
        let img = buffer.to_rgba_image().unwrap();
        assert_eq!(img.dimensions(), (4, 3));
        assert_eq!(img.get_pixel(3, 2).0, [9, 8, 7, 255]);

        let back = PixelBuffer::from_rgba_image(img);
        assert_eq!(back, buffer);
    }

    #[test]
    fn test_image_defaults_to_up() {
        let image = Image::from(PixelBuffer::filled(2, 1, [0; 4]));
        assert_eq!(image.orientation, Orientation::Up);
    }

    #[test]
    fn test_oriented_size() {
        let buffer = PixelBuffer::filled(6, 4, [0; 4]);

        let image = Image::with_orientation(buffer.clone(), Orientation::Down);
        assert_eq!(image.oriented_size(), Size::new(6.0, 4.0));

        let image = Image::with_orientation(buffer, Orientation::Right);
        assert_eq!(image.size(), Size::new(6.0, 4.0));
        assert_eq!(image.oriented_size(), Size::new(4.0, 6.0));
    }
}
