//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core pivot types,
//! handling the conversion between Rust and JavaScript data representations.

use pivot_core::{Image, Orientation, PixelBuffer, RenderOptions, SkiaSurface, TransformResult};
use wasm_bindgen::prelude::*;

/// An image wrapper for JavaScript: RGBA pixels plus an orientation tag.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is made
/// to JavaScript memory as a `Uint8Array`.
///
/// The `free()` method can be called to explicitly release WASM memory, but this is
/// optional as wasm-bindgen's finalizer will handle cleanup automatically.
#[wasm_bindgen]
pub struct JsImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    orientation: u8,
}

#[wasm_bindgen]
impl JsImage {
    /// Create a new JsImage from dimensions, pixel data and orientation.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
    /// * `orientation` - EXIF orientation value (1-8); anything else means upright
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>, orientation: u8) -> JsImage {
        JsImage {
            width,
            height,
            pixels,
            orientation,
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the EXIF orientation value (1 = upright)
    #[wasm_bindgen(getter)]
    pub fn orientation(&self) -> u8 {
        self.orientation
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGBA pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsImage {
    /// Create a JsImage from a core Image.
    pub(crate) fn from_image(image: Image) -> Self {
        let orientation = image.orientation.exif_value() as u8;
        let buffer = image.buffer;
        Self {
            width: buffer.width(),
            height: buffer.height(),
            pixels: buffer.into_raw(),
            orientation,
        }
    }

    /// Convert to a core Image, validating the pixel length.
    ///
    /// Note: This clones the pixel data.
    pub(crate) fn to_image(&self) -> TransformResult<Image> {
        let buffer = PixelBuffer::new(self.width, self.height, self.pixels.clone())?;
        Ok(Image::with_orientation(
            buffer,
            Orientation::from(self.orientation as u32),
        ))
    }
}

/// Build a surface from a JS options object.
///
/// `undefined` and `null` select the defaults. Otherwise the object follows
/// `RenderOptions`:
/// `{ filter: "Nearest" | "Bilinear" | "Bicubic", background: [r, g, b, a] | null }`.
pub(crate) fn surface_from_options(options: JsValue) -> Result<SkiaSurface, JsError> {
    if options.is_undefined() || options.is_null() {
        return Ok(SkiaSurface::default());
    }
    let options: RenderOptions = serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsError::new(&format!("invalid render options: {}", e)))?;
    Ok(SkiaSurface::new(options))
}

/// Convert any displayable error into a JS error.
pub(crate) fn to_js_error<E: std::fmt::Display>(err: E) -> JsError {
    JsError::new(&err.to_string())
}
