//! WASM bindings for source image decoding.

use crate::types::{to_js_error, JsImage};
use pivot_core::load::{decode_image as core_decode, read_orientation as core_orientation};
use wasm_bindgen::prelude::*;

/// Decode a JPEG or PNG file without applying its orientation.
///
/// The EXIF orientation is returned on the image's `orientation` getter;
/// pass the image to `rotate_oriented` to bake it in.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const image = decode_image(bytes);
/// const upright = rotate_oriented(image, 0, false, undefined);
/// ```
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsImage, JsError> {
    core_decode(bytes).map(JsImage::from_image).map_err(to_js_error)
}

/// Read only the EXIF orientation value (1-8) of an encoded image.
///
/// Returns 1 when there is no usable orientation.
#[wasm_bindgen]
pub fn read_orientation(bytes: &[u8]) -> u8 {
    core_orientation(bytes).exif_value() as u8
}
