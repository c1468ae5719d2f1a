//! Pivot WASM - WebAssembly bindings for Pivot
//!
//! This crate exposes the pivot-core transforms to JavaScript/TypeScript
//! applications. Every transform runs on the tiny-skia surface; options are
//! passed as a plain object (or `undefined` for the defaults).
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data
//! - `load` - Decoding encoded images and reading their orientation
//! - `transform` - Scaling, rotation and cropping bindings
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, rotate_oriented, scale_to_fit } from '@pivot/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! const upright = rotate_oriented(image, 0, false, undefined);
//! const thumb = scale_to_fit(upright, 256, 256, { filter: "Bilinear" });
//! ```

use wasm_bindgen::prelude::*;

mod load;
mod transform;
mod types;

pub use load::{decode_image, read_orientation};
pub use transform::{
    crop, rotate_oriented, rotate_pixels, rotate_pixels_radians, rotated_bounds, scale_to_fill,
    scale_to_fit,
};
pub use types::JsImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}


/// WASM-specific tests that go through `JsValue`.
///
/// These call the `#[wasm_bindgen]` entry points directly and can only run
/// on wasm32 targets. Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use pivot_core::{FilterType, RenderOptions};
    use std::io::Cursor;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn encode_png(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([9, 8, 7, 255]));
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    fn options(options: &RenderOptions) -> JsValue {
        serde_wasm_bindgen::to_value(options).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_decode_invalid() {
        assert!(decode_image(&[0, 1, 2, 3]).is_err());
    }

    #[wasm_bindgen_test]
    fn test_decode_then_rotate_oriented() {
        let image = decode_image(&encode_png(6, 4)).unwrap();
        let rotated = rotate_oriented(&image, 90.0, false, JsValue::UNDEFINED).unwrap();
        assert_eq!((rotated.width(), rotated.height()), (4, 6));
        assert_eq!(rotated.orientation(), 1);
    }

    #[wasm_bindgen_test]
    fn test_options_object_applies_background() {
        let image = JsImage::new(4, 2, vec![255; 32], 1);
        let opts = options(
            &RenderOptions::new()
                .with_filter(FilterType::Nearest)
                .with_background([0, 0, 255, 255]),
        );
        let fitted = scale_to_fit(&image, 4.0, 4.0, opts).unwrap();
        assert_eq!((fitted.width(), fitted.height()), (4, 4));
        // Letterbox row above the content keeps the background
        assert_eq!(&fitted.pixels()[..4], &[0, 0, 255, 255]);
    }

    #[wasm_bindgen_test]
    fn test_null_options_use_defaults() {
        let image = JsImage::new(2, 2, vec![255; 16], 1);
        assert!(rotate_pixels(&image, 180.0, true, JsValue::NULL).is_ok());
    }

    #[wasm_bindgen_test]
    fn test_invalid_options_rejected() {
        let image = JsImage::new(2, 2, vec![255; 16], 1);
        assert!(rotate_pixels(&image, 90.0, false, JsValue::from_str("bicubic")).is_err());
    }

    #[wasm_bindgen_test]
    fn test_crop_binding() {
        let image = JsImage::new(4, 4, vec![200; 64], 3);
        let cropped = crop(&image, 1.0, 1.0, 2.0, 2.0).unwrap();
        assert_eq!((cropped.width(), cropped.height()), (2, 2));
        assert_eq!(cropped.orientation(), 3);
        assert!(crop(&image, 3.0, 3.0, 2.0, 2.0).is_err());
    }
}
