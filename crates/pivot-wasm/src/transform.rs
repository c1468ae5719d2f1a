//! WASM bindings for image transformation operations.
//!
//! Each binding validates its input image, builds a surface from the optional
//! render options and forwards to pivot-core. Failures surface as JS errors
//! carrying the core error message.

use crate::types::{surface_from_options, to_js_error, JsImage};
use pivot_core::transform::{self as core, compute_rotated_bounds};
use pivot_core::{Image, Rect, Size, Surface, TransformResult};
use wasm_bindgen::prelude::*;

/// Scale an image to fit inside `width` x `height`, centered.
///
/// The result is exactly `width` x `height`; unused margins are transparent
/// unless the options set a background.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const thumb = scale_to_fit(image, 256, 256, { filter: "Bicubic" });
/// ```
#[wasm_bindgen]
pub fn scale_to_fit(
    image: &JsImage,
    width: f64,
    height: f64,
    options: JsValue,
) -> Result<JsImage, JsError> {
    let surface = surface_from_options(options)?;
    scale_to_fit_with(&surface, image, Size::new(width, height)).map_err(to_js_error)
}

/// Scale an image to cover `width` x `height`, centered and clipped.
#[wasm_bindgen]
pub fn scale_to_fill(
    image: &JsImage,
    width: f64,
    height: f64,
    options: JsValue,
) -> Result<JsImage, JsError> {
    let surface = surface_from_options(options)?;
    scale_to_fill_with(&surface, image, Size::new(width, height)).map_err(to_js_error)
}

/// Rotate the stored pixels by `degrees` (clockwise), ignoring orientation.
///
/// The result is always tagged upright (orientation 1).
#[wasm_bindgen]
pub fn rotate_pixels(
    image: &JsImage,
    degrees: f64,
    mirror: bool,
    options: JsValue,
) -> Result<JsImage, JsError> {
    let surface = surface_from_options(options)?;
    rotate_pixels_with(&surface, image, degrees, mirror).map_err(to_js_error)
}

/// Rotate the stored pixels by `radians` (clockwise), ignoring orientation.
#[wasm_bindgen]
pub fn rotate_pixels_radians(
    image: &JsImage,
    radians: f64,
    mirror: bool,
    options: JsValue,
) -> Result<JsImage, JsError> {
    let surface = surface_from_options(options)?;
    rotate_pixels_with(&surface, image, pivot_core::radians_to_degrees(radians), mirror)
        .map_err(to_js_error)
}

/// Rotate relative to how the image is displayed.
///
/// The orientation tag is baked into the pixels together with the request
/// and the result is tagged upright.
///
/// # Example (TypeScript)
///
/// ```typescript
/// // Photo tagged orientation 6 (Right), turned another quarter clockwise
/// const turned = rotate_oriented(photo, 90, false, undefined);
/// console.log(turned.orientation); // 1
/// ```
#[wasm_bindgen]
pub fn rotate_oriented(
    image: &JsImage,
    degrees: f64,
    mirror: bool,
    options: JsValue,
) -> Result<JsImage, JsError> {
    let surface = surface_from_options(options)?;
    rotate_oriented_with(&surface, image, degrees, mirror).map_err(to_js_error)
}

/// Crop the stored pixels to the rectangle `(x, y, width, height)`.
///
/// The orientation tag is kept.
#[wasm_bindgen]
pub fn crop(
    image: &JsImage,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> Result<JsImage, JsError> {
    let surface = pivot_core::SkiaSurface::default();
    crop_with(&surface, image, Rect::from_xywh(x, y, width, height)).map_err(to_js_error)
}

/// Size `[width, height]` of the canvas a rotation by `degrees` needs.
#[wasm_bindgen]
pub fn rotated_bounds(width: f64, height: f64, degrees: f64) -> Vec<f64> {
    let bounds = compute_rotated_bounds(Size::new(width, height), degrees);
    vec![bounds.width, bounds.height]
}

fn scale_to_fit_with<S: Surface>(
    surface: &S,
    image: &JsImage,
    target: Size,
) -> TransformResult<JsImage> {
    let src = image.to_image()?;
    let buffer = core::scale_to_fit(surface, &src.buffer, target)?;
    Ok(JsImage::from_image(Image::with_orientation(buffer, src.orientation)))
}

fn scale_to_fill_with<S: Surface>(
    surface: &S,
    image: &JsImage,
    target: Size,
) -> TransformResult<JsImage> {
    let src = image.to_image()?;
    let buffer = core::scale_to_fill(surface, &src.buffer, target)?;
    Ok(JsImage::from_image(Image::with_orientation(buffer, src.orientation)))
}

fn rotate_pixels_with<S: Surface>(
    surface: &S,
    image: &JsImage,
    degrees: f64,
    mirror: bool,
) -> TransformResult<JsImage> {
    let src = image.to_image()?;
    core::rotate_image_pixels(surface, &src, degrees, mirror).map(JsImage::from_image)
}

fn rotate_oriented_with<S: Surface>(
    surface: &S,
    image: &JsImage,
    degrees: f64,
    mirror: bool,
) -> TransformResult<JsImage> {
    let src = image.to_image()?;
    core::rotate_oriented(surface, &src, degrees, mirror).map(JsImage::from_image)
}

fn crop_with<S: Surface>(surface: &S, image: &JsImage, rect: Rect) -> TransformResult<JsImage> {
    let src = image.to_image()?;
    core::crop_image(surface, &src, rect).map(JsImage::from_image)
}
