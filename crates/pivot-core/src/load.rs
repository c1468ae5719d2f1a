//! Source image acquisition.
//!
//! Decodes an encoded file into a [`PixelBuffer`] exactly as stored and
//! reads its EXIF orientation into the [`Image`] tag. Orientation is *not*
//! applied here; that is what [`crate::transform::rotate_oriented`] is for.

use std::io::Cursor;
use std::path::Path;

use exif::{In, Reader, Tag};
use image::ImageReader;
use thiserror::Error;
use tracing::{debug, warn};

use crate::buffer::{Image, PixelBuffer};
use crate::orientation::Orientation;

/// Error types for loading source images.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The data is not in a recognized image format.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The file could not be read.
    #[error("I/O error: {0}")]
    Io(String),

    /// The image data is corrupted or incomplete.
    #[error("Corrupted or incomplete image: {0}")]
    Corrupted(String),
}

/// Read and decode the image file at `path`.
///
/// # Errors
///
/// - `LoadError::Io` if the file cannot be read
/// - see [`decode_image`] for decoding failures
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<Image, LoadError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| {
        warn!(path = %path.display(), error = %e, "could not read image file");
        LoadError::Io(e.to_string())
    })?;
    decode_image(&bytes)
}

/// Decode an encoded image, keeping its pixels as stored.
///
/// # Errors
///
/// - `LoadError::InvalidFormat` if the format cannot be recognized
/// - `LoadError::Corrupted` if decoding fails
pub fn decode_image(bytes: &[u8]) -> Result<Image, LoadError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| LoadError::Corrupted(e.to_string()))?;

    if reader.format().is_none() {
        return Err(LoadError::InvalidFormat);
    }

    let decoded = reader
        .decode()
        .map_err(|e| LoadError::Corrupted(e.to_string()))?;

    let buffer = PixelBuffer::from_rgba_image(decoded.into_rgba8());
    let orientation = read_orientation(bytes);
    debug!(
        width = buffer.width(),
        height = buffer.height(),
        ?orientation,
        "decoded source image"
    );

    Ok(Image::with_orientation(buffer, orientation))
}

/// Extract the EXIF orientation from encoded image bytes.
///
/// Returns `Orientation::Up` if there is no EXIF data or no orientation
/// field, and for values outside the canonical 1-8.
pub fn read_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);
    let Ok(exif) = Reader::new().read_from_container(&mut cursor) else {
        return Orientation::Up;
    };

    exif.get_field(Tag::Orientation, In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
        .map(Orientation::from)
        .unwrap_or_default()
}
