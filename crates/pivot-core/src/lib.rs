//! Pivot Core - deterministic raster image transforms
//!
//! This crate computes the geometry for proportional scaling, arbitrary-angle
//! rotation, orientation-aware rotation and cropping, and delegates the
//! actual compositing to a drawing [`Surface`].
//!
//! # Module Structure
//!
//! - `angle` - Degree/radian conversion
//! - `geometry` - `Size`, `Point` and `Rect`
//! - `orientation` - Orientation tags and their equivalent pixel transforms
//! - `buffer` - Owned RGBA pixel buffers and oriented images
//! - `surface` - The drawing-surface abstraction and its tiny-skia backend
//! - `transform` - Scaling, rotation and cropping
//! - `load` - Decoding source images and their EXIF orientation
//!
//! # Example
//!
//! ```ignore
//! use pivot_core::{load_image, rotate_oriented, SkiaSurface};
//!
//! let surface = SkiaSurface::default();
//! let image = load_image("photo.jpg")?;
//! // Quarter turn clockwise relative to how the photo is displayed
//! let upright = rotate_oriented(&surface, &image, 90.0, false)?;
//! assert_eq!(upright.orientation, pivot_core::Orientation::Up);
//! ```

pub mod angle;
pub mod buffer;
pub mod error;
pub mod geometry;
pub mod load;
pub mod orientation;
pub mod surface;
pub mod transform;

pub use angle::{degrees_to_radians, radians_to_degrees};
pub use buffer::{Image, PixelBuffer};
pub use error::{TransformError, TransformResult};
pub use geometry::{Point, Rect, Size};
pub use load::{decode_image, load_image, read_orientation, LoadError};
pub use orientation::{Orientation, OrientationTransform};
pub use surface::{Canvas, FilterType, RenderOptions, SkiaSurface, Surface};
pub use transform::{
    compute_rotated_bounds, crop, rotate_oriented, rotate_pixels, rotate_pixels_radians,
    scale_to_fill, scale_to_fit,
};
