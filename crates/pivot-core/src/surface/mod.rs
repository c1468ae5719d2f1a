//! Off-screen drawing surfaces.
//!
//! Transforms never touch pixels themselves. They compute sizes, offsets and
//! affine parameters, then hand a [`Canvas`] the draw calls. The canvas is an
//! explicit value: it is obtained from [`Surface::begin`], threaded through
//! every draw, read back with [`Canvas::snapshot`] and released when dropped,
//! so no operation depends on an ambient "current context" and separate
//! threads simply use separate canvases.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner of the canvas, y grows downward
//! - Positive rotation angles turn content clockwise on screen
//! - `translate`/`rotate`/`scale` are concatenated so that the most recent
//!   call applies first to drawn content

mod skia;

use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;
use crate::error::TransformResult;
use crate::geometry::{Rect, Size};

pub use skia::{SkiaCanvas, SkiaSurface};

/// Sampling filter used when a buffer is drawn under a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// Nearest neighbor sampling (fastest, exact for axis-aligned copies).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    #[default]
    Bilinear,
    /// Bicubic interpolation (slower, highest quality).
    Bicubic,
}

impl FilterType {
    /// Convert to the tiny-skia filter quality.
    pub fn to_filter_quality(self) -> tiny_skia::FilterQuality {
        match self {
            FilterType::Nearest => tiny_skia::FilterQuality::Nearest,
            FilterType::Bilinear => tiny_skia::FilterQuality::Bilinear,
            FilterType::Bicubic => tiny_skia::FilterQuality::Bicubic,
        }
    }
}

/// Rendering configuration for a surface.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Filter used when compositing.
    pub filter: FilterType,
    /// RGBA fill for new canvases. `None` leaves them fully transparent.
    pub background: Option<[u8; 4]>,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_background(mut self, rgba: [u8; 4]) -> Self {
        self.background = Some(rgba);
        self
    }
}

/// An off-screen canvas with an active affine transform.
pub trait Canvas {
    /// Size of the canvas in pixels.
    fn size(&self) -> Size;

    /// Move the origin by `(tx, ty)`.
    fn translate(&mut self, tx: f64, ty: f64);

    /// Rotate the coordinate space by `radians` (clockwise on screen).
    fn rotate(&mut self, radians: f64);

    /// Scale the coordinate space. Negative factors reflect.
    fn scale(&mut self, sx: f64, sy: f64);

    /// Draw `buffer` upright, stretched to fill `rect` in the current space.
    ///
    /// Row 0 of the buffer lands at `rect.min_y()`.
    fn draw(&mut self, buffer: &PixelBuffer, rect: Rect) -> TransformResult<()>;

    /// Draw `buffer` as a raw bitmap in a bottom-left image space.
    ///
    /// Row 0 of the buffer lands at `rect.max_y()`, so the image appears
    /// vertically flipped unless the current space has already been flipped
    /// with `scale(_, -1.0)`.
    fn draw_bitmap(&mut self, buffer: &PixelBuffer, rect: Rect) -> TransformResult<()>;

    /// Read back the composited pixels as a new buffer.
    fn snapshot(&self) -> TransformResult<PixelBuffer>;
}

/// Provider of canvases and native buffer operations.
pub trait Surface {
    type Canvas: Canvas;

    /// Allocate a canvas of `size` (rounded up to whole pixels).
    ///
    /// # Errors
    ///
    /// `TransformError::AllocationFailure` if the canvas cannot be created,
    /// including when either dimension has no whole pixels.
    fn begin(&self, size: Size) -> TransformResult<Self::Canvas>;

    /// Copy out the sub-region `rect` of `buffer` without resampling.
    ///
    /// # Errors
    ///
    /// `TransformError::InvalidRegion` if `rect` is empty or not inside the
    /// buffer.
    fn crop(&self, buffer: &PixelBuffer, rect: Rect) -> TransformResult<PixelBuffer>;
}

/// Begin a canvas, run `draw` on it and read back the result.
///
/// The canvas is dropped (and so released) on every path out of this
/// function, including when `draw` fails before anything is drawn.
pub fn render<S, F>(surface: &S, size: Size, draw: F) -> TransformResult<PixelBuffer>
where
    S: Surface,
    F: FnOnce(&mut S::Canvas) -> TransformResult<()>,
{
    let mut canvas = surface.begin(size)?;
    draw(&mut canvas)?;
    canvas.snapshot()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransformError;

    #[test]
    fn test_filter_type_conversion() {
        assert!(matches!(
            FilterType::Nearest.to_filter_quality(),
            tiny_skia::FilterQuality::Nearest
        ));
        assert!(matches!(
            FilterType::Bilinear.to_filter_quality(),
            tiny_skia::FilterQuality::Bilinear
        ));
        assert!(matches!(
            FilterType::Bicubic.to_filter_quality(),
            tiny_skia::FilterQuality::Bicubic
        ));
    }

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_filter(FilterType::Nearest)
            .with_background([0, 0, 0, 255]);
        assert_eq!(options.filter, FilterType::Nearest);
        assert_eq!(options.background, Some([0, 0, 0, 255]));
        assert_eq!(RenderOptions::default().background, None);
    }

    #[test]
    fn test_render_reads_back_canvas() {
        let surface = SkiaSurface::new(RenderOptions::new().with_background([10, 20, 30, 255]));
        let result = render(&surface, Size::new(3.0, 2.0), |_| Ok(())).unwrap();
        assert_eq!((result.width(), result.height()), (3, 2));
        assert_eq!(result.pixel(2, 1), Some([10, 20, 30, 255]));
    }

    #[test]
    fn test_render_propagates_draw_failure() {
        let surface = SkiaSurface::default();
        let result = render(&surface, Size::new(3.0, 2.0), |_| {
            Err(TransformError::DegenerateInput("nothing to draw".to_string()))
        });
        assert!(matches!(result, Err(TransformError::DegenerateInput(_))));
    }

    #[test]
    fn test_render_zero_canvas_fails() {
        let surface = SkiaSurface::default();
        let result = render(&surface, Size::new(0.0, 10.0), |_| Ok(()));
        assert!(matches!(result, Err(TransformError::AllocationFailure(_))));
    }
}
