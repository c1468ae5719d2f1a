//! Software surface backed by tiny-skia pixmaps.
//!
//! tiny-skia stores premultiplied RGBA, so buffers are premultiplied on the
//! way in and demultiplied on read-back. Opaque pixels survive the round trip
//! unchanged. Crops never touch a pixmap and copy the stored bytes as is.

use tiny_skia::{Color, ColorU8, IntSize, Pixmap, PixmapPaint, Transform};
use tracing::{trace, warn};

use super::{Canvas, RenderOptions, Surface};
use crate::angle::{radians_to_degrees, sin_cos_degrees, snap_quarter_turn};
use crate::buffer::{PixelBuffer, BYTES_PER_PIXEL};
use crate::error::{TransformError, TransformResult};
use crate::geometry::{Rect, Size};

/// Surface that rasterizes on the CPU with tiny-skia.
#[derive(Debug, Clone, Default)]
pub struct SkiaSurface {
    options: RenderOptions,
}

impl SkiaSurface {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }
}

impl Surface for SkiaSurface {
    type Canvas = SkiaCanvas;

    fn begin(&self, size: Size) -> TransformResult<SkiaCanvas> {
        let (width, height) = size.pixel_dimensions();
        let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
            warn!(width, height, "could not allocate canvas");
            TransformError::AllocationFailure(format!(
                "cannot allocate {}x{} canvas",
                width, height
            ))
        })?;

        if let Some([r, g, b, a]) = self.options.background {
            pixmap.fill(Color::from_rgba8(r, g, b, a));
        }

        trace!(width, height, "canvas begun");
        Ok(SkiaCanvas {
            pixmap,
            transform: Transform::identity(),
            paint: PixmapPaint {
                quality: self.options.filter.to_filter_quality(),
                ..PixmapPaint::default()
            },
        })
    }

    fn crop(&self, buffer: &PixelBuffer, rect: Rect) -> TransformResult<PixelBuffer> {
        if rect.size.is_empty() || !rect.is_within(buffer.size()) {
            warn!(
                ?rect,
                width = buffer.width(),
                height = buffer.height(),
                "crop outside buffer"
            );
            return Err(TransformError::InvalidRegion(format!(
                "{:?} is not inside a {}x{} buffer",
                rect,
                buffer.width(),
                buffer.height()
            )));
        }

        // Expand to whole pixels the way an integral rect would.
        let left = rect.min_x().floor() as usize;
        let top = rect.min_y().floor() as usize;
        let right = rect.max_x().ceil() as usize;
        let bottom = rect.max_y().ceil() as usize;

        // Rows are copied from the straight-alpha bytes. A pixmap round trip
        // would premultiply and lose color under partial alpha.
        let stride = buffer.width() as usize * BYTES_PER_PIXEL;
        let row_len = (right - left) * BYTES_PER_PIXEL;
        let mut pixels = Vec::with_capacity(row_len * (bottom - top));
        for row in buffer.pixels().chunks_exact(stride).skip(top).take(bottom - top) {
            pixels.extend_from_slice(&row[left * BYTES_PER_PIXEL..right * BYTES_PER_PIXEL]);
        }

        PixelBuffer::new((right - left) as u32, (bottom - top) as u32, pixels)
    }
}

/// A tiny-skia pixmap plus the transform applied to subsequent draws.
///
/// Dropping the canvas releases the pixmap.
#[derive(Debug)]
pub struct SkiaCanvas {
    pixmap: Pixmap,
    transform: Transform,
    paint: PixmapPaint,
}

impl SkiaCanvas {
    fn draw_mapped(
        &mut self,
        buffer: &PixelBuffer,
        rect: Rect,
        bottom_up: bool,
    ) -> TransformResult<()> {
        if buffer.is_empty() {
            return Err(TransformError::DegenerateInput(
                "cannot draw an empty buffer".to_string(),
            ));
        }

        let source = to_pixmap(buffer)?;
        let sx = rect.size.width / buffer.width() as f64;
        let sy = rect.size.height / buffer.height() as f64;

        // Map the source pixmap's own pixel grid onto `rect`.
        let placement = if bottom_up {
            self.transform
                .pre_translate(rect.min_x() as f32, rect.max_y() as f32)
                .pre_scale(sx as f32, -sy as f32)
        } else {
            self.transform
                .pre_translate(rect.min_x() as f32, rect.min_y() as f32)
                .pre_scale(sx as f32, sy as f32)
        };

        self.pixmap
            .draw_pixmap(0, 0, source.as_ref(), &self.paint, placement, None);
        Ok(())
    }
}

impl Canvas for SkiaCanvas {
    fn size(&self) -> Size {
        Size::from_pixels(self.pixmap.width(), self.pixmap.height())
    }

    fn translate(&mut self, tx: f64, ty: f64) {
        self.transform = self.transform.pre_translate(tx as f32, ty as f32);
    }

    fn rotate(&mut self, radians: f64) {
        // Built from exact quarter-turn values so axis-aligned turns land on
        // whole pixels.
        let (sin, cos) = sin_cos_degrees(snap_quarter_turn(radians_to_degrees(radians)));
        let (sin, cos) = (sin as f32, cos as f32);
        let rotation = Transform::from_row(cos, sin, -sin, cos, 0.0, 0.0);
        self.transform = self.transform.pre_concat(rotation);
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.transform = self.transform.pre_scale(sx as f32, sy as f32);
    }

    fn draw(&mut self, buffer: &PixelBuffer, rect: Rect) -> TransformResult<()> {
        self.draw_mapped(buffer, rect, false)
    }

    fn draw_bitmap(&mut self, buffer: &PixelBuffer, rect: Rect) -> TransformResult<()> {
        self.draw_mapped(buffer, rect, true)
    }

    fn snapshot(&self) -> TransformResult<PixelBuffer> {
        from_pixmap(&self.pixmap)
    }
}

impl Drop for SkiaCanvas {
    fn drop(&mut self) {
        trace!(
            width = self.pixmap.width(),
            height = self.pixmap.height(),
            "canvas released"
        );
    }
}

/// Premultiply a straight-alpha buffer into a pixmap.
fn to_pixmap(buffer: &PixelBuffer) -> TransformResult<Pixmap> {
    let size = IntSize::from_wh(buffer.width(), buffer.height()).ok_or_else(|| {
        TransformError::DegenerateInput(format!(
            "{}x{} buffer has no pixels",
            buffer.width(),
            buffer.height()
        ))
    })?;

    let mut data = Vec::with_capacity(buffer.pixels().len());
    for px in buffer.pixels().chunks_exact(BYTES_PER_PIXEL) {
        let c = ColorU8::from_rgba(px[0], px[1], px[2], px[3]).premultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    Pixmap::from_vec(data, size).ok_or_else(|| {
        TransformError::AllocationFailure(format!(
            "cannot wrap {}x{} buffer",
            buffer.width(),
            buffer.height()
        ))
    })
}

/// Demultiply a pixmap back into a straight-alpha buffer.
fn from_pixmap(pixmap: &Pixmap) -> TransformResult<PixelBuffer> {
    let mut pixels = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let c = px.demultiply();
        pixels.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    PixelBuffer::new(pixmap.width(), pixmap.height(), pixels)
}
