//! Real-valued geometry shared by every transform.
//!
//! Sizes and offsets are `f64` so that scale factors and centering offsets
//! keep their fractional parts until a canvas is actually allocated. The
//! conversion to whole pixels happens in exactly one place,
//! [`Size::pixel_dimensions`].

use serde::{Deserialize, Serialize};

/// Width and height of an image or canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Size of a whole-pixel buffer.
    pub fn from_pixels(width: u32, height: u32) -> Self {
        Self::new(width as f64, height as f64)
    }

    /// Check if either dimension is zero (or not a usable length).
    ///
    /// Negative and non-finite dimensions count as empty: nothing can be
    /// drawn into them.
    pub fn is_empty(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }

    /// Whole-pixel dimensions of a canvas of this size.
    ///
    /// Each axis is rounded up so the canvas covers the whole size. Lengths
    /// within floating-point noise of an integer (e.g. `50.000000000000007`)
    /// snap to it first. Negative and NaN lengths saturate to zero.
    pub fn pixel_dimensions(&self) -> (u32, u32) {
        (whole_pixels(self.width), whole_pixels(self.height))
    }
}

fn whole_pixels(length: f64) -> u32 {
    let nearest = length.round();
    if (length - nearest).abs() <= 1e-9 * nearest.abs().max(1.0) {
        nearest as u32
    } else {
        length.ceil() as u32
    }
}

/// Offset of a drawing origin within a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle: an origin plus a size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(Point::new(x, y), Size::new(width, height))
    }

    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    /// Check whether this rectangle lies entirely inside `bounds`.
    pub fn is_within(&self, bounds: Size) -> bool {
        self.min_x() >= 0.0
            && self.min_y() >= 0.0
            && self.max_x() <= bounds.width
            && self.max_y() <= bounds.height
    }
}
