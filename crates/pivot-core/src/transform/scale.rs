//! Proportional scaling into a target box.
//!
//! Both policies keep the source aspect ratio, center the scaled content and
//! always produce a canvas of exactly the target size:
//!
//! - **Contain** ([`scale_to_fit`]): the whole source is visible; the slack
//!   axis gets transparent margins.
//! - **Cover** ([`scale_to_fill`]): the target is fully covered; the overflow
//!   axis is clipped by the canvas.
//!
//! Planning ([`plan_contain`], [`plan_cover`]) is pure arithmetic and is kept
//! separate from drawing so the numbers can be inspected directly.

use tracing::{debug, span, warn, Level};

use crate::buffer::PixelBuffer;
use crate::error::{TransformError, TransformResult};
use crate::geometry::{Point, Rect, Size};
use crate::surface::{render, Canvas, Surface};

/// Scaling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalePolicy {
    /// Fit entirely inside the target (smaller factor wins).
    Contain,
    /// Cover the whole target (larger factor wins).
    Cover,
}

/// Where and how large the source is drawn inside the target canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalePlan {
    /// Factor applied to both source dimensions.
    pub scale_factor: f64,
    /// Source size after scaling.
    pub scaled_size: Size,
    /// Top-left corner of the scaled content in canvas coordinates.
    /// Negative on an axis that overflows.
    pub origin: Point,
}

impl ScalePlan {
    /// Rectangle the source is drawn into.
    pub fn rect(&self) -> Rect {
        Rect::new(self.origin, self.scaled_size)
    }
}

/// Plan a contain-policy scale of `source` into `target`.
///
/// # Errors
///
/// Returns `TransformError::DegenerateInput` if the source has a zero (or
/// non-finite) dimension, since the scale factor would be undefined.
pub fn plan_contain(source: Size, target: Size) -> TransformResult<ScalePlan> {
    plan_scale(source, target, ScalePolicy::Contain)
}

/// Plan a cover-policy scale of `source` into `target`.
///
/// # Errors
///
/// Returns `TransformError::DegenerateInput` if the source has a zero (or
/// non-finite) dimension, since the scale factor would be undefined.
pub fn plan_cover(source: Size, target: Size) -> TransformResult<ScalePlan> {
    plan_scale(source, target, ScalePolicy::Cover)
}

/// Plan a scale of `source` into `target` under `policy`.
pub fn plan_scale(source: Size, target: Size, policy: ScalePolicy) -> TransformResult<ScalePlan> {
    // Fast path: an exact match draws 1:1 without dividing at all
    if source == target {
        return Ok(ScalePlan {
            scale_factor: 1.0,
            scaled_size: target,
            origin: Point::ZERO,
        });
    }

    if source.is_empty() {
        return Err(TransformError::DegenerateInput(format!(
            "cannot scale a {}x{} source",
            source.width, source.height
        )));
    }

    let width_factor = target.width / source.width;
    let height_factor = target.height / source.height;

    let scale_factor = match policy {
        ScalePolicy::Contain => width_factor.min(height_factor),
        ScalePolicy::Cover => width_factor.max(height_factor),
    };

    let scaled_size = Size::new(source.width * scale_factor, source.height * scale_factor);

    // Center on whichever axis did not determine the factor
    let mut origin = Point::ZERO;
    let width_bound = match policy {
        ScalePolicy::Contain => width_factor < height_factor,
        ScalePolicy::Cover => width_factor > height_factor,
    };
    if width_bound {
        origin.y = (target.height - scaled_size.height) * 0.5;
    } else if width_factor != height_factor {
        origin.x = (target.width - scaled_size.width) * 0.5;
    }

    Ok(ScalePlan {
        scale_factor,
        scaled_size,
        origin,
    })
}

/// Scale `source` to fit inside `target`, centered, on a canvas of exactly
/// `target` size.
///
/// # Errors
///
/// - `TransformError::DegenerateInput` for a zero-area source
/// - `TransformError::AllocationFailure` if the surface cannot provide the
///   canvas (e.g. a zero-area target)
pub fn scale_to_fit<S: Surface>(
    surface: &S,
    source: &PixelBuffer,
    target: Size,
) -> TransformResult<PixelBuffer> {
    let span = span!(
        Level::INFO,
        "scale_to_fit",
        width = source.width(),
        height = source.height()
    );
    let _guard = span.enter();

    scale_with(surface, source, target, ScalePolicy::Contain)
}

/// Scale `source` to cover `target`, centered and clipped, on a canvas of
/// exactly `target` size.
///
/// # Errors
///
/// - `TransformError::DegenerateInput` for a zero-area source
/// - `TransformError::AllocationFailure` if the surface cannot provide the
///   canvas (e.g. a zero-area target)
pub fn scale_to_fill<S: Surface>(
    surface: &S,
    source: &PixelBuffer,
    target: Size,
) -> TransformResult<PixelBuffer> {
    let span = span!(
        Level::INFO,
        "scale_to_fill",
        width = source.width(),
        height = source.height()
    );
    let _guard = span.enter();

    scale_with(surface, source, target, ScalePolicy::Cover)
}

fn scale_with<S: Surface>(
    surface: &S,
    source: &PixelBuffer,
    target: Size,
    policy: ScalePolicy,
) -> TransformResult<PixelBuffer> {
    let plan = plan_scale(source.size(), target, policy).inspect_err(|e| {
        warn!(error = %e, "could not scale image");
    })?;

    debug!(
        ?policy,
        scale_factor = plan.scale_factor,
        x = plan.origin.x,
        y = plan.origin.y,
        target_width = target.width,
        target_height = target.height,
        "scale planned"
    );

    render(surface, target, |canvas| canvas.draw(source, plan.rect())).inspect_err(|e| {
        warn!(error = %e, "could not scale image");
    })
}
