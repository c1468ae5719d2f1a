//! Orientation metadata and its equivalent pixel transform.
//!
//! An [`Orientation`] only *describes* how stored pixels should be displayed.
//! [`Orientation::resolve`] turns that description into the rotation and
//! mirror that would bake it into the pixels, which is what
//! [`crate::transform::rotate_oriented`] composes with a caller's request.

use serde::{Deserialize, Serialize};

/// Display orientation of a pixel buffer.
///
/// Angles follow the drawing surface's y-down convention: positive degrees
/// turn the image clockwise on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// Stored upright.
    #[default]
    Up,
    /// Stored upside down.
    Down,
    /// Needs a quarter turn counter-clockwise to display.
    Left,
    /// Needs a quarter turn clockwise to display.
    Right,
    UpMirrored,
    DownMirrored,
    LeftMirrored,
    RightMirrored,
}

/// Rotation and mirror equivalent to an orientation tag.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OrientationTransform {
    /// Rotation in degrees, positive = clockwise.
    pub degrees: f64,
    /// Reflect about the vertical axis.
    pub mirror: bool,
}

impl OrientationTransform {
    pub const IDENTITY: OrientationTransform = OrientationTransform {
        degrees: 0.0,
        mirror: false,
    };

    pub fn new(degrees: f64, mirror: bool) -> Self {
        Self { degrees, mirror }
    }

    /// Apply `delta` on top of this transform.
    ///
    /// Angles add; mirror flags cancel in pairs.
    pub fn then(self, delta: OrientationTransform) -> Self {
        Self {
            degrees: self.degrees + delta.degrees,
            mirror: self.mirror != delta.mirror,
        }
    }
}

impl Orientation {
    pub const ALL: [Orientation; 8] = [
        Orientation::Up,
        Orientation::Down,
        Orientation::Left,
        Orientation::Right,
        Orientation::UpMirrored,
        Orientation::DownMirrored,
        Orientation::LeftMirrored,
        Orientation::RightMirrored,
    ];

    /// The pixel transform that makes this orientation redundant.
    pub fn resolve(self) -> OrientationTransform {
        let (degrees, mirror) = match self {
            Orientation::Up => (0.0, false),
            Orientation::Down => (180.0, false),
            Orientation::Left => (-90.0, false),
            Orientation::Right => (90.0, false),
            Orientation::UpMirrored => (0.0, true),
            Orientation::DownMirrored => (180.0, true),
            Orientation::LeftMirrored => (-90.0, true),
            Orientation::RightMirrored => (90.0, true),
        };
        OrientationTransform { degrees, mirror }
    }

    /// Returns true if the displayed size is the stored size transposed.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(
            self,
            Orientation::Left
                | Orientation::Right
                | Orientation::LeftMirrored
                | Orientation::RightMirrored
        )
    }

    /// EXIF orientation value (1-8) for this tag.
    /// See: https://exiftool.org/TagNames/EXIF.html
    pub fn exif_value(self) -> u32 {
        match self {
            Orientation::Up => 1,
            Orientation::UpMirrored => 2,
            Orientation::Down => 3,
            Orientation::DownMirrored => 4,
            Orientation::LeftMirrored => 5,
            Orientation::Right => 6,
            Orientation::RightMirrored => 7,
            Orientation::Left => 8,
        }
    }
}

/// Decode an EXIF orientation value.
///
/// Values outside 1-8 decode to [`Orientation::Up`] so that tags from newer
/// writers resolve to the neutral transform instead of failing.
impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            1 => Orientation::Up,
            2 => Orientation::UpMirrored,
            3 => Orientation::Down,
            4 => Orientation::DownMirrored,
            5 => Orientation::LeftMirrored,
            6 => Orientation::Right,
            7 => Orientation::RightMirrored,
            8 => Orientation::Left,
            _ => Orientation::Up,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_table() {
        let expected = [
            (Orientation::Up, 0.0, false),
            (Orientation::Down, 180.0, false),
            (Orientation::Left, -90.0, false),
            (Orientation::Right, 90.0, false),
            (Orientation::UpMirrored, 0.0, true),
            (Orientation::DownMirrored, 180.0, true),
            (Orientation::LeftMirrored, -90.0, true),
            (Orientation::RightMirrored, 90.0, true),
        ];
        for (tag, degrees, mirror) in expected {
            assert_eq!(
                tag.resolve(),
                OrientationTransform::new(degrees, mirror),
                "{:?}",
                tag
            );
        }
    }

    #[test]
    fn test_unknown_exif_value_is_neutral() {
        assert_eq!(Orientation::from(0), Orientation::Up);
        assert_eq!(Orientation::from(9), Orientation::Up);
        assert_eq!(Orientation::from(u32::MAX), Orientation::Up);
        assert_eq!(Orientation::from(42).resolve(), OrientationTransform::IDENTITY);
    }

    #[test]
    fn test_exif_round_trip() {
        for tag in Orientation::ALL {
            assert_eq!(Orientation::from(tag.exif_value()), tag);
        }
    }

    #[test]
    fn test_default_is_up() {
        assert_eq!(Orientation::default(), Orientation::Up);
    }

    #[test]
    fn test_swaps_dimensions() {
        assert!(!Orientation::Up.swaps_dimensions());
        assert!(!Orientation::Down.swaps_dimensions());
        assert!(!Orientation::UpMirrored.swaps_dimensions());
        assert!(!Orientation::DownMirrored.swaps_dimensions());

        assert!(Orientation::Left.swaps_dimensions());
        assert!(Orientation::Right.swaps_dimensions());
        assert!(Orientation::LeftMirrored.swaps_dimensions());
        assert!(Orientation::RightMirrored.swaps_dimensions());
    }

    #[test]
    fn test_then_composes() {
        let base = Orientation::RightMirrored.resolve();
        let composed = base.then(OrientationTransform::new(90.0, true));
        assert_eq!(composed, OrientationTransform::new(180.0, false));

        let composed = Orientation::Left
            .resolve()
            .then(OrientationTransform::new(-90.0, true));
        assert_eq!(composed, OrientationTransform::new(-180.0, true));
    }
}
