//! Layout constraints for constraint-based layout.
//!
//! Constraints flow down from the parent, specifying the min/max bounds a
//! node may occupy. A node answers with a single `Size` inside those bounds.

use crate::error::{LayoutError, Result};
use crate::primitives::Size;
use super::length::PxPadding;

/// Sentinel for an unbounded maximum.
pub const INFINITY: i32 = i32::MAX;

/// Box constraints passed down to children during layout.
///
/// Similar to Flutter's BoxConstraints: a `(min, max)` envelope per axis,
/// in whole pixels. `INFINITY` marks an unbounded maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConstraints {
    pub min_width: i32,
    pub max_width: i32,
    pub min_height: i32,
    pub max_height: i32,
}

impl LayoutConstraints {
    /// Unbounded constraints (infinite max, zero min).
    pub const UNBOUNDED: Self = Self {
        min_width: 0,
        max_width: INFINITY,
        min_height: 0,
        max_height: INFINITY,
    };

    /// Create tight constraints (exact size required).
    #[inline]
    pub fn tight(width: i32, height: i32) -> Self {
        Self {
            min_width: width,
            max_width: width,
            min_height: height,
            max_height: height,
        }
    }

    /// Create loose constraints with maximum bounds.
    #[inline]
    pub fn loose(max_width: i32, max_height: i32) -> Self {
        Self {
            min_width: 0,
            max_width,
            min_height: 0,
            max_height,
        }
    }

    /// Width forced to exactly `width`, height unbounded.
    ///
    /// This is what each grid cell is measured with.
    #[inline]
    pub fn fixed_width(width: i32) -> Self {
        Self {
            min_width: width,
            max_width: width,
            min_height: 0,
            max_height: INFINITY,
        }
    }

    /// Same horizontal bounds, unbounded height.
    ///
    /// Scroll containers pass this to their content so it can grow past
    /// the viewport.
    #[inline]
    pub fn with_unbounded_height(&self) -> Self {
        Self {
            max_height: INFINITY,
            ..*self
        }
    }

    /// Constrain a size to these bounds.
    #[inline]
    pub fn constrain(&self, size: Size) -> Size {
        Size {
            width: size.width.clamp(self.min_width, self.max_width),
            height: size.height.clamp(self.min_height, self.max_height),
        }
    }

    /// Check if max_width is finite (bounded).
    #[inline]
    pub fn has_bounded_width(&self) -> bool {
        self.max_width != INFINITY
    }

    /// Check if max_height is finite (bounded).
    #[inline]
    pub fn has_bounded_height(&self) -> bool {
        self.max_height != INFINITY
    }

    /// Whether these are tight constraints (min == max).
    #[inline]
    pub fn is_tight(&self) -> bool {
        self.min_width == self.max_width && self.min_height == self.max_height
    }

    /// Shrink constraints by padding. Unbounded maxima stay unbounded.
    #[inline]
    pub fn deflate(&self, padding: &PxPadding) -> Self {
        let shrink = |v: i32, by: i32| {
            if v == INFINITY { INFINITY } else { (v - by).max(0) }
        };
        Self {
            min_width: shrink(self.min_width, padding.horizontal()),
            max_width: shrink(self.max_width, padding.horizontal()),
            min_height: shrink(self.min_height, padding.vertical()),
            max_height: shrink(self.max_height, padding.vertical()),
        }
    }

    /// Check that `0 <= min <= max` holds on both axes.
    pub fn validate(&self) -> Result<()> {
        check_axis("width", self.min_width, self.max_width)?;
        check_axis("height", self.min_height, self.max_height)
    }
}

fn check_axis(axis: &'static str, min: i32, max: i32) -> Result<()> {
    // Negative minimums act as zero, but errors report the bounds as given.
    if min.max(0) > max {
        return Err(LayoutError::ConstraintViolation { axis, min, max });
    }
    Ok(())
}

impl Default for LayoutConstraints {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tight_constraints() {
        let c = LayoutConstraints::tight(100, 50);
        assert!(c.is_tight());
        assert_eq!(c.min_width, 100);
        assert_eq!(c.max_height, 50);
    }

    #[test]
    fn test_fixed_width() {
        let c = LayoutConstraints::fixed_width(150);
        assert_eq!(c.min_width, 150);
        assert_eq!(c.max_width, 150);
        assert_eq!(c.min_height, 0);
        assert!(!c.has_bounded_height());
    }

    #[test]
    fn test_constrain() {
        let c = LayoutConstraints::loose(100, 50);
        assert_eq!(c.constrain(Size::new(50, 25)), Size::new(50, 25));
        assert_eq!(c.constrain(Size::new(200, 100)), Size::new(100, 50));

        let fixed = LayoutConstraints::fixed_width(80);
        assert_eq!(fixed.constrain(Size::new(10, 9000)), Size::new(80, 9000));
    }

    #[test]
    fn test_deflate_keeps_infinity() {
        let c = LayoutConstraints::loose(100, 50).with_unbounded_height();
        let deflated = c.deflate(&PxPadding::all(10));
        assert_eq!(deflated.max_width, 80);
        assert_eq!(deflated.max_height, INFINITY);
    }

    #[test]
    fn test_deflate_floors_at_zero() {
        let c = LayoutConstraints::tight(10, 10);
        let deflated = c.deflate(&PxPadding::all(8));
        assert_eq!(deflated.max_width, 0);
        assert_eq!(deflated.min_height, 0);
    }

    #[test]
    fn test_validate() {
        assert!(LayoutConstraints::loose(300, 800).validate().is_ok());
        assert!(LayoutConstraints::UNBOUNDED.validate().is_ok());

        let inverted = LayoutConstraints {
            min_width: 0,
            max_width: 300,
            min_height: 500,
            max_height: 100,
        };
        assert_eq!(
            inverted.validate(),
            Err(LayoutError::ConstraintViolation { axis: "height", min: 500, max: 100 })
        );

        let negative = LayoutConstraints::loose(-1, 100);
        assert!(matches!(
            negative.validate(),
            Err(LayoutError::ConstraintViolation { axis: "width", min: 0, max: -1 })
        ));
    }

    #[test]
    fn test_validate_reports_bounds_as_given() {
        let c = LayoutConstraints {
            min_width: 0,
            max_width: 300,
            min_height: -5,
            max_height: -10,
        };
        assert_eq!(
            c.validate(),
            Err(LayoutError::ConstraintViolation { axis: "height", min: -5, max: -10 })
        );
        // A negative minimum alone is not a violation.
        let c = LayoutConstraints { min_height: -5, ..LayoutConstraints::loose(300, 100) };
        assert!(c.validate().is_ok());
    }
}
