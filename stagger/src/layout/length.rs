//! Layout units and spacing.
//!
//! Callers configure the grid in density-independent pixels (`Dp`); the
//! layout pass works in whole device pixels.

use serde::{Deserialize, Serialize};

/// Density-independent pixels.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dp(pub f32);

impl Dp {
    pub const ZERO: Self = Self(0.0);

    /// Convert to device pixels, rounding to the nearest whole pixel.
    #[inline]
    pub fn round_to_px(self, density: Density) -> i32 {
        (self.0 * density.0).round() as i32
    }
}

impl From<f32> for Dp {
    fn from(v: f32) -> Self {
        Self(v)
    }
}

/// Device pixels per `Dp`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Density(pub f32);

impl Density {
    pub const ONE: Self = Self(1.0);

    /// Whether this density can be used for conversion.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::ONE
    }
}

/// Padding around content, in `Dp`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub top: Dp,
    pub right: Dp,
    pub bottom: Dp,
    pub left: Dp,
}

impl Padding {
    /// Create padding with explicit values for each side.
    pub fn new(top: Dp, right: Dp, bottom: Dp, left: Dp) -> Self {
        Self { top, right, bottom, left }
    }

    /// Uniform padding on all sides.
    pub fn all(value: Dp) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Symmetric padding (horizontal, vertical).
    pub fn symmetric(horizontal: Dp, vertical: Dp) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Whether every side is finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [self.top, self.right, self.bottom, self.left]
            .iter()
            .all(|side| side.0.is_finite() && side.0 >= 0.0)
    }

    /// Resolve to device pixels.
    pub fn to_px(&self, density: Density) -> PxPadding {
        PxPadding {
            top: self.top.round_to_px(density),
            right: self.right.round_to_px(density),
            bottom: self.bottom.round_to_px(density),
            left: self.left.round_to_px(density),
        }
    }
}

/// Padding resolved to device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PxPadding {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl PxPadding {
    pub fn all(value: i32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Total horizontal padding.
    pub fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    /// Total vertical padding.
    pub fn vertical(&self) -> i32 {
        self.top + self.bottom
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}
