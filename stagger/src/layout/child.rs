//! Measurable children.
//!
//! The grid never looks inside a child. All it can do is ask "how big are
//! you under these constraints?" through the `Measurable` trait. This
//! module defines that trait and the concrete elements the crate ships.

use crate::primitives::{Color, Size};

use super::constraints::LayoutConstraints;
use super::length::{Density, Dp};

// Text metrics for the built-in text element, at density 1.0.
pub const CHAR_WIDTH: f32 = 8.4;
pub const LINE_HEIGHT: f32 = 18.0;

// =========================================================================
// Measurable
// =========================================================================

/// Anything that can report its size under a set of constraints.
///
/// Implementations must be deterministic for a given input and free of
/// side effects; the grid may measure the same child on every pass.
/// The returned size is expected to satisfy `constraints`; containers
/// clamp it with `LayoutConstraints::constrain` either way.
pub trait Measurable {
    fn measure(&self, constraints: LayoutConstraints) -> Size;
}

impl<T: Measurable + ?Sized> Measurable for &T {
    #[inline]
    fn measure(&self, constraints: LayoutConstraints) -> Size {
        (**self).measure(constraints)
    }
}

impl<T: Measurable + ?Sized> Measurable for Box<T> {
    #[inline]
    fn measure(&self, constraints: LayoutConstraints) -> Size {
        (**self).measure(constraints)
    }
}

/// Adapter that turns a closure into a `Measurable`.
pub struct MeasureFn<F>(F);

/// Wrap a closure as a `Measurable`.
///
/// ```ignore
/// let square = measure_fn(|c: LayoutConstraints| Size::new(c.max_width, c.max_width));
/// ```
pub fn measure_fn<F>(f: F) -> MeasureFn<F>
where
    F: Fn(LayoutConstraints) -> Size,
{
    MeasureFn(f)
}

impl<F> Measurable for MeasureFn<F>
where
    F: Fn(LayoutConstraints) -> Size,
{
    #[inline]
    fn measure(&self, constraints: LayoutConstraints) -> Size {
        (self.0)(constraints)
    }
}

// =========================================================================
// Elements
// =========================================================================

/// A fixed-height box that fills whatever width it is given.
///
/// The demo cards are these: a rounded colored box with a centered label.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxElement {
    pub height: i32,
    pub background: Color,
    pub corner_radius: f32,
    pub label: Option<String>,
}

impl BoxElement {
    /// A box with a pixel height.
    pub fn new(height: i32) -> Self {
        Self {
            height,
            background: Color::TRANSPARENT,
            corner_radius: 0.0,
            label: None,
        }
    }

    /// A box whose height is given in `Dp`.
    pub fn from_dp(height: Dp, density: Density) -> Self {
        Self::new(height.round_to_px(density))
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl Measurable for BoxElement {
    fn measure(&self, constraints: LayoutConstraints) -> Size {
        constraints.constrain(Size::new(constraints.max_width, self.height))
    }
}

/// Wrapping text. Its height depends on the width it is measured at.
#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub text: String,
    pub color: Color,
    scale: f32,
}

impl TextElement {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: Color::WHITE,
            scale: 1.0,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Scale text metrics by the display density.
    pub fn density(mut self, density: Density) -> Self {
        self.scale = density.0;
        self
    }

    /// Number of lines when wrapped at `width` pixels (character wrap).
    pub fn line_count(&self, width: i32) -> i32 {
        let chars = self.text.chars().count();
        if chars == 0 {
            return 1;
        }
        let char_width = CHAR_WIDTH * self.scale;
        let per_line = ((width as f32 / char_width).floor() as usize).max(1);
        chars.div_ceil(per_line) as i32
    }
}

impl Measurable for TextElement {
    fn measure(&self, constraints: LayoutConstraints) -> Size {
        let width = if constraints.has_bounded_width() {
            constraints.max_width
        } else {
            (self.text.chars().count() as f32 * CHAR_WIDTH * self.scale).ceil() as i32
        };
        let line_height = (LINE_HEIGHT * self.scale).ceil() as i32;
        constraints.constrain(Size::new(width, self.line_count(width) * line_height))
    }
}

// =========================================================================
// LayoutChild
// =========================================================================

/// A child element in the grid.
///
/// Enum dispatch over the built-in elements, with an escape hatch for
/// caller-defined measurables.
pub enum LayoutChild {
    /// A fixed-height box.
    Block(BoxElement),
    /// Wrapping text.
    Text(TextElement),
    /// A vertical gap of fixed height.
    Spacer { height: i32 },
    /// Any other measurable.
    Custom(Box<dyn Measurable>),
}

impl Measurable for LayoutChild {
    fn measure(&self, constraints: LayoutConstraints) -> Size {
        match self {
            LayoutChild::Block(b) => b.measure(constraints),
            LayoutChild::Text(t) => t.measure(constraints),
            LayoutChild::Spacer { height } => {
                constraints.constrain(Size::new(constraints.min_width, *height))
            }
            LayoutChild::Custom(m) => m.measure(constraints),
        }
    }
}

impl From<BoxElement> for LayoutChild {
    fn from(v: BoxElement) -> Self { Self::Block(v) }
}

impl From<TextElement> for LayoutChild {
    fn from(v: TextElement) -> Self { Self::Text(v) }
}

impl From<Box<dyn Measurable>> for LayoutChild {
    fn from(v: Box<dyn Measurable>) -> Self { Self::Custom(v) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_fills_fixed_width() {
        let b = BoxElement::new(120);
        assert_eq!(b.measure(LayoutConstraints::fixed_width(150)), Size::new(150, 120));
    }

    #[test]
    fn box_from_dp() {
        let b = BoxElement::from_dp(Dp(100.0), Density(1.5));
        assert_eq!(b.height, 150);
    }

    #[test]
    fn text_wraps_with_width() {
        // 20 chars at 8.4px: 10 per line at 90px, all on one line at 200px.
        let t = TextElement::new("abcdefghijklmnopqrst");
        let narrow = t.measure(LayoutConstraints::fixed_width(90));
        let wide = t.measure(LayoutConstraints::fixed_width(200));
        assert_eq!(narrow.height, 2 * 18);
        assert_eq!(wide.height, 18);
        assert_eq!(narrow.width, 90);
    }

    #[test]
    fn text_zero_width_does_not_divide_by_zero() {
        let t = TextElement::new("abc");
        let s = t.measure(LayoutConstraints::fixed_width(0));
        assert_eq!(s.width, 0);
        assert_eq!(s.height, 3 * 18);
    }

    #[test]
    fn custom_child_dispatches() {
        let child: LayoutChild =
            (Box::new(measure_fn(|c: LayoutConstraints| Size::new(c.max_width, 7))) as Box<dyn Measurable>).into();
        assert_eq!(child.measure(LayoutConstraints::fixed_width(30)), Size::new(30, 7));
    }

    #[test]
    fn spacer_measures_its_height() {
        let spacer = LayoutChild::Spacer { height: 12 };
        assert_eq!(spacer.measure(LayoutConstraints::fixed_width(40)), Size::new(40, 12));
    }
}
