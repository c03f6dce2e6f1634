//! Pointer input.
//!
//! Raw input the scroll host understands. A platform shell translates its
//! native events into these and feeds them to `ScrollState::handle_pointer`.

use crate::primitives::Point;

/// A pointer (mouse or touch) event in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer went down.
    Pressed { position: Point },

    /// Pointer moved (with or without a button held).
    Moved { position: Point },

    /// Pointer went up.
    Released { position: Point },

    /// The platform took the gesture away (e.g. focus loss).
    Cancelled,

    /// Wheel or trackpad scroll.
    WheelScrolled { delta: ScrollDelta, position: Point },
}

/// Scroll delta from a wheel event. Positive `y` scrolls towards the start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollDelta {
    /// Scroll by lines (discrete, e.g., mouse wheel notches).
    Lines { y: f32 },

    /// Scroll by pixels (smooth, e.g., trackpad).
    Pixels { y: f32 },
}

impl ScrollDelta {
    /// Resolve to pixels, given the height of one line.
    pub fn to_pixels(&self, line_height: i32) -> i32 {
        match *self {
            ScrollDelta::Lines { y } => (y * line_height as f32).round() as i32,
            ScrollDelta::Pixels { y } => y.round() as i32,
        }
    }
}
