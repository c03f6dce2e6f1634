//! Stagger: a staggered vertical grid layout.
//!
//! Children of varying height are dealt into equal-width columns, each one
//! going to the currently shortest column, and the result is hosted in a
//! vertically scrolling viewport.
//!
//! # Usage
//!
//! ```ignore
//! use stagger::{BoxElement, Dp, Rect, ScrollGrid, ScrollState, StaggeredGrid};
//!
//! let state = ScrollState::new();
//! let frame = ScrollGrid::from_state(&state, StaggeredGrid::new(Dp(150.0)))
//!     .push(BoxElement::new(120))
//!     .push(BoxElement::new(80))
//!     .layout(Rect::new(0, 0, 360, 640))?;
//! for child in &frame.visible {
//!     // paint child.rect()
//! }
//! ```

// Core primitives
pub mod primitives;
pub mod error;
pub mod event;

// Layout system
pub mod layout;

// State helpers
pub mod scroll_state;

// Configuration
pub mod config;

// Re-export core types
pub use primitives::{Color, Point, Rect, Size};
pub use error::LayoutError;
pub use event::{PointerEvent, ScrollDelta};
pub use scroll_state::{DragState, ScrollAction, ScrollState};
pub use config::{ConfigError, GridConfig};

// Layout system exports
pub use layout::{
    BoxElement, ColumnSelection, Density, Dp, LayoutChild, LayoutConstraints, LayoutResult,
    Measurable, Padding, PlacedChild, ScrollGrid, StaggeredGrid, TextElement, Viewport,
};
