//! Layout System for Stagger
//!
//! A staggered vertical grid and the scroll viewport that hosts it.
//!
//! # Architecture
//!
//! ```text
//! children + constraints -> StaggeredGrid::layout() -> LayoutResult
//!                                  ^                        |
//!              ScrollGrid (unbounded height)     render(offset, viewport)
//! ```
//!
//! Every pass is computed from scratch. The only state that outlives a
//! pass is the `ScrollState` owned by the caller.

pub mod constraints;
pub mod length;
pub mod child;
pub mod staggered;
pub mod scroll_grid;

// Re-export core types
pub use constraints::{LayoutConstraints, INFINITY};
pub use length::{Density, Dp, Padding, PxPadding};
pub use child::{BoxElement, LayoutChild, Measurable, MeasureFn, TextElement, measure_fn};
pub use staggered::{
    ColumnHeap, ColumnHeights, ColumnSelection, ColumnSelector, LayoutResult, PlacedChild,
    StaggeredGrid, column_count, layout, place,
};
pub use scroll_grid::{ScrollGrid, Viewport, render};
