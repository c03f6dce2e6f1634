//! Staggered Grid - greedy shortest-column vertical layout.
//!
//! Children are distributed over equal-width columns. Each child goes into
//! whichever column is currently shortest (lowest index wins ties) and is
//! stacked under that column's previous child. Placement is a single pass:
//! once a child is placed, later children never move it.
//!
//! ```text
//! +-----+-----+-----+
//! |  0  |  1  |  2  |
//! |     +-----+     |
//! +-----+  4  |     |
//! |  3  |     +-----+
//! ...
//! ```

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use serde::Serialize;

use crate::error::{LayoutError, Result};
use crate::primitives::{Point, Rect, Size};

use super::child::Measurable;
use super::constraints::LayoutConstraints;
use super::length::{Density, Dp, Padding, PxPadding};

// =========================================================================
// Output
// =========================================================================

/// Where one child ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlacedChild {
    /// Position of the child in the input sequence.
    pub index: usize,
    /// Column the child was assigned to.
    pub column: usize,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PlacedChild {
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// The same placement shifted by `offset`.
    #[inline]
    pub fn translated(&self, offset: Point) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
            ..*self
        }
    }
}

/// Result of one layout pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutResult {
    pub column_count: usize,
    /// Width shared by every column.
    pub column_width: i32,
    /// Final accumulated height of each column, before clamping.
    pub column_heights: Vec<i32>,
    /// Placements, in input order.
    pub children: Vec<PlacedChild>,
    /// Size the container reports to its parent.
    pub size: Size,
}

impl LayoutResult {
    /// Tallest column, unclamped. This is what a scroll host scrolls over.
    pub fn content_height(&self) -> i32 {
        self.column_heights.iter().copied().max().unwrap_or(0)
    }

    /// Placements belonging to one column, top to bottom.
    pub fn column(&self, column: usize) -> impl Iterator<Item = &PlacedChild> + '_ {
        self.children.iter().filter(move |c| c.column == column)
    }

    /// Horizontal pixels not covered by any column.
    pub fn unallocated_width(&self) -> i32 {
        self.size.width - self.column_width * self.column_count as i32
    }
}

// =========================================================================
// Column selection
// =========================================================================

/// Tracks per-column heights and hands out the shortest column.
///
/// `take_shortest` must return the lowest index among equally short
/// columns. Every `take_shortest` is followed by exactly one `put` for the
/// same column before the next `take_shortest`.
pub trait ColumnSelector {
    fn with_columns(count: usize) -> Self;
    fn take_shortest(&mut self) -> (usize, i32);
    fn put(&mut self, column: usize, height: i32);
    fn into_heights(self) -> Vec<i32>;
}

/// Linear scan over a height array. O(columns) per child.
#[derive(Debug, Clone)]
pub struct ColumnHeights {
    heights: Vec<i32>,
}

impl ColumnHeights {
    /// First index holding the minimum height.
    pub fn shortest(&self) -> usize {
        let mut best = 0;
        for (i, &h) in self.heights.iter().enumerate().skip(1) {
            if h < self.heights[best] {
                best = i;
            }
        }
        best
    }
}

impl ColumnSelector for ColumnHeights {
    fn with_columns(count: usize) -> Self {
        Self { heights: vec![0; count] }
    }

    fn take_shortest(&mut self) -> (usize, i32) {
        let column = self.shortest();
        (column, self.heights[column])
    }

    fn put(&mut self, column: usize, height: i32) {
        self.heights[column] = height;
    }

    fn into_heights(self) -> Vec<i32> {
        self.heights
    }
}

/// Min-heap keyed by `(height, index)`. O(log columns) per child.
///
/// Ordering on the tuple keeps the lowest-index tie-break, so results
/// match `ColumnHeights` exactly.
#[derive(Debug, Clone)]
pub struct ColumnHeap {
    heap: BinaryHeap<Reverse<(i32, usize)>>,
    count: usize,
}

impl ColumnSelector for ColumnHeap {
    fn with_columns(count: usize) -> Self {
        Self {
            heap: (0..count).map(|i| Reverse((0, i))).collect(),
            count,
        }
    }

    fn take_shortest(&mut self) -> (usize, i32) {
        match self.heap.pop() {
            Some(Reverse((height, column))) => (column, height),
            // Only reachable if `put` was skipped; column 0 is always valid.
            None => (0, 0),
        }
    }

    fn put(&mut self, column: usize, height: i32) {
        self.heap.push(Reverse((height, column)));
    }

    fn into_heights(self) -> Vec<i32> {
        let mut heights = vec![0; self.count];
        for Reverse((height, column)) in self.heap {
            heights[column] = height;
        }
        heights
    }
}

/// Which column selector a grid uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnSelection {
    #[default]
    Linear,
    Heap,
}

// =========================================================================
// Core pass
// =========================================================================

/// Column count for a width: `max(1, available / max_column_width)`.
///
/// Fails if `max_column_width` is not positive.
pub fn column_count(available_width: i32, max_column_width: i32) -> Result<usize> {
    if max_column_width <= 0 {
        return Err(LayoutError::InvalidArgument(format!(
            "max column width must be positive, got {max_column_width}"
        )));
    }
    Ok((available_width.max(0) / max_column_width).max(1) as usize)
}

/// Lay out `children` in a staggered grid.
///
/// `available_width` is the full width the container claims. The container
/// height is the tallest column clamped into `[min_height, max_height]`;
/// pass `INFINITY` as `max_height` when the grid sits in a scroll host.
pub fn layout<M: Measurable>(
    children: &[M],
    available_width: i32,
    max_column_width: i32,
    min_height: i32,
    max_height: i32,
) -> Result<LayoutResult> {
    let constraints = LayoutConstraints {
        min_width: 0,
        max_width: available_width,
        min_height,
        max_height,
    };
    place::<M, ColumnHeights>(children, constraints, max_column_width)
}

/// The single placement pass, generic over column selection.
pub fn place<M: Measurable, S: ColumnSelector>(
    children: &[M],
    constraints: LayoutConstraints,
    max_column_width: i32,
) -> Result<LayoutResult> {
    let count = column_count(constraints.max_width, max_column_width)?;
    constraints.validate()?;
    if !constraints.has_bounded_width() {
        return Err(LayoutError::InvalidArgument(
            "staggered grid needs a bounded width".into(),
        ));
    }

    let available_width = constraints.max_width;
    let column_width = available_width / count as i32;
    let cell = LayoutConstraints::fixed_width(column_width);

    let mut columns = S::with_columns(count);
    let mut placed = Vec::with_capacity(children.len());

    for (index, child) in children.iter().enumerate() {
        let (column, y) = columns.take_shortest();
        let size = cell.constrain(child.measure(cell));
        placed.push(PlacedChild {
            index,
            column,
            x: column as i32 * column_width,
            y,
            width: size.width,
            height: size.height,
        });
        columns.put(column, y.saturating_add(size.height));
    }

    let column_heights = columns.into_heights();
    let content_height = column_heights.iter().copied().max().unwrap_or(0);
    let height = content_height.clamp(constraints.min_height, constraints.max_height);
    if height != content_height {
        tracing::debug!(content_height, height, "staggered grid height clamped");
    }
    tracing::trace!(
        children = placed.len(),
        columns = count,
        column_width,
        content_height,
        "staggered grid pass"
    );

    Ok(LayoutResult {
        column_count: count,
        column_width,
        column_heights,
        children: placed,
        size: Size::new(available_width, height),
    })
}

// =========================================================================
// StaggeredGrid
// =========================================================================

/// A staggered vertical grid configured in `Dp`.
///
/// Holds only configuration. Every call to `layout` is a fresh pass; call
/// it again whenever the width, the children, or a child's intrinsic size
/// changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaggeredGrid {
    max_column_width: Dp,
    density: Density,
    padding: Padding,
    selection: ColumnSelection,
}

impl StaggeredGrid {
    pub fn new(max_column_width: Dp) -> Self {
        Self {
            max_column_width,
            density: Density::ONE,
            padding: Padding::default(),
            selection: ColumnSelection::Linear,
        }
    }

    pub fn density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    /// Padding between the container edge and the columns.
    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn selection(mut self, selection: ColumnSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Max column width resolved to pixels.
    pub fn max_column_width_px(&self) -> Result<i32> {
        if !self.density.is_valid() {
            return Err(LayoutError::InvalidArgument(format!(
                "density must be positive, got {}",
                self.density.0
            )));
        }
        Ok(self.max_column_width.round_to_px(self.density))
    }

    /// Lay out `children` under `constraints`.
    ///
    /// The container claims `constraints.max_width`. Padding is taken out
    /// of the constraints before the columns are computed and placements
    /// are shifted by it; the reported height includes it.
    pub fn layout<M: Measurable>(
        &self,
        children: &[M],
        constraints: LayoutConstraints,
    ) -> Result<LayoutResult> {
        let max_column_width = self.max_column_width_px()?;
        if !self.padding.is_valid() {
            return Err(LayoutError::InvalidArgument(format!(
                "padding sides must be non-negative, got {:?}",
                self.padding
            )));
        }
        constraints.validate()?;

        let padding = self.padding.to_px(self.density);
        if padding.is_zero() {
            return self.run(children, constraints, max_column_width);
        }

        let inner = self.run(children, constraints.deflate(&padding), max_column_width)?;
        Ok(inflate(inner, constraints, &padding))
    }

    fn run<M: Measurable>(
        &self,
        children: &[M],
        constraints: LayoutConstraints,
        max_column_width: i32,
    ) -> Result<LayoutResult> {
        match self.selection {
            ColumnSelection::Linear => place::<M, ColumnHeights>(children, constraints, max_column_width),
            ColumnSelection::Heap => place::<M, ColumnHeap>(children, constraints, max_column_width),
        }
    }
}

/// Wrap a padded-in result back into the outer constraints.
fn inflate(inner: LayoutResult, outer: LayoutConstraints, padding: &PxPadding) -> LayoutResult {
    let offset = Point::new(padding.left, padding.top);
    let height = inner
        .content_height()
        .saturating_add(padding.vertical())
        .clamp(outer.min_height, outer.max_height);
    LayoutResult {
        children: inner.children.iter().map(|c| c.translated(offset)).collect(),
        size: Size::new(outer.max_width, height),
        ..inner
    }
}

// =========================================================================
// Tests
// =========================================================================
