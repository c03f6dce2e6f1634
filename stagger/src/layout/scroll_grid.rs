//! Scroll Grid - a staggered grid inside a vertical scroll viewport.
//!
//! Scroll state lives in app state. The container reads the offset from
//! it, runs a full (non-virtualized) grid pass with unbounded height, and
//! writes the resulting scroll range back through `Cell`. Only the
//! children intersecting the viewport come back, translated into viewport
//! coordinates.

use serde::Serialize;

use crate::error::Result;
use crate::primitives::{Point, Rect};
use crate::scroll_state::ScrollState;

use super::child::Measurable;
use super::constraints::LayoutConstraints;
use super::staggered::{LayoutResult, PlacedChild, StaggeredGrid};

/// One frame of a scrolled grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Viewport {
    /// The full grid pass, in content coordinates.
    pub content: LayoutResult,
    /// Scroll offset used for this frame.
    pub offset: i32,
    /// Viewport bounds the frame was laid out for.
    pub bounds: Rect,
    /// Maximum scroll offset for this content.
    pub max_scroll: i32,
    /// Children intersecting the viewport, in viewport coordinates.
    pub visible: Vec<PlacedChild>,
}

/// Children of `result` intersecting `[offset, offset + viewport_height)`,
/// each shifted up by `offset`.
pub fn render(result: &LayoutResult, scroll_offset: i32, viewport_height: i32) -> Vec<PlacedChild> {
    let top = scroll_offset;
    let bottom = scroll_offset.saturating_add(viewport_height);
    let shift = Point::new(0, -scroll_offset);
    result
        .children
        .iter()
        .filter(|c| c.rect().overlaps_band(top, bottom))
        .map(|c| c.translated(shift))
        .collect()
}

/// A staggered grid hosted in a vertical scroll viewport.
pub struct ScrollGrid<'a, M> {
    /// When set, layout reads the offset from here and syncs the range back.
    state_ref: Option<&'a ScrollState>,
    scroll_offset: i32,
    grid: StaggeredGrid,
    children: Vec<M>,
}

impl<'a, M: Measurable> ScrollGrid<'a, M> {
    /// Create a grid with a fixed scroll offset and no attached state.
    pub fn new(grid: StaggeredGrid) -> Self {
        Self {
            state_ref: None,
            scroll_offset: 0,
            grid,
            children: Vec::new(),
        }
    }

    /// Create from a `ScrollState`.
    ///
    /// Layout updates the state's `max` and `viewport` directly, so no
    /// separate sync step is needed.
    pub fn from_state(state: &'a ScrollState, grid: StaggeredGrid) -> Self {
        Self {
            state_ref: Some(state),
            scroll_offset: state.offset,
            grid,
            children: Vec::new(),
        }
    }

    /// Set the scroll offset (ignored in favour of the state when attached).
    pub fn scroll_offset(mut self, offset: i32) -> Self {
        self.scroll_offset = offset;
        self
    }

    /// Add a child.
    pub fn push(mut self, child: impl Into<M>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Add several children.
    pub fn extend(mut self, children: impl IntoIterator<Item = M>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Lay out for a viewport and return the visible frame.
    ///
    /// The grid is measured with the viewport's width and at least its
    /// height, with no upper bound on height, so overflowing content
    /// reports its full size instead of being clamped.
    pub fn layout(&self, bounds: Rect) -> Result<Viewport> {
        let constraints =
            LayoutConstraints::tight(bounds.width, bounds.height).with_unbounded_height();
        let content = self.grid.layout(&self.children, constraints)?;

        let max_scroll = (content.size.height - bounds.height).max(0);
        let offset = match self.state_ref {
            Some(state) => {
                state.sync(content.size.height, bounds);
                state.effective_offset()
            }
            None => self.scroll_offset.clamp(0, max_scroll),
        };

        let visible: Vec<PlacedChild> = render(&content, offset, bounds.height)
            .into_iter()
            .map(|c| c.translated(bounds.origin()))
            .collect();

        tracing::trace!(
            offset,
            max_scroll,
            visible = visible.len(),
            total = content.children.len(),
            "scroll grid frame"
        );

        Ok(Viewport {
            content,
            offset,
            bounds,
            max_scroll,
            visible,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::child::BoxElement;
    use crate::layout::constraints::INFINITY;
    use crate::layout::length::Dp;
    use crate::layout::staggered::layout;
    use crate::scroll_state::ScrollAction;

    fn grid_of(heights: &[i32]) -> ScrollGrid<'static, BoxElement> {
        ScrollGrid::new(StaggeredGrid::new(Dp(150.0)))
            .extend(heights.iter().map(|&h| BoxElement::new(h)))
    }

    #[test]
    fn test_render_filters_and_translates() {
        let result = layout(
            &[BoxElement::new(100), BoxElement::new(100), BoxElement::new(100), BoxElement::new(100)],
            300,
            150,
            0,
            INFINITY,
        )
        .unwrap();
        // Two rows of two. Window [50, 150) straddles both rows.
        let visible = render(&result, 50, 100);
        let indices: Vec<_> = visible.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert_eq!(visible[0].y, -50);
        assert_eq!(visible[2].y, 50);

        // Window [100, 200) sees only the second row.
        let visible = render(&result, 100, 100);
        let indices: Vec<_> = visible.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![2, 3]);
        assert_eq!(visible[0].y, 0);
    }

    #[test]
    fn test_content_taller_than_viewport_reports_full_height() {
        let frame = grid_of(&[300, 300, 300, 300]).layout(Rect::new(0, 0, 300, 200)).unwrap();
        assert_eq!(frame.content.size.height, 600);
        assert_eq!(frame.max_scroll, 400);
    }

    #[test]
    fn test_short_content_fills_viewport() {
        let frame = grid_of(&[50]).layout(Rect::new(0, 0, 300, 200)).unwrap();
        assert_eq!(frame.content.size.height, 200);
        assert_eq!(frame.max_scroll, 0);
        assert_eq!(frame.visible.len(), 1);
    }

    #[test]
    fn test_fixed_offset_is_clamped() {
        let frame = grid_of(&[250, 250, 250, 250])
            .scroll_offset(10_000)
            .layout(Rect::new(0, 0, 300, 200))
            .unwrap();
        assert_eq!(frame.offset, 300);
        let indices: Vec<_> = frame.visible.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![2, 3]);
    }

    #[test]
    fn test_state_sync() {
        let mut state = ScrollState::new();
        let bounds = Rect::new(0, 0, 300, 200);
        let heights = [250, 250, 250, 250];

        let children: Vec<_> = heights.iter().map(|&h| BoxElement::new(h)).collect();
        let frame = ScrollGrid::from_state(&state, StaggeredGrid::new(Dp(150.0)))
            .extend(children.clone())
            .layout(bounds)
            .unwrap();
        assert_eq!(frame.offset, 0);
        assert_eq!(state.max.get(), 300);

        state.apply(ScrollAction::ScrollBy(120));
        let frame = ScrollGrid::from_state(&state, StaggeredGrid::new(Dp(150.0)))
            .extend(children)
            .layout(bounds)
            .unwrap();
        assert_eq!(frame.offset, 120);
        assert_eq!(frame.visible[0].y, -120);
    }

    #[test]
    fn test_viewport_origin_applied() {
        let frame = grid_of(&[100]).layout(Rect::new(10, 20, 300, 200)).unwrap();
        assert_eq!((frame.visible[0].x, frame.visible[0].y), (10, 20));
        assert_eq!((frame.content.children[0].x, frame.content.children[0].y), (0, 0));
    }
}
