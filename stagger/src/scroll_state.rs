//! Scroll State
//!
//! Everything a scroll host needs to remember between layout passes: the
//! offset, the scroll range from the last pass, the viewport bounds, and
//! whether a drag is in progress. The layout engine never sees any of it.

use std::cell::Cell;

use crate::event::PointerEvent;
use crate::primitives::{Point, Rect};

/// Pixels per wheel line.
pub const DEFAULT_WHEEL_LINE_HEIGHT: i32 = 40;

/// An action on a scroll container, produced by event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAction {
    /// Move the offset by a delta (positive = towards the end).
    ScrollBy(i32),
    /// Jump to an absolute offset.
    ScrollTo(i32),
    /// Pointer went down at this Y; arm a drag.
    DragStart(i32),
    /// Pointer moved to this Y during a drag.
    DragMove(i32),
    /// Pointer released.
    DragEnd,
    /// Gesture cancelled by the platform.
    DragCancel,
}

/// Whether the user is currently dragging the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Pointer Y at the last processed drag event.
        last_y: i32,
    },
}

/// Encapsulates all scroll state for a single scroll container.
///
/// `max` and `viewport` are written during layout through `Cell`, since
/// layout only has a shared reference to the state.
#[derive(Debug)]
pub struct ScrollState {
    /// Current scroll offset (0 = top).
    pub offset: i32,
    /// Maximum scroll offset (set from the layout pass).
    pub max: Cell<i32>,
    /// Viewport bounds (set from the layout pass).
    pub viewport: Cell<Rect>,
    drag: DragState,
    /// Pointer Y of a press that has not moved yet.
    press_y: Option<i32>,
    wheel_line_height: i32,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            offset: 0,
            // Unknown until the first layout pass.
            max: Cell::new(i32::MAX),
            viewport: Cell::new(Rect::ZERO),
            drag: DragState::Idle,
            press_y: None,
            wheel_line_height: DEFAULT_WHEEL_LINE_HEIGHT,
        }
    }

    pub fn with_wheel_line_height(mut self, pixels: i32) -> Self {
        self.wheel_line_height = pixels;
        self
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// A press is held, whether or not it has moved yet.
    pub fn is_pressed(&self) -> bool {
        self.press_y.is_some() || self.is_dragging()
    }

    /// The offset clamped to the current scroll range.
    pub fn effective_offset(&self) -> i32 {
        self.offset.clamp(0, self.max.get().max(0))
    }

    // =====================================================================
    // Scroll operations
    // =====================================================================

    /// Apply a scroll action (call from update()).
    pub fn apply(&mut self, action: ScrollAction) {
        match action {
            ScrollAction::ScrollBy(delta) => self.scroll_by(delta),
            ScrollAction::ScrollTo(offset) => self.scroll_to(offset),
            ScrollAction::DragStart(y) => self.start_drag(y),
            ScrollAction::DragMove(y) => self.drag_to(y),
            ScrollAction::DragEnd => self.end_drag(),
            ScrollAction::DragCancel => self.cancel_drag(),
        }
    }

    /// Scroll by a delta (positive = towards the end of the content).
    pub fn scroll_by(&mut self, delta: i32) {
        self.scroll_to(self.effective_offset().saturating_add(delta));
    }

    /// Scroll to an absolute offset.
    pub fn scroll_to(&mut self, offset: i32) {
        self.offset = offset.clamp(0, self.max.get().max(0));
    }

    /// Record a press. The state stays `Idle` until the pointer moves.
    pub fn start_drag(&mut self, y: i32) {
        self.drag = DragState::Idle;
        self.press_y = Some(y);
    }

    /// Content follows the pointer.
    ///
    /// The first move away from the press point enters `Dragging`. Moves
    /// with no press held are ignored.
    pub fn drag_to(&mut self, y: i32) {
        let last_y = match (self.drag, self.press_y) {
            (DragState::Dragging { last_y }, _) => last_y,
            (DragState::Idle, Some(press_y)) if press_y != y => press_y,
            _ => return,
        };
        self.press_y = None;
        self.scroll_by(last_y.saturating_sub(y));
        self.drag = DragState::Dragging { last_y: y };
    }

    /// Dragging -> Idle.
    pub fn end_drag(&mut self) {
        self.drag = DragState::Idle;
        self.press_y = None;
    }

    /// Dragging -> Idle. The offset reached so far is kept.
    pub fn cancel_drag(&mut self) {
        self.end_drag();
    }

    // =====================================================================
    // Input
    // =====================================================================

    /// Translate a pointer event into a scroll action.
    ///
    /// Returns `None` if this container does not consume the event.
    /// Presses and wheel events only count inside the viewport; once a
    /// press is held, moves and releases are consumed wherever they
    /// happen.
    pub fn handle_pointer(&self, event: &PointerEvent) -> Option<ScrollAction> {
        match *event {
            PointerEvent::Pressed { position } if self.contains(position) => {
                Some(ScrollAction::DragStart(position.y))
            }
            PointerEvent::Moved { position } if self.is_pressed() => {
                Some(ScrollAction::DragMove(position.y))
            }
            PointerEvent::Released { .. } if self.is_pressed() => Some(ScrollAction::DragEnd),
            PointerEvent::Cancelled if self.is_pressed() => Some(ScrollAction::DragCancel),
            PointerEvent::WheelScrolled { delta, position } if self.contains(position) => {
                let pixels = delta.to_pixels(self.wheel_line_height);
                Some(ScrollAction::ScrollBy(pixels.saturating_neg()))
            }
            _ => None,
        }
    }

    // =====================================================================
    // Layout sync
    // =====================================================================

    /// Record the scroll range from a layout pass.
    pub fn sync(&self, content_height: i32, viewport: Rect) {
        self.max.set(content_height.saturating_sub(viewport.height).max(0));
        self.viewport.set(viewport);
    }

    /// Check if a point is within the viewport.
    pub fn contains(&self, point: Point) -> bool {
        self.viewport.get().contains(point)
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::ScrollDelta;

    fn synced(content: i32, viewport: i32) -> ScrollState {
        let state = ScrollState::new();
        state.sync(content, Rect::new(0, 0, 300, viewport));
        state
    }

    #[test]
    fn scroll_range_clamps() {
        let mut state = synced(500, 200);
        assert_eq!(state.max.get(), 300);

        state.scroll_by(50);
        assert_eq!(state.offset, 50);

        state.scroll_by(1000);
        assert_eq!(state.offset, 300);

        state.scroll_by(-1000);
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn short_content_pins_to_zero() {
        let mut state = synced(100, 200);
        assert_eq!(state.max.get(), 0);
        state.scroll_to(40);
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn effective_offset_follows_shrinking_content() {
        let mut state = synced(1000, 200);
        state.scroll_to(700);
        state.sync(500, Rect::new(0, 0, 300, 200));
        assert_eq!(state.effective_offset(), 300);
    }

    #[test]
    fn drag_state_machine() {
        let mut state = synced(1000, 200);
        assert_eq!(state.drag_state(), DragState::Idle);

        // Moves while idle do nothing.
        state.drag_to(50);
        assert_eq!(state.offset, 0);

        state.apply(ScrollAction::DragStart(150));
        assert_eq!(state.drag_state(), DragState::Idle);
        assert!(state.is_pressed());

        // Pointer moves up by 100: content follows, offset grows.
        state.apply(ScrollAction::DragMove(50));
        assert_eq!(state.offset, 100);
        assert_eq!(state.drag_state(), DragState::Dragging { last_y: 50 });

        state.apply(ScrollAction::DragMove(80));
        assert_eq!(state.offset, 70);

        state.apply(ScrollAction::DragEnd);
        assert_eq!(state.drag_state(), DragState::Idle);
        assert_eq!(state.offset, 70);
    }

    #[test]
    fn cancel_keeps_offset() {
        let mut state = synced(1000, 200);
        state.apply(ScrollAction::DragStart(100));
        state.apply(ScrollAction::DragMove(60));
        state.apply(ScrollAction::DragCancel);
        assert!(!state.is_dragging());
        assert_eq!(state.offset, 40);
    }

    #[test]
    fn pointer_events_map_to_actions() {
        let mut state = synced(1000, 200);
        let inside = Point::new(10, 10);
        let outside = Point::new(10, 500);

        assert_eq!(state.handle_pointer(&PointerEvent::Pressed { position: outside }), None);
        assert_eq!(state.handle_pointer(&PointerEvent::Moved { position: inside }), None);

        let press = state.handle_pointer(&PointerEvent::Pressed { position: inside });
        assert_eq!(press, Some(ScrollAction::DragStart(10)));
        state.apply(ScrollAction::DragStart(10));

        // Once pressed, moves outside the viewport still count.
        assert_eq!(
            state.handle_pointer(&PointerEvent::Moved { position: outside }),
            Some(ScrollAction::DragMove(500))
        );
        assert_eq!(
            state.handle_pointer(&PointerEvent::Released { position: outside }),
            Some(ScrollAction::DragEnd)
        );
        assert_eq!(state.handle_pointer(&PointerEvent::Cancelled), Some(ScrollAction::DragCancel));
    }

    #[test]
    fn tap_never_enters_dragging() {
        let mut state = synced(1000, 200);
        let at = Point::new(10, 10);

        let press = state.handle_pointer(&PointerEvent::Pressed { position: at });
        state.apply(press.unwrap());
        assert_eq!(state.drag_state(), DragState::Idle);

        // A move that stays on the press point is not a drag either.
        let still = state.handle_pointer(&PointerEvent::Moved { position: at });
        state.apply(still.unwrap());
        assert_eq!(state.drag_state(), DragState::Idle);

        let release = state.handle_pointer(&PointerEvent::Released { position: at });
        state.apply(release.unwrap());
        assert_eq!(state.drag_state(), DragState::Idle);
        assert!(!state.is_pressed());
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn move_after_release_is_ignored() {
        let mut state = synced(1000, 200);
        state.apply(ScrollAction::DragStart(100));
        state.apply(ScrollAction::DragEnd);
        state.apply(ScrollAction::DragMove(0));
        assert_eq!(state.offset, 0);
        assert_eq!(state.drag_state(), DragState::Idle);
        assert_eq!(state.handle_pointer(&PointerEvent::Moved { position: Point::new(1, 1) }), None);
    }

    #[test]
    fn extreme_wheel_delta_saturates() {
        let mut state = synced(1000, 200);
        let huge = PointerEvent::WheelScrolled {
            delta: ScrollDelta::Pixels { y: -1e10 },
            position: Point::new(5, 5),
        };
        let action = state.handle_pointer(&huge).unwrap();
        assert_eq!(action, ScrollAction::ScrollBy(i32::MAX));
        state.apply(action);
        assert_eq!(state.offset, 800);

        let up = PointerEvent::WheelScrolled {
            delta: ScrollDelta::Pixels { y: 1e10 },
            position: Point::new(5, 5),
        };
        state.apply(state.handle_pointer(&up).unwrap());
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn extreme_drag_positions_saturate() {
        let mut state = synced(1000, 200);
        state.apply(ScrollAction::DragStart(i32::MIN));
        state.apply(ScrollAction::DragMove(1));
        assert_eq!(state.offset, 0);

        state.apply(ScrollAction::DragMove(i32::MIN));
        assert_eq!(state.offset, 800);
        assert_eq!(state.drag_state(), DragState::Dragging { last_y: i32::MIN });
    }

    #[test]
    fn wheel_scrolls_inside_viewport() {
        let state = synced(1000, 200);
        let down = PointerEvent::WheelScrolled {
            delta: ScrollDelta::Lines { y: -2.0 },
            position: Point::new(5, 5),
        };
        assert_eq!(state.handle_pointer(&down), Some(ScrollAction::ScrollBy(80)));

        let elsewhere = PointerEvent::WheelScrolled {
            delta: ScrollDelta::Pixels { y: 10.0 },
            position: Point::new(5, 900),
        };
        assert_eq!(state.handle_pointer(&elsewhere), None);
    }
}
