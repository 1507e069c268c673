//! Hover / pin / touch state for a grid of detail cards.
//!
//! A card grid opens one popover for its active card. Desktop pointers open
//! on hover and close once the pointer leaves the card (with a little pad)
//! unless it moved onto the popover itself. Pinnable grids toggle a pin on
//! click. Touch input opens a card in touch mode, which only closes via the
//! backdrop, Escape, or tapping the same card again.

use crate::constants::HOVER_RECT_PAD_PX;
use crate::geometry::Rect;
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    Closed,
    Hovering(usize),
    Pinned(usize),
    Touch(usize),
}

impl HoverState {
    pub fn active(self) -> Option<usize> {
        match self {
            HoverState::Closed => None,
            HoverState::Hovering(i) | HoverState::Pinned(i) | HoverState::Touch(i) => Some(i),
        }
    }

    pub fn is_touch(self) -> bool {
        matches!(self, HoverState::Touch(_))
    }
}

#[derive(Debug)]
pub struct CardHover {
    state: HoverState,
    card_rect: Option<Rect>,
    over_overlay: bool,
    pinnable: bool,
    pad: f32,
}

impl CardHover {
    /// `pinnable` grids pin on click and ignore hover on narrow viewports.
    pub fn new(pinnable: bool) -> Self {
        Self {
            state: HoverState::Closed,
            card_rect: None,
            over_overlay: false,
            pinnable,
            pad: HOVER_RECT_PAD_PX,
        }
    }

    pub fn state(&self) -> HoverState {
        self.state
    }

    pub fn active(&self) -> Option<usize> {
        self.state.active()
    }

    pub fn card_rect(&self) -> Option<Rect> {
        self.card_rect
    }

    /// Touch and pinned cards ask for a tap-away backdrop.
    pub fn wants_backdrop(&self) -> bool {
        matches!(self.state, HoverState::Touch(_) | HoverState::Pinned(_))
    }

    fn set(&mut self, next: HoverState) -> bool {
        if next == self.state {
            return false;
        }
        log::debug!("[hover] {:?} -> {:?}", self.state, next);
        self.state = next;
        if next == HoverState::Closed {
            self.card_rect = None;
        }
        true
    }

    pub fn pointer_enter(&mut self, idx: usize, rect: Rect, narrow: bool) -> bool {
        match self.state {
            HoverState::Touch(_) | HoverState::Pinned(_) => return false,
            _ if self.pinnable && narrow => return false,
            _ => {}
        }
        self.card_rect = Some(rect);
        self.set(HoverState::Hovering(idx))
    }

    /// Close a hover once the pointer strays outside the padded card rect,
    /// unless it is over the popover panel.
    pub fn pointer_move(&mut self, p: Vec2) -> bool {
        if !matches!(self.state, HoverState::Hovering(_)) {
            return false;
        }
        let Some(rect) = self.card_rect else {
            return false;
        };
        if !rect.contains_padded(p, self.pad) && !self.over_overlay {
            return self.close_all();
        }
        false
    }

    pub fn grid_leave(&mut self) -> bool {
        if matches!(self.state, HoverState::Hovering(_)) && !self.over_overlay {
            return self.close_all();
        }
        false
    }

    /// Click on a card of a pinnable grid.
    pub fn click(&mut self, idx: usize, rect: Rect, narrow: bool) -> bool {
        if !self.pinnable {
            return false;
        }
        self.card_rect = Some(rect);
        if narrow {
            if self.active() == Some(idx) {
                self.close_all()
            } else {
                self.set(HoverState::Touch(idx))
            }
        } else if self.state == HoverState::Pinned(idx) {
            self.close_all()
        } else {
            self.set(HoverState::Pinned(idx))
        }
    }

    pub fn touch_start(&mut self, idx: usize, rect: Rect) -> bool {
        self.card_rect = Some(rect);
        self.set(HoverState::Touch(idx))
    }

    pub fn set_over_overlay(&mut self, over: bool) {
        self.over_overlay = over;
    }

    /// Refresh the active card's rect after scroll/resize. An unmounted card
    /// keeps the last known rect.
    pub fn remeasure(&mut self, rect: Option<Rect>) {
        if self.active().is_some() {
            if let Some(r) = rect {
                self.card_rect = Some(r);
            }
        }
    }

    pub fn close_all(&mut self) -> bool {
        self.over_overlay = false;
        self.set(HoverState::Closed)
    }
}
