//! Card grids with a detail popover.
//!
//! Every `[data-card-grid]` gets its own [`CardHover`] state machine, its own
//! [`Popover`] and its own overlay DOM. Card-level listeners live for the
//! whole page; the window listeners a popover needs while it is open
//! (scroll, resize, pointer tracking, Escape) are held in a
//! [`ListenerScope`] that is dropped on every close path.

use crate::constants::*;
use crate::dom::{self, ListenerScope};
use crate::events::{client_point, is_dismiss_key, touch_point};
use crate::overlay::PopoverView;
use crate::shared::{with_shared, with_weak, Shared};
use folio_core::{CardHover, HoverState, Mode, Phase, Popover, PopoverConfig};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

const TOUCH_HINT: &str = "Tap outside or press Esc to close";
const PINNED_HINT: &str = "Click card again to unpin, or press Esc to close";

pub struct CardGrid {
    grid: web::Element,
    section: Option<web::Element>,
    view: PopoverView,
    hover: CardHover,
    popover: Popover,
    /// Card index whose details are in the panel.
    shown: Option<usize>,
    hint: Option<&'static str>,
    open_scope: Option<ListenerScope>,
}

/// Wire every card grid on the page. Returns how many were found; each grid
/// is owned by its own page-lifetime listeners.
pub fn wire_card_grids(document: &web::Document) -> anyhow::Result<usize> {
    let root = document
        .document_element()
        .ok_or_else(|| anyhow::anyhow!("no document element"))?;
    let grids = dom::elements(&root, CARD_GRID_SELECTOR);
    for grid in &grids {
        let shared = CardGrid::mount(document, grid.clone())?;
        wire_grid(&shared);
    }
    Ok(grids.len())
}

impl CardGrid {
    fn mount(document: &web::Document, grid: web::Element) -> anyhow::Result<Shared<CardGrid>> {
        let pinnable = grid.has_attribute(ATTR_PINNABLE);
        let mode = match grid.get_attribute(ATTR_POPOVER_MODE).as_deref() {
            Some("anchor") => Mode::Anchor,
            _ => Mode::Center,
        };
        let section = grid.closest("section").ok().flatten();
        let view = PopoverView::mount(document)?;
        view.set_capture_pointer(true);
        log::info!(
            "[hover] grid in #{} mode={:?} pinnable={}",
            section.as_ref().map(|s| s.id()).unwrap_or_default(),
            mode,
            pinnable
        );
        Ok(Rc::new(RefCell::new(CardGrid {
            grid,
            section,
            view,
            hover: CardHover::new(pinnable),
            popover: Popover::new(mode, PopoverConfig::default()),
            shown: None,
            hint: None,
            open_scope: None,
        })))
    }

    fn card(&self, idx: usize) -> Option<web::Element> {
        self.grid
            .query_selector(&format!("[{}=\"{}\"]", ATTR_IDX, idx))
            .ok()
            .flatten()
    }

    fn narrow(&self) -> bool {
        dom::viewport().is_narrow(self.popover.config().breakpoint)
    }

    fn hint_for_state(&self) -> Option<&'static str> {
        match self.hover.state() {
            HoverState::Touch(_) => Some(TOUCH_HINT),
            HoverState::Pinned(_) => Some(PINNED_HINT),
            _ => None,
        }
    }

    fn fill_content(&mut self, idx: usize) {
        let hint = self.hint_for_state();
        let Some(card) = self.card(idx) else {
            return;
        };
        let title = card.get_attribute(ATTR_TITLE).unwrap_or_default();
        let mut html = card
            .query_selector(CARD_DETAIL_SELECTOR)
            .ok()
            .flatten()
            .map(|d| d.inner_html())
            .unwrap_or_default();
        if let Some(h) = hint {
            html.push_str(&format!("<div class=\"popover-hint\">{}</div>", h));
        }
        self.view.set_content(&title, &html);
        self.hint = hint;
    }

    /// Bring popover and overlay DOM in line with the hover state.
    fn sync(&mut self, pointer: Option<Vec2>, weak: &Weak<RefCell<CardGrid>>) {
        let active = self.hover.active();
        if active != self.shown {
            match active {
                None => self.close_popover(),
                Some(idx) => self.open_popover(idx, pointer, weak),
            }
        } else if let Some(idx) = active {
            // hover -> pin keeps the card but swaps the hint
            if self.hint_for_state() != self.hint {
                self.fill_content(idx);
                self.remeasure_panel();
            }
        }
        self.relayout();
    }

    fn open_popover(&mut self, idx: usize, pointer: Option<Vec2>, weak: &Weak<RefCell<CardGrid>>) {
        if self.shown.is_some() {
            // switching cards is a fresh open: new anchor, new measurement
            self.popover.begin_close();
            self.popover.finish_close();
        }
        self.fill_content(idx);
        let backdrop = self.hover.wants_backdrop();
        match self.popover.mode() {
            Mode::Anchor => {
                let anchor = pointer
                    .or_else(|| self.hover.card_rect().map(|r| r.center()))
                    .unwrap_or_else(|| dom::viewport().center());
                self.popover.open_at(anchor, backdrop);
            }
            Mode::Center => {
                let container = self.section.as_ref().and_then(dom::rect_of);
                self.popover.open_over(container, backdrop);
            }
        }
        let vp = dom::viewport();
        self.view.show_for_measuring(vp, self.popover.config());
        self.remeasure_panel();
        if self.open_scope.is_none() {
            self.open_scope = Some(acquire_open_listeners(weak.clone()));
        }
        self.shown = Some(idx);
    }

    fn remeasure_panel(&mut self) {
        match self.view.measure() {
            Some(size) => self.popover.measured(size),
            None => log::debug!("[popover] panel not measurable yet"),
        }
    }

    fn close_popover(&mut self) {
        if self.popover.begin_close() {
            // listeners go first so nothing fires against a hidden panel
            self.open_scope = None;
            self.view.hide();
            self.popover.finish_close();
        }
        self.shown = None;
        self.hint = None;
    }

    /// Re-read geometry after scroll/resize and re-render.
    fn relayout(&mut self) {
        if !self.popover.is_open() {
            return;
        }
        if let Some(idx) = self.hover.active() {
            let rect = self.card(idx).as_ref().and_then(dom::rect_of);
            self.hover.remeasure(rect);
        }
        self.popover.track(self.section.as_ref().and_then(dom::rect_of));
        if self.popover.phase() == Phase::Opening {
            self.remeasure_panel();
        }
        self.popover.set_backdrop(self.hover.wants_backdrop());

        let vp = dom::viewport();
        match self.popover.placement(vp) {
            Some(p) => {
                log::debug!("[popover] place {:?} at ({:.0},{:.0})", p.layout, p.left, p.top);
                self.view
                    .render(&p, self.popover.shows_backdrop(vp), self.popover.config());
            }
            // geometry missing: keep the panel mounted but invisible
            None => self.view.show_for_measuring(vp, self.popover.config()),
        }
    }
}

fn acquire_open_listeners(weak: Weak<RefCell<CardGrid>>) -> ListenerScope {
    let mut scope = ListenerScope::new();
    let Some(window) = web::window() else {
        return scope;
    };

    let w = weak.clone();
    scope.listen(&window, "resize", false, move |_: web::Event| {
        with_weak(&w, |g, _| g.relayout());
    });
    // capture: scrolls in nested regions do not bubble to window
    let w = weak.clone();
    scope.listen(&window, "scroll", true, move |_: web::Event| {
        with_weak(&w, |g, _| g.relayout());
    });
    let w = weak.clone();
    scope.listen(&window, "mousemove", false, move |ev: web::MouseEvent| {
        let p = client_point(&ev);
        with_weak(&w, |g, wk| {
            if g.hover.pointer_move(p) {
                g.sync(Some(p), wk);
            }
        });
    });
    let w = weak;
    scope.listen(&window, "keydown", false, move |ev: web::KeyboardEvent| {
        if !is_dismiss_key(&ev.key()) {
            return;
        }
        with_weak(&w, |g, wk| {
            if g.hover.close_all() {
                log::info!("[hover] closed via Escape");
                g.sync(None, wk);
            }
        });
    });
    scope
}

fn wire_grid(shared: &Shared<CardGrid>) {
    let g = shared.borrow();
    let pinnable = g.grid.has_attribute(ATTR_PINNABLE);

    for card in dom::elements(&g.grid, CARD_SELECTOR) {
        let Some(idx) = card
            .get_attribute(ATTR_IDX)
            .and_then(|v| v.trim().parse::<usize>().ok())
        else {
            log::warn!("[hover] card without numeric {}", ATTR_IDX);
            continue;
        };

        let (s, el) = (shared.clone(), card.clone());
        dom::listen_forever(&card, "mouseenter", move |ev: web::MouseEvent| {
            let Some(rect) = dom::rect_of(&el) else {
                return;
            };
            let p = client_point(&ev);
            with_shared(&s, |g, wk| {
                let narrow = g.narrow();
                if g.hover.pointer_enter(idx, rect, narrow) {
                    g.sync(Some(p), wk);
                }
            });
        });

        if pinnable {
            let (s, el) = (shared.clone(), card.clone());
            dom::listen_forever(&card, "click", move |ev: web::MouseEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                let Some(rect) = dom::rect_of(&el) else {
                    return;
                };
                let p = client_point(&ev);
                with_shared(&s, |g, wk| {
                    let narrow = g.narrow();
                    if g.hover.click(idx, rect, narrow) {
                        log::info!("[hover] click card {} -> {:?}", idx, g.hover.state());
                        g.sync(Some(p), wk);
                    }
                });
            });
        } else {
            let (s, el) = (shared.clone(), card.clone());
            dom::listen_forever(&card, "touchstart", move |ev: web::TouchEvent| {
                let Some(rect) = dom::rect_of(&el) else {
                    return;
                };
                let p = touch_point(&ev);
                with_shared(&s, |g, wk| {
                    if g.hover.touch_start(idx, rect) {
                        g.sync(p, wk);
                    }
                });
            });
        }
    }

    let s = shared.clone();
    dom::listen_forever(&g.grid, "mouseleave", move |_: web::MouseEvent| {
        with_shared(&s, |g, wk| {
            if g.hover.grid_leave() {
                g.sync(None, wk);
            }
        });
    });

    for event in ["mousedown", "touchstart"] {
        let s = shared.clone();
        dom::listen_forever(g.view.backdrop(), event, move |_: web::Event| {
            with_shared(&s, |g, wk| {
                if g.hover.close_all() {
                    log::info!("[hover] closed via backdrop");
                    g.sync(None, wk);
                }
            });
        });
    }

    for (event, over) in [("pointerenter", true), ("pointerleave", false)] {
        let s = shared.clone();
        dom::listen_forever(g.view.panel(), event, move |_: web::Event| {
            with_shared(&s, |g, _| g.hover.set_over_overlay(over));
        });
    }
}
