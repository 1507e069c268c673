// Host-side tests for the card hover/pin/touch state machine.

use folio_core::*;
use glam::Vec2;

fn card(i: usize) -> Rect {
    Rect::new(100.0 + 400.0 * i as f32, 200.0, 360.0, 180.0)
}

#[test]
fn hover_opens_and_leaving_the_padded_rect_closes() {
    let mut h = CardHover::new(false);
    assert!(h.pointer_enter(0, card(0), false));
    assert_eq!(h.state(), HoverState::Hovering(0));

    assert!(!h.pointer_move(Vec2::new(97.0, 250.0)), "inside pad keeps it open");
    assert!(h.pointer_move(Vec2::new(90.0, 250.0)));
    assert_eq!(h.state(), HoverState::Closed);
    assert!(h.card_rect().is_none());
}

#[test]
fn pointer_over_the_overlay_keeps_a_hover_open() {
    let mut h = CardHover::new(false);
    h.pointer_enter(1, card(1), false);
    h.set_over_overlay(true);
    assert!(!h.pointer_move(Vec2::new(10.0, 10.0)));
    assert!(!h.grid_leave());
    assert_eq!(h.active(), Some(1));

    h.set_over_overlay(false);
    assert!(h.grid_leave());
    assert_eq!(h.active(), None);
}

#[test]
fn touch_mode_ignores_hover_and_pointer_moves() {
    let mut h = CardHover::new(false);
    assert!(h.touch_start(2, card(2)));
    assert!(h.wants_backdrop());
    assert!(!h.pointer_enter(0, card(0), false));
    assert!(!h.pointer_move(Vec2::new(0.0, 0.0)));
    assert!(!h.grid_leave());
    assert_eq!(h.state(), HoverState::Touch(2));

    assert!(h.close_all());
    assert!(!h.wants_backdrop());
}

#[test]
fn desktop_click_pins_and_unpins() {
    let mut h = CardHover::new(true);
    h.pointer_enter(0, card(0), false);
    assert!(!h.wants_backdrop());
    assert!(h.click(1, card(1), false));
    assert_eq!(h.state(), HoverState::Pinned(1));
    assert!(h.wants_backdrop());

    // pinned cards ignore hover, pointer moves and grid leave
    assert!(!h.pointer_enter(0, card(0), false));
    assert!(!h.pointer_move(Vec2::new(0.0, 0.0)));
    assert!(!h.grid_leave());

    assert!(h.click(0, card(0), false));
    assert_eq!(h.state(), HoverState::Pinned(0));
    assert!(h.click(0, card(0), false));
    assert_eq!(h.state(), HoverState::Closed);
}

#[test]
fn narrow_click_toggles_touch_mode() {
    let mut h = CardHover::new(true);
    assert!(!h.pointer_enter(0, card(0), true), "no hover on narrow viewports");

    assert!(h.click(0, card(0), true));
    assert_eq!(h.state(), HoverState::Touch(0));
    assert!(h.click(1, card(1), true));
    assert_eq!(h.state(), HoverState::Touch(1));
    assert!(h.click(1, card(1), true));
    assert_eq!(h.state(), HoverState::Closed);
}

#[test]
fn clicks_are_ignored_by_non_pinnable_grids() {
    let mut h = CardHover::new(false);
    assert!(!h.click(0, card(0), false));
    assert_eq!(h.state(), HoverState::Closed);
}

#[test]
fn remeasure_tracks_the_active_card_and_keeps_rect_when_unmounted() {
    let mut h = CardHover::new(false);
    h.remeasure(Some(card(0)));
    assert!(h.card_rect().is_none(), "closed grids track nothing");

    h.pointer_enter(0, card(0), false);
    let moved = Rect::new(100.0, 50.0, 360.0, 180.0);
    h.remeasure(Some(moved));
    assert_eq!(h.card_rect(), Some(moved));
    h.remeasure(None);
    assert_eq!(h.card_rect(), Some(moved));

    // the pointer did not move but the card scrolled away from under it
    assert!(h.pointer_move(Vec2::new(200.0, 300.0)));
}
