// Host-side tests for listener-owned state.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod shared {
    include!("../src/shared.rs");
}

use shared::*;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

#[derive(Default)]
struct Grid {
    opened: u32,
    scoped: Option<Box<dyn FnMut() -> bool>>,
}

#[test]
fn page_listener_keeps_state_alive_after_setup_returns() {
    let mut on_enter: Box<dyn FnMut() -> bool> = {
        let grid: Shared<Grid> = Rc::new(RefCell::new(Grid::default()));
        let s = grid.clone();
        Box::new(move || with_shared(&s, |g, _| g.opened += 1))
        // setup's own handle drops here
    };
    assert!(on_enter());
    assert!(on_enter());
}

#[test]
fn state_reached_only_through_weak_handles_is_gone() {
    let mut on_enter: Box<dyn FnMut() -> bool> = {
        let grid: Shared<Grid> = Rc::new(RefCell::new(Grid::default()));
        let w = Rc::downgrade(&grid);
        Box::new(move || with_weak(&w, |g, _| g.opened += 1))
    };
    assert!(!on_enter(), "nothing owns the state any more");
}

#[test]
fn scoped_listener_stored_in_state_does_not_keep_it_alive() {
    let grid: Shared<Grid> = Rc::new(RefCell::new(Grid::default()));
    with_shared(&grid, |g, wk| {
        let w: Weak<RefCell<Grid>> = wk.clone();
        g.scoped = Some(Box::new(move || with_weak(&w, |g, _| g.opened += 1)));
    });
    assert_eq!(Rc::strong_count(&grid), 1);

    let mut scoped = grid.borrow_mut().scoped.take().expect("listener stored");
    assert!(scoped());
    assert_eq!(grid.borrow().opened, 1);

    drop(grid);
    assert!(!scoped());
}

#[test]
fn re_entrant_event_is_skipped() {
    let grid: Shared<Grid> = Rc::new(RefCell::new(Grid::default()));
    let _held = grid.borrow_mut();
    assert!(!with_shared(&grid, |g, _| g.opened += 1));
}
