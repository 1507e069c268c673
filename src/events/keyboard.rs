use crate::dom;
use crate::nav::NavState;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[inline]
pub fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

// Escape also folds the mobile menu; popovers register their own Escape
// handler for as long as they are open.
pub fn wire_menu_escape(nav: Rc<RefCell<NavState>>) {
    if let Some(window) = web::window() {
        dom::listen_forever(&window, "keydown", move |ev: web::KeyboardEvent| {
            if is_dismiss_key(&ev.key()) {
                nav.borrow_mut().close_menu();
            }
        });
    }
}
