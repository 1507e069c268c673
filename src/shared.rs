// Shared state behind DOM listeners.
// Page-lifetime listeners own an `Rc`; listeners that come and go with an
// open popover hold a `Weak` so they never keep their owner alive.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub type Shared<T> = Rc<RefCell<T>>;

/// Run `f` unless the state is already borrowed, which happens when a DOM
/// call inside a handler dispatches another event synchronously. The
/// `Weak` handed to `f` is for listeners `f` may acquire.
pub fn with_shared<T>(shared: &Shared<T>, f: impl FnOnce(&mut T, &Weak<RefCell<T>>)) -> bool {
    let weak = Rc::downgrade(shared);
    let Ok(mut state) = shared.try_borrow_mut() else {
        log::debug!("[dom] re-entrant event ignored");
        return false;
    };
    f(&mut *state, &weak);
    true
}

/// As [`with_shared`], for scoped listeners. `false` once the owner is gone.
pub fn with_weak<T>(weak: &Weak<RefCell<T>>, f: impl FnOnce(&mut T, &Weak<RefCell<T>>)) -> bool {
    match weak.upgrade() {
        Some(shared) => with_shared(&shared, f),
        None => false,
    }
}
