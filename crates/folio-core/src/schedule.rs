//! Cooperative scheduling helpers.
//!
//! Scroll work is gated to one pending animation frame; the snap-to-section
//! behaviour waits for scrolling to settle. Both are plain state, the web
//! crate owns the actual `requestAnimationFrame` and timer handles.

use instant::Instant;
use std::time::Duration;

/// At most one recompute pending per display frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Returns `true` when the caller should schedule a frame callback;
    /// `false` when one is already queued.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Called from the frame callback. Returns whether a request was pending.
    pub fn take(&mut self) -> bool {
        std::mem::replace(&mut self.pending, false)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Trailing-edge debounce: every `touch` pushes the deadline out, and `poll`
/// fires once after the last touch has aged past the delay.
#[derive(Clone, Debug)]
pub struct Debounce {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Register activity at `now`; returns the new deadline.
    pub fn touch(&mut self, now: Instant) -> Instant {
        let deadline = now + self.delay;
        self.deadline = Some(deadline);
        deadline
    }

    /// `true` exactly once, on the first poll at or after the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(d) if now >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Timer-driven variant of `poll`: the host timer already waited out the
    /// delay, so this only disarms. `false` when cancelled in the meantime.
    pub fn fire(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }
}
