//! Lifecycle of a single popover instance.
//!
//! `Closed -> Opening -> Open -> Closing -> Closed`. `Opening` lasts one
//! measurement pass: the panel is mounted invisibly, measured, and only then
//! placed. `Closing` is where the owner tears down its listeners before the
//! state is discarded.

use crate::config::PopoverConfig;
use crate::geometry::{Rect, Size, Viewport};
use crate::placement::{place, Placement, Target};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Closed,
    Opening,
    Open,
    Closing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Anchor,
    Center,
}

pub struct Popover {
    mode: Mode,
    phase: Phase,
    target: Option<Target>,
    panel: Option<Size>,
    backdrop: bool,
    config: PopoverConfig,
}

impl Popover {
    pub fn new(mode: Mode, config: PopoverConfig) -> Self {
        Self {
            mode,
            phase: Phase::Closed,
            target: None,
            panel: None,
            backdrop: false,
            config,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        matches!(self.phase, Phase::Opening | Phase::Open)
    }

    pub fn config(&self) -> &PopoverConfig {
        &self.config
    }

    /// Open at an anchor point. While already open the first anchor is kept,
    /// so a wandering pointer does not drag the panel around.
    pub fn open_at(&mut self, anchor: Vec2, backdrop: bool) {
        let keep = self.is_open() && matches!(self.target, Some(Target::Anchor(_)));
        if !keep {
            self.target = Some(Target::Anchor(anchor));
        }
        self.begin_open(backdrop);
    }

    /// Open centered over a container. `None` means the container is not
    /// mounted yet; the popover stays unrendered until [`Self::track`]
    /// supplies geometry.
    pub fn open_over(&mut self, container: Option<Rect>, backdrop: bool) {
        self.target = container.map(Target::Container);
        self.begin_open(backdrop);
    }

    fn begin_open(&mut self, backdrop: bool) {
        self.backdrop = backdrop;
        if self.phase == Phase::Closed || self.phase == Phase::Closing {
            self.panel = None;
            self.phase = Phase::Opening;
            log::info!("[popover] opening ({:?})", self.mode);
        }
    }

    /// Backdrop request may change while open (e.g. switching into touch mode).
    pub fn set_backdrop(&mut self, backdrop: bool) {
        self.backdrop = backdrop;
    }

    /// Record the panel's measured size; completes the opening pass.
    pub fn measured(&mut self, size: Size) {
        if !self.is_open() {
            return;
        }
        self.panel = Some(size);
        if self.phase == Phase::Opening {
            self.phase = Phase::Open;
            log::info!(
                "[popover] open, panel {:.0}x{:.0}",
                size.width,
                size.height
            );
        }
    }

    /// Re-read container geometry after scroll/resize. Anchor targets are
    /// fixed for the lifetime of the open popover and ignore this.
    pub fn track(&mut self, container: Option<Rect>) {
        if !self.is_open() || self.mode != Mode::Center {
            return;
        }
        if let Some(rect) = container {
            self.target = Some(Target::Container(rect));
        }
    }

    /// Placement for the current pass, or `None` when nothing should render:
    /// closed, not yet measured, or target geometry unknown.
    pub fn placement(&self, viewport: Viewport) -> Option<Placement> {
        if self.phase != Phase::Open {
            return None;
        }
        let target = self.target.as_ref()?;
        let panel = self.panel?;
        Some(place(target, viewport, panel, &self.config))
    }

    pub fn shows_backdrop(&self, viewport: Viewport) -> bool {
        self.is_open() && (self.backdrop || viewport.is_narrow(self.config.breakpoint))
    }

    /// Start closing. Returns `true` when the caller must release listeners
    /// and then call [`Self::finish_close`].
    pub fn begin_close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.phase = Phase::Closing;
        true
    }

    pub fn finish_close(&mut self) {
        if self.phase == Phase::Closing {
            log::info!("[popover] closed");
        }
        self.phase = Phase::Closed;
        self.target = None;
        self.panel = None;
        self.backdrop = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measurement_outside_open_is_ignored() {
        let mut p = Popover::new(Mode::Anchor, PopoverConfig::default());
        p.measured(Size::new(100.0, 100.0));
        assert_eq!(p.phase(), Phase::Closed);
        assert!(p.placement(Viewport::new(1200.0, 900.0)).is_none());
    }
}
