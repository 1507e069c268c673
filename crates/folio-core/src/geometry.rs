//! Viewport-relative geometry snapshots.
//!
//! Every value here is a read-only measurement taken for a single layout
//! pass. Nothing is retained between passes.

use crate::constants::MOBILE_BREAKPOINT_PX;
use glam::Vec2;

/// Size of the display surface in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Narrow viewports always get the centered modal layout.
    #[inline]
    pub fn is_narrow(&self, breakpoint: f32) -> bool {
        self.width < breakpoint
    }

    #[inline]
    pub fn is_mobile(&self) -> bool {
        self.is_narrow(MOBILE_BREAKPOINT_PX)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Measured `{width, height}` of a mounted element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Bounding box in viewport coordinates, as returned by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    /// Vertical midpoint; used by the section fader.
    #[inline]
    pub fn mid_y(&self) -> f32 {
        self.top + self.height * 0.5
    }

    /// Point-in-rect test with `pad` pixels of slack on every side.
    pub fn contains_padded(&self, p: Vec2, pad: f32) -> bool {
        p.x >= self.left - pad
            && p.x <= self.right() + pad
            && p.y >= self.top - pad
            && p.y <= self.bottom() + pad
    }

    /// True when `inner` lies inside this rect shrunk by `margin` on every side.
    pub fn encloses_with_margin(&self, inner: &Rect, margin: f32) -> bool {
        const EPS: f32 = 1e-3;
        inner.left >= self.left + margin - EPS
            && inner.right() <= self.right() - margin + EPS
            && inner.top >= self.top + margin - EPS
            && inner.bottom() <= self.bottom() - margin + EPS
    }
}

impl From<Viewport> for Rect {
    fn from(v: Viewport) -> Self {
        Rect::new(0.0, 0.0, v.width, v.height)
    }
}
