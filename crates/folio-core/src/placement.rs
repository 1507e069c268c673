//! Overlay positioner.
//!
//! Given what the popover should attach to, the viewport and the panel's
//! measured size, decide where the panel goes. Narrow viewports always get a
//! centered modal; wide viewports either hang the panel off an anchor point
//! (flipping above it when there is no room below) or center it over a
//! container.

use crate::config::PopoverConfig;
use crate::constants::{MOBILE_PANEL_MAX_WIDTH_PX, MOBILE_PANEL_VERTICAL_RESERVE_PX};
use crate::geometry::{Rect, Size, Viewport};
use glam::Vec2;

/// What the panel is positioned relative to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Target {
    /// A fixed point, captured when the popover opened.
    Anchor(Vec2),
    /// A reference element's current bounding box; the panel centers on it.
    Container(Rect),
}

/// Which point of the panel sits at `(left, top)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transform {
    /// Horizontal center of the top edge (panel hangs below).
    TopCenter,
    /// Horizontal center of the bottom edge (panel sits above).
    BottomCenter,
    /// Panel center.
    Center,
}

impl Transform {
    pub fn css(self) -> &'static str {
        match self {
            Transform::TopCenter => "translate(-50%, 0)",
            Transform::BottomCenter => "translate(-50%, -100%)",
            Transform::Center => "translate(-50%, -50%)",
        }
    }

    /// Offset of the panel's top-left corner from `(left, top)`.
    fn origin_offset(self, size: Size) -> Vec2 {
        match self {
            Transform::TopCenter => Vec2::new(-size.width * 0.5, 0.0),
            Transform::BottomCenter => Vec2::new(-size.width * 0.5, -size.height),
            Transform::Center => Vec2::new(-size.width * 0.5, -size.height * 0.5),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Narrow viewport: centered, full safe area, always modal.
    Modal,
    Anchored,
    Centered,
}

/// Where the arrow is drawn relative to the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrowSide {
    /// Arrow on the top edge, pointing up at the anchor.
    Top,
    /// Arrow on the bottom edge, pointing down at the anchor.
    Bottom,
}

/// Output of one positioning pass, consumed by the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub layout: Layout,
    pub left: f32,
    pub top: f32,
    pub transform: Transform,
    pub flipped: bool,
    pub show_arrow: bool,
    /// CSS `max-width` for the panel.
    pub max_width: f32,
    /// CSS `max-height` for the panel, when constrained.
    pub max_height: Option<f32>,
}

impl Placement {
    pub fn is_modal(&self) -> bool {
        self.layout == Layout::Modal
    }

    pub fn arrow_side(&self) -> Option<ArrowSide> {
        match (self.show_arrow, self.flipped) {
            (false, _) => None,
            (true, false) => Some(ArrowSide::Top),
            (true, true) => Some(ArrowSide::Bottom),
        }
    }

    /// Rendered panel box for a measured `panel`, after width/height caps.
    pub fn bounds(&self, panel: Size) -> Rect {
        let size = Size::new(
            panel.width.min(self.max_width),
            self.max_height.map_or(panel.height, |h| panel.height.min(h)),
        );
        let origin = Vec2::new(self.left, self.top) + self.transform.origin_offset(size);
        Rect::new(origin.x, origin.y, size.width, size.height)
    }
}

/// Compute the placement for `target`.
///
/// `panel` must be the size measured after the first render; callers without
/// a measurement must not render at all.
pub fn place(target: &Target, viewport: Viewport, panel: Size, cfg: &PopoverConfig) -> Placement {
    if viewport.is_narrow(cfg.breakpoint) {
        return modal(viewport, cfg);
    }

    let max_width = cfg.max_width_for(viewport.width);
    let width = panel.width.min(max_width);

    match *target {
        Target::Anchor(anchor) => {
            let left = clamp_axis(anchor.x, width * 0.5, cfg.margin, viewport.width);
            let room_below = viewport.height - anchor.y;
            let flipped = room_below < panel.height + cfg.offset + cfg.margin;
            let (transform, box_top) = if flipped {
                (
                    Transform::BottomCenter,
                    anchor.y - cfg.offset - panel.height,
                )
            } else {
                (Transform::TopCenter, anchor.y + cfg.offset)
            };
            let box_top = clamp_edge(box_top, panel.height, cfg.margin, viewport.height);
            // a clamp that slid the box over the anchor leaves nothing to point at
            let faces_anchor = if flipped {
                box_top + panel.height <= anchor.y + 1e-3
            } else {
                box_top >= anchor.y - 1e-3
            };
            let top = if flipped {
                box_top + panel.height
            } else {
                box_top
            };
            Placement {
                layout: Layout::Anchored,
                left,
                top,
                transform,
                flipped,
                show_arrow: faces_anchor,
                max_width,
                max_height: None,
            }
        }
        Target::Container(rect) => {
            let c = rect.center();
            Placement {
                layout: Layout::Centered,
                left: clamp_axis(c.x, width * 0.5, cfg.margin, viewport.width),
                top: clamp_axis(c.y, panel.height * 0.5, cfg.margin, viewport.height),
                transform: Transform::Center,
                flipped: false,
                show_arrow: false,
                max_width,
                max_height: None,
            }
        }
    }
}

fn modal(viewport: Viewport, cfg: &PopoverConfig) -> Placement {
    let c = viewport.center();
    Placement {
        layout: Layout::Modal,
        left: c.x,
        top: c.y,
        transform: Transform::Center,
        flipped: false,
        show_arrow: false,
        max_width: (viewport.width - 2.0 * cfg.margin)
            .min(MOBILE_PANEL_MAX_WIDTH_PX)
            .max(0.0),
        max_height: Some((viewport.height - MOBILE_PANEL_VERTICAL_RESERVE_PX).max(0.0)),
    }
}

/// Clamp a center coordinate so `[c - half, c + half]` stays `margin` inside
/// `[0, extent]`. Falls back to the middle when the span cannot fit.
#[inline]
fn clamp_axis(c: f32, half: f32, margin: f32, extent: f32) -> f32 {
    let lo = margin + half;
    let hi = extent - margin - half;
    if lo > hi {
        extent * 0.5
    } else {
        c.clamp(lo, hi)
    }
}

/// Clamp a leading edge so `[edge, edge + len]` stays `margin` inside
/// `[0, extent]`. Oversized spans pin to the leading margin.
#[inline]
fn clamp_edge(edge: f32, len: f32, margin: f32, extent: f32) -> f32 {
    let hi = extent - margin - len;
    if hi < margin {
        margin
    } else {
        edge.clamp(margin, hi)
    }
}
