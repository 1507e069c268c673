//! Scroll proximity fader.
//!
//! Each tracked section gets a visibility weight from how far its vertical
//! midpoint sits from the viewport's. A section centered in the viewport is
//! fully visible; one whose midpoint is a fade radius away (or further) is
//! fully faded. The falloff is eased with smoothstep.
//!
//! The hero gets its own exit effect keyed on how far it has scrolled out
//! of the top of the viewport.

use crate::config::FaderConfig;
use crate::constants::{HERO_BLUR_PX, HERO_END_SCALE, HERO_MID_OPACITY, HERO_SHIFT_PX};
use crate::geometry::{Rect, Viewport};

/// `t² (3 − 2t)` on `[0, 1]`.
#[inline]
pub fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Visibility weight in `[0, 1]` for a section midpoint.
pub fn weight(section_mid_y: f32, viewport_mid_y: f32, radius: f32) -> f32 {
    let d = (section_mid_y - viewport_mid_y).abs();
    if !(radius > 0.0) {
        return if d == 0.0 { 1.0 } else { 0.0 };
    }
    smoothstep(1.0 - d / radius)
}

/// One weight per section, in order. Unmounted sections (`None`) weigh 0.
pub fn weights(sections: &[Option<Rect>], viewport: Viewport, cfg: &FaderConfig) -> Vec<f32> {
    let mid = viewport.height * 0.5;
    let radius = cfg.radius_px(viewport.height);
    sections
        .iter()
        .map(|s| s.map_or(0.0, |r| weight(r.mid_y(), mid, radius)))
        .collect()
}

/// Index of the mounted section whose midpoint is closest to the viewport
/// midpoint. Ties go to the earlier section.
pub fn nearest_to_center(sections: &[Option<Rect>], viewport: Viewport) -> Option<usize> {
    let mid = viewport.height * 0.5;
    let mut best: Option<(usize, f32)> = None;
    for (i, r) in sections.iter().enumerate() {
        let Some(r) = r else { continue };
        let d = (r.mid_y() - mid).abs();
        match best {
            Some((_, bd)) if d >= bd => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapTarget {
    pub index: usize,
    /// Document scroll offset that brings the section's top to the viewport top.
    pub scroll_y: f32,
}

/// Where a settled scroll should snap to. `None` when no section is mounted
/// or the nearest section is already aligned.
pub fn snap_target(
    sections: &[Option<Rect>],
    viewport: Viewport,
    scroll_y: f32,
) -> Option<SnapTarget> {
    let index = nearest_to_center(sections, viewport)?;
    let rect = sections[index]?;
    if rect.top.abs() < 0.5 {
        return None;
    }
    Some(SnapTarget {
        index,
        scroll_y: (scroll_y + rect.top).max(0.0),
    })
}

/// Piecewise-linear map of `t` through `(input, output)` stops sorted by
/// input. Outside the stops the end values hold. No stops yields 0.
pub fn lerp_stops(t: f32, stops: &[(f32, f32)]) -> f32 {
    let (Some(&(t0, v0)), Some(&(tn, vn))) = (stops.first(), stops.last()) else {
        return 0.0;
    };
    if t <= t0 {
        return v0;
    }
    if t >= tn {
        return vn;
    }
    for pair in stops.windows(2) {
        let ((a, va), (b, vb)) = (pair[0], pair[1]);
        if t <= b {
            if b - a <= f32::EPSILON {
                return vb;
            }
            return va + (vb - va) * (t - a) / (b - a);
        }
    }
    vn
}

/// 0 while the hero's top is at or below the viewport top, 1 once its bottom
/// has reached it.
pub fn hero_progress(hero: Rect) -> f32 {
    if hero.height <= 0.0 {
        return if hero.top < 0.0 { 1.0 } else { 0.0 };
    }
    (-hero.top / hero.height).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroStyle {
    pub translate_x: f32,
    pub opacity: f32,
    pub blur_px: f32,
    pub scale: f32,
}

impl HeroStyle {
    pub fn at(progress: f32) -> Self {
        Self {
            translate_x: lerp_stops(progress, &[(0.0, 0.0), (1.0, -HERO_SHIFT_PX)]),
            opacity: lerp_stops(progress, &[(0.0, 1.0), (0.5, HERO_MID_OPACITY), (1.0, 0.0)]),
            blur_px: lerp_stops(progress, &[(0.0, 0.0), (1.0, HERO_BLUR_PX)]),
            scale: lerp_stops(progress, &[(0.0, 1.0), (1.0, HERO_END_SCALE)]),
        }
    }
}
