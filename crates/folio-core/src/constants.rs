// Shared layout and timing constants used by the web front-end.

// Viewport classification
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0; // widths below this are "narrow"

// Popover geometry
pub const VIEWPORT_MARGIN_PX: f32 = 16.0; // safe gap kept between panel and viewport edge
pub const ANCHOR_OFFSET_PX: f32 = 14.0; // gap between anchor point and panel edge
pub const PANEL_MAX_WIDTH_PX: f32 = 560.0; // desktop panel width cap
pub const MOBILE_PANEL_MAX_WIDTH_PX: f32 = 448.0; // 28rem
pub const MOBILE_PANEL_VERTICAL_RESERVE_PX: f32 = 100.0; // max-height: 100vh - reserve
pub const ARROW_INSET_PX: f32 = 6.0; // arrow overhang outside the panel edge

// Card hover tracking
pub const HOVER_RECT_PAD_PX: f32 = 4.0; // tolerance around a hovered card before closing

// Section fader
pub const FADE_RADIUS_FRACTION: f32 = 0.6; // fade radius as a fraction of viewport height
pub const SNAP_DELAY_MS: u64 = 140; // quiet time after the last scroll before snapping

// Navigation
pub const NAV_HEADER_OFFSET_PX: f32 = 96.0; // sticky header height subtracted from scroll targets

// Hero exit effect, keyed on scroll progress through the hero
pub const HERO_SHIFT_PX: f32 = 180.0; // leftward sweep at progress 1
pub const HERO_MID_OPACITY: f32 = 0.55; // opacity halfway out
pub const HERO_BLUR_PX: f32 = 6.0; // blur at progress 1
pub const HERO_END_SCALE: f32 = 0.98; // scale at progress 1
