//! In-page navigation targets and the mobile menu toggle.

use crate::constants::NAV_HEADER_OFFSET_PX;

/// Page sections in document order.
pub const SECTION_IDS: [&str; 6] = ["hero", "about", "skills", "experience", "projects", "contact"];

/// Document scroll offset that lands a section just below the sticky header.
/// `section_top` is viewport-relative.
#[inline]
pub fn scroll_target(section_top: f32, scroll_y: f32) -> f32 {
    scroll_target_with_offset(section_top, scroll_y, NAV_HEADER_OFFSET_PX)
}

#[inline]
pub fn scroll_target_with_offset(section_top: f32, scroll_y: f32, header_offset: f32) -> f32 {
    (section_top + scroll_y - header_offset).max(0.0)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Choosing a link always closes the menu.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}
