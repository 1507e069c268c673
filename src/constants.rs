// DOM hooks the page markup exposes to the front-end.
// The static HTML carries these ids and attributes.

// Card grids that open a detail popover
pub const CARD_GRID_SELECTOR: &str = "[data-card-grid]";
pub const CARD_SELECTOR: &str = "[data-idx]";
pub const CARD_DETAIL_SELECTOR: &str = ".card-detail";
pub const ATTR_IDX: &str = "data-idx";
pub const ATTR_TITLE: &str = "data-title";
pub const ATTR_PINNABLE: &str = "data-pinnable";
pub const ATTR_POPOVER_MODE: &str = "data-popover-mode"; // "center" (default) or "anchor"

// Popover DOM, created per grid and appended to <body>
pub const POPOVER_LAYER_CLASS: &str = "popover-layer";
pub const POPOVER_BACKDROP_CLASS: &str = "popover-backdrop";
pub const POPOVER_PANEL_CLASS: &str = "popover-panel card";
pub const POPOVER_ARROW_CLASS: &str = "popover-arrow";
pub const POPOVER_TITLE_CLASS: &str = "popover-title";
pub const POPOVER_BODY_CLASS: &str = "popover-body";
pub const HIDDEN_CLASS: &str = "hidden";
pub const MODAL_CLASS: &str = "is-modal";

// Section fader
pub const MAIN_SELECTOR: &str = "main";
pub const ATTR_FADE_RADIUS: &str = "data-fade-radius";
pub const ATTR_SNAP: &str = "data-snap";
pub const HERO_SECTION_ID: &str = "hero";
pub const HERO_CONTENT_SELECTOR: &str = "[data-hero]"; // inner block that sweeps out

// Contact form
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_STATUS_ID: &str = "contact-status";
pub const ATTR_ENDPOINT: &str = "data-endpoint";
pub const ATTR_ERROR_FOR: &str = "data-error-for";
pub const HONEYPOT_FIELD: &str = "company";
pub const STATUS_OK_CLASS: &str = "status-ok";
pub const STATUS_ERR_CLASS: &str = "status-error";
pub const SEND_LABEL: &str = "Send";
pub const SENDING_LABEL: &str = "Sending…";

// Navigation
pub const NAV_LINK_SELECTOR: &str = "[data-nav]";
pub const ATTR_NAV: &str = "data-nav";
pub const MENU_TOGGLE_ID: &str = "menu-toggle";
pub const MOBILE_MENU_ID: &str = "mobile-menu";

// Reveal offset for a fully faded section (px)
pub const FADE_TRANSLATE_PX: f32 = 24.0;
