//! Pure layout and interaction logic for the folio front-end.
//!
//! Nothing in here touches the DOM. The web crate measures rectangles and
//! viewport sizes, hands them to these functions as plain snapshots, and
//! writes the results back as styles.

pub mod config;
pub mod constants;
pub mod contact;
pub mod fader;
pub mod geometry;
pub mod hover;
pub mod nav;
pub mod placement;
pub mod popover;
pub mod schedule;

pub use config::*;
pub use constants::*;
pub use contact::*;
pub use fader::*;
pub use geometry::*;
pub use hover::*;
pub use nav::*;
pub use placement::*;
pub use popover::*;
pub use schedule::*;
