pub mod keyboard;
pub mod pointer;

pub use keyboard::is_dismiss_key;
pub use pointer::{client_point, touch_point};
