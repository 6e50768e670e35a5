//! Full-screen preview reel.
//!
//! Navigation state lives in [`crate::nav::SlideNavigator`]; this module
//! only draws it.

mod thumbnail;
mod view;

pub use thumbnail::{HalfBlockImage, ThumbnailCache};
pub use view::render_preview;
