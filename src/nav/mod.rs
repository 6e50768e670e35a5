//! Slide navigation engine for the preview reel.
//!
//! Reconciles three input sources into one current slide index:
//! discrete steps (keys, taps), continuous scroll position and touch
//! swipes. Index changes from steps go through a short settle transition
//! during which further navigation input is ignored.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Cursor state enum (Inactive → Idle ⇄ Transitioning)
//! - `intent.rs` - Navigation inputs
//! - `reducer.rs` - Pure state transitions
//! - `gesture.rs` - Scroll and swipe classification
//! - `progress.rs` - Per-slide progress timer
//! - `navigator.rs` - Driver owning timers, scroll offset and touch tracking

mod gesture;
mod intent;
mod navigator;
mod progress;
mod reducer;
mod state;

pub use gesture::{classify_swipe, scroll_sync, ScrollSync, Swipe, TouchTracker};
pub use intent::{Direction, NavIntent};
pub use navigator::{NavSettings, SlideNavigator};
pub use progress::SlideProgress;
pub use reducer::NavReducer;
pub use state::NavState;
