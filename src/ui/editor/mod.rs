//! Story editor feature module.
//!
//! Title, genre, tags and the slide list of the story being authored.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Editor form state
//! - `intent.rs` - User actions and async results
//! - `reducer.rs` - State transitions
//! - `view.rs` - Rendering

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::EditorIntent;
pub use reducer::EditorReducer;
pub use state::{EditorField, EditorState, Notice, NoticeLevel};
pub use view::render_editor;
