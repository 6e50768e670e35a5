//! Story content model.
//!
//! A story is an ordered [`SlideSequence`] of text and image slides plus the
//! metadata carried by a [`SavePayload`] when it is handed to a save sink.

mod payload;
mod sequence;
mod slide;

pub use payload::{parse_tags, PayloadError, SaveKind, SavePayload, GENRES};
pub use sequence::SlideSequence;
pub use slide::{SlideId, SlideItem, SlideKind};
