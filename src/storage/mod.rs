//! Save sinks for drafts and published stories.

mod file;
mod memory;
mod sink;

pub use file::{load_payload, FileSink};
pub use memory::MemorySink;
pub use sink::{SaveError, SaveReceipt, StorySink};
