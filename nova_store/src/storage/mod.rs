//! Storage media for the collection blob.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::InMemoryStorage;
