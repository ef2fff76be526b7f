//! Content source adapters.

mod local;
mod memory;

pub use local::FileContentSource;
pub use memory::MemoryContentSource;
