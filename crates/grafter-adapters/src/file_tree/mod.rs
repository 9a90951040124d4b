//! File tree adapters.
//!
//! - [`LocalFileTree`] - production, backed by `std::fs`
//! - [`MemoryFileTree`] - testing, shared in-memory storage

pub mod local;
pub mod memory;

pub use local::LocalFileTree;
pub use memory::MemoryFileTree;
