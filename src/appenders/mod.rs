//! Appender implementations

pub mod console;
pub mod file;
pub mod json;
pub mod memory;

pub use console::ConsoleAppender;
pub use file::FileAppender;
pub use json::JsonAppender;
pub use memory::{MemoryAppender, SharedBuffer};

// Re-export the trait next to its implementations
pub use crate::core::Appender;
