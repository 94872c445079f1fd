//! Backing store implementations

pub mod file;
pub mod memory;
pub mod secure_memory;

pub use file::JsonFileBackend;
pub use memory::MemoryBackend;
pub use secure_memory::MemorySecureBackend;
