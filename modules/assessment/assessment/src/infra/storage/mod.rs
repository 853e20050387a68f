mod file_store;
mod memory_store;

pub use file_store::FileStorage;
pub use memory_store::MemoryStorage;
