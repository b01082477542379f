//! tanglome-store - Durable token storage implementations.

mod file;
mod memory;

pub use file::FileTokenStore;
pub use memory::MemoryTokenStore;
