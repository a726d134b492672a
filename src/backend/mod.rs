mod error;
mod interface;
mod file_kv;
mod memory_kv;
mod json_store;

pub use error::{BackendError, Result};
pub use interface::{KeyValueStore, LedgerBackend};
pub use file_kv::FileKvStore;
pub use memory_kv::MemoryKvStore;
pub use json_store::{JsonStore, DEFAULT_KEY};
