use crate::backend::Result;
use crate::core::Transaction;

/// A durable string slot per key, in the manner of a browser's local storage.
pub trait KeyValueStore {
    /// `Ok(None)` when nothing was ever stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Best-effort persistence of the whole transaction list.
/// Neither method fails: problems are logged and the caller carries on.
pub trait LedgerBackend {
    fn load(&self) -> Vec<Transaction>;
    fn save(&self, transactions: &[Transaction]);
}
