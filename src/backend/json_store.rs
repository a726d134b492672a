use crate::backend::{BackendError, KeyValueStore, LedgerBackend, Result};
use crate::core::Transaction;

pub const DEFAULT_KEY: &str = "transactions";

/// Stores the transaction list as a plain JSON array under a single key.
pub struct JsonStore<K: KeyValueStore> {
    storage: K,
    key: String
}

impl<K: KeyValueStore> JsonStore<K> {
    pub fn new(storage: K) -> JsonStore<K> {
        JsonStore::with_key(storage, DEFAULT_KEY)
    }

    pub fn with_key(storage: K, key: &str) -> JsonStore<K> {
        JsonStore { storage, key: key.to_owned() }
    }

    pub fn storage(&self) -> &K {
        &self.storage
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// An absent key reads as an empty list.
    pub fn try_load(&self) -> Result<Vec<Transaction>> {
        let content = match self.storage.get(&self.key)? {
            Some(content) => content,
            None => {
                log::info!("nothing stored under '{}', starting with an empty ledger", self.key);
                return Ok(Vec::new());
            }
        };
        return serde_json::from_str(&content).map_err(BackendError::Deserialization);
    }

    pub fn try_save(&self, transactions: &[Transaction]) -> Result<()> {
        let content = serde_json::to_string(transactions)
            .map_err(BackendError::Serialization)?;
        return self.storage.set(&self.key, &content);
    }
}

impl<K: KeyValueStore> LedgerBackend for JsonStore<K> {
    fn load(&self) -> Vec<Transaction> {
        match self.try_load() {
            Ok(transactions) => {
                log::debug!("loaded {} transactions from '{}'", transactions.len(), self.key);
                transactions
            },
            Err(err) => {
                log::warn!("could not load transactions from '{}', starting empty: {}", self.key, err);
                Vec::new()
            }
        }
    }

    fn save(&self, transactions: &[Transaction]) {
        match self.try_save(transactions) {
            Ok(()) => log::debug!("saved {} transactions to '{}'", transactions.len(), self.key),
            Err(err) => log::error!("could not save transactions to '{}': {}", self.key, err)
        }
    }
}
