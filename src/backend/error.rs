use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    /// Stored data exists but is not a valid list of transactions.
    #[error("malformed stored ledger: {0}")]
    Deserialization(#[source] serde_json::Error),
    #[error("could not serialize ledger: {0}")]
    Serialization(#[source] serde_json::Error),
    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// The storage slot cannot hold a value this large.
    #[error("storage quota exceeded: {requested} bytes requested, {quota} allowed")]
    QuotaExceeded {
        requested: usize,
        quota: usize
    }
}

pub type Result<T> = std::result::Result<T, BackendError>;
