pub mod core;
pub mod backend;
pub mod config;
pub mod store;

pub use crate::core::{Ledger, Totals, Transaction, TransactionId, TransactionType, Amount};
pub use crate::core::{ledger, transaction, totals};
pub use crate::backend::{JsonStore, LedgerBackend};
pub use crate::store::LedgerStore;
