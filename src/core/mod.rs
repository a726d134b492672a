pub mod transaction;
pub mod totals;
pub mod ledger;
pub mod id;

pub use transaction::{Transaction, TransactionType, TransactionId, Amount};
pub use totals::Totals;
pub use ledger::Ledger;
