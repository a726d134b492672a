use std::collections::HashSet;

use crate::core::id::IdGenerator;
use crate::core::totals::Totals;
use crate::core::transaction::{Transaction, TransactionId, TransactionType, Amount};

/// In-memory list of transactions, newest first.
pub struct Ledger {
    transactions: Vec<Transaction>,
    ids: IdGenerator
}

impl Ledger {
    /// Build a ledger over previously stored transactions, which must
    /// already be in newest-first order. Entries repeating an earlier id
    /// are dropped.
    pub fn from_transactions(transactions: Vec<Transaction>) -> Ledger {
        Ledger::with_ids(transactions, IdGenerator::new())
    }

    pub(crate) fn with_ids(transactions: Vec<Transaction>, mut ids: IdGenerator) -> Ledger {
        let mut seen: HashSet<TransactionId> = HashSet::new();
        let mut kept: Vec<Transaction> = Vec::with_capacity(transactions.len());
        for transaction in transactions {
            if !seen.insert(transaction.id()) {
                log::warn!("dropping stored transaction with duplicate id {}", transaction.id());
                continue;
            }
            ids.observe(transaction.id());
            kept.push(transaction);
        }
        return Ledger { transactions: kept, ids };
    }

    pub fn get_transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn add_transaction(&mut self, description: &str, amount: Amount, kind: TransactionType) -> &Transaction {
        let id = match self.ids.next() {
            Some(id) => id,
            None => self.lowest_free_id()
        };
        let transaction = Transaction::new(id, description, amount, kind);
        log::debug!("adding transaction {}", transaction.id());
        self.transactions.insert(0, transaction);
        return &self.transactions[0];
    }

    fn lowest_free_id(&self) -> TransactionId {
        let used: HashSet<TransactionId> = self.transactions.iter().map(|t| t.id()).collect();
        let id = (0..).find(|id| !used.contains(id)).unwrap_or_default();
        log::warn!("ids above the largest stored id are used up, reusing free id {}", id);
        return id;
    }

    /// Returns whether anything was removed.
    pub fn delete_transaction(&mut self, id: TransactionId) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id() != id);
        let removed = self.transactions.len() != before;
        if removed {
            log::debug!("deleted transaction {}", id);
        } else {
            log::debug!("no transaction with id {}, nothing deleted", id);
        }
        return removed;
    }

    pub fn totals(&self) -> Totals {
        Totals::from_transactions(&self.transactions)
    }

    /// Number of (income, expense) entries.
    pub fn count_by_type(&self) -> (usize, usize) {
        return self.transactions.iter()
            .fold((0, 0), |(income, expense), t| match t.kind() {
                TransactionType::Income => (income + 1, expense),
                TransactionType::Expense => (income, expense + 1)
            });
    }
}
