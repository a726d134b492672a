use crate::backend::LedgerBackend;
use crate::core::{Ledger, Totals, Transaction, TransactionId, TransactionType, Amount};

/// Owns the ledger for the running application and mirrors it to a
/// backend after every change. The in-memory list stays authoritative
/// for the session even if a write fails.
pub struct LedgerStore<B: LedgerBackend> {
    ledger: Ledger,
    backend: B
}

impl<B: LedgerBackend> LedgerStore<B> {
    pub fn open(backend: B) -> LedgerStore<B> {
        let ledger = Ledger::from_transactions(backend.load());
        return LedgerStore { ledger, backend };
    }

    #[cfg(test)]
    pub(crate) fn with_ledger(ledger: Ledger, backend: B) -> LedgerStore<B> {
        LedgerStore { ledger, backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.get_transactions()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn add_transaction(&mut self, description: &str, amount: Amount, kind: TransactionType) -> Transaction {
        let transaction = self.ledger.add_transaction(description, amount, kind).clone();
        self.persist();
        return transaction;
    }

    pub fn delete_transaction(&mut self, id: TransactionId) {
        self.ledger.delete_transaction(id);
        self.persist();
    }

    pub fn totals(&self) -> Totals {
        self.ledger.totals()
    }

    fn persist(&self) {
        self.backend.save(self.ledger.get_transactions());
    }
}


#[cfg(test)]
mod tests {
    use crate::backend::{JsonStore, KeyValueStore, LedgerBackend, MemoryKvStore, DEFAULT_KEY};
    use crate::core::{Ledger, TransactionType};
    use crate::core::id::IdGenerator;
    use crate::store::LedgerStore;

    use rstest::{fixture, rstest};

    type MemoryStore = LedgerStore<JsonStore<MemoryKvStore>>;

    fn frozen() -> u64 {
        1000
    }

    #[fixture]
    fn store() -> MemoryStore {
        LedgerStore::with_ledger(
            Ledger::with_ids(Vec::new(), IdGenerator::with_clock(frozen)),
            JsonStore::new(MemoryKvStore::new()))
    }

    #[rstest]
    fn empty_storage_opens_empty() {
        let store = LedgerStore::open(JsonStore::new(MemoryKvStore::new()));
        assert!(store.transactions().is_empty());
        assert_eq!(store.totals().balance, 0.0);
    }

    #[rstest]
    fn corrupt_storage_opens_empty() {
        let storage = MemoryKvStore::new();
        storage.set(DEFAULT_KEY, "{not valid}").unwrap();

        let store = LedgerStore::open(JsonStore::new(storage));
        assert!(store.transactions().is_empty());
    }

    #[rstest]
    fn every_mutation_writes_through(mut store: MemoryStore) {
        let salary = store.add_transaction("Salary", 5000.0, TransactionType::Income);
        assert_eq!(store.backend().load(), store.transactions());

        store.add_transaction("Rent", 1200.0, TransactionType::Expense);
        assert_eq!(store.backend().load(), store.transactions());
        assert_eq!(store.backend().load()[0].description(), "Rent");

        store.delete_transaction(salary.id());
        assert_eq!(store.backend().load(), store.transactions());
        assert_eq!(store.transactions().len(), 1);
    }

    #[rstest]
    fn scenario_totals(mut store: MemoryStore) {
        let salary = store.add_transaction("Salary", 5000.0, TransactionType::Income);
        assert_eq!(salary.description(), "Salary");
        assert_eq!(salary.amount(), 5000.0);
        assert_eq!(salary.kind(), TransactionType::Income);
        let totals = store.totals();
        assert_eq!((totals.total_income, totals.total_expenses, totals.balance), (5000.0, 0.0, 5000.0));

        store.add_transaction("Rent", 1200.0, TransactionType::Expense);
        let totals = store.totals();
        assert_eq!((totals.total_income, totals.total_expenses, totals.balance), (5000.0, 1200.0, 3800.0));

        store.delete_transaction(salary.id());
        let totals = store.totals();
        assert_eq!((totals.total_income, totals.total_expenses, totals.balance), (0.0, 1200.0, -1200.0));

        let before = store.transactions().to_vec();
        store.delete_transaction(999999);
        assert_eq!(store.transactions(), before.as_slice());
    }

    #[rstest]
    fn reopening_restores_ledger(mut store: MemoryStore) {
        store.add_transaction("Salary", 5000.0, TransactionType::Income);
        store.add_transaction("Rent", 1200.0, TransactionType::Expense);
        let saved = store.transactions().to_vec();

        let LedgerStore { backend, .. } = store;
        let reopened = LedgerStore::open(backend);
        assert_eq!(reopened.transactions(), saved.as_slice());
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    fn non_finite_amount_keeps_ledger_loadable(mut store: MemoryStore, #[case] amount: f64) {
        store.add_transaction("Salary", 5000.0, TransactionType::Income);
        store.add_transaction("Rent", 1200.0, TransactionType::Expense);
        store.add_transaction("odd", amount, TransactionType::Expense);

        let LedgerStore { backend, .. } = store;
        let mut reopened = LedgerStore::open(backend);
        assert_eq!(reopened.transactions().len(), 3);
        assert_eq!(reopened.transactions()[0].amount().to_bits(), amount.to_bits());
        assert_eq!(reopened.transactions()[1].description(), "Rent");
        assert_eq!(reopened.transactions()[2].description(), "Salary");

        reopened.add_transaction("Coffee", 4.5, TransactionType::Expense);
        let LedgerStore { backend, .. } = reopened;
        assert_eq!(LedgerStore::open(backend).transactions().len(), 4);
    }

    #[rstest]
    fn failed_writes_keep_memory_authoritative() {
        let mut store = LedgerStore::open(JsonStore::new(MemoryKvStore::with_quota(120)));

        store.add_transaction("Salary", 5000.0, TransactionType::Income);
        store.add_transaction("A much longer description that will not fit", 1.0, TransactionType::Expense);

        assert_eq!(store.transactions().len(), 2);
        assert_eq!(store.totals().total_expenses, 1.0);
        assert_eq!(store.backend().load().len(), 1);
    }
}
