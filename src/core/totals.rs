use crate::core::transaction::{Transaction, TransactionType, Amount};

/// Summary figures over a ledger. Always recomputed from the full
/// list, never patched incrementally.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Totals {
    pub total_income: Amount,
    pub total_expenses: Amount,
    pub balance: Amount
}

impl Totals {
    pub fn from_transactions(transactions: &[Transaction]) -> Totals {
        let total_income = Totals::sum_of(transactions, TransactionType::Income);
        let total_expenses = Totals::sum_of(transactions, TransactionType::Expense);

        return Totals {
            total_income,
            total_expenses,
            balance: total_income - total_expenses
        };
    }

    fn sum_of(transactions: &[Transaction], kind: TransactionType) -> Amount {
        return transactions.iter()
            .filter(|t| t.kind() == kind)
            .map(|t| t.amount())
            .sum();
    }

    /// Fraction of income left over after expenses.
    /// `None` when there is no income to compare against.
    pub fn savings_rate(&self) -> Option<f64> {
        if self.total_income == 0.0 {
            return None;
        }
        return Some(self.balance / self.total_income);
    }
}

impl std::fmt::Display for Totals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "income: {:.2}; expenses: {:.2}; balance: {:.2}",
            self.total_income, self.total_expenses, self.balance)
    }
}
