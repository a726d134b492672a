use serde::{Serialize, Deserialize};
use colored::Colorize;

pub type Amount = f64;
pub type TransactionId = u64;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let disp = match self {
            Self::Income => "income",
            Self::Expense => "expense"
        };
        write!(f, "{}", disp)
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!("unknown transaction type: {}", other))
        }
    }
}

/// JSON has no literal for NaN or infinity, so non-finite amounts are
/// stored as the strings `"NaN"`, `"Infinity"` and `"-Infinity"`.
/// A `null` amount reads back as NaN.
mod amount_serde {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use super::Amount;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StoredAmount {
        Number(Amount),
        Word(String)
    }

    pub fn serialize<S>(amount: &Amount, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if amount.is_finite() {
            serializer.serialize_f64(*amount)
        } else if amount.is_nan() {
            serializer.serialize_str("NaN")
        } else if *amount > 0.0 {
            serializer.serialize_str("Infinity")
        } else {
            serializer.serialize_str("-Infinity")
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Amount, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<StoredAmount>::deserialize(deserializer)? {
            None => Ok(Amount::NAN),
            Some(StoredAmount::Number(amount)) => Ok(amount),
            Some(StoredAmount::Word(word)) => match word.as_str() {
                "NaN" => Ok(Amount::NAN),
                "Infinity" => Ok(Amount::INFINITY),
                "-Infinity" => Ok(Amount::NEG_INFINITY),
                other => Err(D::Error::custom(format!("invalid amount: {}", other)))
            }
        }
    }
}

/// A single recorded income or expense. The amount is stored as a
/// magnitude; whether it adds to or subtracts from the balance is
/// decided by `kind`.
///
/// Entries are immutable once created: the fields are readable but
/// there is no way to change them after the ledger hands out an id.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    description: String,
    #[serde(with = "amount_serde")]
    amount: Amount,
    #[serde(rename = "type")]
    kind: TransactionType
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // adding 0.0 turns -0.0 into 0.0
        let amount = match self.kind {
            TransactionType::Income => format!("{:+.2}", self.amount + 0.0).green(),
            TransactionType::Expense => format!("{:+.2}", -self.amount + 0.0).bright_red()
        };
        write!(f, "[{}] {}: {}", self.id, self.description.bold(), amount)
    }
}

impl Transaction {
    pub(crate) fn new(id: TransactionId, description: &str, amount: Amount, kind: TransactionType) -> Transaction {
        Transaction {
            id,
            description: description.to_owned(),
            amount,
            kind
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn kind(&self) -> TransactionType {
        self.kind
    }
}
