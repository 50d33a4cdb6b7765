//! Core data models

use serde::{Deserialize, Serialize};

/// Transaction record
///
/// Field names are part of the template contract: views read `id`, `date`
/// and `amount` straight from the serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, assigned on creation
    pub id: i64,
    /// Free-form date string
    pub date: String,
    /// Signed amount
    pub amount: f64,
}

impl Transaction {
    pub fn new(id: i64, date: impl Into<String>, amount: f64) -> Self {
        Self {
            id,
            date: date.into(),
            amount,
        }
    }

    /// Outgoing money
    pub fn is_debit(&self) -> bool {
        self.amount < 0.0
    }
}

/// Sample records loaded on a fresh start
pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction::new(1, "2025-06-01", 100.0),
        Transaction::new(2, "2025-06-02", -200.0),
        Transaction::new(3, "2025-06-03", 300.0),
    ]
}
