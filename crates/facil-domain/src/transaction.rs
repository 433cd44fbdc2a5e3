//! Domain models for ledger transactions.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::category::category_label;

/// A recorded income or expense. Immutable once created; only deletable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Opaque identifier. Fresh ids are UUID v4 strings; stored ids are kept verbatim.
    pub id: String,
    pub amount: f64,
    pub date: DateTime<Utc>,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

impl Transaction {
    /// Builds a transaction from form input with a freshly generated identifier.
    pub fn new(draft: NewTransaction) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), draft)
    }

    pub fn with_id(id: impl Into<String>, draft: NewTransaction) -> Self {
        Self {
            id: id.into(),
            amount: draft.amount,
            date: draft.date,
            description: draft.description,
            category: draft.category,
            kind: draft.kind,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Catalog name of the category, or the raw category string.
    pub fn category_label(&self) -> String {
        category_label(&self.category)
    }
}

/// Direction of a transaction. Stored amounts are always magnitudes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        };
        f.write_str(label)
    }
}

/// Transaction payload supplied by an entry form, before an id is assigned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTransaction {
    pub amount: f64,
    pub date: DateTime<Utc>,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

impl NewTransaction {
    pub fn new(
        amount: f64,
        description: impl Into<String>,
        kind: TransactionType,
        category: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            amount,
            date,
            description: description.into(),
            category: category.into(),
            kind,
        }
    }

    /// Checks the entry-form precondition: a positive amount and a description.
    ///
    /// The ledger never calls this itself; collaborators run it before `append`.
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(TransactionValidationError::InvalidAmount);
        }
        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::MissingDescription);
        }
        Ok(())
    }
}

/// Reasons an entry form payload is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionValidationError {
    InvalidAmount,
    MissingDescription,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionValidationError::InvalidAmount => {
                f.write_str("amount must be a positive number")
            }
            TransactionValidationError::MissingDescription => {
                f.write_str("description must not be empty")
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn draft(amount: f64, description: &str) -> NewTransaction {
        let date = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        NewTransaction::new(amount, description, TransactionType::Expense, "food", date)
    }

    #[test]
    fn validate_rejects_missing_amount_or_description() {
        assert_eq!(
            draft(0.0, "Lunch").validate(),
            Err(TransactionValidationError::InvalidAmount)
        );
        assert_eq!(
            draft(f64::NAN, "Lunch").validate(),
            Err(TransactionValidationError::InvalidAmount)
        );
        assert_eq!(
            draft(12.5, "   ").validate(),
            Err(TransactionValidationError::MissingDescription)
        );
        assert!(draft(12.5, "Lunch").validate().is_ok());
    }

    #[test]
    fn new_assigns_distinct_ids() {
        let first = Transaction::new(draft(1.0, "a"));
        let second = Transaction::new(draft(1.0, "a"));
        assert_ne!(first.id, second.id);
        assert_eq!(first.category_label(), "Alimentação");
    }
}
