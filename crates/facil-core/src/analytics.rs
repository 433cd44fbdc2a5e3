//! Derived aggregates over a snapshot of the transaction collection.
//!
//! Every function here is pure and recomputes from scratch; callers invoke
//! them again whenever the collection changes.

use std::collections::HashMap;

use facil_domain::{category_color, category_label, Transaction, TransactionType};
use serde::Serialize;

/// Income and expense sums. Both are non-negative magnitudes.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct Totals {
    pub income: f64,
    pub expenses: f64,
}

impl Totals {
    pub fn balance(&self) -> f64 {
        balance(self)
    }
}

/// Expense sum for one category label.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryExpense {
    pub label: String,
    pub total: f64,
}

/// Chart-ready expense group carrying its catalog colour.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartSlice {
    pub label: String,
    pub total: f64,
    pub color: &'static str,
}

pub fn totals(transactions: &[Transaction]) -> Totals {
    transactions
        .iter()
        .fold(Totals::default(), |mut acc, txn| {
            match txn.kind {
                TransactionType::Income => acc.income += txn.amount,
                TransactionType::Expense => acc.expenses += txn.amount,
            }
            acc
        })
}

/// Net balance; negative when expenses exceed income.
pub fn balance(totals: &Totals) -> f64 {
    totals.income - totals.expenses
}

/// Sums expenses per category label in first-encounter order.
///
/// Known category ids resolve to their catalog name; anything else is used verbatim.
pub fn expenses_by_category(transactions: &[Transaction]) -> Vec<CategoryExpense> {
    expense_slices(transactions)
        .into_iter()
        .map(|slice| CategoryExpense {
            label: slice.label,
            total: slice.total,
        })
        .collect()
}

/// Same grouping as [`expenses_by_category`], with the colour of each group's first entry.
pub fn expense_slices(transactions: &[Transaction]) -> Vec<ChartSlice> {
    let mut slices: Vec<ChartSlice> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for txn in transactions.iter().filter(|txn| txn.is_expense()) {
        let label = category_label(&txn.category);
        match index.get(&label) {
            Some(&position) => slices[position].total += txn.amount,
            None => {
                index.insert(label.clone(), slices.len());
                slices.push(ChartSlice {
                    label,
                    total: txn.amount,
                    color: category_color(&txn.category),
                });
            }
        }
    }
    slices
}

/// Newest first. Entries with equal dates keep their input order.
pub fn sorted_by_date_descending(transactions: &[Transaction]) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

pub fn recent_transactions(transactions: &[Transaction], limit: usize) -> Vec<Transaction> {
    let mut sorted = sorted_by_date_descending(transactions);
    sorted.truncate(limit);
    sorted
}
