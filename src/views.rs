//! Display-ready snapshots built fresh from the ledger on every call.

use facil_core::{
    analytics::{ChartSlice, Totals},
    format::{signed_amount, CurrencyFormatter, DateFormatter},
};
use facil_domain::{find_category, Transaction, TransactionType};
use serde::Serialize;

/// One line of the recent-activity or history list.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TransactionRow {
    pub id: String,
    pub description: String,
    pub category: String,
    pub icon: Option<&'static str>,
    pub kind: TransactionType,
    pub date: String,
    pub amount: String,
}

impl TransactionRow {
    pub fn from_transaction(
        txn: &Transaction,
        currency: &str,
        money: &dyn CurrencyFormatter,
        dates: &dyn DateFormatter,
    ) -> Self {
        Self {
            id: txn.id.clone(),
            description: txn.description.clone(),
            category: txn.category_label(),
            icon: find_category(&txn.category).map(|category| category.icon),
            kind: txn.kind,
            date: dates.format_date(txn.date.date_naive()),
            amount: signed_amount(txn, currency, money),
        }
    }
}

/// Balance card figures, raw and formatted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SummaryView {
    pub totals: Totals,
    pub balance: f64,
    pub income_label: String,
    pub expenses_label: String,
    pub balance_label: String,
}

impl SummaryView {
    pub fn new(totals: Totals, currency: &str, money: &dyn CurrencyFormatter) -> Self {
        let balance = totals.balance();
        Self {
            totals,
            balance,
            income_label: money.format_amount(totals.income, currency),
            expenses_label: money.format_amount(totals.expenses, currency),
            balance_label: money.format_amount(balance, currency),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardView {
    pub summary: SummaryView,
    /// Empty when there are no expenses; the chart is hidden then.
    pub slices: Vec<ChartSlice>,
    pub recent: Vec<TransactionRow>,
}

impl DashboardView {
    pub fn has_chart(&self) -> bool {
        !self.slices.is_empty()
    }
}
