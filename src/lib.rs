#![doc(test(attr(deny(warnings))))]

//! Finança Fácil keeps a local ledger of income and expense transactions and
//! derives the balances, category breakdowns, and history views a budgeting
//! front end displays.

pub mod app;
pub mod errors;
pub mod utils;
pub mod views;

pub use app::FinanceApp;
pub use errors::AppError;
pub use views::{DashboardView, SummaryView, TransactionRow};

pub use facil_config::{Config, ConfigManager};
pub use facil_core::{InsightProvider, KeyValueStore, MemoryStore};
pub use facil_domain::{NewTransaction, Transaction, TransactionType, DEFAULT_CATEGORIES};
pub use facil_storage_json::JsonFileStore;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finança Fácil tracing initialized.");
    });
}
