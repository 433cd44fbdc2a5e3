//! Session facade wiring configuration, storage, and the ledger together.

use facil_config::{Config, ConfigManager};
use facil_core::{
    analytics::{expense_slices, recent_transactions, sorted_by_date_descending, totals},
    format::{BrlFormatter, DayMonthFormatter},
    InsightProvider, InsightService, KeyValueStore, Ledger, LedgerStore, MemoryStore,
};
use facil_domain::{NewTransaction, Transaction};
use facil_storage_json::JsonFileStore;
use tracing::{debug, info, warn};

use crate::{
    errors::Result,
    views::{DashboardView, SummaryView, TransactionRow},
};

/// A running session: the loaded ledger plus the preferences that shape its views.
pub struct FinanceApp {
    config: Config,
    config_manager: Option<ConfigManager>,
    ledger: Ledger,
    show_landing: bool,
}

impl FinanceApp {
    /// Loads configuration from `config_manager` and opens the ledger in the configured data directory.
    ///
    /// Never fails: an unreadable config falls back to the defaults and an
    /// unusable data directory to an in-memory store for this session.
    pub fn open(config_manager: ConfigManager) -> Self {
        let config = config_manager.load().unwrap_or_else(|err| {
            warn!(
                path = %config_manager.config_path().display(),
                error = %err,
                "config unreadable; using defaults"
            );
            Config::default()
        });
        let data_dir = config.resolve_data_dir();
        let store: Box<dyn KeyValueStore> = match JsonFileStore::new(&data_dir) {
            Ok(store) => {
                info!(data_dir = %data_dir.display(), "opening ledger");
                Box::new(store)
            }
            Err(err) => {
                warn!(
                    data_dir = %data_dir.display(),
                    error = %err,
                    "data directory unusable; changes will not be persisted"
                );
                Box::new(MemoryStore::new())
            }
        };
        let mut app = Self::with_store(config, store);
        app.config_manager = Some(config_manager);
        app
    }

    /// Opens the ledger held in `store`. Preference changes stay in memory.
    pub fn with_store(config: Config, store: impl KeyValueStore + 'static) -> Self {
        let ledger = Ledger::open(LedgerStore::new(store).with_key(config.storage_key.clone()));
        let show_landing = !(config.intro_seen && !ledger.is_empty());
        debug!(
            transactions = ledger.len(),
            show_landing, "ledger session ready"
        );
        Self {
            config,
            config_manager: None,
            ledger,
            show_landing,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.transactions()
    }

    /// Validates form input, records it, and persists the ledger.
    pub fn add_transaction(&mut self, draft: NewTransaction) -> Result<Transaction> {
        draft.validate()?;
        Ok(self.ledger.add(draft))
    }

    /// Removes a transaction. Unknown ids are ignored and reported as `false`.
    pub fn delete_transaction(&mut self, id: &str) -> bool {
        self.ledger.delete(id)
    }

    pub fn summary(&self) -> SummaryView {
        SummaryView::new(
            totals(self.transactions()),
            &self.config.currency,
            &BrlFormatter,
        )
    }

    pub fn dashboard(&self) -> DashboardView {
        let transactions = self.transactions();
        DashboardView {
            summary: self.summary(),
            slices: expense_slices(transactions),
            recent: self.rows(recent_transactions(transactions, self.config.recent_limit)),
        }
    }

    /// Full history, newest first.
    pub fn history(&self) -> Vec<TransactionRow> {
        self.rows(sorted_by_date_descending(self.transactions()))
    }

    /// Free-text advice from `provider`, or a fallback message when it is missing or fails.
    pub fn insight(&self, provider: Option<&dyn InsightProvider>) -> String {
        InsightService::advise(provider, self.transactions(), self.config.insight_window)
    }

    pub fn should_show_landing(&self) -> bool {
        self.show_landing
    }

    /// Leaves the landing page and remembers that the intro was seen.
    pub fn enter_app(&mut self) -> Result<()> {
        self.show_landing = false;
        self.config.intro_seen = true;
        if let Some(manager) = &self.config_manager {
            manager.save(&self.config)?;
        }
        Ok(())
    }

    /// Returns to the landing page for this session.
    pub fn leave_app(&mut self) {
        self.show_landing = true;
    }

    fn rows(&self, transactions: Vec<Transaction>) -> Vec<TransactionRow> {
        transactions
            .iter()
            .map(|txn| {
                TransactionRow::from_transaction(
                    txn,
                    &self.config.currency,
                    &BrlFormatter,
                    &DayMonthFormatter,
                )
            })
            .collect()
    }
}
