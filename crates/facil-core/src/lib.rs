//! facil-core
//!
//! Ledger persistence contract, derived analytics, and presentation helpers.
//! Depends on facil-domain. No terminal I/O, no direct filesystem access.

pub mod analytics;
pub mod error;
pub mod format;
pub mod insight;
pub mod ledger;
pub mod ledger_store;
pub mod storage;
pub mod time;

pub use analytics::*;
pub use error::CoreError;
pub use format::{BrlFormatter, CurrencyFormatter, DateFormatter, DayMonthFormatter};
pub use insight::{InsightProvider, InsightRecord, InsightRequest, InsightService};
pub use ledger::Ledger;
pub use ledger_store::{LedgerStore, PersistedLedger, DEFAULT_STORAGE_KEY, SCHEMA_VERSION};
pub use storage::{KeyValueStore, MemoryStore};
pub use time::{Clock, SystemClock};
