//! Best-effort persistence of the transaction collection in a single storage slot.
//!
//! The slot holds a versioned JSON envelope. Slots written before the envelope
//! existed hold a bare JSON array of transactions; both shapes are readable.
//! Reads and writes never fail towards the caller: problems are logged and the
//! ledger falls back to an empty collection (on read) or keeps its in-memory
//! state (on write).

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use facil_domain::{NewTransaction, Transaction};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    storage::KeyValueStore,
    time::{Clock, SystemClock},
    CoreError,
};

/// Slot name used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "financa_facil_transactions_v1";

/// Newest envelope layout this build can read and the one it writes.
pub const SCHEMA_VERSION: u32 = 1;

/// Versioned wrapper written to the storage slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersistedLedger {
    pub schema_version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredBlob {
    Envelope(PersistedLedger),
    Legacy(Vec<Transaction>),
}

/// Reads and writes the ledger blob through a [`KeyValueStore`].
pub struct LedgerStore {
    store: Box<dyn KeyValueStore>,
    key: String,
    clock: Box<dyn Clock>,
}

impl LedgerStore {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Box::new(store),
            key: DEFAULT_STORAGE_KEY.to_string(),
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Loads the persisted collection, returning an empty one on any failure.
    pub fn load(&self) -> Vec<Transaction> {
        match self.try_load() {
            Ok(transactions) => {
                debug!(key = %self.key, count = transactions.len(), "loaded transactions");
                transactions
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "failed to load transactions; starting empty");
                Vec::new()
            }
        }
    }

    /// Loads the persisted collection, surfacing the failure instead of hiding it.
    pub fn try_load(&self) -> Result<Vec<Transaction>, CoreError> {
        match self.store.get_item(&self.key)? {
            Some(raw) => decode_blob(&raw),
            None => Ok(Vec::new()),
        }
    }

    /// Overwrites the slot with `transactions`. Failures are logged, never returned.
    pub fn save(&self, transactions: &[Transaction]) {
        match self.try_save(transactions) {
            Ok(()) => debug!(key = %self.key, count = transactions.len(), "saved transactions"),
            Err(err) => warn!(key = %self.key, error = %err, "failed to save transactions"),
        }
    }

    pub fn try_save(&self, transactions: &[Transaction]) -> Result<(), CoreError> {
        let blob = encode_blob(transactions, self.clock.now())?;
        self.store.set_item(&self.key, &blob)
    }

    /// Assigns a fresh identifier to `draft`.
    ///
    /// The caller adds the result to its collection and then calls [`LedgerStore::save`].
    pub fn append(&self, draft: NewTransaction) -> Transaction {
        Transaction::new(draft)
    }

    /// Returns `transactions` without the entry whose id is `id`.
    pub fn remove(transactions: &[Transaction], id: &str) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|txn| txn.id != id)
            .cloned()
            .collect()
    }
}

/// Serialises `transactions` into the current envelope layout.
pub fn encode_blob(
    transactions: &[Transaction],
    saved_at: DateTime<Utc>,
) -> Result<String, CoreError> {
    let envelope = PersistedLedger {
        schema_version: SCHEMA_VERSION,
        saved_at: Some(saved_at),
        transactions: transactions.to_vec(),
    };
    Ok(serde_json::to_string(&envelope)?)
}

/// Parses either the envelope or the legacy bare array.
pub fn decode_blob(raw: &str) -> Result<Vec<Transaction>, CoreError> {
    let transactions = match serde_json::from_str::<StoredBlob>(raw)? {
        StoredBlob::Envelope(envelope) => {
            if envelope.schema_version > SCHEMA_VERSION {
                return Err(CoreError::UnsupportedSchema {
                    found: envelope.schema_version,
                    supported: SCHEMA_VERSION,
                });
            }
            envelope.transactions
        }
        StoredBlob::Legacy(transactions) => transactions,
    };
    Ok(dedupe_ids(transactions))
}

fn dedupe_ids(transactions: Vec<Transaction>) -> Vec<Transaction> {
    let mut seen = HashSet::with_capacity(transactions.len());
    let before = transactions.len();
    let unique: Vec<Transaction> = transactions
        .into_iter()
        .filter(|txn| seen.insert(txn.id.clone()))
        .collect();
    if unique.len() != before {
        warn!(
            dropped = before - unique.len(),
            "persisted ledger contained duplicate ids; kept first occurrences"
        );
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::TimeZone;
    use facil_domain::TransactionType;

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn sample(description: &str) -> Transaction {
        let date = Utc.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap();
        Transaction::new(NewTransaction::new(
            25.0,
            description,
            TransactionType::Expense,
            "transport",
            date,
        ))
    }

    #[test]
    fn save_writes_versioned_envelope() {
        let saved_at = Utc.with_ymd_and_hms(2024, 2, 1, 8, 30, 0).unwrap();
        let ledger_store = LedgerStore::new(MemoryStore::new()).with_clock(FixedClock(saved_at));
        ledger_store.save(&[sample("Bus")]);

        let raw = ledger_store
            .store()
            .get_item(DEFAULT_STORAGE_KEY)
            .unwrap()
            .expect("slot written");
        let envelope: PersistedLedger = serde_json::from_str(&raw).unwrap();
        assert_eq!(envelope.schema_version, SCHEMA_VERSION);
        assert_eq!(envelope.saved_at, Some(saved_at));
        assert_eq!(envelope.transactions.len(), 1);
    }

    #[test]
    fn newer_schema_is_rejected() {
        let raw = r#"{"schema_version": 99, "transactions": []}"#;
        let err = decode_blob(raw).expect_err("future schema must not load");
        assert!(matches!(
            err,
            CoreError::UnsupportedSchema {
                found: 99,
                supported: SCHEMA_VERSION
            }
        ));
    }

    #[test]
    fn duplicate_ids_keep_first_occurrence() {
        let first = sample("Metro");
        let mut second = sample("Taxi");
        second.id = first.id.clone();
        let raw = serde_json::to_string(&vec![first.clone(), second]).unwrap();
        let loaded = decode_blob(&raw).unwrap();
        assert_eq!(loaded, vec![first]);
    }

    #[test]
    fn ids_written_by_other_tools_are_kept_verbatim() {
        let raw = r#"[
            {"id":"tx-1","amount":10,"date":"2024-01-01T00:00:00Z","description":"Pão","category":"food","type":"expense"},
            {"id":"8d0c1f2e-4b8a-4c55-9a37-0f1e2d3c4b5a","amount":20,"date":"2024-01-02T00:00:00Z","description":"Ônibus","category":"transport","type":"expense"}
        ]"#;
        let loaded = decode_blob(raw).expect("mixed ids decode");
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, "tx-1");
        assert_eq!(
            LedgerStore::remove(&loaded, "tx-1")[0].id,
            "8d0c1f2e-4b8a-4c55-9a37-0f1e2d3c4b5a"
        );
    }

    #[test]
    fn remove_is_a_no_op_for_unknown_id() {
        let items = vec![sample("a"), sample("b")];
        assert_eq!(LedgerStore::remove(&items, "missing"), items);
    }
}
