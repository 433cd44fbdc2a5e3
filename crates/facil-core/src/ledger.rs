//! In-memory ledger session backed by a [`LedgerStore`].

use facil_domain::{NewTransaction, Transaction};

use crate::ledger_store::LedgerStore;

/// Holds the current collection and persists it in full after every mutation.
///
/// The in-memory collection is authoritative: a failed save is logged by the
/// store and the change stays visible until the next reload.
pub struct Ledger {
    store: LedgerStore,
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Loads the persisted collection from `store`.
    pub fn open(store: LedgerStore) -> Self {
        let transactions = store.load();
        Self {
            store,
            transactions,
        }
    }

    /// Records a new transaction and persists the updated collection.
    pub fn add(&mut self, draft: NewTransaction) -> Transaction {
        let transaction = self.store.append(draft);
        self.transactions.push(transaction.clone());
        self.store.save(&self.transactions);
        transaction
    }

    /// Deletes the transaction with `id`. Returns `false` when nothing matched.
    pub fn delete(&mut self, id: &str) -> bool {
        if !self.transactions.iter().any(|txn| txn.id == id) {
            return false;
        }
        self.transactions = LedgerStore::remove(&self.transactions, id);
        self.store.save(&self.transactions);
        true
    }

    /// Re-reads the persisted collection, discarding unsaved changes.
    pub fn reload(&mut self) {
        self.transactions = self.store.load();
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn store(&self) -> &LedgerStore {
        &self.store
    }
}
