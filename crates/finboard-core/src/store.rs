//! In-memory transaction store shared by request handlers

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{CoreError, CoreResult};
use crate::filter::{apply_filters, FilterSpec};
use crate::models::Transaction;

#[derive(Debug, Default)]
struct StoreData {
    transactions: Vec<Transaction>,
    index: HashMap<String, usize>,
}

impl StoreData {
    fn new(transactions: Vec<Transaction>) -> Self {
        let index = transactions
            .iter()
            .enumerate()
            .map(|(i, t)| (t.id.clone(), i))
            .collect();
        Self { transactions, index }
    }
}

/// Loaded transactions in source order
#[derive(Debug, Default)]
pub struct TransactionStore {
    data: RwLock<StoreData>,
}

impl TransactionStore {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self {
            data: RwLock::new(StoreData::new(transactions)),
        }
    }

    // A poisoned lock still holds a consistent snapshot: writers only swap
    // whole `StoreData` values.
    fn read(&self) -> RwLockReadGuard<'_, StoreData> {
        self.data.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreData> {
        self.data.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Snapshot of all transactions
    pub fn all(&self) -> Vec<Transaction> {
        self.read().transactions.clone()
    }

    /// Get transaction by ID
    pub fn get(&self, id: &str) -> CoreResult<Transaction> {
        let data = self.read();
        data.index
            .get(id)
            .and_then(|&i| data.transactions.get(i))
            .cloned()
            .ok_or_else(|| CoreError::TransactionNotFound { id: id.to_string() })
    }

    pub fn len(&self) -> usize {
        self.read().transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Swap in a freshly loaded set, returning the previous count
    pub fn replace(&self, transactions: Vec<Transaction>) -> usize {
        let new_data = StoreData::new(transactions);
        let mut data = self.write();
        let previous = data.transactions.len();
        *data = new_data;
        log::info!("Transaction store replaced: {} -> {} transactions", previous, data.transactions.len());
        previous
    }

    /// Filtered set for `spec`
    pub fn filtered(&self, spec: &FilterSpec) -> Vec<Transaction> {
        apply_filters(&self.read().transactions, spec)
    }
}
