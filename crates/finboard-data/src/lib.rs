//! Transaction fixture loading
//!
//! Reads a JSON array of transaction records and turns it into validated
//! [`Transaction`]s. Unreadable amounts and dates are kept as `None` so the
//! filter pipeline can exclude them; unknown enum values and duplicate ids
//! reject the whole fixture.

use async_trait::async_trait;
use finboard_core::Transaction;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

pub mod error;
pub mod record;

pub use error::DataError;
pub use record::{parse_timestamp, RawAmount, RawTransaction};

/// Source reference type
pub type SourceRef = Arc<dyn TransactionSource>;

/// Trait for transaction sources
#[async_trait]
pub trait TransactionSource: Send + Sync {
    /// Parse transactions from fixture content
    async fn load(&self, content: &str) -> Result<Vec<Transaction>, DataError>;

    /// Read and parse a fixture file
    async fn load_file(&self, path: PathBuf) -> Result<Vec<Transaction>, DataError>;
}

/// Loads a JSON array of transaction records
#[derive(Debug, Default)]
pub struct JsonTransactionSource;

impl JsonTransactionSource {
    fn parse(content: &str) -> Result<Vec<Transaction>, DataError> {
        let records: Vec<RawTransaction> = serde_json::from_str(content)?;

        let mut seen = HashSet::with_capacity(records.len());
        let mut transactions = Vec::with_capacity(records.len());

        for (index, record) in records.into_iter().enumerate() {
            if !seen.insert(record.id.clone()) {
                return Err(DataError::DuplicateId { id: record.id });
            }
            transactions.push(record.into_transaction(index)?);
        }

        let malformed = transactions.iter().filter(|t| t.amount.is_none() || t.date.is_none()).count();
        if malformed > 0 {
            log::warn!("{} of {} transactions have unreadable amounts or dates", malformed, transactions.len());
        }

        Ok(transactions)
    }
}

#[async_trait]
impl TransactionSource for JsonTransactionSource {
    async fn load(&self, content: &str) -> Result<Vec<Transaction>, DataError> {
        Self::parse(content)
    }

    async fn load_file(&self, path: PathBuf) -> Result<Vec<Transaction>, DataError> {
        let content = tokio::fs::read_to_string(&path).await?;
        let transactions = Self::parse(&content)?;
        log::info!("Loaded {} transactions from {}", transactions.len(), path.display());
        Ok(transactions)
    }
}
