//! Core data models for the transactions view

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{TransactionCategory, TransactionStatus, TransactionType};

/// Transaction information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique transaction identifier
    pub id: String,
    /// Display name
    pub title: String,
    /// Optional free text
    pub description: Option<String>,
    /// Signed amount; `None` when the source amount had no readable digits
    pub amount: Option<Decimal>,
    /// Incoming or outgoing
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Spending category
    pub category: TransactionCategory,
    /// Timestamp; `None` when the source date could not be parsed
    pub date: Option<NaiveDateTime>,
    /// Settlement status
    pub status: TransactionStatus,
    /// Account the transaction belongs to
    pub account: Option<String>,
    /// External reference
    pub reference: Option<String>,
}

impl Transaction {
    /// Case-insensitive substring match over title and description.
    /// `needle` must already be lowercased.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self
                .description
                .as_ref()
                .map_or(false, |d| d.to_lowercase().contains(needle))
    }

    pub fn is_incoming(&self) -> bool {
        self.transaction_type == TransactionType::Incoming
    }
}
