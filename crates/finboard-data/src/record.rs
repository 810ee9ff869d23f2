//! Raw fixture records and their conversion into [`Transaction`]s

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use finboard_core::{Transaction, TransactionCategory, TransactionStatus, TransactionType};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::DataError;

/// Amounts arrive either as display strings (`"$1,234.56"`) or bare numbers
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Text(String),
    Number(serde_json::Number),
}

impl RawAmount {
    /// Display strings go through the lenient currency parser. Numbers are
    /// read exactly; JSON may print them with an exponent (`1e21`).
    fn parse(&self) -> Option<Decimal> {
        match self {
            RawAmount::Text(s) => finboard_utils::parse_amount(s),
            RawAmount::Number(n) => {
                let text = n.to_string();
                Decimal::from_str(&text)
                    .or_else(|_| Decimal::from_scientific(&text))
                    .ok()
            }
        }
    }
}

/// One transaction as stored in the fixture file
#[derive(Debug, Clone, Deserialize)]
pub struct RawTransaction {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub amount: RawAmount,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub category: String,
    pub date: String,
    pub status: String,
    #[serde(default)]
    pub account: Option<String>,
    #[serde(default)]
    pub reference: Option<String>,
}

impl RawTransaction {
    /// Convert into a [`Transaction`]. `index` is the position in the
    /// fixture, used for error reporting.
    pub fn into_transaction(self, index: usize) -> Result<Transaction, DataError> {
        let transaction_type: TransactionType = self
            .transaction_type
            .parse()
            .map_err(|e: String| DataError::invalid(index, &self.id, e))?;
        let category: TransactionCategory = self
            .category
            .parse()
            .map_err(|e: String| DataError::invalid(index, &self.id, e))?;
        let status: TransactionStatus = self
            .status
            .parse()
            .map_err(|e: String| DataError::invalid(index, &self.id, e))?;

        let amount = self.amount.parse();
        if amount.is_none() {
            log::warn!("Transaction {} has an unreadable amount {:?}", self.id, self.amount);
        }

        let date = parse_timestamp(&self.date);
        if date.is_none() {
            log::warn!("Transaction {} has an unreadable date {:?}", self.id, self.date);
        }

        Ok(Transaction {
            id: self.id,
            title: self.title,
            description: self.description.filter(|d| !d.is_empty()),
            amount,
            transaction_type,
            category,
            date,
            status,
            account: self.account,
            reference: self.reference,
        })
    }
}

/// Parse an ISO timestamp: `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM[:SS[.fff]]`, or
/// RFC 3339 with an offset (converted to UTC). A plain date means midnight.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_timestamp_formats() {
        let midnight = parse_timestamp("2024-01-05").unwrap();
        assert_eq!(midnight.to_string(), "2024-01-05 00:00:00");

        let minutes = parse_timestamp("2024-04-05T19:30").unwrap();
        assert_eq!(minutes.hour(), 19);

        let seconds = parse_timestamp("2024-04-05T19:30:15.250").unwrap();
        assert_eq!(seconds.second(), 15);

        let offset = parse_timestamp("2024-04-05T10:00:00+02:00").unwrap();
        assert_eq!(offset.hour(), 8);

        let zulu = parse_timestamp("2024-04-05T10:00:00Z").unwrap();
        assert_eq!(zulu.hour(), 10);
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("2024-13-45").is_none());
    }

    #[test]
    fn test_numeric_amount_accepted() {
        let raw: RawTransaction = serde_json::from_value(serde_json::json!({
            "id": "n1",
            "title": "Refund",
            "amount": 12.5,
            "type": "incoming",
            "category": "shopping",
            "date": "2024-02-01",
            "status": "completed"
        }))
        .unwrap();

        let t = raw.into_transaction(0).unwrap();
        assert_eq!(t.amount.unwrap().to_string(), "12.5");
        assert!(t.description.is_none());
    }

    fn amount_of(value: serde_json::Value) -> Option<Decimal> {
        let raw: RawTransaction = serde_json::from_value(serde_json::json!({
            "id": "e1",
            "title": "Transfer",
            "amount": value,
            "type": "incoming",
            "category": "shopping",
            "date": "2024-02-01",
            "status": "completed"
        }))
        .unwrap();
        raw.into_transaction(0).unwrap().amount
    }

    #[test]
    fn test_exponent_amounts_keep_their_magnitude() {
        assert_eq!(
            amount_of(serde_json::json!(1e21)),
            Some(Decimal::from_str("1000000000000000000000").unwrap())
        );
        assert_eq!(amount_of(serde_json::json!(1e-7)), Some(Decimal::from_str("0.0000001").unwrap()));
        assert_eq!(amount_of(serde_json::json!(250)), Some(Decimal::from(250)));
    }

    #[test]
    fn test_out_of_range_number_is_unreadable() {
        assert_eq!(amount_of(serde_json::json!(1e40)), None);
    }
}
