//! Report structures computed over a set of transactions

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use super::models::Transaction;
use super::types::{TransactionCategory, TransactionStatus, TransactionType};

/// Totals for the transactions header and analytics cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionSummary {
    pub total_count: usize,
    /// Sum of incoming amounts
    pub incoming: Decimal,
    /// Sum of outgoing amounts, as a positive number
    pub outgoing: Decimal,
    pub net: Decimal,
    pub by_status: BTreeMap<TransactionStatus, usize>,
    /// Rows left out of the sums: unreadable amounts, or amounts that
    /// would overflow a total
    pub malformed_amounts: usize,
}

/// Spending in one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub category: TransactionCategory,
    pub amount: Decimal,
    pub count: usize,
    pub percentage: f64,
}

pub fn summarize(transactions: &[Transaction]) -> TransactionSummary {
    let mut incoming = Decimal::ZERO;
    let mut outgoing = Decimal::ZERO;
    let mut malformed_amounts = 0;
    let mut by_status = BTreeMap::new();

    for t in transactions {
        *by_status.entry(t.status).or_insert(0) += 1;

        let Some(amount) = t.amount else {
            malformed_amounts += 1;
            continue;
        };
        let total = match t.transaction_type {
            TransactionType::Incoming => &mut incoming,
            TransactionType::Outgoing => &mut outgoing,
        };
        match total.checked_add(amount.abs()) {
            Some(sum) => *total = sum,
            None => {
                log::warn!("Amount of transaction {} overflows the {} total", t.id, t.transaction_type);
                malformed_amounts += 1;
            }
        }
    }

    TransactionSummary {
        total_count: transactions.len(),
        incoming,
        outgoing,
        net: incoming - outgoing,
        by_status,
        malformed_amounts,
    }
}

/// Outgoing spend per category, largest first
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategoryBreakdown> {
    let mut totals: HashMap<TransactionCategory, (Decimal, usize)> = HashMap::new();

    for t in transactions.iter().filter(|t| t.transaction_type == TransactionType::Outgoing) {
        let Some(amount) = t.amount else { continue };
        let entry = totals.entry(t.category).or_insert((Decimal::ZERO, 0));
        match entry.0.checked_add(amount.abs()) {
            Some(sum) => {
                entry.0 = sum;
                entry.1 += 1;
            }
            None => log::warn!("Amount of transaction {} overflows the {} total", t.id, t.category),
        }
    }

    let grand_total = totals
        .values()
        .fold(Decimal::ZERO, |acc, (amount, _)| acc.saturating_add(*amount));

    let mut breakdown: Vec<CategoryBreakdown> = totals
        .into_iter()
        .map(|(category, (amount, count))| {
            let percentage = if grand_total.is_zero() {
                0.0
            } else {
                (amount / grand_total * Decimal::ONE_HUNDRED).to_f64().unwrap_or(0.0)
            };
            CategoryBreakdown {
                category,
                amount,
                count,
                percentage,
            }
        })
        .collect();

    breakdown.sort_by(|a, b| b.amount.cmp(&a.amount).then(a.category.cmp(&b.category)));
    breakdown
}
