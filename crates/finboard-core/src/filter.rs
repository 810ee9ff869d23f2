//! Transaction filter pipeline
//!
//! `apply_filters` is a pure function of the transaction list and a
//! [`FilterSpec`]. Predicates are combined with AND semantics and applied in
//! a fixed order; input order is preserved.

use chrono::NaiveDateTime;
use finboard_utils::parse_amount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::Transaction;
use crate::types::{TransactionCategory, TransactionStatus, TransactionType};

/// Inclusive date bounds, either side optional
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDateTime>,
    /// Compared as-is: a bound at midnight excludes the rest of that day
    pub to: Option<NaiveDateTime>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDateTime>, to: Option<NaiveDateTime>) -> Self {
        Self { from, to }
    }

    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Check if a timestamp falls within the range
    pub fn contains(&self, date: &NaiveDateTime) -> bool {
        match (self.from, self.to) {
            (None, None) => true,
            (Some(s), None) => *date >= s,
            (None, Some(e)) => *date <= e,
            (Some(s), Some(e)) => *date >= s && *date <= e,
        }
    }

    /// Get a human-readable description of the range
    pub fn description(&self) -> String {
        let fmt = |d: NaiveDateTime| d.format("%Y-%m-%d %H:%M").to_string();
        match (self.from, self.to) {
            (None, None) => "All Time".to_string(),
            (Some(s), None) => format!("From {}", fmt(s)),
            (None, Some(e)) => format!("Until {}", fmt(e)),
            (Some(s), Some(e)) => format!("{} to {}", fmt(s), fmt(e)),
        }
    }
}

/// The set of active filter predicates for a transactions view.
///
/// Empty sets and `None` bounds mean "no restriction". The default value is
/// the reset state of the filter panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Case-insensitive substring over title and description
    pub search: String,
    pub date_range: DateRange,
    pub types: BTreeSet<TransactionType>,
    pub statuses: BTreeSet<TransactionStatus>,
    pub categories: BTreeSet<TransactionCategory>,
    pub min_amount: Option<Decimal>,
    pub max_amount: Option<Decimal>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = search.to_string();
        self
    }

    pub fn with_date_range(mut self, from: Option<NaiveDateTime>, to: Option<NaiveDateTime>) -> Self {
        self.date_range = DateRange::new(from, to);
        self
    }

    pub fn with_types<I: IntoIterator<Item = TransactionType>>(mut self, types: I) -> Self {
        self.types = types.into_iter().collect();
        self
    }

    pub fn with_statuses<I: IntoIterator<Item = TransactionStatus>>(mut self, statuses: I) -> Self {
        self.statuses = statuses.into_iter().collect();
        self
    }

    pub fn with_categories<I: IntoIterator<Item = TransactionCategory>>(mut self, categories: I) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    /// Set the lower amount bound from user input; empty or non-numeric
    /// input clears the bound. Currency formatting such as `"$1,000"` is
    /// read the same way as the transaction amounts.
    pub fn with_min_amount(mut self, raw: &str) -> Self {
        self.min_amount = parse_amount(raw);
        self
    }

    /// Set the upper amount bound from user input; empty or non-numeric
    /// input clears the bound. Currency formatting such as `"$1,000"` is
    /// read the same way as the transaction amounts.
    pub fn with_max_amount(mut self, raw: &str) -> Self {
        self.max_amount = parse_amount(raw);
        self
    }

    pub fn toggle_type(&mut self, value: TransactionType) {
        toggle(&mut self.types, value);
    }

    pub fn toggle_status(&mut self, value: TransactionStatus) {
        toggle(&mut self.statuses, value);
    }

    pub fn toggle_category(&mut self, value: TransactionCategory) {
        toggle(&mut self.categories, value);
    }

    /// Whether any panel filter is set. Search is entered separately and
    /// does not count.
    pub fn has_active_filters(&self) -> bool {
        !self.date_range.is_unbounded()
            || !self.types.is_empty()
            || !self.statuses.is_empty()
            || !self.categories.is_empty()
            || self.min_amount.is_some()
            || self.max_amount.is_some()
    }

    /// Number of individual filter values in effect, search included
    pub fn active_filter_count(&self) -> usize {
        usize::from(!self.search.is_empty())
            + usize::from(self.date_range.from.is_some())
            + usize::from(self.date_range.to.is_some())
            + self.types.len()
            + self.statuses.len()
            + self.categories.len()
            + usize::from(self.min_amount.is_some())
            + usize::from(self.max_amount.is_some())
    }

    /// Active predicates in pipeline order
    fn predicates(&self) -> Vec<Box<dyn Fn(&Transaction) -> bool + '_>> {
        let mut predicates: Vec<Box<dyn Fn(&Transaction) -> bool + '_>> = Vec::new();

        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            predicates.push(Box::new(move |t: &Transaction| t.matches_search(&needle)));
        }
        if let Some(from) = self.date_range.from {
            predicates.push(Box::new(move |t: &Transaction| t.date.map_or(false, |d| d >= from)));
        }
        if let Some(to) = self.date_range.to {
            predicates.push(Box::new(move |t: &Transaction| t.date.map_or(false, |d| d <= to)));
        }
        if !self.types.is_empty() {
            predicates.push(Box::new(move |t: &Transaction| self.types.contains(&t.transaction_type)));
        }
        if !self.statuses.is_empty() {
            predicates.push(Box::new(move |t: &Transaction| self.statuses.contains(&t.status)));
        }
        if !self.categories.is_empty() {
            predicates.push(Box::new(move |t: &Transaction| self.categories.contains(&t.category)));
        }
        if let Some(min) = self.min_amount {
            predicates.push(Box::new(move |t: &Transaction| t.amount.map_or(false, |a| a >= min)));
        }
        if let Some(max) = self.max_amount {
            predicates.push(Box::new(move |t: &Transaction| t.amount.map_or(false, |a| a <= max)));
        }

        predicates
    }
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

/// Apply every active predicate of `spec` to `transactions`.
///
/// Transactions without a parseable date or amount are excluded as soon as
/// a date or amount bound is set. Stops early once nothing is left.
pub fn apply_filters(transactions: &[Transaction], spec: &FilterSpec) -> Vec<Transaction> {
    let mut filtered = transactions.to_vec();

    for predicate in spec.predicates() {
        if filtered.is_empty() {
            break;
        }
        filtered.retain(|t| predicate(t));
    }

    log::debug!(
        "Filtered {} of {} transactions ({} active filters)",
        filtered.len(),
        transactions.len(),
        spec.active_filter_count()
    );

    filtered
}
