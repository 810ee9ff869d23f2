//! Query string parsing for the transaction endpoints
//!
//! Parameters:
//! - q: search text
//! - from, to: date or datetime bounds
//! - type, status, category: comma-separated values
//! - min, max: amount bounds, currency formatting allowed
//! - page, per_page: pagination

use finboard_core::FilterSpec;
use finboard_data::parse_timestamp;
use std::collections::{BTreeSet, HashMap};
use std::str::FromStr;

/// Build a [`FilterSpec`] from query parameters. Unknown values are dropped.
pub fn filter_spec(params: &HashMap<String, String>) -> FilterSpec {
    let get = |key: &str| params.get(key).map(|s| s.as_str()).unwrap_or("");

    let from = non_empty(get("from")).and_then(|s| {
        let parsed = parse_timestamp(s);
        if parsed.is_none() {
            log::debug!("Ignoring unreadable 'from' bound: {}", s);
        }
        parsed
    });
    let to = non_empty(get("to")).and_then(|s| {
        let parsed = parse_timestamp(s);
        if parsed.is_none() {
            log::debug!("Ignoring unreadable 'to' bound: {}", s);
        }
        parsed
    });

    FilterSpec::new()
        .with_search(get("q"))
        .with_date_range(from, to)
        .with_types(parse_set(get("type")))
        .with_statuses(parse_set(get("status")))
        .with_categories(parse_set(get("category")))
        .with_min_amount(get("min"))
        .with_max_amount(get("max"))
}

/// Requested page, defaulting to 1
pub fn page(params: &HashMap<String, String>) -> usize {
    params
        .get("page")
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(1)
}

/// Requested page size, if one was given and is a number
pub fn per_page(params: &HashMap<String, String>) -> Option<usize> {
    let raw = params.get("per_page")?;
    match raw.trim().parse() {
        Ok(n) => Some(n),
        Err(_) => {
            log::warn!("Ignoring non-numeric per_page: {}", raw);
            None
        }
    }
}

fn non_empty(s: &str) -> Option<&str> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

fn parse_set<T: FromStr + Ord>(raw: &str) -> BTreeSet<T> {
    raw.split(',')
        .filter_map(non_empty)
        .filter_map(|value| match value.parse() {
            Ok(v) => Some(v),
            Err(_) => {
                log::debug!("Ignoring unknown filter value: {}", value);
                None
            }
        })
        .collect()
}
