//! Transaction routes - Filtered list, detail, export
//!
//! Structure:
//! - api.rs: JSON API endpoints
//! - params.rs: Query string parsing into a filter spec

pub mod api;
pub mod params;

pub use api::{
    api_transaction_detail,
    api_transactions,
    api_transactions_export,
    TransactionRow,
    TransactionsResponse,
};
