//! Route modules for the API server
//!
//! - transactions: Filtered list, detail, export
//! - reports: Summary of the filtered set
//! - settings: View options
//!
//! Each module has an api.rs with its JSON endpoints.

pub mod reports;
pub mod settings;
pub mod transactions;
