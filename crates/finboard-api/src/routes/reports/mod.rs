//! Report routes - Totals and category breakdown of the filtered set

pub mod api;

pub use api::{api_summary, SummaryResponse};
