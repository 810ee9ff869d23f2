//! Reports API endpoints

use axum::extract::{Query, State};
use axum::Json;
use finboard_core::{category_breakdown, summarize, CategoryBreakdown, TransactionSummary};
use serde::Serialize;
use std::collections::HashMap;

use crate::routes::transactions::params;
use crate::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct SummaryResponse {
    #[serde(flatten)]
    pub summary: TransactionSummary,
    pub categories: Vec<CategoryBreakdown>,
    /// Human-readable date range of the filter
    pub period: String,
}

/// Totals over the filtered set; accepts the same filters as the list
pub async fn api_summary(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<SummaryResponse> {
    let spec = params::filter_spec(&query);
    let filtered = state.store.filtered(&spec);

    Json(SummaryResponse {
        summary: summarize(&filtered),
        categories: category_breakdown(&filtered),
        period: spec.date_range.description(),
    })
}
