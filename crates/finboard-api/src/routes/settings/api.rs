//! Settings API endpoints - JSON API

use axum::extract::State;
use axum::Json;
use finboard_core::{ExportFormat, TransactionCategory, TransactionStatus, TransactionType};

use crate::AppState;

/// Page sizes, currency display and the values each filter accepts
pub async fn api_settings(State(state): State<AppState>) -> Json<serde_json::Value> {
    let config = &state.config;
    Json(serde_json::json!({
        "pagination": config.pagination,
        "currency": config.currency,
        "filters": {
            "type": TransactionType::ALL,
            "status": TransactionStatus::ALL,
            "category": TransactionCategory::ALL,
        },
        "export_formats": ExportFormat::ALL,
    }))
}
