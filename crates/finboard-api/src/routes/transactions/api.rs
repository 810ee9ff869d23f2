//! Transactions API endpoints
//!
//! Endpoints:
//! - api_transactions: Filtered, paginated transaction list
//! - api_transaction_detail: Single transaction
//! - api_transactions_export: Export of the filtered set

use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use finboard_config::{CurrencyConfig, SymbolPosition};
use finboard_core::{export_to, CoreError, ExportFormat, PageControl, Transaction, ViewState};
use finboard_utils::format_amount;
use serde::Serialize;
use std::collections::HashMap;

use super::params;
use crate::error::ApiResult;
use crate::AppState;

/// A transaction with its display strings
#[derive(Debug, Clone, Serialize)]
pub struct TransactionRow {
    #[serde(flatten)]
    pub transaction: Transaction,
    pub display_amount: String,
    pub display_date: String,
}

impl TransactionRow {
    pub fn new(transaction: Transaction, currency: &CurrencyConfig) -> Self {
        let display_amount = match transaction.amount {
            Some(amount) => format_currency(&format_amount(amount), currency),
            None => "N/A".to_string(),
        };
        let display_date = transaction
            .date
            .map(|d| d.format("%b %-d, %Y").to_string())
            .unwrap_or_default();
        Self {
            transaction,
            display_amount,
            display_date,
        }
    }
}

fn format_currency(amount: &str, currency: &CurrencyConfig) -> String {
    let (sign, digits) = match amount.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", amount),
    };
    match currency.symbol_position {
        SymbolPosition::Before => format!("{}{}{}", sign, currency.symbol, digits),
        SymbolPosition::After => format!("{}{} {}", sign, digits, currency.symbol),
    }
}

/// Transactions list response for API
#[derive(Debug, Clone, Serialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<TransactionRow>,
    /// Size of the filtered set
    pub total_count: usize,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub has_active_filters: bool,
    pub active_filter_count: usize,
    pub controls: Vec<PageControl>,
}

/// Get transactions with filters and pagination (JSON API)
pub async fn api_transactions(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<TransactionsResponse> {
    let spec = params::filter_spec(&query);
    let active_filter_count = spec.active_filter_count();

    let mut view = ViewState::new(&state.config.pagination);
    view.apply_filters(spec);
    if let Some(size) = params::per_page(&query) {
        if let Err(e) = view.set_items_per_page(size) {
            log::warn!("{}; using {}", e, view.items_per_page());
        }
    }
    view.set_page(params::page(&query));

    let rendered = view.render(&state.store.all());
    let currency = &state.config.currency;

    Json(TransactionsResponse {
        transactions: rendered
            .transactions
            .into_iter()
            .map(|t| TransactionRow::new(t, currency))
            .collect(),
        total_count: rendered.total_count,
        page: rendered.current_page,
        per_page: rendered.items_per_page,
        total_pages: rendered.total_pages,
        has_active_filters: rendered.has_active_filters,
        active_filter_count,
        controls: rendered.controls,
    })
}

/// Get single transaction detail (JSON API)
pub async fn api_transaction_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<TransactionRow>> {
    let transaction = state.store.get(&id)?;
    Ok(Json(TransactionRow::new(transaction, &state.config.currency)))
}

/// Export the filtered set (not just the current page)
pub async fn api_transactions_export(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> ApiResult<Response> {
    let format = query
        .get("format")
        .map(|s| s.as_str())
        .unwrap_or("csv")
        .parse::<ExportFormat>()
        .map_err(|message| CoreError::InvalidFormat { message })?;

    let rows = state.store.filtered(&params::filter_spec(&query));
    let output = export_to(state.exporter.as_ref(), format, &rows)?;

    let disposition = format!("attachment; filename=\"{}\"", output.file_name);
    Ok((
        [
            (header::CONTENT_TYPE, output.content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        output.bytes,
    )
        .into_response())
}
