//! JSON API server for the finboard transactions view
//!
//! Routes are organized into modules:
//! - routes::transactions: Filtered list, detail, export
//! - routes::reports: Summary of the filtered set
//! - routes::settings: View options

pub mod error;
pub mod routes;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use finboard_config::Config;
use finboard_core::{Exporter, TransactionStore, UnconfiguredExporter};
use finboard_data::{JsonTransactionSource, SourceRef, TransactionSource};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

pub use error::{ApiError, ApiResult};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TransactionStore>,
    pub config: Arc<Config>,
    pub exporter: Arc<dyn Exporter>,
    pub source: SourceRef,
}

impl AppState {
    /// State with the JSON fixture source and no exporter configured
    pub fn new(config: Config, store: TransactionStore) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
            exporter: Arc::new(UnconfiguredExporter),
            source: Arc::new(JsonTransactionSource),
        }
    }

    pub fn with_exporter(mut self, exporter: Arc<dyn Exporter>) -> Self {
        self.exporter = exporter;
        self
    }
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::reports::api_summary;
    use routes::settings::api_settings;
    use routes::transactions::{api_transaction_detail, api_transactions, api_transactions_export};

    let cors_enable = state.config.server.cors_enable;

    let router = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/transactions", get(api_transactions))
        .route("/api/transactions/export", get(api_transactions_export))
        .route("/api/transactions/:id", get(api_transaction_detail))
        .route("/api/summary", get(api_summary))
        .route("/api/settings", get(api_settings))
        .route("/api/reload", post(api_reload))
        .with_state(state);

    if cors_enable {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Reload the transactions file
async fn api_reload(State(state): State<AppState>) -> ApiResult<Json<serde_json::Value>> {
    let path = state.config.transactions_path();
    let transactions = state.source.load_file(path).await?;
    let count = transactions.len();
    let previous = state.store.replace(transactions);

    Ok(Json(serde_json::json!({
        "success": true,
        "previous_count": previous,
        "count": count,
    })))
}

/// Bind and serve until the process is stopped
pub async fn start_server(state: AppState) -> std::io::Result<()> {
    let addr = format!("{}:{}", state.config.server.host, state.config.server.port);
    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    log::info!("Starting finboard server on http://{}", addr);
    log::info!("Available routes:");
    log::info!("  - /api/transactions (Filtered, paginated list)");
    log::info!("  - /api/transactions/:id (Transaction detail)");
    log::info!("  - /api/transactions/export (Export filtered set)");
    log::info!("  - /api/summary (Totals and categories)");
    log::info!("  - /api/settings (View options)");

    axum::serve(listener, router).await?;
    log::info!("Server stopped gracefully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use finboard_core::{CoreResult, ExportFormat, ExportOutput, Transaction};
    use tower::ServiceExt;

    const FIXTURE: &str = r#"[
        {"id": "tx-1", "title": "Rent", "amount": "$1,200.00", "type": "outgoing",
         "category": "utilities", "date": "2024-01-01", "status": "completed"},
        {"id": "tx-2", "title": "Salary", "description": "January pay", "amount": "$3,000.00",
         "type": "incoming", "category": "income", "date": "2024-01-05", "status": "completed"},
        {"id": "tx-3", "title": "Coffee Shop", "amount": "$4.50", "type": "outgoing",
         "category": "food", "date": "2024-01-06T08:15:00", "status": "pending"},
        {"id": "tx-4", "title": "Bus", "amount": "$2.75", "type": "outgoing",
         "category": "transport", "date": "2024-01-07", "status": "completed"},
        {"id": "tx-5", "title": "Cinema", "amount": "$18.00", "type": "outgoing",
         "category": "entertainment", "date": "2024-01-08", "status": "failed"},
        {"id": "tx-6", "title": "Groceries", "amount": "$82.10", "type": "outgoing",
         "category": "food", "date": "2024-01-09", "status": "completed"}
    ]"#;

    async fn state() -> AppState {
        let transactions = JsonTransactionSource.load(FIXTURE).await.unwrap();
        AppState::new(Config::default(), TransactionStore::new(transactions))
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn ids(json: &serde_json::Value) -> Vec<String> {
        json["transactions"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_health() {
        let router = create_router(state().await);
        let response = router
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"OK");
    }

    #[tokio::test]
    async fn test_list_defaults() {
        let (status, json) = get_json(create_router(state().await), "/api/transactions").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total_count"], 6);
        assert_eq!(json["page"], 1);
        assert_eq!(json["per_page"], 10);
        assert_eq!(json["total_pages"], 1);
        assert_eq!(json["has_active_filters"], false);
        assert_eq!(ids(&json), vec!["tx-1", "tx-2", "tx-3", "tx-4", "tx-5", "tx-6"]);
        assert_eq!(json["transactions"][0]["display_amount"], "$1,200.00");
    }

    #[tokio::test]
    async fn test_list_filters() {
        let router = create_router(state().await);
        let (_, json) = get_json(router.clone(), "/api/transactions?type=incoming").await;
        assert_eq!(ids(&json), vec!["tx-2"]);
        assert_eq!(json["has_active_filters"], true);

        let (_, json) = get_json(router.clone(), "/api/transactions?min=2000").await;
        assert_eq!(ids(&json), vec!["tx-2"]);

        let (_, json) = get_json(router.clone(), "/api/transactions?q=PAY").await;
        assert_eq!(ids(&json), vec!["tx-2"]);
        assert_eq!(json["has_active_filters"], false);
        assert_eq!(json["active_filter_count"], 1);

        let (_, json) = get_json(router.clone(), "/api/transactions?category=food,transport&status=completed").await;
        assert_eq!(ids(&json), vec!["tx-4", "tx-6"]);

        let (_, json) = get_json(router, "/api/transactions?from=2024-01-05&to=2024-01-06").await;
        assert_eq!(ids(&json), vec!["tx-2"]);
    }

    #[tokio::test]
    async fn test_list_pagination() {
        let router = create_router(state().await);
        let (_, json) = get_json(router.clone(), "/api/transactions?per_page=5&page=2").await;
        assert_eq!(json["total_pages"], 2);
        assert_eq!(ids(&json), vec!["tx-6"]);
        assert_eq!(json["controls"].as_array().unwrap().len(), 4);

        let (_, json) = get_json(router.clone(), "/api/transactions?per_page=7").await;
        assert_eq!(json["per_page"], 10);

        let (_, json) = get_json(router, "/api/transactions?page=9").await;
        assert_eq!(json["page"], 9);
        assert!(ids(&json).is_empty());
        assert_eq!(json["total_count"], 6);
    }

    #[tokio::test]
    async fn test_detail_and_not_found() {
        let router = create_router(state().await);
        let (status, json) = get_json(router.clone(), "/api/transactions/tx-3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["title"], "Coffee Shop");

        let (status, json) = get_json(router, "/api/transactions/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["code"], "TRANSACTION_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_export_unavailable() {
        let router = create_router(state().await);
        let (status, json) = get_json(router.clone(), "/api/transactions/export?format=pdf").await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
        assert_eq!(json["code"], "EXPORT_UNAVAILABLE");
        assert_eq!(json["details"]["format"], "pdf");

        let (status, json) = get_json(router, "/api/transactions/export?format=docx").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "INVALID_FORMAT");
        assert_eq!(json["details"]["supported"], serde_json::json!(["excel", "pdf", "csv"]));
    }

    struct IdListExporter;

    impl Exporter for IdListExporter {
        fn export(&self, format: ExportFormat, rows: &[Transaction]) -> CoreResult<ExportOutput> {
            let ids: Vec<&str> = rows.iter().map(|t| t.id.as_str()).collect();
            Ok(ExportOutput {
                format,
                content_type: "text/csv".to_string(),
                file_name: "transactions.csv".to_string(),
                bytes: ids.join("\n").into_bytes(),
            })
        }
    }

    #[tokio::test]
    async fn test_export_uses_filtered_set() {
        let state = state().await.with_exporter(Arc::new(IdListExporter));
        let response = create_router(state)
            .oneshot(
                Request::builder()
                    .uri("/api/transactions/export?format=csv&type=outgoing&per_page=5")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "text/csv");
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"tx-1\ntx-3\ntx-4\ntx-5\ntx-6");
    }

    #[tokio::test]
    async fn test_summary() {
        let (status, json) = get_json(create_router(state().await), "/api/summary?status=completed").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total_count"], 4);
        assert_eq!(json["incoming"], "3000.00");
        assert_eq!(json["outgoing"], "1284.85");
        assert_eq!(json["categories"][0]["category"], "utilities");
        assert_eq!(json["period"], "All Time");
    }

    #[tokio::test]
    async fn test_settings() {
        let (_, json) = get_json(create_router(state().await), "/api/settings").await;
        assert_eq!(json["pagination"]["page_sizes"], serde_json::json!([5, 10, 20, 50]));
        assert_eq!(json["filters"]["status"], serde_json::json!(["completed", "pending", "failed"]));
    }

    #[tokio::test]
    async fn test_reload() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("transactions.json"), FIXTURE).unwrap();

        let mut config = Config::default();
        config.data.path = dir.path().to_path_buf();
        let state = AppState::new(config, TransactionStore::default());
        let store = state.store.clone();

        let response = create_router(state)
            .oneshot(Request::builder().method("POST").uri("/api/reload").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(store.len(), 6);
    }

    #[tokio::test]
    async fn test_reload_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.data.path = dir.path().to_path_buf();

        let response = create_router(AppState::new(config, TransactionStore::default()))
            .oneshot(Request::builder().method("POST").uri("/api/reload").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["code"], "INTERNAL_ERROR");
        assert!(json["message"].as_str().unwrap().starts_with("Internal error: IO error"));
        assert!(!json["suggestions"].as_array().unwrap().is_empty());
    }
}
