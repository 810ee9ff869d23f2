//! Error types for finboard-api

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use finboard_core::{CoreError, ErrorCode, ErrorDetails};
use finboard_data::DataError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to load transactions: {0}")]
    Data(#[from] DataError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(e) => match e.code() {
                ErrorCode::TransactionNotFound => StatusCode::NOT_FOUND,
                ErrorCode::ValidationError | ErrorCode::InvalidFormat => StatusCode::BAD_REQUEST,
                ErrorCode::ExportUnavailable => StatusCode::NOT_IMPLEMENTED,
                ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Data(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_details(&self) -> ErrorDetails {
        match self {
            ApiError::Core(e) => e.to_details(),
            // Load failures surface as the core internal error
            ApiError::Data(e) => CoreError::InternalError { message: e.to_string() }
                .to_details()
                .with_suggestion("Check the transactions file and try reloading.".to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            log::error!("Request failed: {}", self);
        } else {
            log::debug!("Request rejected: {}", self);
        }
        (status, Json(self.to_details())).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
