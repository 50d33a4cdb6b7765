//! Error types for txweb-api

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;
use txweb_core::CoreError;
use txweb_utils::escape_html;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Internal server error: {message}")]
    InternalError { message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InvalidInput { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::TransactionNotFound { .. } => ApiError::NotFound {
                resource: "Transaction".to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        }
        let content = format!(
            r#"<div class='max-w-xl mx-auto mt-16 bg-red-50 border border-red-200 rounded-lg p-6 text-center'>
    <h3 class='text-lg font-medium text-red-800 mb-2'>{}</h3>
    <p class='text-red-600 mb-4'>{}</p>
    <a href='/' class='px-4 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700'>Back to transactions</a>
</div>"#,
            status.as_u16(),
            escape_html(&self.to_string())
        );
        (status, Html(crate::base_html(status.canonical_reason().unwrap_or("Error"), &content))).into_response()
    }
}
