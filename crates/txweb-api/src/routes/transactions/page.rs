//! Transactions page rendering - Full page endpoints
//!
//! Endpoints:
//! - page_transactions: Transaction list
//! - page_transaction_create: Empty create form
//! - page_transaction_edit: Pre-filled edit form, 404 for unknown ids

use crate::render::{TEMPLATE_CREATE, TEMPLATE_EDIT, TEMPLATE_LIST};
use crate::{ApiError, AppState};
use axum::response::Html;
use serde_json::json;

/// Transactions page - every record in insertion order
pub async fn page_transactions(
    state: axum::extract::State<AppState>,
) -> Result<Html<String>, ApiError> {
    let store = state.store.read().await;
    let context = json!({ "transactions": store.list_all() });
    state.renderer.render(TEMPLATE_LIST, &context).map(Html)
}

/// Empty create form
pub async fn page_transaction_create(
    state: axum::extract::State<AppState>,
) -> Result<Html<String>, ApiError> {
    state.renderer.render(TEMPLATE_CREATE, &json!({})).map(Html)
}

/// Edit form for an existing transaction
pub async fn page_transaction_edit(
    state: axum::extract::State<AppState>,
    path: axum::extract::Path<i64>,
) -> Result<Html<String>, ApiError> {
    let transaction_id = path.0;
    let store = state.store.read().await;
    let transaction = store.get(transaction_id).map_err(|e| {
        log::debug!("Edit form requested for unknown transaction {}", transaction_id);
        ApiError::from(e)
    })?;
    let context = json!({ "transaction": transaction });
    state.renderer.render(TEMPLATE_EDIT, &context).map(Html)
}
