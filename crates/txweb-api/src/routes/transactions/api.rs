//! Transaction form submissions and JSON API endpoints
//!
//! Endpoints:
//! - transaction_store: Create from form, redirect to list
//! - transaction_update: Update from form, redirect to list
//! - transaction_delete: Delete, redirect to list
//! - api_transactions: All transactions (JSON)
//! - api_transaction_detail: Single transaction (JSON)
//!
//! Update and delete on an unknown id do nothing and still redirect; only
//! the edit form page answers 404.
//!
//! Amounts must be finite. `f64` parsing accepts `nan` and `inf`, which
//! cannot be displayed or serialized, so those are rejected with 422 before
//! the store is touched.

use crate::{ApiError, AppState};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use serde::Deserialize;

/// Create/edit form body
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionForm {
    pub date: String,
    pub amount: f64,
}

impl TransactionForm {
    /// Reject values the framework parses but the store cannot hold
    pub fn validate(&self) -> Result<(), ApiError> {
        if !self.amount.is_finite() {
            return Err(ApiError::InvalidInput {
                message: format!("amount must be a finite number, got {}", self.amount),
            });
        }
        Ok(())
    }
}

/// Store new transaction
pub async fn transaction_store(
    state: axum::extract::State<AppState>,
    form: axum::extract::Form<TransactionForm>,
) -> Result<Redirect, ApiError> {
    let form = form.0;
    form.validate()?;
    let mut store = state.store.write().await;
    let created = store.create(form.date, form.amount);
    log::info!("Created transaction {} ({}, {})", created.id, created.date, created.amount);
    Ok(Redirect::to("/"))
}

/// Update an existing transaction in place
pub async fn transaction_update(
    state: axum::extract::State<AppState>,
    path: axum::extract::Path<i64>,
    form: axum::extract::Form<TransactionForm>,
) -> Result<Redirect, ApiError> {
    let transaction_id = path.0;
    let form = form.0;
    form.validate()?;
    let mut store = state.store.write().await;
    if store.update_by_id(transaction_id, form.date, form.amount) {
        log::info!("Updated transaction {}", transaction_id);
    } else {
        log::debug!("Update ignored, transaction {} does not exist", transaction_id);
    }
    Ok(Redirect::to("/"))
}

/// Delete a transaction
pub async fn transaction_delete(
    state: axum::extract::State<AppState>,
    path: axum::extract::Path<i64>,
) -> Redirect {
    let transaction_id = path.0;
    let mut store = state.store.write().await;
    if store.delete_by_id(transaction_id) {
        log::info!("Deleted transaction {}", transaction_id);
    } else {
        log::debug!("Delete ignored, transaction {} does not exist", transaction_id);
    }
    Redirect::to("/")
}

/// Get all transactions (JSON API)
pub async fn api_transactions(
    state: axum::extract::State<AppState>,
) -> Json<Vec<txweb_core::Transaction>> {
    let store = state.store.read().await;
    Json(store.list_all().to_vec())
}

/// Get single transaction (JSON API)
pub async fn api_transaction_detail(
    state: axum::extract::State<AppState>,
    path: axum::extract::Path<i64>,
) -> Response {
    let store = state.store.read().await;
    match store.get(path.0) {
        Ok(tx) => Json(tx.clone()).into_response(),
        Err(e) => (StatusCode::NOT_FOUND, Json(e.to_details())).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(amount: f64) -> TransactionForm {
        TransactionForm { date: "2025-07-01".to_string(), amount }
    }

    #[test]
    fn test_validate_accepts_finite_amounts() {
        assert!(form(0.0).validate().is_ok());
        assert!(form(-200.0).validate().is_ok());
        assert!(form(f64::MAX).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_finite_amounts() {
        for amount in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = form(amount).validate().unwrap_err();
            assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        }
    }
}
