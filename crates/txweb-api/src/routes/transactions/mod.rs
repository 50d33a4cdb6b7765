//! Transaction routes
//!
//! Every mutating route answers `303 See Other` pointing at `/`, so a
//! browser refresh after a submit re-issues the list GET.
//!
//! Structure:
//! - api.rs: Form submissions and JSON API endpoints
//! - page.rs: Full page rendering

pub mod api;
pub mod page;

pub use api::{
    api_transactions,
    api_transaction_detail,
    transaction_store,
    transaction_update,
    transaction_delete,
    TransactionForm,
};

pub use page::{
    page_transactions,
    page_transaction_create,
    page_transaction_edit,
};
