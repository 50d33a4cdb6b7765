//! Route modules for the API server
//!
//! - transactions: list, create, edit and delete pages plus the JSON API
//!
//! Each module follows a consistent structure:
//! - mod.rs: Module declaration and exports
//! - api.rs: Form submissions and JSON API endpoints
//! - page.rs: Page rendering

pub mod transactions;
