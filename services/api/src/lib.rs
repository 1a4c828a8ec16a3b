//! Personal-finance HTTP API
//!
//! Authenticated create/list/get endpoints over accounts, categories,
//! transactions, budgets, recurring transactions and goals. The binary in
//! `main.rs` wires configuration and the database pool into
//! [`routes::create_router`].

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod validation;

pub use crate::config::AppConfig;
pub use crate::error::{ApiError, ApiResult};
pub use crate::routes::create_router;
pub use crate::state::AppState;
