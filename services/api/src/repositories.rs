//! Repositories for database operations
//!
//! One module per resource. Every query is scoped by the owning user and runs
//! on a connection borrowed from the caller, so a service decides whether a
//! call happens on a plain pooled connection or inside a store transaction.

pub mod account;
pub mod budget;
pub mod category;
pub mod goal;
pub mod recurring_transaction;
pub mod transaction;
