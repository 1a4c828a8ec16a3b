//! Common library for the finance services
//!
//! This crate provides the store connectivity shared by the authentication
//! library and the API service: connection pooling, health checks, schema
//! migrations, and the database error taxonomy.
//!
//! ```rust,no_run
//! use common::database::{DatabaseConfig, health_check, init_pool, run_migrations};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env()?;
//!     let pool = init_pool(&config).await?;
//!     assert!(health_check(&pool).await?);
//!     run_migrations(&pool).await?;
//!     Ok(())
//! }
//! ```

pub mod database;
pub mod error;
