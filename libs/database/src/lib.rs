//! PostgreSQL connectivity for the products service
//!
//! `config` feature: load [`postgres::PostgresConfig`] with `core_config::FromEnv`.
//!
//! ```ignore
//! let db = connect_from_config_with_retry(PostgresConfig::from_env()?, Some(RetryConfig::new())).await?;
//! run_migrations::<migration::Migrator>(&db, "products_api").await?;
//! ```

pub mod common;

#[cfg(feature = "postgres")]
pub mod postgres;

#[cfg(feature = "postgres")]
mod repository;

pub use common::{DatabaseError, DatabaseResult, RetryConfig};

#[cfg(feature = "postgres")]
pub use repository::BaseRepository;
