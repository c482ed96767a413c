//! Persistence layer for the stowage coordination core.
//!
//! Row models and DTOs live in [`models`], zero-sized repositories with
//! async methods over `&PgPool` in [`repositories`]. Column names keep
//! the legacy camel-case spellings (`"isLocked"`, `"remainingCapacity"`)
//! for compatibility with the existing store.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}
