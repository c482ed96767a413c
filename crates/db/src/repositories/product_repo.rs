//! Repository for the `products` table.
//!
//! Products have no coordination-core state of their own; this repo
//! exists so the lock-guarded update path has a representative entity
//! to exercise.

use sqlx::PgPool;
use stowage_core::types::DbId;

use crate::models::product::{CreateProduct, Product, UpdateProduct};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = r#"id, name, "idCategory",
    "isLocked", "whoLocked", "lockedAt", created_at, updated_at"#;

/// Provides CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            r#"INSERT INTO products (name, "idCategory")
               VALUES ($1, $2)
               RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(input.id_category)
            .fetch_one(pool)
            .await
    }

    /// Find a product by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all products by name.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY name");
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    /// Update a product. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            r#"UPDATE products SET
                name = COALESCE($2, name),
                "idCategory" = COALESCE($3, "idCategory"),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.id_category)
            .fetch_optional(pool)
            .await
    }

    /// Delete a product. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
