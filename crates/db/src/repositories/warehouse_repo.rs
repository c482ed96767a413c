//! Repository for the `warehouses` table, including the capacity ledger.

use sqlx::{PgConnection, PgPool};
use stowage_core::types::DbId;

use crate::models::warehouse::{CreateWarehouse, UpdateWarehouse, Warehouse};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = r#"id, name, x, y, capacity, "remainingCapacity",
    "isLocked", "whoLocked", "lockedAt", created_at, updated_at"#;

/// Outcome of a conditional ledger debit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebitOutcome {
    /// `remainingCapacity` was reduced by the amount.
    Applied,
    /// The debit would take the ledger below zero; nothing was changed.
    Insufficient,
    /// No warehouse with that id exists.
    Missing,
}

/// Provides CRUD operations and the capacity ledger for warehouses.
pub struct WarehouseRepo;

impl WarehouseRepo {
    /// Insert a new warehouse. The ledger starts full:
    /// `remainingCapacity` = `capacity`.
    pub async fn create(pool: &PgPool, input: &CreateWarehouse) -> Result<Warehouse, sqlx::Error> {
        let query = format!(
            r#"INSERT INTO warehouses (name, x, y, capacity, "remainingCapacity")
               VALUES ($1, $2, $3, $4, $4)
               RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, Warehouse>(&query)
            .bind(&input.name)
            .bind(&input.x)
            .bind(&input.y)
            .bind(&input.capacity)
            .fetch_one(pool)
            .await
    }

    /// Find a warehouse by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Warehouse>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM warehouses WHERE id = $1");
        sqlx::query_as::<_, Warehouse>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all warehouses, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Warehouse>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM warehouses ORDER BY id DESC");
        sqlx::query_as::<_, Warehouse>(&query).fetch_all(pool).await
    }

    /// Update a warehouse. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateWarehouse,
    ) -> Result<Option<Warehouse>, sqlx::Error> {
        let query = format!(
            "UPDATE warehouses SET
                name = COALESCE($2, name),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Warehouse>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Debit the capacity ledger by `amount`.
    ///
    /// One conditional update with a floor check: the ledger can never go
    /// negative. Takes a connection so the caller can run the debit in
    /// the same transaction as the state transition that triggered it.
    pub async fn debit_remaining(
        conn: &mut PgConnection,
        warehouse_id: DbId,
        amount: f64,
    ) -> Result<DebitOutcome, sqlx::Error> {
        let result = sqlx::query(
            r#"UPDATE warehouses
               SET "remainingCapacity" = (("remainingCapacity")::numeric - $2::numeric)::text,
                   updated_at = NOW()
               WHERE id = $1 AND ("remainingCapacity")::numeric >= $2::numeric"#,
        )
        .bind(warehouse_id)
        .bind(amount)
        .execute(&mut *conn)
        .await?;

        if result.rows_affected() > 0 {
            return Ok(DebitOutcome::Applied);
        }
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM warehouses WHERE id = $1)",
        )
        .bind(warehouse_id)
        .fetch_one(&mut *conn)
        .await?;
        Ok(if exists {
            DebitOutcome::Insufficient
        } else {
            DebitOutcome::Missing
        })
    }
}
