//! Repository for the `warehouse_zones` table.

use sqlx::PgPool;
use stowage_core::types::DbId;

use crate::models::warehouse_zone::{CreateWarehouseZone, UpdateWarehouseZone, WarehouseZone};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = r#"id, "idWarehouse", name, coordinates, x, y, capacity,
    "isLocked", "whoLocked", "lockedAt", created_at, updated_at"#;

/// Provides CRUD operations for warehouse zones.
///
/// Inserts come only from the provisioning workflow, after placement
/// validation; there is no delete method (no flow removes zones).
pub struct WarehouseZoneRepo;

impl WarehouseZoneRepo {
    /// Insert an accepted zone.
    pub async fn create(
        pool: &PgPool,
        input: &CreateWarehouseZone,
    ) -> Result<WarehouseZone, sqlx::Error> {
        let query = format!(
            r#"INSERT INTO warehouse_zones ("idWarehouse", name, coordinates, x, y, capacity)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, WarehouseZone>(&query)
            .bind(input.id_warehouse)
            .bind(&input.name)
            .bind(&input.coordinates)
            .bind(&input.x)
            .bind(&input.y)
            .bind(&input.capacity)
            .fetch_one(pool)
            .await
    }

    /// Find a zone by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<WarehouseZone>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM warehouse_zones WHERE id = $1");
        sqlx::query_as::<_, WarehouseZone>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a warehouse's zone set in placement order.
    pub async fn list_by_warehouse(
        pool: &PgPool,
        warehouse_id: DbId,
    ) -> Result<Vec<WarehouseZone>, sqlx::Error> {
        let query =
            format!(r#"SELECT {COLUMNS} FROM warehouse_zones WHERE "idWarehouse" = $1 ORDER BY id"#);
        sqlx::query_as::<_, WarehouseZone>(&query)
            .bind(warehouse_id)
            .fetch_all(pool)
            .await
    }

    /// Update a zone. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateWarehouseZone,
    ) -> Result<Option<WarehouseZone>, sqlx::Error> {
        let query = format!(
            "UPDATE warehouse_zones SET
                name = COALESCE($2, name),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WarehouseZone>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }
}
