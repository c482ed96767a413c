//! Repository for the `pricing_settings` table.

use sqlx::PgPool;
use stowage_core::types::DbId;

use crate::models::pricing_setting::{CreatePricingSetting, PricingSetting, UpdatePricingSetting};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = r#"id, "idWarehouse", "isAutoAccepted", "pricePerUnit",
    "isLocked", "whoLocked", "lockedAt", created_at, updated_at"#;

/// Provides CRUD operations for per-warehouse pricing settings.
pub struct PricingSettingRepo;

impl PricingSettingRepo {
    /// Insert pricing settings for a warehouse (one row per warehouse).
    pub async fn create(
        pool: &PgPool,
        input: &CreatePricingSetting,
    ) -> Result<PricingSetting, sqlx::Error> {
        let query = format!(
            r#"INSERT INTO pricing_settings ("idWarehouse", "isAutoAccepted", "pricePerUnit")
               VALUES ($1, COALESCE($2, FALSE), COALESCE($3, '0'))
               RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, PricingSetting>(&query)
            .bind(input.id_warehouse)
            .bind(input.is_auto_accepted)
            .bind(&input.price_per_unit)
            .fetch_one(pool)
            .await
    }

    /// Find the pricing settings for a warehouse.
    pub async fn find_by_warehouse(
        pool: &PgPool,
        warehouse_id: DbId,
    ) -> Result<Option<PricingSetting>, sqlx::Error> {
        let query = format!(r#"SELECT {COLUMNS} FROM pricing_settings WHERE "idWarehouse" = $1"#);
        sqlx::query_as::<_, PricingSetting>(&query)
            .bind(warehouse_id)
            .fetch_optional(pool)
            .await
    }

    /// Update pricing settings. Only non-`None` fields in `input` are
    /// applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePricingSetting,
    ) -> Result<Option<PricingSetting>, sqlx::Error> {
        let query = format!(
            r#"UPDATE pricing_settings SET
                "isAutoAccepted" = COALESCE($2, "isAutoAccepted"),
                "pricePerUnit" = COALESCE($3, "pricePerUnit"),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, PricingSetting>(&query)
            .bind(id)
            .bind(input.is_auto_accepted)
            .bind(&input.price_per_unit)
            .fetch_optional(pool)
            .await
    }
}
