//! Lock-guarded patches for the plain record types.
//!
//! These mutations need only the Lock Manager — no spatial or ledger
//! checks — and all follow the same shape through
//! [`with_record_lock`](crate::guard::with_record_lock): acquire,
//! patch, release.

use sqlx::PgPool;
use stowage_core::error::CoreError;
use stowage_core::record::{RecordKey, RecordType};
use stowage_core::types::DbId;
use stowage_db::models::pricing_setting::{PricingSetting, UpdatePricingSetting};
use stowage_db::models::product::{Product, UpdateProduct};
use stowage_db::models::warehouse::{UpdateWarehouse, Warehouse};
use stowage_db::models::warehouse_zone::{UpdateWarehouseZone, WarehouseZone};
use stowage_db::repositories::{
    PricingSettingRepo, ProductRepo, WarehouseRepo, WarehouseZoneRepo,
};

use crate::config::CoordConfig;
use crate::error::FlowResult;
use crate::guard::with_record_lock;

/// Patch a warehouse under its exclusive lock.
pub async fn update_warehouse(
    pool: &PgPool,
    cfg: &CoordConfig,
    id: DbId,
    input: UpdateWarehouse,
    actor: &str,
) -> FlowResult<Warehouse> {
    let key = RecordKey::new(RecordType::Warehouse, id);
    with_record_lock(pool, cfg, key, actor, || async move {
        let updated = WarehouseRepo::update(pool, id, &input)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Warehouse",
                id,
            })?;
        tracing::info!(warehouse_id = id, actor = %actor, "Warehouse updated");
        Ok(updated)
    })
    .await
}

/// Patch a zone under its exclusive lock.
pub async fn update_zone(
    pool: &PgPool,
    cfg: &CoordConfig,
    id: DbId,
    input: UpdateWarehouseZone,
    actor: &str,
) -> FlowResult<WarehouseZone> {
    let key = RecordKey::new(RecordType::WarehouseZone, id);
    with_record_lock(pool, cfg, key, actor, || async move {
        let updated = WarehouseZoneRepo::update(pool, id, &input)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "WarehouseZone",
                id,
            })?;
        tracing::info!(zone_id = id, actor = %actor, "Zone updated");
        Ok(updated)
    })
    .await
}

/// Patch a product under its exclusive lock.
pub async fn update_product(
    pool: &PgPool,
    cfg: &CoordConfig,
    id: DbId,
    input: UpdateProduct,
    actor: &str,
) -> FlowResult<Product> {
    let key = RecordKey::new(RecordType::Product, id);
    with_record_lock(pool, cfg, key, actor, || async move {
        let updated = ProductRepo::update(pool, id, &input)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Product",
                id,
            })?;
        tracing::info!(product_id = id, actor = %actor, "Product updated");
        Ok(updated)
    })
    .await
}

/// Patch a warehouse's pricing settings under their exclusive lock.
pub async fn update_pricing_setting(
    pool: &PgPool,
    cfg: &CoordConfig,
    id: DbId,
    input: UpdatePricingSetting,
    actor: &str,
) -> FlowResult<PricingSetting> {
    let key = RecordKey::new(RecordType::PricingSetting, id);
    with_record_lock(pool, cfg, key, actor, || async move {
        let updated = PricingSettingRepo::update(pool, id, &input)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "PricingSetting",
                id,
            })?;
        tracing::info!(pricing_setting_id = id, actor = %actor, "Pricing settings updated");
        Ok(updated)
    })
    .await
}
