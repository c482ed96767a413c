//! Lock-aware read paths.
//!
//! `getById`-style reads refuse to serve a record that is mid-mutation:
//! a held, unexpired lock turns the read into a `DATA_BE_LOCK` error
//! rather than returning possibly half-updated data. The probe does not
//! gate writers — that is the acquire path's job.

use sqlx::PgPool;
use stowage_core::error::CoreError;
use stowage_core::record::{RecordKey, RecordType};
use stowage_core::types::DbId;
use stowage_db::models::product::Product;
use stowage_db::models::warehouse::Warehouse;
use stowage_db::models::warehouse_zone::WarehouseZone;
use stowage_db::repositories::{LockRepo, ProductRepo, WarehouseRepo, WarehouseZoneRepo};

use crate::config::CoordConfig;
use crate::error::FlowResult;

async fn ensure_not_locked(
    pool: &PgPool,
    cfg: &CoordConfig,
    record_type: RecordType,
    id: DbId,
) -> FlowResult<()> {
    let entity = record_type.entity();
    match LockRepo::is_locked(pool, RecordKey::new(record_type, id), cfg.lock_lease_secs).await? {
        None => Err(CoreError::NotFound { entity, id }.into()),
        Some(true) => Err(CoreError::DataBeLock { entity, id }.into()),
        Some(false) => Ok(()),
    }
}

/// Fetch a warehouse, refusing with `DATA_BE_LOCK` while it is locked.
pub async fn get_warehouse_checked(
    pool: &PgPool,
    cfg: &CoordConfig,
    id: DbId,
) -> FlowResult<Warehouse> {
    ensure_not_locked(pool, cfg, RecordType::Warehouse, id).await?;
    WarehouseRepo::find_by_id(pool, id).await?.ok_or_else(|| {
        CoreError::NotFound {
            entity: "Warehouse",
            id,
        }
        .into()
    })
}

/// Fetch a zone, refusing with `DATA_BE_LOCK` while it is locked.
pub async fn get_zone_checked(
    pool: &PgPool,
    cfg: &CoordConfig,
    id: DbId,
) -> FlowResult<WarehouseZone> {
    ensure_not_locked(pool, cfg, RecordType::WarehouseZone, id).await?;
    WarehouseZoneRepo::find_by_id(pool, id).await?.ok_or_else(|| {
        CoreError::NotFound {
            entity: "WarehouseZone",
            id,
        }
        .into()
    })
}

/// Fetch a product, refusing with `DATA_BE_LOCK` while it is locked.
pub async fn get_product_checked(
    pool: &PgPool,
    cfg: &CoordConfig,
    id: DbId,
) -> FlowResult<Product> {
    ensure_not_locked(pool, cfg, RecordType::Product, id).await?;
    ProductRepo::find_by_id(pool, id).await?.ok_or_else(|| {
        CoreError::NotFound {
            entity: "Product",
            id,
        }
        .into()
    })
}
