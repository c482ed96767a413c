//! Zone provisioning workflow.
//!
//! Creating a zone is the one mutation that combines all three core
//! mechanisms: the warehouse's exclusive lock serializes changes to its
//! zone set, the spatial allocator validates the candidate against the
//! floor plan, and only then is the zone persisted. Any rejection
//! short-circuits before anything is written.

use serde::Deserialize;
use sqlx::PgPool;
use stowage_core::error::CoreError;
use stowage_core::numeric::{parse_non_negative, parse_positive};
use stowage_core::placement::{self, Floor, Footprint};
use stowage_core::record::{RecordKey, RecordType};
use stowage_core::types::DbId;
use stowage_db::models::warehouse::Warehouse;
use stowage_db::models::warehouse_zone::{CreateWarehouseZone, WarehouseZone};
use stowage_db::repositories::{WarehouseRepo, WarehouseZoneRepo};

use crate::config::CoordConfig;
use crate::error::FlowResult;
use crate::guard::with_record_lock;

/// A candidate zone as submitted by the caller: the persisted shape,
/// numeric values as text, coordinates as a JSON `{x, y}` string.
#[derive(Debug, Clone, Deserialize)]
pub struct NewZone {
    pub name: String,
    pub coordinates: String,
    pub x: String,
    pub y: String,
    pub capacity: String,
}

/// Provision a new zone in a warehouse.
///
/// Holds the warehouse's exclusive lock across read-validate-insert, so
/// concurrent provisioning calls against the same warehouse serialize
/// and cannot both pass validation on the same zone set. The lock is
/// released on every path after acquisition.
pub async fn provision_zone(
    pool: &PgPool,
    cfg: &CoordConfig,
    warehouse_id: DbId,
    input: NewZone,
    actor: &str,
) -> FlowResult<WarehouseZone> {
    let candidate = candidate_footprint(&input)?;
    let key = RecordKey::new(RecordType::Warehouse, warehouse_id);

    with_record_lock(pool, cfg, key, actor, || async move {
        let warehouse = WarehouseRepo::find_by_id(pool, warehouse_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Warehouse",
                id: warehouse_id,
            })?;
        let floor = floor_of(&warehouse)?;

        let zones = WarehouseZoneRepo::list_by_warehouse(pool, warehouse_id).await?;
        let existing = zones
            .iter()
            .map(footprint_of)
            .collect::<Result<Vec<_>, CoreError>>()?;

        placement::validate_placement(&candidate, &floor, &existing)
            .map_err(CoreError::from)?;

        let created = WarehouseZoneRepo::create(
            pool,
            &CreateWarehouseZone {
                id_warehouse: warehouse_id,
                name: input.name,
                coordinates: input.coordinates,
                x: input.x,
                y: input.y,
                capacity: input.capacity,
            },
        )
        .await?;

        tracing::info!(
            warehouse_id,
            zone_id = created.id,
            actor = %actor,
            "Zone provisioned"
        );
        Ok(created)
    })
    .await
}

/// Dry-run placement check: same loads and validation as provisioning,
/// but no lock and no write. A concurrent mutation can invalidate the
/// answer by the time the caller acts on it.
pub async fn validate_zone_placement(
    pool: &PgPool,
    warehouse_id: DbId,
    input: &NewZone,
) -> FlowResult<()> {
    let candidate = candidate_footprint(input)?;

    let warehouse = WarehouseRepo::find_by_id(pool, warehouse_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Warehouse",
            id: warehouse_id,
        })?;
    let floor = floor_of(&warehouse)?;

    let zones = WarehouseZoneRepo::list_by_warehouse(pool, warehouse_id).await?;
    let existing = zones
        .iter()
        .map(footprint_of)
        .collect::<Result<Vec<_>, CoreError>>()?;

    placement::validate_placement(&candidate, &floor, &existing).map_err(CoreError::from)?;
    Ok(())
}

/// Parse and validate a submitted candidate into a footprint.
fn candidate_footprint(input: &NewZone) -> Result<Footprint, CoreError> {
    let origin = placement::parse_coordinates(&input.coordinates)
        .and_then(|point| {
            if point.x < 0.0 || point.y < 0.0 {
                Err(format!("coordinates must not be negative: {point:?}"))
            } else {
                Ok(point)
            }
        })
        .map_err(CoreError::Validation)?;
    let len_x = parse_positive("x", &input.x).map_err(CoreError::Validation)?;
    let len_y = parse_positive("y", &input.y).map_err(CoreError::Validation)?;
    let capacity = parse_positive("capacity", &input.capacity).map_err(CoreError::Validation)?;
    Ok(Footprint {
        origin,
        len_x,
        len_y,
        capacity,
    })
}

/// Parse a warehouse row's floor plan.
fn floor_of(warehouse: &Warehouse) -> Result<Floor, CoreError> {
    let x = parse_positive("warehouse.x", &warehouse.x).map_err(CoreError::Validation)?;
    let y = parse_positive("warehouse.y", &warehouse.y).map_err(CoreError::Validation)?;
    let capacity = parse_non_negative("warehouse.capacity", &warehouse.capacity)
        .map_err(CoreError::Validation)?;
    Ok(Floor { x, y, capacity })
}

/// Parse a stored zone row's footprint. Malformed stored geometry is an
/// internal error, not a caller mistake.
fn footprint_of(zone: &WarehouseZone) -> Result<Footprint, CoreError> {
    let parsed = || -> Result<Footprint, String> {
        Ok(Footprint {
            origin: placement::parse_coordinates(&zone.coordinates)?,
            len_x: parse_positive("x", &zone.x)?,
            len_y: parse_positive("y", &zone.y)?,
            capacity: parse_positive("capacity", &zone.capacity)?,
        })
    }();
    parsed.map_err(|err| CoreError::Internal(format!("zone {} is malformed: {err}", zone.id)))
}
