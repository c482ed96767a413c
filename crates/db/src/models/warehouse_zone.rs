//! Warehouse zone entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stowage_core::types::{ActorId, DbId, Timestamp};

/// A row from the `warehouse_zones` table.
///
/// `coordinates` holds the JSON `{x, y}` origin point; `x` is the length
/// along the warehouse width axis and `y` the width along the depth
/// axis, both numeric-valued text.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WarehouseZone {
    pub id: DbId,
    #[sqlx(rename = "idWarehouse")]
    pub id_warehouse: DbId,
    pub name: String,
    pub coordinates: String,
    pub x: String,
    pub y: String,
    pub capacity: String,
    #[sqlx(rename = "isLocked")]
    pub is_locked: bool,
    #[sqlx(rename = "whoLocked")]
    pub who_locked: Option<ActorId>,
    #[sqlx(rename = "lockedAt")]
    pub locked_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a zone. Only the provisioning workflow inserts these,
/// after placement validation has accepted the candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWarehouseZone {
    pub id_warehouse: DbId,
    pub name: String,
    pub coordinates: String,
    pub x: String,
    pub y: String,
    pub capacity: String,
}

/// DTO for the lock-guarded zone patch. Geometry and capacity are fixed
/// once placed; there is no zone delete path.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateWarehouseZone {
    pub name: Option<String>,
}
