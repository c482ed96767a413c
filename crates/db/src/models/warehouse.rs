//! Warehouse entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stowage_core::types::{ActorId, DbId, Timestamp};

/// A row from the `warehouses` table.
///
/// Floor dimensions and capacities are numeric-valued text parsed at use
/// time (`stowage_core::numeric`); `remaining_capacity` is the tenant
/// allocation ledger, distinct from the per-zone capacity budget.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Warehouse {
    pub id: DbId,
    pub name: String,
    pub x: String,
    pub y: String,
    pub capacity: String,
    #[sqlx(rename = "remainingCapacity")]
    pub remaining_capacity: String,
    #[sqlx(rename = "isLocked")]
    pub is_locked: bool,
    #[sqlx(rename = "whoLocked")]
    pub who_locked: Option<ActorId>,
    #[sqlx(rename = "lockedAt")]
    pub locked_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new warehouse. `remainingCapacity` starts equal to
/// `capacity`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWarehouse {
    pub name: String,
    pub x: String,
    pub y: String,
    pub capacity: String,
}

/// DTO for updating a warehouse. Dimensions and capacity are fixed after
/// creation; only descriptive fields are patchable.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateWarehouse {
    pub name: Option<String>,
}
