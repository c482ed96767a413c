//! Tenant allocation entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stowage_core::types::{ActorId, DbId, Timestamp};

/// A row from the `tenant_allocations` table.
///
/// `amount` is the requested capacity as numeric-valued text; `status`
/// is one of `stowage_core::allocation::VALID_STATUSES`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TenantAllocation {
    pub id: DbId,
    #[sqlx(rename = "idWarehouse")]
    pub id_warehouse: DbId,
    #[sqlx(rename = "idTenant")]
    pub id_tenant: DbId,
    pub amount: String,
    pub status: String,
    #[sqlx(rename = "isLocked")]
    pub is_locked: bool,
    #[sqlx(rename = "whoLocked")]
    pub who_locked: Option<ActorId>,
    #[sqlx(rename = "lockedAt")]
    pub locked_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for a tenant's allocation request. The status is decided by the
/// allocation flow, never supplied by the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTenantAllocation {
    pub id_warehouse: DbId,
    pub id_tenant: DbId,
    pub amount: String,
}
