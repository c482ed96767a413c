//! Pricing settings entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stowage_core::types::{ActorId, DbId, Timestamp};

/// A row from the `pricing_settings` table (one per warehouse).
///
/// `is_auto_accepted` decides whether tenant allocation requests are
/// accepted (and the ledger debited) immediately or parked pending an
/// operator decision.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PricingSetting {
    pub id: DbId,
    #[sqlx(rename = "idWarehouse")]
    pub id_warehouse: DbId,
    #[sqlx(rename = "isAutoAccepted")]
    pub is_auto_accepted: bool,
    #[sqlx(rename = "pricePerUnit")]
    pub price_per_unit: String,
    #[sqlx(rename = "isLocked")]
    pub is_locked: bool,
    #[sqlx(rename = "whoLocked")]
    pub who_locked: Option<ActorId>,
    #[sqlx(rename = "lockedAt")]
    pub locked_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating pricing settings for a warehouse.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePricingSetting {
    pub id_warehouse: DbId,
    pub is_auto_accepted: Option<bool>,
    pub price_per_unit: Option<String>,
}

/// DTO for the lock-guarded pricing-settings patch.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePricingSetting {
    pub is_auto_accepted: Option<bool>,
    pub price_per_unit: Option<String>,
}
