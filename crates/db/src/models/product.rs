//! Product entity model and DTOs.
//!
//! Products carry no coordination-core state beyond the lock columns;
//! they stand in for the ~15 entity types whose updates go through the
//! generic lock guard.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stowage_core::types::{ActorId, DbId, Timestamp};

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    #[sqlx(rename = "idCategory")]
    pub id_category: Option<DbId>,
    #[sqlx(rename = "isLocked")]
    pub is_locked: bool,
    #[sqlx(rename = "whoLocked")]
    pub who_locked: Option<ActorId>,
    #[sqlx(rename = "lockedAt")]
    pub locked_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new product.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub id_category: Option<DbId>,
}

/// DTO for updating a product. All fields optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub id_category: Option<DbId>,
}
