//! Repository for the `tenant_allocations` table.

use sqlx::{PgConnection, PgPool};
use stowage_core::types::DbId;

use crate::models::tenant_allocation::{CreateTenantAllocation, TenantAllocation};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = r#"id, "idWarehouse", "idTenant", amount, status,
    "isLocked", "whoLocked", "lockedAt", created_at, updated_at"#;

/// Provides CRUD operations for tenant-warehouse allocations.
///
/// Status transitions and ledger debits are orchestrated by the flow
/// layer; the insert and transition methods take a connection so they
/// can share a transaction with the debit.
pub struct TenantAllocationRepo;

impl TenantAllocationRepo {
    /// Insert an allocation with an explicit status.
    pub async fn create_with_status(
        conn: &mut PgConnection,
        input: &CreateTenantAllocation,
        status: &str,
    ) -> Result<TenantAllocation, sqlx::Error> {
        let query = format!(
            r#"INSERT INTO tenant_allocations ("idWarehouse", "idTenant", amount, status)
               VALUES ($1, $2, $3, $4)
               RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, TenantAllocation>(&query)
            .bind(input.id_warehouse)
            .bind(input.id_tenant)
            .bind(&input.amount)
            .bind(status)
            .fetch_one(conn)
            .await
    }

    /// Find an allocation by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TenantAllocation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tenant_allocations WHERE id = $1");
        sqlx::query_as::<_, TenantAllocation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a warehouse's allocations, newest first.
    pub async fn list_by_warehouse(
        pool: &PgPool,
        warehouse_id: DbId,
    ) -> Result<Vec<TenantAllocation>, sqlx::Error> {
        let query = format!(
            r#"SELECT {COLUMNS} FROM tenant_allocations
               WHERE "idWarehouse" = $1 ORDER BY id DESC"#
        );
        sqlx::query_as::<_, TenantAllocation>(&query)
            .bind(warehouse_id)
            .fetch_all(pool)
            .await
    }

    /// Set an allocation's status. Returns the updated row, or `None` if
    /// not found.
    pub async fn set_status(
        conn: &mut PgConnection,
        id: DbId,
        status: &str,
    ) -> Result<Option<TenantAllocation>, sqlx::Error> {
        let query = format!(
            "UPDATE tenant_allocations SET status = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TenantAllocation>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(conn)
            .await
    }
}
