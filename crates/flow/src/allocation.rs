//! Tenant allocation flow.
//!
//! An allocation commits part of a warehouse's `remainingCapacity` to a
//! tenant. Acceptance — immediate when the warehouse's pricing settings
//! auto-accept, otherwise by operator approval — debits the ledger in
//! the same transaction as the status transition, so the two can never
//! diverge.

use sqlx::PgPool;
use stowage_core::allocation::{validate_transition, STATUS_ACCEPTED, STATUS_PENDING, STATUS_REJECTED};
use stowage_core::error::CoreError;
use stowage_core::numeric::parse_positive;
use stowage_core::record::{RecordKey, RecordType};
use stowage_core::types::DbId;
use stowage_db::models::tenant_allocation::{CreateTenantAllocation, TenantAllocation};
use stowage_db::repositories::{
    DebitOutcome, PricingSettingRepo, TenantAllocationRepo, WarehouseRepo,
};

use crate::config::CoordConfig;
use crate::error::FlowResult;
use crate::guard::with_record_lock;

/// File a tenant's allocation request against a warehouse.
///
/// With auto-accepting pricing settings the allocation is inserted
/// `accepted` and the ledger debited atomically; a request the ledger
/// cannot cover fails whole. Otherwise the allocation is parked
/// `pending` for an operator.
pub async fn request_allocation(
    pool: &PgPool,
    input: CreateTenantAllocation,
) -> FlowResult<TenantAllocation> {
    let amount = parse_positive("amount", &input.amount).map_err(CoreError::Validation)?;

    WarehouseRepo::find_by_id(pool, input.id_warehouse)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Warehouse",
            id: input.id_warehouse,
        })?;

    let auto_accepted = PricingSettingRepo::find_by_warehouse(pool, input.id_warehouse)
        .await?
        .map(|settings| settings.is_auto_accepted)
        .unwrap_or(false);

    if !auto_accepted {
        let mut conn = pool.acquire().await?;
        let allocation =
            TenantAllocationRepo::create_with_status(&mut *conn, &input, STATUS_PENDING).await?;
        tracing::info!(
            allocation_id = allocation.id,
            warehouse_id = input.id_warehouse,
            tenant_id = input.id_tenant,
            "Allocation requested, pending approval"
        );
        return Ok(allocation);
    }

    let mut tx = pool.begin().await?;
    let allocation =
        TenantAllocationRepo::create_with_status(&mut *tx, &input, STATUS_ACCEPTED).await?;
    match WarehouseRepo::debit_remaining(&mut *tx, input.id_warehouse, amount).await? {
        DebitOutcome::Applied => {
            tx.commit().await?;
            tracing::info!(
                allocation_id = allocation.id,
                warehouse_id = input.id_warehouse,
                tenant_id = input.id_tenant,
                amount,
                "Allocation auto-accepted"
            );
            Ok(allocation)
        }
        DebitOutcome::Insufficient => {
            tx.rollback().await?;
            Err(CoreError::InsufficientCapacity {
                warehouse_id: input.id_warehouse,
            }
            .into())
        }
        DebitOutcome::Missing => {
            tx.rollback().await?;
            Err(CoreError::NotFound {
                entity: "Warehouse",
                id: input.id_warehouse,
            }
            .into())
        }
    }
}

/// Approve a pending allocation.
///
/// Lock-guarded on the allocation record; the `pending → accepted`
/// transition and the ledger debit commit or roll back together.
pub async fn approve_allocation(
    pool: &PgPool,
    cfg: &CoordConfig,
    allocation_id: DbId,
    actor: &str,
) -> FlowResult<TenantAllocation> {
    let key = RecordKey::new(RecordType::TenantAllocation, allocation_id);
    with_record_lock(pool, cfg, key, actor, || async move {
        let allocation = TenantAllocationRepo::find_by_id(pool, allocation_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "TenantAllocation",
                id: allocation_id,
            })?;
        validate_transition(&allocation.status, STATUS_ACCEPTED).map_err(CoreError::Validation)?;
        let amount = parse_positive("amount", &allocation.amount).map_err(|err| {
            CoreError::Internal(format!("allocation {allocation_id} is malformed: {err}"))
        })?;

        let mut tx = pool.begin().await?;
        let updated = TenantAllocationRepo::set_status(&mut *tx, allocation_id, STATUS_ACCEPTED)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "TenantAllocation",
                id: allocation_id,
            })?;
        match WarehouseRepo::debit_remaining(&mut *tx, allocation.id_warehouse, amount).await? {
            DebitOutcome::Applied => {
                tx.commit().await?;
                tracing::info!(
                    allocation_id,
                    warehouse_id = allocation.id_warehouse,
                    amount,
                    actor = %actor,
                    "Allocation approved"
                );
                Ok(updated)
            }
            DebitOutcome::Insufficient => {
                tx.rollback().await?;
                Err(CoreError::InsufficientCapacity {
                    warehouse_id: allocation.id_warehouse,
                }
                .into())
            }
            DebitOutcome::Missing => {
                tx.rollback().await?;
                Err(CoreError::NotFound {
                    entity: "Warehouse",
                    id: allocation.id_warehouse,
                }
                .into())
            }
        }
    })
    .await
}

/// Reject a pending allocation. Lock-guarded; no capacity is committed.
pub async fn reject_allocation(
    pool: &PgPool,
    cfg: &CoordConfig,
    allocation_id: DbId,
    actor: &str,
) -> FlowResult<TenantAllocation> {
    let key = RecordKey::new(RecordType::TenantAllocation, allocation_id);
    with_record_lock(pool, cfg, key, actor, || async move {
        let allocation = TenantAllocationRepo::find_by_id(pool, allocation_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "TenantAllocation",
                id: allocation_id,
            })?;
        validate_transition(&allocation.status, STATUS_REJECTED).map_err(CoreError::Validation)?;

        let mut conn = pool.acquire().await?;
        let updated = TenantAllocationRepo::set_status(&mut *conn, allocation_id, STATUS_REJECTED)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "TenantAllocation",
                id: allocation_id,
            })?;
        tracing::info!(
            allocation_id,
            warehouse_id = allocation.id_warehouse,
            actor = %actor,
            "Allocation rejected"
        );
        Ok(updated)
    })
    .await
}
