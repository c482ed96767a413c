//! Integration tests for the tenant allocation flow.
//!
//! The ledger debit must ride the same transaction as the allocation's
//! status transition: acceptance debits exactly once, failures leave
//! both sides untouched.

use assert_matches::assert_matches;
use sqlx::PgPool;
use stowage_core::allocation::{STATUS_ACCEPTED, STATUS_PENDING, STATUS_REJECTED};
use stowage_core::error::CoreError;
use stowage_core::record::{RecordKey, RecordType};
use stowage_core::types::DbId;
use stowage_db::models::pricing_setting::CreatePricingSetting;
use stowage_db::models::tenant_allocation::CreateTenantAllocation;
use stowage_db::models::warehouse::CreateWarehouse;
use stowage_db::repositories::{
    LockRepo, PricingSettingRepo, TenantAllocationRepo, WarehouseRepo,
};
use stowage_flow::allocation::{approve_allocation, reject_allocation, request_allocation};
use stowage_flow::{CoordConfig, FlowError};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn cfg() -> CoordConfig {
    CoordConfig::default()
}

async fn new_warehouse(pool: &PgPool, capacity: &str, auto_accept: bool) -> DbId {
    let warehouse = WarehouseRepo::create(
        pool,
        &CreateWarehouse {
            name: "Allocation test".to_string(),
            x: "100".to_string(),
            y: "100".to_string(),
            capacity: capacity.to_string(),
        },
    )
    .await
    .unwrap();
    PricingSettingRepo::create(
        pool,
        &CreatePricingSetting {
            id_warehouse: warehouse.id,
            is_auto_accepted: Some(auto_accept),
            price_per_unit: Some("2.5".to_string()),
        },
    )
    .await
    .unwrap();
    warehouse.id
}

async fn new_tenant(pool: &PgPool) -> DbId {
    sqlx::query_scalar("INSERT INTO tenants (name) VALUES ('Acme Goods') RETURNING id")
        .fetch_one(pool)
        .await
        .unwrap()
}

fn request(warehouse_id: DbId, tenant_id: DbId, amount: &str) -> CreateTenantAllocation {
    CreateTenantAllocation {
        id_warehouse: warehouse_id,
        id_tenant: tenant_id,
        amount: amount.to_string(),
    }
}

async fn remaining(pool: &PgPool, id: DbId) -> String {
    WarehouseRepo::find_by_id(pool, id)
        .await
        .unwrap()
        .unwrap()
        .remaining_capacity
}

// ---------------------------------------------------------------------------
// Test: manual warehouses park requests as pending
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_request_parks_pending_without_auto_accept(pool: PgPool) {
    let warehouse_id = new_warehouse(&pool, "1000", false).await;
    let tenant_id = new_tenant(&pool).await;

    let allocation = request_allocation(&pool, request(warehouse_id, tenant_id, "300"))
        .await
        .unwrap();

    assert_eq!(allocation.status, STATUS_PENDING);
    assert_eq!(remaining(&pool, warehouse_id).await, "1000");
}

// ---------------------------------------------------------------------------
// Test: auto-accept debits the ledger immediately
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_request_auto_accept_debits_ledger(pool: PgPool) {
    let warehouse_id = new_warehouse(&pool, "1000", true).await;
    let tenant_id = new_tenant(&pool).await;

    let allocation = request_allocation(&pool, request(warehouse_id, tenant_id, "300"))
        .await
        .unwrap();

    assert_eq!(allocation.status, STATUS_ACCEPTED);
    assert_eq!(remaining(&pool, warehouse_id).await, "700");
}

// ---------------------------------------------------------------------------
// Test: an auto-accept the ledger cannot cover fails whole
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_request_auto_accept_insufficient_fails_whole(pool: PgPool) {
    let warehouse_id = new_warehouse(&pool, "200", true).await;
    let tenant_id = new_tenant(&pool).await;

    let err = request_allocation(&pool, request(warehouse_id, tenant_id, "300"))
        .await
        .unwrap_err();

    assert_matches!(
        err,
        FlowError::Core(CoreError::InsufficientCapacity { .. })
    );
    assert_eq!(remaining(&pool, warehouse_id).await, "200");
    // The rolled-back insert must not leave an allocation row behind.
    let allocations = TenantAllocationRepo::list_by_warehouse(&pool, warehouse_id)
        .await
        .unwrap();
    assert!(allocations.is_empty());
}

// ---------------------------------------------------------------------------
// Test: approval transitions and debits exactly once
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_approve_debits_once(pool: PgPool) {
    let warehouse_id = new_warehouse(&pool, "1000", false).await;
    let tenant_id = new_tenant(&pool).await;
    let allocation = request_allocation(&pool, request(warehouse_id, tenant_id, "400"))
        .await
        .unwrap();

    let approved = approve_allocation(&pool, &cfg(), allocation.id, "7").await.unwrap();
    assert_eq!(approved.status, STATUS_ACCEPTED);
    assert_eq!(remaining(&pool, warehouse_id).await, "600");

    // A second approval is refused and does not debit again.
    let err = approve_allocation(&pool, &cfg(), allocation.id, "7").await.unwrap_err();
    assert_eq!(err.code(), "VALIDATION_ERROR");
    assert_eq!(remaining(&pool, warehouse_id).await, "600");
}

// ---------------------------------------------------------------------------
// Test: approval the ledger cannot cover leaves the allocation pending
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_approve_insufficient_rolls_back(pool: PgPool) {
    let warehouse_id = new_warehouse(&pool, "1000", true).await;
    let tenant_id = new_tenant(&pool).await;

    // Auto-accepted request drains most of the ledger...
    request_allocation(&pool, request(warehouse_id, tenant_id, "900"))
        .await
        .unwrap();

    // ...then flip to manual and park a request the remainder can't cover.
    let settings = PricingSettingRepo::find_by_warehouse(&pool, warehouse_id)
        .await
        .unwrap()
        .unwrap();
    PricingSettingRepo::update(
        &pool,
        settings.id,
        &stowage_db::models::pricing_setting::UpdatePricingSetting {
            is_auto_accepted: Some(false),
            price_per_unit: None,
        },
    )
    .await
    .unwrap();
    let pending = request_allocation(&pool, request(warehouse_id, tenant_id, "200"))
        .await
        .unwrap();

    let err = approve_allocation(&pool, &cfg(), pending.id, "7").await.unwrap_err();
    assert_matches!(
        err,
        FlowError::Core(CoreError::InsufficientCapacity { .. })
    );

    // Transition rolled back with the debit.
    let reloaded = TenantAllocationRepo::find_by_id(&pool, pending.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.status, STATUS_PENDING);
    assert_eq!(remaining(&pool, warehouse_id).await, "100");
}

// ---------------------------------------------------------------------------
// Test: rejection commits nothing to the ledger
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_reject_commits_no_capacity(pool: PgPool) {
    let warehouse_id = new_warehouse(&pool, "1000", false).await;
    let tenant_id = new_tenant(&pool).await;
    let allocation = request_allocation(&pool, request(warehouse_id, tenant_id, "400"))
        .await
        .unwrap();

    let rejected = reject_allocation(&pool, &cfg(), allocation.id, "7").await.unwrap();
    assert_eq!(rejected.status, STATUS_REJECTED);
    assert_eq!(remaining(&pool, warehouse_id).await, "1000");

    // Decisions are final.
    let err = approve_allocation(&pool, &cfg(), allocation.id, "7").await.unwrap_err();
    assert_eq!(err.code(), "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Test: a locked allocation refuses approval
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_approve_refused_while_allocation_locked(pool: PgPool) {
    let warehouse_id = new_warehouse(&pool, "1000", false).await;
    let tenant_id = new_tenant(&pool).await;
    let allocation = request_allocation(&pool, request(warehouse_id, tenant_id, "400"))
        .await
        .unwrap();

    let key = RecordKey::new(RecordType::TenantAllocation, allocation.id);
    LockRepo::try_lock(&pool, key, "9", cfg().lock_lease_secs).await.unwrap();

    let err = approve_allocation(&pool, &cfg(), allocation.id, "7").await.unwrap_err();
    assert_matches!(
        err,
        FlowError::Core(CoreError::AlreadyLocked { entity: "TenantAllocation", .. })
    );
    assert_eq!(remaining(&pool, warehouse_id).await, "1000");
}

// ---------------------------------------------------------------------------
// Test: requests against a missing warehouse
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_request_missing_warehouse(pool: PgPool) {
    let tenant_id = new_tenant(&pool).await;
    let err = request_allocation(&pool, request(999_999, tenant_id, "100"))
        .await
        .unwrap_err();
    assert_matches!(
        err,
        FlowError::Core(CoreError::NotFound { entity: "Warehouse", .. })
    );
}

// ---------------------------------------------------------------------------
// Test: non-numeric amounts are refused up front
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_request_rejects_bad_amount(pool: PgPool) {
    let warehouse_id = new_warehouse(&pool, "1000", true).await;
    let tenant_id = new_tenant(&pool).await;

    let err = request_allocation(&pool, request(warehouse_id, tenant_id, "ten"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "VALIDATION_ERROR");

    let err = request_allocation(&pool, request(warehouse_id, tenant_id, "-5"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "VALIDATION_ERROR");
}
