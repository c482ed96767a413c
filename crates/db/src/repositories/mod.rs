//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Methods that must share
//! a transaction with the caller take `&mut PgConnection` instead.

pub mod lock_repo;
pub mod pricing_setting_repo;
pub mod product_repo;
pub mod tenant_allocation_repo;
pub mod warehouse_repo;
pub mod warehouse_zone_repo;

pub use lock_repo::{AcquireOutcome, LockRepo, ReleaseOutcome};
pub use pricing_setting_repo::PricingSettingRepo;
pub use product_repo::ProductRepo;
pub use tenant_allocation_repo::TenantAllocationRepo;
pub use warehouse_repo::{DebitOutcome, WarehouseRepo};
pub use warehouse_zone_repo::WarehouseZoneRepo;
