//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Legacy camel-case columns are mapped with `#[sqlx(rename = ...)]`.

pub mod pricing_setting;
pub mod product;
pub mod tenant_allocation;
pub mod warehouse;
pub mod warehouse_zone;
