//! Registry of lockable record types.
//!
//! Every mutable business entity that carries the `isLocked` /
//! `whoLocked` / `lockedAt` columns is listed here. The lock repository
//! is generic over this enum; adding a lockable table means adding a
//! variant and a migration, nothing else.

use crate::types::DbId;

/// A business entity type whose rows can be exclusively locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    Account,
    Partner,
    Tenant,
    Warehouse,
    WarehouseZone,
    Product,
    ProductCategory,
    Receipt,
    ReceiptLine,
    PricingSetting,
    TenantAllocation,
    Carrier,
    Shipment,
    StockMovement,
    Tariff,
}

impl RecordType {
    /// Every lockable type, in table order. The sweeper iterates this.
    pub const ALL: &'static [RecordType] = &[
        RecordType::Account,
        RecordType::Partner,
        RecordType::Tenant,
        RecordType::Warehouse,
        RecordType::WarehouseZone,
        RecordType::Product,
        RecordType::ProductCategory,
        RecordType::Receipt,
        RecordType::ReceiptLine,
        RecordType::PricingSetting,
        RecordType::TenantAllocation,
        RecordType::Carrier,
        RecordType::Shipment,
        RecordType::StockMovement,
        RecordType::Tariff,
    ];

    /// Name of the backing table. Used to build lock statements; never
    /// derived from user input.
    pub fn table_name(self) -> &'static str {
        match self {
            RecordType::Account => "accounts",
            RecordType::Partner => "partners",
            RecordType::Tenant => "tenants",
            RecordType::Warehouse => "warehouses",
            RecordType::WarehouseZone => "warehouse_zones",
            RecordType::Product => "products",
            RecordType::ProductCategory => "product_categories",
            RecordType::Receipt => "receipts",
            RecordType::ReceiptLine => "receipt_lines",
            RecordType::PricingSetting => "pricing_settings",
            RecordType::TenantAllocation => "tenant_allocations",
            RecordType::Carrier => "carriers",
            RecordType::Shipment => "shipments",
            RecordType::StockMovement => "stock_movements",
            RecordType::Tariff => "tariffs",
        }
    }

    /// Display name used in error messages.
    pub fn entity(self) -> &'static str {
        match self {
            RecordType::Account => "Account",
            RecordType::Partner => "Partner",
            RecordType::Tenant => "Tenant",
            RecordType::Warehouse => "Warehouse",
            RecordType::WarehouseZone => "WarehouseZone",
            RecordType::Product => "Product",
            RecordType::ProductCategory => "ProductCategory",
            RecordType::Receipt => "Receipt",
            RecordType::ReceiptLine => "ReceiptLine",
            RecordType::PricingSetting => "PricingSetting",
            RecordType::TenantAllocation => "TenantAllocation",
            RecordType::Carrier => "Carrier",
            RecordType::Shipment => "Shipment",
            RecordType::StockMovement => "StockMovement",
            RecordType::Tariff => "Tariff",
        }
    }
}

/// Address of one lockable row: a record type plus its primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordKey {
    pub record_type: RecordType,
    pub id: DbId,
}

impl RecordKey {
    pub fn new(record_type: RecordType, id: DbId) -> Self {
        Self { record_type, id }
    }
}
