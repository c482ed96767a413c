//! Pure domain logic for the stowage coordination core.
//!
//! No I/O lives here: record-type registry, lock-state and lease
//! arithmetic, numeric-text parsing for the legacy columns, and the
//! spatial placement validation for warehouse zones. The `db` and
//! `flow` crates build on these types.

pub mod allocation;
pub mod error;
pub mod lock;
pub mod numeric;
pub mod placement;
pub mod record;
pub mod types;
