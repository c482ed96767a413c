use crate::placement::PlacementError;
use crate::types::DbId;

/// Domain errors for the coordination core.
///
/// Every variant carries a stable string code (see [`CoreError::code`])
/// that the workflow layer maps to user-facing responses. Failures are
/// raised immediately and never retried internally.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Lock acquisition attempted on a record already locked.
    #[error("{entity} {id} is locked by another operation")]
    AlreadyLocked { entity: &'static str, id: DbId },

    /// Release attempted by an actor that does not hold the lock.
    #[error("{entity} {id} is locked by a different actor")]
    LockHeldByOther { entity: &'static str, id: DbId },

    /// Read refused because the record is mid-mutation.
    ///
    /// The legacy backend called this condition `DataBeLock`; the name is
    /// kept as the stable code for compatibility.
    #[error("{entity} {id} is locked and cannot be read")]
    DataBeLock { entity: &'static str, id: DbId },

    #[error(transparent)]
    Placement(#[from] PlacementError),

    /// A capacity debit would take `remainingCapacity` below zero.
    #[error("warehouse {warehouse_id} has insufficient remaining capacity")]
    InsufficientCapacity { warehouse_id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            CoreError::NotFound { .. } => "NOT_FOUND",
            CoreError::AlreadyLocked { .. } => "ALREADY_LOCKED",
            CoreError::LockHeldByOther { .. } => "LOCK_HELD_BY_OTHER",
            CoreError::DataBeLock { .. } => "DATA_BE_LOCK",
            CoreError::Placement(err) => err.code(),
            CoreError::InsufficientCapacity { .. } => "INSUFFICIENT_CAPACITY",
            CoreError::Validation(_) => "VALIDATION_ERROR",
            CoreError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
