use stowage_core::error::CoreError;
use stowage_core::placement::PlacementError;

/// Workflow-level error type.
///
/// Wraps [`CoreError`] for domain errors and adds the database failure
/// path. The consuming request layer maps these onto responses by
/// [`FlowError::code`].
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// A domain-level error from `stowage_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for workflow return values.
pub type FlowResult<T> = Result<T, FlowError>;

impl From<PlacementError> for FlowError {
    fn from(err: PlacementError) -> Self {
        FlowError::Core(CoreError::Placement(err))
    }
}

impl FlowError {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            FlowError::Core(core) => core.code(),
            FlowError::Database(_) => "DATABASE_ERROR",
        }
    }
}
