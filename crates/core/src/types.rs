/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Lock holder identity: the acting account's id, stringified.
/// Opaque — recorded for diagnostics and holder checks, nothing else.
pub type ActorId = String;
