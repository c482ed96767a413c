//! The reusable lock-guarded mutation wrapper.
//!
//! Every mutable record type follows the same protocol: acquire the
//! record's exclusive lock, run the mutation, release unconditionally —
//! also when the mutation fails — so a record never stays locked after
//! the call completes. A failed acquire raises before any lock is
//! taken, so that branch needs no compensating release.

use std::future::Future;

use sqlx::PgPool;
use stowage_core::error::CoreError;
use stowage_core::record::RecordKey;

use crate::config::CoordConfig;
use crate::error::FlowResult;
use stowage_db::repositories::{AcquireOutcome, LockRepo, ReleaseOutcome};

/// Run `op` while holding the exclusive lock on `key`.
///
/// Fails with `ALREADY_LOCKED` when another actor holds an unexpired
/// lock, `NOT_FOUND` when the record does not exist. When `op` fails its
/// error wins over any release problem; a clean `op` surfaces release
/// problems (lease lost mid-mutation) instead of silently succeeding.
pub async fn with_record_lock<F, Fut, T>(
    pool: &PgPool,
    cfg: &CoordConfig,
    key: RecordKey,
    actor: &str,
    op: F,
) -> FlowResult<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = FlowResult<T>>,
{
    let entity = key.record_type.entity();
    match LockRepo::try_lock(pool, key, actor, cfg.lock_lease_secs).await? {
        AcquireOutcome::Acquired => {}
        AcquireOutcome::Held => {
            return Err(CoreError::AlreadyLocked { entity, id: key.id }.into());
        }
        AcquireOutcome::Missing => {
            return Err(CoreError::NotFound { entity, id: key.id }.into());
        }
    }
    tracing::debug!(entity, id = key.id, actor = %actor, "Lock acquired");

    let outcome = op().await;
    let released = LockRepo::unlock(pool, key, actor, cfg.lock_lease_secs).await;

    // The mutation's own error takes priority over release trouble.
    let value = outcome?;
    match released? {
        ReleaseOutcome::Released => {
            tracing::debug!(entity, id = key.id, actor = %actor, "Lock released");
            Ok(value)
        }
        // The lease ran out mid-mutation and another actor took the
        // lock: the mutation may have raced, so the caller must know.
        ReleaseOutcome::NotHolder => {
            tracing::warn!(entity, id = key.id, actor = %actor, "Lock lost before release");
            Err(CoreError::LockHeldByOther { entity, id: key.id }.into())
        }
        ReleaseOutcome::Missing => Err(CoreError::NotFound { entity, id: key.id }.into()),
    }
}
