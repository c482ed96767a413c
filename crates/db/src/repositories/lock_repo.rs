//! Generic advisory lock repository.
//!
//! Works against any table in the `RecordType` registry. Acquire and
//! release are each a single conditional UPDATE checked via
//! `rows_affected`, so two concurrent callers can never both believe
//! they took the same lock; there is no read-then-write window.
//!
//! A lock whose `lockedAt` is older than the lease is abandoned: it can
//! be acquired over, released by anyone, and is cleared by the sweeper.
//! Release sets only `isLocked`; `whoLocked`/`lockedAt` stay behind as
//! last-holder diagnostics.

use sqlx::{FromRow, PgPool};
use stowage_core::lock::LockState;
use stowage_core::record::{RecordKey, RecordType};
use stowage_core::types::{ActorId, Timestamp};

/// Outcome of a conditional lock acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquireOutcome {
    /// The caller now holds the lock.
    Acquired,
    /// Another actor holds the lock and its lease has not run out.
    Held,
    /// No row with that id exists.
    Missing,
}

/// Outcome of a conditional lock release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// The record is unlocked (including the no-op release of an
    /// already-unlocked record).
    Released,
    /// A different actor holds an unexpired lock; nothing was changed.
    NotHolder,
    /// No row with that id exists.
    Missing,
}

#[derive(Debug, FromRow)]
struct LockRow {
    #[sqlx(rename = "isLocked")]
    is_locked: bool,
    #[sqlx(rename = "whoLocked")]
    who_locked: Option<ActorId>,
    #[sqlx(rename = "lockedAt")]
    locked_at: Option<Timestamp>,
}

impl From<LockRow> for LockState {
    fn from(row: LockRow) -> Self {
        LockState {
            is_locked: row.is_locked,
            who_locked: row.who_locked,
            locked_at: row.locked_at,
        }
    }
}

/// Provides exclusive-lock operations for every lockable record type.
pub struct LockRepo;

impl LockRepo {
    /// Attempt to take the exclusive lock on one record.
    ///
    /// One atomic conditional update: succeeds when the record is
    /// unlocked or its previous lease has expired. Zero affected rows is
    /// classified by an existence probe.
    pub async fn try_lock(
        pool: &PgPool,
        key: RecordKey,
        actor: &str,
        lease_secs: i64,
    ) -> Result<AcquireOutcome, sqlx::Error> {
        let query = format!(
            r#"UPDATE {table}
               SET "isLocked" = TRUE, "whoLocked" = $2, "lockedAt" = NOW()
               WHERE id = $1
                 AND ("isLocked" = FALSE
                      OR "lockedAt" < NOW() - ($3::float8 * INTERVAL '1 second'))"#,
            table = key.record_type.table_name()
        );
        let result = sqlx::query(&query)
            .bind(key.id)
            .bind(actor)
            .bind(lease_secs)
            .execute(pool)
            .await?;

        if result.rows_affected() > 0 {
            return Ok(AcquireOutcome::Acquired);
        }
        if Self::exists(pool, key).await? {
            Ok(AcquireOutcome::Held)
        } else {
            Ok(AcquireOutcome::Missing)
        }
    }

    /// Release the exclusive lock on one record.
    ///
    /// Restricted to the holder while the lease is live; after expiry
    /// anyone may release. Releasing an unlocked record is a no-op that
    /// still reports [`ReleaseOutcome::Released`].
    pub async fn unlock(
        pool: &PgPool,
        key: RecordKey,
        actor: &str,
        lease_secs: i64,
    ) -> Result<ReleaseOutcome, sqlx::Error> {
        let query = format!(
            r#"UPDATE {table}
               SET "isLocked" = FALSE
               WHERE id = $1
                 AND ("isLocked" = FALSE
                      OR "whoLocked" = $2
                      OR "lockedAt" < NOW() - ($3::float8 * INTERVAL '1 second'))"#,
            table = key.record_type.table_name()
        );
        let result = sqlx::query(&query)
            .bind(key.id)
            .bind(actor)
            .bind(lease_secs)
            .execute(pool)
            .await?;

        if result.rows_affected() > 0 {
            return Ok(ReleaseOutcome::Released);
        }
        if Self::exists(pool, key).await? {
            Ok(ReleaseOutcome::NotHolder)
        } else {
            Ok(ReleaseOutcome::Missing)
        }
    }

    /// Read one record's lock columns. `None` if the row does not exist.
    pub async fn lock_state(
        pool: &PgPool,
        key: RecordKey,
    ) -> Result<Option<LockState>, sqlx::Error> {
        let query = format!(
            r#"SELECT "isLocked", "whoLocked", "lockedAt" FROM {table} WHERE id = $1"#,
            table = key.record_type.table_name()
        );
        let row = sqlx::query_as::<_, LockRow>(&query)
            .bind(key.id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(LockState::from))
    }

    /// Read-only probe used by read paths: is the record mid-mutation?
    ///
    /// Counts the lease, so an abandoned lock does not block reads.
    /// `None` if the row does not exist.
    pub async fn is_locked(
        pool: &PgPool,
        key: RecordKey,
        lease_secs: i64,
    ) -> Result<Option<bool>, sqlx::Error> {
        let state = Self::lock_state(pool, key).await?;
        Ok(state.map(|s| s.is_held(lease_secs, chrono::Utc::now())))
    }

    /// Force-release every expired lock in one table. Returns the number
    /// of locks cleared. Used by the sweeper worker.
    pub async fn force_release_expired(
        pool: &PgPool,
        record_type: RecordType,
        lease_secs: i64,
    ) -> Result<u64, sqlx::Error> {
        let query = format!(
            r#"UPDATE {table}
               SET "isLocked" = FALSE
               WHERE "isLocked" = TRUE
                 AND "lockedAt" < NOW() - ($1::float8 * INTERVAL '1 second')"#,
            table = record_type.table_name()
        );
        let result = sqlx::query(&query).bind(lease_secs).execute(pool).await?;
        let cleared = result.rows_affected();
        if cleared > 0 {
            tracing::debug!(table = record_type.table_name(), cleared, "Released expired locks");
        }
        Ok(cleared)
    }

    async fn exists(pool: &PgPool, key: RecordKey) -> Result<bool, sqlx::Error> {
        let query = format!(
            "SELECT EXISTS(SELECT 1 FROM {table} WHERE id = $1)",
            table = key.record_type.table_name()
        );
        sqlx::query_scalar::<_, bool>(&query)
            .bind(key.id)
            .fetch_one(pool)
            .await
    }
}
