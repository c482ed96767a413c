//! Lock-state model and lease arithmetic.
//!
//! The lock itself lives on the record row (`isLocked`, `whoLocked`,
//! `lockedAt`); this module holds the pure rules the repositories apply:
//! when a lock counts as held, and when it counts as abandoned.

use chrono::Duration;

use crate::types::{ActorId, Timestamp};

/// Snapshot of one record's lock columns.
///
/// `who_locked` and `locked_at` are not cleared on release; they describe
/// the last holder whenever `is_locked` is false.
#[derive(Debug, Clone, PartialEq)]
pub struct LockState {
    pub is_locked: bool,
    pub who_locked: Option<ActorId>,
    pub locked_at: Option<Timestamp>,
}

impl LockState {
    /// True when the lock is held and its lease has not run out.
    ///
    /// A lock whose `lockedAt` is older than `lease` is abandoned (the
    /// holder crashed or stalled): it no longer blocks acquisition and the
    /// sweeper may force-release it.
    pub fn is_held(&self, lease_secs: i64, now: Timestamp) -> bool {
        if !self.is_locked {
            return false;
        }
        match self.locked_at {
            Some(locked_at) => now - locked_at < Duration::seconds(lease_secs),
            // Locked without a timestamp should not happen; treat the lock
            // as held so a malformed row is never silently stolen.
            None => true,
        }
    }

    /// True when `actor` currently holds this lock.
    pub fn is_held_by(&self, actor: &str, lease_secs: i64, now: Timestamp) -> bool {
        self.is_held(lease_secs, now) && self.who_locked.as_deref() == Some(actor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn at(secs: i64) -> Timestamp {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn locked_by(actor: &str, when: Timestamp) -> LockState {
        LockState {
            is_locked: true,
            who_locked: Some(actor.to_string()),
            locked_at: Some(when),
        }
    }

    #[test]
    fn test_unlocked_is_not_held() {
        let state = LockState {
            is_locked: false,
            who_locked: Some("4".to_string()),
            locked_at: Some(at(0)),
        };
        assert!(!state.is_held(300, at(10)));
    }

    #[test]
    fn test_fresh_lock_is_held() {
        assert!(locked_by("4", at(0)).is_held(300, at(299)));
    }

    #[test]
    fn test_expired_lock_is_abandoned() {
        assert!(!locked_by("4", at(0)).is_held(300, at(300)));
    }

    #[test]
    fn test_lock_without_timestamp_stays_held() {
        let state = LockState {
            is_locked: true,
            who_locked: Some("4".to_string()),
            locked_at: None,
        };
        assert!(state.is_held(300, at(10_000)));
    }

    #[test]
    fn test_held_by_checks_actor() {
        let state = locked_by("4", at(0));
        assert!(state.is_held_by("4", 300, at(10)));
        assert!(!state.is_held_by("5", 300, at(10)));
    }

    #[test]
    fn test_held_by_false_after_expiry() {
        assert!(!locked_by("4", at(0)).is_held_by("4", 300, at(301)));
    }
}
