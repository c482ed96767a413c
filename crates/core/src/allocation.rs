//! Tenant-allocation status constants and transition rules.
//!
//! Shared by the db and flow layers so the status strings are written
//! down exactly once.

/// Allocation awaits an operator decision.
pub const STATUS_PENDING: &str = "pending";

/// Allocation accepted; the warehouse ledger has been debited.
pub const STATUS_ACCEPTED: &str = "accepted";

/// Allocation rejected; no capacity was committed.
pub const STATUS_REJECTED: &str = "rejected";

/// All valid status values.
pub const VALID_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_ACCEPTED, STATUS_REJECTED];

/// Validate that an allocation can move from `from` to `to`.
///
/// Only pending allocations may be decided; decisions are final.
pub fn validate_transition(from: &str, to: &str) -> Result<(), String> {
    match (from, to) {
        (STATUS_PENDING, STATUS_ACCEPTED) | (STATUS_PENDING, STATUS_REJECTED) => Ok(()),
        _ => Err(format!("cannot transition allocation from '{from}' to '{to}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_can_be_decided() {
        assert!(validate_transition(STATUS_PENDING, STATUS_ACCEPTED).is_ok());
        assert!(validate_transition(STATUS_PENDING, STATUS_REJECTED).is_ok());
    }

    #[test]
    fn test_decisions_are_final() {
        assert!(validate_transition(STATUS_ACCEPTED, STATUS_REJECTED).is_err());
        assert!(validate_transition(STATUS_REJECTED, STATUS_ACCEPTED).is_err());
        assert!(validate_transition(STATUS_ACCEPTED, STATUS_PENDING).is_err());
    }

    #[test]
    fn test_unknown_status_rejected() {
        let err = validate_transition("draft", STATUS_ACCEPTED).unwrap_err();
        assert!(err.contains("draft"));
    }
}
