//! LinkSetError: Unified error type for linkset public APIs
//!
//! Every fallible operation in the crate returns this type. Membership
//! mutations on absent or present keys are silent no-ops and never error.

use thiserror::Error;

/// Boxed error returned by eviction hooks.
pub type HookError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Unified error type for linkset operations.
#[derive(Debug, Error)]
pub enum LinkSetError {
    /// `pop` was called on a set with zero elements.
    #[error("pop from an empty set")]
    EmptyCollection,
    /// A cursor saw the set change underneath it.
    #[error("set was modified during iteration (epoch {expected} -> {found})")]
    ConcurrentModification { expected: u64, found: u64 },
    /// An argument does not meet the operation's contract.
    #[error("precondition violated: {0}")]
    PreconditionViolation(&'static str),
    /// The eviction callback of a bounded set failed.
    #[error("eviction hook failed: {0}")]
    EvictHook(#[source] HookError),
    /// Index and linked list disagree.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl LinkSetError {
    /// True for the variants that signal misuse of the API rather than
    /// corrupted state or a failing callback.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            LinkSetError::EmptyCollection
                | LinkSetError::ConcurrentModification { .. }
                | LinkSetError::PreconditionViolation(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(LinkSetError::EmptyCollection.to_string(), "pop from an empty set");
        let e = LinkSetError::ConcurrentModification {
            expected: 3,
            found: 4,
        };
        assert_eq!(
            e.to_string(),
            "set was modified during iteration (epoch 3 -> 4)"
        );
        assert_eq!(
            LinkSetError::PreconditionViolation("limit must be positive").to_string(),
            "precondition violated: limit must be positive"
        );
    }

    #[test]
    fn hook_error_keeps_source() {
        use std::error::Error as _;
        let inner: HookError = "disk full".into();
        let e = LinkSetError::EvictHook(inner);
        assert_eq!(e.to_string(), "eviction hook failed: disk full");
        assert_eq!(e.source().map(|s| s.to_string()).as_deref(), Some("disk full"));
        assert!(!e.is_contract_violation());
    }
}
