use crate::linkset_error::LinkSetError;

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Assert invariants in debug builds or when invariant checking is enabled.
    fn debug_assert_invariants(&self);
    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), LinkSetError>;
}

/// Full validation after bulk mutation (eviction, in-place set algebra).
///
/// These walks are O(n), so they run only with the `strict-invariants`
/// feature, not in every debug build.
#[macro_export]
macro_rules! strict_invariants {
    ($value:expr, $($ctx:tt)*) => {
        #[cfg(feature = "strict-invariants")]
        if let Err(e) = $crate::DebugInvariants::validate_invariants($value) {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}

/// Panic with the validation error when checking is enabled.
///
/// Shared body for `debug_assert_invariants` implementations.
#[inline]
pub(crate) fn assert_valid<T: DebugInvariants + ?Sized>(value: &T, what: &'static str) {
    #[cfg(any(debug_assertions, feature = "strict-invariants"))]
    if let Err(e) = value.validate_invariants() {
        panic!("[invariants] {what}: {e}");
    }
    #[cfg(not(any(debug_assertions, feature = "strict-invariants")))]
    let _ = (value, what);
}
