use serde::{Deserialize, Serialize};

use crate::linkset_error::LinkSetError;

/// Capacity used when none is given.
pub const DEFAULT_LIMIT: usize = 1000;

/// Configuration for an [`ExhaustiveSet`](super::ExhaustiveSet).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvictionConfig {
    /// Maximum number of keys kept after an insertion.
    pub limit: usize,
}

impl Default for EvictionConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
        }
    }
}

impl EvictionConfig {
    pub fn with_limit(limit: usize) -> Self {
        Self { limit }
    }

    /// Rejects a zero limit.
    pub fn validate(&self) -> Result<(), LinkSetError> {
        if self.limit == 0 {
            return Err(LinkSetError::PreconditionViolation(
                "eviction limit must be positive",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limit() {
        assert_eq!(EvictionConfig::default().limit, 1000);
        assert!(EvictionConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_limit_rejected() {
        let err = EvictionConfig::with_limit(0).validate().unwrap_err();
        assert!(matches!(err, LinkSetError::PreconditionViolation(_)));
        assert!(err.is_contract_violation());
    }

    #[test]
    fn json_roundtrip() {
        let cfg = EvictionConfig { limit: 64 };
        let s = serde_json::to_string(&cfg).unwrap();
        assert_eq!(s, r#"{"limit":64}"#);
        let back: EvictionConfig = serde_json::from_str(&s).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let cfg: EvictionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, EvictionConfig::default());
    }
}
