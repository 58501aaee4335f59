use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// What a read does when the cache errors for a reason other than a miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheFailurePolicy {
    /// Bypass the cache and serve from the store, logging the degradation.
    #[default]
    FailOpen,
    /// Fail the read with `LocalityError::Unavailable`.
    FailClosed,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown cache failure policy: {0} (expected 'fail-open' or 'fail-closed')")]
pub struct ParsePolicyError(String);

impl FromStr for CacheFailurePolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail-open" | "open" => Ok(CacheFailurePolicy::FailOpen),
            "fail-closed" | "closed" => Ok(CacheFailurePolicy::FailClosed),
            other => Err(ParsePolicyError(other.to_string())),
        }
    }
}

impl fmt::Display for CacheFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheFailurePolicy::FailOpen => write!(f, "fail-open"),
            CacheFailurePolicy::FailClosed => write!(f, "fail-closed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_fail_open() {
        assert_eq!(CacheFailurePolicy::default(), CacheFailurePolicy::FailOpen);
    }

    #[test]
    fn test_parse_accepts_both_spellings() {
        assert_eq!(
            "fail-open".parse::<CacheFailurePolicy>(),
            Ok(CacheFailurePolicy::FailOpen)
        );
        assert_eq!(
            " Fail-Closed ".parse::<CacheFailurePolicy>(),
            Ok(CacheFailurePolicy::FailClosed)
        );
        assert_eq!(
            "closed".parse::<CacheFailurePolicy>(),
            Ok(CacheFailurePolicy::FailClosed)
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("sometimes".parse::<CacheFailurePolicy>().is_err());
    }

    #[test]
    fn test_display_roundtrips() {
        for policy in [CacheFailurePolicy::FailOpen, CacheFailurePolicy::FailClosed] {
            assert_eq!(policy.to_string().parse::<CacheFailurePolicy>(), Ok(policy));
        }
    }
}
