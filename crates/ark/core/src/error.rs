//! Common error infrastructure for ark-core.
//!
//! Domain-specific errors (`HintError`, `FlockError`, `SpeciesError`,
//! `ConfigError`) live next to the operations they validate. This module only
//! provides the shared classification they all report through.
//!
//! The helper engine itself never fails: an empty move set resolves to
//! `NoOp` and a missing broadcast falls back to "any animal". Errors only
//! surface at the codec boundary, at flock bookkeeping and at configuration
//! load time.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Temporary condition; the caller may retry next tick.
    ///
    /// Examples: flock full, animal already taken by another helper
    Recoverable,

    /// Invalid input that must be rejected without retry.
    ///
    /// Examples: species code above 127, zero flock capacity
    Validation,

    /// Unexpected state inconsistency between simulator and helper.
    ///
    /// Examples: releasing an animal the helper never carried
    Internal,

    /// Unrecoverable state corruption.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all ark-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait ArkError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_classification() {
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(!ErrorSeverity::Validation.is_recoverable());
        assert!(ErrorSeverity::Internal.is_internal());
        assert!(ErrorSeverity::Fatal.is_internal());
        assert!(!ErrorSeverity::Validation.is_internal());
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
    }
}
