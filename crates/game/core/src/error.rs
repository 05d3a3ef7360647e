//! Common error infrastructure for game-core.
//!
//! This module provides shared types and traits used across all error types in game-core.
//! Domain-specific errors (e.g., `CharacterError`, `CombatError`) are defined in their
//! respective modules alongside the operations they validate.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each component has its own error type with specific variants
//! - **Categorization**: Errors are grouped so the session loop can report them uniformly
//! - **No Silent Repair**: Invalid data is always surfaced, never defaulted

/// Category of an error, used by the session loop to decide how to report it.
///
/// Every category is recoverable at the session level; none of them should
/// terminate the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorCategory {
    /// Invalid input or malformed data, should not retry without changes.
    ///
    /// Examples: unknown character class, corrupted save record, missing field
    Validation,

    /// A referenced record does not exist.
    ///
    /// Examples: no save file for a name, unknown quest id
    NotFound,

    /// The action is not allowed in the current state.
    ///
    /// Examples: healing a dead character, attacking after the battle ended
    State,

    /// Filesystem or other environment failure.
    ///
    /// Examples: save directory not writable
    Resource,

    /// The action would drive gold negative.
    Economic,
}

impl ErrorCategory {
    /// Returns a human-readable label for this category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::NotFound => "not found",
            Self::State => "state",
            Self::Resource => "resource",
            Self::Economic => "economic",
        }
    }

    /// Returns true if the failed action may succeed later without changing input.
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Resource)
    }
}

/// Common trait for all game errors.
///
/// This trait provides a uniform interface for error classification across
/// crates, so callers can match on [`ErrorCategory`] instead of concrete types.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify by what the caller can do about it, not by where it happened
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the category of this error.
    fn category(&self) -> ErrorCategory;

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
    fn only_resource_errors_are_transient() {
        assert!(ErrorCategory::Resource.is_transient());
        assert!(!ErrorCategory::Validation.is_transient());
        assert!(!ErrorCategory::Economic.is_transient());
    }
}
