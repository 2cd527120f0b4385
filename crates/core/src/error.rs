//! Domain error model.

use thiserror::Error;

/// Shorthand for fallible domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

/// Deterministic domain failures: rejected input, broken arithmetic
/// invariants, and model codes the catalog does not carry.
///
/// Warehouse transport failures are not domain errors and never travel
/// through this type; the inventory resolver swallows them by contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input failed a validation rule.
    #[error("validation failed: {0}")]
    Validation(String),

    /// An arithmetic or state invariant broke (e.g. money overflow).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier would not parse.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A model code with no catalog entry, carrying the caller's spelling.
    /// The display string is the storefront's user-facing wording.
    #[error("Unknown model: {0}")]
    UnknownModel(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn unknown_model(model: impl Into<String>) -> Self {
        Self::UnknownModel(model.into())
    }
}
