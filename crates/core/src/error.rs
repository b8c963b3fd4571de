//! Domain error model.

use thiserror::Error;

/// Result type used across the demo crates.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, expected failure conditions that the
/// demo drivers catch and print. Infrastructure concerns (file IO) are
/// wrapped at the edge, not here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An operation referenced an id with no stored record.
    #[error("not found: {0}")]
    NotFound(String),

    /// An insert collided with an already-stored id.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// A quantity update carried a negative value.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    /// A field failed to parse (e.g. non-integer id or score).
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// An input line was missing one or more required fields.
    #[error("missing field: {0}")]
    MissingField(String),

    /// A withdrawal exceeded the available balance.
    #[error("insufficient funds: {0}")]
    InsufficientFunds(String),
}

impl DomainError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn duplicate_key(msg: impl Into<String>) -> Self {
        Self::DuplicateKey(msg.into())
    }

    pub fn invalid_quantity(msg: impl Into<String>) -> Self {
        Self::InvalidQuantity(msg.into())
    }

    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }

    pub fn missing_field(msg: impl Into<String>) -> Self {
        Self::MissingField(msg.into())
    }

    pub fn insufficient_funds(msg: impl Into<String>) -> Self {
        Self::InsufficientFunds(msg.into())
    }
}
