//! # Domain Errors
//!
//! All failures a registry operation can surface.
//!
//! ## Design Principles
//!
//! - Every precondition violation aborts the whole operation before any
//!   mutation reaches the ledger.
//! - Each variant carries enough context (entity key, attempted action) to
//!   be actionable by the caller.
//! - No panics in domain logic (use Result instead).

use thiserror::Error;

/// Errors surfaced by registry operations.
///
/// The first six variants are the externally visible failure kinds; `Store`
/// and `Codec` propagate port-level failures from the ledger and the record
/// serializer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No record exists at the derived key.
    #[error("no record found for {key}")]
    NotFound { key: String },

    /// A record already exists at the derived key.
    #[error("a record already exists for {key}")]
    AlreadyExists { key: String },

    /// A status precondition was not met.
    #[error("{reason} ({key})")]
    InvalidState { key: String, reason: String },

    /// Buyer balance cannot cover the asking price.
    #[error("insufficient balance: price {required}, balance {available}")]
    InsufficientBalance { required: u64, available: u64 },

    /// The acting party does not own the record it is trying to change.
    #[error("{actor} is not the owner of {key}")]
    Unauthorized { key: String, actor: String },

    /// Malformed or unrecognized input, rejected before any key derivation.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// Checked coin arithmetic overflowed.
    #[error("coin balance overflow for {key}")]
    BalanceOverflow { key: String },

    /// Ledger store failure.
    #[error("ledger store failure: {message}")]
    Store { message: String },

    /// Record encoding/decoding failure.
    #[error("record codec failure: {message}")]
    Codec { message: String },
}

impl RegistryError {
    /// Shorthand for an `InvalidState` with a displayable key.
    pub fn invalid_state(key: impl ToString, reason: impl Into<String>) -> Self {
        RegistryError::InvalidState {
            key: key.to_string(),
            reason: reason.into(),
        }
    }

    /// Shorthand for an `InvalidArgument`.
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        RegistryError::InvalidArgument {
            reason: reason.into(),
        }
    }
}

/// Failures reported by the platform's key-value ledger.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// I/O error during read/write.
    #[error("ledger I/O error: {message}")]
    Io { message: String },
}

impl From<LedgerError> for RegistryError {
    fn from(err: LedgerError) -> Self {
        RegistryError::Store {
            message: err.to_string(),
        }
    }
}
