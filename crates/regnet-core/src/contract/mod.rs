//! # Contract Surfaces
//!
//! The externally invocable operations, as the platform sees them: an
//! operation name plus ordered string arguments, returning a flat JSON
//! document or a single typed failure.
//!
//! Two surfaces partition the operations along the network's trust
//! boundary: [`UsersContract`] for participants, [`RegistrarContract`] for
//! the registrar organization that works the approval gate. Both expose the
//! read-only views.

pub mod registrar;
pub mod users;

pub use registrar::RegistrarContract;
pub use users::UsersContract;

use crate::domain::errors::RegistryError;
use serde::Serialize;

/// Check the argument count for `operation` and hand back a fixed-size view.
fn expect_args<'s, const N: usize>(
    operation: &str,
    args: &'s [&'s str],
) -> Result<&'s [&'s str; N], RegistryError> {
    args.try_into().map_err(|_| {
        RegistryError::invalid_argument(format!(
            "{operation} expects {N} arguments, got {}",
            args.len()
        ))
    })
}

/// Parse a price argument. Zero is rejected later by the request schema;
/// here only the numeric form matters.
fn parse_price(raw: &str) -> Result<u64, RegistryError> {
    raw.parse().map_err(|_| {
        RegistryError::invalid_argument(format!("price must be a positive integer, got {raw:?}"))
    })
}

/// Serialize an operation result into the flat document handed back to the
/// platform.
fn to_document<V: Serialize>(value: &V) -> Result<serde_json::Value, RegistryError> {
    serde_json::to_value(value).map_err(|err| RegistryError::Codec {
        message: err.to_string(),
    })
}

fn unknown_operation(surface: &str, operation: &str) -> RegistryError {
    RegistryError::invalid_argument(format!("unknown {surface} operation: {operation}"))
}
