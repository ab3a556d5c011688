//! # Outbound Ports (Driven Ports)
//!
//! Dependencies the registry core requires the hosting platform to provide.
//! The platform owns durability, replication, and invocation ordering; the
//! core only ever sees these two seams.

use crate::domain::entities::Timestamp;
use crate::domain::errors::LedgerError;

/// The platform's key-value ledger, addressed by encoded composite key.
///
/// Contract: `get` observes the most recent `put` within the enclosing
/// invocation's view (read-your-writes); a never-written key yields
/// `Ok(None)`, not a default record; `put` is a total overwrite. No locking
/// is exposed; the platform serializes invocations end to end.
pub trait LedgerStore: Send + Sync {
    /// Read the bytes at `key`, if any were ever written.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, LedgerError>;

    /// Overwrite the bytes at `key`.
    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), LedgerError>;
}

/// Abstract interface for time operations (for testability).
pub trait TimeSource: Send + Sync {
    /// Current time in seconds since the Unix epoch.
    fn now(&self) -> Timestamp;
}
