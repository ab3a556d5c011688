//! # Transaction Context
//!
//! The explicit, injectable invocation context handed to every operation:
//! caller identity, clock, and typed store access. One context corresponds
//! to one platform-serialized invocation; building it per invocation is what
//! makes the core deterministic under fake stores and fake clocks.

use crate::domain::entities::{ClientId, Timestamp};
use crate::ports::outbound::{LedgerStore, TimeSource};
use crate::store::EntityStore;

/// Per-invocation view of the world: who is calling, what time it is, and
/// the ledger the operation may read and write.
pub struct TransactionContext<'a, L: LedgerStore, T: TimeSource> {
    store: EntityStore<'a, L>,
    clock: &'a T,
    caller: ClientId,
}

impl<'a, L: LedgerStore, T: TimeSource> TransactionContext<'a, L, T> {
    pub fn new(ledger: &'a mut L, clock: &'a T, caller: impl Into<ClientId>) -> Self {
        Self {
            store: EntityStore::new(ledger),
            clock,
            caller: caller.into(),
        }
    }

    /// Identity of the invoking party, as resolved by the platform.
    pub fn caller(&self) -> &ClientId {
        &self.caller
    }

    /// Invocation timestamp.
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    pub fn store(&self) -> &EntityStore<'a, L> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut EntityStore<'a, L> {
        &mut self.store
    }
}
