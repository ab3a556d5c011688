//! # Regnet Core
//!
//! A ledger-backed property-registration registry. Two entity types, user
//! accounts and properties, move through an approval gate worked by a
//! registrar organization, and change hands through an atomic purchase
//! workflow that moves coins and ownership across three records in one
//! invocation.
//!
//! The durable ordered key-value ledger, consensus, invocation ordering,
//! and caller-identity verification belong to the hosting platform. The
//! core reaches them through ports and contains no locking, threads, or
//! suspension points of its own: every operation is synchronous validation
//! logic plus store calls, executed inside one platform-serialized
//! invocation.
//!
//! ## Crate Structure
//!
//! - `domain/` - entities, composite keys, errors, top-up schedule
//! - `ports/` - outbound traits the platform implements ([`LedgerStore`],
//!   [`TimeSource`])
//! - `adapters/` - in-memory ledger and time sources for tests and
//!   embedding
//! - `store` - typed repository over the ledger port
//! - `context` - the per-invocation [`TransactionContext`]
//! - `registry/` - business rules (users, properties, purchase)
//! - `contract/` - the two externally invocable surfaces
//!
//! ## Usage
//!
//! ```
//! use regnet_core::{
//!     InMemoryLedger, RegistrarContract, SystemTimeSource, TransactionContext, UsersContract,
//! };
//!
//! let mut ledger = InMemoryLedger::new();
//! let clock = SystemTimeSource;
//! let users = UsersContract::new();
//! let registrar = RegistrarContract::new();
//!
//! let mut ctx = TransactionContext::new(&mut ledger, &clock, "users-org/alice");
//! users
//!     .request_new_user(&mut ctx, "Alice", "alice@example.com", "555-0100", "A1")
//!     .unwrap();
//!
//! let mut ctx = TransactionContext::new(&mut ledger, &clock, "registrar-org/r1");
//! let account = registrar.approve_new_user(&mut ctx, "Alice", "A1").unwrap();
//! assert_eq!(account.balance, 0);
//! ```

pub mod adapters;
pub mod context;
pub mod contract;
pub mod domain;
pub mod ports;
pub mod registry;
pub mod store;

// Re-export key types for convenience
pub use adapters::{FixedTimeSource, InMemoryLedger, SystemTimeSource};
pub use context::TransactionContext;
pub use contract::{RegistrarContract, UsersContract};
pub use domain::entities::{
    ClientId, NewUserRequest, Property, PropertyRequest, PropertyStatus, PurchaseOutcome,
    Timestamp, UserAccount, UserStatus,
};
pub use domain::errors::{LedgerError, RegistryError};
pub use domain::keys::{CompositeKey, Namespace};
pub use domain::topup::TopUpSchedule;
pub use ports::outbound::{LedgerStore, TimeSource};
pub use registry::{PropertyRegistry, PurchaseWorkflow, UserRegistry};
pub use store::{EntityStore, LedgerEntity};
