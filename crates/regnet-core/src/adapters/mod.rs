//! Adapter implementations of the outbound ports: an in-memory ledger for
//! tests and embedding, and system/fixed time sources.

pub mod memory;
pub mod time;

pub use memory::InMemoryLedger;
pub use time::{FixedTimeSource, SystemTimeSource};
