//! Port traits: the interfaces the hosting platform implements for the
//! registry core.

pub mod outbound;

pub use outbound::{LedgerStore, TimeSource};
