//! Pure domain logic: entities, keys, errors, and configuration value
//! objects. Nothing here touches a port.

pub mod entities;
pub mod errors;
pub mod keys;
pub mod topup;

pub use entities::{
    ClientId, NewUserRequest, Property, PropertyRequest, PropertyStatus, PurchaseOutcome,
    Timestamp, UserAccount, UserStatus,
};
pub use errors::{LedgerError, RegistryError};
pub use keys::{CompositeKey, Namespace, KEY_DELIMITER};
pub use topup::TopUpSchedule;
