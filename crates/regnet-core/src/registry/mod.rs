//! Business rules gating every mutation: the user-account registry, the
//! property registry, and the purchase workflow.

pub mod properties;
pub mod purchase;
pub mod users;

pub use properties::PropertyRegistry;
pub use purchase::PurchaseWorkflow;
pub use users::UserRegistry;

use crate::context::TransactionContext;
use crate::domain::entities::{Property, UserAccount};
use crate::domain::errors::RegistryError;
use crate::domain::keys::CompositeKey;
use crate::ports::outbound::{LedgerStore, TimeSource};

/// Load a user account or fail `NotFound`.
pub(crate) fn load_account<L: LedgerStore, T: TimeSource>(
    ctx: &TransactionContext<'_, L, T>,
    key: &CompositeKey,
) -> Result<UserAccount, RegistryError> {
    ctx.store()
        .get::<UserAccount>(key)?
        .ok_or_else(|| RegistryError::NotFound {
            key: key.to_string(),
        })
}

/// Load a property or fail `NotFound`.
pub(crate) fn load_property<L: LedgerStore, T: TimeSource>(
    ctx: &TransactionContext<'_, L, T>,
    key: &CompositeKey,
) -> Result<Property, RegistryError> {
    ctx.store()
        .get::<Property>(key)?
        .ok_or_else(|| RegistryError::NotFound {
            key: key.to_string(),
        })
}
