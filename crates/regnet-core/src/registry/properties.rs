//! # Property Registry
//!
//! Lifecycle operations for property records: registration request by an
//! approved owner, registrar approval, read-only view, and owner-driven
//! listing changes.

use super::{load_account, load_property};
use crate::context::TransactionContext;
use crate::domain::entities::{Property, PropertyRequest, PropertyStatus, UserStatus};
use crate::domain::errors::RegistryError;
use crate::domain::keys::CompositeKey;
use crate::ports::outbound::{LedgerStore, TimeSource};
use tracing::info;

/// Registry for property records.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyRegistry;

impl PropertyRegistry {
    /// Request registration of a property owned by `owner`.
    ///
    /// The owner account must exist and be approved. A property id that is
    /// already on the ledger fails `AlreadyExists`; a second request never
    /// overwrites the first.
    pub fn request_registration<L: LedgerStore, T: TimeSource>(
        &self,
        ctx: &mut TransactionContext<'_, L, T>,
        request: PropertyRequest,
        owner: &CompositeKey,
    ) -> Result<Property, RegistryError> {
        let owner_account = load_account(ctx, owner)?;
        if owner_account.status != UserStatus::Approved {
            return Err(RegistryError::invalid_state(
                owner,
                "owner must be approved before registering property",
            ));
        }

        let key = Property::property_key(&request.property_id)?;
        if ctx.store().get::<Property>(&key)?.is_some() {
            return Err(RegistryError::AlreadyExists {
                key: key.to_string(),
            });
        }

        let property = Property::open(request, owner_account.key, ctx.now())?;
        ctx.store_mut().put(&property)?;
        info!(key = %property.key, owner = %property.owner, "property registration requested");
        Ok(property)
    }

    /// Approve a requested registration. Exactly-once, like the account
    /// gate.
    pub fn approve_registration<L: LedgerStore, T: TimeSource>(
        &self,
        ctx: &mut TransactionContext<'_, L, T>,
        property_id: &str,
    ) -> Result<Property, RegistryError> {
        let key = Property::property_key(property_id)?;
        let mut property = load_property(ctx, &key)?;
        property.approve(ctx.caller().clone(), ctx.now())?;
        ctx.store_mut().put(&property)?;
        info!(key = %property.key, registrar = %ctx.caller(), "property registered");
        Ok(property)
    }

    /// Read a property. No side effects.
    pub fn view<L: LedgerStore, T: TimeSource>(
        &self,
        ctx: &TransactionContext<'_, L, T>,
        property_id: &str,
    ) -> Result<Property, RegistryError> {
        let key = Property::property_key(property_id)?;
        load_property(ctx, &key)
    }

    /// Change the listing state of a property on behalf of `owner`.
    ///
    /// Precondition order: unapproved owner (`InvalidState`), then ownership
    /// mismatch (`Unauthorized`), then the transition itself (the entity
    /// allows `Registered <-> OnSale` only).
    pub fn update_status<L: LedgerStore, T: TimeSource>(
        &self,
        ctx: &mut TransactionContext<'_, L, T>,
        property_id: &str,
        owner: &CompositeKey,
        new_status: PropertyStatus,
    ) -> Result<Property, RegistryError> {
        let owner_account = load_account(ctx, owner)?;
        if owner_account.status != UserStatus::Approved {
            return Err(RegistryError::invalid_state(
                owner,
                "owner must be approved before updating property",
            ));
        }

        let key = Property::property_key(property_id)?;
        let mut property = load_property(ctx, &key)?;
        if property.owner != owner_account.key {
            return Err(RegistryError::Unauthorized {
                key: property.key.to_string(),
                actor: owner_account.key.to_string(),
            });
        }

        property.update_status(new_status, ctx.now())?;
        ctx.store_mut().put(&property)?;
        info!(key = %property.key, status = %property.status, "property status updated");
        Ok(property)
    }
}
