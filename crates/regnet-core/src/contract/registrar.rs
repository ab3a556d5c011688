//! # Registrar Contract
//!
//! Operations invocable by the registrar organization: the two approvals
//! that gate the network, plus the read-only views for auditing.

use super::{expect_args, to_document, unknown_operation};
use crate::context::TransactionContext;
use crate::domain::entities::{Property, UserAccount};
use crate::domain::errors::RegistryError;
use crate::ports::outbound::{LedgerStore, TimeSource};
use crate::registry::{PropertyRegistry, UserRegistry};

/// The registrar-facing contract surface.
#[derive(Debug, Clone, Default)]
pub struct RegistrarContract {
    users: UserRegistry,
    properties: PropertyRegistry,
}

impl RegistrarContract {
    pub fn new() -> Self {
        Self::default()
    }

    /// `approveNewUser(name, nationalId)`
    pub fn approve_new_user<L: LedgerStore, T: TimeSource>(
        &self,
        ctx: &mut TransactionContext<'_, L, T>,
        name: &str,
        national_id: &str,
    ) -> Result<UserAccount, RegistryError> {
        let key = UserAccount::account_key(name, national_id)?;
        self.users.approve(ctx, &key)
    }

    /// `approvePropertyRegistration(propertyId)`
    pub fn approve_property_registration<L: LedgerStore, T: TimeSource>(
        &self,
        ctx: &mut TransactionContext<'_, L, T>,
        property_id: &str,
    ) -> Result<Property, RegistryError> {
        self.properties.approve_registration(ctx, property_id)
    }

    /// `viewUser(name, nationalId)`
    pub fn view_user<L: LedgerStore, T: TimeSource>(
        &self,
        ctx: &TransactionContext<'_, L, T>,
        name: &str,
        national_id: &str,
    ) -> Result<UserAccount, RegistryError> {
        let key = UserAccount::account_key(name, national_id)?;
        self.users.view(ctx, &key)
    }

    /// `viewProperty(propertyId)`
    pub fn view_property<L: LedgerStore, T: TimeSource>(
        &self,
        ctx: &TransactionContext<'_, L, T>,
        property_id: &str,
    ) -> Result<Property, RegistryError> {
        self.properties.view(ctx, property_id)
    }

    /// Route a named invocation onto the typed operation.
    pub fn dispatch<L: LedgerStore, T: TimeSource>(
        &self,
        ctx: &mut TransactionContext<'_, L, T>,
        operation: &str,
        args: &[&str],
    ) -> Result<serde_json::Value, RegistryError> {
        match operation {
            "approveNewUser" => {
                let [name, national_id] = *expect_args::<2>(operation, args)?;
                to_document(&self.approve_new_user(ctx, name, national_id)?)
            }
            "approvePropertyRegistration" => {
                let [property_id] = *expect_args::<1>(operation, args)?;
                to_document(&self.approve_property_registration(ctx, property_id)?)
            }
            "viewUser" => {
                let [name, national_id] = *expect_args::<2>(operation, args)?;
                to_document(&self.view_user(ctx, name, national_id)?)
            }
            "viewProperty" => {
                let [property_id] = *expect_args::<1>(operation, args)?;
                to_document(&self.view_property(ctx, property_id)?)
            }
            other => Err(unknown_operation("registrar", other)),
        }
    }
}
