//! # Users Contract
//!
//! Operations invocable by participants: account registration and top-up,
//! property registration and listing, purchase, and the read-only views.

use super::{expect_args, parse_price, to_document, unknown_operation};
use crate::context::TransactionContext;
use crate::domain::entities::{
    NewUserRequest, Property, PropertyRequest, PropertyStatus, PurchaseOutcome, UserAccount,
};
use crate::domain::errors::RegistryError;
use crate::domain::topup::TopUpSchedule;
use crate::ports::outbound::{LedgerStore, TimeSource};
use crate::registry::{PropertyRegistry, PurchaseWorkflow, UserRegistry};

/// The participant-facing contract surface.
#[derive(Debug, Clone, Default)]
pub struct UsersContract {
    users: UserRegistry,
    properties: PropertyRegistry,
    purchases: PurchaseWorkflow,
}

impl UsersContract {
    pub fn new() -> Self {
        Self::default()
    }

    /// A surface whose recharge operation honors a custom top-up schedule.
    pub fn with_topups(topups: TopUpSchedule) -> Self {
        Self {
            users: UserRegistry::new(topups),
            ..Self::default()
        }
    }

    /// `requestNewUser(name, email, phone, nationalId)`
    pub fn request_new_user<L: LedgerStore, T: TimeSource>(
        &self,
        ctx: &mut TransactionContext<'_, L, T>,
        name: &str,
        email: &str,
        phone: &str,
        national_id: &str,
    ) -> Result<UserAccount, RegistryError> {
        let request = NewUserRequest::new(name, email, phone, national_id)?;
        self.users.request(ctx, request)
    }

    /// `rechargeAccount(name, nationalId, topUpCode)`
    pub fn recharge_account<L: LedgerStore, T: TimeSource>(
        &self,
        ctx: &mut TransactionContext<'_, L, T>,
        name: &str,
        national_id: &str,
        code: &str,
    ) -> Result<UserAccount, RegistryError> {
        let key = UserAccount::account_key(name, national_id)?;
        self.users.credit(ctx, &key, code)
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

    /// `propertyRegistrationRequest(propertyId, price, name, nationalId)`
    pub fn property_registration_request<L: LedgerStore, T: TimeSource>(
        &self,
        ctx: &mut TransactionContext<'_, L, T>,
        property_id: &str,
        price: &str,
        name: &str,
        national_id: &str,
    ) -> Result<Property, RegistryError> {
        let request = PropertyRequest::new(property_id, parse_price(price)?)?;
        let owner = UserAccount::account_key(name, national_id)?;
        self.properties.request_registration(ctx, request, &owner)
    }

    /// `viewProperty(propertyId)`
    pub fn view_property<L: LedgerStore, T: TimeSource>(
        &self,
        ctx: &TransactionContext<'_, L, T>,
        property_id: &str,
    ) -> Result<Property, RegistryError> {
        self.properties.view(ctx, property_id)
    }

    /// `updateProperty(propertyId, name, nationalId, newStatus)`
    pub fn update_property<L: LedgerStore, T: TimeSource>(
        &self,
        ctx: &mut TransactionContext<'_, L, T>,
        property_id: &str,
        name: &str,
        national_id: &str,
        new_status: &str,
    ) -> Result<Property, RegistryError> {
        let status: PropertyStatus = new_status.parse()?;
        let owner = UserAccount::account_key(name, national_id)?;
        self.properties.update_status(ctx, property_id, &owner, status)
    }

    /// `purchaseProperty(propertyId, buyerName, buyerNationalId)`
    pub fn purchase_property<L: LedgerStore, T: TimeSource>(
        &self,
        ctx: &mut TransactionContext<'_, L, T>,
        property_id: &str,
        buyer_name: &str,
        buyer_national_id: &str,
    ) -> Result<PurchaseOutcome, RegistryError> {
        let buyer = UserAccount::account_key(buyer_name, buyer_national_id)?;
        self.purchases.purchase(ctx, property_id, &buyer)
    }

    /// Route a named invocation with ordered string arguments onto the
    /// typed operation. Unknown names and wrong arities fail
    /// `InvalidArgument` before any key is derived.
    pub fn dispatch<L: LedgerStore, T: TimeSource>(
        &self,
        ctx: &mut TransactionContext<'_, L, T>,
        operation: &str,
        args: &[&str],
    ) -> Result<serde_json::Value, RegistryError> {
        match operation {
            "requestNewUser" => {
                let [name, email, phone, national_id] = *expect_args::<4>(operation, args)?;
                to_document(&self.request_new_user(ctx, name, email, phone, national_id)?)
            }
            "rechargeAccount" => {
                let [name, national_id, code] = *expect_args::<3>(operation, args)?;
                to_document(&self.recharge_account(ctx, name, national_id, code)?)
            }
            "viewUser" => {
                let [name, national_id] = *expect_args::<2>(operation, args)?;
                to_document(&self.view_user(ctx, name, national_id)?)
            }
            "propertyRegistrationRequest" => {
                let [property_id, price, name, national_id] = *expect_args::<4>(operation, args)?;
                to_document(&self.property_registration_request(
                    ctx,
                    property_id,
                    price,
                    name,
                    national_id,
                )?)
            }
            "viewProperty" => {
                let [property_id] = *expect_args::<1>(operation, args)?;
                to_document(&self.view_property(ctx, property_id)?)
            }
            "updateProperty" => {
                let [property_id, name, national_id, new_status] = *expect_args::<4>(operation, args)?;
                to_document(&self.update_property(ctx, property_id, name, national_id, new_status)?)
            }
            "purchaseProperty" => {
                let [property_id, buyer_name, buyer_national_id] = *expect_args::<3>(operation, args)?;
                to_document(&self.purchase_property(
                    ctx,
                    property_id,
                    buyer_name,
                    buyer_national_id,
                )?)
            }
            other => Err(unknown_operation("users", other)),
        }
    }
}
