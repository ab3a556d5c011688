//! # Purchase Workflow
//!
//! The multi-record transfer: one invocation moves coins from buyer to
//! seller and ownership of the property to the buyer, across three records.
//!
//! The platform makes the whole invocation atomic; this workflow's part of
//! the contract is ordering. Every read and every validation happens before
//! the first write is issued (and before anything observable, including
//! logging), so a failure can only ever occur with zero side effects.

use super::{load_account, load_property};
use crate::context::TransactionContext;
use crate::domain::entities::{Property, PropertyStatus, PurchaseOutcome, UserStatus};
use crate::domain::errors::RegistryError;
use crate::domain::keys::CompositeKey;
use crate::ports::outbound::{LedgerStore, TimeSource};
use tracing::info;

/// The property purchase protocol.
#[derive(Debug, Clone, Copy, Default)]
pub struct PurchaseWorkflow;

impl PurchaseWorkflow {
    /// Purchase `property_id` on behalf of the account at `buyer`.
    ///
    /// On success the property belongs to the buyer and is off the market,
    /// the price has moved from buyer to seller with exact conservation,
    /// and all three updated records are returned as one structured value.
    pub fn purchase<L: LedgerStore, T: TimeSource>(
        &self,
        ctx: &mut TransactionContext<'_, L, T>,
        property_id: &str,
        buyer: &CompositeKey,
    ) -> Result<PurchaseOutcome, RegistryError> {
        // Validation phase: resolve and check all three records.
        let mut buyer_account = load_account(ctx, buyer)?;
        if buyer_account.status != UserStatus::Approved {
            return Err(RegistryError::invalid_state(
                buyer,
                "buyer is not registered on the network",
            ));
        }

        let property_key = Property::property_key(property_id)?;
        let mut property = load_property(ctx, &property_key)?;

        if property.owner == buyer_account.key {
            return Err(RegistryError::invalid_argument(format!(
                "buyer already owns property {property_key}"
            )));
        }
        if property.status != PropertyStatus::OnSale {
            return Err(RegistryError::invalid_state(
                &property_key,
                "property is not for sale",
            ));
        }
        if buyer_account.balance < property.price {
            return Err(RegistryError::InsufficientBalance {
                required: property.price,
                available: buyer_account.balance,
            });
        }

        let mut seller_account = load_account(ctx, &property.owner)?;

        // Mutation phase: nothing below can fail for business reasons.
        // Buyer and seller are distinct records (checked above), so the
        // debit and credit conserve total coins exactly.
        let now = ctx.now();
        let price = property.price;
        buyer_account.debit(price, now)?;
        seller_account.credit(price, now)?;
        property.transfer_to(buyer_account.key.clone(), now);

        ctx.store_mut().put(&property)?;
        ctx.store_mut().put(&buyer_account)?;
        ctx.store_mut().put(&seller_account)?;

        info!(
            property = %property.key,
            buyer = %buyer_account.key,
            seller = %seller_account.key,
            price,
            "property purchased"
        );

        Ok(PurchaseOutcome {
            property,
            buyer: buyer_account,
            seller: seller_account,
        })
    }
}
