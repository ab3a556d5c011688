//! # User Account Registry
//!
//! Lifecycle operations for user accounts: registration request, registrar
//! approval, read-only view, and balance top-up. Every precondition
//! violation aborts before anything is written.

use super::load_account;
use crate::context::TransactionContext;
use crate::domain::entities::{NewUserRequest, UserAccount, UserStatus};
use crate::domain::errors::RegistryError;
use crate::domain::keys::CompositeKey;
use crate::domain::topup::TopUpSchedule;
use crate::ports::outbound::{LedgerStore, TimeSource};
use tracing::info;

/// Registry for user-account records.
#[derive(Debug, Clone, Default)]
pub struct UserRegistry {
    topups: TopUpSchedule,
}

impl UserRegistry {
    pub fn new(topups: TopUpSchedule) -> Self {
        Self { topups }
    }

    /// Request registration of a new account.
    ///
    /// Fails `AlreadyExists` if the (name, national id) pair already has a
    /// record; the original record stays untouched.
    pub fn request<L: LedgerStore, T: TimeSource>(
        &self,
        ctx: &mut TransactionContext<'_, L, T>,
        request: NewUserRequest,
    ) -> Result<UserAccount, RegistryError> {
        let key = UserAccount::account_key(&request.name, &request.national_id)?;
        if ctx.store().get::<UserAccount>(&key)?.is_some() {
            return Err(RegistryError::AlreadyExists {
                key: key.to_string(),
            });
        }

        let account = UserAccount::open(request, ctx.caller().clone(), ctx.now())?;
        ctx.store_mut().put(&account)?;
        info!(key = %account.key, "user registration requested");
        Ok(account)
    }

    /// Approve a requested account. Exactly-once: re-approval fails
    /// `InvalidState` and changes nothing.
    pub fn approve<L: LedgerStore, T: TimeSource>(
        &self,
        ctx: &mut TransactionContext<'_, L, T>,
        key: &CompositeKey,
    ) -> Result<UserAccount, RegistryError> {
        let mut account = load_account(ctx, key)?;
        account.approve(ctx.caller().clone(), ctx.now())?;
        ctx.store_mut().put(&account)?;
        info!(key = %account.key, registrar = %ctx.caller(), "user approved");
        Ok(account)
    }

    /// Read an account. No side effects.
    pub fn view<L: LedgerStore, T: TimeSource>(
        &self,
        ctx: &TransactionContext<'_, L, T>,
        key: &CompositeKey,
    ) -> Result<UserAccount, RegistryError> {
        load_account(ctx, key)
    }

    /// Credit an approved account with the amount a top-up code stands for.
    ///
    /// Precondition order: missing record (`NotFound`), unapproved account
    /// (`InvalidState`), unrecognized code (`InvalidArgument`).
    pub fn credit<L: LedgerStore, T: TimeSource>(
        &self,
        ctx: &mut TransactionContext<'_, L, T>,
        key: &CompositeKey,
        code: &str,
    ) -> Result<UserAccount, RegistryError> {
        let mut account = load_account(ctx, key)?;
        if account.status != UserStatus::Approved {
            return Err(RegistryError::invalid_state(
                key,
                "account must be approved before recharging",
            ));
        }
        let amount = self.topups.amount(code).ok_or_else(|| {
            RegistryError::invalid_argument(format!("unrecognized top-up code: {code}"))
        })?;

        account.credit(amount, ctx.now())?;
        ctx.store_mut().put(&account)?;
        info!(key = %account.key, amount, "account recharged");
        Ok(account)
    }
}
