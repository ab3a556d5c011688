//! # Registry Entities
//!
//! The two record shapes stored on the ledger (user accounts and
//! properties) plus the validated request schemas that create them.
//!
//! ## Type Decisions
//!
//! - `balance`/`price: u64`: coin amounts are small integers minted by the
//!   top-up schedule; arithmetic is checked, never wrapping, so conservation
//!   holds exactly.
//! - Status transitions live on the entities as methods. A record can only
//!   move through its state machine, never be bent into an arbitrary shape
//!   by a caller.

use crate::domain::errors::RegistryError;
use crate::domain::keys::{CompositeKey, Namespace};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Seconds since the Unix epoch, as handed out by the platform clock.
pub type Timestamp = u64;

/// Stable string identifying an invoking party, produced by the platform's
/// identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(String);

impl ClientId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ClientId {
    fn from(id: &str) -> Self {
        ClientId(id.to_string())
    }
}

impl From<String> for ClientId {
    fn from(id: String) -> Self {
        ClientId(id)
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Approval state of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    /// Registration requested, awaiting a registrar.
    Requested,
    /// Admitted to the network by a registrar.
    Approved,
}

/// Lifecycle state of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyStatus {
    /// Registration requested, awaiting a registrar.
    Requested,
    /// Registered on the network; not currently purchasable.
    Registered,
    /// Listed by its owner; purchasable.
    OnSale,
}

impl FromStr for PropertyStatus {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Requested" => Ok(PropertyStatus::Requested),
            "Registered" => Ok(PropertyStatus::Registered),
            "OnSale" => Ok(PropertyStatus::OnSale),
            other => Err(RegistryError::invalid_argument(format!(
                "unknown property status: {other}"
            ))),
        }
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PropertyStatus::Requested => "Requested",
            PropertyStatus::Registered => "Registered",
            PropertyStatus::OnSale => "OnSale",
        };
        f.write_str(s)
    }
}

/// Validated input schema for a user registration request.
///
/// Malformed input is rejected here, before any key is derived or the
/// ledger is touched. The (name, national id) pair is the account's sole
/// uniqueness constraint; email and phone are not deduplicated.
#[derive(Debug, Clone)]
pub struct NewUserRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub national_id: String,
}

impl NewUserRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        national_id: impl Into<String>,
    ) -> Result<Self, RegistryError> {
        let request = Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            national_id: national_id.into(),
        };
        if request.name.is_empty() || request.national_id.is_empty() {
            return Err(RegistryError::invalid_argument(
                "name and national id must not be empty",
            ));
        }
        if request.email.is_empty() || !request.email.contains('@') {
            return Err(RegistryError::invalid_argument("malformed email address"));
        }
        if request.phone.is_empty() {
            return Err(RegistryError::invalid_argument("phone must not be empty"));
        }
        Ok(request)
    }
}

/// Validated input schema for a property registration request.
#[derive(Debug, Clone)]
pub struct PropertyRequest {
    pub property_id: String,
    pub price: u64,
}

impl PropertyRequest {
    pub fn new(property_id: impl Into<String>, price: u64) -> Result<Self, RegistryError> {
        let property_id = property_id.into();
        if property_id.is_empty() {
            return Err(RegistryError::invalid_argument(
                "property id must not be empty",
            ));
        }
        if price == 0 {
            return Err(RegistryError::invalid_argument(
                "price must be a positive integer",
            ));
        }
        Ok(Self { property_id, price })
    }
}

/// A registered participant's account record.
///
/// Keyed by (name, national id). Created by a registration request, admitted
/// by a registrar, topped up once admitted. Never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    /// The record's own derived key, embedded so a stored document is
    /// self-describing.
    pub key: CompositeKey,
    pub name: String,
    pub national_id: String,
    pub email: String,
    pub phone: String,
    /// Identity of the party that submitted the registration request.
    pub submitted_by: ClientId,
    pub status: UserStatus,
    /// Coin balance. Zero until the first recharge after approval.
    pub balance: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// Identity of the approving registrar, set exactly once on approval.
    pub approved_by: Option<ClientId>,
}

impl UserAccount {
    /// Derive the account key for a (name, national id) pair.
    pub fn account_key(name: &str, national_id: &str) -> Result<CompositeKey, RegistryError> {
        CompositeKey::new(Namespace::UserAccount, [name, national_id])
    }

    /// Open a fresh account from a validated request.
    pub fn open(
        request: NewUserRequest,
        submitted_by: ClientId,
        now: Timestamp,
    ) -> Result<Self, RegistryError> {
        let key = Self::account_key(&request.name, &request.national_id)?;
        Ok(Self {
            key,
            name: request.name,
            national_id: request.national_id,
            email: request.email,
            phone: request.phone,
            submitted_by,
            status: UserStatus::Requested,
            balance: 0,
            created_at: now,
            updated_at: now,
            approved_by: None,
        })
    }

    /// Admit the account to the network.
    ///
    /// Approval happens exactly once: a second attempt fails `InvalidState`
    /// and leaves the record untouched. Status, audit identity, and
    /// `updated_at` change together; the balance keeps its current value.
    pub fn approve(&mut self, registrar: ClientId, now: Timestamp) -> Result<(), RegistryError> {
        if self.status == UserStatus::Approved {
            return Err(RegistryError::invalid_state(
                &self.key,
                "account is already approved",
            ));
        }
        self.status = UserStatus::Approved;
        self.approved_by = Some(registrar);
        self.updated_at = now;
        Ok(())
    }

    /// Add coins to an approved account.
    pub fn credit(&mut self, amount: u64, now: Timestamp) -> Result<(), RegistryError> {
        if self.status != UserStatus::Approved {
            return Err(RegistryError::invalid_state(
                &self.key,
                "account must be approved before its balance can change",
            ));
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| RegistryError::BalanceOverflow {
                key: self.key.to_string(),
            })?;
        self.updated_at = now;
        Ok(())
    }

    /// Remove coins from the account; fails without mutating if the balance
    /// cannot cover `amount`.
    pub fn debit(&mut self, amount: u64, now: Timestamp) -> Result<(), RegistryError> {
        if self.balance < amount {
            return Err(RegistryError::InsufficientBalance {
                required: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        self.updated_at = now;
        Ok(())
    }
}

/// A registrable property's record.
///
/// Keyed by property id alone, a single-field key deliberately distinct
/// in shape from the two-field account key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// The record's own derived key.
    pub key: CompositeKey,
    pub property_id: String,
    /// Account key of the current owner.
    pub owner: CompositeKey,
    pub price: u64,
    pub status: PropertyStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// Identity of the approving registrar.
    pub approved_by: Option<ClientId>,
}

impl Property {
    /// Derive the property key for a property id.
    pub fn property_key(property_id: &str) -> Result<CompositeKey, RegistryError> {
        CompositeKey::new(Namespace::Property, [property_id])
    }

    /// Open a registration request owned by `owner`.
    pub fn open(
        request: PropertyRequest,
        owner: CompositeKey,
        now: Timestamp,
    ) -> Result<Self, RegistryError> {
        let key = Self::property_key(&request.property_id)?;
        Ok(Self {
            key,
            property_id: request.property_id,
            owner,
            price: request.price,
            status: PropertyStatus::Requested,
            created_at: now,
            updated_at: now,
            approved_by: None,
        })
    }

    /// Register the property on the network. Exactly-once, like account
    /// approval: only a `Requested` property can be approved.
    pub fn approve(&mut self, registrar: ClientId, now: Timestamp) -> Result<(), RegistryError> {
        if self.status != PropertyStatus::Requested {
            return Err(RegistryError::invalid_state(
                &self.key,
                "property registration is already approved",
            ));
        }
        self.status = PropertyStatus::Registered;
        self.approved_by = Some(registrar);
        self.updated_at = now;
        Ok(())
    }

    /// Owner-driven listing change: `Registered -> OnSale` or back.
    ///
    /// A `Requested` property cannot be listed, and no operation returns a
    /// property to `Requested`.
    pub fn update_status(
        &mut self,
        new_status: PropertyStatus,
        now: Timestamp,
    ) -> Result<(), RegistryError> {
        match (self.status, new_status) {
            (PropertyStatus::Registered, PropertyStatus::OnSale)
            | (PropertyStatus::OnSale, PropertyStatus::Registered) => {
                self.status = new_status;
                self.updated_at = now;
                Ok(())
            }
            (current, requested) => Err(RegistryError::invalid_state(
                &self.key,
                format!("cannot move property from {current} to {requested}"),
            )),
        }
    }

    /// Hand the property to a new owner and take it off the market.
    ///
    /// The purchase workflow performs every validation before calling this.
    pub fn transfer_to(&mut self, buyer: CompositeKey, now: Timestamp) {
        self.owner = buyer;
        self.status = PropertyStatus::Registered;
        self.updated_at = now;
    }
}

/// Result of a successful purchase: the three records the workflow mutated,
/// returned as one structured value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOutcome {
    pub property: Property,
    pub buyer: UserAccount,
    pub seller: UserAccount,
}
