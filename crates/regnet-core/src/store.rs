//! # Typed Entity Store
//!
//! A repository over the [`LedgerStore`] port, parameterized by entity
//! shape. Each entity type declares its namespace and carries its own key,
//! so a read can never deserialize into the wrong record shape and a write
//! can never land in another namespace.
//!
//! Records are stored as flat JSON documents (field name to value),
//! including the derived key as a field.

use crate::domain::entities::{Property, UserAccount};
use crate::domain::errors::RegistryError;
use crate::domain::keys::{CompositeKey, Namespace};
use crate::ports::outbound::LedgerStore;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A record shape that lives on the ledger.
pub trait LedgerEntity: Serialize + DeserializeOwned {
    /// The namespace every key of this entity type belongs to.
    const NAMESPACE: Namespace;

    /// The record's own derived key.
    fn key(&self) -> &CompositeKey;
}

impl LedgerEntity for UserAccount {
    const NAMESPACE: Namespace = Namespace::UserAccount;

    fn key(&self) -> &CompositeKey {
        &self.key
    }
}

impl LedgerEntity for Property {
    const NAMESPACE: Namespace = Namespace::Property;

    fn key(&self) -> &CompositeKey {
        &self.key
    }
}

/// Typed get/put of single records against a borrowed ledger.
pub struct EntityStore<'a, L: LedgerStore> {
    ledger: &'a mut L,
}

impl<'a, L: LedgerStore> EntityStore<'a, L> {
    pub fn new(ledger: &'a mut L) -> Self {
        Self { ledger }
    }

    /// Read the record at `key`, or `None` if the key was never written.
    ///
    /// A key from another namespace is rejected before the ledger is
    /// touched: the caller asked for the wrong record shape.
    pub fn get<E: LedgerEntity>(&self, key: &CompositeKey) -> Result<Option<E>, RegistryError> {
        if key.namespace() != E::NAMESPACE {
            return Err(RegistryError::invalid_argument(format!(
                "key {key} does not address the {} namespace",
                E::NAMESPACE
            )));
        }
        match self.ledger.get(&key.storage_bytes())? {
            None => Ok(None),
            Some(bytes) => serde_json::from_slice(&bytes)
                .map(Some)
                .map_err(|err| RegistryError::Codec {
                    message: err.to_string(),
                }),
        }
    }

    /// Write `entity` at its own key. Total overwrite, no field merging.
    pub fn put<E: LedgerEntity>(&mut self, entity: &E) -> Result<(), RegistryError> {
        let bytes = serde_json::to_vec(entity).map_err(|err| RegistryError::Codec {
            message: err.to_string(),
        })?;
        self.ledger.put(&entity.key().storage_bytes(), &bytes)?;
        Ok(())
    }
}
