//! # Composite Keys
//!
//! Canonical addressing of registry records. A key is an entity namespace
//! plus an ordered list of identifying fields, encoded into the single
//! string used against the platform's key-value ledger.
//!
//! Encoding joins the parts with `'\u{0}'`, which validated fields can never
//! contain, so two distinct field tuples in one namespace never collide and
//! `decode` is the exact inverse of `encode`.

use crate::domain::errors::RegistryError;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Separator between the namespace and each key field in the encoded form.
pub const KEY_DELIMITER: char = '\u{0}';

/// Entity namespaces, one per record type.
///
/// User and property keys are never confusable even when their literal
/// field values coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// User accounts: `regnet.user` + (name, national id).
    UserAccount,
    /// Properties: `regnet.property` + (property id).
    Property,
}

impl Namespace {
    /// The fixed namespace string prefixed to every key in this namespace.
    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::UserAccount => "regnet.user",
            Namespace::Property => "regnet.property",
        }
    }

    fn from_str(s: &str) -> Option<Self> {
        match s {
            "regnet.user" => Some(Namespace::UserAccount),
            "regnet.property" => Some(Namespace::Property),
            _ => None,
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The address of a single record in the ledger.
///
/// Construction validates the fields, so every existing `CompositeKey`
/// encodes without collisions. Serializes as its encoded string form, which
/// lets a record document embed its own key as a plain field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompositeKey {
    namespace: Namespace,
    fields: Vec<String>,
}

impl CompositeKey {
    /// Build a key from ordered identifying fields.
    ///
    /// Fails with `InvalidArgument` if no field is given, or if any field is
    /// empty or contains the delimiter character.
    pub fn new<I, S>(namespace: Namespace, fields: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        if fields.is_empty() {
            return Err(RegistryError::invalid_argument(
                "composite key requires at least one field",
            ));
        }
        for field in &fields {
            if field.is_empty() {
                return Err(RegistryError::invalid_argument(
                    "composite key fields must not be empty",
                ));
            }
            if field.contains(KEY_DELIMITER) {
                return Err(RegistryError::invalid_argument(
                    "composite key fields must not contain the key delimiter",
                ));
            }
        }
        Ok(Self { namespace, fields })
    }

    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Encode to the canonical address string.
    ///
    /// Pure and deterministic: equal keys always encode identically.
    pub fn encode(&self) -> String {
        let mut out = String::from(self.namespace.as_str());
        for field in &self.fields {
            out.push(KEY_DELIMITER);
            out.push_str(field);
        }
        out
    }

    /// Exact inverse of [`encode`](Self::encode).
    pub fn decode(encoded: &str) -> Result<Self, RegistryError> {
        let mut parts = encoded.split(KEY_DELIMITER);
        let namespace = parts
            .next()
            .and_then(Namespace::from_str)
            .ok_or_else(|| RegistryError::invalid_argument("unknown key namespace"))?;
        Self::new(namespace, parts.map(str::to_owned))
    }

    /// The byte address used against the ledger store.
    pub fn storage_bytes(&self) -> Vec<u8> {
        self.encode().into_bytes()
    }
}

/// Human-readable form for logs and error context; not the storage encoding.
impl fmt::Display for CompositeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.namespace)?;
        for field in &self.fields {
            write!(f, ":{field}")?;
        }
        Ok(())
    }
}

impl Serialize for CompositeKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for CompositeKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        CompositeKey::decode(&encoded).map_err(D::Error::custom)
    }
}
