//! The key provider contract and the opaque key primitive it hands out.
//!
//! A [`KeyProvider`] performs all cryptographic work: it creates, generates, exports and compares
//! keys.
//! Every key it creates is returned as a [`CryptoKey`], an opaque and cheaply clonable handle
//! that carries a [`KeyType`] discriminant, a [`KeyAlgorithm`] descriptor, a reference to the
//! provider that created it and provider-private key material.
//!
//! The [`software`] module contains a provider implemented on top of the RustCrypto crates.

mod error;
pub mod software;

use std::{
    any::{Any, TypeId},
    fmt::Debug,
    sync::Arc,
};

pub use error::Error;
use serde::{Deserialize, Serialize};

use crate::key::{
    AsymmetricKeyDetails,
    AsymmetricKeyType,
    CreatePrivateKeyOptions,
    CreatePublicKeyOptions,
    ExportOptions,
    GenerateKeyOptions,
    GenerateKeyPairOptions,
    KeyData,
    KeyExport,
    KeyType,
    SecretKeyAlgorithm,
    StringEncoding,
};

/// The algorithm descriptor of a [`CryptoKey`].
///
/// # Examples
///
/// ```
/// use keyobject::provider::KeyAlgorithm;
///
/// let algorithm = KeyAlgorithm::new("hmac", Some(256));
/// assert_eq!(algorithm.name, "hmac");
/// assert_eq!(algorithm.length, Some(256));
/// ```
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct KeyAlgorithm {
    /// The name of the algorithm.
    pub name: String,

    /// The length of the key in bits, if the algorithm defines one.
    pub length: Option<u32>,
}

impl KeyAlgorithm {
    /// Creates a new [`KeyAlgorithm`].
    pub fn new(name: impl Into<String>, length: Option<u32>) -> Self {
        Self {
            name: name.into(),
            length,
        }
    }
}

struct Inner {
    provider: Arc<dyn KeyProvider>,
    key_type: KeyType,
    algorithm: KeyAlgorithm,
    material_type: TypeId,
    material: Box<dyn Any + Send + Sync>,
}

/// An opaque key primitive created by a [`KeyProvider`].
///
/// Cloning a [`CryptoKey`] yields another reference to the identical primitive.
/// The key material can only be read by code that knows its concrete type, which in practice is
/// the provider that created it.
#[derive(Clone)]
pub struct CryptoKey {
    inner: Arc<Inner>,
}

impl CryptoKey {
    /// Creates a new [`CryptoKey`].
    ///
    /// This is meant to be called by [`KeyProvider`] implementations, which pass in a reference
    /// to themselves and the material of the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyobject::{
    ///     key::KeyType,
    ///     provider::{CryptoKey, KeyAlgorithm, software::SoftwareKeyProvider},
    /// };
    ///
    /// let provider = SoftwareKeyProvider::new();
    /// let key = CryptoKey::new(
    ///     provider,
    ///     KeyType::Secret,
    ///     KeyAlgorithm::new("opaque", None),
    ///     vec![0u8; 16],
    /// );
    /// assert_eq!(key.key_type(), KeyType::Secret);
    /// assert_eq!(key.material::<Vec<u8>>(), Some(&vec![0u8; 16]));
    /// ```
    pub fn new<M: Any + Send + Sync>(
        provider: Arc<dyn KeyProvider>,
        key_type: KeyType,
        algorithm: KeyAlgorithm,
        material: M,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                provider,
                key_type,
                algorithm,
                material_type: TypeId::of::<M>(),
                material: Box::new(material),
            }),
        }
    }

    /// Returns the [`KeyType`] discriminant of the key.
    pub fn key_type(&self) -> KeyType {
        self.inner.key_type
    }

    /// Returns the algorithm descriptor of the key.
    pub fn algorithm(&self) -> &KeyAlgorithm {
        &self.inner.algorithm
    }

    /// Returns the key material, if it is of type `M`.
    pub fn material<M: Any>(&self) -> Option<&M> {
        self.inner.material.downcast_ref::<M>()
    }

    /// Returns the [`KeyProvider`] that created the key.
    pub fn provider(&self) -> &dyn KeyProvider {
        self.inner.provider.as_ref()
    }

    /// Returns whether `self` and `other` are references to the identical primitive.
    pub fn ptr_eq(&self, other: &CryptoKey) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Returns whether the material of `self` and `other` is of the same concrete type.
    pub(crate) fn is_compatible_with(&self, other: &CryptoKey) -> bool {
        self.inner.material_type == other.inner.material_type
    }
}

impl AsRef<CryptoKey> for CryptoKey {
    fn as_ref(&self) -> &CryptoKey {
        self
    }
}

impl Debug for CryptoKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CryptoKey")
            .field("key_type", &self.inner.key_type)
            .field("algorithm", &self.inner.algorithm)
            .field("provider", &self.inner.provider)
            .field("material", &"[REDACTED]")
            .finish()
    }
}

/// The public and private [`CryptoKey`] of a generated key pair.
#[derive(Clone, Debug)]
pub struct CryptoKeyPair {
    /// The public key.
    pub public_key: CryptoKey,

    /// The private key.
    pub private_key: CryptoKey,
}

/// A service that creates, generates, exports and compares [`CryptoKey`]s.
///
/// Implementations are expected to attach a reference to themselves to every [`CryptoKey`] they
/// create (see [`CryptoKey::new`]) and to reject keys with material they do not recognize.
pub trait KeyProvider: Debug + Send + Sync {
    /// Creates a secret key from raw key material.
    ///
    /// Text is decoded using `encoding`, which defaults to [`StringEncoding::Utf8`].
    ///
    /// # Errors
    ///
    /// Returns an error if the key material can not be used as secret key.
    fn create_secret_key(
        &self,
        key: &KeyData,
        encoding: Option<StringEncoding>,
    ) -> Result<CryptoKey, Error>;

    /// Creates a private key from an encoded representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the key material can not be decoded.
    fn create_private_key(&self, options: &CreatePrivateKeyOptions) -> Result<CryptoKey, Error>;

    /// Creates a public key from an encoded representation of a public or private key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key material can not be decoded.
    fn create_public_key(&self, options: &CreatePublicKeyOptions) -> Result<CryptoKey, Error>;

    /// Generates a new secret key.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters in `options` are invalid for `algorithm`.
    fn generate_key(
        &self,
        algorithm: SecretKeyAlgorithm,
        options: &GenerateKeyOptions,
    ) -> Result<CryptoKey, Error>;

    /// Generates a new asymmetric key pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters in `options` are invalid for `key_type`.
    fn generate_key_pair(
        &self,
        key_type: AsymmetricKeyType,
        options: &GenerateKeyPairOptions,
    ) -> Result<CryptoKeyPair, Error>;

    /// Exports `key` according to `options`.
    ///
    /// # Errors
    ///
    /// Returns an error if the combination of options is not supported for `key`.
    fn export_key(&self, key: &CryptoKey, options: &ExportOptions) -> Result<KeyExport, Error>;

    /// Returns whether `key` and `other` contain the same key material.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the keys has not been created by this provider.
    fn equals(&self, key: &CryptoKey, other: &CryptoKey) -> Result<bool, Error>;

    /// Returns the algorithm specific parameters of an asymmetric key.
    ///
    /// # Errors
    ///
    /// Returns an error if `key` is not an asymmetric key created by this provider.
    fn asymmetric_key_details(&self, key: &CryptoKey) -> Result<AsymmetricKeyDetails, Error>;

    /// Returns the algorithm family of an asymmetric key.
    ///
    /// # Errors
    ///
    /// Returns an error if `key` is not an asymmetric key created by this provider.
    fn asymmetric_key_type(&self, key: &CryptoKey) -> Result<AsymmetricKeyType, Error>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::provider::software::SoftwareKeyProvider;

    #[test]
    fn clones_are_identical_primitives() {
        let provider = SoftwareKeyProvider::new();
        let key = CryptoKey::new(
            provider.clone(),
            KeyType::Secret,
            KeyAlgorithm::new("opaque", None),
            1u8,
        );
        let other = CryptoKey::new(
            provider,
            KeyType::Secret,
            KeyAlgorithm::new("opaque", None),
            1u8,
        );
        assert!(key.ptr_eq(&key.clone()));
        assert!(!key.ptr_eq(&other));
        assert!(key.is_compatible_with(&other));
    }

    #[test]
    fn material_of_other_type_is_incompatible() {
        let provider = SoftwareKeyProvider::new();
        let key = CryptoKey::new(
            provider.clone(),
            KeyType::Secret,
            KeyAlgorithm::new("opaque", None),
            1u8,
        );
        let other = CryptoKey::new(
            provider,
            KeyType::Secret,
            KeyAlgorithm::new("opaque", None),
            String::from("1"),
        );
        assert!(!key.is_compatible_with(&other));
        assert!(key.material::<String>().is_none());
    }

    #[test]
    fn debug_redacts_material() -> TestResult {
        let provider = SoftwareKeyProvider::new();
        let key = CryptoKey::new(
            provider,
            KeyType::Secret,
            KeyAlgorithm::new("opaque", Some(8)),
            String::from("hunter2"),
        );
        let debug = format!("{key:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("hunter2"));
        Ok(())
    }
}
