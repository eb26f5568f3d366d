//! Key objects wrapping a [`CryptoKey`].

use std::any::Any;

use log::{debug, trace};

use crate::{
    Error,
    key::{
        AsymmetricKeyDetails,
        AsymmetricKeyType,
        ExportOptions,
        KeyExport,
        KeyType,
        PrivateKeyExportOptions,
        PublicKeyExportOptions,
        SecretKeyExportOptions,
    },
    provider::CryptoKey,
};

/// Exports `key` using the provider that created it.
fn export(key: &CryptoKey, options: &ExportOptions) -> Result<KeyExport, Error> {
    debug!("Export a {} key object", key.key_type());
    Ok(key.provider().export_key(key, options)?)
}

/// Compares `key` with `other`.
///
/// Identical primitives are equal and keys of different type are not, both without consulting a
/// provider.
fn equals(key: &CryptoKey, other: &CryptoKey) -> Result<bool, Error> {
    if key.ptr_eq(other) {
        return Ok(true);
    }
    if key.key_type() != other.key_type() {
        return Ok(false);
    }
    if !key.is_compatible_with(other) {
        return Err(Error::InvalidArgType {
            name: "other",
            expected: "KeyObject",
        });
    }
    Ok(key.provider().equals(key, other)?)
}

/// A key object of any [`KeyType`].
///
/// A [`KeyObject`] is created from a [`CryptoKey`] and dispatches on its [`KeyType`]
/// discriminant.
///
/// # Examples
///
/// ```
/// # fn main() -> testresult::TestResult {
/// use keyobject::{
///     key::{KeyData, KeyObject, KeyType},
///     provider::{KeyProvider, software::SoftwareKeyProvider},
/// };
///
/// let provider = SoftwareKeyProvider::new();
/// let handle = provider.create_secret_key(&KeyData::from("abc"), None)?;
/// let key = KeyObject::from(handle.clone());
///
/// assert_eq!(key.key_type(), KeyType::Secret);
/// assert!(key.equals(&handle)?);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub enum KeyObject {
    /// A secret key
    Secret(SecretKeyObject),

    /// A public key
    Public(PublicKeyObject),

    /// A private key
    Private(PrivateKeyObject),
}

impl KeyObject {
    /// Creates a [`KeyObject`] from a type-erased value.
    ///
    /// This is [`KeyObject::from`] for callers that receive a value whose type is only known at
    /// runtime.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::InvalidArgType`] if `value` is not a [`CryptoKey`].
    ///
    /// # Examples
    ///
    /// ```
    /// use keyobject::{Error, key::KeyObject};
    ///
    /// assert!(matches!(
    ///     KeyObject::from_any(&"not a key"),
    ///     Err(Error::InvalidArgType { name: "key", .. })
    /// ));
    /// ```
    pub fn from_any(value: &dyn Any) -> Result<Self, Error> {
        value
            .downcast_ref::<CryptoKey>()
            .map(|handle| Self::from(handle.clone()))
            .ok_or(Error::InvalidArgType {
                name: "key",
                expected: "CryptoKey",
            })
    }

    /// Returns the [`KeyType`] of the key.
    pub fn key_type(&self) -> KeyType {
        match self {
            Self::Secret(key) => key.key_type(),
            Self::Public(key) => key.key_type(),
            Self::Private(key) => key.key_type(),
        }
    }

    /// Exports the key.
    ///
    /// The options are handed to the key provider as is.
    ///
    /// # Errors
    ///
    /// Returns an error if the key provider does not support `options` for the key.
    pub fn export(&self, options: &ExportOptions) -> Result<KeyExport, Error> {
        export(self.as_ref(), options)
    }

    /// Returns whether the key and `other` contain the same key material.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::InvalidArgType`] if `other` has not been created by a provider that
    /// can read the material of the key.
    pub fn equals(&self, other: &impl AsRef<CryptoKey>) -> Result<bool, Error> {
        equals(self.as_ref(), other.as_ref())
    }
}

impl AsRef<CryptoKey> for KeyObject {
    fn as_ref(&self) -> &CryptoKey {
        match self {
            Self::Secret(key) => key.as_ref(),
            Self::Public(key) => key.as_ref(),
            Self::Private(key) => key.as_ref(),
        }
    }
}

impl From<CryptoKey> for KeyObject {
    fn from(handle: CryptoKey) -> Self {
        trace!("Create a key object for a {} key", handle.key_type());
        match handle.key_type() {
            KeyType::Secret => Self::Secret(SecretKeyObject { handle }),
            KeyType::Public => Self::Public(PublicKeyObject { handle }),
            KeyType::Private => Self::Private(PrivateKeyObject { handle }),
        }
    }
}

/// Implements the conversions shared by all key object variants.
macro_rules! impl_key_object_variant {
    ($object:ident, $variant:ident) => {
        impl AsRef<CryptoKey> for $object {
            fn as_ref(&self) -> &CryptoKey {
                &self.handle
            }
        }

        impl From<$object> for KeyObject {
            fn from(value: $object) -> Self {
                Self::$variant(value)
            }
        }

        impl TryFrom<KeyObject> for $object {
            type Error = Error;

            fn try_from(value: KeyObject) -> Result<Self, Self::Error> {
                match value {
                    KeyObject::$variant(key) => Ok(key),
                    other => Err(Error::KeyTypeMismatch {
                        expected: KeyType::$variant,
                        actual: other.key_type(),
                    }),
                }
            }
        }
    };
}

impl_key_object_variant!(SecretKeyObject, Secret);
impl_key_object_variant!(PublicKeyObject, Public);
impl_key_object_variant!(PrivateKeyObject, Private);

/// A secret key.
///
/// Secret key objects are only created by [`KeyObject::from`] and the functions of this crate.
///
/// ```compile_fail
/// use keyobject::{key::SecretKeyObject, provider::CryptoKey};
///
/// fn forge(handle: CryptoKey) -> SecretKeyObject {
///     SecretKeyObject { handle }
/// }
/// ```
#[derive(Clone, Debug)]
pub struct SecretKeyObject {
    handle: CryptoKey,
}

impl SecretKeyObject {
    /// Returns [`KeyType::Secret`].
    pub fn key_type(&self) -> KeyType {
        KeyType::Secret
    }

    /// Returns the size of the key in bits.
    ///
    /// The size is read from the [`KeyAlgorithm`][`crate::provider::KeyAlgorithm`] of the key and
    /// is `0` if the algorithm does not define a length.
    pub fn symmetric_key_size(&self) -> u32 {
        trace!("Get the size of a secret key");
        self.handle.algorithm().length.unwrap_or(0)
    }

    /// Exports the key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key provider does not support `options` for the key.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> testresult::TestResult {
    /// use keyobject::{
    ///     create_secret_key,
    ///     key::{KeyExport, SecretKeyExportOptions},
    ///     provider::software::SoftwareKeyProvider,
    /// };
    ///
    /// let provider = SoftwareKeyProvider::new();
    /// let key = create_secret_key(&*provider, "abc", None)?;
    /// assert_eq!(
    ///     key.export(SecretKeyExportOptions::default())?,
    ///     KeyExport::Bytes(b"abc".to_vec())
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub fn export(&self, options: SecretKeyExportOptions) -> Result<KeyExport, Error> {
        export(&self.handle, &options.into())
    }

    /// Returns whether the key and `other` contain the same key material.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::InvalidArgType`] if `other` has not been created by a provider that
    /// can read the material of the key.
    pub fn equals(&self, other: &impl AsRef<CryptoKey>) -> Result<bool, Error> {
        equals(&self.handle, other.as_ref())
    }
}

/// A public key.
///
/// Public key objects are only created by [`KeyObject::from`] and the functions of this crate.
///
/// ```compile_fail
/// use keyobject::{key::PublicKeyObject, provider::CryptoKey};
///
/// fn forge(handle: CryptoKey) -> PublicKeyObject {
///     PublicKeyObject { handle }
/// }
/// ```
#[derive(Clone, Debug)]
pub struct PublicKeyObject {
    handle: CryptoKey,
}

impl PublicKeyObject {
    /// Returns [`KeyType::Public`].
    pub fn key_type(&self) -> KeyType {
        KeyType::Public
    }

    /// Returns the algorithm specific parameters of the key.
    ///
    /// The key provider is queried on every call.
    ///
    /// # Errors
    ///
    /// Returns an error if the key provider fails to describe the key.
    pub fn asymmetric_key_details(&self) -> Result<AsymmetricKeyDetails, Error> {
        Ok(self.handle.provider().asymmetric_key_details(&self.handle)?)
    }

    /// Returns the algorithm family of the key.
    ///
    /// The key provider is queried on every call.
    ///
    /// # Errors
    ///
    /// Returns an error if the key provider fails to describe the key.
    pub fn asymmetric_key_type(&self) -> Result<AsymmetricKeyType, Error> {
        Ok(self.handle.provider().asymmetric_key_type(&self.handle)?)
    }

    /// Exports the key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key provider does not support `options` for the key.
    pub fn export(&self, options: PublicKeyExportOptions) -> Result<KeyExport, Error> {
        export(&self.handle, &options.into())
    }

    /// Returns whether the key and `other` contain the same key material.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::InvalidArgType`] if `other` has not been created by a provider that
    /// can read the material of the key.
    pub fn equals(&self, other: &impl AsRef<CryptoKey>) -> Result<bool, Error> {
        equals(&self.handle, other.as_ref())
    }
}

/// A private key.
///
/// Private key objects are only created by [`KeyObject::from`] and the functions of this crate.
///
/// ```compile_fail
/// use keyobject::{key::PrivateKeyObject, provider::CryptoKey};
///
/// fn forge(handle: CryptoKey) -> PrivateKeyObject {
///     PrivateKeyObject { handle }
/// }
/// ```
#[derive(Clone, Debug)]
pub struct PrivateKeyObject {
    handle: CryptoKey,
}

impl PrivateKeyObject {
    /// Returns [`KeyType::Private`].
    pub fn key_type(&self) -> KeyType {
        KeyType::Private
    }

    /// Returns the algorithm specific parameters of the key.
    ///
    /// The key provider is queried on every call.
    ///
    /// # Errors
    ///
    /// Returns an error if the key provider fails to describe the key.
    pub fn asymmetric_key_details(&self) -> Result<AsymmetricKeyDetails, Error> {
        Ok(self.handle.provider().asymmetric_key_details(&self.handle)?)
    }

    /// Returns the algorithm family of the key.
    ///
    /// The key provider is queried on every call.
    ///
    /// # Errors
    ///
    /// Returns an error if the key provider fails to describe the key.
    pub fn asymmetric_key_type(&self) -> Result<AsymmetricKeyType, Error> {
        Ok(self.handle.provider().asymmetric_key_type(&self.handle)?)
    }

    /// Exports the key.
    ///
    /// A [`cipher`][`PrivateKeyExportOptions::cipher`] and a
    /// [`passphrase`][`PrivateKeyExportOptions::passphrase`] encrypt the exported key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key provider does not support `options` for the key.
    pub fn export(&self, options: PrivateKeyExportOptions) -> Result<KeyExport, Error> {
        export(&self.handle, &options.into())
    }

    /// Returns whether the key and `other` contain the same key material.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::InvalidArgType`] if `other` has not been created by a provider that
    /// can read the material of the key.
    pub fn equals(&self, other: &impl AsRef<CryptoKey>) -> Result<bool, Error> {
        equals(&self.handle, other.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};
    use testresult::TestResult;

    use super::*;
    use crate::{
        key::{GenerateKeyPairOptions, KeyData, NamedCurve},
        provider::{KeyProvider, software::SoftwareKeyProvider},
    };

    #[fixture]
    fn handle() -> CryptoKey {
        let provider = SoftwareKeyProvider::new();
        match provider.create_secret_key(&KeyData::from("abc"), None) {
            Ok(handle) => handle,
            Err(error) => panic!("Failed to create a secret key: {error}"),
        }
    }

    #[rstest]
    fn from_any_accepts_crypto_key(handle: CryptoKey) -> TestResult {
        let key = KeyObject::from_any(&handle)?;
        assert_eq!(key.key_type(), KeyType::Secret);
        assert!(key.as_ref().ptr_eq(&handle));
        Ok(())
    }

    #[test]
    fn from_any_rejects_other_values() {
        let values: [&dyn Any; 4] = [&"secret", &(), &42u32, &vec![0u8; 32]];
        for value in values {
            assert!(matches!(
                KeyObject::from_any(value),
                Err(Error::InvalidArgType {
                    name: "key",
                    expected: "CryptoKey"
                })
            ));
        }
    }

    #[rstest]
    fn narrowing_to_another_variant_fails(handle: CryptoKey) {
        assert!(matches!(
            PublicKeyObject::try_from(KeyObject::from(handle)),
            Err(Error::KeyTypeMismatch {
                expected: KeyType::Public,
                actual: KeyType::Secret
            })
        ));
    }

    #[rstest]
    fn narrowing_and_widening(handle: CryptoKey) -> TestResult {
        let secret = SecretKeyObject::try_from(KeyObject::from(handle.clone()))?;
        assert!(secret.as_ref().ptr_eq(&handle));
        assert!(matches!(KeyObject::from(secret), KeyObject::Secret(_)));
        Ok(())
    }

    #[test]
    fn private_and_public_key_of_a_pair_are_not_equal() -> TestResult {
        let provider = SoftwareKeyProvider::new();
        let pair = provider.generate_key_pair(
            AsymmetricKeyType::Ec,
            &GenerateKeyPairOptions {
                named_curve: Some(NamedCurve::P256),
                ..Default::default()
            },
        )?;
        let public_key = KeyObject::from(pair.public_key);
        assert!(!public_key.equals(&pair.private_key)?);
        assert!(public_key.equals(&public_key)?);
        Ok(())
    }
}
