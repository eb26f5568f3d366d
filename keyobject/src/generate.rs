//! Functions for creating and generating key objects.
//!
//! All functions delegate to a [`KeyProvider`] and wrap the returned [`CryptoKey`]s in the
//! matching key object.
//! [`generate_key`] and [`generate_key_pair`] run on the current [`tokio::task::LocalSet`] and
//! report their result to a callback.

use std::sync::Arc;

use log::debug;
use tokio::task::{JoinHandle, spawn_local};

#[cfg(doc)]
use crate::provider::CryptoKey;
use crate::{
    Error,
    key::{
        AsymmetricKeyType,
        CreatePrivateKeyOptions,
        CreatePublicKeyOptions,
        GenerateKeyOptions,
        GenerateKeyPairOptions,
        KeyData,
        KeyObject,
        PrivateKeyObject,
        PublicKeyObject,
        SecretKeyAlgorithm,
        SecretKeyObject,
        StringEncoding,
    },
    provider::KeyProvider,
};

/// The public and private key object of a generated key pair.
#[derive(Clone, Debug)]
pub struct KeyPair {
    /// The public key.
    pub public_key: PublicKeyObject,

    /// The private key.
    pub private_key: PrivateKeyObject,
}

/// Creates a [`SecretKeyObject`] from raw key material.
///
/// Text is decoded using `encoding`, which defaults to [`StringEncoding::Utf8`].
///
/// # Errors
///
/// Returns an error if
///
/// - the key provider rejects the key material,
/// - or the key provider returns a key that is not a secret key.
///
/// # Examples
///
/// ```
/// # fn main() -> testresult::TestResult {
/// use keyobject::{create_secret_key, key::StringEncoding, provider::software::SoftwareKeyProvider};
///
/// let provider = SoftwareKeyProvider::new();
/// let key = create_secret_key(&*provider, "616263", Some(StringEncoding::Hex))?;
/// assert_eq!(key.symmetric_key_size(), 24);
/// assert!(key.equals(&create_secret_key(&*provider, "abc", None)?)?);
/// # Ok(())
/// # }
/// ```
pub fn create_secret_key(
    provider: &dyn KeyProvider,
    key: impl Into<KeyData>,
    encoding: Option<StringEncoding>,
) -> Result<SecretKeyObject, Error> {
    let handle = provider.create_secret_key(&key.into(), encoding)?;
    SecretKeyObject::try_from(KeyObject::from(handle))
}

/// Creates a [`PrivateKeyObject`] from an encoded private key.
///
/// `input` is either [`CreatePrivateKeyOptions`] or raw key material (a PEM document as text or
/// bytes, or a [`JsonWebKey`][`crate::key::JsonWebKey`]).
///
/// # Errors
///
/// Returns an error if
///
/// - the key provider can not decode the key material,
/// - or the key provider returns a key that is not a private key.
///
/// # Examples
///
/// ```
/// # fn main() -> testresult::TestResult {
/// use keyobject::{
///     create_private_key,
///     generate_key_pair_sync,
///     key::{AsymmetricKeyType, PrivateKeyExportOptions},
///     provider::software::SoftwareKeyProvider,
/// };
///
/// let provider = SoftwareKeyProvider::new();
/// let pair = generate_key_pair_sync(&*provider, AsymmetricKeyType::Ed25519, Default::default())?;
/// let pem = pair.private_key.export(PrivateKeyExportOptions::default())?;
///
/// let key = create_private_key(&*provider, pem.as_pem().ok_or("not a PEM document")?)?;
/// assert!(key.equals(&pair.private_key)?);
/// # Ok(())
/// # }
/// ```
pub fn create_private_key(
    provider: &dyn KeyProvider,
    input: impl Into<CreatePrivateKeyOptions>,
) -> Result<PrivateKeyObject, Error> {
    let handle = provider.create_private_key(&input.into())?;
    PrivateKeyObject::try_from(KeyObject::from(handle))
}

/// Creates a [`PublicKeyObject`] from an encoded public or private key.
///
/// `input` is either [`CreatePublicKeyOptions`] or raw key material (a PEM document as text or
/// bytes, or a [`JsonWebKey`][`crate::key::JsonWebKey`]).
/// If private key material is provided, the public key is derived from it.
///
/// # Errors
///
/// Returns an error if
///
/// - the key provider can not decode the key material,
/// - or the key provider returns a key that is not a public key.
pub fn create_public_key(
    provider: &dyn KeyProvider,
    input: impl Into<CreatePublicKeyOptions>,
) -> Result<PublicKeyObject, Error> {
    let handle = provider.create_public_key(&input.into())?;
    PublicKeyObject::try_from(KeyObject::from(handle))
}

/// Generates a new [`SecretKeyObject`].
///
/// # Errors
///
/// Returns an error if
///
/// - `options` are invalid for `algorithm`,
/// - or the key provider returns a key that is not a secret key.
///
/// # Examples
///
/// ```
/// # fn main() -> testresult::TestResult {
/// use keyobject::{
///     generate_key_sync,
///     key::{GenerateKeyOptions, SecretKeyAlgorithm},
///     provider::software::SoftwareKeyProvider,
/// };
///
/// let provider = SoftwareKeyProvider::new();
/// let key = generate_key_sync(
///     &*provider,
///     SecretKeyAlgorithm::Hmac,
///     GenerateKeyOptions { length: 256 },
/// )?;
/// assert_eq!(key.symmetric_key_size(), 256);
/// # Ok(())
/// # }
/// ```
pub fn generate_key_sync(
    provider: &dyn KeyProvider,
    algorithm: SecretKeyAlgorithm,
    options: GenerateKeyOptions,
) -> Result<SecretKeyObject, Error> {
    debug!("Generate a secret key of type {algorithm}");
    let handle = provider.generate_key(algorithm, &options)?;
    SecretKeyObject::try_from(KeyObject::from(handle))
}

/// Generates a new [`SecretKeyObject`] and passes the result to `callback`.
///
/// Generation runs in a task spawned on the current [`tokio::task::LocalSet`].
/// `callback` is called exactly once, after this function has returned.
/// The returned [`JoinHandle`] completes once `callback` has returned.
///
/// # Panics
///
/// Panics if called outside of a [`tokio::task::LocalSet`].
///
/// # Examples
///
/// ```
/// # fn main() -> testresult::TestResult {
/// use std::{cell::RefCell, rc::Rc};
///
/// use keyobject::{
///     generate_key,
///     key::{GenerateKeyOptions, SecretKeyAlgorithm},
///     provider::software::SoftwareKeyProvider,
/// };
/// use tokio::task::LocalSet;
///
/// let runtime = tokio::runtime::Builder::new_current_thread().build()?;
/// let sizes = Rc::new(RefCell::new(Vec::new()));
/// let callback_sizes = sizes.clone();
///
/// LocalSet::new().block_on(&runtime, async move {
///     generate_key(
///         SoftwareKeyProvider::new(),
///         SecretKeyAlgorithm::Aes,
///         GenerateKeyOptions { length: 256 },
///         move |result| {
///             if let Ok(key) = result {
///                 callback_sizes.borrow_mut().push(key.symmetric_key_size());
///             }
///         },
///     )
///     .await
/// })?;
/// assert_eq!(*sizes.borrow(), vec![256]);
/// # Ok(())
/// # }
/// ```
pub fn generate_key<F>(
    provider: Arc<dyn KeyProvider>,
    algorithm: SecretKeyAlgorithm,
    options: GenerateKeyOptions,
    callback: F,
) -> JoinHandle<()>
where
    F: FnOnce(Result<SecretKeyObject, Error>) + 'static,
{
    debug!("Schedule the generation of a secret key of type {algorithm}");
    spawn_local(async move {
        callback(generate_key_sync(provider.as_ref(), algorithm, options));
    })
}

/// Generates a new asymmetric [`KeyPair`].
///
/// # Errors
///
/// Returns an error if
///
/// - `options` are invalid for `key_type`,
/// - or the key provider returns keys of the wrong [`KeyType`][`crate::key::KeyType`].
///
/// # Examples
///
/// ```
/// # fn main() -> testresult::TestResult {
/// use keyobject::{
///     generate_key_pair_sync,
///     key::{AsymmetricKeyType, GenerateKeyPairOptions, NamedCurve},
///     provider::software::SoftwareKeyProvider,
/// };
///
/// let provider = SoftwareKeyProvider::new();
/// let pair = generate_key_pair_sync(
///     &*provider,
///     AsymmetricKeyType::Ec,
///     GenerateKeyPairOptions {
///         named_curve: Some(NamedCurve::P256),
///         ..Default::default()
///     },
/// )?;
/// assert_eq!(
///     pair.public_key.asymmetric_key_details()?.named_curve,
///     Some(NamedCurve::P256)
/// );
/// # Ok(())
/// # }
/// ```
pub fn generate_key_pair_sync(
    provider: &dyn KeyProvider,
    key_type: AsymmetricKeyType,
    options: GenerateKeyPairOptions,
) -> Result<KeyPair, Error> {
    debug!("Generate a key pair of type {key_type}");
    let pair = provider.generate_key_pair(key_type, &options)?;
    Ok(KeyPair {
        public_key: PublicKeyObject::try_from(KeyObject::from(pair.public_key))?,
        private_key: PrivateKeyObject::try_from(KeyObject::from(pair.private_key))?,
    })
}

/// Generates a new asymmetric [`KeyPair`] and passes the result to `callback`.
///
/// Generation runs in a task spawned on the current [`tokio::task::LocalSet`].
/// `callback` is called exactly once, after this function has returned.
/// The returned [`JoinHandle`] completes once `callback` has returned.
///
/// # Panics
///
/// Panics if called outside of a [`tokio::task::LocalSet`].
pub fn generate_key_pair<F>(
    provider: Arc<dyn KeyProvider>,
    key_type: AsymmetricKeyType,
    options: GenerateKeyPairOptions,
    callback: F,
) -> JoinHandle<()>
where
    F: FnOnce(Result<KeyPair, Error>) + 'static,
{
    debug!("Schedule the generation of a key pair of type {key_type}");
    spawn_local(async move {
        callback(generate_key_pair_sync(provider.as_ref(), key_type, options));
    })
}
