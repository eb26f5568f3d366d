//! A key provider that records how it is used.

use std::sync::{
    Arc,
    Weak,
    atomic::{AtomicUsize, Ordering},
};

use keyobject::{
    key::{
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
    },
    provider::{CryptoKey, CryptoKeyPair, Error, KeyAlgorithm, KeyProvider},
};

/// A [`KeyProvider`] that stores key material as plain bytes and counts calls.
///
/// The material type differs from that of the software key provider, so keys of both providers
/// can not be compared with each other.
#[derive(Debug)]
pub struct CountingProvider {
    this: Weak<CountingProvider>,
    equals_calls: AtomicUsize,
    details_calls: AtomicUsize,
}

impl CountingProvider {
    pub fn new() -> Arc<Self> {
        Arc::new_cyclic(|this| Self {
            this: this.clone(),
            equals_calls: AtomicUsize::new(0),
            details_calls: AtomicUsize::new(0),
        })
    }

    /// Returns how often [`KeyProvider::equals`] has been called.
    pub fn equals_calls(&self) -> usize {
        self.equals_calls.load(Ordering::SeqCst)
    }

    /// Returns how often [`KeyProvider::asymmetric_key_details`] has been called.
    pub fn details_calls(&self) -> usize {
        self.details_calls.load(Ordering::SeqCst)
    }

    fn wrap(&self, key_type: KeyType, name: &str, material: Vec<u8>) -> Result<CryptoKey, Error> {
        let provider: Arc<dyn KeyProvider> = self.this.upgrade().ok_or(Error::Unavailable)?;
        let length = u32::try_from(material.len() * 8).ok();
        Ok(CryptoKey::new(
            provider,
            key_type,
            KeyAlgorithm::new(name, length),
            material,
        ))
    }

    fn material<'a>(&self, key: &'a CryptoKey) -> Result<&'a Vec<u8>, Error> {
        key.material::<Vec<u8>>().ok_or(Error::ForeignKey)
    }
}

fn unsupported() -> Error {
    Error::Backend("unsupported by the counting provider".into())
}

impl KeyProvider for CountingProvider {
    fn create_secret_key(
        &self,
        key: &KeyData,
        _encoding: Option<StringEncoding>,
    ) -> Result<CryptoKey, Error> {
        let material = match key {
            KeyData::Text(text) => text.as_bytes().to_vec(),
            KeyData::Bytes(bytes) => bytes.clone(),
            KeyData::Jwk(_) => return Err(unsupported()),
        };
        self.wrap(KeyType::Secret, "secret", material)
    }

    fn create_private_key(&self, _options: &CreatePrivateKeyOptions) -> Result<CryptoKey, Error> {
        Err(unsupported())
    }

    fn create_public_key(&self, _options: &CreatePublicKeyOptions) -> Result<CryptoKey, Error> {
        Err(unsupported())
    }

    fn generate_key(
        &self,
        algorithm: SecretKeyAlgorithm,
        options: &GenerateKeyOptions,
    ) -> Result<CryptoKey, Error> {
        let name: &'static str = algorithm.into();
        self.wrap(KeyType::Secret, name, vec![7; (options.length / 8) as usize])
    }

    fn generate_key_pair(
        &self,
        key_type: AsymmetricKeyType,
        _options: &GenerateKeyPairOptions,
    ) -> Result<CryptoKeyPair, Error> {
        let name: &'static str = key_type.into();
        Ok(CryptoKeyPair {
            public_key: self.wrap(KeyType::Public, name, vec![1; 32])?,
            private_key: self.wrap(KeyType::Private, name, vec![2; 32])?,
        })
    }

    fn export_key(&self, key: &CryptoKey, _options: &ExportOptions) -> Result<KeyExport, Error> {
        Ok(KeyExport::Bytes(self.material(key)?.clone()))
    }

    fn equals(&self, key: &CryptoKey, other: &CryptoKey) -> Result<bool, Error> {
        self.equals_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.material(key)? == self.material(other)?)
    }

    fn asymmetric_key_details(&self, key: &CryptoKey) -> Result<AsymmetricKeyDetails, Error> {
        self.details_calls.fetch_add(1, Ordering::SeqCst);
        self.material(key)?;
        Ok(AsymmetricKeyDetails::default())
    }

    fn asymmetric_key_type(&self, key: &CryptoKey) -> Result<AsymmetricKeyType, Error> {
        self.material(key)?;
        Ok(AsymmetricKeyType::Ed25519)
    }
}
