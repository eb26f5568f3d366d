//! Key material held by the software key provider.

use ed25519_dalek::{SigningKey, VerifyingKey};
use pkcs8::{
    DecodePrivateKey,
    DecodePublicKey,
    EncodePrivateKey,
    EncodePublicKey,
    EncryptedPrivateKeyInfo,
    PrivateKeyInfo,
};
use rand::rngs::OsRng;
use rsa::{
    RsaPrivateKey,
    RsaPublicKey,
    pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey, EncodeRsaPrivateKey, EncodeRsaPublicKey},
    traits::PublicKeyParts,
};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::{
    key::{AsymmetricKeyDetails, AsymmetricKeyType, KeyEncodingType, KeyType, NamedCurve},
    passphrase::Passphrase,
    provider::{Error, software::encoding},
};

/// The PEM label of a PKCS#8 private key.
pub(crate) const PKCS8_LABEL: &str = "PRIVATE KEY";

/// The PEM label of an encrypted PKCS#8 private key.
pub(crate) const ENCRYPTED_PKCS8_LABEL: &str = "ENCRYPTED PRIVATE KEY";

/// The PEM label of a PKCS#1 RSA private key.
pub(crate) const PKCS1_PRIVATE_LABEL: &str = "RSA PRIVATE KEY";

/// The PEM label of a SEC1 elliptic-curve private key.
pub(crate) const SEC1_LABEL: &str = "EC PRIVATE KEY";

/// The PEM label of a SubjectPublicKeyInfo.
pub(crate) const SPKI_LABEL: &str = "PUBLIC KEY";

/// The PEM label of a PKCS#1 RSA public key.
pub(crate) const PKCS1_PUBLIC_LABEL: &str = "RSA PUBLIC KEY";

/// The material of a key created by the software key provider.
pub(crate) enum Material {
    Secret(Zeroizing<Vec<u8>>),
    Private(PrivateMaterial),
    Public(PublicMaterial),
}

impl Material {
    /// Returns the [`KeyType`] matching the material.
    pub(crate) fn key_type(&self) -> KeyType {
        match self {
            Self::Secret(_) => KeyType::Secret,
            Self::Private(_) => KeyType::Private,
            Self::Public(_) => KeyType::Public,
        }
    }

    /// Compares the canonical encoding of `self` and `other` in constant time.
    pub(crate) fn ct_equals(&self, other: &Material) -> Result<bool, Error> {
        let equal = match (self, other) {
            (Self::Secret(key), Self::Secret(other)) => key.as_slice().ct_eq(other.as_slice()),
            (Self::Private(key), Self::Private(other)) => {
                let key = key.to_pkcs8_der()?;
                let other = other.to_pkcs8_der()?;
                key.as_slice().ct_eq(other.as_slice())
            }
            (Self::Public(key), Self::Public(other)) => {
                key.to_spki_der()?.as_slice().ct_eq(other.to_spki_der()?.as_slice())
            }
            _ => return Ok(false),
        };
        Ok(equal.into())
    }
}

/// The material of a private key.
pub(crate) enum PrivateMaterial {
    Rsa(Box<RsaPrivateKey>),
    P256(p256::SecretKey),
    P384(p384::SecretKey),
    P521(p521::SecretKey),
    Ed25519(Box<SigningKey>),
}

impl PrivateMaterial {
    /// Generates new RSA key material.
    pub(crate) fn generate_rsa(modulus_length: u32, public_exponent: u64) -> Result<Self, Error> {
        let key = RsaPrivateKey::new_with_exp(
            &mut OsRng,
            modulus_length as usize,
            &rsa::BigUint::from(public_exponent),
        )
        .map_err(encoding("generate an RSA key"))?;
        Ok(Self::Rsa(Box::new(key)))
    }

    /// Generates new elliptic-curve key material on `curve`.
    pub(crate) fn generate_ec(curve: NamedCurve) -> Self {
        match curve {
            NamedCurve::P256 => Self::P256(p256::SecretKey::random(&mut OsRng)),
            NamedCurve::P384 => Self::P384(p384::SecretKey::random(&mut OsRng)),
            NamedCurve::P521 => Self::P521(p521::SecretKey::random(&mut OsRng)),
        }
    }

    /// Generates new ed25519 key material.
    pub(crate) fn generate_ed25519() -> Self {
        Self::Ed25519(Box::new(SigningKey::generate(&mut OsRng)))
    }

    /// Returns the algorithm family of the key.
    pub(crate) fn key_type(&self) -> AsymmetricKeyType {
        match self {
            Self::Rsa(_) => AsymmetricKeyType::Rsa,
            Self::P256(_) | Self::P384(_) | Self::P521(_) => AsymmetricKeyType::Ec,
            Self::Ed25519(_) => AsymmetricKeyType::Ed25519,
        }
    }

    /// Returns the matching public key material.
    pub(crate) fn public_key(&self) -> PublicMaterial {
        match self {
            Self::Rsa(key) => PublicMaterial::Rsa(key.to_public_key()),
            Self::P256(key) => PublicMaterial::P256(key.public_key()),
            Self::P384(key) => PublicMaterial::P384(key.public_key()),
            Self::P521(key) => PublicMaterial::P521(key.public_key()),
            Self::Ed25519(key) => PublicMaterial::Ed25519(key.verifying_key()),
        }
    }

    /// Returns the algorithm specific parameters of the key.
    pub(crate) fn details(&self) -> AsymmetricKeyDetails {
        self.public_key().details()
    }

    /// Returns the key as PKCS#8 DER document.
    pub(crate) fn to_pkcs8_der(&self) -> Result<Zeroizing<Vec<u8>>, Error> {
        let document = match self {
            Self::Rsa(key) => key.to_pkcs8_der(),
            Self::P256(key) => key.to_pkcs8_der(),
            Self::P384(key) => key.to_pkcs8_der(),
            Self::P521(key) => key.to_pkcs8_der(),
            Self::Ed25519(key) => key.to_pkcs8_der(),
        }
        .map_err(encoding("encode a private key as PKCS#8"))?;
        Ok(document.to_bytes())
    }

    /// Returns the key as PKCS#8 DER document, encrypted with `passphrase`.
    ///
    /// The document is encrypted using PBES2 with scrypt and AES-256-CBC.
    pub(crate) fn to_encrypted_pkcs8_der(
        &self,
        passphrase: &Passphrase,
    ) -> Result<Zeroizing<Vec<u8>>, Error> {
        let der = self.to_pkcs8_der()?;
        let document = PrivateKeyInfo::try_from(der.as_slice())
            .map_err(encoding("decode a PKCS#8 private key"))?
            .encrypt(OsRng, passphrase.expose_borrowed())
            .map_err(encoding("encrypt a PKCS#8 private key"))?;
        Ok(document.to_bytes())
    }

    /// Returns the key as DER document of `encoding_type` and the PEM label matching it.
    pub(crate) fn to_der(
        &self,
        encoding_type: KeyEncodingType,
    ) -> Result<(&'static str, Zeroizing<Vec<u8>>), Error> {
        match (encoding_type, self) {
            (KeyEncodingType::Pkcs8, _) => Ok((PKCS8_LABEL, self.to_pkcs8_der()?)),
            (KeyEncodingType::Pkcs1, Self::Rsa(key)) => {
                let document = key
                    .to_pkcs1_der()
                    .map_err(encoding("encode an RSA private key as PKCS#1"))?;
                Ok((PKCS1_PRIVATE_LABEL, document.to_bytes()))
            }
            (KeyEncodingType::Sec1, Self::P256(key)) => Ok((
                SEC1_LABEL,
                key.to_sec1_der().map_err(encoding("encode a P-256 key as SEC1"))?,
            )),
            (KeyEncodingType::Sec1, Self::P384(key)) => Ok((
                SEC1_LABEL,
                key.to_sec1_der().map_err(encoding("encode a P-384 key as SEC1"))?,
            )),
            (KeyEncodingType::Sec1, Self::P521(key)) => Ok((
                SEC1_LABEL,
                key.to_sec1_der().map_err(encoding("encode a P-521 key as SEC1"))?,
            )),
            (encoding_type, _) => Err(Error::UnsupportedEncodingType {
                key_type: KeyType::Private,
                algorithm: self.key_type(),
                encoding_type,
            }),
        }
    }

    /// Decodes a PKCS#8 DER document of any supported algorithm.
    pub(crate) fn from_pkcs8_der(der: &[u8]) -> Result<Self, Error> {
        RsaPrivateKey::from_pkcs8_der(der)
            .map(|key| Self::Rsa(Box::new(key)))
            .or_else(|_| p256::SecretKey::from_pkcs8_der(der).map(Self::P256))
            .or_else(|_| p384::SecretKey::from_pkcs8_der(der).map(Self::P384))
            .or_else(|_| p521::SecretKey::from_pkcs8_der(der).map(Self::P521))
            .or_else(|_| SigningKey::from_pkcs8_der(der).map(|key| Self::Ed25519(Box::new(key))))
            .map_err(encoding("decode a PKCS#8 private key"))
    }

    /// Decrypts and decodes an encrypted PKCS#8 DER document.
    pub(crate) fn from_encrypted_pkcs8_der(
        der: &[u8],
        passphrase: &Passphrase,
    ) -> Result<Self, Error> {
        let document = EncryptedPrivateKeyInfo::try_from(der)
            .map_err(encoding("decode an encrypted PKCS#8 private key"))?
            .decrypt(passphrase.expose_borrowed())
            .map_err(encoding("decrypt a PKCS#8 private key"))?;
        Self::from_pkcs8_der(document.as_bytes())
    }

    /// Decodes a PKCS#1 RSA private key DER document.
    pub(crate) fn from_pkcs1_der(der: &[u8]) -> Result<Self, Error> {
        let key = RsaPrivateKey::from_pkcs1_der(der)
            .map_err(encoding("decode a PKCS#1 RSA private key"))?;
        Ok(Self::Rsa(Box::new(key)))
    }

    /// Decodes a SEC1 elliptic-curve private key DER document.
    pub(crate) fn from_sec1_der(der: &[u8]) -> Result<Self, Error> {
        p256::SecretKey::from_sec1_der(der)
            .map(Self::P256)
            .or_else(|_| p384::SecretKey::from_sec1_der(der).map(Self::P384))
            .or_else(|_| p521::SecretKey::from_sec1_der(der).map(Self::P521))
            .map_err(encoding("decode a SEC1 private key"))
    }
}

/// The material of a public key.
pub(crate) enum PublicMaterial {
    Rsa(RsaPublicKey),
    P256(p256::PublicKey),
    P384(p384::PublicKey),
    P521(p521::PublicKey),
    Ed25519(VerifyingKey),
}

impl PublicMaterial {
    /// Returns the algorithm family of the key.
    pub(crate) fn key_type(&self) -> AsymmetricKeyType {
        match self {
            Self::Rsa(_) => AsymmetricKeyType::Rsa,
            Self::P256(_) | Self::P384(_) | Self::P521(_) => AsymmetricKeyType::Ec,
            Self::Ed25519(_) => AsymmetricKeyType::Ed25519,
        }
    }

    /// Returns the curve of an elliptic-curve key.
    pub(crate) fn named_curve(&self) -> Option<NamedCurve> {
        match self {
            Self::P256(_) => Some(NamedCurve::P256),
            Self::P384(_) => Some(NamedCurve::P384),
            Self::P521(_) => Some(NamedCurve::P521),
            Self::Rsa(_) | Self::Ed25519(_) => None,
        }
    }

    /// Returns the size of the modulus of an RSA key in bits.
    pub(crate) fn modulus_length(&self) -> Option<u32> {
        match self {
            Self::Rsa(key) => Some(u32::try_from(key.n().bits()).unwrap_or(u32::MAX)),
            _ => None,
        }
    }

    /// Returns the algorithm specific parameters of the key.
    pub(crate) fn details(&self) -> AsymmetricKeyDetails {
        let public_exponent = match self {
            Self::Rsa(key) => {
                let exponent = key.e().to_bytes_be();
                // unset if the exponent does not fit into 64 bits
                (exponent.len() <= 8).then(|| {
                    exponent
                        .iter()
                        .fold(0u64, |exponent, byte| (exponent << 8) | u64::from(*byte))
                })
            }
            _ => None,
        };
        AsymmetricKeyDetails {
            modulus_length: self.modulus_length(),
            public_exponent,
            named_curve: self.named_curve(),
        }
    }

    /// Returns the key as X.509 SubjectPublicKeyInfo DER document.
    pub(crate) fn to_spki_der(&self) -> Result<Vec<u8>, Error> {
        let document = match self {
            Self::Rsa(key) => key.to_public_key_der(),
            Self::P256(key) => key.to_public_key_der(),
            Self::P384(key) => key.to_public_key_der(),
            Self::P521(key) => key.to_public_key_der(),
            Self::Ed25519(key) => key.to_public_key_der(),
        }
        .map_err(encoding("encode a public key as SubjectPublicKeyInfo"))?;
        Ok(document.into_vec())
    }

    /// Returns the key as DER document of `encoding_type` and the PEM label matching it.
    pub(crate) fn to_der(
        &self,
        encoding_type: KeyEncodingType,
    ) -> Result<(&'static str, Vec<u8>), Error> {
        match (encoding_type, self) {
            (KeyEncodingType::Spki, _) => Ok((SPKI_LABEL, self.to_spki_der()?)),
            (KeyEncodingType::Pkcs1, Self::Rsa(key)) => {
                let document = key
                    .to_pkcs1_der()
                    .map_err(encoding("encode an RSA public key as PKCS#1"))?;
                Ok((PKCS1_PUBLIC_LABEL, document.into_vec()))
            }
            (encoding_type, _) => Err(Error::UnsupportedEncodingType {
                key_type: KeyType::Public,
                algorithm: self.key_type(),
                encoding_type,
            }),
        }
    }

    /// Decodes an X.509 SubjectPublicKeyInfo DER document of any supported algorithm.
    pub(crate) fn from_spki_der(der: &[u8]) -> Result<Self, Error> {
        RsaPublicKey::from_public_key_der(der)
            .map(Self::Rsa)
            .or_else(|_| p256::PublicKey::from_public_key_der(der).map(Self::P256))
            .or_else(|_| p384::PublicKey::from_public_key_der(der).map(Self::P384))
            .or_else(|_| p521::PublicKey::from_public_key_der(der).map(Self::P521))
            .or_else(|_| VerifyingKey::from_public_key_der(der).map(Self::Ed25519))
            .map_err(encoding("decode a SubjectPublicKeyInfo"))
    }

    /// Decodes a PKCS#1 RSA public key DER document.
    pub(crate) fn from_pkcs1_der(der: &[u8]) -> Result<Self, Error> {
        RsaPublicKey::from_pkcs1_der(der)
            .map(Self::Rsa)
            .map_err(encoding("decode a PKCS#1 RSA public key"))
    }
}
