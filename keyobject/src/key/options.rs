//! Options for creating, generating and exporting keys.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

use crate::{
    key::{JsonWebKey, NamedCurve},
    passphrase::Passphrase,
};

/// The format of an exported or imported key
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    strum::Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum KeyFormat {
    /// Privacy-Enhanced Mail (PEM) format.
    Pem,

    /// ASN.1 DER binary format.
    Der,

    /// JSON Web Key (JWK) format.
    Jwk,

    /// The raw bytes of a secret key.
    Buffer,
}

/// The structure in which an asymmetric key is encoded
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    strum::Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum KeyEncodingType {
    /// An RSA key structure following PKCS#1 (RFC 8017)
    Pkcs1,

    /// A private key structure following PKCS#8 (RFC 5208)
    Pkcs8,

    /// A public key structure following X.509 SubjectPublicKeyInfo (RFC 5280)
    Spki,

    /// An elliptic-curve private key structure following SEC1 (RFC 5915)
    Sec1,
}

/// The cipher used for encrypting an exported private key
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    strum::Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[strum(ascii_case_insensitive)]
pub enum KeyCipher {
    /// PBES2 encryption using AES-256 in Cipher Block Chaining (CBC) mode
    #[default]
    #[serde(rename = "aes-256-cbc")]
    #[strum(to_string = "aes-256-cbc")]
    Aes256Cbc,
}

/// The encoding of key material provided as text
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    strum::Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum StringEncoding {
    /// The UTF-8 bytes of the text
    #[default]
    Utf8,

    /// One byte per character, using the lower eight bits of each code point
    Latin1,

    /// Hexadecimal encoding
    Hex,

    /// Base64 encoding
    ///
    /// Decoding accepts the standard and the URL-safe alphabet, with or without padding, and
    /// ignores whitespace.
    Base64,

    /// URL-safe base64 encoding without padding
    ///
    /// Decoding is as lenient as for [`StringEncoding::Base64`].
    Base64Url,
}

/// Options for exporting a key of any type.
///
/// Unset members are chosen by the key provider.
/// The variant specific option types ([`SecretKeyExportOptions`], [`PublicKeyExportOptions`] and
/// [`PrivateKeyExportOptions`]) narrow the accepted combinations and convert into this type.
#[derive(Clone, Debug, Default)]
pub struct ExportOptions {
    /// The output format.
    pub format: Option<KeyFormat>,

    /// The structure in which an asymmetric key is encoded.
    pub encoding_type: Option<KeyEncodingType>,

    /// The cipher for encrypting a private key.
    pub cipher: Option<KeyCipher>,

    /// The passphrase for encrypting a private key.
    pub passphrase: Option<Passphrase>,
}

/// The format of an exported secret key
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    strum::Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum SecretKeyFormat {
    /// The raw bytes of the key
    #[default]
    Buffer,

    /// JSON Web Key (JWK) format
    Jwk,
}

impl From<SecretKeyFormat> for KeyFormat {
    fn from(value: SecretKeyFormat) -> Self {
        match value {
            SecretKeyFormat::Buffer => Self::Buffer,
            SecretKeyFormat::Jwk => Self::Jwk,
        }
    }
}

/// The format of an exported or imported asymmetric key
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    strum::Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum AsymmetricKeyFormat {
    /// Privacy-Enhanced Mail (PEM) format.
    #[default]
    Pem,

    /// ASN.1 DER binary format.
    Der,

    /// JSON Web Key (JWK) format.
    Jwk,
}

impl From<AsymmetricKeyFormat> for KeyFormat {
    fn from(value: AsymmetricKeyFormat) -> Self {
        match value {
            AsymmetricKeyFormat::Pem => Self::Pem,
            AsymmetricKeyFormat::Der => Self::Der,
            AsymmetricKeyFormat::Jwk => Self::Jwk,
        }
    }
}

/// The structure in which a public key is encoded
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    strum::Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum PublicKeyEncodingType {
    /// An RSA public key structure following PKCS#1
    Pkcs1,

    /// An X.509 SubjectPublicKeyInfo structure
    #[default]
    Spki,
}

impl From<PublicKeyEncodingType> for KeyEncodingType {
    fn from(value: PublicKeyEncodingType) -> Self {
        match value {
            PublicKeyEncodingType::Pkcs1 => Self::Pkcs1,
            PublicKeyEncodingType::Spki => Self::Spki,
        }
    }
}

/// The structure in which a private key is encoded
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    strum::Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum PrivateKeyEncodingType {
    /// An RSA private key structure following PKCS#1
    Pkcs1,

    /// A PKCS#8 private key structure
    #[default]
    Pkcs8,

    /// An elliptic-curve private key structure following SEC1
    Sec1,
}

impl From<PrivateKeyEncodingType> for KeyEncodingType {
    fn from(value: PrivateKeyEncodingType) -> Self {
        match value {
            PrivateKeyEncodingType::Pkcs1 => Self::Pkcs1,
            PrivateKeyEncodingType::Pkcs8 => Self::Pkcs8,
            PrivateKeyEncodingType::Sec1 => Self::Sec1,
        }
    }
}

/// Options for exporting a [`SecretKeyObject`][`crate::key::SecretKeyObject`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SecretKeyExportOptions {
    /// The output format.
    pub format: SecretKeyFormat,
}

impl From<SecretKeyExportOptions> for ExportOptions {
    fn from(value: SecretKeyExportOptions) -> Self {
        Self {
            format: Some(value.format.into()),
            ..Default::default()
        }
    }
}

/// Options for exporting a [`PublicKeyObject`][`crate::key::PublicKeyObject`].
#[derive(Clone, Copy, Debug, Default)]
pub struct PublicKeyExportOptions {
    /// The output format.
    pub format: AsymmetricKeyFormat,

    /// The structure of a PEM or DER document.
    ///
    /// Ignored for [`AsymmetricKeyFormat::Jwk`].
    pub encoding_type: Option<PublicKeyEncodingType>,
}

impl From<PublicKeyExportOptions> for ExportOptions {
    fn from(value: PublicKeyExportOptions) -> Self {
        Self {
            format: Some(value.format.into()),
            encoding_type: value.encoding_type.map(Into::into),
            ..Default::default()
        }
    }
}

/// Options for exporting a [`PrivateKeyObject`][`crate::key::PrivateKeyObject`].
#[derive(Clone, Debug, Default)]
pub struct PrivateKeyExportOptions {
    /// The output format.
    pub format: AsymmetricKeyFormat,

    /// The structure of a PEM or DER document.
    ///
    /// Ignored for [`AsymmetricKeyFormat::Jwk`].
    pub encoding_type: Option<PrivateKeyEncodingType>,

    /// The cipher for encrypting the exported key.
    ///
    /// Requires [`PrivateKeyEncodingType::Pkcs8`] and a [`Passphrase`].
    pub cipher: Option<KeyCipher>,

    /// The passphrase for encrypting the exported key.
    pub passphrase: Option<Passphrase>,
}

impl From<PrivateKeyExportOptions> for ExportOptions {
    fn from(value: PrivateKeyExportOptions) -> Self {
        Self {
            format: Some(value.format.into()),
            encoding_type: value.encoding_type.map(Into::into),
            cipher: value.cipher,
            passphrase: value.passphrase,
        }
    }
}

/// Key material handed to a key provider.
#[derive(Clone, Eq, PartialEq)]
pub enum KeyData {
    /// Text, such as a PEM document or an encoded secret
    Text(String),

    /// Raw bytes, such as a DER document or a secret
    Bytes(Vec<u8>),

    /// A JSON Web Key
    Jwk(JsonWebKey),
}

impl Debug for KeyData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const REDACTED: &&str = &"[REDACTED]";
        match self {
            Self::Text(_) => f.debug_tuple("Text").field(REDACTED).finish(),
            Self::Bytes(_) => f.debug_tuple("Bytes").field(REDACTED).finish(),
            Self::Jwk(jwk) => f.debug_tuple("Jwk").field(jwk).finish(),
        }
    }
}

impl From<&str> for KeyData {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for KeyData {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&[u8]> for KeyData {
    fn from(value: &[u8]) -> Self {
        Self::Bytes(value.to_vec())
    }
}

impl From<Vec<u8>> for KeyData {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<JsonWebKey> for KeyData {
    fn from(value: JsonWebKey) -> Self {
        Self::Jwk(value)
    }
}

/// Options for creating a private key from existing key material.
///
/// Raw key material converts into this type with all other members unset, in which case text
/// and bytes are treated as a PEM document.
#[derive(Clone, Debug)]
pub struct CreatePrivateKeyOptions {
    /// The key material.
    pub key: KeyData,

    /// The format of `key`.
    ///
    /// Defaults to [`AsymmetricKeyFormat::Jwk`] for [`KeyData::Jwk`] and to
    /// [`AsymmetricKeyFormat::Pem`] otherwise.
    pub format: Option<AsymmetricKeyFormat>,

    /// The structure of a DER document.
    ///
    /// Required for [`AsymmetricKeyFormat::Der`], ignored otherwise.
    pub encoding_type: Option<PrivateKeyEncodingType>,

    /// The passphrase for decrypting an encrypted PKCS#8 document.
    pub passphrase: Option<Passphrase>,

    /// The encoding of a DER document provided as text.
    pub encoding: Option<StringEncoding>,
}

/// Options for creating a public key from existing key material.
///
/// Raw key material converts into this type with all other members unset, in which case text
/// and bytes are treated as a PEM document.
/// Private key material is accepted as well, in which case the public key is derived from it.
#[derive(Clone, Debug)]
pub struct CreatePublicKeyOptions {
    /// The key material.
    pub key: KeyData,

    /// The format of `key`.
    ///
    /// Defaults to [`AsymmetricKeyFormat::Jwk`] for [`KeyData::Jwk`] and to
    /// [`AsymmetricKeyFormat::Pem`] otherwise.
    pub format: Option<AsymmetricKeyFormat>,

    /// The structure of a DER document.
    ///
    /// Required for [`AsymmetricKeyFormat::Der`], ignored otherwise.
    pub encoding_type: Option<KeyEncodingType>,

    /// The passphrase for decrypting an encrypted PKCS#8 document.
    pub passphrase: Option<Passphrase>,

    /// The encoding of a DER document provided as text.
    pub encoding: Option<StringEncoding>,
}

/// Implements [`From`] for raw key material on a create options type.
macro_rules! impl_from_key_data {
    ($options:ty, $($source:ty),+) => {
        $(
            impl From<$source> for $options {
                fn from(value: $source) -> Self {
                    Self {
                        key: value.into(),
                        format: None,
                        encoding_type: None,
                        passphrase: None,
                        encoding: None,
                    }
                }
            }
        )+
    };
}

impl_from_key_data!(
    CreatePrivateKeyOptions,
    KeyData,
    JsonWebKey,
    &str,
    String,
    &[u8],
    Vec<u8>
);
impl_from_key_data!(
    CreatePublicKeyOptions,
    KeyData,
    JsonWebKey,
    &str,
    String,
    &[u8],
    Vec<u8>
);

/// Options for generating a secret key.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct GenerateKeyOptions {
    /// The length of the key in bits.
    pub length: u32,
}

/// Options for generating an asymmetric key pair.
///
/// Only the members that apply to the requested
/// [`AsymmetricKeyType`][`crate::key::AsymmetricKeyType`] are considered.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateKeyPairOptions {
    /// The size of the modulus of an RSA key in bits.
    pub modulus_length: Option<u32>,

    /// The public exponent of an RSA key.
    pub public_exponent: Option<u64>,

    /// The curve of an elliptic-curve key.
    pub named_curve: Option<NamedCurve>,
}
