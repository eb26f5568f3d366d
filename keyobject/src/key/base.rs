//! Discriminants and descriptive records for keys.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

/// The type of a key.
///
/// Every [`CryptoKey`][`crate::provider::CryptoKey`] carries exactly one of these discriminants
/// and every [`KeyObject`][`crate::key::KeyObject`] variant corresponds to exactly one of them.
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
pub enum KeyType {
    /// A symmetric key
    Secret,

    /// The public part of an asymmetric key pair
    Public,

    /// The private part of an asymmetric key pair
    Private,
}

/// The algorithm family of a secret key that can be generated.
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
pub enum SecretKeyAlgorithm {
    /// A key for use with a Hash-based Message Authentication Code (HMAC)
    #[default]
    Hmac,

    /// A key for use with the Advanced Encryption Standard (AES)
    Aes,
}

/// The algorithm family of an asymmetric key.
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
pub enum AsymmetricKeyType {
    /// An RSA key
    #[default]
    Rsa,

    /// An elliptic-curve key over one of the [`NamedCurve`]s
    Ec,

    /// An Edwards-curve key over Curve25519
    Ed25519,
}

/// A named elliptic curve.
///
/// The canonical string representation follows the names used by OpenSSL, while the names used
/// by NIST and JSON Web Keys are accepted when parsing.
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
#[strum(ascii_case_insensitive)]
pub enum NamedCurve {
    /// The elliptic curve over a prime field for a prime of size 256 bit
    #[serde(rename = "prime256v1", alias = "P-256", alias = "secp256r1")]
    #[strum(to_string = "prime256v1", serialize = "P-256", serialize = "secp256r1")]
    P256,

    /// The elliptic curve over a prime field for a prime of size 384 bit
    #[serde(rename = "secp384r1", alias = "P-384")]
    #[strum(to_string = "secp384r1", serialize = "P-384")]
    P384,

    /// The elliptic curve over a prime field for a prime of size 521 bit
    #[serde(rename = "secp521r1", alias = "P-521")]
    #[strum(to_string = "secp521r1", serialize = "P-521")]
    P521,
}

impl NamedCurve {
    /// Returns the curve name used in the `crv` member of a JSON Web Key.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyobject::key::NamedCurve;
    ///
    /// assert_eq!(NamedCurve::P384.jwk_name(), "P-384");
    /// ```
    pub fn jwk_name(&self) -> &'static str {
        match self {
            Self::P256 => "P-256",
            Self::P384 => "P-384",
            Self::P521 => "P-521",
        }
    }
}

/// Algorithm specific parameters of an asymmetric key.
///
/// Only the members that apply to the algorithm of a key are set.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AsymmetricKeyDetails {
    /// The size of the modulus of an RSA key in bits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modulus_length: Option<u32>,

    /// The public exponent of an RSA key.
    ///
    /// Unset for exponents that do not fit into 64 bits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_exponent: Option<u64>,

    /// The curve of an elliptic-curve key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub named_curve: Option<NamedCurve>,
}
