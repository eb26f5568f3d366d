//! Exported representations of keys.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

/// The result of exporting a key.
///
/// Which variant is returned depends on the requested format: PEM documents are text, DER
/// documents and raw secret keys are bytes and JSON Web Keys are structured records.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum KeyExport {
    /// A Privacy-Enhanced Mail (PEM) document
    Pem(String),

    /// An ASN.1 DER document or the raw bytes of a secret key
    Bytes(Vec<u8>),

    /// A JSON Web Key (JWK)
    Jwk(JsonWebKey),
}

impl KeyExport {
    /// Returns the PEM document, if this is a [`KeyExport::Pem`].
    pub fn as_pem(&self) -> Option<&str> {
        match self {
            Self::Pem(pem) => Some(pem),
            _ => None,
        }
    }

    /// Returns the bytes, if this is a [`KeyExport::Bytes`].
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Returns the JSON Web Key, if this is a [`KeyExport::Jwk`].
    pub fn as_jwk(&self) -> Option<&JsonWebKey> {
        match self {
            Self::Jwk(jwk) => Some(jwk),
            _ => None,
        }
    }

    /// Returns the export as a byte vector suitable for writing to a file.
    ///
    /// PEM documents are returned as their UTF-8 bytes and JSON Web Keys as their JSON
    /// serialization.
    ///
    /// # Errors
    ///
    /// Returns an error if a JSON Web Key can not be serialized.
    pub fn into_bytes(self) -> Result<Vec<u8>, serde_json::Error> {
        Ok(match self {
            Self::Pem(pem) => pem.into_bytes(),
            Self::Bytes(bytes) => bytes,
            Self::Jwk(jwk) => serde_json::to_vec_pretty(&jwk)?,
        })
    }
}

/// A JSON Web Key (JWK) as defined in [RFC 7517].
///
/// All binary members are base64url encoded without padding.
/// Only the members that apply to the key type (`kty`) are set.
///
/// [RFC 7517]: https://www.rfc-editor.org/rfc/rfc7517
#[derive(Clone, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct JsonWebKey {
    /// The key type (`oct`, `RSA`, `EC` or `OKP`).
    pub kty: String,

    /// The curve of an `EC` or `OKP` key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crv: Option<String>,

    /// The x coordinate of an `EC` key or the public key of an `OKP` key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,

    /// The y coordinate of an `EC` key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,

    /// The modulus of an `RSA` key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<String>,

    /// The public exponent of an `RSA` key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub e: Option<String>,

    /// The private exponent of an `RSA` key or the private scalar of an `EC` or `OKP` key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub d: Option<String>,

    /// The first prime factor of an `RSA` key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p: Option<String>,

    /// The second prime factor of an `RSA` key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,

    /// The first factor CRT exponent of an `RSA` key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dp: Option<String>,

    /// The second factor CRT exponent of an `RSA` key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dq: Option<String>,

    /// The first CRT coefficient of an `RSA` key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qi: Option<String>,

    /// The key value of an `oct` key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k: Option<String>,
}

impl JsonWebKey {
    /// Returns whether the JSON Web Key contains private key material.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyobject::key::JsonWebKey;
    ///
    /// let public = JsonWebKey {
    ///     kty: "OKP".to_string(),
    ///     crv: Some("Ed25519".to_string()),
    ///     x: Some("11qYAYKxCrfVS_7TyWQHOg7hcvPapiMlrwIaaPcHURo".to_string()),
    ///     ..Default::default()
    /// };
    /// assert!(!public.is_private());
    /// ```
    pub fn is_private(&self) -> bool {
        self.d.is_some() || self.k.is_some()
    }
}

impl Debug for JsonWebKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const REDACTED: &&str = &"[REDACTED]";
        let redact = |member: &Option<String>| member.as_ref().map(|_| REDACTED);
        f.debug_struct("JsonWebKey")
            .field("kty", &self.kty)
            .field("crv", &self.crv)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("n", &self.n)
            .field("e", &self.e)
            .field("d", &redact(&self.d))
            .field("p", &redact(&self.p))
            .field("q", &redact(&self.q))
            .field("dp", &redact(&self.dp))
            .field("dq", &redact(&self.dq))
            .field("qi", &redact(&self.qi))
            .field("k", &redact(&self.k))
            .finish()
    }
}
