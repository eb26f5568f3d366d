//! Conversion between key material and JSON Web Keys.

use std::str::FromStr;

use base64ct::{Base64UrlUnpadded, Encoding};
use ed25519_dalek::{SigningKey, VerifyingKey};
use rsa::{
    BigUint,
    RsaPrivateKey,
    RsaPublicKey,
    traits::{PrivateKeyParts, PublicKeyParts},
};
use zeroize::Zeroizing;

use crate::{
    key::{JsonWebKey, KeyType, NamedCurve},
    provider::{
        Error,
        software::{
            encoding,
            material::{PrivateMaterial, PublicMaterial},
        },
    },
};

const KTY_OCT: &str = "oct";
const KTY_RSA: &str = "RSA";
const KTY_EC: &str = "EC";
const KTY_OKP: &str = "OKP";
const CRV_ED25519: &str = "Ed25519";

fn encode(bytes: &[u8]) -> String {
    Base64UrlUnpadded::encode_string(bytes)
}

fn encode_uint(value: &BigUint) -> String {
    encode(&value.to_bytes_be())
}

/// Returns the decoded value of a required JWK member.
fn decode(value: Option<&String>, member: &'static str) -> Result<Zeroizing<Vec<u8>>, Error> {
    let value = value.ok_or(Error::JwkMemberMissing { member })?;
    Base64UrlUnpadded::decode_vec(value)
        .map(Zeroizing::new)
        .map_err(encoding("decode a JSON Web Key member"))
}

fn decode_uint(value: Option<&String>, member: &'static str) -> Result<BigUint, Error> {
    Ok(BigUint::from_bytes_be(&decode(value, member)?))
}

/// Returns an ed25519 key decoded from a JWK member.
fn decode_ed25519(value: Option<&String>, member: &'static str) -> Result<[u8; 32], Error> {
    let bytes = decode(value, member)?;
    <[u8; 32]>::try_from(bytes.as_slice()).map_err(encoding("read an ed25519 key"))
}

/// Converts a JSON Web Key produced by the `elliptic-curve` crate.
fn from_ec_string(jwk: &str) -> Result<JsonWebKey, Error> {
    serde_json::from_str(jwk).map_err(encoding("read an elliptic-curve JSON Web Key"))
}

/// Converts a JSON Web Key into the form understood by the `elliptic-curve` crate.
fn to_ec_string(jwk: &JsonWebKey) -> Result<Zeroizing<String>, Error> {
    serde_json::to_string(jwk)
        .map(Zeroizing::new)
        .map_err(encoding("write an elliptic-curve JSON Web Key"))
}

/// Returns the curve named in the `crv` member of an `EC` JSON Web Key.
///
/// Only the curve names registered for JSON Web Keys are accepted.
fn ec_curve(jwk: &JsonWebKey) -> Result<NamedCurve, Error> {
    jwk.crv
        .as_deref()
        .and_then(|crv| {
            NamedCurve::from_str(crv)
                .ok()
                .filter(|curve| curve.jwk_name() == crv)
        })
        .ok_or_else(|| Error::UnsupportedJwk {
            kty: format!("{KTY_EC} ({})", jwk.crv.as_deref().unwrap_or("no curve")),
        })
}

fn ensure_kty(jwk: &JsonWebKey, kty: &str) -> Result<(), Error> {
    if jwk.kty != kty {
        return Err(Error::UnsupportedJwk {
            kty: jwk.kty.clone(),
        });
    }
    Ok(())
}

/// Returns a secret key as JSON Web Key of type `oct`.
pub(crate) fn secret_to_jwk(key: &[u8]) -> JsonWebKey {
    JsonWebKey {
        kty: KTY_OCT.to_string(),
        k: Some(encode(key)),
        ..Default::default()
    }
}

/// Returns the key material of a JSON Web Key of type `oct`.
pub(crate) fn secret_from_jwk(jwk: &JsonWebKey) -> Result<Zeroizing<Vec<u8>>, Error> {
    ensure_kty(jwk, KTY_OCT)?;
    decode(jwk.k.as_ref(), "k")
}

/// Returns a private key as JSON Web Key.
pub(crate) fn private_to_jwk(key: &PrivateMaterial) -> Result<JsonWebKey, Error> {
    match key {
        PrivateMaterial::Rsa(key) => {
            let [p, q] = key.primes() else {
                return Err(Error::UnsupportedOperation {
                    operation: "export of multi-prime RSA keys as JSON Web Key",
                    key_type: KeyType::Private,
                });
            };
            Ok(JsonWebKey {
                kty: KTY_RSA.to_string(),
                n: Some(encode_uint(key.n())),
                e: Some(encode_uint(key.e())),
                d: Some(encode_uint(key.d())),
                p: Some(encode_uint(p)),
                q: Some(encode_uint(q)),
                dp: key.dp().map(encode_uint),
                dq: key.dq().map(encode_uint),
                qi: key.crt_coefficient().as_ref().map(encode_uint),
                ..Default::default()
            })
        }
        PrivateMaterial::P256(key) => from_ec_string(&key.to_jwk_string()),
        PrivateMaterial::P384(key) => from_ec_string(&key.to_jwk_string()),
        PrivateMaterial::P521(key) => from_ec_string(&key.to_jwk_string()),
        PrivateMaterial::Ed25519(key) => Ok(JsonWebKey {
            kty: KTY_OKP.to_string(),
            crv: Some(CRV_ED25519.to_string()),
            x: Some(encode(key.verifying_key().as_bytes())),
            d: Some(encode(key.as_bytes())),
            ..Default::default()
        }),
    }
}

/// Returns a public key as JSON Web Key.
pub(crate) fn public_to_jwk(key: &PublicMaterial) -> Result<JsonWebKey, Error> {
    match key {
        PublicMaterial::Rsa(key) => Ok(JsonWebKey {
            kty: KTY_RSA.to_string(),
            n: Some(encode_uint(key.n())),
            e: Some(encode_uint(key.e())),
            ..Default::default()
        }),
        PublicMaterial::P256(key) => from_ec_string(&key.to_jwk_string()),
        PublicMaterial::P384(key) => from_ec_string(&key.to_jwk_string()),
        PublicMaterial::P521(key) => from_ec_string(&key.to_jwk_string()),
        PublicMaterial::Ed25519(key) => Ok(JsonWebKey {
            kty: KTY_OKP.to_string(),
            crv: Some(CRV_ED25519.to_string()),
            x: Some(encode(key.as_bytes())),
            ..Default::default()
        }),
    }
}

/// Returns the private key material of a JSON Web Key.
///
/// # Errors
///
/// Returns an error if the JSON Web Key only contains a public key.
pub(crate) fn private_from_jwk(jwk: &JsonWebKey) -> Result<PrivateMaterial, Error> {
    if jwk.d.is_none() {
        return Err(Error::PrivateKeyRequired);
    }
    match jwk.kty.as_str() {
        KTY_RSA => {
            let key = RsaPrivateKey::from_components(
                decode_uint(jwk.n.as_ref(), "n")?,
                decode_uint(jwk.e.as_ref(), "e")?,
                decode_uint(jwk.d.as_ref(), "d")?,
                vec![
                    decode_uint(jwk.p.as_ref(), "p")?,
                    decode_uint(jwk.q.as_ref(), "q")?,
                ],
            )
            .map_err(encoding("read an RSA JSON Web Key"))?;
            Ok(PrivateMaterial::Rsa(Box::new(key)))
        }
        KTY_EC => {
            let curve = ec_curve(jwk)?;
            let jwk_string = to_ec_string(jwk)?;
            match curve {
                NamedCurve::P256 => {
                    p256::SecretKey::from_jwk_str(&jwk_string).map(PrivateMaterial::P256)
                }
                NamedCurve::P384 => {
                    p384::SecretKey::from_jwk_str(&jwk_string).map(PrivateMaterial::P384)
                }
                NamedCurve::P521 => {
                    p521::SecretKey::from_jwk_str(&jwk_string).map(PrivateMaterial::P521)
                }
            }
            .map_err(encoding("read an elliptic-curve JSON Web Key"))
        }
        KTY_OKP if jwk.crv.as_deref() == Some(CRV_ED25519) => {
            let key = SigningKey::from_bytes(&decode_ed25519(jwk.d.as_ref(), "d")?);
            Ok(PrivateMaterial::Ed25519(Box::new(key)))
        }
        _ => Err(Error::UnsupportedJwk {
            kty: jwk.kty.clone(),
        }),
    }
}

/// Returns the public key material of a JSON Web Key.
///
/// The public key is derived if the JSON Web Key contains a private key.
pub(crate) fn public_from_jwk(jwk: &JsonWebKey) -> Result<PublicMaterial, Error> {
    if jwk.d.is_some() {
        return Ok(private_from_jwk(jwk)?.public_key());
    }
    match jwk.kty.as_str() {
        KTY_RSA => {
            let key = RsaPublicKey::new(
                decode_uint(jwk.n.as_ref(), "n")?,
                decode_uint(jwk.e.as_ref(), "e")?,
            )
            .map_err(encoding("read an RSA JSON Web Key"))?;
            Ok(PublicMaterial::Rsa(key))
        }
        KTY_EC => {
            let curve = ec_curve(jwk)?;
            let jwk_string = to_ec_string(jwk)?;
            match curve {
                NamedCurve::P256 => {
                    p256::PublicKey::from_jwk_str(&jwk_string).map(PublicMaterial::P256)
                }
                NamedCurve::P384 => {
                    p384::PublicKey::from_jwk_str(&jwk_string).map(PublicMaterial::P384)
                }
                NamedCurve::P521 => {
                    p521::PublicKey::from_jwk_str(&jwk_string).map(PublicMaterial::P521)
                }
            }
            .map_err(encoding("read an elliptic-curve JSON Web Key"))
        }
        KTY_OKP if jwk.crv.as_deref() == Some(CRV_ED25519) => {
            VerifyingKey::from_bytes(&decode_ed25519(jwk.x.as_ref(), "x")?)
                .map(PublicMaterial::Ed25519)
                .map_err(encoding("read an ed25519 JSON Web Key"))
        }
        _ => Err(Error::UnsupportedJwk {
            kty: jwk.kty.clone(),
        }),
    }
}
