//! Key objects and the types describing, creating and exporting keys.

mod base;
mod export;
mod object;
mod options;

pub use base::{AsymmetricKeyDetails, AsymmetricKeyType, KeyType, NamedCurve, SecretKeyAlgorithm};
pub use export::{JsonWebKey, KeyExport};
pub use object::{KeyObject, PrivateKeyObject, PublicKeyObject, SecretKeyObject};
pub use options::{
    AsymmetricKeyFormat,
    CreatePrivateKeyOptions,
    CreatePublicKeyOptions,
    ExportOptions,
    GenerateKeyOptions,
    GenerateKeyPairOptions,
    KeyCipher,
    KeyData,
    KeyEncodingType,
    KeyFormat,
    PrivateKeyEncodingType,
    PrivateKeyExportOptions,
    PublicKeyEncodingType,
    PublicKeyExportOptions,
    SecretKeyExportOptions,
    SecretKeyFormat,
    StringEncoding,
};
