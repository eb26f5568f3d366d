//! Errors raised by key providers.

use crate::key::{
    AsymmetricKeyType,
    KeyEncodingType,
    KeyFormat,
    KeyType,
    StringEncoding,
};

/// An error that can occur in a [`KeyProvider`][`crate::provider::KeyProvider`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An HMAC key is generated with a length outside of the supported range
    #[error(
        "HMAC keys must be between {min} and {max} bits long. A length of {length} is unsupported!"
    )]
    InvalidKeyLengthHmac {
        /// The invalid length in bits.
        length: u32,
        /// The smallest supported length in bits.
        min: u32,
        /// The largest supported length in bits.
        max: u32,
    },

    /// An AES key is generated with an unsupported length (not 128, 192 or 256)
    #[error(
        "AES only defines key lengths of 128, 192 and 256. A key length of {length} is unsupported!"
    )]
    InvalidKeyLengthAes {
        /// The invalid length in bits.
        length: u32,
    },

    /// An RSA key is generated with an unsafe modulus length
    #[error(
        "RSA keys shorter than {min} bits are not supported. A modulus length of {modulus_length} is unsafe!"
    )]
    InvalidModulusLength {
        /// The invalid modulus length in bits.
        modulus_length: u32,
        /// The smallest supported modulus length in bits.
        min: u32,
    },

    /// A parameter required for generating a key pair is missing
    #[error("Generating a key pair of type {key_type} requires setting {parameter}")]
    ParameterRequired {
        /// The type of key pair.
        key_type: AsymmetricKeyType,
        /// The name of the missing parameter.
        parameter: &'static str,
    },

    /// A format is not supported for a type of key
    #[error("The format {format} is not supported for keys of type {key_type}")]
    UnsupportedFormat {
        /// The type of the key.
        key_type: KeyType,
        /// The unsupported format.
        format: KeyFormat,
    },

    /// An encoding type is not supported for a type of key
    #[error("The encoding type {encoding_type} is not supported for {key_type} keys of type {algorithm}")]
    UnsupportedEncodingType {
        /// The type of the key.
        key_type: KeyType,
        /// The algorithm of the key.
        algorithm: AsymmetricKeyType,
        /// The unsupported encoding type.
        encoding_type: KeyEncodingType,
    },

    /// A DER document is provided without an encoding type
    #[error("Importing a DER encoded key requires setting an encoding type")]
    EncodingTypeRequired,

    /// A cipher is requested without a passphrase
    #[error("Encrypting a private key requires a passphrase")]
    PassphraseRequired,

    /// A passphrase is provided without a cipher
    #[error("A passphrase can only be used together with a cipher")]
    CipherRequired,

    /// Encryption is requested for a key, format or structure that does not support it
    #[error("Only private keys encoded as PKCS#8 in PEM or DER format can be encrypted")]
    UnsupportedEncryption,

    /// Key data is provided that does not match the requested format
    #[error("The provided key data can not be read as {format}")]
    InvalidKeyData {
        /// The requested format.
        format: KeyFormat,
    },

    /// A PEM document has a label that is not supported
    #[error("The PEM label \"{label}\" is not supported")]
    UnsupportedPemLabel {
        /// The label of the PEM document.
        label: String,
    },

    /// A JSON Web Key of an unsupported type is provided
    #[error("JSON Web Keys of type {kty} are not supported here")]
    UnsupportedJwk {
        /// The `kty` member of the JSON Web Key.
        kty: String,
    },

    /// A JSON Web Key is missing a required member
    #[error("The JSON Web Key is missing the member \"{member}\"")]
    JwkMemberMissing {
        /// The name of the missing member.
        member: &'static str,
    },

    /// Public key material is provided where a private key is required
    #[error("A private key is required, but public key material is provided")]
    PrivateKeyRequired,

    /// Text is provided in an encoding that can not be decoded
    #[error("The text is not valid {encoding}")]
    InvalidText {
        /// The expected encoding of the text.
        encoding: StringEncoding,
    },

    /// An operation is requested for a type of key that does not support it
    #[error("The operation {operation} is not supported for keys of type {key_type}")]
    UnsupportedOperation {
        /// The name of the operation.
        operation: &'static str,
        /// The type of the key.
        key_type: KeyType,
    },

    /// A key created by another provider is handed to a provider
    #[error("The key has not been created by this provider")]
    ForeignKey,

    /// A provider is no longer available
    #[error("The key provider is no longer available")]
    Unavailable,

    /// Encoding, decoding or generating key material failed
    #[error("Failed to {context}:\n{message}")]
    Encoding {
        /// The context in which the error occurred.
        ///
        /// This is meant to complete the sentence "Failed to ".
        context: &'static str,
        /// The message of the underlying error.
        message: String,
    },

    /// A backend specific error of a third-party provider
    #[error(transparent)]
    Backend(Box<dyn std::error::Error + Send + Sync>),
}
