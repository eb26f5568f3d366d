use std::{fmt::Display, path::PathBuf};

use clap::Parser;
use keyobject::key::{
    AsymmetricKeyFormat,
    AsymmetricKeyType,
    KeyCipher,
    NamedCurve,
    SecretKeyAlgorithm,
    SecretKeyFormat,
};
use strum::IntoEnumIterator;

use super::Output;

fn variants<T: IntoEnumIterator + Display>() -> String {
    T::iter()
        .map(|variant| format!("\"{variant}\""))
        .collect::<Vec<String>>()
        .join(", ")
}

#[derive(Debug, Parser)]
#[command(
    about = "Generate a secret key",
    long_about = "Generate a secret key

The key is written as raw bytes or as JSON Web Key.
Unless a specific output file is chosen, the key is written to stdout."
)]
pub struct GenerateSecretCommand {
    #[arg(
        env = "KEYOBJECT_SECRET_ALGORITHM",
        help = "The algorithm the key is used with",
        long_help = format!("The algorithm the key is used with

One of {}.", variants::<SecretKeyAlgorithm>()),
        long,
        short
    )]
    pub algorithm: SecretKeyAlgorithm,

    #[arg(
        env = "KEYOBJECT_SECRET_LENGTH",
        help = "The length of the key in bits",
        long_help = "The length of the key in bits

HMAC keys are at least 8 bits long (unless configured otherwise), AES keys are 128, 192 or 256 bits long.",
        long,
        short
    )]
    pub length: u32,

    #[arg(
        default_value_t = SecretKeyFormat::default(),
        env = "KEYOBJECT_SECRET_FORMAT",
        help = "The format in which the key is written",
        long_help = format!("The format in which the key is written

One of {}.", variants::<SecretKeyFormat>()),
        long
    )]
    pub format: SecretKeyFormat,

    #[command(flatten)]
    pub output: Output,
}

#[derive(Debug, Parser)]
#[command(
    about = "Generate an asymmetric key pair",
    long_about = "Generate an asymmetric key pair

The public key is written as SubjectPublicKeyInfo and the private key as PKCS#8 document.
If a \"--cipher\" is provided, the private key is encrypted using the passphrase from the \"--passphrase-file\"."
)]
pub struct GeneratePairCommand {
    #[arg(
        env = "KEYOBJECT_KEY_TYPE",
        help = "The type of key pair",
        long_help = format!("The type of key pair

One of {}.", variants::<AsymmetricKeyType>()),
        long = "type",
        short
    )]
    pub key_type: AsymmetricKeyType,

    #[arg(
        env = "KEYOBJECT_MODULUS_LENGTH",
        help = "The modulus length of an RSA key in bits",
        long_help = "The modulus length of an RSA key in bits

Required for RSA keys.",
        long
    )]
    pub modulus_length: Option<u32>,

    #[arg(
        env = "KEYOBJECT_PUBLIC_EXPONENT",
        help = "The public exponent of an RSA key",
        long_help = "The public exponent of an RSA key

If none is provided, the configured default (65537 unless configured otherwise) is used.",
        long
    )]
    pub public_exponent: Option<u64>,

    #[arg(
        env = "KEYOBJECT_NAMED_CURVE",
        help = "The named curve of an elliptic-curve key",
        long_help = format!("The named curve of an elliptic-curve key

One of {}.
Required for elliptic-curve keys.", variants::<NamedCurve>()),
        long
    )]
    pub named_curve: Option<NamedCurve>,

    #[arg(
        default_value_t = AsymmetricKeyFormat::default(),
        env = "KEYOBJECT_KEY_FORMAT",
        help = "The format in which both keys are written",
        long_help = format!("The format in which both keys are written

One of {}.", variants::<AsymmetricKeyFormat>()),
        long
    )]
    pub format: AsymmetricKeyFormat,

    #[arg(
        env = "KEYOBJECT_CIPHER",
        help = "The cipher with which the private key is encrypted",
        long_help = format!("The cipher with which the private key is encrypted

One of {}.
Requires a \"--passphrase-file\".", variants::<KeyCipher>()),
        long
    )]
    pub cipher: Option<KeyCipher>,

    #[arg(
        env = "KEYOBJECT_FORCE",
        help = "Write to the output files even if they exist already",
        long,
        short
    )]
    pub force: bool,

    #[arg(
        env = "KEYOBJECT_PUBLIC_OUTPUT_FILE",
        help = "The path to the output file for the public key",
        long
    )]
    pub public_output: PathBuf,

    #[arg(
        env = "KEYOBJECT_PRIVATE_OUTPUT_FILE",
        help = "The path to the output file for the private key",
        long
    )]
    pub private_output: PathBuf,
}
