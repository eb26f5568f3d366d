use std::path::PathBuf;

use clap::Parser;
use keyobject::key::{AsymmetricKeyFormat, KeyCipher, KeyEncodingType};

use super::{KeyInput, Output};

#[derive(Debug, Parser)]
#[command(
    about = "Export a key in another format",
    long_about = "Export a key in another format

Reads a public or private key and writes it in the chosen format and encoding type.
Unless a specific output file is chosen, the key is written to stdout."
)]
pub struct ExportCommand {
    #[arg(env = "KEYOBJECT_KEY_FILE", help = "The path to the key file")]
    pub key_file: PathBuf,

    #[command(flatten)]
    pub input: KeyInput,

    #[arg(
        env = "KEYOBJECT_EXPORT_FORMAT",
        help = "The format in which the key is written",
        long_help = "The format in which the key is written

One of \"pem\", \"der\" or \"jwk\".",
        long
    )]
    pub format: AsymmetricKeyFormat,

    #[arg(
        env = "KEYOBJECT_EXPORT_ENCODING_TYPE",
        help = "The encoding type of a PEM or DER encoded key",
        long_help = "The encoding type of a PEM or DER encoded key

Public keys support \"spki\" (the default) and \"pkcs1\" (RSA only).
Private keys support \"pkcs8\" (the default), \"pkcs1\" (RSA only) and \"sec1\" (elliptic-curve only).",
        long
    )]
    pub encoding_type: Option<KeyEncodingType>,

    #[arg(
        env = "KEYOBJECT_CIPHER",
        help = "The cipher with which a private key is encrypted",
        long_help = "The cipher with which a private key is encrypted

Only supported for PKCS#8 encoded private keys.
Requires a \"--passphrase-file\".",
        long
    )]
    pub cipher: Option<KeyCipher>,

    #[command(flatten)]
    pub output: Output,
}
