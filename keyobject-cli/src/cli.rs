use std::path::PathBuf;

use clap::{Args, Parser};
use clap_verbosity_flag::Verbosity;
pub use compare::CompareCommand;
pub use export::ExportCommand;
pub use generate::{GeneratePairCommand, GenerateSecretCommand};
pub use inspect::InspectCommand;
use keyobject::key::{AsymmetricKeyFormat, KeyEncodingType};

use crate::passphrase_file::PassphraseFile;

mod compare;
mod export;
mod generate;
mod inspect;

/// Errors related to the CLI
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An encoding type can not be used for private keys
    #[error("The encoding type \"{0}\" can not be used for private keys")]
    PrivateKeyEncodingType(KeyEncodingType),
}

#[derive(Debug, Parser)]
#[command(name = "keyobject")]
pub struct Cli {
    #[arg(
        env = "KEYOBJECT_CONFIG",
        global = true,
        help = "The path to a custom configuration file",
        long_help = "The path to a custom configuration file

If specified, the custom configuration file is used instead of the default configuration file location.",
        long,
        short
    )]
    pub config: Option<PathBuf>,

    #[arg(
        env = "KEYOBJECT_PASSPHRASE_FILE",
        global = true,
        help = "The path to a file containing the passphrase of an encrypted private key",
        long_help = "The path to a file containing the passphrase of an encrypted private key

The passphrase is used for reading encrypted private keys and for writing private keys encrypted with a \"--cipher\".
A single trailing newline in the file is not considered part of the passphrase.",
        long,
        short
    )]
    pub passphrase_file: Option<PassphraseFile>,

    /// Global processing log verbosity.
    #[command(flatten)]
    pub verbosity: Verbosity,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Parser)]
#[command(about, author, version)]
pub enum Command {
    Compare(CompareCommand),
    Export(ExportCommand),
    GeneratePair(GeneratePairCommand),
    GenerateSecret(GenerateSecretCommand),
    Inspect(InspectCommand),
}

/// Describes how an asymmetric key is read from a file
#[derive(Args, Debug)]
pub struct KeyInput {
    #[arg(
        env = "KEYOBJECT_PUBLIC",
        help = "Read public keys",
        long_help = "Read public keys

If a file contains a private key, the public key is derived from it.
Without this option, files must contain private keys.",
        long
    )]
    pub public: bool,

    #[arg(
        env = "KEYOBJECT_INPUT_FORMAT",
        help = "The format of the key files",
        long_help = "The format of the key files

One of \"pem\", \"der\" or \"jwk\".
If none is provided, PEM documents are expected.",
        long
    )]
    pub input_format: Option<AsymmetricKeyFormat>,

    #[arg(
        env = "KEYOBJECT_INPUT_ENCODING_TYPE",
        help = "The encoding type of DER encoded key files",
        long_help = "The encoding type of DER encoded key files

One of \"pkcs1\", \"pkcs8\", \"spki\" or \"sec1\".
Required if the key files are DER encoded.",
        long
    )]
    pub input_encoding_type: Option<KeyEncodingType>,
}

#[derive(Args, Debug)]
pub struct Output {
    #[arg(
        env = "KEYOBJECT_FORCE",
        help = "Write to output file even if it exists already",
        long,
        short
    )]
    pub force: bool,

    #[arg(
        env = "KEYOBJECT_OUTPUT_FILE",
        help = "The optional path to a specific output file",
        long_help = "The optional path to a specific output file

If none is provided, the output is written to stdout.",
        long,
        short
    )]
    pub output: Option<PathBuf>,
}
