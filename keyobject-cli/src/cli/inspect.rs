use std::path::PathBuf;

use clap::Parser;

use super::KeyInput;

#[derive(Debug, Parser)]
#[command(
    about = "Show the type and parameters of a key",
    long_about = "Show the type and parameters of a key

The key type, the asymmetric key type and the asymmetric key details (modulus length and public exponent of RSA keys, named curve of elliptic-curve keys) are written to stdout as JSON."
)]
pub struct InspectCommand {
    #[arg(env = "KEYOBJECT_KEY_FILE", help = "The path to the key file")]
    pub key_file: PathBuf,

    #[command(flatten)]
    pub input: KeyInput,
}
