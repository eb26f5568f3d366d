use std::path::PathBuf;

use clap::Parser;

use super::KeyInput;

#[derive(Debug, Parser)]
#[command(
    about = "Compare two keys",
    long_about = "Compare two keys

Writes \"true\" to stdout if both files contain the same key and \"false\" otherwise.
Keys are compared by their contents, so a key matches itself in any format."
)]
pub struct CompareCommand {
    #[arg(help = "The path to the first key file")]
    pub key_file: PathBuf,

    #[arg(help = "The path to the second key file")]
    pub other_key_file: PathBuf,

    #[command(flatten)]
    pub input: KeyInput,
}
