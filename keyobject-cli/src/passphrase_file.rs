use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
    str::FromStr,
};

use keyobject::passphrase::Passphrase;

/// A passphrase file error
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Path creation error
    #[error("Path error: {0}")]
    Path(#[from] core::convert::Infallible),

    /// The file does not contain a valid passphrase
    #[error("Invalid passphrase: {0}")]
    Passphrase(#[from] keyobject::passphrase::Error),
}

/// A file containing the passphrase of an encrypted private key
///
/// A single trailing newline is not part of the passphrase.
#[derive(Clone, Debug)]
pub struct PassphraseFile {
    pub passphrase: Passphrase,
}

impl PassphraseFile {
    pub fn new(path: &Path) -> Result<Self, Error> {
        let mut contents = read_to_string(path)?;
        if contents.ends_with('\n') {
            contents.pop();
        }
        Ok(Self {
            passphrase: Passphrase::new(contents)?,
        })
    }
}

impl FromStr for PassphraseFile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PassphraseFile::new(&PathBuf::from_str(s)?)
    }
}
