//! Passphrase handling.

use std::{fmt::Display, str::FromStr};

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// An error that may occur when creating a passphrase.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A passphrase must not be empty
    #[error("A passphrase must not be empty")]
    Empty,
}

/// A secret passphrase protecting an encrypted private key.
///
/// The passphrase is held by a [`SecretString`], which guarantees zeroing of memory on
/// destruct.
#[derive(Clone, Debug, Deserialize)]
#[serde(try_from = "String")]
pub struct Passphrase(SecretString);

impl Passphrase {
    /// Creates a new [`Passphrase`] from owned [`String`]
    ///
    /// # Errors
    ///
    /// Returns an [`Error::Empty`] if `passphrase` is empty, as PBES2 key derivation does not
    /// provide any protection with an empty password.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyobject::passphrase::Passphrase;
    ///
    /// assert!(Passphrase::new("passphrase".to_string()).is_ok());
    /// assert!(Passphrase::new(String::new()).is_err());
    /// ```
    pub fn new(passphrase: String) -> Result<Self, Error> {
        if passphrase.is_empty() {
            return Err(Error::Empty);
        }
        Ok(Self(SecretString::from(passphrase)))
    }

    /// Exposes the secret passphrase as borrowed [`str`]
    pub fn expose_borrowed(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Display for Passphrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl FromStr for Passphrase {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

impl TryFrom<String> for Passphrase {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn passphrase_display() -> TestResult {
        let passphrase = Passphrase::new("a-secret-passphrase".to_string())?;
        assert_eq!(format!("{passphrase}"), "[REDACTED]");
        assert!(!format!("{passphrase:?}").contains("a-secret-passphrase"));
        Ok(())
    }

    #[test]
    fn passphrase_deserialize() -> TestResult {
        let passphrase: Passphrase = serde_json::from_str(r#""correct horse""#)?;
        assert_eq!(passphrase.expose_borrowed(), "correct horse");
        assert!(serde_json::from_str::<Passphrase>(r#""""#).is_err());
        Ok(())
    }
}
