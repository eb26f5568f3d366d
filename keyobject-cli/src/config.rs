use std::path::Path;

use keyobject::provider::software::ProviderSettings;
use serde::{Deserialize, Serialize};

/// Errors related to configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A config loading error
    #[error("Config loading issue: {0}")]
    Load(#[source] confy::ConfyError),
}

/// The configuration of the `keyobject` executable
///
/// All sections and settings are optional and fall back to their defaults.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Config {
    /// Settings for the software key provider.
    pub provider: ProviderSettings,
}

impl Config {
    /// Loads the configuration from `path` or the default location
    ///
    /// The default location is `~/.config/keyobject/config.toml` (on Linux).
    /// A default configuration file is created if none is found.
    pub fn new(path: Option<&Path>) -> Result<Self, Error> {
        if let Some(path) = path {
            confy::load_path(path).map_err(Error::Load)
        } else {
            confy::load(env!("CARGO_BIN_NAME"), "config").map_err(Error::Load)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use keyobject::provider::software::{DEFAULT_PUBLIC_EXPONENT, MIN_HMAC_LENGTH};
    use testdir::testdir;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn config_partial_file() -> TestResult {
        let path = testdir!().join("config.toml");
        write(&path, "[provider]\nmin_rsa_modulus_length = 4096\n")?;

        let config = Config::new(Some(&path))?;
        assert_eq!(config.provider.min_rsa_modulus_length, 4096);
        assert_eq!(
            config.provider.default_public_exponent,
            DEFAULT_PUBLIC_EXPONENT
        );
        assert_eq!(config.provider.min_hmac_length, MIN_HMAC_LENGTH);
        Ok(())
    }

    #[test]
    fn config_missing_file_is_created_with_defaults() -> TestResult {
        let path = testdir!().join("config.toml");

        let config = Config::new(Some(&path))?;
        assert_eq!(config, Config::default());
        assert!(path.exists());
        Ok(())
    }
}
