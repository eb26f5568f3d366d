//! Settings of the software key provider.

use serde::{Deserialize, Serialize};

/// The smallest supported modulus length of an RSA key in bits.
pub const MIN_RSA_MODULUS_LENGTH: u32 = 2048;

/// The public exponent used for RSA keys if none is requested.
pub const DEFAULT_PUBLIC_EXPONENT: u64 = 65537;

/// The smallest supported length of an HMAC key in bits.
pub const MIN_HMAC_LENGTH: u32 = 8;

/// The largest supported length of an HMAC key in bits.
pub const MAX_HMAC_LENGTH: u32 = i32::MAX as u32;

/// Settings of a [`SoftwareKeyProvider`][`crate::provider::software::SoftwareKeyProvider`].
///
/// Unset members fall back to their defaults when deserializing.
///
/// # Examples
///
/// ```
/// # fn main() -> testresult::TestResult {
/// use keyobject::provider::software::ProviderSettings;
///
/// let settings: ProviderSettings = serde_json::from_str(r#"{"min_rsa_modulus_length": 3072}"#)?;
/// assert_eq!(settings.min_rsa_modulus_length, 3072);
/// assert_eq!(settings.default_public_exponent, 65537);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// The smallest accepted modulus length of generated RSA keys in bits.
    pub min_rsa_modulus_length: u32,

    /// The public exponent of generated RSA keys if none is requested.
    pub default_public_exponent: u64,

    /// The smallest accepted length of generated HMAC keys in bits.
    pub min_hmac_length: u32,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            min_rsa_modulus_length: MIN_RSA_MODULUS_LENGTH,
            default_public_exponent: DEFAULT_PUBLIC_EXPONENT,
            min_hmac_length: MIN_HMAC_LENGTH,
        }
    }
}
