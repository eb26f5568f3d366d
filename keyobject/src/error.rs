//! Error handling.

use crate::key::KeyType;

/// An error that may occur when working with key objects.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An argument is not of the expected type
    #[error("The \"{name}\" argument must be of type {expected}")]
    InvalidArgType {
        /// The name of the argument.
        name: &'static str,
        /// The name of the expected type.
        expected: &'static str,
    },

    /// A key object is not of the expected key type
    #[error("Expected a key object of type {expected}, but found one of type {actual}")]
    KeyTypeMismatch {
        /// The expected key type.
        expected: KeyType,
        /// The key type that has been found.
        actual: KeyType,
    },

    /// An error raised by a key provider.
    #[error(transparent)]
    Provider(#[from] crate::provider::Error),
}
