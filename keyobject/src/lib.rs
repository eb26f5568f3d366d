#![doc = include_str!("../README.md")]

mod error;
mod generate;
pub mod key;
pub mod passphrase;
pub mod provider;

pub use error::Error;
pub use generate::{
    KeyPair,
    create_private_key,
    create_public_key,
    create_secret_key,
    generate_key,
    generate_key_pair,
    generate_key_pair_sync,
    generate_key_sync,
};
