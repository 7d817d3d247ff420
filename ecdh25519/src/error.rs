//! Error types

use thiserror::Error;

/// Errors returned by key generation, derivation and agreement.
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The random source could not supply enough bytes for a private key.
    #[error("random source failure")]
    RandomSourceFailure,

    /// X25519 rejected its inputs (e.g. a low-order public key).
    #[error("key derivation failure")]
    KeyDerivationFailure,

    /// A private key was not exactly 32 bytes long.
    #[error("bad private key length: {0}")]
    BadPrivateKeyLength(usize),

    /// A public key was not exactly 32 bytes long.
    #[error("bad public key length: {0}")]
    BadPublicKeyLength(usize),
}

/// Result type with the `ecdh25519` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
