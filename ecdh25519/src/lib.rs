#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

mod error;
mod keys;

pub use crate::{
    error::{Error, Result},
    keys::{PrivateKey, PublicKey, SharedSecret},
};
pub use rand_core;

use rand_core::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;

/// Size of an X25519 public key in bytes.
pub const PUBLIC_KEY_SIZE: usize = 32;

/// Size of an X25519 private key in bytes.
pub const PRIVATE_KEY_SIZE: usize = 32;

/// Size of an X25519 shared secret in bytes.
pub const SHARED_SECRET_SIZE: usize = 32;

/// The Curve25519 basepoint (u = 9) as specified in RFC7748.
pub const X25519_BASEPOINT_BYTES: [u8; PUBLIC_KEY_SIZE] = x25519_dalek::X25519_BASEPOINT_BYTES;

/// Generates a public/private key pair using entropy from `csprng`.
///
/// Exactly 32 bytes are drawn from `csprng` and clamped according to RFC7748
/// before the public key is derived from them.
///
/// # Errors
///
/// - [`Error::RandomSourceFailure`] if `csprng` cannot supply 32 bytes
/// - [`Error::KeyDerivationFailure`] if the public key cannot be computed
pub fn generate_key_pair<R>(csprng: &mut R) -> Result<(PublicKey, PrivateKey)>
where
    R: CryptoRng + RngCore + ?Sized,
{
    let private_key = PrivateKey::generate(csprng)?;
    let public_key = private_key.public_key()?;
    Ok((public_key, private_key))
}

/// Generates a public/private key pair using the operating system's RNG.
#[cfg(feature = "getrandom")]
pub fn generate_key_pair_from_os_rng() -> Result<(PublicKey, PrivateKey)> {
    generate_key_pair(&mut rand_core::OsRng)
}

/// Derives the public key corresponding to `private_key`.
///
/// The key is used as given; it is not clamped first.
///
/// # Errors
///
/// - [`Error::BadPrivateKeyLength`] if `private_key` is not 32 bytes
/// - [`Error::KeyDerivationFailure`] if X25519 rejects the key
pub fn derive_public_key(private_key: impl AsRef<[u8]>) -> Result<PublicKey> {
    PrivateKey::from_bytes(private_key.as_ref())?.public_key()
}

/// Computes the shared secret between `private_key` and someone else's
/// `public_key`.
///
/// Both lengths are validated before any curve arithmetic is done, the
/// private key first. The private key is used as given; callers importing
/// keys from elsewhere should clamp them with [`PrivateKey::clamped`].
///
/// # Errors
///
/// - [`Error::BadPrivateKeyLength`] if `private_key` is not 32 bytes
/// - [`Error::BadPublicKeyLength`] if `public_key` is not 32 bytes
/// - [`Error::KeyDerivationFailure`] if `public_key` is a low-order point
pub fn compute_shared_secret(
    private_key: impl AsRef<[u8]>,
    public_key: impl AsRef<[u8]>,
) -> Result<SharedSecret> {
    let private_key = PrivateKey::from_bytes(private_key.as_ref())?;
    let public_key = PublicKey::from_bytes(public_key.as_ref())?;
    private_key.diffie_hellman(&public_key)
}

/// The X25519 function defined in RFC7748, rejecting degenerate results.
///
/// The scalar is decoded (clamped) internally as the RFC requires. An
/// all-zero output, which every low-order `point` produces, is returned as
/// [`Error::KeyDerivationFailure`]. The check runs in constant time.
pub fn x25519(scalar: [u8; 32], point: [u8; 32]) -> Result<[u8; 32]> {
    let output = x25519_unchecked(scalar, point);

    if bool::from(output[..].ct_eq(&[0u8; 32][..])) {
        return Err(Error::KeyDerivationFailure);
    }

    Ok(output)
}

/// An unchecked version of the X25519 function defined in RFC7748.
///
/// No checks are made on the point or the output.
pub fn x25519_unchecked(scalar: [u8; 32], point: [u8; 32]) -> [u8; 32] {
    x25519_dalek::x25519(scalar, point)
}
