//! Builds `ecdh25519` without its default features in a `no_std` crate.

#![no_std]

use ecdh25519::{PublicKey, Result, SharedSecret, compute_shared_secret, derive_public_key};

/// Derives a public key and agrees on a secret with `peer`.
pub fn agree(private_key: &[u8], peer: &[u8]) -> Result<(PublicKey, SharedSecret)> {
    let public_key = derive_public_key(private_key)?;
    let shared = compute_shared_secret(private_key, peer)?;
    Ok((public_key, shared))
}
