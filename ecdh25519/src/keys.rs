//! X25519 private keys, public keys and shared secrets.

use crate::{
    Error, PRIVATE_KEY_SIZE, PUBLIC_KEY_SIZE, Result, SHARED_SECRET_SIZE,
    X25519_BASEPOINT_BYTES, x25519,
};
use core::fmt;
use rand_core::{CryptoRng, RngCore};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// An X25519 public key: the u-coordinate of a point on Curve25519.
///
/// No validation beyond the length is performed when constructing a public
/// key; low-order points are rejected when they are used for agreement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; PUBLIC_KEY_SIZE]);

impl PublicKey {
    /// Converts a byte slice into a public key.
    ///
    /// Returns [`Error::BadPublicKeyLength`] if the slice is not 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let array = bytes
            .try_into()
            .map_err(|_| Error::BadPublicKeyLength(bytes.len()))?;
        Ok(Self(array))
    }

    /// Borrows the public key as a byte array.
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.0
    }

    /// Copies the public key into a byte array.
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_SIZE] {
        self.0
    }
}

impl From<[u8; PUBLIC_KEY_SIZE]> for PublicKey {
    fn from(bytes: [u8; PUBLIC_KEY_SIZE]) -> PublicKey {
        PublicKey(bytes)
    }
}

impl From<PublicKey> for [u8; PUBLIC_KEY_SIZE] {
    fn from(public_key: PublicKey) -> [u8; PUBLIC_KEY_SIZE] {
        public_key.0
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// An X25519 private key (scalar).
///
/// Keys produced by [`PrivateKey::generate`] are clamped. Keys built from
/// caller-supplied bytes are kept exactly as given; see
/// [`PrivateKey::clamped`]. The key is wiped from memory on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey([u8; PRIVATE_KEY_SIZE]);

impl PrivateKey {
    /// Generates a clamped private key from 32 bytes drawn from `csprng`.
    ///
    /// Returns [`Error::RandomSourceFailure`] if `csprng` fails to fill the
    /// key.
    pub fn generate<R>(csprng: &mut R) -> Result<Self>
    where
        R: CryptoRng + RngCore + ?Sized,
    {
        let mut private_key = PrivateKey([0u8; PRIVATE_KEY_SIZE]);

        // a partially filled key is wiped when `private_key` drops
        csprng
            .try_fill_bytes(&mut private_key.0)
            .map_err(|_| Error::RandomSourceFailure)?;

        private_key.clamp();
        Ok(private_key)
    }

    /// Converts a byte slice into a private key without clamping it.
    ///
    /// Returns [`Error::BadPrivateKeyLength`] if the slice is not 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let array = bytes
            .try_into()
            .map_err(|_| Error::BadPrivateKeyLength(bytes.len()))?;
        Ok(Self(array))
    }

    /// Builds a private key from `bytes` and clamps it according to RFC7748.
    pub fn clamped(bytes: [u8; PRIVATE_KEY_SIZE]) -> Self {
        let mut private_key = PrivateKey(bytes);
        private_key.clamp();
        private_key
    }

    /// Clears the three low bits and the high bit, and sets bit 254.
    fn clamp(&mut self) {
        self.0[0] &= 248;
        self.0[31] &= 127;
        self.0[31] |= 64;
    }

    /// Returns `true` if the key carries the RFC7748 clamping bits.
    pub fn is_clamped(&self) -> bool {
        self.0[0] & 0b0000_0111 == 0 && self.0[31] & 0b1100_0000 == 0b0100_0000
    }

    /// Borrows the private key as a byte array.
    pub fn as_bytes(&self) -> &[u8; PRIVATE_KEY_SIZE] {
        &self.0
    }

    /// Computes the public key corresponding to this private key.
    pub fn public_key(&self) -> Result<PublicKey> {
        x25519(self.0, X25519_BASEPOINT_BYTES).map(PublicKey)
    }

    /// Performs a Diffie-Hellman key agreement with the peer's public key.
    ///
    /// Returns [`Error::KeyDerivationFailure`] if `public_key` is a low-order
    /// point.
    pub fn diffie_hellman(&self, public_key: &PublicKey) -> Result<SharedSecret> {
        x25519(self.0, public_key.0).map(SharedSecret)
    }
}

impl From<[u8; PRIVATE_KEY_SIZE]> for PrivateKey {
    fn from(bytes: [u8; PRIVATE_KEY_SIZE]) -> PrivateKey {
        PrivateKey(bytes)
    }
}

impl TryFrom<&[u8]> for PrivateKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

impl AsRef<[u8]> for PrivateKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl ConstantTimeEq for PrivateKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for PrivateKey {}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey").finish_non_exhaustive()
    }
}

/// The output of an X25519 Diffie-Hellman key agreement.
///
/// This is the raw u-coordinate; it should be fed to a KDF before being used
/// as key material. The secret is wiped from memory on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret([u8; SHARED_SECRET_SIZE]);

impl SharedSecret {
    /// Borrows the shared secret as a byte array.
    pub fn as_bytes(&self) -> &[u8; SHARED_SECRET_SIZE] {
        &self.0
    }

    /// Copies the shared secret into a byte array.
    pub fn to_bytes(&self) -> [u8; SHARED_SECRET_SIZE] {
        self.0
    }
}

impl AsRef<[u8]> for SharedSecret {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl ConstantTimeEq for SharedSecret {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for SharedSecret {}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSecret").finish_non_exhaustive()
    }
}
