// File: crates/api/src/traits/kem.rs

//! Trait definition for Key Encapsulation Mechanisms (KEM) with enhanced type safety
//!
//! This module provides a statically dispatched interface for key encapsulation
//! mechanisms. Each implementation describes its buffer sizes through associated
//! constants so that generic callers can size buffers without naming the scheme.

use super::serialize::{Serialize, SerializeSecret};
use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for Key Encapsulation Mechanism (KEM) with domain-specific types.
///
/// # Security Design
///
/// This trait enforces strong type safety and clear contracts for serialization.
/// A key from one scheme cannot be passed to another scheme's operations: the
/// mismatch is a compile error. See [`crate::Scheme`] for the dynamically
/// dispatched counterpart, where the mismatch is a runtime error instead.
pub trait Kem {
    /// Public key type.
    type PublicKey: Clone + Serialize;

    /// Secret key type.
    ///
    /// # Security Note
    /// - Implements `Zeroize` so that callers can apply their own wiping policy.
    /// - Implements `SerializeSecret` for `from_bytes` and `to_bytes_zeroizing`.
    type SecretKey: Zeroize + Clone + SerializeSecret;

    /// Shared secret type.
    type SharedSecret: Zeroize + Clone + SerializeSecret;

    /// Ciphertext type for the encapsulated key.
    type Ciphertext: Clone + Serialize;

    /// Keypair type, ordered as (public, secret).
    type KeyPair: Clone;

    /// Size of a serialized public key in bytes.
    const PUBLIC_KEY_SIZE: usize;
    /// Size of a serialized secret key in bytes.
    const PRIVATE_KEY_SIZE: usize;
    /// Size of the seed consumed by [`Kem::derive_keypair`] in bytes.
    const SEED_SIZE: usize;
    /// Size of the shared secret in bytes.
    const SHARED_SECRET_SIZE: usize;
    /// Size of a serialized ciphertext in bytes.
    const CIPHERTEXT_SIZE: usize;
    /// Size of the seed consumed by [`Kem::encapsulate_deterministic`] in bytes.
    const ENCAPSULATION_SEED_SIZE: usize;

    /// Returns the KEM algorithm name.
    fn name() -> &'static str;

    /// Generate a new keypair.
    ///
    /// Draws [`Kem::SEED_SIZE`] bytes from `rng` and forwards to
    /// [`Kem::derive_keypair`]. Fails with a random source error if the draw fails.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Deterministically derive a keypair from a seed.
    ///
    /// The same seed always yields the same keypair. Fails with a seed size
    /// error when `seed` is not exactly [`Kem::SEED_SIZE`] bytes.
    fn derive_keypair(seed: &[u8]) -> Result<Self::KeyPair>;

    /// Extract public key from keypair.
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract secret key from keypair.
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Encapsulate a shared secret using the recipient's public key.
    ///
    /// Draws [`Kem::ENCAPSULATION_SEED_SIZE`] bytes from `rng` and forwards to
    /// [`Kem::encapsulate_deterministic`].
    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> Result<(Self::Ciphertext, Self::SharedSecret)>;

    /// Encapsulate a shared secret using a caller-supplied seed.
    ///
    /// # Security Requirements
    /// - Pure: the same key and seed always yield the same output.
    /// - Must reject degenerate public keys rather than return a weak secret.
    fn encapsulate_deterministic(
        public_key: &Self::PublicKey,
        seed: &[u8],
    ) -> Result<(Self::Ciphertext, Self::SharedSecret)>;

    /// Decapsulate a shared secret using the private key.
    ///
    /// # Security Requirements
    /// - Must be constant-time with respect to the secret key.
    /// - Must reject degenerate ciphertexts rather than return a weak secret.
    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Self::SharedSecret>;
}
