// File: crates/api/src/traits/scheme.rs

//! Object-safe KEM interface over byte buffers
//!
//! [`Scheme`] lets callers hold differently-shaped KEMs behind one
//! `&dyn Scheme` and exchange keys as `Box<dyn KemPublicKey>` /
//! `Box<dyn KemPrivateKey>`. Ciphertexts and shared secrets cross this
//! interface as plain byte vectors whose sizes the scheme describes.
//!
//! Because keys are trait objects here, a key produced by one scheme can be
//! handed to another. Implementations must downcast through
//! [`KemPublicKey::as_any`] / [`KemPrivateKey::as_any`] and answer with
//! [`Error::TypeMismatch`](crate::Error::TypeMismatch) when the concrete type
//! is not their own.

use core::any::Any;
use core::fmt;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::Result;

/// Cryptographically secure randomness source usable as a trait object.
pub trait RandomSource: RngCore + CryptoRng {}

impl<T: RngCore + CryptoRng> RandomSource for T {}

/// A public key belonging to some [`Scheme`].
pub trait KemPublicKey: Any + fmt::Debug + Send + Sync {
    /// The scheme this key belongs to.
    fn scheme(&self) -> &'static dyn Scheme;

    /// A freshly copied serialization of the key.
    fn marshal_binary(&self) -> Vec<u8>;

    /// Equality with another key of any scheme. Keys of different schemes are never equal.
    fn equal(&self, other: &dyn KemPublicKey) -> bool;

    /// Downcasting hook.
    fn as_any(&self) -> &dyn Any;
}

/// A private key belonging to some [`Scheme`].
pub trait KemPrivateKey: Any + fmt::Debug + Send + Sync {
    /// The scheme this key belongs to.
    fn scheme(&self) -> &'static dyn Scheme;

    /// A freshly copied serialization of the key.
    fn marshal_binary(&self) -> Vec<u8>;

    /// Constant-time equality with another key of any scheme.
    /// Keys of different schemes are never equal.
    fn equal(&self, other: &dyn KemPrivateKey) -> bool;

    /// Downcasting hook.
    fn as_any(&self) -> &dyn Any;
}

/// Keypair as returned through the dynamic interface, ordered as (public, private).
pub type DynKeyPair = (Box<dyn KemPublicKey>, Box<dyn KemPrivateKey>);

/// A KEM scheme descriptor with its operational entrypoints.
///
/// All size queries are pure. The randomized entrypoints default to the
/// operating system's randomness source; the `*_from_rng` variants accept any
/// other source.
pub trait Scheme: Send + Sync {
    /// Name of the scheme.
    fn name(&self) -> &'static str;

    /// Size of a serialized public key in bytes.
    fn public_key_size(&self) -> usize;

    /// Size of a serialized private key in bytes.
    fn private_key_size(&self) -> usize;

    /// Size of the seed accepted by [`Scheme::derive_key`] in bytes.
    fn seed_size(&self) -> usize;

    /// Size of the shared secret in bytes.
    fn shared_key_size(&self) -> usize;

    /// Size of a ciphertext in bytes.
    fn ciphertext_size(&self) -> usize;

    /// Size of the seed accepted by [`Scheme::encapsulate_deterministically`] in bytes.
    fn encapsulation_seed_size(&self) -> usize;

    /// Generate a keypair from a caller-supplied randomness source.
    fn generate_key_from_rng(&self, rng: &mut dyn RandomSource) -> Result<DynKeyPair>;

    /// Generate a keypair from the operating system's randomness source.
    fn generate_key(&self) -> Result<DynKeyPair> {
        self.generate_key_from_rng(&mut OsRng)
    }

    /// Deterministically derive a keypair from `seed`.
    fn derive_key(&self, seed: &[u8]) -> Result<DynKeyPair>;

    /// Encapsulate against `public_key` with a caller-supplied randomness source.
    ///
    /// Returns `(ciphertext, shared_secret)`.
    fn encapsulate_from_rng(
        &self,
        public_key: &dyn KemPublicKey,
        rng: &mut dyn RandomSource,
    ) -> Result<(Vec<u8>, Vec<u8>)>;

    /// Encapsulate against `public_key` with the operating system's randomness source.
    ///
    /// Returns `(ciphertext, shared_secret)`.
    fn encapsulate(&self, public_key: &dyn KemPublicKey) -> Result<(Vec<u8>, Vec<u8>)> {
        self.encapsulate_from_rng(public_key, &mut OsRng)
    }

    /// Encapsulate against `public_key` using `seed` in place of fresh randomness.
    ///
    /// Returns `(ciphertext, shared_secret)`.
    fn encapsulate_deterministically(
        &self,
        public_key: &dyn KemPublicKey,
        seed: &[u8],
    ) -> Result<(Vec<u8>, Vec<u8>)>;

    /// Recover the shared secret carried by `ciphertext`.
    fn decapsulate(&self, private_key: &dyn KemPrivateKey, ciphertext: &[u8]) -> Result<Vec<u8>>;

    /// Parse a public key from exactly [`Scheme::public_key_size`] bytes.
    fn unmarshal_binary_public_key(&self, buf: &[u8]) -> Result<Box<dyn KemPublicKey>>;

    /// Parse a private key from exactly [`Scheme::private_key_size`] bytes.
    fn unmarshal_binary_private_key(&self, buf: &[u8]) -> Result<Box<dyn KemPrivateKey>>;
}

impl fmt::Debug for dyn Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheme").field("name", &self.name()).finish()
    }
}
