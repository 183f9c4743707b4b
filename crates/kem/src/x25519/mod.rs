// File: crates/kem/src/x25519/mod.rs
//! X25519 KEM
//!
//! This module turns the X25519 Diffie-Hellman function into a Key
//! Encapsulation Mechanism. The ciphertext is an ephemeral public key and the
//! shared secret is the raw Diffie-Hellman output; no KDF is applied.
//!
//! Every value is a raw 32-byte string:
//! - secret key: the scalar, stored unclamped exactly as derived from the seed
//! - public key / ciphertext: a Montgomery u-coordinate
//! - shared secret: the output u-coordinate
//!
//! The scheme is available both through the statically dispatched
//! [`Kem`] trait and through the object-safe [`Scheme`] trait, where keys are
//! trait objects and a key from another scheme is rejected with
//! [`ApiError::TypeMismatch`].

use core::any::Any;
use core::fmt;

use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConstantTimeEq};
use tracing::{debug, instrument, trace};
use zeroize::{Zeroize, Zeroizing};

use crate::error::{validate, Error as KemError};
use xkem_api::{
    error::Error as ApiError, DynKeyPair, Kem, KemPrivateKey, KemPublicKey, RandomSource,
    Result as ApiResult, Scheme, SecretBytes, Serialize, SerializeSecret,
};
use xkem_params::traditional::x25519::{
    X25519_CIPHERTEXT_SIZE, X25519_ENCAPSULATION_SEED_SIZE, X25519_KEM_NAME,
    X25519_PRIVATE_KEY_SIZE, X25519_PUBLIC_KEY_SIZE, X25519_SEED_SIZE,
    X25519_SHARED_SECRET_SIZE,
};

mod engine;

/// X25519 KEM scheme descriptor
///
/// A zero-sized, stateless value. Use the [`X25519`] constant or the unit
/// value `X25519Kem` directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct X25519Kem;

/// The X25519 KEM scheme
pub const X25519: X25519Kem = X25519Kem;

/// Public key for X25519 KEM (Montgomery u-coordinate)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct X25519PublicKey([u8; X25519_PUBLIC_KEY_SIZE]);

/// Secret key for X25519 KEM (scalar value)
///
/// Equality is constant-time.
#[derive(Clone, Zeroize, PartialEq, Eq)]
pub struct X25519SecretKey(SecretBytes<X25519_PRIVATE_KEY_SIZE>);

/// Shared secret from X25519 KEM
///
/// Equality is constant-time.
#[derive(Clone, Zeroize, PartialEq, Eq)]
pub struct X25519SharedSecret(SecretBytes<X25519_SHARED_SECRET_SIZE>);

/// Ciphertext for X25519 KEM (ephemeral public key)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct X25519Ciphertext([u8; X25519_CIPHERTEXT_SIZE]);

// AsRef implementations; there is deliberately no AsMut, values are immutable
impl AsRef<[u8]> for X25519PublicKey { fn as_ref(&self) -> &[u8] { &self.0 } }
impl AsRef<[u8]> for X25519SecretKey { fn as_ref(&self) -> &[u8] { self.0.as_ref() } }
impl AsRef<[u8]> for X25519SharedSecret { fn as_ref(&self) -> &[u8] { self.0.as_ref() } }
impl AsRef<[u8]> for X25519Ciphertext { fn as_ref(&self) -> &[u8] { &self.0 } }

impl fmt::Debug for X25519SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("X25519SecretKey([REDACTED])")
    }
}

impl fmt::Debug for X25519SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("X25519SharedSecret([REDACTED])")
    }
}

impl ConstantTimeEq for X25519SecretKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl ConstantTimeEq for X25519SharedSecret {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl X25519PublicKey {
    /// Borrow the u-coordinate
    pub fn as_bytes(&self) -> &[u8; X25519_PUBLIC_KEY_SIZE] {
        &self.0
    }
}

impl From<[u8; X25519_PUBLIC_KEY_SIZE]> for X25519PublicKey {
    fn from(bytes: [u8; X25519_PUBLIC_KEY_SIZE]) -> Self {
        Self(bytes)
    }
}

impl X25519SecretKey {
    /// Borrow the scalar
    pub fn as_bytes(&self) -> &[u8; X25519_PRIVATE_KEY_SIZE] {
        self.0.as_array()
    }

    /// Recompute the public key belonging to this scalar
    pub fn public_key(&self) -> X25519PublicKey {
        X25519PublicKey(engine::key_gen(self.as_bytes()))
    }
}

impl From<[u8; X25519_PRIVATE_KEY_SIZE]> for X25519SecretKey {
    fn from(bytes: [u8; X25519_PRIVATE_KEY_SIZE]) -> Self {
        Self(SecretBytes::new(bytes))
    }
}

impl X25519SharedSecret {
    /// Borrow the shared secret bytes
    pub fn as_bytes(&self) -> &[u8; X25519_SHARED_SECRET_SIZE] {
        self.0.as_array()
    }
}

impl X25519Ciphertext {
    /// Borrow the ephemeral u-coordinate
    pub fn as_bytes(&self) -> &[u8; X25519_CIPHERTEXT_SIZE] {
        &self.0
    }
}

impl From<[u8; X25519_CIPHERTEXT_SIZE]> for X25519Ciphertext {
    fn from(bytes: [u8; X25519_CIPHERTEXT_SIZE]) -> Self {
        Self(bytes)
    }
}

// Serialization

impl Serialize for X25519PublicKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        validate::public_key_size("X25519PublicKey::from_bytes", bytes.len(), X25519_PUBLIC_KEY_SIZE)?;
        let mut key = [0u8; X25519_PUBLIC_KEY_SIZE];
        key.copy_from_slice(bytes);
        Ok(Self(key))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl SerializeSecret for X25519SecretKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        validate::private_key_size("X25519SecretKey::from_bytes", bytes.len(), X25519_PRIVATE_KEY_SIZE)?;
        let secret = SecretBytes::from_slice(bytes)?;
        Ok(Self(secret))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.as_ref().to_vec())
    }
}

impl SerializeSecret for X25519SharedSecret {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let secret = SecretBytes::from_slice(bytes)
            .map_err(|e| e.with_context("X25519SharedSecret::from_bytes"))?;
        Ok(Self(secret))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.as_ref().to_vec())
    }
}

impl Serialize for X25519Ciphertext {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        validate::ciphertext_size("X25519Ciphertext::from_bytes", bytes.len(), X25519_CIPHERTEXT_SIZE)?;
        let mut ct = [0u8; X25519_CIPHERTEXT_SIZE];
        ct.copy_from_slice(bytes);
        Ok(Self(ct))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

/// Draw a fresh seed from `rng`
fn draw_seed<R, const N: usize>(rng: &mut R, context: &'static str) -> ApiResult<[u8; N]>
where
    R: RngCore + ?Sized,
{
    let mut seed = [0u8; N];
    rng.try_fill_bytes(&mut seed).map_err(|source| {
        debug!(context, error = %source, "randomness source failed");
        ApiError::from(KemError::Random { context, source })
    })?;
    Ok(seed)
}

fn seed_array(seed: &[u8], context: &'static str) -> ApiResult<[u8; X25519_SEED_SIZE]> {
    validate::seed_size(context, seed.len(), X25519_SEED_SIZE).map_err(|e| {
        debug!(context, actual = seed.len(), expected = X25519_SEED_SIZE, "rejected seed");
        e
    })?;
    let mut out = [0u8; X25519_SEED_SIZE];
    out.copy_from_slice(seed);
    Ok(out)
}

impl Kem for X25519Kem {
    type PublicKey = X25519PublicKey;
    type SecretKey = X25519SecretKey;
    type SharedSecret = X25519SharedSecret;
    type Ciphertext = X25519Ciphertext;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    const PUBLIC_KEY_SIZE: usize = X25519_PUBLIC_KEY_SIZE;
    const PRIVATE_KEY_SIZE: usize = X25519_PRIVATE_KEY_SIZE;
    const SEED_SIZE: usize = X25519_SEED_SIZE;
    const SHARED_SECRET_SIZE: usize = X25519_SHARED_SECRET_SIZE;
    const CIPHERTEXT_SIZE: usize = X25519_CIPHERTEXT_SIZE;
    const ENCAPSULATION_SEED_SIZE: usize = X25519_ENCAPSULATION_SEED_SIZE;

    fn name() -> &'static str { X25519_KEM_NAME }

    #[instrument(level = "debug", skip_all, fields(scheme = X25519_KEM_NAME))]
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let seed: [u8; X25519_SEED_SIZE] = draw_seed(rng, "X25519 keypair")?;
        Self::derive_keypair(&seed)
    }

    fn derive_keypair(seed: &[u8]) -> ApiResult<Self::KeyPair> {
        // The seed is the scalar; clamping is left to the ladder
        let scalar = seed_array(seed, "X25519 derive_keypair")?;
        let secret_key = X25519SecretKey::from(scalar);
        let public_key = secret_key.public_key();

        trace!("derived X25519 keypair");
        Ok((public_key, secret_key))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    #[instrument(level = "debug", skip_all, fields(scheme = X25519_KEM_NAME))]
    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> ApiResult<(Self::Ciphertext, Self::SharedSecret)> {
        let seed: [u8; X25519_ENCAPSULATION_SEED_SIZE] = draw_seed(rng, "X25519 encapsulate")?;
        Self::encapsulate_deterministic(public_key, &seed)
    }

    fn encapsulate_deterministic(
        public_key: &Self::PublicKey,
        seed: &[u8],
    ) -> ApiResult<(Self::Ciphertext, Self::SharedSecret)> {
        const CONTEXT: &str = "X25519 encapsulate";

        let scalar = seed_array(seed, CONTEXT)?;

        // 1. Ephemeral keypair; its public half is the ciphertext
        let ephemeral = X25519SecretKey::from(scalar);
        let ciphertext = X25519Ciphertext(engine::key_gen(ephemeral.as_bytes()));

        // 2. Shared point: [ephemeral] * recipient_pk
        let output = engine::shared(ephemeral.as_bytes(), public_key.as_bytes());

        // 3. Reject low-order recipient keys
        validate::recipient_key(output.contributory, CONTEXT).map_err(|e| {
            debug!(context = CONTEXT, "recipient public key is degenerate");
            ApiError::from(e)
        })?;

        trace!("encapsulated X25519 shared secret");
        Ok((ciphertext, X25519SharedSecret(SecretBytes::new(output.bytes))))
    }

    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> ApiResult<Self::SharedSecret> {
        const CONTEXT: &str = "X25519 decapsulate";

        // 1. Shared point: [recipient_sk] * ephemeral_pk
        let output = engine::shared(secret_key.as_bytes(), ciphertext.as_bytes());

        // 2. Reject low-order ephemeral keys
        validate::ephemeral_key(output.contributory, CONTEXT).map_err(|e| {
            debug!(context = CONTEXT, "ciphertext is degenerate");
            ApiError::from(e)
        })?;

        trace!("decapsulated X25519 shared secret");
        Ok(X25519SharedSecret(SecretBytes::new(output.bytes)))
    }
}

// Dynamic interface

fn type_mismatch(context: &'static str) -> ApiError {
    debug!(context, "key belongs to a different scheme");
    ApiError::TypeMismatch { context, expected: X25519_KEM_NAME }
}

impl KemPublicKey for X25519PublicKey {
    fn scheme(&self) -> &'static dyn Scheme {
        &X25519
    }

    fn marshal_binary(&self) -> Vec<u8> {
        self.to_bytes()
    }

    fn equal(&self, other: &dyn KemPublicKey) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .map_or(false, |other| self == other)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl KemPrivateKey for X25519SecretKey {
    fn scheme(&self) -> &'static dyn Scheme {
        &X25519
    }

    fn marshal_binary(&self) -> Vec<u8> {
        self.0.as_ref().to_vec()
    }

    fn equal(&self, other: &dyn KemPrivateKey) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .map_or(false, |other| bool::from(self.ct_eq(other)))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn boxed((public_key, secret_key): (X25519PublicKey, X25519SecretKey)) -> DynKeyPair {
    (Box::new(public_key), Box::new(secret_key))
}

impl Scheme for X25519Kem {
    fn name(&self) -> &'static str { X25519_KEM_NAME }
    fn public_key_size(&self) -> usize { X25519_PUBLIC_KEY_SIZE }
    fn private_key_size(&self) -> usize { X25519_PRIVATE_KEY_SIZE }
    fn seed_size(&self) -> usize { X25519_SEED_SIZE }
    fn shared_key_size(&self) -> usize { X25519_SHARED_SECRET_SIZE }
    fn ciphertext_size(&self) -> usize { X25519_CIPHERTEXT_SIZE }
    fn encapsulation_seed_size(&self) -> usize { X25519_ENCAPSULATION_SEED_SIZE }

    fn generate_key_from_rng(&self, rng: &mut dyn RandomSource) -> ApiResult<DynKeyPair> {
        let seed: [u8; X25519_SEED_SIZE] = draw_seed(rng, "X25519 generate_key")?;
        self.derive_key(&seed)
    }

    fn derive_key(&self, seed: &[u8]) -> ApiResult<DynKeyPair> {
        <Self as Kem>::derive_keypair(seed)
            .map(boxed)
            .map_err(|e| e.with_context("X25519 derive_key"))
    }

    fn encapsulate_from_rng(
        &self,
        public_key: &dyn KemPublicKey,
        rng: &mut dyn RandomSource,
    ) -> ApiResult<(Vec<u8>, Vec<u8>)> {
        let seed: [u8; X25519_ENCAPSULATION_SEED_SIZE] = draw_seed(rng, "X25519 encapsulate")?;
        self.encapsulate_deterministically(public_key, &seed)
    }

    fn encapsulate_deterministically(
        &self,
        public_key: &dyn KemPublicKey,
        seed: &[u8],
    ) -> ApiResult<(Vec<u8>, Vec<u8>)> {
        const CONTEXT: &str = "X25519 encapsulate_deterministically";

        seed_array(seed, CONTEXT)?;
        let public_key = public_key
            .as_any()
            .downcast_ref::<X25519PublicKey>()
            .ok_or_else(|| type_mismatch(CONTEXT))?;

        let (ciphertext, shared_secret) = <Self as Kem>::encapsulate_deterministic(public_key, seed)
            .map_err(|e| e.with_context(CONTEXT))?;
        Ok((ciphertext.to_bytes(), shared_secret.as_bytes().to_vec()))
    }

    fn decapsulate(&self, private_key: &dyn KemPrivateKey, ciphertext: &[u8]) -> ApiResult<Vec<u8>> {
        const CONTEXT: &str = "X25519 decapsulate";

        validate::ciphertext_size(CONTEXT, ciphertext.len(), X25519_CIPHERTEXT_SIZE).map_err(|e| {
            debug!(context = CONTEXT, actual = ciphertext.len(), "rejected ciphertext");
            e
        })?;
        let secret_key = private_key
            .as_any()
            .downcast_ref::<X25519SecretKey>()
            .ok_or_else(|| type_mismatch(CONTEXT))?;

        let ciphertext = X25519Ciphertext::from_bytes(ciphertext)?;
        let shared_secret = <Self as Kem>::decapsulate(secret_key, &ciphertext)?;
        Ok(shared_secret.as_bytes().to_vec())
    }

    fn unmarshal_binary_public_key(&self, buf: &[u8]) -> ApiResult<Box<dyn KemPublicKey>> {
        let public_key = X25519PublicKey::from_bytes(buf)
            .map_err(|e| e.with_context("X25519 unmarshal_binary_public_key"))?;
        Ok(Box::new(public_key))
    }

    fn unmarshal_binary_private_key(&self, buf: &[u8]) -> ApiResult<Box<dyn KemPrivateKey>> {
        let secret_key = <X25519SecretKey as SerializeSecret>::from_bytes(buf)
            .map_err(|e| e.with_context("X25519 unmarshal_binary_private_key"))?;
        Ok(Box::new(secret_key))
    }
}
