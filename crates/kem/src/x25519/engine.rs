//! Diffie-Hellman engine for the X25519 KEM
//!
//! Thin adapter over [`x25519_dalek`], which performs the constant-time
//! Montgomery ladder. Scalars are passed unclamped; clamping happens inside
//! the ladder. The shared step reports validity separately from its bytes.

use x25519_dalek::{PublicKey, StaticSecret};
use xkem_params::traditional::x25519::X25519_SIZE;

/// Output of the shared-computation step
pub(crate) struct DhOutput {
    /// The output u-coordinate
    pub(crate) bytes: [u8; X25519_SIZE],
    /// False when the output is all zero, i.e. the peer point has small order
    pub(crate) contributory: bool,
}

/// Key-generation step: `scalar * basepoint`
pub(crate) fn key_gen(scalar: &[u8; X25519_SIZE]) -> [u8; X25519_SIZE] {
    let secret = StaticSecret::from(*scalar);
    PublicKey::from(&secret).to_bytes()
}

/// Shared-computation step: `scalar * point`
pub(crate) fn shared(scalar: &[u8; X25519_SIZE], point: &[u8; X25519_SIZE]) -> DhOutput {
    let secret = StaticSecret::from(*scalar);
    let shared = secret.diffie_hellman(&PublicKey::from(*point));

    DhOutput {
        contributory: shared.was_contributory(),
        bytes: shared.to_bytes(),
    }
}
