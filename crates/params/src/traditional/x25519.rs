//! Constants for the X25519 key encapsulation mechanism
//!
//! Every buffer of this parameterization is a raw 32-byte string: private keys
//! are scalars, public keys and ciphertexts are Montgomery u-coordinates, and the
//! shared secret is the output u-coordinate of the scalar multiplication.

/// Size of a curve25519 scalar or u-coordinate in bytes
pub const X25519_SIZE: usize = 32;

/// Name reported by the X25519 KEM scheme
pub const X25519_KEM_NAME: &str = "X25519";

/// Size of the public key for X25519 KEM in bytes
pub const X25519_PUBLIC_KEY_SIZE: usize = X25519_SIZE;

/// Size of the private key for X25519 KEM in bytes
pub const X25519_PRIVATE_KEY_SIZE: usize = X25519_SIZE;

/// Size of the seed consumed by key derivation in bytes
pub const X25519_SEED_SIZE: usize = X25519_SIZE;

/// Size of the shared secret for X25519 KEM in bytes
pub const X25519_SHARED_SECRET_SIZE: usize = X25519_SIZE;

/// Size of the ciphertext (ephemeral public key) for X25519 KEM in bytes
pub const X25519_CIPHERTEXT_SIZE: usize = X25519_SIZE;

/// Size of the seed consumed by deterministic encapsulation in bytes
pub const X25519_ENCAPSULATION_SEED_SIZE: usize = X25519_SIZE;

/// The u-coordinate of the curve25519 base point
pub const X25519_BASEPOINT: [u8; X25519_SIZE] = [
    9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];
