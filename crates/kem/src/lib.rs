//! Key Encapsulation Mechanisms (KEM)
//!
//! This crate implements the X25519 key encapsulation mechanism: a KEM built
//! directly on the X25519 Diffie-Hellman function, exposed through both the
//! static [`xkem_api::Kem`] trait and the object-safe [`xkem_api::Scheme`] trait.

pub mod error;
pub mod x25519;

// Re-exports
pub use x25519::{
    X25519Ciphertext, X25519Kem, X25519PublicKey, X25519SecretKey, X25519SharedSecret, X25519,
};
