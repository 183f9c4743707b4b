//! Trait definitions shared by every KEM scheme

pub mod kem;
pub mod scheme;
pub mod serialize;

pub use kem::Kem;
pub use scheme::{KemPrivateKey, KemPublicKey, RandomSource, Scheme};
pub use serialize::{Serialize, SerializeSecret};
