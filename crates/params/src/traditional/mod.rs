//! Constants for traditional cryptographic algorithms

pub mod x25519;
