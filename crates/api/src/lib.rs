//! Public API traits and types for the xkem library
//!
//! This crate provides the public API surface for the xkem ecosystem, including
//! trait definitions, error types, and common types used throughout the library.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, ErrorKind, Result};
pub use types::*;

// Re-export all traits from the traits module
pub use traits::{
    Kem,
    KemPrivateKey,
    KemPublicKey,
    RandomSource,
    Scheme,
    Serialize,
    SerializeSecret,
};
pub use traits::scheme::DynKeyPair;

// Re-export trait modules for direct access
pub use traits::{kem, scheme, serialize};
