//! # xkem
//!
//! The X25519 Diffie-Hellman function as a key encapsulation mechanism.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! xkem = "0.3"
//! ```
//!
//! ```
//! use xkem::prelude::*;
//!
//! let scheme: &dyn Scheme = &X25519;
//! let (public_key, private_key) = scheme.generate_key()?;
//! let (ciphertext, shared_secret) = scheme.encapsulate(public_key.as_ref())?;
//! assert_eq!(scheme.decapsulate(private_key.as_ref(), &ciphertext)?, shared_secret);
//! # Ok::<(), xkem::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `serde`: serde derives on public keys and ciphertexts
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`xkem-api`]: traits, error types and secret containers
//! - [`xkem-internal`]: constant-time helpers
//! - [`xkem-params`]: scheme size constants
//! - [`xkem-kem`]: the X25519 KEM

pub use xkem_api as api;
pub use xkem_internal as internal;
pub use xkem_kem as kem;
pub use xkem_params as params;

// Ecosystem crates that appear in the public API
pub use rand;
pub use subtle;
pub use zeroize;

/// Common imports for xkem users
///
/// Both [`Kem`](crate::api::Kem) and [`Scheme`](crate::api::Scheme) name an
/// `encapsulate` and a `decapsulate`. With the prelude in scope, call the
/// static operations as `<X25519Kem as Kem>::encapsulate(..)` and the dynamic
/// ones with method syntax on a scheme value.
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, ErrorKind, Result};

    // Re-export core traits
    pub use crate::api::{
        Kem,
        KemPrivateKey,
        KemPublicKey,
        RandomSource,
        Scheme,
        Serialize,
        SerializeSecret,
    };

    // Re-export the scheme and its types
    pub use crate::kem::{
        X25519Ciphertext, X25519Kem, X25519PublicKey, X25519SecretKey, X25519SharedSecret, X25519,
    };
}
