//! Error handling for KEM operations
//!
//! Failures that originate inside this crate (the randomness draw and the
//! Diffie-Hellman validity check) are described here and converted into the
//! public [`xkem_api::Error`] at the crate boundary.

use thiserror::Error as ThisError;
use xkem_api::error::Error as CoreError;

/// Which public input of the Diffie-Hellman step turned out to be degenerate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Peer {
    /// The recipient's long-term public key, during encapsulation
    Recipient,
    /// The sender's ephemeral public key (the ciphertext), during decapsulation
    Ephemeral,
}

/// Error type for KEM operations
#[derive(Debug, ThisError)]
pub enum Error {
    /// The randomness source could not fill a seed
    #[error("{context}: random source failure: {source}")]
    Random {
        context: &'static str,
        #[source]
        source: rand::Error,
    },

    /// The Diffie-Hellman output was all zero, so the peer point has low order
    #[error("{context}: non-contributory Diffie-Hellman output ({peer:?} point)")]
    NonContributory {
        context: &'static str,
        peer: Peer,
    },
}

/// Result type for KEM operations
pub type Result<T> = core::result::Result<T, Error>;

// From Error to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Random { context, source } => CoreError::RandomSource {
                context,
                message: source.to_string(),
            },
            Error::NonContributory { context, peer: Peer::Recipient } => {
                CoreError::InvalidPublicKey { context }
            }
            Error::NonContributory { context, peer: Peer::Ephemeral } => {
                CoreError::InvalidCiphertext { context }
            }
        }
    }
}

// Include validation submodule
pub mod validate;
