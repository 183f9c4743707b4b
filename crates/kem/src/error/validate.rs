//! Validation utilities for KEM operations

use super::{Error, Peer, Result};

/// Validate that a Diffie-Hellman step against the recipient public key was contributory
pub fn recipient_key(contributory: bool, context: &'static str) -> Result<()> {
    if !contributory {
        return Err(Error::NonContributory { context, peer: Peer::Recipient });
    }
    Ok(())
}

/// Validate that a Diffie-Hellman step against the ephemeral key in a ciphertext was contributory
pub fn ephemeral_key(contributory: bool, context: &'static str) -> Result<()> {
    if !contributory {
        return Err(Error::NonContributory { context, peer: Peer::Ephemeral });
    }
    Ok(())
}

// Re-export length validations for convenience
pub use xkem_api::error::validate::{
    ciphertext_size,
    length,
    private_key_size,
    public_key_size,
    seed_size,
};
