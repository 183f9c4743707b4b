//! Validation utilities for KEM inputs
//!
//! Each helper checks an exact length and returns the matching typed error.

use super::{Error, Result};

/// Validate the length of a derivation or encapsulation seed
pub fn seed_size(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::SeedSize { context, expected, actual });
    }
    Ok(())
}

/// Validate the length of a ciphertext
pub fn ciphertext_size(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::CiphertextSize { context, expected, actual });
    }
    Ok(())
}

/// Validate the length of a serialized public key
pub fn public_key_size(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::PublicKeySize { context, expected, actual });
    }
    Ok(())
}

/// Validate the length of a serialized private key
pub fn private_key_size(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::PrivateKeySize { context, expected, actual });
    }
    Ok(())
}

/// Validate the length of any other fixed-size value
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength { context, expected, actual });
    }
    Ok(())
}
