//! Error type definitions for key encapsulation operations

use thiserror::Error as ThisError;

/// Primary error type for KEM operations
///
/// Every variant carries the `context` of the entrypoint that rejected the
/// input. Size errors additionally report the expected and actual lengths.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The randomness source failed to produce bytes
    #[error("{context}: random source failure: {message}")]
    RandomSource {
        context: &'static str,
        message: String,
    },

    /// A derivation or encapsulation seed has the wrong length
    #[error("{context}: invalid seed size (expected {expected}, got {actual})")]
    SeedSize {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A key from a different scheme was passed to this scheme
    #[error("{context}: key does not belong to the {expected} scheme")]
    TypeMismatch {
        context: &'static str,
        expected: &'static str,
    },

    /// A ciphertext has the wrong length
    #[error("{context}: invalid ciphertext size (expected {expected}, got {actual})")]
    CiphertextSize {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A serialized public key has the wrong length
    #[error("{context}: invalid public key size (expected {expected}, got {actual})")]
    PublicKeySize {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A serialized private key has the wrong length
    #[error("{context}: invalid private key size (expected {expected}, got {actual})")]
    PrivateKeySize {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The recipient public key is degenerate (low order or identity)
    #[error("{context}: invalid public key")]
    InvalidPublicKey {
        context: &'static str,
    },

    /// The received ciphertext is degenerate (low order or identity)
    #[error("{context}: invalid ciphertext")]
    InvalidCiphertext {
        context: &'static str,
    },

    /// Any other fixed-size value has the wrong length
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Fieldless discriminant of [`Error`], convenient for matching in callers and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    RandomSource,
    SeedSize,
    TypeMismatch,
    CiphertextSize,
    PublicKeySize,
    PrivateKeySize,
    InvalidPublicKey,
    InvalidCiphertext,
    InvalidLength,
}

/// Result type for KEM operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// The kind of this error, without its context
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::RandomSource { .. } => ErrorKind::RandomSource,
            Self::SeedSize { .. } => ErrorKind::SeedSize,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::CiphertextSize { .. } => ErrorKind::CiphertextSize,
            Self::PublicKeySize { .. } => ErrorKind::PublicKeySize,
            Self::PrivateKeySize { .. } => ErrorKind::PrivateKeySize,
            Self::InvalidPublicKey { .. } => ErrorKind::InvalidPublicKey,
            Self::InvalidCiphertext { .. } => ErrorKind::InvalidCiphertext,
            Self::InvalidLength { .. } => ErrorKind::InvalidLength,
        }
    }

    /// The entrypoint that produced this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::RandomSource { context, .. }
            | Self::SeedSize { context, .. }
            | Self::TypeMismatch { context, .. }
            | Self::CiphertextSize { context, .. }
            | Self::PublicKeySize { context, .. }
            | Self::PrivateKeySize { context, .. }
            | Self::InvalidPublicKey { context }
            | Self::InvalidCiphertext { context }
            | Self::InvalidLength { context, .. } => context,
        }
    }

    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::RandomSource { message, .. } => Self::RandomSource { context, message },
            Self::SeedSize { expected, actual, .. } => Self::SeedSize { context, expected, actual },
            Self::TypeMismatch { expected, .. } => Self::TypeMismatch { context, expected },
            Self::CiphertextSize { expected, actual, .. } => {
                Self::CiphertextSize { context, expected, actual }
            }
            Self::PublicKeySize { expected, actual, .. } => {
                Self::PublicKeySize { context, expected, actual }
            }
            Self::PrivateKeySize { expected, actual, .. } => {
                Self::PrivateKeySize { context, expected, actual }
            }
            Self::InvalidPublicKey { .. } => Self::InvalidPublicKey { context },
            Self::InvalidCiphertext { .. } => Self::InvalidCiphertext { context },
            Self::InvalidLength { expected, actual, .. } => {
                Self::InvalidLength { context, expected, actual }
            }
        }
    }
}

impl From<rand::Error> for Error {
    fn from(e: rand::Error) -> Self {
        Self::RandomSource {
            context: "random source",
            message: e.to_string(),
        }
    }
}
