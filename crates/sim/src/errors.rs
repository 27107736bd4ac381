//! Error types shared across the crate.
//!
//! Leaf modules return the narrowest error that describes the failure;
//! [`DriftError`] is the umbrella returned by the mutation, translation,
//! scoring and simulation layers.

use std::fmt;
use thiserror::Error;

/// Error returned when attempting to convert an invalid byte/character into
/// a `Nucleotide`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidNucleotide(pub u8);

impl fmt::Display for InvalidNucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid nucleotide byte: {} ('{}')", self.0, self.0 as char)
    }
}

impl std::error::Error for InvalidNucleotide {}

/// Error type for failures when parsing a nucleotide or protein sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSequence {
    /// A character was not recognized as a valid symbol of the alphabet.
    #[error("Invalid character in sequence: '{0}'")]
    InvalidChar(char),
}

/// Error returned when an index is outside the valid range for a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Index {index} out of bounds (len = {len})")]
pub struct OutOfBounds {
    /// The index that was requested
    pub index: usize,

    /// The current length of the sequence (upper bound)
    pub len: usize,
}

/// A three-symbol window that is not a codon of the RNA alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid codon '{codon}' (symbols must be A, C, G or U)")]
pub struct InvalidCodon {
    /// The offending window, lossily decoded for display.
    pub codon: String,
}

impl InvalidCodon {
    /// Build the error from a raw codon window, replacing bytes that are not
    /// valid UTF-8.
    ///
    /// ```
    /// use codondrift_sim::errors::InvalidCodon;
    ///
    /// assert_eq!(InvalidCodon::from_bytes(b"AXG").codon, "AXG");
    /// ```
    pub fn from_bytes(window: &[u8]) -> Self {
        Self {
            codon: String::from_utf8_lossy(window).into_owned(),
        }
    }
}

/// Precondition failures of the core operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DriftError {
    /// Non-positive length, empty sequence, or out-of-range parameter.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A codon window contained a symbol outside {A, C, G, U}.
    #[error(transparent)]
    InvalidCodon(#[from] InvalidCodon),

    /// Two sequences that must be compared position by position differ in length.
    #[error("Sequence length mismatch: {len1} vs {len2}")]
    LengthMismatch { len1: usize, len2: usize },
}

/// Errors that can occur while building a simulation from configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuilderError {
    /// A required parameter is missing
    #[error("Missing required parameter: {0}")]
    MissingRequired(&'static str),

    /// An invalid parameter value was provided
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Setting up the target or starting sequence failed
    #[error("Failed to prepare sequences: {0}")]
    Sequence(#[from] DriftError),
}

/// Errors raised when reading or writing a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] BuilderError),
}
