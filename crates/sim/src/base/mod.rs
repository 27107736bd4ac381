//! Base types for sequence representation.
//!
//! This module provides the foundational types for representing RNA
//! nucleotides, amino acids, and the sequences built from them.

mod amino_acid;
mod nucleotide;
mod sequence;

pub use amino_acid::{AminoAcid, ProteinSequence};
pub use nucleotide::Nucleotide;
pub use sequence::Sequence;
