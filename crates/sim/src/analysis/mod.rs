//! Sequence comparison.

pub mod similarity;

pub use similarity::{
    amino_acid_similarity, nucleotide_similarity, percent_identity, protein_similarity,
    round_half_up, SIMILARITY_PRECISION,
};
