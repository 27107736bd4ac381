//! Translation of RNA into amino acids through the standard genetic code.
//!
//! A sequence is read in consecutive, non-overlapping codons from index 0.
//! A trailing partial codon (one or two bases) is discarded, so a sequence
//! of length `L` translates to `L / 3` residues.

mod codon;

pub use codon::{CodonTable, CODON_LENGTH};

use crate::base::{ProteinSequence, Sequence};
use crate::errors::DriftError;

/// Translate a typed sequence. Cannot fail: every codon of the alphabet is
/// in the table.
pub fn translate(sequence: &Sequence) -> ProteinSequence {
    translate_with(&CodonTable::standard(), sequence)
}

/// Translate a typed sequence with an explicit table.
pub fn translate_with(table: &CodonTable, sequence: &Sequence) -> ProteinSequence {
    sequence.codons().map(|codon| table.get(codon)).collect()
}

/// Translate raw text such as `"AUGGCU"`.
///
/// Fails with [`DriftError::InvalidCodon`] on the first complete window that
/// contains a symbol outside {A, C, G, U}. Symbols in the discarded trailing
/// partial window are not inspected.
pub fn translate_str(text: &str) -> Result<ProteinSequence, DriftError> {
    let table = CodonTable::standard();
    text.as_bytes()
        .chunks_exact(CODON_LENGTH)
        .map(|window| table.lookup(window).map_err(DriftError::from))
        .collect()
}
