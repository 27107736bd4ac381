//! The standard genetic code as a fixed lookup table.

use crate::base::{AminoAcid, Nucleotide};
use crate::errors::InvalidCodon;

use AminoAcid::*;

/// Number of bases in a codon.
pub const CODON_LENGTH: usize = 3;

/// Standard RNA codon table.
///
/// Indexed by `16 * first + 4 * second + third` using the nucleotide indices
/// A=0, C=1, G=2, U=3, so row order is AAA, AAC, AAG, AAU, ACA, ...
const STANDARD_CODE: [AminoAcid; 64] = [
    // A--
    Lys, Asn, Lys, Asn, // AA[ACGU]
    Thr, Thr, Thr, Thr, // AC[ACGU]
    Arg, Ser, Arg, Ser, // AG[ACGU]
    Ile, Ile, Met, Ile, // AU[ACGU]
    // C--
    Gln, His, Gln, His, // CA[ACGU]
    Pro, Pro, Pro, Pro, // CC[ACGU]
    Arg, Arg, Arg, Arg, // CG[ACGU]
    Leu, Leu, Leu, Leu, // CU[ACGU]
    // G--
    Glu, Asp, Glu, Asp, // GA[ACGU]
    Ala, Ala, Ala, Ala, // GC[ACGU]
    Gly, Gly, Gly, Gly, // GG[ACGU]
    Val, Val, Val, Val, // GU[ACGU]
    // U--
    Stop, Tyr, Stop, Tyr, // UA[ACGU]
    Ser, Ser, Ser, Ser, // UC[ACGU]
    Stop, Cys, Trp, Cys, // UG[ACGU]
    Leu, Phe, Leu, Phe, // UU[ACGU]
];

/// Immutable codon to amino-acid mapping.
///
/// The table is a `'static` array, so a `CodonTable` is a zero-cost handle
/// that can be copied into every worker.
#[derive(Debug, Clone, Copy)]
pub struct CodonTable {
    table: &'static [AminoAcid; 64],
}

impl Default for CodonTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl CodonTable {
    /// The standard genetic code.
    pub const fn standard() -> Self {
        Self {
            table: &STANDARD_CODE,
        }
    }

    #[inline(always)]
    const fn index(codon: [Nucleotide; 3]) -> usize {
        (codon[0].to_index() as usize) * 16
            + (codon[1].to_index() as usize) * 4
            + codon[2].to_index() as usize
    }

    /// Look up a typed codon. Every one of the 64 codons has an entry.
    #[inline(always)]
    pub fn get(&self, codon: [Nucleotide; 3]) -> AminoAcid {
        self.table[Self::index(codon)]
    }

    /// Look up a codon given as text, e.g. `b"AUG"`.
    ///
    /// Fails with [`InvalidCodon`] if the window is not three symbols from
    /// {A, C, G, U} (lowercase accepted).
    pub fn lookup(&self, codon: &[u8]) -> Result<AminoAcid, InvalidCodon> {
        let [a, b, c] = codon else {
            return Err(InvalidCodon::from_bytes(codon));
        };
        match (
            Nucleotide::from_ascii(*a),
            Nucleotide::from_ascii(*b),
            Nucleotide::from_ascii(*c),
        ) {
            (Some(a), Some(b), Some(c)) => Ok(self.get([a, b, c])),
            _ => Err(InvalidCodon::from_bytes(codon)),
        }
    }

    /// All codons that encode `amino_acid`, in table order.
    pub fn codons_for(&self, amino_acid: AminoAcid) -> Vec<[Nucleotide; 3]> {
        let mut codons = Vec::new();
        for a in Nucleotide::ALL {
            for b in Nucleotide::ALL {
                for c in Nucleotide::ALL {
                    if self.get([a, b, c]) == amino_acid {
                        codons.push([a, b, c]);
                    }
                }
            }
        }
        codons
    }
}
