//! Percent identity between equal-length sequences.
//!
//! Scores are percentages rounded half-up to [`SIMILARITY_PRECISION`]
//! decimal places. The same scorer serves nucleotide sequences directly and
//! amino-acid sequences after translation.

use crate::base::{ProteinSequence, Sequence};
use crate::errors::DriftError;
use crate::translation::translate;

/// Decimal places kept in every similarity score.
pub const SIMILARITY_PRECISION: u32 = 3;

/// Round `value` to `precision` decimal places, halves rounding up.
#[inline]
pub fn round_half_up(value: f64, precision: u32) -> f64 {
    let scale = 10f64.powi(precision as i32);
    (value * scale + 0.5).floor() / scale
}

/// Percentage of positions at which `a` and `b` hold the same symbol.
///
/// # Errors
/// - [`DriftError::LengthMismatch`] if the slices differ in length.
/// - [`DriftError::InvalidArgument`] if both are empty (identity is
///   undefined without positions to compare).
pub fn percent_identity<T: PartialEq>(a: &[T], b: &[T]) -> Result<f64, DriftError> {
    if a.len() != b.len() {
        return Err(DriftError::LengthMismatch {
            len1: a.len(),
            len2: b.len(),
        });
    }
    if a.is_empty() {
        return Err(DriftError::InvalidArgument(
            "cannot score identity of empty sequences".into(),
        ));
    }

    let matches = a.iter().zip(b).filter(|(x, y)| x == y).count();
    let pct = matches as f64 / a.len() as f64 * 100.0;
    Ok(round_half_up(pct, SIMILARITY_PRECISION))
}

/// Identity of two nucleotide sequences.
pub fn nucleotide_similarity(a: &Sequence, b: &Sequence) -> Result<f64, DriftError> {
    percent_identity(a.as_slice(), b.as_slice())
}

/// Identity of two already-translated protein sequences.
pub fn protein_similarity(a: &ProteinSequence, b: &ProteinSequence) -> Result<f64, DriftError> {
    percent_identity(a.as_slice(), b.as_slice())
}

/// Identity of the translations of two nucleotide sequences.
pub fn amino_acid_similarity(a: &Sequence, b: &Sequence) -> Result<f64, DriftError> {
    if a.len() != b.len() {
        return Err(DriftError::LengthMismatch {
            len1: a.len(),
            len2: b.len(),
        });
    }
    protein_similarity(&translate(a), &translate(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;
    use std::str::FromStr;

    fn seq(s: &str) -> Sequence {
        Sequence::from_str(s).unwrap()
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(97.3333333, 3), 97.333);
        assert_eq!(round_half_up(66.6666666, 3), 66.667);
        assert_eq!(round_half_up(12.0625, 3), 12.063);
        assert_eq!(round_half_up(100.0, 3), 100.0);
        assert_eq!(round_half_up(0.0, 3), 0.0);
    }

    #[test]
    fn test_identity_with_self_is_100() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let a = Sequence::random(150, &mut rng).unwrap();
        assert_eq!(nucleotide_similarity(&a, &a).unwrap(), 100.0);
        assert_eq!(amino_acid_similarity(&a, &a).unwrap(), 100.0);
    }

    #[test]
    fn test_identity_is_symmetric() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        for _ in 0..50 {
            let a = Sequence::random(99, &mut rng).unwrap();
            let b = Sequence::random(99, &mut rng).unwrap();
            assert_eq!(
                nucleotide_similarity(&a, &b).unwrap(),
                nucleotide_similarity(&b, &a).unwrap()
            );
            assert_eq!(
                amino_acid_similarity(&a, &b).unwrap(),
                amino_acid_similarity(&b, &a).unwrap()
            );
        }
    }

    #[test]
    fn test_identity_values() {
        assert_eq!(nucleotide_similarity(&seq("AAAA"), &seq("AAAC")).unwrap(), 75.0);
        assert_eq!(nucleotide_similarity(&seq("AAA"), &seq("ACC")).unwrap(), 33.333);
        assert_eq!(nucleotide_similarity(&seq("AAA"), &seq("CCA")).unwrap(), 33.333);
        assert_eq!(nucleotide_similarity(&seq("AAA"), &seq("ACA")).unwrap(), 66.667);
        assert_eq!(nucleotide_similarity(&seq("ACGU"), &seq("UGCA")).unwrap(), 0.0);
    }

    #[test]
    fn test_synonymous_change_keeps_amino_acid_identity() {
        // CUU and CUC both encode leucine
        let a = seq("AUGCUU");
        let b = seq("AUGCUC");
        assert_eq!(nucleotide_similarity(&a, &b).unwrap(), 83.333);
        assert_eq!(amino_acid_similarity(&a, &b).unwrap(), 100.0);
    }

    #[test]
    fn test_amino_acid_similarity_ignores_partial_codon() {
        let a = seq("AUGGCUA");
        let b = seq("AUGGCUC");
        assert_eq!(amino_acid_similarity(&a, &b).unwrap(), 100.0);
    }

    #[test]
    fn test_length_mismatch() {
        assert_eq!(
            nucleotide_similarity(&seq("AAA"), &seq("AAAA")),
            Err(DriftError::LengthMismatch { len1: 3, len2: 4 })
        );
        assert!(matches!(
            amino_acid_similarity(&seq("AAAAAA"), &seq("AAA")),
            Err(DriftError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_empty_sequences_are_rejected() {
        assert!(matches!(
            nucleotide_similarity(&seq(""), &seq("")),
            Err(DriftError::InvalidArgument(_))
        ));
        // Two bases translate to nothing
        assert!(matches!(
            amino_acid_similarity(&seq("AU"), &seq("AU")),
            Err(DriftError::InvalidArgument(_))
        ));
    }
}
