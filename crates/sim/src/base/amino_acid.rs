use crate::errors::InvalidSequence;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the 20 standard amino acids, or the stop marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum AminoAcid {
    Ala,
    Arg,
    Asn,
    Asp,
    Cys,
    Gln,
    Glu,
    Gly,
    His,
    Ile,
    Leu,
    Lys,
    Met,
    Phe,
    Pro,
    Ser,
    Thr,
    Trp,
    Tyr,
    Val,
    /// Translation terminator, written `*`.
    Stop,
}

impl AminoAcid {
    /// The 20 standard residues, alphabetical by one-letter code. `Stop` is
    /// not included.
    pub const STANDARD: [AminoAcid; 20] = [
        Self::Ala,
        Self::Cys,
        Self::Asp,
        Self::Glu,
        Self::Phe,
        Self::Gly,
        Self::His,
        Self::Ile,
        Self::Lys,
        Self::Leu,
        Self::Met,
        Self::Asn,
        Self::Pro,
        Self::Gln,
        Self::Arg,
        Self::Ser,
        Self::Thr,
        Self::Val,
        Self::Trp,
        Self::Tyr,
    ];

    /// IUPAC one-letter code (`*` for stop).
    pub const fn to_char(self) -> char {
        match self {
            Self::Ala => 'A',
            Self::Arg => 'R',
            Self::Asn => 'N',
            Self::Asp => 'D',
            Self::Cys => 'C',
            Self::Gln => 'Q',
            Self::Glu => 'E',
            Self::Gly => 'G',
            Self::His => 'H',
            Self::Ile => 'I',
            Self::Leu => 'L',
            Self::Lys => 'K',
            Self::Met => 'M',
            Self::Phe => 'F',
            Self::Pro => 'P',
            Self::Ser => 'S',
            Self::Thr => 'T',
            Self::Trp => 'W',
            Self::Tyr => 'Y',
            Self::Val => 'V',
            Self::Stop => '*',
        }
    }

    /// Parse a one-letter code. Accepts lowercase.
    pub const fn from_char(c: char) -> Option<Self> {
        Some(match c.to_ascii_uppercase() {
            'A' => Self::Ala,
            'R' => Self::Arg,
            'N' => Self::Asn,
            'D' => Self::Asp,
            'C' => Self::Cys,
            'Q' => Self::Gln,
            'E' => Self::Glu,
            'G' => Self::Gly,
            'H' => Self::His,
            'I' => Self::Ile,
            'L' => Self::Leu,
            'K' => Self::Lys,
            'M' => Self::Met,
            'F' => Self::Phe,
            'P' => Self::Pro,
            'S' => Self::Ser,
            'T' => Self::Thr,
            'W' => Self::Trp,
            'Y' => Self::Tyr,
            'V' => Self::Val,
            '*' => Self::Stop,
            _ => return None,
        })
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Ala => "Alanine",
            Self::Arg => "Arginine",
            Self::Asn => "Asparagine",
            Self::Asp => "Aspartic acid",
            Self::Cys => "Cysteine",
            Self::Gln => "Glutamine",
            Self::Glu => "Glutamic acid",
            Self::Gly => "Glycine",
            Self::His => "Histidine",
            Self::Ile => "Isoleucine",
            Self::Leu => "Leucine",
            Self::Lys => "Lysine",
            Self::Met => "Methionine",
            Self::Phe => "Phenylalanine",
            Self::Pro => "Proline",
            Self::Ser => "Serine",
            Self::Thr => "Threonine",
            Self::Trp => "Tryptophan",
            Self::Tyr => "Tyrosine",
            Self::Val => "Valine",
            Self::Stop => "Stop",
        }
    }

    #[inline(always)]
    pub const fn is_stop(self) -> bool {
        matches!(self, Self::Stop)
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Amino-acid sequence produced by translation.
///
/// Always derived from a nucleotide [`Sequence`](super::Sequence) and never
/// edited afterwards; to follow a mutated sequence, translate it again.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ProteinSequence(Vec<AminoAcid>);

impl ProteinSequence {
    /// Random protein of `length` residues drawn uniformly from the 20
    /// standard amino acids (never a stop).
    pub fn random<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Self {
        Self(
            (0..length)
                .map(|_| AminoAcid::STANDARD[rng.random_range(0..AminoAcid::STANDARD.len())])
                .collect(),
        )
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[AminoAcid] {
        &self.0
    }
}

impl FromIterator<AminoAcid> for ProteinSequence {
    fn from_iter<I: IntoIterator<Item = AminoAcid>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for ProteinSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for aa in &self.0 {
            write!(f, "{}", aa.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for ProteinSequence {
    type Err = InvalidSequence;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| AminoAcid::from_char(c).ok_or(InvalidSequence::InvalidChar(c)))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;
    use std::collections::HashSet;

    #[test]
    fn test_char_codes_round_trip() {
        for aa in AminoAcid::STANDARD.iter().chain([AminoAcid::Stop].iter()) {
            assert_eq!(AminoAcid::from_char(aa.to_char()), Some(*aa));
        }
        assert_eq!(AminoAcid::from_char('m'), Some(AminoAcid::Met));
        assert_eq!(AminoAcid::from_char('B'), None);
    }

    #[test]
    fn test_standard_residues_are_distinct() {
        let codes: HashSet<char> = AminoAcid::STANDARD.iter().map(|a| a.to_char()).collect();
        assert_eq!(codes.len(), 20);
        assert!(!codes.contains(&'*'));
    }

    #[test]
    fn test_names() {
        assert_eq!(AminoAcid::Trp.name(), "Tryptophan");
        assert!(AminoAcid::Stop.is_stop());
        assert!(!AminoAcid::Met.is_stop());
    }

    #[test]
    fn test_protein_from_str() {
        let p = ProteinSequence::from_str("MA*").unwrap();
        assert_eq!(p.len(), 3);
        assert_eq!(p.to_string(), "MA*");
        assert_eq!(
            ProteinSequence::from_str("MXA"),
            Err(InvalidSequence::InvalidChar('X'))
        );
    }

    #[test]
    fn test_random_protein_has_no_stop() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(9);
        let p = ProteinSequence::random(500, &mut rng);
        assert_eq!(p.len(), 500);
        assert!(p.as_slice().iter().all(|aa| !aa.is_stop()));
    }
}
