use super::Nucleotide;
use crate::errors::{DriftError, InvalidSequence, OutOfBounds};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Fixed-length RNA sequence backed by a vector of Nucleotides.
///
/// The only in-place edit is [`Sequence::set`], a single-base substitution,
/// so a sequence keeps the length it was created with. The target of a
/// simulation is held immutably; the working copy is edited through `set`.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Sequence(Vec<Nucleotide>);

impl Clone for Sequence {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }

    /// Reuses the existing allocation; trials reset their working copy this way.
    fn clone_from(&mut self, source: &Self) {
        self.0.clone_from(&source.0);
    }
}

impl Sequence {
    /// Create a `Sequence` from a vector of `Nucleotide`s.
    pub fn from_nucleotides(nucleotides: Vec<Nucleotide>) -> Self {
        Self(nucleotides)
    }

    /// Generate `length` bases, each drawn uniformly from {A, C, G, U}.
    ///
    /// Example:
    ///
    /// ```rust
    /// # use codondrift_sim::base::Sequence;
    /// use rand::SeedableRng;
    /// use rand_xoshiro::Xoshiro256PlusPlus;
    ///
    /// let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
    /// let seq = Sequence::random(150, &mut rng).unwrap();
    /// assert_eq!(seq.len(), 150);
    /// assert!(Sequence::random(0, &mut rng).is_err());
    /// ```
    pub fn random<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Result<Self, DriftError> {
        if length == 0 {
            return Err(DriftError::InvalidArgument(
                "sequence length must be positive".into(),
            ));
        }
        Ok(Self((0..length).map(|_| Nucleotide::random(rng)).collect()))
    }

    /// Return the length of the sequence in bases.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if the sequence contains no bases.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the `Nucleotide` at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Nucleotide> {
        self.0.get(index).copied()
    }

    /// Set the base at `index` to `base`.
    ///
    /// Returns `OutOfBounds` if `index` is greater than or equal to the
    /// sequence length.
    #[inline]
    pub fn set(&mut self, index: usize, base: Nucleotide) -> Result<(), OutOfBounds> {
        let len = self.len();
        self.0
            .get_mut(index)
            .map(|slot| *slot = base)
            .ok_or(OutOfBounds { index, len })
    }

    /// Borrow the underlying `Nucleotide` slice.
    #[inline]
    pub fn as_slice(&self) -> &[Nucleotide] {
        &self.0
    }

    /// Iterate over complete codons (windows of three bases starting at 0).
    /// A trailing partial window is not yielded.
    #[inline]
    pub fn codons(&self) -> impl ExactSizeIterator<Item = [Nucleotide; 3]> + '_ {
        self.0.chunks_exact(3).map(|w| [w[0], w[1], w[2]])
    }

    /// Number of differing positions against a sequence of the same length.
    pub fn mismatches(&self, other: &Sequence) -> Result<usize, DriftError> {
        if self.len() != other.len() {
            return Err(DriftError::LengthMismatch {
                len1: self.len(),
                len2: other.len(),
            });
        }
        Ok(self
            .0
            .iter()
            .zip(other.0.iter())
            .filter(|(a, b)| a != b)
            .count())
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &nuc in &self.0 {
            write!(f, "{}", nuc.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Sequence {
    type Err = InvalidSequence;

    /// Parse a textual representation (e.g. "ACGU") into a `Sequence`.
    ///
    /// Characters outside the RNA alphabet produce an `InvalidSequence`
    /// error. Parsing is case-insensitive for ASCII letters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let data: Result<Vec<Nucleotide>, _> = s
            .chars()
            .map(|c| {
                u8::try_from(c)
                    .ok()
                    .and_then(Nucleotide::from_ascii)
                    .ok_or(InvalidSequence::InvalidChar(c))
            })
            .collect();

        Ok(Self(data?))
    }
}
