//! Point substitutions on RNA sequences.
//!
//! The mutation model is a single-base substitution: pick a position
//! uniformly, then pick a replacement base uniformly among the three bases
//! that differ from the current one. The replacement is found by rejection
//! sampling (redraw from all four bases until the draw differs), which keeps
//! the choice exactly uniform over the three alternatives. No insertions or
//! deletions are modelled, so sequence length never changes.

use crate::base::{Nucleotide, Sequence};
use crate::errors::DriftError;
use rand::Rng;

/// Record of one applied substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Substitution {
    pub position: usize,
    pub from: Nucleotide,
    pub to: Nucleotide,
}

/// Draw a base uniformly from the alphabet, redrawing until it differs from
/// `current`. Expected number of draws is 4/3.
#[inline]
pub fn different_base<R: Rng + ?Sized>(current: Nucleotide, rng: &mut R) -> Nucleotide {
    loop {
        let candidate = Nucleotide::random(rng);
        if candidate != current {
            return candidate;
        }
    }
}

/// Substitute one base of `sequence` in place.
///
/// Exactly one position changes on every call, and it always changes to a
/// different base.
///
/// # Errors
/// [`DriftError::InvalidArgument`] if the sequence is empty.
pub fn mutate<R: Rng + ?Sized>(
    sequence: &mut Sequence,
    rng: &mut R,
) -> Result<Substitution, DriftError> {
    let len = sequence.len();
    if len == 0 {
        return Err(DriftError::InvalidArgument(
            "cannot mutate an empty sequence".into(),
        ));
    }

    let position = rng.random_range(0..len);
    let from = sequence
        .get(position)
        .ok_or_else(|| {
            DriftError::InvalidArgument(format!(
                "position {position} out of range for length {len}"
            ))
        })?;
    let to = different_base(from, rng);
    sequence
        .set(position, to)
        .map_err(|e| DriftError::InvalidArgument(e.to_string()))?;

    Ok(Substitution { position, from, to })
}

/// Number of `mutate` calls `diverge` makes: `round(percent / 100 * length)`,
/// rounding halves up.
///
/// # Errors
/// [`DriftError::InvalidArgument`] if `percent_different` is not a finite
/// value within [0, 100].
pub fn substitution_count(length: usize, percent_different: f64) -> Result<usize, DriftError> {
    if !percent_different.is_finite() || !(0.0..=100.0).contains(&percent_different) {
        return Err(DriftError::InvalidArgument(format!(
            "percent difference {percent_different} must be within [0, 100]"
        )));
    }
    Ok((percent_different / 100.0 * length as f64 + 0.5).floor() as usize)
}

/// Apply `substitution_count(len, percent_different)` independent
/// substitutions to `sequence`.
///
/// Positions are drawn independently, so the same position can be hit more
/// than once and the realised divergence from the input can be lower than the
/// nominal percentage (a later hit may even restore the original base).
/// Returns the substitutions in the order they were applied.
///
/// # Errors
/// [`DriftError::InvalidArgument`] for an out-of-range percentage, or for an
/// empty sequence when at least one substitution is requested.
pub fn diverge<R: Rng + ?Sized>(
    sequence: &mut Sequence,
    percent_different: f64,
    rng: &mut R,
) -> Result<Vec<Substitution>, DriftError> {
    let count = substitution_count(sequence.len(), percent_different)?;
    (0..count).map(|_| mutate(sequence, rng)).collect()
}
