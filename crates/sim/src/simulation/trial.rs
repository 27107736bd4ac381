//! A single trial: a bounded random walk from the starting copy toward the target.
//!
//! ```text
//! Mutating(1) --mutate--> working == target       => Matched(g)
//!                         g > generation_cap      => Abandoned(g)
//!                         otherwise               => Mutating(g + 1)
//! ```
//!
//! A trial therefore performs at most `generation_cap + 1` mutations.

use crate::analysis::protein_similarity;
use crate::base::{ProteinSequence, Sequence};
use crate::errors::DriftError;
use crate::evolution::mutate;
use crate::translation::translate;
use rand::Rng;

/// State of one trial's random walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialState {
    /// About to apply the mutation for this generation
    Mutating(u32),
    /// The working copy equals the target after this generation
    Matched(u32),
    /// The generation cap was exceeded without a match
    Abandoned(u32),
}

impl TrialState {
    pub const INITIAL: Self = Self::Mutating(1);

    pub fn generation(self) -> u32 {
        match self {
            Self::Mutating(g) | Self::Matched(g) | Self::Abandoned(g) => g,
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Mutating(_))
    }

    /// Apply one generation. Terminal states are returned unchanged and do
    /// not touch `working`.
    pub fn advance<R: Rng + ?Sized>(
        self,
        working: &mut Sequence,
        target: &Sequence,
        generation_cap: u32,
        rng: &mut R,
    ) -> Result<Self, DriftError> {
        let Self::Mutating(generation) = self else {
            return Ok(self);
        };

        mutate(working, rng)?;
        Ok(if working == target {
            Self::Matched(generation)
        } else if generation > generation_cap {
            Self::Abandoned(generation)
        } else {
            // Out of generation numbers counts as exceeding the cap
            generation
                .checked_add(1)
                .map_or(Self::Abandoned(generation), Self::Mutating)
        })
    }
}

/// Result of a finished trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrialOutcome {
    Matched {
        generations: u32,
    },
    Abandoned {
        generations: u32,
        /// Amino-acid identity between target and working copy at abandonment
        similarity: f64,
    },
}

impl TrialOutcome {
    /// Mutations applied during the trial (one per generation).
    pub fn generations(&self) -> u32 {
        match *self {
            Self::Matched { generations } | Self::Abandoned { generations, .. } => generations,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }
}

/// The fixed inputs every trial of a simulation shares.
#[derive(Debug, Clone, Copy)]
pub struct TrialContext<'a> {
    target: &'a Sequence,
    target_protein: &'a ProteinSequence,
    start: &'a Sequence,
    generation_cap: u32,
}

impl<'a> TrialContext<'a> {
    /// `target_protein` must be the translation of `target`.
    pub fn new(
        target: &'a Sequence,
        target_protein: &'a ProteinSequence,
        start: &'a Sequence,
        generation_cap: u32,
    ) -> Self {
        Self {
            target,
            target_protein,
            start,
            generation_cap,
        }
    }

    pub fn start(&self) -> &'a Sequence {
        self.start
    }

    /// Run one trial on `working`, which must hold the starting sequence.
    ///
    /// Whatever the outcome, `working` is reset to the starting sequence
    /// before returning, so consecutive trials all begin from the same point.
    pub fn run<R: Rng + ?Sized>(
        &self,
        working: &mut Sequence,
        rng: &mut R,
    ) -> Result<TrialOutcome, DriftError> {
        let mut state = TrialState::INITIAL;
        let outcome = loop {
            state = state.advance(working, self.target, self.generation_cap, rng)?;
            match state {
                TrialState::Mutating(_) => continue,
                TrialState::Matched(generations) => break TrialOutcome::Matched { generations },
                TrialState::Abandoned(generations) => {
                    let similarity = protein_similarity(self.target_protein, &translate(working))?;
                    break TrialOutcome::Abandoned {
                        generations,
                        similarity,
                    };
                }
            }
        };

        working.clone_from(self.start);
        Ok(outcome)
    }
}
