//! Aggregation of trial outcomes.
//!
//! [`TrialTally`] is a plain, mergeable accumulator: workers each fill their
//! own and the results are combined with [`TrialTally::merge`]. Similarity
//! scores carry exactly three decimals, so their running sum is kept in
//! integer thousandths and every merge order gives the same total.

use super::trial::TrialOutcome;
use crate::analysis::SIMILARITY_PRECISION;
use chrono::{DateTime, Local};
use std::time::{Duration, Instant};

const SCALE: f64 = 1000.0;
const _: () = assert!(SIMILARITY_PRECISION == 3);

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrialTally {
    pub trials: u64,
    pub matches: u64,
    pub abandoned: u64,
    /// Mutations applied across all trials
    pub mutations: u64,
    /// Sum of generation counts over matched trials
    pub match_generations: u64,
    similarity_thousandths: u64,
    max_similarity: Option<f64>,
}

impl TrialTally {
    pub fn record(&mut self, outcome: &TrialOutcome) {
        self.trials += 1;
        self.mutations += u64::from(outcome.generations());
        match *outcome {
            TrialOutcome::Matched { generations } => {
                self.matches += 1;
                self.match_generations += u64::from(generations);
            }
            TrialOutcome::Abandoned { similarity, .. } => {
                self.abandoned += 1;
                self.similarity_thousandths += (similarity * SCALE).round() as u64;
                self.max_similarity = Some(match self.max_similarity {
                    Some(max) => max.max(similarity),
                    None => similarity,
                });
            }
        }
    }

    /// Combine two tallies. Commutative and associative.
    pub fn merge(self, other: Self) -> Self {
        Self {
            trials: self.trials + other.trials,
            matches: self.matches + other.matches,
            abandoned: self.abandoned + other.abandoned,
            mutations: self.mutations + other.mutations,
            match_generations: self.match_generations + other.match_generations,
            similarity_thousandths: self.similarity_thousandths + other.similarity_thousandths,
            max_similarity: match (self.max_similarity, other.max_similarity) {
                (Some(a), Some(b)) => Some(a.max(b)),
                (a, b) => a.or(b),
            },
        }
    }

    /// Sum of amino-acid similarities over abandoned trials.
    pub fn similarity_sum(&self) -> f64 {
        self.similarity_thousandths as f64 / SCALE
    }

    /// Highest similarity seen at abandonment, if any trial was abandoned.
    pub fn max_similarity(&self) -> Option<f64> {
        self.max_similarity
    }

    /// `similarity_sum / trials`. The divisor counts matched trials too.
    /// `None` when no trials ran.
    pub fn average_similarity(&self) -> Option<f64> {
        (self.trials > 0).then(|| self.similarity_sum() / self.trials as f64)
    }

    pub fn mean_generations_to_match(&self) -> Option<f64> {
        (self.matches > 0).then(|| self.match_generations as f64 / self.matches as f64)
    }
}

/// Accumulator owned by a single simulation run.
#[derive(Debug)]
pub struct AggregateStatistics {
    tally: TrialTally,
    started: Instant,
    started_at: DateTime<Local>,
}

impl AggregateStatistics {
    /// Start the wall clock.
    pub fn start() -> Self {
        Self {
            tally: TrialTally::default(),
            started: Instant::now(),
            started_at: Local::now(),
        }
    }

    pub fn record(&mut self, outcome: &TrialOutcome) {
        self.tally.record(outcome);
    }

    pub fn absorb(&mut self, tally: TrialTally) {
        self.tally = self.tally.merge(tally);
    }

    pub fn tally(&self) -> &TrialTally {
        &self.tally
    }

    /// Stop the clock and produce the end-of-run summary.
    pub fn finish(self) -> Summary {
        let tally = self.tally;
        Summary {
            total_trials: tally.trials,
            matches: tally.matches,
            abandoned: tally.abandoned,
            total_mutations: tally.mutations,
            similarity_sum: tally.similarity_sum(),
            average_similarity: tally.average_similarity(),
            max_similarity: tally.max_similarity(),
            mean_generations_to_match: tally.mean_generations_to_match(),
            started_at: self.started_at,
            finished_at: Local::now(),
            elapsed: self.started.elapsed(),
        }
    }
}

/// End-of-run report.
#[derive(Debug, Clone)]
pub struct Summary {
    pub total_trials: u64,
    pub matches: u64,
    pub abandoned: u64,
    pub total_mutations: u64,
    pub similarity_sum: f64,
    /// Average abandonment similarity over *all* trials; `None` for zero trials
    pub average_similarity: Option<f64>,
    /// `None` when no trial was abandoned
    pub max_similarity: Option<f64>,
    pub mean_generations_to_match: Option<f64>,
    pub started_at: DateTime<Local>,
    pub finished_at: DateTime<Local>,
    pub elapsed: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abandoned(similarity: f64) -> TrialOutcome {
        TrialOutcome::Abandoned {
            generations: 76,
            similarity,
        }
    }

    #[test]
    fn test_empty_tally_has_undefined_averages() {
        let tally = TrialTally::default();
        assert_eq!(tally.trials, 0);
        assert_eq!(tally.average_similarity(), None);
        assert_eq!(tally.max_similarity(), None);
        assert_eq!(tally.mean_generations_to_match(), None);
    }

    #[test]
    fn test_record_outcomes() {
        let mut tally = TrialTally::default();
        tally.record(&abandoned(90.0));
        tally.record(&abandoned(96.0));
        tally.record(&TrialOutcome::Matched { generations: 10 });

        assert_eq!(tally.trials, 3);
        assert_eq!(tally.matches, 1);
        assert_eq!(tally.abandoned, 2);
        assert_eq!(tally.mutations, 76 + 76 + 10);
        assert_eq!(tally.similarity_sum(), 186.0);
        assert_eq!(tally.max_similarity(), Some(96.0));
        // Divisor is every trial, matched ones included
        assert_eq!(tally.average_similarity(), Some(62.0));
        assert_eq!(tally.mean_generations_to_match(), Some(10.0));
    }

    #[test]
    fn test_similarity_sum_is_exact_in_thousandths() {
        let mut tally = TrialTally::default();
        for _ in 0..1000 {
            tally.record(&abandoned(97.333));
        }
        assert_eq!(tally.similarity_sum(), 97333.0);
    }

    #[test]
    fn test_merge_is_order_independent() {
        let scores = [91.111, 95.5, 88.0, 97.959, 93.877];
        let tallies: Vec<TrialTally> = scores
            .iter()
            .map(|&s| {
                let mut t = TrialTally::default();
                t.record(&abandoned(s));
                t
            })
            .collect();

        let forward = tallies
            .iter()
            .fold(TrialTally::default(), |acc, t| acc.merge(*t));
        let backward = tallies
            .iter()
            .rev()
            .fold(TrialTally::default(), |acc, t| acc.merge(*t));

        assert_eq!(forward, backward);
        assert_eq!(forward.max_similarity(), Some(97.959));
    }

    #[test]
    fn test_merge_with_empty_is_identity() {
        let mut t = TrialTally::default();
        t.record(&abandoned(50.0));
        assert_eq!(t.merge(TrialTally::default()), t);
        assert_eq!(TrialTally::default().merge(t), t);
    }

    #[test]
    fn test_aggregate_finish() {
        let mut stats = AggregateStatistics::start();
        stats.record(&abandoned(80.0));
        let mut other = TrialTally::default();
        other.record(&TrialOutcome::Matched { generations: 3 });
        stats.absorb(other);

        let summary = stats.finish();
        assert_eq!(summary.total_trials, 2);
        assert_eq!(summary.matches, 1);
        assert_eq!(summary.average_similarity, Some(40.0));
        assert_eq!(summary.max_similarity, Some(80.0));
        assert!(summary.finished_at >= summary.started_at);
    }

    #[test]
    fn test_aggregate_zero_trials() {
        let summary = AggregateStatistics::start().finish();
        assert_eq!(summary.total_trials, 0);
        assert_eq!(summary.matches, 0);
        assert_eq!(summary.average_similarity, None);
    }
}
