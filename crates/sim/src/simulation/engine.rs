//! Simulation engine.
//!
//! Owns the target, the fixed starting copy and the random number generator,
//! and drives trials either sequentially or on the rayon thread pool.

use super::configs::Configuration;
use super::progress::{ProgressMonitor, ProgressObserver};
use super::statistics::{AggregateStatistics, Summary, TrialTally};
use super::trial::TrialContext;
use crate::analysis::{nucleotide_similarity, protein_similarity};
use crate::base::{ProteinSequence, Sequence};
use crate::errors::{BuilderError, DriftError};
use crate::evolution::{diverge, Substitution};
use crate::translation::translate;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;

/// Trials handed to a worker at a time. Parallel runs draw one RNG seed per
/// chunk, so results for a given seed do not depend on the thread count.
pub const TRIAL_CHUNK: u64 = 16_384;

/// The comparison printed before a run starts.
#[derive(Debug, Clone)]
pub struct SetupReport {
    pub target: Sequence,
    pub copy: Sequence,
    pub nucleotide_similarity: f64,
    pub target_protein: ProteinSequence,
    pub copy_protein: ProteinSequence,
    pub amino_acid_similarity: f64,
}

/// Main simulation engine.
#[derive(Debug)]
pub struct Simulation {
    config: Configuration,
    /// Never mutated after construction
    target: Sequence,
    target_protein: ProteinSequence,
    /// Post-divergence copy every trial starts from
    start: Sequence,
    divergence: Vec<Substitution>,
    rng: Xoshiro256PlusPlus,
}

fn seeded_rng(seed: Option<u64>) -> Xoshiro256PlusPlus {
    match seed {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_seed(rand::rng().random()),
    }
}

impl Simulation {
    /// Generate a random target of the configured length and derive the
    /// starting copy from it.
    pub fn new(config: Configuration) -> Result<Self, BuilderError> {
        config.validate()?;
        let mut rng = seeded_rng(config.execution.seed);
        let target = Sequence::random(config.sequence.length, &mut rng)?;
        Self::diverged(config, target, rng)
    }

    /// Use a given target and derive the starting copy from it.
    /// The configured sequence length is replaced by the target's length.
    pub fn from_target(mut config: Configuration, target: Sequence) -> Result<Self, BuilderError> {
        config.sequence.length = target.len();
        config.validate()?;
        let rng = seeded_rng(config.execution.seed);
        Self::diverged(config, target, rng)
    }

    /// Use a given target and starting copy as-is.
    pub fn from_sequences(
        mut config: Configuration,
        target: Sequence,
        start: Sequence,
    ) -> Result<Self, BuilderError> {
        if target.len() != start.len() {
            return Err(DriftError::LengthMismatch {
                len1: target.len(),
                len2: start.len(),
            }
            .into());
        }
        config.sequence.length = target.len();
        config.validate()?;
        let rng = seeded_rng(config.execution.seed);
        Ok(Self::assemble(config, target, start, Vec::new(), rng))
    }

    fn diverged(
        config: Configuration,
        target: Sequence,
        mut rng: Xoshiro256PlusPlus,
    ) -> Result<Self, BuilderError> {
        let mut start = target.clone();
        let divergence = diverge(&mut start, config.sequence.percent_divergence, &mut rng)?;
        Ok(Self::assemble(config, target, start, divergence, rng))
    }

    fn assemble(
        config: Configuration,
        target: Sequence,
        start: Sequence,
        divergence: Vec<Substitution>,
        rng: Xoshiro256PlusPlus,
    ) -> Self {
        log::info!(
            "Prepared target of {} bases; starting copy derived with {} substitutions",
            target.len(),
            divergence.len()
        );
        let target_protein = translate(&target);
        Self {
            config,
            target,
            target_protein,
            start,
            divergence,
            rng,
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn target(&self) -> &Sequence {
        &self.target
    }

    pub fn target_protein(&self) -> &ProteinSequence {
        &self.target_protein
    }

    /// The starting sequence shared by every trial.
    pub fn start(&self) -> &Sequence {
        &self.start
    }

    /// Substitutions applied to derive the starting copy (empty if it was supplied).
    pub fn divergence(&self) -> &[Substitution] {
        &self.divergence
    }

    /// Compare target and starting copy at both levels.
    pub fn setup_report(&self) -> Result<SetupReport, DriftError> {
        let copy_protein = translate(&self.start);
        Ok(SetupReport {
            target: self.target.clone(),
            copy: self.start.clone(),
            nucleotide_similarity: nucleotide_similarity(&self.target, &self.start)?,
            amino_acid_similarity: protein_similarity(&self.target_protein, &copy_protein)?,
            target_protein: self.target_protein.clone(),
            copy_protein,
        })
    }

    /// Run all configured trials, in parallel if the configuration asks for it.
    pub fn run(&mut self, observer: &dyn ProgressObserver) -> Result<Summary, DriftError> {
        if self.config.execution.parallel {
            self.run_parallel(observer)
        } else {
            self.run_sequential(observer)
        }
    }

    /// Run every trial on the calling thread with the simulation's generator.
    pub fn run_sequential(
        &mut self,
        observer: &dyn ProgressObserver,
    ) -> Result<Summary, DriftError> {
        let exec = &self.config.execution;
        let ctx = TrialContext::new(
            &self.target,
            &self.target_protein,
            &self.start,
            exec.generation_cap,
        );
        let monitor = ProgressMonitor::new(exec.progress_interval);
        let mut stats = AggregateStatistics::start();
        let mut working = self.start.clone();

        log::info!("Running {} trials sequentially", exec.trials);
        for chunk in 0..exec.trials.div_ceil(TRIAL_CHUNK) {
            let trials = chunk_len(chunk, exec.trials);
            let tally = run_chunk(&ctx, trials, &mut working, &mut self.rng)?;
            monitor.record(tally.mutations, observer);
            observer.on_trials_completed(trials);
            stats.absorb(tally);
        }

        Ok(stats.finish())
    }

    /// Run trials on the rayon pool. Each chunk gets its own generator seeded
    /// from the simulation's generator and its own working copy; chunk
    /// tallies are combined by reduction.
    pub fn run_parallel(&mut self, observer: &dyn ProgressObserver) -> Result<Summary, DriftError> {
        let exec = &self.config.execution;
        let total = exec.trials;
        let seeds: Vec<u64> = (0..total.div_ceil(TRIAL_CHUNK))
            .map(|_| self.rng.random())
            .collect();
        let ctx = TrialContext::new(
            &self.target,
            &self.target_protein,
            &self.start,
            exec.generation_cap,
        );
        let monitor = ProgressMonitor::new(exec.progress_interval);
        let mut stats = AggregateStatistics::start();

        log::info!(
            "Running {total} trials in {} chunks on {} threads",
            seeds.len(),
            rayon::current_num_threads()
        );
        let tally = seeds
            .par_iter()
            .enumerate()
            .map(|(chunk, &seed)| -> Result<TrialTally, DriftError> {
                let mut local_rng = Xoshiro256PlusPlus::seed_from_u64(seed);
                let mut working = ctx.start().clone();
                let trials = chunk_len(chunk as u64, total);
                let tally = run_chunk(&ctx, trials, &mut working, &mut local_rng)?;
                monitor.record(tally.mutations, observer);
                observer.on_trials_completed(trials);
                Ok(tally)
            })
            .try_reduce(TrialTally::default, |a, b| Ok(a.merge(b)))?;

        stats.absorb(tally);
        Ok(stats.finish())
    }
}

/// Number of trials in chunk `index` of a run of `total` trials.
fn chunk_len(index: u64, total: u64) -> u64 {
    (total - index * TRIAL_CHUNK).min(TRIAL_CHUNK)
}

fn run_chunk<R: Rng + ?Sized>(
    ctx: &TrialContext<'_>,
    trials: u64,
    working: &mut Sequence,
    rng: &mut R,
) -> Result<TrialTally, DriftError> {
    let mut tally = TrialTally::default();
    for _ in 0..trials {
        tally.record(&ctx.run(working, rng)?);
    }
    log::debug!(
        "Chunk done: {} trials, {} matches, {} mutations",
        tally.trials,
        tally.matches,
        tally.mutations
    );
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::progress::NoProgress;
    use crate::simulation::SimulationBuilder;
    use std::str::FromStr;

    fn small_config(trials: u64, seed: u64) -> Configuration {
        let mut config = Configuration::default();
        config.sequence.length = 30;
        config.sequence.percent_divergence = 10.0;
        config.execution.trials = trials;
        config.execution.seed = Some(seed);
        config
    }

    #[test]
    fn test_new_prepares_sequences() {
        let sim = Simulation::new(small_config(1, 42)).unwrap();
        assert_eq!(sim.target().len(), 30);
        assert_eq!(sim.start().len(), 30);
        assert_eq!(sim.divergence().len(), 3);
        assert_eq!(sim.target_protein().len(), 10);
        assert!(sim.target().mismatches(sim.start()).unwrap() <= 3);
    }

    #[test]
    fn test_new_is_reproducible() {
        let a = Simulation::new(small_config(1, 7)).unwrap();
        let b = Simulation::new(small_config(1, 7)).unwrap();
        assert_eq!(a.target(), b.target());
        assert_eq!(a.start(), b.start());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = small_config(1, 1);
        config.sequence.length = 2;
        assert!(matches!(
            Simulation::new(config),
            Err(BuilderError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_from_sequences_length_mismatch() {
        let target = Sequence::from_str("AUGAUG").unwrap();
        let start = Sequence::from_str("AUG").unwrap();
        assert!(matches!(
            Simulation::from_sequences(small_config(1, 1), target, start),
            Err(BuilderError::Sequence(DriftError::LengthMismatch { .. }))
        ));
    }

    #[test]
    fn test_setup_report() {
        let sim = Simulation::new(small_config(1, 3)).unwrap();
        let report = sim.setup_report().unwrap();
        assert_eq!(report.target.to_string(), sim.target().to_string());
        assert_eq!(report.copy.to_string(), sim.start().to_string());
        assert_eq!(report.target_protein.len(), 10);
        assert!(report.nucleotide_similarity >= 90.0);
        assert!((0.0..=100.0).contains(&report.amino_acid_similarity));
    }

    #[test]
    fn test_run_zero_trials() {
        let mut sim = Simulation::new(small_config(0, 1)).unwrap();
        let summary = sim.run(&NoProgress).unwrap();
        assert_eq!(summary.total_trials, 0);
        assert_eq!(summary.matches, 0);
        assert_eq!(summary.average_similarity, None);
        assert_eq!(summary.max_similarity, None);
    }

    #[test]
    fn test_run_counts_all_trials() {
        let mut sim = Simulation::new(small_config(1_000, 11)).unwrap();
        let summary = sim.run_sequential(&NoProgress).unwrap();
        assert_eq!(summary.total_trials, 1_000);
        assert_eq!(summary.matches + summary.abandoned, 1_000);
        assert!(summary.total_mutations <= 1_000 * 76);
        assert!(summary.total_mutations >= summary.abandoned * 76);
    }

    #[test]
    fn test_parallel_matches_trial_count_and_is_reproducible() {
        let run = |seed| {
            let mut sim = SimulationBuilder::new()
                .sequence_length(30)
                .percent_divergence(10.0)
                .trials(TRIAL_CHUNK * 2 + 17)
                .parallel(true)
                .seed(seed)
                .build()
                .unwrap();
            sim.run(&NoProgress).unwrap()
        };

        let a = run(5);
        let b = run(5);
        assert_eq!(a.total_trials, TRIAL_CHUNK * 2 + 17);
        assert_eq!(a.matches, b.matches);
        assert_eq!(a.similarity_sum, b.similarity_sum);
        assert_eq!(a.max_similarity, b.max_similarity);
        assert_eq!(a.total_mutations, b.total_mutations);
    }

    #[test]
    fn test_parallel_results_do_not_depend_on_thread_count() {
        let run_on = |threads| {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .unwrap();
            pool.install(|| {
                let mut sim = SimulationBuilder::new()
                    .sequence_length(30)
                    .percent_divergence(10.0)
                    .trials(TRIAL_CHUNK * 3 + 101)
                    .parallel(true)
                    .seed(2024)
                    .build()
                    .unwrap();
                sim.run(&NoProgress).unwrap()
            })
        };

        let one = run_on(1);
        let four = run_on(4);
        assert_eq!(one.total_trials, four.total_trials);
        assert_eq!(one.matches, four.matches);
        assert_eq!(one.similarity_sum, four.similarity_sum);
        assert_eq!(one.max_similarity, four.max_similarity);
        assert_eq!(one.total_mutations, four.total_mutations);
    }

    #[test]
    fn test_chunk_len() {
        assert_eq!(chunk_len(0, 10), 10);
        assert_eq!(chunk_len(0, TRIAL_CHUNK + 1), TRIAL_CHUNK);
        assert_eq!(chunk_len(1, TRIAL_CHUNK + 1), 1);
    }
}
