//! Builder pattern for creating simulations.
//!
//! Provides a fluent API for configuring and creating simulations with
//! sensible defaults and validation.

pub use crate::errors::BuilderError;
use crate::base::Sequence;
use crate::simulation::{Configuration, Simulation};

/// Builder for constructing Simulation instances with a fluent API.
///
/// # Examples
///
/// ```
/// use codondrift_sim::simulation::SimulationBuilder;
/// use codondrift_sim::simulation::NoProgress;
///
/// let mut sim = SimulationBuilder::new()
///     .sequence_length(60)
///     .percent_divergence(5.0)
///     .trials(100)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let summary = sim.run(&NoProgress).unwrap();
/// assert_eq!(summary.total_trials, 100);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimulationBuilder {
    config: Configuration,
    // Required: a builder never falls back to the multi-hour default run
    trials: Option<u64>,
    target: Option<Sequence>,
    start: Option<Sequence>,
}

impl SimulationBuilder {
    /// Create a new simulation builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration, trial count included.
    pub fn from_configuration(config: Configuration) -> Self {
        Self {
            trials: Some(config.execution.trials),
            config,
            target: None,
            start: None,
        }
    }

    /// Set the number of trials to run (required).
    pub fn trials(mut self, trials: u64) -> Self {
        self.trials = Some(trials);
        self
    }

    /// Length of the randomly generated target (default: 150).
    pub fn sequence_length(mut self, length: usize) -> Self {
        self.config.sequence.length = length;
        self
    }

    /// Nominal divergence of the starting copy, in percent (default: 3).
    pub fn percent_divergence(mut self, percent: f64) -> Self {
        self.config.sequence.percent_divergence = percent;
        self
    }

    /// Generation after which a trial is abandoned (default: 75).
    pub fn generation_cap(mut self, cap: u32) -> Self {
        self.config.execution.generation_cap = cap;
        self
    }

    /// Mutations between progress reports; 0 disables (default: 100,000,000).
    pub fn progress_interval(mut self, interval: u64) -> Self {
        self.config.execution.progress_interval = interval;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.execution.seed = Some(seed);
        self
    }

    /// Run trials on the rayon thread pool.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.execution.parallel = parallel;
        self
    }

    /// Use this target instead of a random one. Its length overrides
    /// `sequence_length`.
    pub fn target(mut self, target: Sequence) -> Self {
        self.target = Some(target);
        self
    }

    /// Use this starting copy instead of diverging the target. Requires `target`.
    pub fn start(mut self, start: Sequence) -> Self {
        self.start = Some(start);
        self
    }

    /// Validate and build.
    pub fn build(self) -> Result<Simulation, BuilderError> {
        let mut config = self.config;
        config.execution.trials = self.trials.ok_or(BuilderError::MissingRequired("trials"))?;

        match (self.target, self.start) {
            (Some(target), Some(start)) => Simulation::from_sequences(config, target, start),
            (Some(target), None) => Simulation::from_target(config, target),
            (None, Some(_)) => Err(BuilderError::MissingRequired("target")),
            (None, None) => Simulation::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_builder_requires_trials() {
        assert!(matches!(
            SimulationBuilder::new().build(),
            Err(BuilderError::MissingRequired("trials"))
        ));
    }

    #[test]
    fn test_builder_applies_parameters() {
        let sim = SimulationBuilder::new()
            .sequence_length(45)
            .percent_divergence(20.0)
            .generation_cap(10)
            .progress_interval(0)
            .trials(5)
            .seed(1)
            .build()
            .unwrap();

        let config = sim.config();
        assert_eq!(config.sequence.length, 45);
        assert_eq!(config.execution.generation_cap, 10);
        assert_eq!(config.execution.progress_interval, 0);
        assert_eq!(config.execution.trials, 5);
        assert_eq!(sim.divergence().len(), 9);
    }

    #[test]
    fn test_builder_with_target_and_start() {
        let target = Sequence::from_str("AUGGCUUUU").unwrap();
        let start = Sequence::from_str("AUGGCAUUU").unwrap();
        let sim = SimulationBuilder::new()
            .target(target.clone())
            .start(start.clone())
            .trials(1)
            .build()
            .unwrap();

        assert_eq!(sim.target(), &target);
        assert_eq!(sim.start(), &start);
        assert_eq!(sim.config().sequence.length, 9);
        assert!(sim.divergence().is_empty());
    }

    #[test]
    fn test_builder_start_without_target() {
        let start = Sequence::from_str("AUG").unwrap();
        assert!(matches!(
            SimulationBuilder::new().start(start).trials(1).build(),
            Err(BuilderError::MissingRequired("target"))
        ));
    }

    #[test]
    fn test_builder_from_configuration() {
        let mut config = Configuration::default();
        config.sequence.length = 12;
        config.execution.trials = 3;
        config.execution.seed = Some(9);

        let sim = SimulationBuilder::from_configuration(config.clone())
            .build()
            .unwrap();
        assert_eq!(sim.config(), &config);
    }

    #[test]
    fn test_builder_rejects_invalid_divergence() {
        assert!(matches!(
            SimulationBuilder::new()
                .percent_divergence(101.0)
                .trials(1)
                .build(),
            Err(BuilderError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_builder_rejects_maximum_generation_cap() {
        assert!(matches!(
            SimulationBuilder::new()
                .generation_cap(u32::MAX)
                .trials(0)
                .build(),
            Err(BuilderError::InvalidParameter(_))
        ));
    }
}
