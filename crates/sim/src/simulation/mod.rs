//! Simulation engine and its supporting types.
//!
//! - `Simulation`: owns target, starting copy and RNG; runs the trials.
//! - `SimulationBuilder`: fluent construction with validation.
//! - `TrialContext` / `TrialState`: the per-trial random walk.
//! - `TrialTally` / `AggregateStatistics` / `Summary`: aggregation.
//! - `ProgressObserver` / `ProgressMonitor`: advisory progress reports.

pub mod builder;
pub mod configs;
pub mod engine;
pub mod progress;
pub mod statistics;
pub mod trial;

pub use builder::SimulationBuilder;
pub use configs::{
    Configuration, ExecutionConfig, SequenceConfig, DEFAULT_GENERATION_CAP,
    DEFAULT_PERCENT_DIVERGENCE, DEFAULT_PROGRESS_INTERVAL, DEFAULT_SEQUENCE_LENGTH,
    DEFAULT_TRIALS,
};
pub use engine::{SetupReport, Simulation, TRIAL_CHUNK};
pub use progress::{
    LogProgress, NoProgress, ProgressMonitor, ProgressObserver, ProgressReport, TIMESTAMP_FORMAT,
};
pub use statistics::{AggregateStatistics, Summary, TrialTally};
pub use trial::{TrialContext, TrialOutcome, TrialState};
