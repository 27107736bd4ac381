//! Shared default values for the command-line front end.
//! Simulation parameters come from the core so the two never drift apart.

pub use codondrift_sim::simulation::{
    DEFAULT_GENERATION_CAP as GENERATION_CAP, DEFAULT_PERCENT_DIVERGENCE as PERCENT_DIVERGENCE,
    DEFAULT_PROGRESS_INTERVAL as PROGRESS_INTERVAL, DEFAULT_SEQUENCE_LENGTH as SEQUENCE_LENGTH,
    DEFAULT_TRIALS as TRIALS,
};

pub const CONFIG_FILE: &str = "codondrift.json";

/// Residues in a sequence printed by `generate --protein`.
pub const PROTEIN_LENGTH: usize = 50;
