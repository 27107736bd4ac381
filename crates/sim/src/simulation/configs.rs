//! Simulation configuration.
//!
//! A [`Configuration`] fully describes a run: it can be written to JSON with
//! [`Configuration::save`] and read back with [`Configuration::load`].

use crate::errors::{BuilderError, ConfigError};
use crate::evolution::substitution_count;
use crate::translation::CODON_LENGTH;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_SEQUENCE_LENGTH: usize = 150;
pub const DEFAULT_PERCENT_DIVERGENCE: f64 = 3.0;
/// About one hour of sequential trials on a desktop core.
pub const DEFAULT_TRIALS: u64 = 324_000_000;
pub const DEFAULT_GENERATION_CAP: u32 = 75;
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 100_000_000;

/// The master configuration struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Configuration {
    pub sequence: SequenceConfig,
    pub execution: ExecutionConfig,
}

/// Shape of the target and of the starting copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceConfig {
    /// Nucleotide length of the target sequence
    pub length: usize,
    /// Nominal percentage of bases substituted to derive the starting copy
    pub percent_divergence: f64,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_SEQUENCE_LENGTH,
            percent_divergence: DEFAULT_PERCENT_DIVERGENCE,
        }
    }
}

/// How many trials to run and how.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Number of independent trials
    pub trials: u64,
    /// A trial is abandoned once its generation exceeds this cap
    pub generation_cap: u32,
    /// Emit a progress report every this many mutations (0 disables)
    #[serde(default = "default_progress_interval")]
    pub progress_interval: u64,
    /// Optional RNG seed for reproducibility
    #[serde(default)]
    pub seed: Option<u64>,
    /// Run trials on the rayon thread pool
    #[serde(default)]
    pub parallel: bool,
}

fn default_progress_interval() -> u64 {
    DEFAULT_PROGRESS_INTERVAL
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            generation_cap: DEFAULT_GENERATION_CAP,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            seed: None,
            parallel: false,
        }
    }
}

impl Configuration {
    /// Check every parameter before any work starts.
    ///
    /// The sequence must hold at least one codon, since abandoned trials are
    /// scored on their translation.
    pub fn validate(&self) -> Result<(), BuilderError> {
        if self.sequence.length < CODON_LENGTH {
            return Err(BuilderError::InvalidParameter(format!(
                "sequence length must be at least {CODON_LENGTH}, got {}",
                self.sequence.length
            )));
        }
        substitution_count(self.sequence.length, self.sequence.percent_divergence)
            .map_err(|e| BuilderError::InvalidParameter(e.to_string()))?;
        if self.execution.generation_cap == 0 {
            return Err(BuilderError::InvalidParameter(
                "generation cap must be positive".into(),
            ));
        }
        // Abandonment happens at generation cap + 1, which must fit in a u32
        if self.execution.generation_cap == u32::MAX {
            return Err(BuilderError::InvalidParameter(format!(
                "generation cap must be below {}",
                u32::MAX
            )));
        }
        Ok(())
    }

    /// Read and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the configuration as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }
}
