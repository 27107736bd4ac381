use clap::Args;
use std::path::PathBuf;

use crate::defaults;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Output configuration path
    #[arg(short, long, default_value = defaults::CONFIG_FILE)]
    pub output: PathBuf,

    /// Nucleotide length of the target sequence
    #[arg(short = 'l', long, default_value_t = defaults::SEQUENCE_LENGTH)]
    pub length: usize,

    /// Percentage of bases substituted to derive the starting copy
    #[arg(short = 'p', long, default_value_t = defaults::PERCENT_DIVERGENCE)]
    pub percent_diff: f64,

    /// Number of independent trials
    #[arg(short = 'n', long, default_value_t = defaults::TRIALS)]
    pub trials: u64,

    /// Generation after which a trial is abandoned
    #[arg(short = 'g', long, default_value_t = defaults::GENERATION_CAP)]
    pub generation_cap: u32,

    /// Mutations between progress lines (0 disables)
    #[arg(long, default_value_t = defaults::PROGRESS_INTERVAL)]
    pub progress_interval: u64,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run trials on all threads
    #[arg(long)]
    pub parallel: bool,

    /// Overwrite an existing configuration file
    #[arg(short, long)]
    pub force: bool,
}

/// Flags for `run`. Every simulation flag overrides the loaded configuration.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Configuration file written by `init` (default: built-in defaults)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override target length
    #[arg(short = 'l', long)]
    pub length: Option<usize>,

    /// Override initial divergence percentage
    #[arg(short = 'p', long)]
    pub percent_diff: Option<f64>,

    /// Override trial count
    #[arg(short = 'n', long)]
    pub trials: Option<u64>,

    /// Override generation cap
    #[arg(short = 'g', long)]
    pub generation_cap: Option<u32>,

    /// Override progress interval (0 disables)
    #[arg(long)]
    pub progress_interval: Option<u64>,

    /// Override random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run trials on all threads
    #[arg(long)]
    pub parallel: bool,

    /// Use this target instead of a random one (A, C, G, U)
    #[arg(long)]
    pub target: Option<String>,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,

    /// Send progress lines to the log (info level) instead of stdout
    #[arg(long)]
    pub log_progress: bool,
}
