mod args;
mod commands;
pub mod defaults;
mod printing;

use anyhow::Result;
use clap::{Parser, Subcommand};

use args::{InitArgs, RunArgs};
use commands::{compare, generate, init, run, translate};

/// Codondrift: a point-mutation drift simulator
///
/// Generates a random RNA target, derives a slightly diverged copy, and
/// measures how often repeated random substitutions carry the copy back to
/// the target, at nucleotide and amino-acid level.
#[derive(Parser, Debug)]
#[command(name = "codondrift")]
#[command(author, version, about = "Simulates random point-mutation drift toward a target sequence", long_about = None)]
struct Cli {
    /// Number of threads to use for parallel trials
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a simulation configuration file.
    ///
    /// Sets up the parameters for a run (sequence length, divergence, trials)
    /// but does not run it yet.
    Init(Box<InitArgs>),

    /// Run a simulation.
    ///
    /// Prints the target and starting copy, runs every trial, then prints the
    /// summary.
    Run(Box<RunArgs>),

    /// Print a random nucleotide (or protein) sequence.
    Generate {
        /// Sequence length (default: 150 nt, or 50 residues with --protein)
        #[arg(short, long)]
        length: Option<usize>,

        /// Generate a protein over the 20 standard amino acids
        #[arg(long)]
        protein: bool,

        /// Random seed
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Translate a nucleotide sequence with the standard genetic code.
    Translate {
        /// Sequence over A, C, G, U
        sequence: String,
    },

    /// Compare two equal-length sequences at nucleotide and amino-acid level.
    Compare {
        first: String,
        second: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    match cli.command {
        Commands::Init(args) => {
            init::init_configuration(&args)?;
        }
        Commands::Run(args) => {
            run::run_simulation(&args)?;
        }
        Commands::Generate {
            length,
            protein,
            seed,
        } => {
            generate::generate_sequence(length, protein, seed)?;
        }
        Commands::Translate { sequence } => {
            translate::translate_sequence(&sequence)?;
        }
        Commands::Compare { first, second } => {
            compare::compare_sequences(&first, &second)?;
        }
    }

    Ok(())
}
