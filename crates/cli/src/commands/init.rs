use anyhow::{bail, Context, Result};
use codondrift_sim::simulation::{Configuration, ExecutionConfig, SequenceConfig};

use crate::args::InitArgs;
use crate::printing::{print_banner, print_parameters};

pub fn init_configuration(args: &InitArgs) -> Result<()> {
    print_banner("Initializing Configuration");

    if args.output.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            args.output.display()
        );
    }

    let config = build_configuration(args);
    config.validate().context("Invalid configuration")?;
    print_parameters(&config);

    config
        .save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!("✓ Configuration written: {}", args.output.display());
    println!("\nConfiguration initialized successfully!");
    println!(
        "\n💡 Use 'codondrift run --config {}' to start the simulation",
        args.output.display()
    );

    Ok(())
}

pub fn build_configuration(args: &InitArgs) -> Configuration {
    Configuration {
        sequence: SequenceConfig {
            length: args.length,
            percent_divergence: args.percent_diff,
        },
        execution: ExecutionConfig {
            trials: args.trials,
            generation_cap: args.generation_cap,
            progress_interval: args.progress_interval,
            seed: args.seed,
            parallel: args.parallel,
        },
    }
}
