use anyhow::{Context, Result};
use codondrift_sim::base::Sequence;
use codondrift_sim::simulation::{
    Configuration, LogProgress, ProgressObserver, ProgressReport, SimulationBuilder,
};
use indicatif::{ProgressBar, ProgressStyle};

use crate::args::RunArgs;
use crate::printing::{
    print_banner, print_parameters, print_setup_report, print_summary, print_summary_details,
};

pub fn run_simulation(args: &RunArgs) -> Result<()> {
    print_banner("Running Simulation");

    let config = resolve_configuration(args)?;
    let mut builder = SimulationBuilder::from_configuration(config);
    if let Some(text) = &args.target {
        let target: Sequence = text
            .parse()
            .with_context(|| format!("Invalid target sequence '{text}'"))?;
        builder = builder.target(target);
    }
    let mut sim = builder.build().context("Failed to set up simulation")?;

    print_parameters(sim.config());
    print_setup_report(&sim.setup_report()?);

    let bar = if args.progress {
        let pb = ProgressBar::new(sim.config().execution.trials);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {per_sec}",
                )
                .context("Invalid progress bar template")?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let observer = ConsoleProgress {
        bar,
        log: args.log_progress,
    };
    let summary = sim.run(&observer).context("Simulation failed")?;
    if let Some(pb) = &observer.bar {
        pb.finish_with_message("Done");
    }

    print_summary(&summary);
    print_summary_details(&summary);
    log::info!(
        "Run finished: {} trials, {} matches",
        summary.total_trials,
        summary.matches
    );

    Ok(())
}

/// Defaults, then the configuration file, then command-line overrides.
pub fn resolve_configuration(args: &RunArgs) -> Result<Configuration> {
    let mut config = match &args.config {
        Some(path) => Configuration::load(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => Configuration::default(),
    };

    if let Some(length) = args.length {
        config.sequence.length = length;
    }
    if let Some(percent) = args.percent_diff {
        config.sequence.percent_divergence = percent;
    }
    if let Some(trials) = args.trials {
        config.execution.trials = trials;
    }
    if let Some(cap) = args.generation_cap {
        config.execution.generation_cap = cap;
    }
    if let Some(interval) = args.progress_interval {
        config.execution.progress_interval = interval;
    }
    if args.seed.is_some() {
        config.execution.seed = args.seed;
    }
    if args.parallel {
        config.execution.parallel = true;
    }

    Ok(config)
}

/// Prints progress lines, through the progress bar when one is shown, or
/// hands them to the log.
struct ConsoleProgress {
    bar: Option<ProgressBar>,
    log: bool,
}

impl ProgressObserver for ConsoleProgress {
    fn on_progress(&self, report: &ProgressReport) {
        if self.log {
            LogProgress.on_progress(report);
            return;
        }
        let line = format!(
            "Generations completed: {} million, {}",
            report.millions(),
            report.formatted_timestamp()
        );
        match &self.bar {
            Some(pb) => pb.println(line),
            None => println!("{line}"),
        }
    }

    fn on_trials_completed(&self, trials: u64) {
        if let Some(pb) = &self.bar {
            pb.inc(trials);
        }
    }
}
