use codondrift_sim::simulation::{Configuration, SetupReport, Summary};

pub fn print_banner(title: &str) {
    println!("🧬 Codondrift - {title}");
    println!("============================================\n");
}

pub fn print_parameters(config: &Configuration) {
    let sequence = &config.sequence;
    let execution = &config.execution;

    println!("📋 Simulation Configuration");
    println!("  • Sequence Length: {} nt [-l, --length]", sequence.length);
    println!(
        "  • Initial Divergence: {}% [-p, --percent-diff]",
        sequence.percent_divergence
    );
    println!("  • Trials: {} [-n, --trials]", execution.trials);
    println!(
        "  • Generation Cap: {} [-g, --generation-cap]",
        execution.generation_cap
    );
    if execution.progress_interval == 0 {
        println!("  • Progress Lines: Disabled [--progress-interval]");
    } else {
        println!(
            "  • Progress Lines: every {} mutations [--progress-interval]",
            execution.progress_interval
        );
    }
    match execution.seed {
        Some(seed) => println!("  • Random Seed: {seed} [--seed]"),
        None => println!("  • Random Seed: Random [--seed]"),
    }
    if execution.parallel {
        println!(
            "  • Execution: Parallel ({} threads) [--parallel]",
            rayon::current_num_threads()
        );
    } else {
        println!("  • Execution: Sequential [--parallel]");
    }
    println!();
}

/// The six pre-run comparison lines.
pub fn print_setup_report(report: &SetupReport) {
    println!("target nucleotide sequence: {}", report.target);
    println!("copied nucleotide sequence: {}", report.copy);
    println!(
        "similarity of nucleotide sequences: {}",
        report.nucleotide_similarity
    );
    println!("target amino acid sequence: {}", report.target_protein);
    println!("copied amino acid sequence: {}", report.copy_protein);
    println!(
        "similarity of amino acid sequences: {}%",
        report.amino_acid_similarity
    );
}

pub fn print_summary(summary: &Summary) {
    println!("Total matches: {}", summary.matches);
    println!(
        "Average similarity of amino acid sequences at abandonment: {}",
        format_percentage(summary.average_similarity)
    );
    println!(
        "Maximum similarity of amino acid sequences at abandonment: {}",
        format_percentage(summary.max_similarity)
    );
    println!("Total trials: {}", summary.total_trials);
    println!("Elapsed time: {} seconds", summary.elapsed.as_secs());
}

pub fn print_summary_details(summary: &Summary) {
    println!("\n📊 Run Details");
    println!("  • Abandoned trials: {}", summary.abandoned);
    println!("  • Mutations applied: {}", summary.total_mutations);
    match summary.mean_generations_to_match {
        Some(mean) => println!("  • Mean generations to match: {mean:.2}"),
        None => println!("  • Mean generations to match: undefined"),
    }
    println!(
        "  • Started: {}",
        summary.started_at.format(codondrift_sim::simulation::TIMESTAMP_FORMAT)
    );
    println!(
        "  • Finished: {}",
        summary.finished_at.format(codondrift_sim::simulation::TIMESTAMP_FORMAT)
    );
}

/// `undefined` when there is nothing to average over.
pub fn format_percentage(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{value}%"),
        None => "undefined".to_string(),
    }
}
