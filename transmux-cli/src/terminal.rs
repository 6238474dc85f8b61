//! Colored console presentation for the run header and final summary.
//!
//! User-facing output goes through `println!` here; diagnostic logging stays
//! on the `log` facade in the core library.

use owo_colors::OwoColorize;

use transmux_core::{ConversionMode, CoreConfig, StatsSnapshot};

const RULE: &str = "========================================";

pub fn print_header(config: &CoreConfig) {
    println!("{}", RULE.cyan());
    println!("{}", "  Transmux".cyan().bold());
    println!("{}", RULE.cyan());

    match config.mode {
        ConversionMode::Export => {
            println!(
                "{} {} | {} {}",
                "Mode:".yellow(),
                "export".bold(),
                "Workers:".yellow(),
                config.workers
            );
        }
        ConversionMode::Editing => {
            println!(
                "{} {} | {} {} | {} {} | {} {}",
                "Mode:".yellow(),
                "editing".bold(),
                "Codec:".yellow(),
                config.codec,
                "Quality:".yellow(),
                config.quality,
                "Workers:".yellow(),
                config.workers
            );
        }
    }

    if let Some(ref output_dir) = config.output_dir {
        println!("{} {}", "Output directory:".yellow(), output_dir.display());
    }

    if config.dry_run {
        println!("{}", "Dry run - no files will be converted".yellow().bold());
    }

    if config.force {
        println!(
            "{}",
            "Force enabled - existing outputs will be overwritten".yellow()
        );
    }

    println!("{}", "----------------------------------------".cyan());
}

pub fn print_summary(summary: &StatsSnapshot) {
    println!("\n{}", RULE.cyan());
    println!("{} {:.1?}", "Completed in".green().bold(), summary.elapsed);
    println!(
        "{} {} | {} {} | {} {} | {} {} | {} {}",
        "Total:".cyan(),
        summary.total,
        "Converted:".green(),
        summary.succeeded,
        "Rewrapped:".green(),
        summary.rewrapped,
        "Skipped:".yellow(),
        summary.skipped,
        "Failed:".red(),
        summary.failed
    );
    println!("{}", RULE.cyan());
}

pub fn print_warning(msg: &str) {
    println!("{} {}", "Warning:".yellow().bold(), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "Error:".red().bold(), msg);
}
