//! Template runtime updater CLI
//!
//! Thin front end over updater-core: parses arguments, runs the pipeline,
//! and prints one line per rewritten resource.

mod cli;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use updater_core::{Outcome, Result, TemplateUpdater, UpdaterConfig};

use cli::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let config = UpdaterConfig::new(&cli.template)
        .with_threshold(&cli.threshold)
        .with_replacement(&cli.replacement);
    let updater = TemplateUpdater::new(config);

    let outcome = if cli.dry_run {
        updater.preview()?
    } else {
        updater.process()?
    };

    match outcome {
        Outcome::Updated(changes) => {
            for change in &changes {
                println!(
                    "{} Updating runtime for resource '{}' from {} to {}",
                    "=>".blue().bold(),
                    change.resource.cyan(),
                    change.from.yellow(),
                    change.to.green()
                );
            }
            if cli.dry_run {
                println!(
                    "{} {} runtime(s) would be updated. File left unchanged.",
                    "OK".green().bold(),
                    changes.len()
                );
            } else {
                println!(
                    "{} Template saved. {} runtime(s) updated.",
                    "OK".green().bold(),
                    changes.len()
                );
            }
        }
        Outcome::UpToDate => {
            println!(
                "{} No runtime updates were necessary.",
                "OK".green().bold()
            );
        }
    }

    Ok(())
}
