//! HEXFRONT CLI - Command-line interface
//!
//! Commands:
//! - archetypes: Print the unit stat table
//! - scenario: Write the default scenario to a file
//! - play: Run a game from an intent script

mod play_cmd;
mod script;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hexfront_core::{Scenario, UNIT_TYPES};

#[derive(Parser)]
#[command(name = "hexfront")]
#[command(about = "HEXFRONT turn-based hex tactics engine")]
struct Cli {
    /// Seed for combat rolls (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the archetype stat table
    Archetypes {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write the default skirmish scenario as JSON
    Scenario {
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Play a game from an intent script or stdin
    Play(play_cmd::PlayArgs),
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only game output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Archetypes { json } => print_archetypes(json),
        Commands::Scenario { output } => {
            let scenario = Scenario::skirmish();
            scenario
                .save(&output)
                .with_context(|| format!("Failed to write scenario: {}", output.display()))?;
            tracing::info!("Saved scenario '{}' to {}", scenario.name, output.display());
            Ok(())
        }
        Commands::Play(args) => play_cmd::run(args, cli.seed),
    }
}

fn print_archetypes(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&UNIT_TYPES)?);
        return Ok(());
    }

    println!("{:<12} {:<4} {:>6} {:>6} {:>5} {:>6}", "Archetype", "Code", "Health", "Damage", "Move", "Range");
    for spec in &UNIT_TYPES {
        println!(
            "{:<12} {:<4} {:>6} {:>6} {:>5} {:>6}",
            spec.name, spec.code, spec.max_health, spec.damage, spec.max_movement, spec.attack_range
        );
    }
    Ok(())
}
