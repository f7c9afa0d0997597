//! Play command - drive a game from an intent script
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_scenario(), play_script(), report_final()
//! - Level 3: event and state formatting

use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use hexfront_core::{Event, GameResult, GameState, Scenario, SeededRolls};

use crate::script::{self, Command};

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// Scenario JSON file (defaults to the built-in skirmish)
    #[arg(long, value_name = "FILE")]
    pub scenario: Option<PathBuf>,

    /// Intent script, one command per line (defaults to stdin)
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Hex radius in pixels, used by `click X Y`
    #[arg(long, default_value = "30")]
    pub hex_size: f64,

    /// Output events and final state as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

pub fn run(args: PlayArgs, seed: Option<u64>) -> Result<()> {
    let scenario = load_scenario(&args)?;
    let mut game = scenario
        .to_game_state()
        .with_context(|| format!("Scenario '{}' is not playable", scenario.name))?;

    tracing::info!(
        "Starting '{}' on a {}x{} board with {} units",
        scenario.name,
        scenario.width,
        scenario.height,
        scenario.placements.len()
    );

    let reader: Box<dyn BufRead> = match &args.script {
        Some(path) => Box::new(BufReader::new(
            std::fs::File::open(path)
                .with_context(|| format!("Failed to open script: {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut rng = SeededRolls::from_seed_option(seed);
    play_script(&mut game, reader, &args, &mut rng)?;

    report_final(&game, &args)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn load_scenario(args: &PlayArgs) -> Result<Scenario> {
    match &args.scenario {
        Some(path) => Scenario::load(path)
            .with_context(|| format!("Failed to load scenario: {}", path.display())),
        None => Ok(Scenario::skirmish()),
    }
}

/// Apply every script line until input runs out or the game is decided
fn play_script(
    game: &mut GameState,
    reader: Box<dyn BufRead>,
    args: &PlayArgs,
    rng: &mut SeededRolls,
) -> Result<()> {
    for (line_no, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read script")?;
        let command = script::parse_line(&line, args.hex_size)
            .with_context(|| format!("Line {}: {}", line_no + 1, line.trim()))?;

        match command {
            None => continue,
            Some(Command::Show) => print_state(game, args.json)?,
            Some(Command::Intent(intent)) => {
                let event = game.apply(intent, rng);
                if event == Event::Ignored {
                    tracing::debug!("Line {}: {:?} ignored", line_no + 1, intent);
                }
                print_event(&event, args.json)?;
            }
        }

        if game.is_over() {
            tracing::info!("Game decided at line {}", line_no + 1);
            break;
        }
    }
    Ok(())
}

fn report_final(game: &GameState, args: &PlayArgs) -> Result<()> {
    print_state(game, args.json)?;
    if !args.json {
        match game.result() {
            GameResult::Victory(player) => println!("\n{} wins!", player),
            GameResult::Draw => println!("\nDraw: both sides eliminated"),
            GameResult::Ongoing => println!("\nGame in progress"),
        }
    }
    Ok(())
}

// ============================================================================
// LEVEL 3 - FORMATTING
// ============================================================================

fn print_event(event: &Event, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(event)?);
    } else {
        println!("{}", describe_event(event));
    }
    Ok(())
}

fn describe_event(event: &Event) -> String {
    match event {
        Event::Selected { unit, at } => format!("Selected unit {} at {}", unit, at),
        Event::Deselected => "Deselected".to_string(),
        Event::PhaseChanged(phase) => format!("Phase: {:?}", phase),
        Event::Moved { unit, from, to, cost } => {
            format!("Unit {} moved {} -> {} ({} movement)", unit, from, to, cost)
        }
        Event::Attacked(report) => {
            let mut text = format!(
                "Unit {} attacked unit {}: {:?} ({:.0}% chance, {} damage), target at {} hp",
                report.attacker,
                report.defender,
                report.outcome,
                report.hit_chance * 100.0,
                report.damage,
                report.defender_health
            );
            if report.defender_destroyed {
                text.push_str(" - destroyed");
            }
            text
        }
        Event::TurnEnded { next_player, turn_number } => {
            format!("Turn {}: {} to act", turn_number, next_player)
        }
        Event::Ignored => "(ignored)".to_string(),
    }
}

fn print_state(game: &GameState, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
        return Ok(());
    }

    println!("\n=== Turn {} - {} ===", game.turn_number(), game.current_player());
    if let (Some(unit), Some(phase)) = (game.selection(), game.phase()) {
        println!("Selected: {} {} ({:?} phase)", unit.id(), unit.archetype(), phase);
    }
    for unit in game.all_units() {
        println!(
            "  {:>4} {:<2} P{} at {:<8} hp {:>3}/{:<3} mv {} {}{}",
            unit.id().to_string(),
            unit.archetype().code(),
            unit.owner().number(),
            unit.position().to_string(),
            unit.health(),
            unit.max_health(),
            unit.movement_remaining(),
            if unit.has_moved() { "M" } else { "-" },
            if unit.has_attacked() { "A" } else { "-" },
        );
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
