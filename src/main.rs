//! Self-play driver for the Go rules engine.
//!
//! ## Usage
//!
//! - `goban-rust` - Show a short scripted demo
//! - `goban-rust demo` - Same as above
//! - `goban-rust selfplay` - Run a random-vs-random game to completion

use anyhow::Context;
use clap::{Parser, Subcommand};

use goban_rust::board::Color;
use goban_rust::bot::random_action;
use goban_rust::constants::MAX_GAME_LEN;
use goban_rust::game::{Action, GameState};
use goban_rust::group::groups_of;

/// Go rules engine with a random self-play driver
#[derive(Parser)]
#[command(name = "goban-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a random-vs-random game until two passes or the move cap
    Selfplay {
        /// Seed for the random policy (makes the game reproducible)
        #[arg(long)]
        seed: Option<u64>,
        /// Stop after this many actions even if the game has not ended
        #[arg(long, default_value_t = MAX_GAME_LEN)]
        max_moves: usize,
    },
    /// Place a few stones and print the resulting board and groups
    Demo,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Selfplay { seed, max_moves }) => run_selfplay(seed, max_moves),
        Some(Commands::Demo) | None => run_demo(),
    }
}

fn run_selfplay(seed: Option<u64>, max_moves: usize) -> anyhow::Result<()> {
    if let Some(seed) = seed {
        fastrand::seed(seed);
    }

    let mut game = GameState::new();
    let mut played = 0usize;

    while !game.is_ended() && played < max_moves {
        let turn = game.turn();
        let action = random_action(&game);
        println!("{turn:?} plays {action}");
        game.apply(action)
            .with_context(|| format!("policy chose an illegal action: {action}"))?;
        played += 1;
    }

    println!("\n{}", game.board());
    if game.is_ended() {
        println!("game over after {played} actions");
    } else {
        println!("stopped at the {max_moves}-action cap");
    }
    Ok(())
}

fn run_demo() -> anyhow::Result<()> {
    let mut game = GameState::new();

    // A short scripted opening.
    for action in [
        Action::Move(3, 3),
        Action::Move(3, 4),
        Action::Move(3, 5),
        Action::Move(15, 15),
    ] {
        game.apply(action)?;
    }

    println!("{}", game.board());
    for color in [Color::Black, Color::White] {
        for group in groups_of(game.board(), color) {
            println!(
                "{color:?} group: {} stone(s), {} liberties",
                group.stones.len(),
                group.liberties.len()
            );
        }
    }
    Ok(())
}
