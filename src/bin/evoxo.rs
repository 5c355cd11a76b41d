//! evoxo CLI - evolve lookup-table tic-tac-toe strategies
//!
//! Subcommands:
//! - `evolve`: run the genetic algorithm and save the best strategy
//! - `play`: demonstrate a strategy in one verbose game against random
//! - `positions`: enumerate the reachable position set and report counts

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "evoxo")]
#[command(version, about = "Evolve tic-tac-toe strategies with a genetic algorithm", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the genetic algorithm
    Evolve(evoxo::cli::commands::evolve::EvolveArgs),

    /// Play one verbose game of a strategy against random
    Play(evoxo::cli::commands::play::PlayArgs),

    /// Enumerate reachable positions and report counts
    Positions(evoxo::cli::commands::positions::PositionsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Evolve(args) => evoxo::cli::commands::evolve::execute(args),
        Commands::Play(args) => evoxo::cli::commands::play::execute(args),
        Commands::Positions(args) => evoxo::cli::commands::positions::execute(args),
    }
}
