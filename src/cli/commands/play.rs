//! Play command - demonstrate a strategy in one verbose game vs random

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::{build_rng, output},
    simulator::play_game_with_history,
    storage,
    strategy::{RandomStrategy, TableStrategy},
    tictactoe::ReachablePositions,
};

#[derive(Debug, Parser)]
pub struct PlayArgs {
    /// Strategy file to play; a fresh random strategy is generated when
    /// missing or invalid
    #[arg(long)]
    pub strategy: Option<PathBuf>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

fn load_or_generate(args: &PlayArgs, rng: &mut rand::rngs::StdRng) -> Result<TableStrategy> {
    if let Some(path) = &args.strategy {
        match storage::load_strategy(path) {
            Ok(strategy) => {
                println!(
                    "Loaded strategy with {} entries from {}",
                    strategy.len(),
                    path.display()
                );
                return Ok(strategy);
            }
            Err(err) => {
                eprintln!("Could not load strategy from {}: {err}", path.display());
            }
        }
    }

    let spinner = output::create_spinner("Generating random strategy...");
    let positions = ReachablePositions::enumerate().context("position enumeration failed")?;
    let strategy = TableStrategy::random(&positions.gene_space(), rng)
        .context("random strategy construction failed")?;
    spinner.finish_with_message(format!(
        "Random strategy with {} entries ready",
        strategy.len()
    ));
    Ok(strategy)
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut rng = build_rng(args.seed);
    let strategy = load_or_generate(&args, &mut rng)?;

    println!("Playing one game, strategy as X vs random O:");
    let (result, history) = play_game_with_history(&strategy, &RandomStrategy, &mut rng)
        .context("game aborted")?;

    for (turn, pos) in history.iter().enumerate() {
        println!("\nTurn {}:", turn + 1);
        println!("{pos}");
    }
    println!("\nResult: {result}");

    Ok(())
}
