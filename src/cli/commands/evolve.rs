//! Evolve command - run the genetic algorithm and save the best strategy

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;

use crate::{
    cli::{build_rng, output},
    evolution::{EvolutionConfig, GeneticOptimizer},
    storage,
    tictactoe::{GameResult, Player, Position, ReachablePositions},
};

#[derive(Debug, Parser)]
pub struct EvolveArgs {
    /// Number of generations to run
    #[arg(long, default_value_t = 500)]
    pub generations: usize,

    /// Survivors retained (and bred) each generation
    #[arg(long, default_value_t = 5)]
    pub survivors: usize,

    /// Games played per fitness evaluation
    #[arg(long, default_value_t = 100)]
    pub games: usize,

    /// Per-gene mutation probability
    #[arg(long, default_value_t = 0.02)]
    pub mutation_rate: f64,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Cached position set; regenerated (and rewritten) when missing or invalid
    #[arg(long)]
    pub positions: Option<PathBuf>,

    /// Strategy file seeded into the initial generation; the remainder is
    /// filled with fresh random strategies
    #[arg(long)]
    pub seed_strategy: Option<PathBuf>,

    /// Where to write the best strategy found
    #[arg(long, default_value = "strategy.json")]
    pub output: PathBuf,
}

/// Load the position cache when present and valid, otherwise enumerate from
/// scratch and refresh the cache.
fn load_or_enumerate(cache: Option<&Path>) -> Result<Vec<Position>> {
    if let Some(path) = cache {
        match storage::load_positions(path) {
            Ok(positions) => {
                println!("Loaded {} positions from {}", positions.len(), path.display());
                return Ok(positions);
            }
            Err(err) => {
                eprintln!("Could not load positions from {}: {err}", path.display());
            }
        }
    }

    let spinner = output::create_spinner("Enumerating reachable positions...");
    let positions = ReachablePositions::enumerate().context("position enumeration failed")?;
    spinner.finish_with_message(format!("Enumerated {} distinct positions", positions.len()));

    if let Some(path) = cache {
        storage::save_positions(path, positions.all())
            .with_context(|| format!("failed to write position cache {}", path.display()))?;
        println!("Position cache written to {}", path.display());
    }

    Ok(positions.all().to_vec())
}

fn gene_space_of(positions: &[Position]) -> Vec<Position> {
    positions
        .iter()
        .filter(|pos| pos.classify() == GameResult::InPlay && pos.to_move() == Player::X)
        .copied()
        .collect()
}

pub fn execute(args: EvolveArgs) -> Result<()> {
    let config = EvolutionConfig {
        survivors: args.survivors,
        num_games: args.games,
        mutation_rate: args.mutation_rate,
        num_generations: args.generations,
    };

    let mut rng: StdRng = build_rng(args.seed);
    let positions = load_or_enumerate(args.positions.as_deref())?;
    let gene_space = gene_space_of(&positions);
    println!(
        "Gene space: {} in-play positions with X to move",
        gene_space.len()
    );

    let mut seeds = Vec::new();
    if let Some(path) = &args.seed_strategy {
        match storage::load_strategy(path) {
            Ok(strategy) => {
                println!("Seeding initial generation from {}", path.display());
                seeds.push(strategy);
            }
            Err(err) => {
                eprintln!("Could not load seed strategy from {}: {err}", path.display());
            }
        }
    }

    let spinner = output::create_spinner("Creating initial generation...");
    let mut optimizer = GeneticOptimizer::seeded(&gene_space, config, seeds, &mut rng)
        .context("failed to create initial generation")?;
    spinner.finish_with_message(format!(
        "Initial generation of {} strategies ready",
        config.generation_size()
    ));

    let pb = output::create_generation_progress(args.generations as u64);
    let mut last_scores = Vec::new();
    optimizer
        .run(&mut rng, |report| {
            pb.set_message(output::format_scores(&report.survivor_scores));
            pb.inc(1);
            if report.generation % 50 == 0 {
                pb.println(format!(
                    "generation {:>4}: survivors {}",
                    report.generation,
                    output::format_scores(&report.survivor_scores)
                ));
            }
            last_scores = report.survivor_scores.clone();
        })
        .context("evolution run aborted")?;
    pb.finish_and_clear();

    println!("Finished {} generations", optimizer.generations_run());
    output::print_kv("final survivors", &output::format_scores(&last_scores));
    output::print_kv(
        "best win rate",
        &format!("{}/{} vs random", last_scores.first().copied().unwrap_or(0), args.games),
    );

    storage::save_strategy(&args.output, optimizer.best())
        .with_context(|| format!("failed to write strategy to {}", args.output.display()))?;
    println!("Best strategy written to {}", args.output.display());

    Ok(())
}
