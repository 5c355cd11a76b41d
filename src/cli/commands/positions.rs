//! Positions command - enumerate reachable positions and report counts

use std::{path::PathBuf, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{cli::output, storage, tictactoe::ReachablePositions};

#[derive(Debug, Parser)]
pub struct PositionsArgs {
    /// Write the full position set to this file
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub fn execute(args: PositionsArgs) -> Result<()> {
    let start = Instant::now();
    let positions = ReachablePositions::enumerate().context("position enumeration failed")?;
    let elapsed = start.elapsed();

    println!("Generated {} distinct positions in {elapsed:.2?}", positions.len());
    for ply in 0..10 {
        output::print_kv(&format!("ply {ply}"), &positions.count_at_ply(ply).to_string());
    }
    output::print_kv("in play", &positions.in_play().len().to_string());
    output::print_kv("gene space (X to move)", &positions.gene_space().len().to_string());

    if let Some(path) = &args.output {
        storage::save_positions(path, positions.all())
            .with_context(|| format!("failed to write positions to {}", path.display()))?;
        println!("Positions written to {}", path.display());
    }

    Ok(())
}
