//! CLI for maze generation

use anyhow::Context;
use clap::Parser;
use perfect_maze::{Grid, MazeGenerator};

/// Perfect maze generator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of rows
    #[arg(long, default_value_t = 15)]
    rows: usize,

    /// Number of columns
    #[arg(long, default_value_t = 15)]
    cols: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,
}

/// Generate maze, print it
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut grid = Grid::new(args.rows, args.cols).context("Cannot create maze")?;
    let mut gen = MazeGenerator::new(args.seed);
    gen.generate(&mut grid);
    println!("{grid}");
    Ok(())
}
