//! CLI for maze solving

use std::{thread, time::Duration};

use anyhow::Context;
use clap::Parser;
use perfect_maze::{solve, Grid, MazeGenerator};
use tracing::{info, Level};

/// Generate a perfect maze and find the shortest way through it
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of rows
    #[arg(long, default_value_t = 10)]
    rows: usize,

    /// Number of columns
    #[arg(long, default_value_t = 10)]
    cols: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Display solving on the terminal
    #[arg(short, long)]
    playback: bool,

    /// Playback frame length in milliseconds
    #[arg(short, long, default_value_t = 20)]
    frame_length: u64,

    /// More log output, repeat for even more
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn print_grid(grid: &Grid) {
    print!("\x1B[2J\x1B[1;1H");
    println!("{grid}");
}

/// Generate maze, solve it and print output
fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut grid = Grid::new(args.rows, args.cols).context("Cannot create maze")?;
    MazeGenerator::new(args.seed).generate(&mut grid);
    info!(rows = args.rows, cols = args.cols, seed = ?args.seed, "maze ready");

    let frame = Duration::from_millis(args.frame_length);
    if args.playback {
        print_grid(&grid);
    }
    let solution = solve(&mut grid, |grid, _step| {
        if args.playback {
            print_grid(grid);
            thread::sleep(frame);
        }
    })
    .context("Cannot solve maze")?;

    if !args.playback {
        println!("{grid}");
    }
    solution.print_report();
    Ok(())
}
