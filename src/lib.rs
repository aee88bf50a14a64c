//! Carve a perfect maze and find the way through it
//!
//! A [Grid] starts with every wall standing. [MazeGenerator] carves it into
//! a perfect maze: a spanning tree where exactly one path connects any two
//! cells. [solve] then runs a breadth-first search from the top left to the
//! bottom right corner and reports every step so that it can be animated.
//!
//! # Examples
//! ## Generate and solve
//! ```
//! use perfect_maze::{solve, Grid, MazeGenerator};
//!
//! let mut grid = Grid::new(10, 10).unwrap();
//! MazeGenerator::new(None).generate(&mut grid);
//!
//! let solution = solve(&mut grid, |_grid, _step| ()).unwrap();
//! solution.print_report();
//! println!("{grid}");
//! ```
//!
//! ## Pull steps one at a time
//! ```
//! use perfect_maze::{Grid, MazeGenerator, Solve, Step};
//!
//! let mut grid = Grid::new(5, 5).unwrap();
//! MazeGenerator::new(Some(1)).generate(&mut grid);
//!
//! let mut steps = Solve::new(&mut grid);
//! while let Some(step) = steps.next() {
//!     if let Step::Trace(coord) = step.unwrap() {
//!         assert!(steps.grid().cell(coord).unwrap().in_path());
//!     }
//! }
//! ```

mod error;
pub mod grid;
pub mod maze_generator;
mod render;
pub mod solver;

pub use error::MazeError;
pub use grid::{Cell, Coord, Direction, Grid};
pub use maze_generator::MazeGenerator;
pub use solver::{solve, Solution, Solve, Step};
