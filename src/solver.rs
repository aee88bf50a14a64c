//! Breadth-first maze solving as a stepped sequence
//!
//! [Solve] is an iterator over the observable steps of the search. Between
//! two calls to [Iterator::next], [Solve::grid] shows the grid exactly as a
//! renderer should draw it: during the search only the cell just dequeued is
//! marked in-path, during path reconstruction the traced cells stay marked.
//! Dropping the iterator stops the solve.

use std::collections::{HashMap, VecDeque};

use tracing::{debug, trace};

use crate::error::MazeError;
use crate::grid::{Coord, Grid};

/// One observable event of the solve
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Step {
    /// Cell was taken from the search queue
    Explore(Coord),
    /// Cell was marked as part of the final path
    Trace(Coord),
}

impl Step {
    pub fn coord(&self) -> Coord {
        match *self {
            Step::Explore(coord) | Step::Trace(coord) => coord,
        }
    }
}

/// Result of a completed solve
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Cells on the shortest path, including start & end
    pub path: Vec<Coord>,
    /// Number of cells dequeued by the search
    pub explored: usize,
}

impl Solution {
    /// Path length in edges
    pub fn length(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Print report
    pub fn print_report(&self) {
        println!(
            "Maze solved! The shortest path is {} steps, {} cells explored.",
            self.length(),
            self.explored
        );
    }
}

enum Phase {
    Search,
    /// Next cell to mark while walking parents back to the start
    Trace(Option<Coord>),
    Done,
}

/// Stepwise breadth-first search from [Grid::start] to [Grid::end]
pub struct Solve<'g> {
    grid: &'g mut Grid,
    start: Coord,
    end: Coord,
    queue: VecDeque<Coord>,
    /// Cell each visited cell was reached from; `None` for the start
    parents: HashMap<Coord, Option<Coord>>,
    /// Dequeued cell, still highlighted and not yet expanded
    current: Option<Coord>,
    phase: Phase,
    explored: usize,
    path: Vec<Coord>,
}

impl<'g> Solve<'g> {
    /// Reset all flags of `grid` and queue its start cell
    pub fn new(grid: &'g mut Grid) -> Self {
        grid.reset_flags();
        let start = grid.start();
        let end = grid.end();
        if let Some(cell) = grid.cell_mut(start) {
            cell.visited = true;
        }
        Self {
            grid,
            start,
            end,
            queue: VecDeque::from([start]),
            parents: HashMap::from([(start, None)]),
            current: None,
            phase: Phase::Search,
            explored: 0,
            path: Vec::new(),
        }
    }

    /// Read-only view of the grid in its current state
    pub fn grid(&self) -> &Grid {
        self.grid
    }

    /// Number of cells dequeued so far
    pub fn explored(&self) -> usize {
        self.explored
    }

    /// Finish the solve, returning the path once it has been fully traced
    pub fn into_solution(self) -> Option<Solution> {
        if !matches!(self.phase, Phase::Done) || self.path.last() != Some(&self.start) {
            return None;
        }
        let mut path = self.path;
        path.reverse();
        Some(Solution {
            path,
            explored: self.explored,
        })
    }

    fn set_in_path(&mut self, coord: Coord, value: bool) {
        if let Some(cell) = self.grid.cell_mut(coord) {
            cell.in_path = value;
        }
    }

    /// Unmark the cell dequeued by the previous step and queue its neighbors
    fn expand(&mut self, current: Coord) {
        self.set_in_path(current, false);
        if current == self.end {
            self.phase = Phase::Trace(Some(self.end));
            return;
        }
        let unvisited: Vec<Coord> = self
            .grid
            .open_neighbors(current)
            .filter(|&next| self.grid.cell(next).is_some_and(|c| !c.is_visited()))
            .collect();
        for next in unvisited {
            if let Some(cell) = self.grid.cell_mut(next) {
                cell.visited = true;
            }
            self.parents.insert(next, Some(current));
            self.queue.push_back(next);
        }
    }
}

impl Iterator for Solve<'_> {
    type Item = Result<Step, MazeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current) = self.current.take() {
            self.expand(current);
        }

        match self.phase {
            Phase::Search => match self.queue.pop_front() {
                Some(current) => {
                    self.set_in_path(current, true);
                    self.current = Some(current);
                    self.explored += 1;
                    trace!(%current, "explore");
                    Some(Ok(Step::Explore(current)))
                }
                None => {
                    self.phase = Phase::Done;
                    debug!(explored = self.explored, "search exhausted");
                    Some(Err(MazeError::PathNotFound {
                        from: self.start,
                        to: self.end,
                    }))
                }
            },
            Phase::Trace(Some(current)) => {
                self.set_in_path(current, true);
                self.path.push(current);
                self.phase = Phase::Trace(self.parents.get(&current).copied().flatten());
                trace!(%current, "trace");
                Some(Ok(Step::Trace(current)))
            }
            Phase::Trace(None) => {
                self.phase = Phase::Done;
                debug!(
                    explored = self.explored,
                    length = self.path.len().saturating_sub(1),
                    "path traced"
                );
                None
            }
            Phase::Done => None,
        }
    }
}

/// Solve the maze, calling `on_step` after every step
///
/// `on_step` sees the grid in the state described in [Solve]. It is called
/// once per dequeued cell and once per cell of the reconstructed path, in
/// that order. When the function returns, exactly the cells on the shortest
/// path are marked in-path.
///
/// # Examples
/// ```
/// use perfect_maze::{solve, Grid, MazeGenerator};
///
/// let mut grid = Grid::new(4, 4).unwrap();
/// MazeGenerator::new(Some(7)).generate(&mut grid);
///
/// let mut steps = 0;
/// let solution = solve(&mut grid, |_grid, _step| steps += 1).unwrap();
/// assert_eq!(solution.path.first(), Some(&grid.start()));
/// assert_eq!(solution.path.last(), Some(&grid.end()));
/// assert_eq!(steps, solution.explored + solution.path.len());
/// ```
pub fn solve<F>(grid: &mut Grid, mut on_step: F) -> Result<Solution, MazeError>
where
    F: FnMut(&Grid, Step),
{
    let mut steps = Solve::new(grid);
    while let Some(step) = steps.next() {
        on_step(steps.grid(), step?);
    }
    let (start, end) = (steps.start, steps.end);
    steps
        .into_solution()
        .ok_or(MazeError::PathNotFound { from: start, to: end })
}
