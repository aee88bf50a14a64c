//! Maze generation

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use tracing::debug;

use crate::grid::{Coord, Grid};

/// Perfect maze generator.
pub struct MazeGenerator {
    random: StdRng,
}

impl MazeGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }

    /// Carve a perfect maze (spanning tree) into a fully walled grid
    ///
    /// Iterative randomized depth-first search from the top left corner.
    /// The top of the stack is extended into a random unvisited neighbor
    /// while one exists; otherwise the stack is popped. Every cell gets
    /// connected exactly once, so `rows * cols - 1` walls are removed.
    ///
    /// Visited flags are cleared before returning. Wall state is not, so
    /// running this twice on the same grid does not yield a perfect maze.
    pub fn generate(&mut self, grid: &mut Grid) {
        let start = grid.start();
        let mut stack: Vec<Coord> = vec![start];
        Self::visit(grid, start);

        while let Some(&current) = stack.last() {
            let candidates: Vec<_> = grid
                .neighbors(current)
                .filter(|&(_, next)| grid.cell(next).is_some_and(|c| !c.is_visited()))
                .collect();

            match candidates.choose(&mut self.random) {
                Some(&(dir, next)) => {
                    grid.carve(current, dir);
                    Self::visit(grid, next);
                    stack.push(next);
                }
                None => {
                    stack.pop();
                }
            }
        }

        grid.reset_visited();
        debug!(
            rows = grid.rows(),
            cols = grid.cols(),
            passages = grid.passage_count(),
            "maze generated"
        );
    }

    fn visit(grid: &mut Grid, coord: Coord) {
        if let Some(cell) = grid.cell_mut(coord) {
            cell.visited = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashSet, VecDeque};

    use crate::grid::{Coord, Direction, Grid};
    use crate::maze_generator::MazeGenerator;

    fn generated(rows: usize, cols: usize, seed: u64) -> Grid {
        let mut grid = Grid::new(rows, cols).unwrap();
        MazeGenerator::new(Some(seed)).generate(&mut grid);
        grid
    }

    fn reachable_from_start(grid: &Grid) -> HashSet<Coord> {
        let mut seen = HashSet::from([grid.start()]);
        let mut queue = VecDeque::from([grid.start()]);
        while let Some(current) = queue.pop_front() {
            for next in grid.open_neighbors(current) {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        seen
    }

    #[test]
    fn generated_maze_is_spanning_tree() {
        for (rows, cols) in [(1, 1), (1, 7), (6, 1), (2, 2), (5, 8), (15, 15)] {
            for seed in 0..5 {
                let grid = generated(rows, cols, seed);
                assert_eq!(grid.passage_count(), rows * cols - 1);
                assert_eq!(reachable_from_start(&grid).len(), rows * cols);
            }
        }
    }

    #[test]
    fn walls_are_paired() {
        let grid = generated(9, 11, 42);
        for cell in grid.cells() {
            for (dir, next) in grid.neighbors(cell.coord()) {
                let other = grid.cell(next).unwrap();
                assert_eq!(cell.has_wall(dir), other.has_wall(dir.opposite()));
            }
        }
    }

    #[test]
    fn border_walls_stay() {
        let grid = generated(4, 6, 3);
        for cell in grid.cells() {
            for dir in Direction::ALL {
                if grid.neighbor(cell.coord(), dir).is_none() {
                    assert!(cell.has_wall(dir));
                }
            }
        }
    }

    #[test]
    fn visited_flags_are_reset() {
        let grid = generated(7, 7, 0);
        assert!(grid.cells().all(|c| !c.is_visited()));
        assert!(grid.cells().all(|c| !c.in_path()));
    }

    #[test]
    fn single_cell_has_nothing_to_carve() {
        let grid = generated(1, 1, 0);
        assert_eq!(grid.passage_count(), 0);
        assert_eq!(grid.open_neighbors(grid.start()).count(), 0);
    }

    #[test]
    fn unseeded_generator_works() {
        let mut grid = Grid::new(10, 10).unwrap();
        MazeGenerator::new(None).generate(&mut grid);
        assert_eq!(grid.passage_count(), 99);
    }

    #[test]
    fn same_seed_same_maze() {
        let a = generated(8, 8, 1234);
        let b = generated(8, 8, 1234);
        assert!(a.cells().zip(b.cells()).all(|(x, y)| x.walls() == y.walls()));
    }
}
