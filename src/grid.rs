//! Grid of walled cells
//!
//! Every cell starts with all four walls in place. Walls are always removed
//! and rebuilt in pairs: the wall on side `S` of a cell and the wall on
//! side `S.opposite()` of its neighbor are one physical wall.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::MazeError;

/// Location in the maze
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy, Debug)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Side of a cell
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions, in wall index order
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// One position of the grid
#[derive(Clone, Debug)]
pub struct Cell {
    coord: Coord,
    walls: [bool; 4],
    pub(crate) visited: bool,
    pub(crate) in_path: bool,
}

impl Cell {
    fn new(coord: Coord) -> Self {
        Self {
            coord,
            walls: [true; 4],
            visited: false,
            in_path: false,
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn row(&self) -> usize {
        self.coord.row
    }

    pub fn col(&self) -> usize {
        self.coord.col
    }

    /// Wall flags indexed north, east, south, west
    pub fn walls(&self) -> [bool; 4] {
        self.walls
    }

    pub fn has_wall(&self, dir: Direction) -> bool {
        self.walls[dir.index()]
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    /// Whether the solver currently highlights this cell
    pub fn in_path(&self) -> bool {
        self.in_path
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coord.hash(state);
    }
}

/// Rectangular table of cells
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create a grid of fully walled, unvisited cells
    ///
    /// Returns [MazeError::InvalidDimensions] if either dimension is zero.
    ///
    /// # Examples
    /// ```
    /// use perfect_maze::Grid;
    ///
    /// let grid = Grid::new(3, 4).unwrap();
    /// assert_eq!(grid.cells().count(), 12);
    /// assert!(Grid::new(0, 4).is_err());
    /// ```
    pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        let cells = (0..rows)
            .map(|row| (0..cols).map(|col| Cell::new(Coord { row, col })).collect())
            .collect();
        Ok(Self { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Entry cell, top left corner
    pub fn start(&self) -> Coord {
        Coord::new(0, 0)
    }

    /// Exit cell, bottom right corner
    pub fn end(&self) -> Coord {
        Coord::new(self.rows - 1, self.cols - 1)
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.cells.get(coord.row)?.get(coord.col)
    }

    pub(crate) fn cell_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        self.cells.get_mut(coord.row)?.get_mut(coord.col)
    }

    /// All cells, row by row
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    /// Rows of cells, top to bottom
    pub fn row_cells(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Adjacent coordinate in direction `dir`, if it lies inside the grid
    pub fn neighbor(&self, coord: Coord, dir: Direction) -> Option<Coord> {
        let Coord { row, col } = coord;
        let next = match dir {
            Direction::North => Coord::new(row.checked_sub(1)?, col),
            Direction::East => Coord::new(row, col + 1),
            Direction::South => Coord::new(row + 1, col),
            Direction::West => Coord::new(row, col.checked_sub(1)?),
        };
        self.contains(next).then_some(next)
    }

    /// In-bounds neighbors, regardless of walls
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = (Direction, Coord)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.neighbor(coord, dir).map(|next| (dir, next)))
    }

    /// Neighbors reachable through a removed wall
    pub fn open_neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        self.neighbors(coord).filter_map(move |(dir, next)| {
            let open = self.cell(coord).is_some_and(|cell| !cell.has_wall(dir));
            open.then_some(next)
        })
    }

    /// Remove the wall between `coord` and its neighbor in direction `dir`
    ///
    /// Both sides of the wall are removed. Returns `false` if there is no
    /// neighbor in that direction or the wall was already open.
    pub fn carve(&mut self, coord: Coord, dir: Direction) -> bool {
        self.set_wall(coord, dir, false)
    }

    /// Rebuild the wall between `coord` and its neighbor in direction `dir`
    ///
    /// Returns `false` if there is no neighbor in that direction or the wall
    /// was already standing.
    pub fn build_wall(&mut self, coord: Coord, dir: Direction) -> bool {
        self.set_wall(coord, dir, true)
    }

    fn set_wall(&mut self, coord: Coord, dir: Direction, present: bool) -> bool {
        let Some(next) = self.neighbor(coord, dir) else {
            return false;
        };
        let mut changed = false;
        for (at, side) in [(coord, dir), (next, dir.opposite())] {
            if let Some(cell) = self.cell_mut(at) {
                changed |= cell.walls[side.index()] != present;
                cell.walls[side.index()] = present;
            }
        }
        changed
    }

    /// Number of removed walls, each shared wall counted once
    pub fn passage_count(&self) -> usize {
        self.cells()
            .map(|cell| {
                [Direction::East, Direction::South]
                    .into_iter()
                    .filter(|&dir| {
                        self.neighbor(cell.coord, dir).is_some() && !cell.has_wall(dir)
                    })
                    .count()
            })
            .sum()
    }

    /// Clear visited and in-path marks of every cell
    pub fn reset_flags(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            cell.visited = false;
            cell.in_path = false;
        }
    }

    pub(crate) fn reset_visited(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            cell.visited = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::error::MazeError;
    use crate::grid::{Coord, Direction, Grid};

    #[test]
    fn new_grid_is_fully_walled() {
        let grid = Grid::new(3, 5).unwrap();

        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 5);
        assert_eq!(grid.end(), Coord::new(2, 4));
        assert!(grid.cells().all(|c| c.walls() == [true; 4]));
        assert!(grid.cells().all(|c| !c.is_visited() && !c.in_path()));
        assert_eq!(grid.passage_count(), 0);
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert_eq!(
            Grid::new(0, 3).unwrap_err(),
            MazeError::InvalidDimensions { rows: 0, cols: 3 }
        );
        assert!(Grid::new(2, 0).is_err());
    }

    #[test]
    fn neighbors_are_bounds_checked() {
        let grid = Grid::new(2, 3).unwrap();

        assert_eq!(grid.neighbor(Coord::new(0, 0), Direction::North), None);
        assert_eq!(grid.neighbor(Coord::new(0, 0), Direction::West), None);
        assert_eq!(grid.neighbor(Coord::new(1, 2), Direction::South), None);
        assert_eq!(grid.neighbor(Coord::new(1, 2), Direction::East), None);
        assert_eq!(
            grid.neighbor(Coord::new(1, 1), Direction::North),
            Some(Coord::new(0, 1))
        );

        let corner: Vec<_> = grid.neighbors(Coord::new(0, 0)).collect();
        assert_eq!(
            corner,
            vec![
                (Direction::East, Coord::new(0, 1)),
                (Direction::South, Coord::new(1, 0))
            ]
        );
        assert_eq!(grid.neighbors(Coord::new(1, 1)).count(), 3);
    }

    #[test]
    fn carving_removes_both_sides() {
        let mut grid = Grid::new(2, 2).unwrap();
        let origin = Coord::new(0, 0);

        assert!(grid.carve(origin, Direction::East));
        assert!(!grid.cell(origin).unwrap().has_wall(Direction::East));
        assert!(!grid.cell(Coord::new(0, 1)).unwrap().has_wall(Direction::West));
        assert_eq!(grid.passage_count(), 1);

        // Carving from the other side is a no-op
        assert!(!grid.carve(Coord::new(0, 1), Direction::West));
        assert_eq!(grid.passage_count(), 1);

        let open: Vec<_> = grid.open_neighbors(origin).collect();
        assert_eq!(open, vec![Coord::new(0, 1)]);
    }

    #[test]
    fn carving_off_the_edge_does_nothing() {
        let mut grid = Grid::new(1, 1).unwrap();
        assert!(!grid.carve(Coord::new(0, 0), Direction::North));
        assert_eq!(grid.cell(Coord::new(0, 0)).unwrap().walls(), [true; 4]);
    }

    #[test]
    fn rebuilt_wall_closes_both_sides() {
        let mut grid = Grid::new(2, 1).unwrap();
        let top = Coord::new(0, 0);
        grid.carve(top, Direction::South);

        assert!(grid.build_wall(Coord::new(1, 0), Direction::North));
        assert!(grid.cell(top).unwrap().has_wall(Direction::South));
        assert_eq!(grid.open_neighbors(top).count(), 0);
    }

    #[test]
    fn cells_compare_by_position() {
        let mut grid = Grid::new(1, 2).unwrap();
        let before = grid.cell(Coord::new(0, 0)).unwrap().clone();
        grid.carve(Coord::new(0, 0), Direction::East);
        let after = grid.cell(Coord::new(0, 0)).unwrap();

        assert_eq!(&before, after);
        assert_ne!(after, grid.cell(Coord::new(0, 1)).unwrap());

        let set: HashSet<_> = [before, after.clone()].into_iter().collect();
        assert_eq!(set.len(), 1);
    }
}
