//! Text drawing of a grid
//!
//! ```text
//! +---+---+
//! | *   * |
//! +---+   +
//! |     * |
//! +---+---+
//! ```

use std::fmt;

use itertools::Itertools;

use crate::grid::{Cell, Direction, Grid};

const CORNER: &str = "+";
const H_WALL: &str = "---";
const H_OPEN: &str = "   ";
const V_WALL: &str = "|";
const V_OPEN: &str = " ";
const IN_PATH: &str = " * ";
const EMPTY: &str = "   ";

fn horizontal(cells: &[Cell], side: Direction) -> String {
    let segments = cells
        .iter()
        .map(|cell| if cell.has_wall(side) { H_WALL } else { H_OPEN })
        .join(CORNER);
    format!("{CORNER}{segments}{CORNER}")
}

fn interior(cells: &[Cell]) -> String {
    let body: String = cells
        .iter()
        .map(|cell| {
            let wall = if cell.has_wall(Direction::West) { V_WALL } else { V_OPEN };
            let fill = if cell.in_path() { IN_PATH } else { EMPTY };
            format!("{wall}{fill}")
        })
        .collect();
    let east = match cells.last() {
        Some(cell) if !cell.has_wall(Direction::East) => V_OPEN,
        _ => V_WALL,
    };
    format!("{body}{east}")
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = Vec::with_capacity(self.rows() * 2 + 1);
        if let Some(top) = self.row_cells().next() {
            lines.push(horizontal(top, Direction::North));
        }
        for cells in self.row_cells() {
            lines.push(interior(cells));
            lines.push(horizontal(cells, Direction::South));
        }
        write!(f, "{}", lines.iter().join("\n"))
    }
}
