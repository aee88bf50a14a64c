//! Errors raised by maze construction and solving

use thiserror::Error;

use crate::grid::Coord;

/// Failures of the maze core
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    /// Grid was requested with zero rows or zero columns.
    #[error("Invalid dimensions: maze must be at least 1x1, got {rows}x{cols}")]
    InvalidDimensions {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },
    /// Search exhausted without ever reaching the end cell.
    #[error("No path from {from} to {to}")]
    PathNotFound {
        /// Start of the search
        from: Coord,
        /// Cell that was never reached
        to: Coord,
    },
}
