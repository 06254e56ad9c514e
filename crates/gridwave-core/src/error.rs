//! The [`GridError`] type shared by the grid store and the search crates.

use thiserror::Error;

use crate::geom::{Coord, Direction};

/// Failures raised at the point of violation. None are retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A grid was requested with a non-positive number of cells.
    #[error("grid dimensions must be positive, got {rows} rows x {cols} columns")]
    InvalidDimensions { rows: i32, cols: i32 },

    /// A property mutation targeted a cell that does not exist.
    #[error("cell {0} is out of bounds")]
    OutOfBounds(Coord),

    /// A lookup that requires a cell found none.
    #[error("no cell at {0}")]
    MissingCell(Coord),

    /// The cell value cannot hold named properties.
    #[error("cell {0} does not hold named properties")]
    NotARecord(Coord),

    /// A traversal step would leave the grid.
    #[error("moving {direction} from {at} exceeds the boundary of the grid")]
    BoundaryExceeded { at: Coord, direction: Direction },

    /// No route connects the two cells under the walkability predicate.
    #[error("no route from {from} to {to}")]
    Unreachable { from: Coord, to: Coord },

    /// An algorithm name the router does not know.
    #[error("unknown routing algorithm {0:?}")]
    UnknownAlgorithm(String),

    /// A direction label other than UP, DOWN, LEFT or RIGHT.
    #[error("unknown direction {0:?}")]
    UnknownDirection(String),
}

/// Shorthand for results carrying a [`GridError`].
pub type Result<T> = std::result::Result<T, GridError>;
