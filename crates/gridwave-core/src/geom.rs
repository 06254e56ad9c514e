//! Geometry primitives: [`Coord`] and [`Direction`].
//!
//! A `Coord` addresses a cell as `(i, j)`: `i` selects the column, `j` the
//! row inside that column. Moving right grows `i`, moving down grows `j`.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::GridError;

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A grid coordinate. Equality is structural; a `Coord` owns no value and is
/// re-resolved against a grid on every access.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub i: i32,
    pub j: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { i: 0, j: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(i: i32, j: i32) -> Self {
        Self { i, j }
    }

    /// Return a coordinate shifted by (di, dj).
    ///
    /// Overflows like `+`; use [`checked_shift`](Self::checked_shift) near
    /// the ends of the `i32` range.
    #[inline]
    pub const fn shift(self, di: i32, dj: i32) -> Self {
        Self {
            i: self.i + di,
            j: self.j + dj,
        }
    }

    /// Shift by (di, dj), or `None` if either axis leaves the `i32` range.
    #[inline]
    pub const fn checked_shift(self, di: i32, dj: i32) -> Option<Self> {
        match (self.i.checked_add(di), self.j.checked_add(dj)) {
            (Some(i), Some(j)) => Some(Self { i, j }),
            _ => None,
        }
    }

    /// The coordinate one step away in direction `d`, or `None` if the step
    /// leaves the `i32` range.
    #[inline]
    pub const fn step(self, d: Direction) -> Option<Self> {
        let (di, dj) = d.offset();
        self.checked_shift(di, dj)
    }

    /// The four orthogonal offsets in adjacency order:
    /// `(i-1, j)`, `(i+1, j)`, `(i, j-1)`, `(i, j+1)`.
    ///
    /// An offset that would overflow `i32` is `None`; it never wraps to the
    /// far side of the range. Path finders break ties by this order, so it
    /// must never change.
    #[inline]
    pub const fn neighbors_4(self) -> [Option<Coord>; 4] {
        [
            self.checked_shift(-1, 0),
            self.checked_shift(1, 0),
            self.checked_shift(0, -1),
            self.checked_shift(0, 1),
        ]
    }

    /// The direction label for a one-axis move from `self` to `to`.
    ///
    /// The `i` axis is checked first. Returns `None` when both coordinates
    /// are equal.
    pub fn direction_to(self, to: Coord) -> Option<Direction> {
        if self.i < to.i {
            Some(Direction::Right)
        } else if self.i > to.i {
            Some(Direction::Left)
        } else if self.j < to.j {
            Some(Direction::Down)
        } else if self.j > to.j {
            Some(Direction::Up)
        } else {
            None
        }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((i, j): (i32, i32)) -> Self {
        Self::new(i, j)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.i + rhs.i, self.j + rhs.j)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.i - rhs.i, self.j - rhs.j)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the four symbolic move labels.
///
/// `Up` decreases `j`, `Down` increases `j`, `Left` decreases `i` and
/// `Right` increases `i`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four labels.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The `(di, dj)` offset of a single step.
    #[inline]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The label for the opposite move.
    #[inline]
    pub const fn reverse(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Upper-case label (`"UP"`, `"DOWN"`, `"LEFT"`, `"RIGHT"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "UP" => Ok(Direction::Up),
            "DOWN" => Ok(Direction::Down),
            "LEFT" => Ok(Direction::Left),
            "RIGHT" => Ok(Direction::Right),
            _ => Err(GridError::UnknownDirection(s.to_string())),
        }
    }
}
