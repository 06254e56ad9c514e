//! Straight-line traversal and direction replay.
//!
//! ```
//! use gridwave_core::{Coord, Grid};
//! use gridwave_paths::Traversal;
//!
//! let g = Grid::new(5, 5, 0).unwrap();
//! let mut t = Traversal::new(&g, Coord::new(0, 0));
//! let labels = t.to(Coord::new(2, 1)).directions();
//! let replayed = t.go(labels).unwrap().clone();
//! assert_eq!(replayed.goal(), Some(Coord::new(2, 1)));
//! ```

use std::cmp::Ordering;

use gridwave_core::{Coord, Direction, Grid, GridError, Result};

use crate::route::Route;

/// Builds routes from a fixed start coordinate on a grid.
///
/// The last built route stays readable through [`route`](Traversal::route),
/// including the partial route left behind by a failed
/// [`go`](Traversal::go).
pub struct Traversal<'g, T> {
    grid: &'g Grid<T>,
    start: Coord,
    route: Route,
}

impl<'g, T> Traversal<'g, T> {
    /// Start a traversal at `start`.
    pub fn new(grid: &'g Grid<T>, start: Coord) -> Self {
        Self {
            grid,
            start,
            route: Route::new(start),
        }
    }

    /// The starting coordinate.
    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    /// The route built by the last call to [`to`](Self::to) or
    /// [`go`](Self::go).
    #[inline]
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Walk straight to `goal`: close the `j` gap one step at a time, then
    /// the `i` gap. The route holds every visited coordinate, both ends
    /// included, so its distance is the Manhattan distance.
    ///
    /// Intermediate cells are not checked against the grid.
    pub fn to(&mut self, goal: Coord) -> &Route {
        let mut pos = self.start;
        self.route = Route::new(pos);
        loop {
            match pos.j.cmp(&goal.j) {
                Ordering::Less => pos.j += 1,
                Ordering::Greater => pos.j -= 1,
                Ordering::Equal => break,
            }
            self.route.push(pos);
        }
        loop {
            match pos.i.cmp(&goal.i) {
                Ordering::Less => pos.i += 1,
                Ordering::Greater => pos.i -= 1,
                Ordering::Equal => break,
            }
            self.route.push(pos);
        }
        &self.route
    }

    /// Replay `directions` from the start.
    ///
    /// Fails with [`GridError::BoundaryExceeded`] as soon as a step lands
    /// outside the grid or the `i32` range; the route then holds every coordinate up to, but
    /// not including, the offending step.
    pub fn go<I>(&mut self, directions: I) -> Result<&Route>
    where
        I: IntoIterator<Item = Direction>,
    {
        let mut pos = self.start;
        self.route = Route::new(pos);
        for direction in directions {
            let Some(next) = pos.step(direction).filter(|&n| self.grid.contains(n)) else {
                return Err(GridError::BoundaryExceeded { at: pos, direction });
            };
            self.route.push(next);
            pos = next;
        }
        Ok(&self.route)
    }

    /// Parse upper-case labels (`"UP"`, `"LEFT"`, ...) and replay them with
    /// [`go`](Self::go).
    pub fn go_labels<S: AsRef<str>>(&mut self, labels: &[S]) -> Result<&Route> {
        let directions = labels
            .iter()
            .map(|s| s.as_ref().parse())
            .collect::<Result<Vec<Direction>>>()?;
        self.go(directions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::manhattan;

    #[test]
    fn closes_j_gap_first() {
        let g = Grid::new(5, 5, 0).unwrap();
        let mut t = Traversal::new(&g, Coord::new(0, 0));
        let r = t.to(Coord::new(2, 2)).clone();
        let expect: Vec<Coord> = [(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]
            .into_iter()
            .map(Coord::from)
            .collect();
        assert_eq!(r.coords(), expect.as_slice());
        assert_eq!(
            r.directions(),
            vec![
                Direction::Down,
                Direction::Down,
                Direction::Right,
                Direction::Right
            ]
        );
    }

    #[test]
    fn distance_is_manhattan() {
        let g = Grid::new(8, 8, 0).unwrap();
        for (a, b) in [((0, 0), (7, 7)), ((5, 1), (2, 6)), ((3, 3), (3, 3)), ((7, 0), (0, 0))] {
            let (a, b) = (Coord::from(a), Coord::from(b));
            let mut t = Traversal::new(&g, a);
            let r = t.to(b);
            assert_eq!(r.distance() as u64, manhattan(a, b));
            assert_eq!(r.start(), Some(a));
            assert_eq!(r.goal(), Some(b));
        }
    }

    #[test]
    fn directions_round_trip() {
        let g = Grid::new(6, 6, 0).unwrap();
        for (a, b) in [((0, 5), (5, 0)), ((4, 4), (1, 2)), ((2, 0), (2, 5))] {
            let (a, b) = (Coord::from(a), Coord::from(b));
            let mut t = Traversal::new(&g, a);
            let straight = t.to(b).clone();
            let replayed = t.go(straight.directions()).unwrap();
            assert_eq!(*replayed, straight);
        }
    }

    #[test]
    fn go_stops_at_boundary() {
        let g = Grid::new(3, 3, 0).unwrap();
        let mut t = Traversal::new(&g, Coord::new(1, 1));
        let err = t
            .go([Direction::Right, Direction::Right, Direction::Down])
            .unwrap_err();
        assert_eq!(
            err,
            GridError::BoundaryExceeded {
                at: Coord::new(2, 1),
                direction: Direction::Right
            }
        );
        assert_eq!(t.route().coords(), &[Coord::new(1, 1), Coord::new(2, 1)]);
    }

    #[test]
    fn edge_of_index_range() {
        let mut g = Grid::empty();
        g.set(Coord::new(i32::MAX, i32::MIN), 0);
        g.set(Coord::new(i32::MAX, i32::MIN + 1), 0);
        let mut t = Traversal::new(&g, Coord::new(i32::MAX, i32::MIN));
        assert_eq!(t.to(Coord::new(i32::MAX, i32::MIN + 1)).distance(), 1);
        assert_eq!(
            t.go([Direction::Down, Direction::Right]).unwrap_err(),
            GridError::BoundaryExceeded {
                at: Coord::new(i32::MAX, i32::MIN + 1),
                direction: Direction::Right
            }
        );
        assert_eq!(
            t.go([Direction::Up]).unwrap_err(),
            GridError::BoundaryExceeded {
                at: Coord::new(i32::MAX, i32::MIN),
                direction: Direction::Up
            }
        );

        let mut far = Traversal::new(&g, Coord::new(i32::MIN, 0));
        let r = far.to(Coord::new(i32::MIN + 3, -2));
        assert_eq!(r.distance() as u64, 5);
    }

    #[test]
    fn go_from_labels() {
        let g = Grid::new(3, 3, 0).unwrap();
        let mut t = Traversal::new(&g, Coord::new(0, 0));
        let r = t.go_labels(&["RIGHT", "DOWN", "DOWN"]).unwrap();
        assert_eq!(r.goal(), Some(Coord::new(1, 2)));
        assert_eq!(
            t.go_labels(&["SIDEWAYS"]).unwrap_err(),
            GridError::UnknownDirection("SIDEWAYS".into())
        );
    }
}
