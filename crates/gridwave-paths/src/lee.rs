//! Wave propagation (Lee) routing.
//!
//! The search runs in three phases:
//!
//! 1. build a wave grid with the input's shape, walkable cells at 0 and
//!    every other cell at [`WALL`];
//! 2. label the start 1 and spread outward layer by layer, each walkable
//!    unlabelled sibling getting its parent's label plus one;
//! 3. walk back from the goal along strictly decreasing labels.

use std::collections::VecDeque;

use gridwave_core::{Coord, Grid, GridError, Result};

use crate::neighbors::Neighbors;
use crate::route::Route;
use crate::traits::Pather;

/// Wave label of a cell that can never be entered.
pub const WALL: u32 = u32::MAX;

/// Label of the start cell.
pub const ORIGIN: u32 = 1;

/// Build the wave grid of `grid` spreading from `from`.
///
/// Every walkable cell connected to `from` holds its distance from `from`
/// plus one; unreachable walkable cells hold 0 and non-walkable cells hold
/// [`WALL`]. The start is labelled [`ORIGIN`] even if it is not walkable
/// itself.
pub fn wave_map<T, P: Pather<T>>(grid: &Grid<T>, pather: &P, from: Coord) -> Result<Grid<u32>> {
    grid.require(from)?;

    let mut wave = grid.duplicate_structure(0u32);
    for (c, value) in grid.iter() {
        if !pather.walkable(value, c) {
            wave.set(c, WALL);
        }
    }

    wave.set(from, ORIGIN);
    let mut queue = VecDeque::from([from]);
    let mut nbrs = Neighbors::new();
    let mut labelled = 1usize;

    while let Some(c) = queue.pop_front() {
        let next = label(&wave, c) + 1;
        for &n in nbrs.siblings(&wave, c) {
            if wave.get(n) == Some(&0) {
                wave.set(n, next);
                queue.push_back(n);
                labelled += 1;
            }
        }
    }

    log::trace!("wave from {from}: {labelled} cells labelled");
    Ok(wave)
}

/// Route from `from` to `to` along a shortest walkable path.
///
/// Backtracking from the goal always steps to the sibling with the smallest
/// label below the current one; ties go to the first sibling in adjacency
/// order.
///
/// Fails with [`GridError::MissingCell`] if either end is not in the grid
/// and with [`GridError::Unreachable`] if the goal is never labelled.
pub fn lee_path<T, P: Pather<T>>(
    grid: &Grid<T>,
    pather: &P,
    from: Coord,
    to: Coord,
) -> Result<Route> {
    grid.require(to)?;
    let wave = wave_map(grid, pather, from)?;

    let mut level = label(&wave, to);
    if level == 0 || level == WALL {
        return Err(GridError::Unreachable { from, to });
    }

    let mut coords = vec![to];
    let mut pos = to;
    let mut nbrs = Neighbors::new();
    while pos != from {
        let mut best: Option<(Coord, u32)> = None;
        for &n in nbrs.siblings(&wave, pos) {
            let l = label(&wave, n);
            if l >= ORIGIN && l < level && best.is_none_or(|(_, b)| l < b) {
                best = Some((n, l));
            }
        }
        let Some((n, l)) = best else {
            return Err(GridError::Unreachable { from, to });
        };
        coords.push(n);
        pos = n;
        level = l;
    }
    coords.reverse();

    log::debug!("wave route {from} -> {to}: {} cells", coords.len());
    Ok(Route::from(coords))
}

#[inline]
fn label(wave: &Grid<u32>, c: Coord) -> u32 {
    wave.get(c).copied().unwrap_or(WALL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{Open, Walkable};

    fn adjacent(a: Coord, b: Coord) -> bool {
        (a.i - b.i).abs() + (a.j - b.j).abs() == 1
    }

    #[test]
    fn wave_labels_are_bfs_distances() {
        let g = Grid::new(4, 4, 0).unwrap();
        let wave = wave_map(&g, &Open, Coord::new(0, 0)).unwrap();
        for (c, &l) in wave.iter() {
            assert_eq!(l, (c.i + c.j) as u32 + 1);
        }
    }

    #[test]
    fn open_grid_shortest() {
        let g = Grid::new(5, 5, 0).unwrap();
        let r = lee_path(&g, &Open, Coord::new(4, 0), Coord::new(0, 4)).unwrap();
        assert_eq!(r.len(), 9);
        assert_eq!(r.start(), Some(Coord::new(4, 0)));
        assert_eq!(r.goal(), Some(Coord::new(0, 4)));
        assert!(r.windows(2).all(|w| adjacent(w[0], w[1])));
    }

    #[test]
    fn backtrace_tie_breaks_by_adjacency_order() {
        // From the goal, (i-1, j) is preferred over (i, j-1) whenever both
        // descend, so the route leaves (0,0) downward and ends moving right.
        let g = Grid::new(3, 3, 0).unwrap();
        let r = lee_path(&g, &Open, Coord::new(0, 0), Coord::new(2, 2)).unwrap();
        let expect: Vec<Coord> = [(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]
            .into_iter()
            .map(Coord::from)
            .collect();
        assert_eq!(r.coords(), expect.as_slice());
    }

    #[test]
    fn avoids_obstacles() {
        let mut g = Grid::new(5, 5, 0).unwrap();
        let blocked = [(4, 1), (3, 1), (3, 2), (3, 3)].map(Coord::from);
        for c in blocked {
            g.set(c, 1);
        }
        let floor = Walkable(|v: &i32, _: Coord| *v == 0);
        let r = lee_path(&g, &floor, Coord::new(4, 0), Coord::new(0, 4)).unwrap();
        assert_eq!(r.start(), Some(Coord::new(4, 0)));
        assert_eq!(r.goal(), Some(Coord::new(0, 4)));
        assert!(blocked.iter().all(|b| !r.contains(b)));
        assert!(r.windows(2).all(|w| adjacent(w[0], w[1])));
    }

    #[test]
    fn unreachable_goal() {
        let mut g = Grid::new(3, 3, 0).unwrap();
        for j in 0..3 {
            g.set(Coord::new(1, j), 1);
        }
        let floor = Walkable(|v: &i32, _: Coord| *v == 0);
        let err = lee_path(&g, &floor, Coord::new(0, 0), Coord::new(2, 2)).unwrap_err();
        assert_eq!(
            err,
            GridError::Unreachable {
                from: Coord::new(0, 0),
                to: Coord::new(2, 2)
            }
        );
        // a blocked goal is never labelled either
        let err = lee_path(&g, &floor, Coord::new(0, 0), Coord::new(1, 1)).unwrap_err();
        assert!(matches!(err, GridError::Unreachable { .. }));
    }

    #[test]
    fn missing_ends() {
        let g = Grid::new(3, 3, 0).unwrap();
        assert_eq!(
            lee_path(&g, &Open, Coord::new(5, 5), Coord::new(0, 0)).unwrap_err(),
            GridError::MissingCell(Coord::new(5, 5))
        );
        assert_eq!(
            lee_path(&g, &Open, Coord::new(0, 0), Coord::new(0, 3)).unwrap_err(),
            GridError::MissingCell(Coord::new(0, 3))
        );
    }

    #[test]
    fn start_is_goal() {
        let g = Grid::new(3, 3, 0).unwrap();
        let r = lee_path(&g, &Open, Coord::new(1, 1), Coord::new(1, 1)).unwrap();
        assert_eq!(r.coords(), &[Coord::new(1, 1)]);
    }

    #[test]
    fn corner_of_index_range() {
        let mut g = Grid::empty();
        for c in [(i32::MAX, i32::MAX), (i32::MAX - 1, i32::MAX), (i32::MAX - 1, i32::MAX - 1)] {
            g.set(Coord::from(c), 0u8);
        }
        let r = lee_path(
            &g,
            &Open,
            Coord::new(i32::MAX, i32::MAX),
            Coord::new(i32::MAX - 1, i32::MAX - 1),
        )
        .unwrap();
        assert_eq!(r.distance(), 2);
        assert!(r.contains(&Coord::new(i32::MAX - 1, i32::MAX)));
    }

    #[test]
    fn input_grid_untouched() {
        let g = Grid::new(4, 4, 3).unwrap();
        let before = g.clone();
        lee_path(&g, &Open, Coord::new(0, 0), Coord::new(3, 3)).unwrap();
        assert_eq!(g, before);
    }
}
