//! Flood fill: the connected set of cells reachable from a seed.

use gridwave_core::each::AcceptAll;
use gridwave_core::{Coord, Grid};

use crate::neighbors::siblings;

/// Flood fill builder.
///
/// ```
/// use gridwave_core::{Coord, Grid};
/// use gridwave_paths::FloodFill;
///
/// let g = Grid::new(4, 4, 0).unwrap();
/// let all = FloodFill::new(&g).from(Coord::new(1, 1)).commit();
/// assert_eq!(all.len(), 16);
/// ```
pub struct FloodFill<'g, T, F = AcceptAll<T>> {
    grid: &'g Grid<T>,
    seed: Coord,
    include: F,
}

impl<'g, T> FloodFill<'g, T> {
    /// Flood `grid` from (0, 0), including every cell.
    pub fn new(grid: &'g Grid<T>) -> Self {
        Self {
            grid,
            seed: Coord::ZERO,
            include: |_, _| true,
        }
    }
}

impl<'g, T, F> FloodFill<'g, T, F>
where
    F: Fn(&T, Coord) -> bool,
{
    /// Set the seed cell.
    pub fn from(mut self, seed: Coord) -> Self {
        self.seed = seed;
        self
    }

    /// Set the inclusion predicate `include(value, coord)`.
    pub fn matching<G>(self, include: G) -> FloodFill<'g, T, G>
    where
        G: Fn(&T, Coord) -> bool,
    {
        FloodFill {
            grid: self.grid,
            seed: self.seed,
            include,
        }
    }

    /// Run the fill and return the included coordinates in discovery order.
    ///
    /// Expansion is depth-first: each included cell's siblings are tried in
    /// adjacency order, and an included sibling is fully explored before the
    /// next one is tried. The input grid is never written; visited state
    /// lives in a scratch grid of the same shape.
    pub fn commit(&self) -> Vec<Coord> {
        let mut visited = self.grid.duplicate_structure(false);
        let mut filled = Vec::new();

        if !self.enter(self.seed, &mut visited, &mut filled) {
            log::debug!("flood fill from {}: seed not included", self.seed);
            return filled;
        }

        // Each frame is a cell whose siblings are still being tried.
        let mut stack = vec![Frame::new(self.grid, self.seed)];
        while let Some(frame) = stack.last_mut() {
            let Some(next) = frame.next() else {
                stack.pop();
                continue;
            };
            if visited.get(next) != Some(&false) {
                continue;
            }
            let entered = self.enter(next, &mut visited, &mut filled);
            visited.set(next, true);
            if entered {
                stack.push(Frame::new(self.grid, next));
            }
        }

        log::debug!("flood fill from {}: {} cells", self.seed, filled.len());
        filled
    }

    fn enter(&self, c: Coord, visited: &mut Grid<bool>, filled: &mut Vec<Coord>) -> bool {
        let Some(value) = self.grid.get(c) else {
            return false;
        };
        if visited.get(c) != Some(&false) || !(self.include)(value, c) {
            return false;
        }
        filled.push(c);
        visited.set(c, true);
        true
    }
}

struct Frame {
    siblings: std::vec::IntoIter<Coord>,
}

impl Frame {
    fn new<T>(grid: &Grid<T>, c: Coord) -> Self {
        Self {
            siblings: siblings(grid, c).into_iter(),
        }
    }

    fn next(&mut self) -> Option<Coord> {
        self.siblings.next()
    }
}
