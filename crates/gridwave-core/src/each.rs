//! Filtered iteration over every cell of a [`Grid`].
//!
//! ```
//! use gridwave_core::{Coord, Grid};
//!
//! let mut g = Grid::new(3, 3, 0).unwrap();
//! let n = g.each().matching(|_, c: Coord| c.i == c.j).set_value(1);
//! assert_eq!(n, 3);
//! assert_eq!(g.each().matching(|&v, _| v == 0).count(), 6);
//! ```

use crate::error::{GridError, Result};
use crate::geom::Coord;
use crate::grid::Grid;
use crate::props::Properties;

/// Filter accepted by [`Grid::each`] before [`EachCell::matching`] narrows it.
pub type AcceptAll<T> = fn(&T, Coord) -> bool;

/// A visitor over the cells of a grid that satisfy a filter.
///
/// Every mutating pass is committed cell by cell: the filter and transform
/// for a later cell see the writes made for earlier cells.
pub struct EachCell<'g, T, F = AcceptAll<T>> {
    grid: &'g mut Grid<T>,
    filter: F,
}

impl<T> Grid<T> {
    /// Visit every cell. Narrow the selection with
    /// [`matching`](EachCell::matching).
    pub fn each(&mut self) -> EachCell<'_, T> {
        EachCell {
            grid: self,
            filter: |_, _| true,
        }
    }
}

impl<'g, T, F> EachCell<'g, T, F>
where
    F: Fn(&T, Coord) -> bool,
{
    /// Replace the filter. `filter(value, coord)` returns `true` for cells
    /// that should be visited.
    pub fn matching<G>(self, filter: G) -> EachCell<'g, T, G>
    where
        G: Fn(&T, Coord) -> bool,
    {
        EachCell {
            grid: self.grid,
            filter,
        }
    }

    /// Number of cells satisfying the filter.
    pub fn count(&self) -> usize {
        self.grid
            .iter()
            .filter(|&(c, v)| (self.filter)(v, c))
            .count()
    }

    /// Overwrite every matching cell with `value`. Returns the number of
    /// cells written.
    pub fn set_value(&mut self, value: T) -> usize
    where
        T: Clone,
    {
        self.visit(|g, c| g.set(c, value.clone()))
    }

    /// Replace every matching cell with `f(value, coord)`.
    pub fn map(&mut self, mut f: impl FnMut(&T, Coord) -> T) -> usize {
        self.visit(|g, c| {
            if let Some(v) = g.get_mut(c) {
                *v = f(&*v, c);
            }
        })
    }

    /// Replace every matching cell with `f(grid, coord)`.
    ///
    /// The transform reads the grid as it stands mid-pass, so cells visited
    /// earlier already hold their new values.
    pub fn update(&mut self, mut f: impl FnMut(&Grid<T>, Coord) -> T) -> usize {
        self.visit(|g, c| {
            let value = f(g, c);
            g.set(c, value);
        })
    }

    /// Apply `f` to property `name` of every matching cell. Returns the
    /// number of cells changed, or [`GridError::NotARecord`] at the first
    /// matching cell that cannot hold properties.
    pub fn apply_property(
        &mut self,
        name: &str,
        mut f: impl FnMut(T::Prop) -> T::Prop,
    ) -> Result<usize>
    where
        T: Properties,
    {
        let mut count = 0;
        for c in self.grid.coords() {
            let Some(value) = self.grid.get_mut(c) else {
                continue;
            };
            if !(self.filter)(&*value, c) {
                continue;
            }
            if !value.apply_property(name, &mut f) {
                return Err(GridError::NotARecord(c));
            }
            count += 1;
        }
        Ok(count)
    }

    fn visit(&mut self, mut act: impl FnMut(&mut Grid<T>, Coord)) -> usize {
        let mut count = 0;
        for c in self.grid.coords() {
            let selected = self.grid.get(c).is_some_and(|v| (self.filter)(v, c));
            if selected {
                act(&mut *self.grid, c);
                count += 1;
            }
        }
        count
    }
}
