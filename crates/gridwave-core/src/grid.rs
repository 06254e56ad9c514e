//! The [`Grid`] type: a sparse 2D store of cell values.
//!
//! A grid is an ordered set of columns (indexed by `i`), each an ordered set
//! of rows (indexed by `j`). Storage is sparse: a coordinate without an entry
//! means "no cell here", which is different from a cell holding a default
//! value. Indices may be negative or non-contiguous.

use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::error::{GridError, Result};
use crate::geom::Coord;
use crate::props::Properties;

type Column<T> = BTreeMap<i32, T>;

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A sparse 2D grid of `T` values addressed by [`Coord`].
///
/// Cloning produces an independent structural copy (see
/// [`duplicate`](Grid::duplicate)).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid<T> {
    columns: BTreeMap<i32, Column<T>>,
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Grid<T> {
    /// A grid with no cells. Use [`set`](Grid::set) to populate it.
    pub fn empty() -> Self {
        Self {
            columns: BTreeMap::new(),
        }
    }

    /// Number of defined cells.
    pub fn len(&self) -> usize {
        self.columns.values().map(BTreeMap::len).sum()
    }

    /// Whether the grid holds no cell at all.
    pub fn is_empty(&self) -> bool {
        self.columns.values().all(BTreeMap::is_empty)
    }

    /// Number of columns (including columns without cells).
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns.len()
    }

    /// Number of cells in column `i` (0 if the column is absent).
    pub fn rows_in(&self, i: i32) -> usize {
        self.columns.get(&i).map_or(0, BTreeMap::len)
    }

    /// Column indices in ascending order.
    pub fn column_indices(&self) -> impl Iterator<Item = i32> + '_ {
        self.columns.keys().copied()
    }

    /// Whether column `i` exists.
    #[inline]
    pub fn has_column(&self, i: i32) -> bool {
        self.columns.contains_key(&i)
    }

    // -----------------------------------------------------------------------
    // Cell access
    // -----------------------------------------------------------------------

    /// Whether a cell is defined at `c`.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.columns
            .get(&c.i)
            .is_some_and(|col| col.contains_key(&c.j))
    }

    /// Alias for [`contains`](Grid::contains).
    #[inline]
    pub fn is_in(&self, c: Coord) -> bool {
        self.contains(c)
    }

    /// Negation of [`contains`](Grid::contains).
    #[inline]
    pub fn is_not_in(&self, c: Coord) -> bool {
        !self.contains(c)
    }

    /// Read the value at `c`. `None` means there is no cell; it is not an
    /// error.
    #[inline]
    pub fn get(&self, c: Coord) -> Option<&T> {
        self.columns.get(&c.i)?.get(&c.j)
    }

    /// Mutable access to the value at `c`.
    #[inline]
    pub fn get_mut(&mut self, c: Coord) -> Option<&mut T> {
        self.columns.get_mut(&c.i)?.get_mut(&c.j)
    }

    /// Read the value at `c`, failing with [`GridError::MissingCell`] when
    /// absent.
    pub fn require(&self, c: Coord) -> Result<&T> {
        self.get(c).ok_or(GridError::MissingCell(c))
    }

    /// Write `value` at `c`, creating the cell (and its column) if needed.
    pub fn set(&mut self, c: Coord, value: T) {
        self.columns.entry(c.i).or_default().insert(c.j, value);
    }

    /// Apply `f` to property `name` of the cell at `c`.
    ///
    /// A property that was never set is passed to `f` as its default
    /// (null) value.
    pub fn apply_property(
        &mut self,
        c: Coord,
        name: &str,
        f: impl FnOnce(T::Prop) -> T::Prop,
    ) -> Result<()>
    where
        T: Properties,
    {
        let value = self.get_mut(c).ok_or(GridError::OutOfBounds(c))?;
        if value.apply_property(name, f) {
            Ok(())
        } else {
            Err(GridError::NotARecord(c))
        }
    }

    // -----------------------------------------------------------------------
    // Shape mutation
    // -----------------------------------------------------------------------

    /// Delete row `j` from every column. Other rows keep their indices.
    pub fn remove_row(&mut self, j: i32) {
        for col in self.columns.values_mut() {
            col.remove(&j);
        }
    }

    /// Delete column `i`. Other columns keep their indices.
    pub fn remove_col(&mut self, i: i32) {
        if self.columns.remove(&i).is_some() && self.columns.is_empty() {
            log::debug!("removed column {i}, grid has no columns left");
        }
    }

    // -----------------------------------------------------------------------
    // Iteration
    // -----------------------------------------------------------------------

    /// Iterator over `(Coord, &T)` pairs, column by column, rows ascending.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            outer: self.columns.iter(),
            inner: None,
            remaining: self.len(),
        }
    }

    /// Snapshot of every defined coordinate, in iteration order.
    pub fn coords(&self) -> Vec<Coord> {
        self.iter().map(|(c, _)| c).collect()
    }
}

impl<T: Clone> Grid<T> {
    /// Create a rectangular grid of `cols` columns with `rows` cells each,
    /// every cell holding `value`.
    ///
    /// Fails with [`GridError::InvalidDimensions`] unless both sizes are
    /// positive.
    pub fn new(rows: i32, cols: i32, value: T) -> Result<Self> {
        if rows <= 0 || cols <= 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        let column: Column<T> = (0..rows).map(|j| (j, value.clone())).collect();
        let columns = (0..cols).map(|i| (i, column.clone())).collect();
        Ok(Self { columns })
    }

    /// Copy shape and values. Values are cloned with `T::clone`, so values
    /// that hold shared handles (`Rc`, `Arc`) stay shared with `self`.
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    /// Insert row `j` holding `fill` into every existing column that lacks
    /// it. Existing cells are never overwritten.
    pub fn add_row(&mut self, j: i32, fill: T) {
        for col in self.columns.values_mut() {
            col.entry(j).or_insert_with(|| fill.clone());
        }
    }

    /// Insert column `i` with rows `0..len` holding `fill`, unless column
    /// `i` already exists.
    pub fn add_col(&mut self, i: i32, len: i32, fill: T) {
        self.columns
            .entry(i)
            .or_insert_with(|| (0..len.max(0)).map(|j| (j, fill.clone())).collect());
    }
}

impl<T: Clone + Default> Grid<T> {
    /// Like [`new`](Grid::new), every cell holding `T::default()`.
    pub fn with_default(rows: i32, cols: i32) -> Result<Self> {
        Self::new(rows, cols, T::default())
    }
}

impl<T> Grid<T> {
    /// A grid with the same shape as `self`, every cell holding `fill`.
    pub fn duplicate_structure<U: Clone>(&self, fill: U) -> Grid<U> {
        let columns = self
            .columns
            .iter()
            .map(|(&i, col)| (i, col.keys().map(|&j| (j, fill.clone())).collect()))
            .collect();
        Grid { columns }
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = (Coord, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// Iter
// ---------------------------------------------------------------------------

/// Iterator over `(Coord, &T)` pairs in a [`Grid`].
pub struct Iter<'a, T> {
    outer: btree_map::Iter<'a, i32, Column<T>>,
    inner: Option<(i32, btree_map::Iter<'a, i32, T>)>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (Coord, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((i, rows)) = &mut self.inner {
                if let Some((&j, value)) = rows.next() {
                    self.remaining -= 1;
                    return Some((Coord::new(*i, j), value));
                }
            }
            let (&i, col) = self.outer.next()?;
            self.inner = Some((i, col.iter()));
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
