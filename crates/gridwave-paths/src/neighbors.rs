use gridwave_core::{Coord, Grid};

/// Orthogonal siblings of `c` that exist in `grid`.
///
/// Order is fixed: `(i-1, j)`, `(i+1, j)`, `(i, j-1)`, `(i, j+1)`. The path
/// finders break ties by this order. Diagonals never participate and `c`
/// itself is never included. A cell at the edge of the `i32` range simply
/// has fewer siblings.
pub fn siblings<T>(grid: &Grid<T>, c: Coord) -> Vec<Coord> {
    c.neighbors_4()
        .into_iter()
        .flatten()
        .filter(|&n| grid.contains(n))
        .collect()
}

/// Call `f(value, coord)` for each sibling of `c`, in adjacency order.
pub fn each_sibling<T>(grid: &Grid<T>, c: Coord, mut f: impl FnMut(&T, Coord)) {
    for n in c.neighbors_4().into_iter().flatten() {
        if let Some(value) = grid.get(n) {
            f(value, n);
        }
    }
}

/// Cached sibling computation helper.
///
/// Same enumeration as [`siblings`] but reuses one buffer across calls,
/// which matters inside the search loops.
pub struct Neighbors {
    buf: Vec<Coord>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// In-grid orthogonal siblings of `c`, in adjacency order.
    pub fn siblings<T>(&mut self, grid: &Grid<T>, c: Coord) -> &[Coord] {
        self.cardinal(c, |n| grid.contains(n))
    }

    /// Orthogonal neighbors of `c` in adjacency order, keeping only those
    /// for which `keep` returns `true`.
    pub fn cardinal(&mut self, c: Coord, keep: impl Fn(Coord) -> bool) -> &[Coord] {
        self.buf.clear();
        for n in c.neighbors_4().into_iter().flatten() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_has_four() {
        let g = Grid::new(6, 6, 0).unwrap();
        let s = siblings(&g, Coord::new(2, 3));
        assert_eq!(s.len(), 4);
        assert!(!s.contains(&Coord::new(2, 3)));
        for c in [(2, 2), (2, 4), (3, 3), (1, 3)] {
            assert!(s.contains(&Coord::from(c)));
        }
    }

    #[test]
    fn corners_have_two() {
        let g = Grid::new(5, 5, 0).unwrap();
        for (c, expect) in [
            ((0, 0), vec![(1, 0), (0, 1)]),
            ((4, 0), vec![(3, 0), (4, 1)]),
            ((0, 4), vec![(1, 4), (0, 3)]),
            ((4, 4), vec![(3, 4), (4, 3)]),
        ] {
            let expect: Vec<Coord> = expect.into_iter().map(Coord::from).collect();
            assert_eq!(siblings(&g, Coord::from(c)), expect);
        }
    }

    #[test]
    fn edge_has_three() {
        let g = Grid::new(5, 5, 0).unwrap();
        assert_eq!(siblings(&g, Coord::new(0, 2)).len(), 3);
    }

    #[test]
    fn gaps_are_not_siblings() {
        let mut g = Grid::new(3, 3, 0).unwrap();
        g.remove_row(0);
        g.remove_col(2);
        assert_eq!(
            siblings(&g, Coord::new(1, 1)),
            vec![Coord::new(0, 1), Coord::new(1, 2)]
        );
    }

    #[test]
    fn edge_of_index_range() {
        let mut g = Grid::empty();
        for c in [(i32::MAX, 0), (i32::MAX - 1, 0), (i32::MIN, 0), (i32::MAX, 1)] {
            g.set(Coord::from(c), 1);
        }
        assert_eq!(
            siblings(&g, Coord::new(i32::MAX, 0)),
            vec![Coord::new(i32::MAX - 1, 0), Coord::new(i32::MAX, 1)]
        );
        assert!(siblings(&g, Coord::new(i32::MIN, 0)).is_empty());
        let mut nb = Neighbors::new();
        assert_eq!(nb.siblings(&g, Coord::new(i32::MAX, 1)), &[Coord::new(i32::MAX, 0)]);
    }

    #[test]
    fn each_sibling_visits_values() {
        let mut g = Grid::new(3, 3, 0).unwrap();
        g.set(Coord::new(1, 0), 4);
        g.set(Coord::new(0, 1), 6);
        let mut seen = Vec::new();
        each_sibling(&g, Coord::ZERO, |&v, c| seen.push((v, c)));
        assert_eq!(seen, vec![(4, Coord::new(1, 0)), (6, Coord::new(0, 1))]);
    }

    #[test]
    fn buffered_matches_free_fn() {
        let g = Grid::new(4, 4, 0).unwrap();
        let mut nb = Neighbors::new();
        for c in g.coords() {
            assert_eq!(nb.siblings(&g, c), siblings(&g, c).as_slice());
        }
        let kept = nb.cardinal(Coord::ZERO, |n| n.i >= 0 && n.j >= 0).to_vec();
        assert_eq!(kept, vec![Coord::new(1, 0), Coord::new(0, 1)]);
    }
}
