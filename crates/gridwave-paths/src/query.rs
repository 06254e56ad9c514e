//! Query entry points used by a hosting service layer.

use std::fmt;
use std::str::FromStr;

use gridwave_core::{Coord, Grid, GridError, Result};

use crate::bestfirst::{DEAD_END_PENALTY, best_first_path_with_penalty};
use crate::flood::FloodFill;
use crate::lee::lee_path;
use crate::route::Route;
use crate::traits::{Pather, WeightedPather};

/// Routing algorithm selector.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// Wave propagation (Lee): shortest walkable route, ignores cost.
    #[default]
    Wave,
    /// Cost-ordered best-first search.
    BestFirst,
}

impl Algorithm {
    /// Canonical lower-case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Algorithm::Wave => "wave",
            Algorithm::BestFirst => "bestfirst",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = GridError;

    /// Accepts `wave`/`lee` and `bestfirst`/`best-first`/`astar`, in any
    /// case.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wave" | "lee" => Ok(Algorithm::Wave),
            "bestfirst" | "best-first" | "astar" => Ok(Algorithm::BestFirst),
            _ => Err(GridError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Parameters of a single route search.
///
/// Built once, then handed to [`route`]; nothing about a search lives
/// outside this struct and the pather.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteQuery {
    pub start: Coord,
    pub goal: Coord,
    #[cfg_attr(feature = "serde", serde(default))]
    pub algorithm: Algorithm,
    /// Cost multiplier for best-first dead ends.
    #[cfg_attr(feature = "serde", serde(default = "default_penalty"))]
    pub dead_end_penalty: u64,
}

#[cfg(feature = "serde")]
fn default_penalty() -> u64 {
    DEAD_END_PENALTY
}

impl RouteQuery {
    /// A wave search from `start` to `goal`.
    pub fn new(start: Coord, goal: Coord) -> Self {
        Self {
            start,
            goal,
            algorithm: Algorithm::Wave,
            dead_end_penalty: DEAD_END_PENALTY,
        }
    }

    /// Select the algorithm (builder).
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the best-first dead-end penalty (builder).
    pub fn with_dead_end_penalty(mut self, penalty: u64) -> Self {
        self.dead_end_penalty = penalty;
        self
    }
}

/// Create a `rows` x `cols` grid, every cell holding `value`.
pub fn create_grid<T: Clone>(rows: i32, cols: i32, value: T) -> Result<Grid<T>> {
    Grid::new(rows, cols, value)
}

/// Read a cell; `None` when there is no cell at `c`.
pub fn get_cell<T>(grid: &Grid<T>, c: Coord) -> Option<&T> {
    grid.get(c)
}

/// Write a cell, growing the grid if needed.
pub fn set_cell<T>(grid: &mut Grid<T>, c: Coord, value: T) {
    grid.set(c, value);
}

/// Run the search described by `query`. Walkability and cost come from
/// `pather`; the wave search ignores cost.
pub fn route<T, P: WeightedPather<T>>(
    grid: &Grid<T>,
    query: &RouteQuery,
    pather: &P,
) -> Result<Route> {
    log::debug!(
        "{} route {} -> {}",
        query.algorithm,
        query.start,
        query.goal
    );
    match query.algorithm {
        Algorithm::Wave => lee_path(grid, pather, query.start, query.goal),
        Algorithm::BestFirst => best_first_path_with_penalty(
            grid,
            pather,
            query.start,
            query.goal,
            query.dead_end_penalty,
        ),
    }
}

/// Number of cells `pather` can step on.
pub fn walkable_count<T, P: Pather<T>>(grid: &Grid<T>, pather: &P) -> usize {
    grid.iter().filter(|&(c, v)| pather.walkable(v, c)).count()
}

/// Cells connected to `start` under `include`, in discovery order.
pub fn flood<T>(
    grid: &Grid<T>,
    start: Coord,
    include: impl Fn(&T, Coord) -> bool,
) -> Vec<Coord> {
    FloodFill::new(grid).from(start).matching(include).commit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{Open, Walkable};

    #[test]
    fn algorithm_names() {
        assert_eq!("wave".parse::<Algorithm>().unwrap(), Algorithm::Wave);
        assert_eq!("Lee".parse::<Algorithm>().unwrap(), Algorithm::Wave);
        assert_eq!("astar".parse::<Algorithm>().unwrap(), Algorithm::BestFirst);
        assert_eq!("bestfirst".parse::<Algorithm>().unwrap(), Algorithm::BestFirst);
        assert_eq!(
            "dijkstra".parse::<Algorithm>().unwrap_err(),
            GridError::UnknownAlgorithm("dijkstra".into())
        );
        assert_eq!(Algorithm::BestFirst.to_string(), "bestfirst");
    }

    #[test]
    fn query_builder() {
        let q = RouteQuery::new(Coord::new(0, 0), Coord::new(1, 1))
            .with_algorithm(Algorithm::BestFirst)
            .with_dead_end_penalty(4);
        assert_eq!(q.algorithm, Algorithm::BestFirst);
        assert_eq!(q.dead_end_penalty, 4);
        assert_eq!(RouteQuery::new(Coord::ZERO, Coord::ZERO).dead_end_penalty, 10);
    }

    #[test]
    fn host_surface() {
        let mut g = create_grid(5, 5, 0).unwrap();
        assert!(matches!(
            create_grid(0, 5, 0),
            Err(GridError::InvalidDimensions { rows: 0, cols: 5 })
        ));
        set_cell(&mut g, Coord::new(2, 2), 1);
        assert_eq!(get_cell(&g, Coord::new(2, 2)), Some(&1));
        assert_eq!(get_cell(&g, Coord::new(5, 5)), None);

        let floor = Walkable(|v: &i32, _: Coord| *v == 0);
        for algorithm in [Algorithm::Wave, Algorithm::BestFirst] {
            let q = RouteQuery::new(Coord::new(0, 2), Coord::new(4, 2)).with_algorithm(algorithm);
            let r = route(&g, &q, &floor).unwrap();
            assert_eq!(r.start(), Some(Coord::new(0, 2)));
            assert_eq!(r.goal(), Some(Coord::new(4, 2)));
            assert!(!r.contains(&Coord::new(2, 2)));
        }

        assert_eq!(walkable_count(&g, &floor), 24);
        assert_eq!(walkable_count(&g, &Open), 25);
        assert_eq!(flood(&g, Coord::new(0, 0), |&v, _| v == 0).len(), 24);
        assert_eq!(flood(&g, Coord::new(2, 2), |&v, _| v == 1).len(), 1);
        let q = RouteQuery::new(Coord::new(0, 0), Coord::new(4, 4));
        assert_eq!(route(&g, &q, &Open).unwrap().len(), 9);
    }
}
