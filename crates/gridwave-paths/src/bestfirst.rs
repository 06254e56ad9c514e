//! Cost-ordered best-first routing.
//!
//! Partial routes are kept in a worklist sorted by accumulated cost. The
//! cheapest one is extended to every walkable sibling of its last cell that
//! it has not already visited. There is no estimate of the remaining
//! distance, so this is not A*: expansion order depends only on what each
//! route has cost so far.
//!
//! Every simple path is a potential worklist entry, so the search is only
//! practical on small grids or with a restrictive walkability predicate.

use std::collections::VecDeque;

use gridwave_core::{Coord, Grid, GridError, Result};

use crate::neighbors::Neighbors;
use crate::route::Route;
use crate::traits::WeightedPather;

/// Factor applied to the cost of a route that cannot be extended.
pub const DEAD_END_PENALTY: u64 = 10;

struct Partial {
    cost: u64,
    coords: Vec<Coord>,
    dead: bool,
}

/// Route from `from` to `to` with [`DEAD_END_PENALTY`].
pub fn best_first_path<T, P: WeightedPather<T>>(
    grid: &Grid<T>,
    pather: &P,
    from: Coord,
    to: Coord,
) -> Result<Route> {
    best_first_path_with_penalty(grid, pather, from, to, DEAD_END_PENALTY)
}

/// Route from `from` to `to`, the cheapest route first.
///
/// Each round takes the first route of the worklist:
///
/// - if it ends at `to`, it is the result;
/// - otherwise it is extended to each walkable sibling not already on it
///   (only to `to` when `to` is one of them), each extension costing
///   `pather.cost` of the cell stepped onto. Extensions are queued after
///   every route of equal cost;
/// - a route with no extension is a dead end: its cost is multiplied by
///   `penalty` and it is queued ahead of routes of equal cost.
///
/// A dead end never becomes extendable again, so once the worklist holds
/// only dead ends the search fails with [`GridError::Unreachable`].
/// `penalty` is raised to at least 2 and a zero cost counts as 1 when it is
/// penalised, so dead ends always fall behind.
pub fn best_first_path_with_penalty<T, P: WeightedPather<T>>(
    grid: &Grid<T>,
    pather: &P,
    from: Coord,
    to: Coord,
    penalty: u64,
) -> Result<Route> {
    grid.require(from)?;
    grid.require(to)?;
    let penalty = penalty.max(2);

    let mut routes = VecDeque::from([Partial {
        cost: 0,
        coords: vec![from],
        dead: false,
    }]);
    let mut live = 1usize;
    let mut nbrs = Neighbors::new();
    let mut rounds = 0usize;

    let found = loop {
        let Some(mut current) = routes.pop_front() else {
            return Err(GridError::Unreachable { from, to });
        };
        if current.coords.last() == Some(&to) {
            break current;
        }
        if live == 0 {
            log::debug!("best-first {from} -> {to}: only dead ends after {rounds} rounds");
            return Err(GridError::Unreachable { from, to });
        }
        rounds += 1;

        let steps = extensions(grid, pather, &mut nbrs, &current.coords, to);
        if steps.is_empty() {
            if !current.dead {
                current.dead = true;
                live -= 1;
            }
            current.cost = current.cost.max(1).saturating_mul(penalty);
            log::trace!(
                "dead end at {:?}, cost raised to {}",
                current.coords.last(),
                current.cost
            );
            let at = routes.partition_point(|r| r.cost < current.cost);
            routes.insert(at, current);
            continue;
        }

        live -= 1;
        for (c, step) in steps {
            let mut coords = Vec::with_capacity(current.coords.len() + 1);
            coords.extend_from_slice(&current.coords);
            coords.push(c);
            let cost = current.cost.saturating_add(u64::from(step));
            let at = routes.partition_point(|r| r.cost <= cost);
            routes.insert(
                at,
                Partial {
                    cost,
                    coords,
                    dead: false,
                },
            );
            live += 1;
        }
    };

    log::debug!(
        "best-first {from} -> {to}: {} cells, cost {}, {rounds} rounds",
        found.coords.len(),
        found.cost
    );
    Ok(Route::from(found.coords))
}

fn extensions<T, P: WeightedPather<T>>(
    grid: &Grid<T>,
    pather: &P,
    nbrs: &mut Neighbors,
    route: &[Coord],
    goal: Coord,
) -> Vec<(Coord, u32)> {
    let mut out = Vec::with_capacity(4);
    for &n in nbrs.siblings(grid, route[route.len() - 1]) {
        if route.contains(&n) {
            continue;
        }
        let Some(value) = grid.get(n) else {
            continue;
        };
        if !pather.walkable(value, n) {
            continue;
        }
        if n == goal {
            out.clear();
            out.push((n, pather.cost(value, n)));
            break;
        }
        out.push((n, pather.cost(value, n)));
    }
    out
}
