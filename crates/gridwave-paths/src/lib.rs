//! Routing and region algorithms over a [`gridwave_core::Grid`].
//!
//! | Operation | Entry point | Notes |
//! |---|---|---|
//! | straight-line route | [`Traversal::to`] | closes the row gap, then the column gap |
//! | direction replay | [`Traversal::go`] | fails at the first off-grid step |
//! | flood fill | [`FloodFill`] | depth-first discovery order |
//! | wave routing | [`lee_path`], [`wave_map`] | shortest walkable route |
//! | best-first routing | [`best_first_path`] | cheapest accumulated cost first |
//!
//! [`route`] and [`RouteQuery`] select between the two routing algorithms
//! at runtime.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | wave routing |
//! | [`WeightedPather`] : [`Pather`] | best-first routing, [`route`] |
//!
//! No operation writes to the grid it searches. Scratch state lives in
//! grids of the same shape built with
//! [`Grid::duplicate_structure`](gridwave_core::Grid::duplicate_structure).

mod bestfirst;
mod distance;
mod flood;
mod lee;
mod neighbors;
mod query;
mod route;
mod traits;
mod traverse;

pub use bestfirst::{DEAD_END_PENALTY, best_first_path, best_first_path_with_penalty};
pub use distance::manhattan;
pub use flood::FloodFill;
pub use lee::{ORIGIN, WALL, lee_path, wave_map};
pub use neighbors::{Neighbors, each_sibling, siblings};
pub use query::{
    Algorithm, RouteQuery, create_grid, flood, get_cell, route, set_cell, walkable_count,
};
pub use route::Route;
pub use traits::{Open, Pather, Walkable, Weighted, WeightedPather};
pub use traverse::Traversal;
