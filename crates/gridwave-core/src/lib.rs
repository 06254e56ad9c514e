//! **gridwave-core**: sparse 2D grid store.
//!
//! This crate provides the foundational types used across the *gridwave*
//! workspace: coordinates and direction labels, a sparse [`Grid`] whose shape
//! can change at runtime, filtered cell iteration, named-property access on
//! structured cell values, and the shared [`GridError`] type.

pub mod each;
pub mod error;
pub mod geom;
pub mod grid;
pub mod props;

pub use each::EachCell;
pub use error::{GridError, Result};
pub use geom::{Coord, Direction};
pub use grid::Grid;
pub use props::Properties;
