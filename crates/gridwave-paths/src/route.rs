//! The [`Route`] type returned by traversal and path finders.

use std::ops::Deref;

use gridwave_core::{Coord, Direction};

/// An ordered sequence of coordinates from a start (first) to a goal (last).
///
/// Duplicate coordinates are not rejected, but none of the finders in this
/// crate produce them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Route {
    coords: Vec<Coord>,
}

impl Route {
    /// A route holding only `start`.
    pub fn new(start: Coord) -> Self {
        Self {
            coords: vec![start],
        }
    }

    /// Append a coordinate.
    #[inline]
    pub fn push(&mut self, c: Coord) {
        self.coords.push(c);
    }

    /// The coordinates in order.
    #[inline]
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// First coordinate.
    #[inline]
    pub fn start(&self) -> Option<Coord> {
        self.coords.first().copied()
    }

    /// Last coordinate.
    #[inline]
    pub fn goal(&self) -> Option<Coord> {
        self.coords.last().copied()
    }

    /// Number of steps, one less than the number of coordinates.
    #[inline]
    pub fn distance(&self) -> usize {
        self.coords.len().saturating_sub(1)
    }

    /// One direction label per consecutive pair of coordinates.
    ///
    /// A pair that does not move produces no label. Pairs that move along
    /// both axes are labelled by their `i` movement.
    pub fn directions(&self) -> Vec<Direction> {
        self.coords
            .windows(2)
            .filter_map(|w| w[0].direction_to(w[1]))
            .collect()
    }

    /// Consume the route, returning its coordinates.
    pub fn into_vec(self) -> Vec<Coord> {
        self.coords
    }
}

impl Deref for Route {
    type Target = [Coord];

    fn deref(&self) -> &[Coord] {
        &self.coords
    }
}

impl From<Vec<Coord>> for Route {
    fn from(coords: Vec<Coord>) -> Self {
        Self { coords }
    }
}

impl IntoIterator for Route {
    type Item = Coord;
    type IntoIter = std::vec::IntoIter<Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.into_iter()
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.iter()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn serializes_as_coord_list() {
        let r = Route::from(vec![Coord::new(4, 0), Coord::new(4, 1)]);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"[{"i":4,"j":0},{"i":4,"j":1}]"#);
        let back: Route = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
