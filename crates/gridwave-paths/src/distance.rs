use gridwave_core::Coord;

/// Manhattan (L1) distance between two coordinates. Needs no grid.
///
/// Defined for the whole `i32` range.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> u64 {
    u64::from(a.i.abs_diff(b.i)) + u64::from(a.j.abs_diff(b.j))
}
