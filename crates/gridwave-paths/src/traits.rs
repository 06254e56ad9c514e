use gridwave_core::Coord;

/// Minimal routing interface: decides which cells may be stepped on.
pub trait Pather<T> {
    /// Whether the cell at `at`, holding `value`, can be traversed.
    fn walkable(&self, value: &T, at: Coord) -> bool;
}

/// Pather with a per-cell entry cost.
pub trait WeightedPather<T>: Pather<T> {
    /// Cost of stepping onto the cell at `at`.
    fn cost(&self, value: &T, at: Coord) -> u32;
}

/// Every cell is walkable and every step costs 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Open;

impl<T> Pather<T> for Open {
    #[inline]
    fn walkable(&self, _: &T, _: Coord) -> bool {
        true
    }
}

impl<T> WeightedPather<T> for Open {
    #[inline]
    fn cost(&self, _: &T, _: Coord) -> u32 {
        1
    }
}

/// Closure-backed walkability with unit step cost.
///
/// ```
/// use gridwave_core::Coord;
/// use gridwave_paths::{Pather, Walkable};
///
/// let floor = Walkable(|v: &u8, _: Coord| *v == 0);
/// assert!(floor.walkable(&0, Coord::ZERO));
/// assert!(!floor.walkable(&1, Coord::ZERO));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Walkable<W>(pub W);

impl<W> Walkable<W> {
    /// Attach a cost function, keeping the walkability predicate.
    pub fn with_cost<C>(self, cost: C) -> Weighted<W, C> {
        Weighted {
            walkable: self.0,
            cost,
        }
    }
}

impl<T, W> Pather<T> for Walkable<W>
where
    W: Fn(&T, Coord) -> bool,
{
    #[inline]
    fn walkable(&self, value: &T, at: Coord) -> bool {
        (self.0)(value, at)
    }
}

impl<T, W> WeightedPather<T> for Walkable<W>
where
    W: Fn(&T, Coord) -> bool,
{
    #[inline]
    fn cost(&self, _: &T, _: Coord) -> u32 {
        1
    }
}

/// Closure-backed walkability and cost.
#[derive(Debug, Clone, Copy)]
pub struct Weighted<W, C> {
    pub walkable: W,
    pub cost: C,
}

impl<T, W, C> Pather<T> for Weighted<W, C>
where
    W: Fn(&T, Coord) -> bool,
{
    #[inline]
    fn walkable(&self, value: &T, at: Coord) -> bool {
        (self.walkable)(value, at)
    }
}

impl<T, W, C> WeightedPather<T> for Weighted<W, C>
where
    W: Fn(&T, Coord) -> bool,
    C: Fn(&T, Coord) -> u32,
{
    #[inline]
    fn cost(&self, value: &T, at: Coord) -> u32 {
        (self.cost)(value, at)
    }
}
