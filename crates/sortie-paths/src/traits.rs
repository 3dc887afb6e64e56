use sortie_core::Point;

/// Minimal search interface: neighbour enumeration.
///
/// Implementations decide traversability. Only neighbours a unit may step
/// onto should be appended, in a stable order.
pub trait Pather {
    /// Append traversable neighbours of `p` into `buf`. The caller clears
    /// `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> i32;
}

/// Pather with a heuristic, required by A*.
pub trait AstarPather: WeightedPather {
    /// Estimated cost from `from` to `to`. Must never overestimate.
    fn estimate(&self, from: Point, to: Point) -> i32;
}
