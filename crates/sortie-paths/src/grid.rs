//! [`Pather`] implementations for the core [`Grid`].

use sortie_core::{Grid, Point};

use crate::distance::manhattan;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// A neighbour is eligible when it is in bounds and holds no blockade, or a
/// breakable one. Order is up, right, down, left.
impl Pather for Grid {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.is_passable(n) {
                buf.push(n);
            }
        }
    }
}

impl WeightedPather for Grid {
    fn cost(&self, _from: Point, _to: Point) -> i32 {
        1
    }
}

impl AstarPather for Grid {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}
