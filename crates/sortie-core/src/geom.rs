//! Node addressing: [`Point`] and the [`Range`] a grid covers.

use std::fmt;

/// Coordinates of a node. `x` grows to the right, `y` grows downwards.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cardinal neighbours, up, right, down, then left.
    ///
    /// Searches expand neighbours in exactly this order, so routes and
    /// visit traces are reproducible.
    #[inline]
    pub const fn neighbors_4(self) -> [Point; 4] {
        let Point { x, y } = self;
        [
            Self::new(x, y - 1),
            Self::new(x + 1, y),
            Self::new(x, y + 1),
            Self::new(x - 1, y),
        ]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The rectangle of nodes between `min` (inclusive) and `max` (exclusive).
///
/// Nodes are numbered row by row starting at `min`, which is how grids and
/// search caches lay out their flat arrays.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Rectangle spanned by two corners given in any order.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let (xa, xb) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let (ya, yb) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        Self {
            min: Point::new(xa, ya),
            max: Point::new(xb, yb),
        }
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Number of nodes covered.
    pub fn len(self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.width() as usize * self.height() as usize
        }
    }

    pub fn is_empty(self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Flat index of `p`, or `None` when `p` lies outside.
    #[inline]
    pub fn index_of(self, p: Point) -> Option<usize> {
        self.contains(p).then(|| {
            (p.y - self.min.y) as usize * self.width() as usize + (p.x - self.min.x) as usize
        })
    }

    /// Point at flat index `idx`. Only meaningful for `idx < len()`.
    #[inline]
    pub fn point_at(self, idx: usize) -> Point {
        let w = self.width().max(1) as usize;
        Point::new(
            self.min.x + (idx % w) as i32,
            self.min.y + (idx / w) as i32,
        )
    }

    /// Bottom-right node, the last one in flat order.
    pub fn last(self) -> Option<Point> {
        (!self.is_empty()).then(|| Point::new(self.max.x - 1, self.max.y - 1))
    }

    /// Every point in flat-index order.
    pub fn iter(self) -> impl ExactSizeIterator<Item = Point> {
        (0..self.len()).map(move |i| self.point_at(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_4_order_is_up_right_down_left() {
        assert_eq!(
            Point::new(5, 5).neighbors_4(),
            [
                Point::new(5, 4),
                Point::new(6, 5),
                Point::new(5, 6),
                Point::new(4, 5),
            ]
        );
    }

    #[test]
    fn point_display() {
        assert_eq!(Point::new(3, -1).to_string(), "(3, -1)");
    }

    #[test]
    fn corners_in_any_order() {
        let r = Range::new(3, 2, 0, 0);
        assert_eq!(r, Range::new(0, 0, 3, 2));
        assert_eq!((r.width(), r.height(), r.len()), (3, 2, 6));
    }

    #[test]
    fn contains_is_half_open() {
        let r = Range::new(0, 0, 3, 2);
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(2, 1)));
        assert!(!r.contains(Point::new(3, 0)));
        assert!(!r.contains(Point::new(0, 2)));
        assert!(!r.contains(Point::new(-1, 0)));
    }

    #[test]
    fn index_and_point_are_inverse() {
        let r = Range::new(0, 0, 4, 3);
        for (i, p) in r.iter().enumerate() {
            assert_eq!(r.index_of(p), Some(i));
            assert_eq!(r.point_at(i), p);
        }
        assert_eq!(r.index_of(Point::new(4, 0)), None);
    }

    #[test]
    fn offset_range_indexes_from_min() {
        let r = Range::new(2, 1, 4, 3);
        assert_eq!(r.index_of(Point::new(2, 1)), Some(0));
        assert_eq!(r.index_of(Point::new(3, 2)), Some(3));
        assert_eq!(r.point_at(2), Point::new(2, 2));
    }

    #[test]
    fn iter_walks_rows() {
        let r = Range::new(0, 0, 3, 2);
        let pts: Vec<_> = r.iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Point::new(0, 0));
        assert_eq!(pts[3], Point::new(0, 1));
        assert_eq!(r.iter().len(), 6);
    }

    #[test]
    fn empty_range() {
        let r = Range::new(0, 0, 0, 4);
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.iter().count(), 0);
        assert_eq!(r.last(), None);
        assert_eq!(Range::new(0, 0, 4, 3).last(), Some(Point::new(3, 2)));
    }
}
