//! Axis-aligned rectangles.

use serde::{Deserialize, Serialize};

use crate::dir::Dir;
use crate::point::Point;
use crate::EPSILON;

/// An axis-aligned rectangle, specified by lower-left and upper-right corners.
#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rect {
    /// The lower-left corner.
    p0: Point,
    /// The upper-right corner.
    p1: Point,
}

impl Rect {
    /// Creates a rectangle from two corner points.
    ///
    /// # Panics
    ///
    /// Panics if `p0.x > p1.x` or `p0.y > p1.y`.
    pub fn new(p0: Point, p1: Point) -> Self {
        assert!(p0.x <= p1.x, "Rect::new requires p0.x ({}) <= p1.x ({})", p0.x, p1.x);
        assert!(p0.y <= p1.y, "Rect::new requires p0.y ({}) <= p1.y ({})", p0.y, p1.y);
        Self { p0, p1 }
    }

    /// Creates a rectangle from all four sides (left, bottom, right, top).
    ///
    /// # Panics
    ///
    /// Panics if `left > right` or `bottom > top`.
    pub fn from_sides(left: f64, bottom: f64, right: f64, top: f64) -> Self {
        Self::new(Point::new(left, bottom), Point::new(right, top))
    }

    /// A zero-area rectangle at the origin.
    pub fn zero() -> Self {
        Self::from_point(Point::zero())
    }

    /// A zero-area rectangle containing the given point.
    pub fn from_point(p: Point) -> Self {
        Self { p0: p, p1: p }
    }

    /// The left edge.
    pub fn left(&self) -> f64 {
        self.p0.x
    }

    /// The bottom edge.
    pub fn bottom(&self) -> f64 {
        self.p0.y
    }

    /// The right edge.
    pub fn right(&self) -> f64 {
        self.p1.x
    }

    /// The top edge.
    pub fn top(&self) -> f64 {
        self.p1.y
    }

    /// The lower-left corner.
    pub fn p0(&self) -> Point {
        self.p0
    }

    /// The upper-right corner.
    pub fn p1(&self) -> Point {
        self.p1
    }

    /// The edges along `dir`, as `(lo, hi)`.
    pub fn extent(&self, dir: Dir) -> (f64, f64) {
        match dir {
            Dir::Horiz => (self.left(), self.right()),
            Dir::Vert => (self.bottom(), self.top()),
        }
    }

    /// The rectangle's width.
    pub fn width(&self) -> f64 {
        self.right() - self.left()
    }

    /// The rectangle's height.
    pub fn height(&self) -> f64 {
        self.top() - self.bottom()
    }

    /// The rectangle's center point.
    pub fn center(&self) -> Point {
        Point::new((self.left() + self.right()) / 2.0, (self.bottom() + self.top()) / 2.0)
    }

    /// Returns a copy of this rectangle with every edge pushed outward by `dx`
    /// (left/right) and `dy` (bottom/top).
    pub fn enlarge(&self, dx: f64, dy: f64) -> Self {
        Self::from_sides(self.left() - dx, self.bottom() - dy, self.right() + dx, self.top() + dy)
    }

    /// Translates the whole rectangle by `(dx, dy)`.
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::from_sides(self.left() + dx, self.bottom() + dy, self.right() + dx, self.top() + dy)
    }

    /// Folds this rectangle (treated as a footprint in its own anchor frame)
    /// against grid-assigned coordinate deltas for its leading and trailing
    /// grid corners: `(xl, yl)` is added to the lower-left corner and
    /// `(xh, yh)` to the upper-right corner.
    ///
    /// This is the only operation that turns a footprint into a physical
    /// rectangle: a box spanning more than one grid index stretches as its
    /// corners move apart, while a single-grid-index box only translates
    /// (`xl == xh`, `yl == yh`).
    pub fn fold(&self, xl: f64, yl: f64, xh: f64, yh: f64) -> Self {
        Self::from_sides(self.left() + xl, self.bottom() + yl, self.right() + xh, self.top() + yh)
    }

    /// The intersection of two rectangles, or `None` if they don't overlap.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.left().max(other.left());
        let bottom = self.bottom().max(other.bottom());
        let right = self.right().min(other.right());
        let top = self.top().min(other.top());
        if left <= right && bottom <= top {
            Some(Rect::from_sides(left, bottom, right, top))
        } else {
            None
        }
    }

    /// The smallest rectangle containing both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect::from_sides(
            self.left().min(other.left()),
            self.bottom().min(other.bottom()),
            self.right().max(other.right()),
            self.top().max(other.top()),
        )
    }

    /// Whether the two rectangles overlap along `dir`, with at least
    /// `epsilon` of overlap (used by the solver to decide whether a
    /// perpendicular spacing constraint even applies).
    pub fn overlaps_along(&self, other: &Rect, dir: Dir, epsilon: f64) -> bool {
        let (a_lo, a_hi) = self.extent(dir);
        let (b_lo, b_hi) = other.extent(dir);
        a_lo <= b_hi - epsilon && a_hi >= b_lo + epsilon
    }

    /// Whether `self` contains `other`, within [`EPSILON`].
    pub fn contains(&self, other: &Rect) -> bool {
        self.left() <= other.left() + EPSILON
            && self.bottom() <= other.bottom() + EPSILON
            && self.right() >= other.right() - EPSILON
            && self.top() >= other.top() - EPSILON
    }
}

impl std::ops::BitAnd for Rect {
    type Output = Option<Rect>;
    fn bitand(self, rhs: Rect) -> Option<Rect> {
        self.intersection(&rhs)
    }
}

impl std::ops::Add for Rect {
    type Output = Rect;
    fn add(self, rhs: Rect) -> Rect {
        self.union(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_translates_single_grid_box() {
        let footprint = Rect::from_sides(-0.1, -0.1, 0.1, 0.1);
        let folded = footprint.fold(2.0, 3.0, 2.0, 3.0);
        assert_eq!(folded, Rect::from_sides(1.9, 2.9, 2.1, 3.1));
    }

    #[test]
    fn fold_stretches_multi_grid_box() {
        let footprint = Rect::from_sides(0.0, -0.1, 0.0, 0.1);
        let folded = footprint.fold(0.0, 0.0, 5.0, 0.0);
        assert_eq!(folded, Rect::from_sides(0.0, -0.1, 5.0, 0.1));
    }

    #[test]
    fn enlarge_pushes_every_edge_outward() {
        let r = Rect::from_sides(0.0, 0.0, 1.0, 1.0).enlarge(0.2, 0.3);
        assert_eq!(r, Rect::from_sides(-0.2, -0.3, 1.2, 1.3));
    }

    #[test]
    fn intersection_none_when_disjoint() {
        let a = Rect::from_sides(0.0, 0.0, 1.0, 1.0);
        let b = Rect::from_sides(2.0, 2.0, 3.0, 3.0);
        assert_eq!(a & b, None);
    }

    #[test]
    fn union_is_bounding_box() {
        let a = Rect::from_sides(0.0, 0.0, 1.0, 1.0);
        let b = Rect::from_sides(2.0, -1.0, 3.0, 0.5);
        assert_eq!(a + b, Rect::from_sides(0.0, -1.0, 3.0, 1.0));
    }

    #[test]
    fn overlaps_along_respects_epsilon() {
        let a = Rect::from_sides(0.0, 0.0, 1.0, 1.0);
        let b = Rect::from_sides(0.0, 1.0, 1.0, 2.0);
        assert!(!a.overlaps_along(&b, Dir::Vert, EPSILON));
        let c = Rect::from_sides(0.0, 0.5, 1.0, 1.5);
        assert!(a.overlaps_along(&c, Dir::Vert, EPSILON));
    }
}
