//! Abstract boxes: the shapes the solver actually operates on.

use geometry::dir::Dir;
use geometry::rect::Rect;

use crate::graph::CoordinateMap;
use crate::Layer;

/// A shape with grid-index extents and a footprint rectangle, the unit the
/// solver compacts.
///
/// An `AbsBox` only becomes a physical rectangle once its footprint is
/// [folded](Rect::fold) against coordinates assigned to its leading and
/// trailing grid corners. A box spanning more than one grid index along an
/// axis stretches as those corners move apart; a box with `ix1 == ix2` and
/// `iy1 == iy2` only ever translates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AbsBox {
    /// Leading grid index along x (`ix1 <= ix2`).
    pub ix1: i64,
    /// Leading grid index along y (`iy1 <= iy2`).
    pub iy1: i64,
    /// Trailing grid index along x.
    pub ix2: i64,
    /// Trailing grid index along y.
    pub iy2: i64,
    /// The footprint rectangle, in the box's own anchor frame.
    pub footprint: Rect,
    /// The layer this shape sits on.
    pub layer: Layer,
}

impl AbsBox {
    /// Creates a new box. Panics if `ix1 > ix2` or `iy1 > iy2` — the two
    /// invariants every `AbsBox` must uphold.
    pub fn new(ix1: i64, iy1: i64, ix2: i64, iy2: i64, footprint: Rect, layer: Layer) -> Self {
        assert!(ix1 <= ix2, "AbsBox requires ix1 ({ix1}) <= ix2 ({ix2})");
        assert!(iy1 <= iy2, "AbsBox requires iy1 ({iy1}) <= iy2 ({iy2})");
        Self { ix1, iy1, ix2, iy2, footprint, layer }
    }

    /// A box occupying a single grid node.
    pub fn at_node(ix: i64, iy: i64, footprint: Rect, layer: Layer) -> Self {
        Self::new(ix, iy, ix, iy, footprint, layer)
    }

    /// The grid index of this box's leading edge along `dir` — `ix1` for
    /// [`Dir::Horiz`], `iy1` for [`Dir::Vert`].
    pub fn leading_index(&self, dir: Dir) -> i64 {
        match dir {
            Dir::Horiz => self.ix1,
            Dir::Vert => self.iy1,
        }
    }

    /// The grid index of this box's trailing edge along `dir`.
    pub fn trailing_index(&self, dir: Dir) -> i64 {
        match dir {
            Dir::Horiz => self.ix2,
            Dir::Vert => self.iy2,
        }
    }

    /// The grid-index extent on the axis perpendicular to `dir`.
    pub fn para_extent(&self, dir: Dir) -> (i64, i64) {
        match dir {
            Dir::Horiz => (self.iy1, self.iy2),
            Dir::Vert => (self.ix1, self.ix2),
        }
    }

    /// Folds this box's footprint into a physical rectangle using the given
    /// coordinate maps.
    pub fn physical(&self, x_map: &CoordinateMap, y_map: &CoordinateMap) -> Rect {
        self.footprint.fold(
            x_map.get(self.ix1),
            y_map.get(self.iy1),
            x_map.get(self.ix2),
            y_map.get(self.iy2),
        )
    }

    /// Folds this box's footprint as if its leading coordinate along `dir`
    /// were zero, using the fully-assigned coordinate on the other axis.
    ///
    /// Used by the solver while a box's own leading coordinate along `dir`
    /// is still being solved for: the box's extent along `dir` is taken
    /// straight from the footprint frame (unstretched), while its extent on
    /// the other axis folds in the already-known coordinates.
    pub fn physical_anchored(&self, dir: Dir, x_map: &CoordinateMap, y_map: &CoordinateMap) -> Rect {
        match dir {
            Dir::Horiz => self.footprint.fold(0.0, y_map.get(self.iy1), 0.0, y_map.get(self.iy2)),
            Dir::Vert => self.footprint.fold(x_map.get(self.ix1), 0.0, x_map.get(self.ix2), 0.0),
        }
    }
}
