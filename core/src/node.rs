//! Abstract grid nodes.

use serde::{Deserialize, Serialize};

/// An immutable point on the abstract integer grid.
///
/// Two distinct [`Node`] values may share the same `(ix, iy)` pair — the
/// solver always assigns identical coordinates to identical grid indices
/// regardless of which component declared them (see the node-equivalence
/// property).
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Node {
    /// The grid index along the x-axis.
    pub ix: i64,
    /// The grid index along the y-axis.
    pub iy: i64,
}

impl Node {
    /// Creates a new node at `(ix, iy)`.
    pub fn new(ix: i64, iy: i64) -> Self {
        Self { ix, iy }
    }
}

impl From<(i64, i64)> for Node {
    fn from((ix, iy): (i64, i64)) -> Self {
        Self::new(ix, iy)
    }
}
