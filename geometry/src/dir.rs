//! The two axes a rectangle or grid can be indexed along.

/// One of the two coordinate axes.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Dir {
    /// The x-axis.
    Horiz,
    /// The y-axis.
    Vert,
}

impl Dir {
    /// The axis perpendicular to this one.
    pub fn other(self) -> Self {
        match self {
            Dir::Horiz => Dir::Vert,
            Dir::Vert => Dir::Horiz,
        }
    }
}
