//! The capability set every placed element exposes to the graph and solver.

use geometry::rect::Rect;

use crate::absbox::AbsBox;
use crate::graph::{CoordinateMap, Graph};
use crate::node::Node;
use crate::wire::Wire;
use crate::Layer;

/// A polymorphic element placed on the abstract grid.
///
/// The solver only ever calls [`Component::abs_boxes`] and
/// [`Component::geometry`]; the other methods exist so that [`Via`](crate::via::Via)
/// can ask its neighbours at a shared node what they are, without the solver
/// needing to know about any concrete component type.
pub trait Component: std::fmt::Debug {
    /// The grid nodes this component declares, in ascending order.
    fn nodes(&self) -> Vec<Node>;

    /// The layers this component occupies.
    fn layers(&self, graph: &Graph) -> Vec<Layer>;

    /// The abstract boxes this component contributes to the solver.
    fn abs_boxes(&self, graph: &Graph) -> Vec<AbsBox>;

    /// The final physical geometry of this component, after compaction.
    ///
    /// The default implementation folds every box returned by
    /// [`abs_boxes`](Component::abs_boxes) through the coordinate maps; only
    /// [`Via`](crate::via::Via) overrides this, to substitute its coarse cut
    /// hull with the individual cut rectangles.
    fn geometry(&self, graph: &Graph, x_map: &CoordinateMap, y_map: &CoordinateMap) -> Vec<(Layer, Rect)> {
        self.abs_boxes(graph)
            .into_iter()
            .map(|b| (b.layer, b.physical(x_map, y_map)))
            .collect()
    }

    /// The layer a [`Via`](crate::via::Via) should treat this component as
    /// attaching to from below, if any.
    fn via_bottom_layer(&self, _graph: &Graph) -> Option<Layer> {
        None
    }

    /// The layer a [`Via`](crate::via::Via) should treat this component as
    /// attaching to from above, if any.
    fn via_top_layer(&self, _graph: &Graph) -> Option<Layer> {
        None
    }

    /// The width a [`Via`](crate::via::Via) landing at one of this
    /// component's nodes should size its pad against, if any.
    fn via_attach_width(&self, _graph: &Graph) -> Option<f64> {
        None
    }

    /// True iff this component's first and last node share a row.
    ///
    /// A single-node component (a via) is conventionally neither — callers
    /// that care use [`Component::via_bottom_layer`] / [`via_top_layer`]
    /// directly instead of direction.
    fn is_horizontal(&self) -> bool {
        let nodes = self.nodes();
        match (nodes.first(), nodes.last()) {
            (Some(a), Some(b)) => a.iy == b.iy,
            _ => true,
        }
    }

    /// Downcasts to [`Wire`], the one specialization the solver's own logic
    /// needs (perpendicular-widening at T-junctions).
    fn as_wire(&self) -> Option<&Wire> {
        None
    }
}
