//! Straight wire segments.

use geometry::rect::Rect;

use crate::absbox::AbsBox;
use crate::component::Component;
use crate::error::ConstructionError;
use crate::graph::Graph;
use crate::node::Node;
use crate::Layer;

/// A straight wire segment on a single layer, running between two collinear
/// nodes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Wire {
    width: f64,
    layer: Layer,
    n1: Node,
    n2: Node,
}

impl Wire {
    /// Creates a wire between `n1` and `n2`, which must be collinear (share
    /// a row or a column) and distinct. The endpoints are normalized so that
    /// `n1 <= n2` lexicographically, regardless of construction order.
    pub fn new(width: f64, layer: Layer, n1: Node, n2: Node) -> Result<Self, ConstructionError> {
        if width <= 0.0 {
            return Err(ConstructionError::NonPositiveWireWidth(width));
        }
        if n1.ix != n2.ix && n1.iy != n2.iy {
            return Err(ConstructionError::WireNotCollinear { n1, n2 });
        }
        let (n1, n2) = if n1 <= n2 { (n1, n2) } else { (n2, n1) };
        Ok(Self { width, layer, n1, n2 })
    }

    /// The wire's width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// The layer this wire sits on.
    pub fn layer(&self) -> Layer {
        self.layer
    }

    /// The wire's first (lexicographically smaller) endpoint.
    pub fn n1(&self) -> Node {
        self.n1
    }

    /// The wire's second endpoint.
    pub fn n2(&self) -> Node {
        self.n2
    }

    /// The largest half-width among same-layer wires perpendicular to this
    /// one that terminate at `node`.
    ///
    /// This is the "perpendicular-widening" that makes a wire's endpoint
    /// cover a T-junction: a neighbour running the other way needs this
    /// wire's endcap to reach past the node by half of its own width.
    fn perpendicular_extra(&self, graph: &Graph, node: Node) -> f64 {
        let horizontal = self.is_horizontal();
        graph
            .components_at(node.ix, node.iy)
            .into_iter()
            .filter_map(Component::as_wire)
            .filter(|w| w.layer == self.layer && w.is_horizontal() != horizontal)
            .map(|w| w.width / 2.0)
            .fold(0.0_f64, f64::max)
    }
}

impl Component for Wire {
    fn nodes(&self) -> Vec<Node> {
        vec![self.n1, self.n2]
    }

    fn layers(&self, _graph: &Graph) -> Vec<Layer> {
        vec![self.layer]
    }

    fn is_horizontal(&self) -> bool {
        self.n1.iy == self.n2.iy
    }

    fn via_bottom_layer(&self, _graph: &Graph) -> Option<Layer> {
        Some(self.layer)
    }

    fn via_top_layer(&self, _graph: &Graph) -> Option<Layer> {
        Some(self.layer)
    }

    fn via_attach_width(&self, _graph: &Graph) -> Option<f64> {
        Some(self.width)
    }

    fn as_wire(&self) -> Option<&Wire> {
        Some(self)
    }

    fn abs_boxes(&self, graph: &Graph) -> Vec<AbsBox> {
        let extra1 = self.perpendicular_extra(graph, self.n1);
        let extra2 = self.perpendicular_extra(graph, self.n2);
        let half = self.width / 2.0;
        let footprint = if self.is_horizontal() {
            Rect::from_sides(-extra1, -half, extra2, half)
        } else {
            Rect::from_sides(-half, -extra1, half, extra2)
        };
        vec![AbsBox::new(
            self.n1.ix.min(self.n2.ix),
            self.n1.iy.min(self.n2.iy),
            self.n1.ix.max(self.n2.ix),
            self.n1.iy.max(self.n2.iy),
            footprint,
            self.layer,
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tech::{TechnologyMosfets, TechnologyRules, TechnologyVias};

    struct NoRules;
    impl TechnologyRules for NoRules {
        fn layer(&self, _: &str) -> Result<Layer, crate::error::TechError> {
            Ok(0)
        }
        fn space(&self, _: Layer, _: Layer) -> Option<f64> {
            None
        }
        fn default_wire_width(&self, _: Layer) -> Option<f64> {
            None
        }
    }
    impl TechnologyVias for NoRules {
        fn via_boxes(&self, _: Layer, _: Layer, _: Layer, _: [Option<f64>; 4], _: [Option<f64>; 4]) -> (Rect, Rect, Rect) {
            unimplemented!()
        }
        fn via_geometry(&self, _: Layer, _: Layer, _: Layer, _: [Option<f64>; 4], _: [Option<f64>; 4]) -> Vec<Rect> {
            unimplemented!()
        }
    }
    impl TechnologyMosfets for NoRules {
        fn source_drain_active_width(&self) -> f64 {
            unimplemented!()
        }
        fn gate_extension(&self) -> f64 {
            unimplemented!()
        }
        fn default_mos_length(&self) -> f64 {
            unimplemented!()
        }
        fn min_nmos_width(&self) -> f64 {
            unimplemented!()
        }
        fn min_pmos_width(&self) -> f64 {
            unimplemented!()
        }
        fn poly_layer(&self) -> Layer {
            unimplemented!()
        }
        fn active_layer(&self) -> Layer {
            unimplemented!()
        }
    }

    #[test]
    fn rejects_non_collinear_endpoints() {
        let err = Wire::new(0.2, 0, Node::new(0, 0), Node::new(1, 1)).unwrap_err();
        assert!(matches!(err, ConstructionError::WireNotCollinear { .. }));
    }

    #[test]
    fn rejects_non_positive_width() {
        let err = Wire::new(0.0, 0, Node::new(0, 0), Node::new(1, 0)).unwrap_err();
        assert!(matches!(err, ConstructionError::NonPositiveWireWidth(_)));
    }

    #[test]
    fn normalizes_endpoint_order() {
        let w = Wire::new(0.2, 0, Node::new(1, 0), Node::new(0, 0)).unwrap();
        assert_eq!(w.n1(), Node::new(0, 0));
        assert_eq!(w.n2(), Node::new(1, 0));
    }

    #[test]
    fn t_junction_widens_endpoint_footprint() {
        let tech = NoRules;
        let mut graph = Graph::new(&tech);
        graph.add(Wire::new(0.2, 0, Node::new(0, 0), Node::new(1, 0)).unwrap());
        graph.add(Wire::new(0.2, 0, Node::new(1, 0), Node::new(2, 0)).unwrap());
        graph.add(Wire::new(0.2, 0, Node::new(1, 0), Node::new(1, 1)).unwrap());

        let left_seg = graph.components_at(0, 0)[0].as_wire().unwrap();
        let boxes = left_seg.abs_boxes(&graph);
        assert_eq!(boxes.len(), 1);
        assert!((boxes[0].footprint.right() - 0.1).abs() < 1e-9);
    }
}
