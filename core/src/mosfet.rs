//! Planar MOSFETs: active and poly boxes spanning a shared row of nodes.

use geometry::rect::Rect;

use crate::absbox::AbsBox;
use crate::component::Component;
use crate::error::ConstructionError;
use crate::graph::Graph;
use crate::node::Node;
use crate::Layer;

/// A planar MOSFET: a gate node between a source and a drain, all sharing a
/// row.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mosfet {
    gate: Node,
    sd1: Node,
    sd2: Node,
    w: f64,
    l: f64,
}

impl Mosfet {
    /// Creates a MOSFET with gate `gate` between `source` and `drain`, width
    /// `w` and length `l`. The source/drain nodes are normalized so the
    /// lexicographically smaller one comes first; all three nodes must share
    /// a row.
    pub fn new(gate: Node, source: Node, drain: Node, w: f64, l: f64) -> Result<Self, ConstructionError> {
        if gate.iy != source.iy || gate.iy != drain.iy {
            return Err(ConstructionError::MosfetRowMismatch { gate, source_node: source, drain });
        }
        if w <= 0.0 {
            return Err(ConstructionError::NonPositiveMosfetWidth(w));
        }
        if l <= 0.0 {
            return Err(ConstructionError::NonPositiveMosfetLength(l));
        }
        let (sd1, sd2) = if source <= drain { (source, drain) } else { (drain, source) };
        Ok(Self { gate, sd1, sd2, w, l })
    }

    /// The gate node.
    pub fn gate(&self) -> Node {
        self.gate
    }

    /// The source/drain node with the smaller index.
    pub fn sd1(&self) -> Node {
        self.sd1
    }

    /// The source/drain node with the larger index.
    pub fn sd2(&self) -> Node {
        self.sd2
    }

    /// The device width.
    pub fn w(&self) -> f64 {
        self.w
    }

    /// The channel length.
    pub fn l(&self) -> f64 {
        self.l
    }
}

impl Component for Mosfet {
    fn nodes(&self) -> Vec<Node> {
        vec![self.sd1, self.gate, self.sd2]
    }

    fn layers(&self, graph: &Graph) -> Vec<Layer> {
        vec![graph.tech().active_layer(), graph.tech().poly_layer()]
    }

    fn via_bottom_layer(&self, graph: &Graph) -> Option<Layer> {
        Some(graph.tech().active_layer())
    }

    fn via_attach_width(&self, _graph: &Graph) -> Option<f64> {
        Some(self.w)
    }

    fn abs_boxes(&self, graph: &Graph) -> Vec<AbsBox> {
        let tech = graph.tech();
        let sd_w = tech.source_drain_active_width();
        let gate_ext = tech.gate_extension();

        let active_footprint = Rect::from_sides(-sd_w / 2.0, -self.w / 2.0, sd_w / 2.0, self.w / 2.0);
        let active = AbsBox::new(self.sd1.ix, self.sd1.iy, self.sd2.ix, self.sd2.iy, active_footprint, tech.active_layer());

        let gate_footprint = Rect::zero().enlarge(self.l / 2.0, self.w / 2.0 + gate_ext);
        let gate = AbsBox::at_node(self.gate.ix, self.gate.iy, gate_footprint, tech.poly_layer());

        vec![active, gate]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_row_mismatch() {
        let err = Mosfet::new(Node::new(1, 0), Node::new(0, 0), Node::new(2, 1), 0.6, 0.13).unwrap_err();
        assert!(matches!(err, ConstructionError::MosfetRowMismatch { .. }));
    }

    #[test]
    fn rejects_non_positive_width() {
        let err = Mosfet::new(Node::new(1, 0), Node::new(0, 0), Node::new(2, 0), 0.0, 0.13).unwrap_err();
        assert!(matches!(err, ConstructionError::NonPositiveMosfetWidth(_)));
    }

    #[test]
    fn rejects_non_positive_length() {
        let err = Mosfet::new(Node::new(1, 0), Node::new(0, 0), Node::new(2, 0), 0.6, 0.0).unwrap_err();
        assert!(matches!(err, ConstructionError::NonPositiveMosfetLength(_)));
    }

    #[test]
    fn normalizes_source_drain_order() {
        let m = Mosfet::new(Node::new(1, 0), Node::new(2, 0), Node::new(0, 0), 0.6, 0.13).unwrap();
        assert_eq!(m.sd1(), Node::new(0, 0));
        assert_eq!(m.sd2(), Node::new(2, 0));
    }
}
