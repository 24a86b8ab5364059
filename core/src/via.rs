//! Vias: single-node stacks connecting two layers through a cut.

use geometry::rect::Rect;

use crate::absbox::AbsBox;
use crate::component::Component;
use crate::graph::{CoordinateMap, Graph};
use crate::node::Node;
use crate::tech::SideWidths;
use crate::Layer;

const LEFT: usize = 0;
const BOTTOM: usize = 1;
const RIGHT: usize = 2;
const TOP: usize = 3;

/// A via stacking `bottom_layer` and `top_layer` through `cut_layer`.
///
/// Box construction is delegated entirely to the
/// [`Technology`](crate::tech::Technology)'s via-construction queries; the
/// via's own job is collecting the widths of whatever wires (or MOSFET
/// source/drain regions) attach at its node, by level and by side, so the
/// technology can size landing pads correctly.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Via {
    node: Node,
    bottom_layer: Layer,
    cut_layer: Layer,
    top_layer: Layer,
}

impl Via {
    /// Creates a via at `node` stacking `bottom_layer`/`cut_layer`/`top_layer`.
    pub fn new(node: Node, bottom_layer: Layer, cut_layer: Layer, top_layer: Layer) -> Self {
        Self { node, bottom_layer, cut_layer, top_layer }
    }

    /// The via's node.
    pub fn node(&self) -> Node {
        self.node
    }

    /// Collects attached wire/MOSFET widths into a `[level][side]` matrix:
    /// level 0 is the bottom layer, level 1 is the top layer; side follows
    /// `[left, bottom, right, top]`. A component matching both levels counts
    /// toward the bottom one (first match wins).
    fn collect_widths(&self, graph: &Graph) -> [SideWidths; 2] {
        let mut widths: [SideWidths; 2] = [[None; 4]; 2];
        for comp in graph.components_at(self.node.ix, self.node.iy) {
            let level = if comp.via_bottom_layer(graph) == Some(self.bottom_layer) {
                0
            } else if comp.via_top_layer(graph) == Some(self.top_layer) {
                1
            } else {
                continue;
            };
            let Some(width) = comp.via_attach_width(graph) else { continue };
            let side = self.side_of(comp);
            let slot = &mut widths[level][side];
            *slot = Some(slot.map_or(width, |w: f64| w.max(width)));
        }
        widths
    }

    fn side_of(&self, comp: &dyn Component) -> usize {
        let nodes = comp.nodes();
        let first = nodes.first().copied().unwrap_or(self.node);
        if comp.is_horizontal() {
            if first.ix < self.node.ix {
                LEFT
            } else {
                RIGHT
            }
        } else if first.iy < self.node.iy {
            BOTTOM
        } else {
            TOP
        }
    }
}

impl Component for Via {
    fn nodes(&self) -> Vec<Node> {
        vec![self.node]
    }

    fn layers(&self, _graph: &Graph) -> Vec<Layer> {
        vec![self.bottom_layer, self.cut_layer, self.top_layer]
    }

    fn abs_boxes(&self, graph: &Graph) -> Vec<AbsBox> {
        let widths = self.collect_widths(graph);
        let (bottom_pad, cut_hull, top_pad) =
            graph.tech().via_boxes(self.bottom_layer, self.cut_layer, self.top_layer, widths[0], widths[1]);
        vec![
            AbsBox::at_node(self.node.ix, self.node.iy, bottom_pad, self.bottom_layer),
            AbsBox::at_node(self.node.ix, self.node.iy, cut_hull, self.cut_layer),
            AbsBox::at_node(self.node.ix, self.node.iy, top_pad, self.top_layer),
        ]
    }

    fn geometry(&self, graph: &Graph, x_map: &CoordinateMap, y_map: &CoordinateMap) -> Vec<(Layer, Rect)> {
        let widths = self.collect_widths(graph);
        let (bottom_pad, _hull, top_pad) =
            graph.tech().via_boxes(self.bottom_layer, self.cut_layer, self.top_layer, widths[0], widths[1]);
        let cuts = graph.tech().via_geometry(self.bottom_layer, self.cut_layer, self.top_layer, widths[0], widths[1]);

        let nx = x_map.get(self.node.ix);
        let ny = y_map.get(self.node.iy);
        let mut out = vec![
            (self.bottom_layer, bottom_pad.translate(nx, ny)),
            (self.top_layer, top_pad.translate(nx, ny)),
        ];
        out.extend(cuts.into_iter().map(|c| (self.cut_layer, c.translate(nx, ny))));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::Wire;

    const ACTIVE: Layer = 0;
    const POLY: Layer = 1;
    const CONTACT: Layer = 2;
    const METAL1: Layer = 3;

    #[derive(Debug, Default, Clone, Copy)]
    struct StubTech;

    impl crate::tech::TechnologyRules for StubTech {
        fn layer(&self, _generic_name: &str) -> Result<Layer, crate::error::TechError> {
            unimplemented!()
        }
        fn space(&self, _l1: Layer, _l2: Layer) -> Option<f64> {
            None
        }
        fn default_wire_width(&self, _layer: Layer) -> Option<f64> {
            None
        }
        fn layer_name(&self, _layer: Layer) -> Option<&str> {
            None
        }
    }

    impl crate::tech::TechnologyVias for StubTech {
        fn via_boxes(
            &self,
            _bottom_layer: Layer,
            _cut_layer: Layer,
            _top_layer: Layer,
            bottom_widths: SideWidths,
            top_widths: SideWidths,
        ) -> (Rect, Rect, Rect) {
            let side = |w: SideWidths| {
                let width = w[LEFT].into_iter().chain(w[RIGHT]).fold(0.2, f64::max);
                let height = w[BOTTOM].into_iter().chain(w[TOP]).fold(0.2, f64::max);
                Rect::from_sides(-width / 2.0, -height / 2.0, width / 2.0, height / 2.0)
            };
            (side(bottom_widths), Rect::from_sides(-0.085, -0.085, 0.085, 0.085), side(top_widths))
        }
        fn via_geometry(
            &self,
            _bottom_layer: Layer,
            _cut_layer: Layer,
            _top_layer: Layer,
            _bottom_widths: SideWidths,
            _top_widths: SideWidths,
        ) -> Vec<Rect> {
            vec![Rect::from_sides(-0.085, -0.085, 0.085, 0.085)]
        }
    }

    impl crate::tech::TechnologyMosfets for StubTech {
        fn source_drain_active_width(&self) -> f64 {
            0.3
        }
        fn gate_extension(&self) -> f64 {
            0.13
        }
        fn default_mos_length(&self) -> f64 {
            0.15
        }
        fn min_nmos_width(&self) -> f64 {
            0.42
        }
        fn min_pmos_width(&self) -> f64 {
            0.42
        }
        fn poly_layer(&self) -> Layer {
            POLY
        }
        fn active_layer(&self) -> Layer {
            ACTIVE
        }
    }

    #[test]
    fn via_with_no_attached_wires_collects_no_widths() {
        let tech = StubTech;
        let mut graph = Graph::new(&tech);
        graph.add(Via::new(Node::new(0, 0), ACTIVE, CONTACT, METAL1));

        let via = Via::new(Node::new(0, 0), ACTIVE, CONTACT, METAL1);
        let widths = via.collect_widths(&graph);
        assert_eq!(widths, [[None; 4]; 2]);
    }

    #[test]
    fn via_collects_width_from_wire_attaching_on_the_correct_side() {
        let tech = StubTech;
        let mut graph = Graph::new(&tech);
        graph.add(Wire::new(0.4, METAL1, Node::new(0, 0), Node::new(1, 0)).unwrap());
        graph.add(Via::new(Node::new(0, 0), ACTIVE, CONTACT, METAL1));

        let via = Via::new(Node::new(0, 0), ACTIVE, CONTACT, METAL1);
        let widths = via.collect_widths(&graph);
        // A horizontal wire whose first node is not left of the via attaches
        // on the via's right side, and METAL1 only matches the via's top
        // layer (wires advertise via_bottom_layer == via_top_layer == their
        // own layer, so it lands at level 1 here).
        assert_eq!(widths[1][RIGHT], Some(0.4));
        assert_eq!(widths[1][LEFT], None);
    }

    #[test]
    fn abs_boxes_places_bottom_cut_top_at_the_same_node() {
        let tech = StubTech;
        let mut graph = Graph::new(&tech);
        graph.add(Via::new(Node::new(2, 3), ACTIVE, CONTACT, METAL1));

        let via = Via::new(Node::new(2, 3), ACTIVE, CONTACT, METAL1);
        let boxes = via.abs_boxes(&graph);
        assert_eq!(boxes.len(), 3);
        for b in &boxes {
            assert_eq!((b.ix1, b.iy1, b.ix2, b.iy2), (2, 3, 2, 3));
        }
        assert_eq!(boxes[0].layer, ACTIVE);
        assert_eq!(boxes[1].layer, CONTACT);
        assert_eq!(boxes[2].layer, METAL1);
    }
}
