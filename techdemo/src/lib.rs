//! A reference (non-authoritative) technology implementation and in-memory
//! layout sink, used by `g2l`'s own test suite and doc examples to stay
//! buildable standalone. A real host plugs in its own PDK instead of this
//! crate.

use geometry::rect::Rect;

use g2l::error::TechError;
use g2l::tech::{CellId, LayoutSink, SideWidths, TechnologyMosfets, TechnologyRules, TechnologyVias};
use g2l::Layer;

/// Source/drain active region.
pub const ACTIVE: Layer = 0;
/// Poly gate layer.
pub const POLY: Layer = 1;
/// Contact cut between active/poly and metal1.
pub const CONTACT: Layer = 2;
/// First metal layer.
pub const METAL1: Layer = 3;
/// Via cut between metal1 and metal2.
pub const VIA1: Layer = 4;
/// Second metal layer.
pub const METAL2: Layer = 5;

const MIN_PAD: f64 = 0.2;
const CUT_SIZE: f64 = 0.17;

const LEFT: usize = 0;
const BOTTOM: usize = 1;
const RIGHT: usize = 2;
const TOP: usize = 3;

/// A minimal, documented technology used only to make `g2l` buildable and
/// testable standalone.
#[derive(Debug, Default, Clone, Copy)]
pub struct DemoTech;

impl TechnologyRules for DemoTech {
    fn layer(&self, generic_name: &str) -> Result<Layer, TechError> {
        match generic_name {
            "diff" => Ok(ACTIVE),
            "poly" => Ok(POLY),
            "contact" => Ok(CONTACT),
            "metal1" => Ok(METAL1),
            "via1" => Ok(VIA1),
            "metal2" => Ok(METAL2),
            other => Err(TechError::UnknownLayer(other.to_string())),
        }
    }

    fn space(&self, l1: Layer, l2: Layer) -> Option<f64> {
        let (lo, hi) = (l1.min(l2), l1.max(l2));
        match (lo, hi) {
            (METAL1, METAL1) => Some(0.2),
            (METAL2, METAL2) => Some(0.2),
            (ACTIVE, ACTIVE) => Some(0.27),
            (POLY, POLY) => Some(0.21),
            _ => None,
        }
    }

    fn default_wire_width(&self, layer: Layer) -> Option<f64> {
        match layer {
            METAL1 | METAL2 => Some(0.14),
            POLY => Some(0.15),
            _ => None,
        }
    }

    fn layer_name(&self, layer: Layer) -> Option<&str> {
        match layer {
            ACTIVE => Some("diff"),
            POLY => Some("poly"),
            CONTACT => Some("contact"),
            METAL1 => Some("metal1"),
            VIA1 => Some("via1"),
            METAL2 => Some("metal2"),
            _ => None,
        }
    }
}

/// The widest attached wire on either side of a given axis, or [`MIN_PAD`]
/// if nothing attaches on that axis.
fn pad_extent(widths: SideWidths, lo: usize, hi: usize) -> f64 {
    widths[lo].into_iter().chain(widths[hi]).fold(MIN_PAD, f64::max)
}

fn pad_rect(widths: SideWidths) -> Rect {
    let w = pad_extent(widths, LEFT, RIGHT);
    let h = pad_extent(widths, BOTTOM, TOP);
    Rect::from_sides(-w / 2.0, -h / 2.0, w / 2.0, h / 2.0)
}

impl TechnologyVias for DemoTech {
    fn via_boxes(
        &self,
        _bottom_layer: Layer,
        _cut_layer: Layer,
        _top_layer: Layer,
        bottom_widths: SideWidths,
        top_widths: SideWidths,
    ) -> (Rect, Rect, Rect) {
        let cut_hull = Rect::from_sides(-CUT_SIZE / 2.0, -CUT_SIZE / 2.0, CUT_SIZE / 2.0, CUT_SIZE / 2.0);
        (pad_rect(bottom_widths), cut_hull, pad_rect(top_widths))
    }

    fn via_geometry(
        &self,
        _bottom_layer: Layer,
        _cut_layer: Layer,
        _top_layer: Layer,
        _bottom_widths: SideWidths,
        _top_widths: SideWidths,
    ) -> Vec<Rect> {
        vec![Rect::from_sides(-CUT_SIZE / 2.0, -CUT_SIZE / 2.0, CUT_SIZE / 2.0, CUT_SIZE / 2.0)]
    }
}

impl TechnologyMosfets for DemoTech {
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

/// A single named cell in a [`DemoSink`]: a flat list of `(layer, rect)`
/// shapes, insertion-ordered.
#[derive(Debug, Default, Clone)]
pub struct DemoCell {
    /// The cell's name.
    pub name: String,
    /// Shapes inserted into this cell, in insertion order.
    pub shapes: Vec<(Layer, Rect)>,
}

/// A trivial in-memory [`LayoutSink`]: every emitted shape is appended to
/// its cell's shape list. No hierarchy, no file format — just enough to let
/// tests and doc examples assert on what the producer emitted.
#[derive(Debug, Default, Clone)]
pub struct DemoSink {
    /// Every cell created so far, in creation order.
    pub cells: Vec<DemoCell>,
}

impl DemoSink {
    /// An empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The shapes recorded on `layer` across every cell, in emission order.
    pub fn shapes_on(&self, layer: Layer) -> Vec<Rect> {
        self.cells
            .iter()
            .flat_map(|c| c.shapes.iter())
            .filter(|(l, _)| *l == layer)
            .map(|(_, r)| *r)
            .collect()
    }
}

/// [`DemoSink`] never fails; its error type is uninhabited.
#[derive(Debug, thiserror::Error)]
pub enum DemoSinkError {}

impl LayoutSink for DemoSink {
    type Error = DemoSinkError;

    fn create_cell(&mut self, name: &str) -> CellId {
        let id = self.cells.len();
        self.cells.push(DemoCell { name: name.to_string(), shapes: Vec::new() });
        id
    }

    fn insert_shape(&mut self, cell: CellId, layer: Layer, rect: Rect) -> Result<(), Self::Error> {
        self.cells[cell].shapes.push((layer, rect));
        Ok(())
    }
}
