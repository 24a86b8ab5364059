//! The pluggable technology and layout-sink interfaces the core consumes.
//!
//! Nothing in this module holds state: every query takes `&self`, and a host
//! is expected to pass the same `&dyn Technology` into every [`Graph`] it
//! builds rather than reaching for a global singleton (see the graph module
//! for how it's threaded through).

use geometry::rect::Rect;

use crate::error::TechError;
use crate::Layer;

/// Opaque handle to a cell created in a [`LayoutSink`].
pub type CellId = usize;

/// Per-node, per-side wire widths a [`Via`](crate::via::Via) uses to size its
/// landing pads: indexed `[left, bottom, right, top]`, `None` where nothing
/// attaches from that side.
pub type SideWidths = [Option<f64>; 4];

/// Layer, spacing, and wire-width queries.
pub trait TechnologyRules {
    /// Translates a generic layer name (`"diff"`, `"poly"`, `"metal1"`, ...)
    /// into this technology's layer id.
    fn layer(&self, generic_name: &str) -> Result<Layer, TechError>;

    /// The minimum separation required between layers `l1` and `l2`, or
    /// `None` if the pair is unconstrained.
    fn space(&self, l1: Layer, l2: Layer) -> Option<f64>;

    /// The default wire width for `layer`, if this technology has one.
    fn default_wire_width(&self, layer: Layer) -> Option<f64>;

    /// A human-readable name for `layer`, used only for diagnostics.
    fn layer_name(&self, layer: Layer) -> Option<&str> {
        let _ = layer;
        None
    }
}

/// Via construction queries.
pub trait TechnologyVias {
    /// The coarse footprints `(bottom_pad, cut_hull, top_pad)` for a via
    /// stacking `bottom_layer`/`cut_layer`/`top_layer`, given the widths of
    /// wires attached on each side at each level. `cut_hull` is the bounding
    /// box of the individual cuts, used by the solver for spacing checks.
    fn via_boxes(
        &self,
        bottom_layer: Layer,
        cut_layer: Layer,
        top_layer: Layer,
        bottom_widths: SideWidths,
        top_widths: SideWidths,
    ) -> (Rect, Rect, Rect);

    /// The individual cut rectangles making up the via, in the same local
    /// frame as `cut_hull` from [`via_boxes`](TechnologyVias::via_boxes).
    fn via_geometry(
        &self,
        bottom_layer: Layer,
        cut_layer: Layer,
        top_layer: Layer,
        bottom_widths: SideWidths,
        top_widths: SideWidths,
    ) -> Vec<Rect>;
}

/// MOSFET dimension queries.
pub trait TechnologyMosfets {
    /// The width of the source/drain active region, regardless of device width.
    fn source_drain_active_width(&self) -> f64;
    /// How far the poly gate extends past the active region on each end.
    fn gate_extension(&self) -> f64;
    /// The default channel length, for callers that don't specify one.
    fn default_mos_length(&self) -> f64;
    /// The minimum NMOS width this technology allows.
    fn min_nmos_width(&self) -> f64;
    /// The minimum PMOS width this technology allows.
    fn min_pmos_width(&self) -> f64;
    /// The poly gate layer.
    fn poly_layer(&self) -> Layer;
    /// The source/drain active layer.
    fn active_layer(&self) -> Layer;
}

/// The full set of technology queries a [`Graph`](crate::graph::Graph) needs.
///
/// Implemented for any type implementing the three narrower traits; hosts
/// write one concrete type and get this for free.
pub trait Technology: TechnologyRules + TechnologyVias + TechnologyMosfets {}

impl<T: TechnologyRules + TechnologyVias + TechnologyMosfets> Technology for T {}

/// The layout destination a [`Solver`](crate::solver) produces into.
///
/// The core only ever calls these three methods; everything else (cell
/// hierarchy, GDSII export, DRC) is the host's concern.
pub trait LayoutSink {
    /// The error this sink's operations may fail with.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Creates a new cell named `name` and returns a handle to it.
    fn create_cell(&mut self, name: &str) -> CellId;

    /// Inserts `rect` on `layer` into `cell`.
    fn insert_shape(&mut self, cell: CellId, layer: Layer, rect: Rect) -> Result<(), Self::Error>;
}
