//! Compacts an abstract, grid-based schematic description into physical
//! VLSI layout geometry.
//!
//! A host builds a [`graph::Graph`] of [`component::Component`]s (wires,
//! vias, MOSFETs) placed on an integer grid, hands it to [`solver::solve`]
//! along with a [`tech::Technology`] describing design rules, and calls
//! [`solver::produce`] to walk the converged layout into a
//! [`tech::LayoutSink`].

pub mod absbox;
pub mod component;
pub mod error;
pub mod graph;
pub mod mosfet;
pub mod node;
pub mod solver;
pub mod tech;
pub mod via;
pub mod wire;

/// A dense nonnegative integer identifying a conductor or cut layer.
/// Ordering is not semantic except within a via stack.
pub type Layer = usize;

pub use absbox::AbsBox;
pub use component::Component;
pub use error::{ConstructionError, Error, Result, TechError};
pub use graph::{CoordinateMap, Graph};
pub use mosfet::Mosfet;
pub use node::Node;
pub use solver::{produce, solve, SolveReport, SolverConfig};
pub use tech::{LayoutSink, Technology, TechnologyMosfets, TechnologyRules, TechnologyVias};
pub use via::Via;
pub use wire::Wire;
