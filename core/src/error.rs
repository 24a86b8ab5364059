//! Error types for graph construction, technology lookups, and production.

use crate::node::Node;

/// An error rejecting a malformed component at construction time.
///
/// Construction errors are fatal: the caller gets the input back instead of
/// a component that the solver would later choke on.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConstructionError {
    /// A wire's two endpoints share neither row nor column.
    #[error("wire endpoints {n1:?} and {n2:?} are not collinear")]
    WireNotCollinear {
        /// The wire's first endpoint.
        n1: Node,
        /// The wire's second endpoint.
        n2: Node,
    },
    /// A wire was given a non-positive width.
    #[error("wire width must be positive, got {0}")]
    NonPositiveWireWidth(f64),
    /// A MOSFET's gate/source/drain nodes don't share a row.
    #[error("mosfet nodes do not share a row: gate={gate:?} source={source_node:?} drain={drain:?}")]
    MosfetRowMismatch {
        /// The gate node.
        gate: Node,
        /// The source node.
        source_node: Node,
        /// The drain node.
        drain: Node,
    },
    /// A MOSFET was given a non-positive width.
    #[error("mosfet width must be positive, got {0}")]
    NonPositiveMosfetWidth(f64),
    /// A MOSFET was given a non-positive length.
    #[error("mosfet length must be positive, got {0}")]
    NonPositiveMosfetLength(f64),
}

/// An error thrown by a [`Technology`](crate::tech::Technology) implementation.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum TechError {
    /// A generic layer name (`"diff"`, `"metal1"`, ...) has no mapping in this technology.
    #[error("unknown generic layer name {0:?}")]
    UnknownLayer(String),
}

/// The error type for this crate's fallible operations.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A component was rejected at construction.
    #[error("invalid component: {0}")]
    Construction(#[from] ConstructionError),
    /// A technology query failed.
    #[error("technology error: {0}")]
    Tech(#[from] TechError),
    /// The layout sink rejected a shape or cell during production.
    #[error("layout sink error: {0}")]
    Sink(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// A [`Result`](std::result::Result) defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
