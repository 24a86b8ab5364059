//! Real-valued axis-aligned geometry primitives.
//!
//! Everything in this crate is a plain value type: points and rectangles are
//! `Copy`, arithmetic never panics, and there is no notion of a "current
//! transform" or builder. The one operation specific to grid-to-layout
//! compaction is [`Rect::fold`], which translates and stretches a rectangle
//! expressed in a component's own footprint frame by a pair of grid-assigned
//! coordinate deltas.

pub mod dir;
pub mod point;
pub mod rect;

/// Absolute tolerance used throughout for overlap and coincidence checks.
///
/// Kept separate from a solver's convergence `threshold`, which bounds how
/// much a coordinate may move between iterations rather than whether two
/// edges are considered touching.
pub const EPSILON: f64 = 1e-10;
