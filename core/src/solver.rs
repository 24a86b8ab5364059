//! The two-dimensional constraint solver: alternating 1-D compaction sweeps
//! with shielding, under an outer convergence loop.

use serde::{Deserialize, Serialize};

use geometry::dir::Dir;
use geometry::EPSILON;

use crate::absbox::AbsBox;
use crate::error::Error;
use crate::graph::{CoordinateMap, Graph};
use crate::tech::{CellId, LayoutSink};

/// Solver parameters. Field defaults match §4.6 of the design: a grid large
/// enough that the first compaction is a pure pull-together, a millimeter
/// (in library-unit terms) convergence bound, and a modest iteration cap.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Initial spacing between adjacent x grid indices, before compaction.
    pub initial_grid_x: f64,
    /// Initial spacing between adjacent y grid indices, before compaction.
    pub initial_grid_y: f64,
    /// Convergence bound on the largest coordinate change between outer
    /// iterations.
    pub threshold: f64,
    /// The maximum number of outer iterations before giving up.
    pub max_iter: usize,
    /// Whether the outer loop compacts horizontally before vertically on
    /// each iteration (it always does both; this only orders them).
    pub horizontal_first: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            initial_grid_x: 10.0,
            initial_grid_y: 10.0,
            threshold: 1e-3,
            max_iter: 10,
            horizontal_first: true,
        }
    }
}

/// The outcome of a [`solve`] call.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveReport {
    /// Whether the outer loop reached `threshold` before `max_iter`.
    pub converged: bool,
    /// How many outer iterations actually ran.
    pub iterations: usize,
}

/// Spreads every grid index out by `config.initial_grid_*`, so that the
/// first compaction pass only ever pulls coordinates together.
fn initial_maps(graph: &Graph, config: &SolverConfig) -> (CoordinateMap, CoordinateMap) {
    let mut x_map = CoordinateMap::new();
    for &i in graph.x_indexes() {
        x_map.set(i, config.initial_grid_x * i as f64);
    }
    let mut y_map = CoordinateMap::new();
    for &i in graph.y_indexes() {
        y_map.set(i, config.initial_grid_y * i as f64);
    }
    (x_map, y_map)
}

/// Runs the solver to convergence (or `max_iter`), returning the final
/// coordinate maps and a report.
pub fn solve(graph: &Graph, config: &SolverConfig) -> (CoordinateMap, CoordinateMap, SolveReport) {
    let (mut x_map, mut y_map) = initial_maps(graph, config);
    tracing::info!(target: "g2l-solver", initial_grid_x = config.initial_grid_x, initial_grid_y = config.initial_grid_y, "initialized coordinate maps");

    let mut converged = false;
    let mut iterations = 0;
    for iter in 1..=config.max_iter {
        iterations = iter;
        let x_prev = x_map.clone();
        let y_prev = y_map.clone();

        let span = tracing::info_span!(target: "g2l-solver", "iteration", iter);
        let _enter = span.enter();
        if config.horizontal_first {
            compact(Dir::Horiz, graph, &mut x_map, &mut y_map);
            compact(Dir::Vert, graph, &mut x_map, &mut y_map);
        } else {
            compact(Dir::Vert, graph, &mut x_map, &mut y_map);
            compact(Dir::Horiz, graph, &mut x_map, &mut y_map);
        }

        let delta = x_map.max_abs_diff(&x_prev).max(y_map.max_abs_diff(&y_prev));
        let below_threshold = delta <= config.threshold;
        tracing::info!(target: "g2l-solver", delta, below_threshold, "iteration complete");
        if below_threshold {
            converged = true;
            break;
        }
    }

    tracing::info!(
        target: "g2l-solver",
        converged,
        iterations,
        "solve finished: {}",
        if converged { "converged" } else { "max_iter reached" }
    );
    (x_map, y_map, SolveReport { converged, iterations })
}

/// The boxes whose leading edge along `dir` lands exactly on `i`, in the
/// insertion order of their owning components.
fn current_boxes_at(graph: &Graph, dir: Dir, i: i64) -> Vec<AbsBox> {
    graph
        .components()
        .flat_map(|c| c.abs_boxes(graph))
        .filter(|b| b.leading_index(dir) == i)
        .collect()
}

/// One 1-D compaction sweep along `dir`, assigning every grid index on that
/// axis the minimum coordinate that satisfies every unshielded spacing
/// constraint against boxes already placed earlier in the sweep.
fn compact(dir: Dir, graph: &Graph, x_map: &mut CoordinateMap, y_map: &mut CoordinateMap) {
    let indexes: Vec<i64> = match dir {
        Dir::Horiz => graph.x_indexes().iter().copied().collect(),
        Dir::Vert => graph.y_indexes().iter().copied().collect(),
    };

    let mut prev_boxes: Vec<AbsBox> = Vec::new();
    for i in indexes {
        let current = current_boxes_at(graph, dir, i);
        let mut min_coord = 0.0_f64;

        for cb in &current {
            for pb in &prev_boxes {
                let (lo, hi) = (pb.layer.min(cb.layer), pb.layer.max(cb.layer));
                let Some(s) = graph.tech().space(lo, hi) else {
                    tracing::debug!(target: "g2l-solver", layer1 = lo, layer2 = hi, "unconstrained layer pair, skipping");
                    continue;
                };
                let Some(c) = required_leading_coord(s, pb, cb, dir, x_map, y_map) else {
                    continue;
                };
                if c <= min_coord {
                    continue;
                }
                if shielded(cb, pb, &prev_boxes, dir, x_map, y_map) {
                    tracing::debug!(target: "g2l-solver", index = i, "constraint shielded, dropping");
                    continue;
                }
                min_coord = c;
            }
        }

        match dir {
            Dir::Horiz => x_map.set(i, min_coord),
            Dir::Vert => y_map.set(i, min_coord),
        }
        prev_boxes.extend(current);
    }
}

/// The minimum coordinate `cb`'s leading edge along `dir` may take, given
/// that `pb` requires `s` of separation from it — or `None` if `pb` cannot
/// constrain `cb` in this pass (they overlap in the sweep direction, or
/// their extents on the other axis don't overlap).
fn required_leading_coord(s: f64, pb: &AbsBox, cb: &AbsBox, dir: Dir, x_map: &CoordinateMap, y_map: &CoordinateMap) -> Option<f64> {
    if pb.trailing_index(dir) >= cb.leading_index(dir) {
        return None;
    }

    let pb_phys = pb.physical(x_map, y_map).enlarge(s, s);
    let cb_phys = cb.physical_anchored(dir, x_map, y_map);

    let (pb_lo, pb_hi) = pb_phys.extent(dir.other());
    let (cb_lo, cb_hi) = cb_phys.extent(dir.other());
    if pb_lo > cb_hi - EPSILON || pb_hi < cb_lo + EPSILON {
        return None;
    }

    let (_, pb_trailing) = pb_phys.extent(dir);
    let (cb_leading, _) = cb_phys.extent(dir);
    Some(pb_trailing - cb_leading)
}

/// Whether some `ob` in `others` dominates the `pb`↔`cb` constraint: covers
/// their mutual perpendicular overlap on a layer either shares, and reaches
/// from before `cb`'s leading edge into the interaction region.
fn shielded(cb: &AbsBox, pb: &AbsBox, others: &[AbsBox], dir: Dir, x_map: &CoordinateMap, y_map: &CoordinateMap) -> bool {
    let (cb_para_lo, cb_para_hi) = cb.para_extent(dir);
    let (pb_para_lo, pb_para_hi) = pb.para_extent(dir);
    let para_lo = cb_para_lo.max(pb_para_lo);
    let para_hi = cb_para_hi.min(pb_para_hi);

    let cb_phys = cb.physical_anchored(dir, x_map, y_map);
    let pb_phys = pb.physical(x_map, y_map);
    let (cb_other_lo, cb_other_hi) = cb_phys.extent(dir.other());
    let (pb_other_lo, pb_other_hi) = pb_phys.extent(dir.other());
    let other_lo = cb_other_lo.max(pb_other_lo);
    let other_hi = cb_other_hi.min(pb_other_hi);

    others.iter().any(|ob| {
        ob.leading_index(dir.other()) <= para_lo
            && ob.trailing_index(dir.other()) >= para_hi
            && (ob.layer == cb.layer || ob.layer == pb.layer)
            && ob.trailing_index(dir) >= cb.leading_index(dir)
            && {
                // `ob` reaching into the interaction (the check just above)
                // means its trailing index along `dir` can equal or exceed
                // the one currently being solved for, so `ob.physical` would
                // read an unassigned coordinate. `physical_anchored` only
                // folds the perpendicular axis, which is all this needs.
                let (ob_lo, ob_hi) = ob.physical_anchored(dir, x_map, y_map).extent(dir.other());
                ob_lo <= other_lo + EPSILON && ob_hi >= other_hi - EPSILON
            }
    })
}

/// Walks every component in insertion order and emits its final geometry
/// into `sink` under a single cell named `cell_name`. Returns the cell handle.
pub fn produce<S: LayoutSink>(
    graph: &Graph,
    x_map: &CoordinateMap,
    y_map: &CoordinateMap,
    sink: &mut S,
    cell_name: &str,
) -> Result<CellId, Error>
where
    S::Error: 'static,
{
    let cell = sink.create_cell(cell_name);
    for component in graph.components() {
        for (layer, rect) in component.geometry(graph, x_map, y_map) {
            sink.insert_shape(cell, layer, rect)
                .map_err(|e| Error::Sink(Box::new(e)))?;
        }
    }
    Ok(cell)
}
