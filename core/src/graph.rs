//! The container that indexes components by node and by layer.

use std::collections::{BTreeSet, HashMap};

use crate::component::Component;
use crate::tech::Technology;
use crate::Layer;

/// A mapping from grid index to assigned physical coordinate, along one axis.
#[derive(Debug, Clone, Default)]
pub struct CoordinateMap(HashMap<i64, f64>);

impl CoordinateMap {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// The coordinate assigned to grid index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` was never assigned a coordinate. Every index the solver
    /// reads through this map was first inserted during initialization, so
    /// this only fires if a caller builds a map by hand and forgets an index.
    pub fn get(&self, i: i64) -> f64 {
        *self.0.get(&i).unwrap_or_else(|| panic!("grid index {i} has no assigned coordinate"))
    }

    /// Assigns `value` to grid index `i`.
    pub fn set(&mut self, i: i64, value: f64) {
        self.0.insert(i, value);
    }

    /// Iterates over all `(index, coordinate)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.0.iter().map(|(&i, &v)| (i, v))
    }

    /// The largest absolute difference between corresponding entries of two
    /// maps over the same set of indices. Used to measure convergence.
    pub fn max_abs_diff(&self, other: &CoordinateMap) -> f64 {
        self.0
            .iter()
            .map(|(i, v)| (v - other.get(*i)).abs())
            .fold(0.0, f64::max)
    }
}

/// The container holding a design's components, read-only once handed to a
/// solver.
///
/// A `Graph` owns its [`Technology`] for the lifetime of the borrow: every
/// component method that needs a design-rule or dimension query reaches it
/// through `graph.tech()` rather than through global state.
pub struct Graph<'t> {
    tech: &'t dyn Technology,
    components: Vec<Box<dyn Component>>,
    x_indexes: BTreeSet<i64>,
    y_indexes: BTreeSet<i64>,
    by_node: HashMap<(i64, i64), Vec<usize>>,
    by_layer: HashMap<Layer, Vec<usize>>,
}

impl<'t> Graph<'t> {
    /// Creates an empty graph backed by `tech`.
    pub fn new(tech: &'t dyn Technology) -> Self {
        Self {
            tech,
            components: Vec::new(),
            x_indexes: BTreeSet::new(),
            y_indexes: BTreeSet::new(),
            by_node: HashMap::new(),
            by_layer: HashMap::new(),
        }
    }

    /// The technology this graph was built against.
    pub fn tech(&self) -> &dyn Technology {
        self.tech
    }

    /// Appends a component, indexing its nodes and layers.
    ///
    /// A component naming the same node twice is only recorded once in that
    /// node's list — callers don't need to pre-deduplicate.
    pub fn add<C: Component + 'static>(&mut self, component: C) -> usize {
        let idx = self.components.len();
        self.components.push(Box::new(component));

        let nodes = self.components[idx].nodes();
        for n in &nodes {
            self.x_indexes.insert(n.ix);
            self.y_indexes.insert(n.iy);
            let at_node = self.by_node.entry((n.ix, n.iy)).or_default();
            if !at_node.contains(&idx) {
                at_node.push(idx);
            }
        }

        let layers = self.components[idx].layers(self);
        for l in layers {
            let at_layer = self.by_layer.entry(l).or_default();
            if !at_layer.contains(&idx) {
                at_layer.push(idx);
            }
        }

        idx
    }

    /// The components declaring a node at `(ix, iy)`, in insertion order.
    pub fn components_at(&self, ix: i64, iy: i64) -> Vec<&dyn Component> {
        self.by_node
            .get(&(ix, iy))
            .map(|idxs| idxs.iter().map(|&i| self.components[i].as_ref()).collect())
            .unwrap_or_default()
    }

    /// The components occupying `layer`, in insertion order.
    pub fn components_on_layer(&self, layer: Layer) -> Vec<&dyn Component> {
        self.by_layer
            .get(&layer)
            .map(|idxs| idxs.iter().map(|&i| self.components[i].as_ref()).collect())
            .unwrap_or_default()
    }

    /// All components, in insertion order.
    pub fn components(&self) -> impl Iterator<Item = &dyn Component> {
        self.components.iter().map(|c| c.as_ref())
    }

    /// The distinct grid indices used along x, ascending.
    pub fn x_indexes(&self) -> &BTreeSet<i64> {
        &self.x_indexes
    }

    /// The distinct grid indices used along y, ascending.
    pub fn y_indexes(&self) -> &BTreeSet<i64> {
        &self.y_indexes
    }
}

impl std::fmt::Debug for Graph<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("components", &self.components.len())
            .field("x_indexes", &self.x_indexes)
            .field("y_indexes", &self.y_indexes)
            .finish()
    }
}
