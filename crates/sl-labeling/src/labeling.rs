//! The finished, read-only result of a construction.

use core::fmt;

use sl_core::{Family, Label, StarParams, VertexId, Weight};
use sl_graph::{EdgeKey, StarGraph};

use crate::pool::WeightPool;
use crate::registry::WeightCollision;
use crate::resolver::WeightRule;

/// A fully labeled star graph.
///
/// Produced only by [`crate::construct`]; the graph can no longer be mutated.
#[derive(Debug, Clone)]
pub struct Labeling {
    pub(crate) params: StarParams,
    pub(crate) scheme: &'static str,
    pub(crate) rule: WeightRule,
    pub(crate) graph: StarGraph,
    pub(crate) collisions: Vec<WeightCollision>,
    pub(crate) pool: Option<WeightPool>,
}

impl Labeling {
    pub fn params(&self) -> &StarParams {
        &self.params
    }

    pub fn family(&self) -> Family {
        self.params.family()
    }

    pub fn k(&self) -> u32 {
        self.params.k()
    }

    /// Name of the scheme that produced the labels.
    pub fn scheme(&self) -> &'static str {
        self.scheme
    }

    pub fn rule(&self) -> WeightRule {
        self.rule
    }

    pub fn graph(&self) -> &StarGraph {
        &self.graph
    }

    pub fn label(&self, vertex: VertexId) -> Option<Label> {
        self.graph.label(vertex)
    }

    pub fn weight(&self, u: VertexId, v: VertexId) -> Option<Weight> {
        self.graph.weight(u, v)
    }

    /// Vertex labels in allocation order.
    pub fn labels(&self) -> impl Iterator<Item = (VertexId, Label)> + '_ {
        self.graph
            .labels()
            .filter_map(|(v, label)| label.map(|l| (v, l)))
    }

    /// Edge weights in edge insertion order.
    pub fn edge_weights(&self) -> impl Iterator<Item = (EdgeKey, Weight)> + '_ {
        self.graph
            .edges()
            .iter()
            .filter_map(|e| self.graph.weights().get(e).map(|w| (*e, *w)))
    }

    /// Edges that share a weight with an earlier edge (max-rule schemes only).
    pub fn collisions(&self) -> &[WeightCollision] {
        &self.collisions
    }

    /// Whether all edge weights are pairwise distinct.
    pub fn is_edge_irregular(&self) -> bool {
        self.collisions.is_empty()
    }

    /// Weights left unused in the pool, for the greedy scheme.
    pub fn remaining_pool(&self) -> Option<&WeightPool> {
        self.pool.as_ref()
    }

    pub fn max_label(&self) -> Label {
        self.labels().map(|(_, l)| l).max().unwrap_or(0)
    }

    pub fn max_weight(&self) -> Weight {
        self.graph.weights().values().copied().max().unwrap_or(0)
    }

    pub fn complexity(&self) -> Complexity {
        Complexity::of(&self.params)
    }
}

/// Theoretical cost of a construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Complexity {
    pub vertices: u64,
    pub edges: u64,
    /// Family-specific operation bound: `n * m * k` for the greedy scheme
    /// (every leaf may scan the weight range), `V + E` otherwise.
    pub bound: u64,
}

impl Complexity {
    pub fn of(params: &StarParams) -> Self {
        let vertices = u64::from(params.order());
        let edges = u64::from(params.edge_count());
        let bound = match params.family() {
            Family::Amalgamated => {
                u64::from(params.n()) * u64::from(params.m()) * u64::from(params.k())
            }
            Family::AmalgamatedThree | Family::Snowflake => vertices + edges,
        };
        Self {
            vertices,
            edges,
            bound,
        }
    }

    /// `O(V + E)`.
    pub fn linear(&self) -> u64 {
        self.vertices + self.edges
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T({}), V+E = {}", self.bound, self.linear())
    }
}
