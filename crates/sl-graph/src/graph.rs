//! Core graph data structures.

use std::collections::BTreeMap;

use sl_core::{Label, VertexId, Weight};

use crate::error::{GraphError, GraphResult};

/// Position of a vertex in the star layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The single hub vertex.
    Center,
    /// First-tier vertex adjacent to the center; `index` is 1-based.
    Branch { index: u32 },
    /// Terminal vertex; `branch` is the owner's 1-based index, `slot` the
    /// 1-based position among that branch's leaves.
    Leaf { branch: u32, slot: u32 },
}

/// A vertex: immutable identifier plus role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vertex {
    pub id: VertexId,
    pub role: Role,
}

/// Unordered vertex pair, stored with the smaller id first.
///
/// `EdgeKey::new(u, v) == EdgeKey::new(v, u)`, so a weight recorded once is
/// visible from both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    lo: VertexId,
    hi: VertexId,
}

impl EdgeKey {
    pub fn new(u: VertexId, v: VertexId) -> Self {
        if u <= v {
            Self { lo: u, hi: v }
        } else {
            Self { lo: v, hi: u }
        }
    }

    /// Endpoint with the smaller id.
    pub fn lo(self) -> VertexId {
        self.lo
    }

    /// Endpoint with the larger id.
    pub fn hi(self) -> VertexId {
        self.hi
    }

    pub fn endpoints(self) -> (VertexId, VertexId) {
        (self.lo, self.hi)
    }
}

impl std::fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lo, self.hi)
    }
}

/// A star graph: fixed topology plus the label and weight mappings that the
/// labeling pipeline fills in.
///
/// The graph stores:
/// - All vertices in allocation order (indexed by their ids).
/// - Array-backed adjacency: for each vertex, its neighbors in insertion order.
/// - The edge list in insertion order.
/// - A label slot per vertex and a weight per weighted edge.
#[derive(Debug, Clone)]
pub struct StarGraph {
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) adjacency: Vec<Vec<VertexId>>,
    pub(crate) edges: Vec<EdgeKey>,
    pub(crate) branch_count: u32,
    pub(crate) leaves_per_branch: u32,
    pub(crate) labels: Vec<Option<Label>>,
    pub(crate) weights: BTreeMap<EdgeKey, Weight>,
}

impl StarGraph {
    /// Return all vertices in allocation order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Get a vertex by id (returns None if out of bounds).
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.slot())
    }

    /// Number of vertices.
    pub fn order(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[EdgeKey] {
        &self.edges
    }

    /// Neighbors of a vertex in insertion order (empty for unknown ids).
    pub fn neighbors(&self, id: VertexId) -> &[VertexId] {
        self.adjacency.get(id.slot()).map_or(&[], Vec::as_slice)
    }

    pub fn degree(&self, id: VertexId) -> usize {
        self.neighbors(id).len()
    }

    /// Whether `u` and `v` are adjacent. Scans the shorter neighbor list.
    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        let (short, other) = if self.degree(u) <= self.degree(v) {
            (u, v)
        } else {
            (v, u)
        };
        self.neighbors(short).contains(&other)
    }

    pub fn center(&self) -> VertexId {
        VertexId::CENTER
    }

    pub fn branch_count(&self) -> u32 {
        self.branch_count
    }

    pub fn leaves_per_branch(&self) -> u32 {
        self.leaves_per_branch
    }

    /// Branch vertices in increasing index order.
    pub fn branches(&self) -> impl Iterator<Item = VertexId> + '_ {
        (1..=self.branch_count).map(VertexId::from_index)
    }

    /// Leaves of the 1-based `branch`, in allocation order.
    pub fn leaves_of(&self, branch: u32) -> impl Iterator<Item = VertexId> + '_ {
        let per = self.leaves_per_branch;
        let first = self.branch_count + branch.saturating_sub(1) * per + 1;
        let count = if (1..=self.branch_count).contains(&branch) {
            per
        } else {
            0
        };
        (first..first + count).map(VertexId::from_index)
    }

    /// Label of a vertex, if assigned.
    pub fn label(&self, id: VertexId) -> Option<Label> {
        self.labels.get(id.slot()).copied().flatten()
    }

    /// Assign a positive label.
    pub fn set_label(&mut self, id: VertexId, label: Label) -> GraphResult<()> {
        if label == 0 {
            return Err(GraphError::ZeroLabel { vertex: id });
        }
        let order = self.order();
        let slot = self
            .labels
            .get_mut(id.slot())
            .ok_or(GraphError::UnknownVertex { vertex: id, order })?;
        *slot = Some(label);
        Ok(())
    }

    /// All label slots, in allocation order.
    pub fn labels(&self) -> impl Iterator<Item = (VertexId, Option<Label>)> + '_ {
        self.vertices
            .iter()
            .zip(&self.labels)
            .map(|(v, label)| (v.id, *label))
    }

    /// Weight of the edge `{u, v}`, if recorded.
    pub fn weight(&self, u: VertexId, v: VertexId) -> Option<Weight> {
        self.weights.get(&EdgeKey::new(u, v)).copied()
    }

    /// Record the weight of an existing edge (both directions at once).
    ///
    /// Returns the previously recorded weight, if any.
    pub fn set_weight(
        &mut self,
        u: VertexId,
        v: VertexId,
        weight: Weight,
    ) -> GraphResult<Option<Weight>> {
        if !self.has_edge(u, v) {
            return Err(GraphError::NotAnEdge { u, v });
        }
        Ok(self.weights.insert(EdgeKey::new(u, v), weight))
    }

    /// The weight mapping, ordered by edge key.
    pub fn weights(&self) -> &BTreeMap<EdgeKey, Weight> {
        &self.weights
    }

    /// Check that every vertex is labeled and every edge weighted.
    ///
    /// Together with `set_weight` refusing non-edges this makes the weight
    /// mapping a bijection onto the edge set.
    pub fn check_complete(&self) -> GraphResult<()> {
        if let Some((vertex, _)) = self.labels().find(|(_, label)| label.is_none()) {
            return Err(GraphError::MissingLabel { vertex });
        }
        if let Some(edge) = self.edges.iter().find(|e| !self.weights.contains_key(e)) {
            return Err(GraphError::MissingWeight {
                u: edge.lo(),
                v: edge.hi(),
            });
        }
        Ok(())
    }
}
