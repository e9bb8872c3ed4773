//! Incremental graph builder.

use std::collections::{BTreeMap, HashSet};

use sl_core::VertexId;

use crate::error::{GraphError, GraphResult};
use crate::graph::{EdgeKey, Role, StarGraph, Vertex};
use crate::validate;

/// Builder for constructing a star graph incrementally.
///
/// Use `add_vertex` and `add_edge` to build up the graph, then call `build()`
/// to validate and freeze the topology into a `StarGraph` whose labels and
/// weights are still empty.
#[derive(Debug, Default)]
pub struct StarBuilder {
    vertices: Vec<Vertex>,
    adjacency: Vec<Vec<VertexId>>,
    edges: Vec<EdgeKey>,
    edge_set: HashSet<EdgeKey>,
}

impl StarBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with room for `order` vertices and `size` edges.
    pub fn with_capacity(order: usize, size: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(order),
            adjacency: Vec::with_capacity(order),
            edges: Vec::with_capacity(size),
            edge_set: HashSet::with_capacity(size),
        }
    }

    /// Add a vertex and return its id. Ids are handed out densely from 0.
    pub fn add_vertex(&mut self, role: Role) -> VertexId {
        let id = VertexId::from_index(self.vertices.len() as u32);
        self.vertices.push(Vertex { id, role });
        self.adjacency.push(Vec::new());
        id
    }

    /// Connect two existing, distinct vertices.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> GraphResult<EdgeKey> {
        let order = self.vertices.len();
        for vertex in [u, v] {
            if vertex.slot() >= order {
                return Err(GraphError::UnknownVertex { vertex, order });
            }
        }
        if u == v {
            return Err(GraphError::SelfLoop { vertex: u });
        }
        let key = EdgeKey::new(u, v);
        if !self.edge_set.insert(key) {
            return Err(GraphError::DuplicateEdge { u, v });
        }

        self.adjacency[u.slot()].push(v);
        self.adjacency[v.slot()].push(u);
        self.edges.push(key);
        Ok(key)
    }

    pub fn order(&self) -> usize {
        self.vertices.len()
    }

    pub fn size(&self) -> usize {
        self.edges.len()
    }

    /// Validate the layout and adjacency, returning an unlabeled `StarGraph`.
    pub fn build(self) -> GraphResult<StarGraph> {
        let (branch_count, leaves_per_branch) = validate::validate_layout(&self.vertices)?;
        validate::validate_adjacency(&self.vertices, &self.adjacency, &self.edges)?;

        let order = self.vertices.len();
        Ok(StarGraph {
            vertices: self.vertices,
            adjacency: self.adjacency,
            edges: self.edges,
            branch_count,
            leaves_per_branch,
            labels: vec![None; order],
            weights: BTreeMap::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_basic() {
        let mut builder = StarBuilder::new();
        let c = builder.add_vertex(Role::Center);
        let b = builder.add_vertex(Role::Branch { index: 1 });
        builder.add_edge(c, b).unwrap();

        assert_eq!(c.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(builder.order(), 2);
        assert_eq!(builder.size(), 1);
    }

    #[test]
    fn builder_rejects_bad_edges() {
        let mut builder = StarBuilder::new();
        let c = builder.add_vertex(Role::Center);
        let b = builder.add_vertex(Role::Branch { index: 1 });
        builder.add_edge(c, b).unwrap();

        assert_eq!(
            builder.add_edge(b, c),
            Err(GraphError::DuplicateEdge { u: b, v: c })
        );
        assert_eq!(
            builder.add_edge(b, b),
            Err(GraphError::SelfLoop { vertex: b })
        );
        let ghost = VertexId::from_index(9);
        assert!(matches!(
            builder.add_edge(c, ghost),
            Err(GraphError::UnknownVertex { order: 2, .. })
        ));
        assert_eq!(builder.size(), 1);
    }

    #[test]
    fn builder_build_simple() {
        let mut builder = StarBuilder::new();
        let c = builder.add_vertex(Role::Center);
        let b = builder.add_vertex(Role::Branch { index: 1 });
        let l = builder.add_vertex(Role::Leaf { branch: 1, slot: 1 });
        builder.add_edge(c, b).unwrap();
        builder.add_edge(b, l).unwrap();

        let graph = builder.build().unwrap();
        assert_eq!(graph.order(), 3);
        assert_eq!(graph.size(), 2);
        assert_eq!(graph.neighbors(b), &[c, l]);
        assert_eq!(graph.branch_count(), 1);
        assert_eq!(graph.leaves_per_branch(), 1);
        assert!(graph.labels().all(|(_, label)| label.is_none()));
        assert!(graph.weights().is_empty());
    }
}
