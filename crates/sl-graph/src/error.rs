//! Graph-specific error types.

use sl_core::{SlError, VertexId};
use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

/// Graph construction and validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The parameters were rejected before construction started.
    #[error("invalid configuration: {0}")]
    Config(#[from] SlError),

    /// An edge or label refers to a vertex that doesn't exist.
    #[error("vertex {vertex} does not exist (order {order})")]
    UnknownVertex { vertex: VertexId, order: usize },

    /// An edge would connect a vertex to itself.
    #[error("self-loop on vertex {vertex}")]
    SelfLoop { vertex: VertexId },

    /// The edge is already present.
    #[error("duplicate edge {u}-{v}")]
    DuplicateEdge { u: VertexId, v: VertexId },

    /// A weight was recorded for a vertex pair that is not an edge.
    #[error("{u}-{v} is not an edge")]
    NotAnEdge { u: VertexId, v: VertexId },

    /// Labels are positive integers.
    #[error("vertex {vertex} cannot take label 0")]
    ZeroLabel { vertex: VertexId },

    /// Vertex roles don't follow the center / branches / grouped leaves layout.
    #[error("vertex {vertex} breaks the allocation order: {what}")]
    AllocationOrder {
        vertex: VertexId,
        what: &'static str,
    },

    /// Adjacency lists disagree with the edge list.
    #[error("inconsistent adjacency at vertex {vertex}")]
    InconsistentAdjacency { vertex: VertexId },

    /// A finished labeling left a vertex without a label.
    #[error("vertex {vertex} has no label")]
    MissingLabel { vertex: VertexId },

    /// A finished labeling left an edge without a weight.
    #[error("edge {u}-{v} has no weight")]
    MissingWeight { u: VertexId, v: VertexId },
}
