//! Labeling error types.

use sl_core::{Label, SlError, VertexId, Weight};
use sl_graph::{EdgeKey, GraphError};
use thiserror::Error;

pub type LabelingResult<T> = Result<T, LabelingError>;

/// Errors raised while constructing and labeling a star graph.
///
/// Any of these aborts the construction; the partially labeled graph is
/// dropped, never handed back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelingError {
    /// Parameters rejected before any construction work.
    #[error("invalid configuration: {0}")]
    Config(#[from] SlError),

    /// Structural failure in the graph layer.
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    /// The weight an edge demands was already consumed or lies outside the pool.
    #[error("weight {weight} for edge {edge} is not available (k = {k})")]
    WeightUnavailable { edge: EdgeKey, weight: Weight, k: u32 },

    /// The pool ran dry before every edge got a weight.
    #[error("no unused weight left for edge {edge} (k = {k})")]
    PoolExhausted { edge: EdgeKey, k: u32 },

    /// Two edges produced the same weight.
    #[error("edge {edge} repeats weight {weight} already used by edge {previous}")]
    WeightCollision {
        edge: EdgeKey,
        previous: EdgeKey,
        weight: Weight,
    },

    /// A derived label came out as zero or negative.
    #[error("derived label {value} for vertex {vertex} is not positive")]
    NonPositiveLabel { vertex: VertexId, value: i64 },

    /// A derived label came out above the bound `k`.
    #[error("derived label {value} for vertex {vertex} exceeds k = {k}")]
    LabelOutOfRange { vertex: VertexId, value: Label, k: u32 },
}

impl LabelingError {
    /// Whether the failure means k is too small for this shape, as opposed to
    /// a rejected configuration or a structural bug.
    pub fn is_infeasible(&self) -> bool {
        matches!(
            self,
            LabelingError::WeightUnavailable { .. }
                | LabelingError::PoolExhausted { .. }
                | LabelingError::WeightCollision { .. }
                | LabelingError::NonPositiveLabel { .. }
                | LabelingError::LabelOutOfRange { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infeasibility_classification() {
        let edge = EdgeKey::new(VertexId::from_index(0), VertexId::from_index(1));
        assert!(LabelingError::PoolExhausted { edge, k: 3 }.is_infeasible());
        assert!(
            LabelingError::NonPositiveLabel {
                vertex: VertexId::from_index(4),
                value: -1,
            }
            .is_infeasible()
        );
        assert!(
            LabelingError::LabelOutOfRange {
                vertex: VertexId::from_index(7),
                value: 6,
                k: 5,
            }
            .is_infeasible()
        );
        let config = LabelingError::from(SlError::Invariant { what: "test" });
        assert!(!config.is_infeasible());
    }

    #[test]
    fn messages_name_the_edge() {
        let edge = EdgeKey::new(VertexId::from_index(2), VertexId::from_index(0));
        let err = LabelingError::WeightUnavailable {
            edge,
            weight: 3,
            k: 2,
        };
        assert_eq!(
            err.to_string(),
            "weight 3 for edge (0, 2) is not available (k = 2)"
        );
    }
}
