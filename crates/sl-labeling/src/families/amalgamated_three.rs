//! Closed-form labeling of the homogeneous amalgamated star `S_n,3`.
//!
//! With `c = ceil(n / 4)` the scheme places the edge weights exactly on
//! `2..=3n + 1`. Two variants exist, selected by `n mod 4`.

use sl_core::{Label, StarParams, VertexId};
use sl_graph::StarGraph;
use tracing::debug;

use super::LabelingScheme;
use crate::error::LabelingResult;
use crate::resolver::{EdgeWeightResolver, WeightRule};

#[derive(Debug, Clone, Copy, Default)]
pub struct ClosedFormScheme;

impl LabelingScheme for ClosedFormScheme {
    fn name(&self) -> &'static str {
        "closed-form S_n,3"
    }

    fn rule(&self) -> WeightRule {
        WeightRule::Sum
    }

    fn run(
        &self,
        params: &StarParams,
        graph: &mut StarGraph,
        resolver: &mut EdgeWeightResolver,
    ) -> LabelingResult<()> {
        let n = params.n();
        graph.set_label(graph.center(), 1)?;

        for i in 1..=n {
            graph.set_label(VertexId::from_index(i), branch_label(n, i))?;
            let (first, second) = leaf_labels(n, i);
            graph.set_label(VertexId::from_index(params.leaf_index(i, 1)), first)?;
            graph.set_label(VertexId::from_index(params.leaf_index(i, 2)), second)?;
        }
        debug!(n, c = n.div_ceil(4), "S_n,3 labels assigned");

        resolver.resolve_strict(graph)
    }
}

/// Label of branch `i` (1-based).
pub(crate) fn branch_label(n: u32, i: u32) -> Label {
    let c = n.div_ceil(4);
    if n % 4 == 1 {
        if i <= c { 3 * i - 2 } else { 2 * c + i - 1 }
    } else if i <= c + 1 {
        3 * i - 2
    } else {
        2 * c + i
    }
}

/// Labels of the two leaves of branch `i` (1-based).
pub(crate) fn leaf_labels(n: u32, i: u32) -> (Label, Label) {
    let c = n.div_ceil(4);
    if n % 4 == 1 {
        if i < c {
            (2, 3)
        } else if i == c {
            (2, n - c + 3)
        } else {
            (n + i + 1 - 2 * c, n + i + 2 - 2 * c)
        }
    } else if i <= c {
        (2, 3)
    } else {
        // n + i + j - 1 - 2c for j = 1, 2
        (n + i - 2 * c, n + i + 1 - 2 * c)
    }
}
