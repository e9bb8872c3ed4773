//! Greedy labeling of the amalgamated star `S_n,m`.
//!
//! Branch labels climb in steps of `k / (n - 1)`. Leaf labels are not closed
//! form: each leaf edge takes the smallest weight still in the pool and the
//! leaf label is whatever makes the sum come out to that weight; it must land
//! in `[1, k]`. Because all center edges are committed before any leaf, the
//! leaves fill the gaps the branches left, lowest first, and no weight is ever
//! handed out twice.

use sl_core::{Label, StarParams, VertexId};
use sl_graph::StarGraph;
use tracing::debug;

use super::LabelingScheme;
use crate::error::{LabelingError, LabelingResult};
use crate::pool::WeightPool;
use crate::resolver::{EdgeWeightResolver, WeightRule};

#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyPoolScheme;

impl LabelingScheme for GreedyPoolScheme {
    fn name(&self) -> &'static str {
        "greedy-pool S_n,m"
    }

    fn rule(&self) -> WeightRule {
        WeightRule::Sum
    }

    fn resolver(&self, params: &StarParams) -> EdgeWeightResolver {
        EdgeWeightResolver::with_pool(
            self.rule(),
            params.k(),
            WeightPool::for_sum_labels(params.k()),
        )
    }

    fn run(
        &self,
        params: &StarParams,
        graph: &mut StarGraph,
        resolver: &mut EdgeWeightResolver,
    ) -> LabelingResult<()> {
        let n = params.n();
        let center = graph.center();
        let center_label: Label = 1;
        graph.set_label(center, center_label)?;

        let mut branch_labels = Vec::with_capacity(n as usize);
        for i in 1..=n {
            let branch = VertexId::from_index(i);
            let label = branch_label(n, params.k(), i);
            if label == 0 {
                return Err(LabelingError::NonPositiveLabel {
                    vertex: branch,
                    value: 0,
                });
            }
            graph.set_label(branch, label)?;
            let weight = resolver.rule().apply(center_label, label);
            resolver.commit(graph, center, branch, weight)?;
            branch_labels.push(label);
        }
        debug!(
            n,
            k = params.k(),
            remaining = resolver.pool().map_or(0, WeightPool::len),
            "branch edges committed"
        );

        for (i, &base) in (1..=n).zip(&branch_labels) {
            let branch = VertexId::from_index(i);
            for slot in 1..=params.leaves_per_branch() {
                let leaf = VertexId::from_index(params.leaf_index(i, slot));
                let weight = resolver.next_free_weight(branch, leaf)?;
                let value = i64::from(weight) - i64::from(base);
                if value <= 0 {
                    return Err(LabelingError::NonPositiveLabel {
                        vertex: leaf,
                        value,
                    });
                }
                let label = weight - base;
                if label > params.k() {
                    return Err(LabelingError::LabelOutOfRange {
                        vertex: leaf,
                        value: label,
                        k: params.k(),
                    });
                }
                graph.set_label(leaf, label)?;
                resolver.commit(graph, branch, leaf, weight)?;
            }
        }
        debug!(
            remaining = resolver.pool().map_or(0, WeightPool::len),
            "leaf edges committed"
        );

        Ok(())
    }
}

/// Label of branch `i` (1-based): 1 for the first branch, then
/// `floor((i - 1) * k / (n - 1))`, computed without floating point.
pub(crate) fn branch_label(n: u32, k: u32, i: u32) -> Label {
    if i <= 1 || n < 2 {
        return 1;
    }
    let step = u64::from(i - 1) * u64::from(k) / u64::from(n - 1);
    Label::try_from(step).unwrap_or(Label::MAX)
}
