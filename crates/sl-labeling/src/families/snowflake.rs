//! Labeling of the snowflake star under the max weight rule.

use sl_core::{Label, StarParams, VertexId};
use sl_graph::StarGraph;
use tracing::{debug, warn};

use super::LabelingScheme;
use crate::error::LabelingResult;
use crate::resolver::{EdgeWeightResolver, WeightRule};

/// Label of the first branch.
pub const FIRST_BRANCH_LABEL: Label = 11;
/// Branch labels advance by skipping one odd value: 11, 15, 19, ...
pub const BRANCH_STEP: Label = 4;
/// Offsets of the two leaf labels from their branch label.
pub const LEAF_OFFSETS: [Label; 2] = [1, 3];

#[derive(Debug, Clone, Copy, Default)]
pub struct SnowflakeScheme;

impl LabelingScheme for SnowflakeScheme {
    fn name(&self) -> &'static str {
        "odd-step snowflake"
    }

    fn rule(&self) -> WeightRule {
        WeightRule::Max
    }

    fn run(
        &self,
        params: &StarParams,
        graph: &mut StarGraph,
        resolver: &mut EdgeWeightResolver,
    ) -> LabelingResult<()> {
        let k = params.k();
        graph.set_label(graph.center(), 1)?;

        for i in 1..=params.n() {
            let base = branch_label(i, k);
            graph.set_label(VertexId::from_index(i), base)?;
            for (slot, offset) in (1..).zip(LEAF_OFFSETS) {
                let leaf = VertexId::from_index(params.leaf_index(i, slot));
                graph.set_label(leaf, base.saturating_add(offset).min(k))?;
            }
        }
        debug!(n = params.n(), k, "snowflake labels assigned");

        // Under max weights the cycle edges share weights with center edges,
        // so repeats are collected rather than treated as fatal.
        resolver.resolve_lenient(graph)?;
        let collisions = resolver.registry().collisions().len();
        if collisions > 0 {
            warn!(collisions, "snowflake labeling is not edge-irregular");
        }
        Ok(())
    }
}

/// Label of branch `i` (1-based), capped at `k`.
pub(crate) fn branch_label(i: u32, k: u32) -> Label {
    let raw = u64::from(FIRST_BRANCH_LABEL) + u64::from(BRANCH_STEP) * u64::from(i - 1);
    Label::try_from(raw).unwrap_or(Label::MAX).min(k)
}
