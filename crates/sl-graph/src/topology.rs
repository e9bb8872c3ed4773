//! Topology construction for the three star families.

use sl_core::{Family, StarParams, VertexId};
use tracing::debug;

use crate::builder::StarBuilder;
use crate::error::GraphResult;
use crate::graph::{Role, StarGraph};

/// Build the unlabeled topology described by `params`.
///
/// Vertex ids follow the allocation contract the labelers rely on: center
/// `0`, branches `1..=n`, then leaves grouped by owning branch. Edges are
/// inserted branch by branch (center edge, leaf edges, then for the snowflake
/// the edge to the next branch around the cycle).
pub fn build_topology(params: &StarParams) -> GraphResult<StarGraph> {
    let n = params.n();
    let per = params.leaves_per_branch();
    let mut builder =
        StarBuilder::with_capacity(params.order() as usize, params.edge_count() as usize);

    let center = builder.add_vertex(Role::Center);
    for index in 1..=n {
        builder.add_vertex(Role::Branch { index });
    }
    for branch in 1..=n {
        for slot in 1..=per {
            builder.add_vertex(Role::Leaf { branch, slot });
        }
    }

    for index in 1..=n {
        let branch = VertexId::from_index(index);
        builder.add_edge(center, branch)?;
        for slot in 1..=per {
            builder.add_edge(branch, VertexId::from_index(params.leaf_index(index, slot)))?;
        }
        if params.family() == Family::Snowflake {
            let next = VertexId::from_index(index % n + 1);
            builder.add_edge(branch, next)?;
        }
    }

    debug!(
        family = %params.family(),
        order = builder.order(),
        size = builder.size(),
        "topology built"
    );
    builder.build()
}
