//! sl-labeling: edge-irregular vertex k-labelings of star graphs.
//!
//! Provides:
//! - The three family schemes behind the [`LabelingScheme`] trait
//! - The edge-weight resolver, its weight registry and the available-weight pool
//! - The [`construct`] entry point and independent [`verify`]
//!
//! # Example
//!
//! ```
//! use sl_core::StarParams;
//! use sl_labeling::{construct, verify};
//!
//! let params = StarParams::amalgamated_three(3).unwrap();
//! let labeling = construct(&params).unwrap();
//!
//! assert!(labeling.is_edge_irregular());
//! assert!(verify(&labeling).weights_unique);
//! ```

pub mod error;
pub mod families;
pub mod labeling;
pub mod pool;
pub mod registry;
pub mod resolver;
pub mod verify;

use sl_core::{Family, StarParams};
use sl_graph::build_topology;
use tracing::{info, instrument};

pub use error::{LabelingError, LabelingResult};
pub use families::{LabelingScheme, scheme_for};
pub use labeling::{Complexity, Labeling};
pub use pool::WeightPool;
pub use registry::{WeightCollision, WeightRegistry};
pub use resolver::{EdgeWeightResolver, WeightRule};
pub use verify::{Verification, verify};

/// Build the topology for `params` and label it with the family's scheme.
///
/// Fails without returning any partial result if the scheme cannot find a
/// collision-free weight, derives a non-positive label, or the graph layer
/// rejects the construction.
#[instrument(
    level = "debug",
    skip(params),
    fields(family = %params.family(), n = params.n(), m = params.m(), k = params.k())
)]
pub fn construct(params: &StarParams) -> LabelingResult<Labeling> {
    let scheme = scheme_for(params.family());
    let mut graph = build_topology(params)?;
    let mut resolver = scheme.resolver(params);

    scheme.run(params, &mut graph, &mut resolver)?;
    graph.check_complete()?;

    let rule = resolver.rule();
    let (registry, pool) = resolver.into_parts();
    let labeling = Labeling {
        params: *params,
        scheme: scheme.name(),
        rule,
        graph,
        collisions: registry.into_collisions(),
        pool,
    };
    info!(
        scheme = labeling.scheme(),
        vertices = labeling.graph().order(),
        edges = labeling.graph().size(),
        max_label = labeling.max_label(),
        max_weight = labeling.max_weight(),
        irregular = labeling.is_edge_irregular(),
        "labeling complete"
    );
    Ok(labeling)
}

/// Validate raw parameters and [`construct`].
pub fn construct_with(
    family: Family,
    n: u32,
    m: Option<u32>,
    k: Option<u32>,
) -> LabelingResult<Labeling> {
    let params = StarParams::new(family, n, m, k)?;
    construct(&params)
}
