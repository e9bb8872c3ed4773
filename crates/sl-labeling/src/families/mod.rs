//! Family-specific labeling schemes.

mod amalgamated;
mod amalgamated_three;
mod snowflake;

use sl_core::{Family, StarParams};
use sl_graph::StarGraph;

use crate::error::LabelingResult;
use crate::resolver::{EdgeWeightResolver, WeightRule};

pub use amalgamated::GreedyPoolScheme;
pub use amalgamated_three::ClosedFormScheme;
pub use snowflake::SnowflakeScheme;

/// A deterministic labeling scheme for one graph family.
///
/// `run` receives the freshly built topology and a resolver set up by
/// [`LabelingScheme::resolver`]; on success every vertex carries a label and
/// every edge a weight.
pub trait LabelingScheme {
    /// Scheme name for logs and reports.
    fn name(&self) -> &'static str;

    /// How edge weights are derived from labels.
    fn rule(&self) -> WeightRule;

    /// Resolver the scheme expects, configured for `params`.
    fn resolver(&self, params: &StarParams) -> EdgeWeightResolver {
        EdgeWeightResolver::new(self.rule(), params.k())
    }

    /// Label every vertex and weigh every edge.
    fn run(
        &self,
        params: &StarParams,
        graph: &mut StarGraph,
        resolver: &mut EdgeWeightResolver,
    ) -> LabelingResult<()>;
}

/// The scheme that labels `family`.
pub fn scheme_for(family: Family) -> &'static dyn LabelingScheme {
    match family {
        Family::AmalgamatedThree => &ClosedFormScheme,
        Family::Amalgamated => &GreedyPoolScheme,
        Family::Snowflake => &SnowflakeScheme,
    }
}
