//! Edge-weight resolution.
//!
//! The resolver turns endpoint labels into edge weights, keeps the registry of
//! consumed weights and, for the greedy scheme, the pool of unused ones.

use sl_core::{Label, VertexId, Weight};
use sl_graph::{EdgeKey, GraphError, StarGraph};
use tracing::trace;

use crate::error::{LabelingError, LabelingResult};
use crate::pool::WeightPool;
use crate::registry::{WeightCollision, WeightRegistry};

/// How an edge weight is derived from its endpoint labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightRule {
    /// `w(uv) = l(u) + l(v)`
    Sum,
    /// `w(uv) = max(l(u), l(v))`
    Max,
}

impl WeightRule {
    pub fn apply(self, a: Label, b: Label) -> Weight {
        match self {
            WeightRule::Sum => a.saturating_add(b),
            WeightRule::Max => a.max(b),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WeightRule::Sum => "sum",
            WeightRule::Max => "max",
        }
    }
}

#[derive(Debug, Clone)]
pub struct EdgeWeightResolver {
    rule: WeightRule,
    k: u32,
    registry: WeightRegistry,
    pool: Option<WeightPool>,
}

impl EdgeWeightResolver {
    /// Resolver that only tracks consumed weights.
    pub fn new(rule: WeightRule, k: u32) -> Self {
        Self {
            rule,
            k,
            registry: WeightRegistry::new(),
            pool: None,
        }
    }

    /// Resolver that also draws from, and removes from, an explicit pool.
    pub fn with_pool(rule: WeightRule, k: u32, pool: WeightPool) -> Self {
        Self {
            pool: Some(pool),
            ..Self::new(rule, k)
        }
    }

    pub fn rule(&self) -> WeightRule {
        self.rule
    }

    pub fn registry(&self) -> &WeightRegistry {
        &self.registry
    }

    pub fn pool(&self) -> Option<&WeightPool> {
        self.pool.as_ref()
    }

    /// Weight of `{u, v}` under the rule, from the labels already assigned.
    pub fn weigh(&self, graph: &StarGraph, u: VertexId, v: VertexId) -> LabelingResult<Weight> {
        let lu = graph.label(u).ok_or(GraphError::MissingLabel { vertex: u })?;
        let lv = graph.label(v).ok_or(GraphError::MissingLabel { vertex: v })?;
        Ok(self.rule.apply(lu, lv))
    }

    /// Smallest unused weight, reserved for `{u, v}` but not yet committed.
    pub fn next_free_weight(&self, u: VertexId, v: VertexId) -> LabelingResult<Weight> {
        let edge = EdgeKey::new(u, v);
        self.pool
            .as_ref()
            .and_then(WeightPool::min)
            .ok_or(LabelingError::PoolExhausted { edge, k: self.k })
    }

    /// Commit `weight` to the edge `{u, v}`.
    ///
    /// With a pool the weight must still be in it; either way it must not be
    /// registered yet. On success the weight is recorded on the graph.
    pub fn commit(
        &mut self,
        graph: &mut StarGraph,
        u: VertexId,
        v: VertexId,
        weight: Weight,
    ) -> LabelingResult<()> {
        let edge = EdgeKey::new(u, v);
        if let Some(pool) = self.pool.as_mut()
            && !pool.take(weight)
        {
            return Err(LabelingError::WeightUnavailable {
                edge,
                weight,
                k: self.k,
            });
        }
        self.registry.commit(edge, weight)?;
        graph.set_weight(u, v, weight)?;
        trace!(%edge, weight, "weight committed");
        Ok(())
    }

    /// Record `weight` on `{u, v}` even if another edge already carries it.
    pub fn record(
        &mut self,
        graph: &mut StarGraph,
        u: VertexId,
        v: VertexId,
        weight: Weight,
    ) -> LabelingResult<Option<WeightCollision>> {
        graph.set_weight(u, v, weight)?;
        Ok(self.registry.record(EdgeKey::new(u, v), weight))
    }

    /// Weigh and commit every edge in insertion order, failing on the first
    /// repeated weight.
    pub fn resolve_strict(&mut self, graph: &mut StarGraph) -> LabelingResult<()> {
        for i in 0..graph.size() {
            let (u, v) = graph.edges()[i].endpoints();
            let weight = self.weigh(graph, u, v)?;
            self.commit(graph, u, v, weight)?;
        }
        Ok(())
    }

    /// Weigh and record every edge in insertion order, collecting repeats.
    pub fn resolve_lenient(&mut self, graph: &mut StarGraph) -> LabelingResult<()> {
        for i in 0..graph.size() {
            let (u, v) = graph.edges()[i].endpoints();
            let weight = self.weigh(graph, u, v)?;
            self.record(graph, u, v, weight)?;
        }
        Ok(())
    }

    pub fn into_parts(self) -> (WeightRegistry, Option<WeightPool>) {
        (self.registry, self.pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sl_core::StarParams;
    use sl_graph::build_topology;

    fn id(i: u32) -> VertexId {
        VertexId::from_index(i)
    }

    fn labeled_path() -> StarGraph {
        // center 0, branches 1 and 2, no leaves
        let params = StarParams::amalgamated(2, 1).unwrap();
        let mut graph = build_topology(&params).unwrap();
        graph.set_label(id(0), 1).unwrap();
        graph.set_label(id(1), 1).unwrap();
        graph.set_label(id(2), 3).unwrap();
        graph
    }

    #[test]
    fn rules() {
        assert_eq!(WeightRule::Sum.apply(3, 4), 7);
        assert_eq!(WeightRule::Max.apply(3, 4), 4);
        assert_eq!(WeightRule::Sum.apply(u32::MAX, 1), u32::MAX);
    }

    #[test]
    fn strict_resolution_weighs_every_edge() {
        let mut graph = labeled_path();
        let mut resolver = EdgeWeightResolver::new(WeightRule::Sum, 3);
        resolver.resolve_strict(&mut graph).unwrap();
        assert_eq!(graph.weight(id(0), id(1)), Some(2));
        assert_eq!(graph.weight(id(2), id(0)), Some(4));
        assert_eq!(resolver.registry().len(), 2);
    }

    #[test]
    fn strict_resolution_fails_on_repeat() {
        let mut graph = labeled_path();
        graph.set_label(id(2), 1).unwrap();
        let mut resolver = EdgeWeightResolver::new(WeightRule::Sum, 3);
        let err = resolver.resolve_strict(&mut graph).unwrap_err();
        assert!(matches!(err, LabelingError::WeightCollision { weight: 2, .. }));
    }

    #[test]
    fn lenient_resolution_collects_repeats() {
        let mut graph = labeled_path();
        graph.set_label(id(2), 1).unwrap();
        let mut resolver = EdgeWeightResolver::new(WeightRule::Max, 3);
        resolver.resolve_lenient(&mut graph).unwrap();
        assert_eq!(graph.weight(id(0), id(2)), Some(1));
        assert_eq!(resolver.registry().collisions().len(), 1);
    }

    #[test]
    fn pool_commit_requires_availability() {
        let mut graph = labeled_path();
        let mut resolver =
            EdgeWeightResolver::with_pool(WeightRule::Sum, 2, WeightPool::for_sum_labels(2));
        resolver.commit(&mut graph, id(0), id(1), 2).unwrap();
        assert_eq!(resolver.pool().map(WeightPool::len), Some(2));
        assert_eq!(resolver.next_free_weight(id(0), id(2)), Ok(3));

        let err = resolver.commit(&mut graph, id(0), id(2), 2).unwrap_err();
        assert!(matches!(err, LabelingError::WeightUnavailable { weight: 2, .. }));
        // a rejected commit leaves the graph untouched
        assert_eq!(graph.weight(id(0), id(2)), None);
    }

    #[test]
    fn missing_label_is_reported() {
        let params = StarParams::amalgamated(2, 1).unwrap();
        let graph = build_topology(&params).unwrap();
        let resolver = EdgeWeightResolver::new(WeightRule::Sum, 2);
        assert_eq!(
            resolver.weigh(&graph, id(0), id(1)),
            Err(LabelingError::Graph(GraphError::MissingLabel { vertex: id(0) }))
        );
    }
}
