//! Independent check of a finished labeling.

use std::collections::HashSet;

use sl_core::{Label, Weight};

use crate::labeling::Labeling;

/// Outcome of [`verify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verification {
    pub edges: usize,
    pub distinct_weights: usize,
    pub weights_unique: bool,
    pub labels_positive: bool,
    /// Every label lies in `[1, k]`.
    pub labels_within_k: bool,
    /// Every edge weight is what the rule gives for its endpoint labels.
    pub weights_consistent: bool,
    pub max_label: Label,
    pub max_weight: Weight,
}

impl Verification {
    /// Distinct weights, positive labels within `k`, consistent weights.
    pub fn is_valid_k_labeling(&self) -> bool {
        self.weights_unique && self.labels_positive && self.labels_within_k && self.weights_consistent
    }
}

/// Recompute every property from the label and weight mappings alone.
pub fn verify(labeling: &Labeling) -> Verification {
    let graph = labeling.graph();
    let rule = labeling.rule();
    let k = labeling.k();

    let mut seen = HashSet::with_capacity(graph.size());
    let mut weights_consistent = true;
    let mut edges = 0;
    for (edge, weight) in labeling.edge_weights() {
        edges += 1;
        seen.insert(weight);
        let (u, v) = edge.endpoints();
        let expected = labeling
            .label(u)
            .zip(labeling.label(v))
            .map(|(a, b)| rule.apply(a, b));
        weights_consistent &= expected == Some(weight);
    }
    weights_consistent &= edges == graph.size();

    let labels: Vec<Label> = graph.labels().map(|(_, l)| l.unwrap_or(0)).collect();

    Verification {
        edges,
        distinct_weights: seen.len(),
        weights_unique: seen.len() == edges,
        labels_positive: labels.iter().all(|&l| l >= 1),
        labels_within_k: labels.iter().all(|&l| (1..=k).contains(&l)),
        weights_consistent,
        max_label: labels.iter().copied().max().unwrap_or(0),
        max_weight: labeling.max_weight(),
    }
}
