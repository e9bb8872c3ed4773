//! Report data types.

use serde::{Deserialize, Serialize};
use sl_core::Family;
use sl_graph::Role;
use sl_labeling::{Labeling, verify};

use crate::hash::compute_digest;

/// Everything a reader needs to check a labeling by hand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Report {
    /// SHA-256 over the label and weight mappings; equal for equal inputs.
    pub digest: String,
    pub timestamp: String,
    pub family: Family,
    pub n: u32,
    pub m: u32,
    pub k: u32,
    /// Branch step `k / (n - 1)`, reported for the greedy scheme only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    pub scheme: String,
    pub rule: String,
    pub order: usize,
    pub size: usize,
    pub labels: Vec<LabelEntry>,
    pub edges: Vec<EdgeEntry>,
    pub complexity: ComplexitySummary,
    pub verification: VerificationSummary,
    #[serde(default)]
    pub collisions: Vec<CollisionEntry>,
    /// Weights still unused in the greedy pool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_pool: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elapsed_s: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LabelEntry {
    pub vertex: u32,
    pub role: String,
    pub label: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EdgeEntry {
    pub u: u32,
    pub v: u32,
    pub weight: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComplexitySummary {
    pub vertices: u64,
    pub edges: u64,
    pub bound: u64,
    pub linear: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerificationSummary {
    pub weights_unique: bool,
    pub distinct_weights: usize,
    pub labels_positive: bool,
    pub labels_within_k: bool,
    pub weights_consistent: bool,
    pub max_label: u32,
    pub max_weight: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollisionEntry {
    pub weight: u32,
    pub first: [u32; 2],
    pub second: [u32; 2],
}

pub fn role_name(role: Role) -> String {
    match role {
        Role::Center => "center".to_string(),
        Role::Branch { index } => format!("branch {index}"),
        Role::Leaf { branch, slot } => format!("leaf {branch}.{slot}"),
    }
}

impl Report {
    /// Snapshot a labeling; `elapsed_s` is the measured construction time.
    pub fn from_labeling(labeling: &Labeling, elapsed_s: Option<f64>) -> Self {
        let params = labeling.params();
        let graph = labeling.graph();

        let labels: Vec<LabelEntry> = graph
            .vertices()
            .iter()
            .filter_map(|v| {
                labeling.label(v.id).map(|label| LabelEntry {
                    vertex: v.id.index(),
                    role: role_name(v.role),
                    label,
                })
            })
            .collect();
        let edges: Vec<EdgeEntry> = labeling
            .edge_weights()
            .map(|(edge, weight)| EdgeEntry {
                u: edge.lo().index(),
                v: edge.hi().index(),
                weight,
            })
            .collect();

        let complexity = labeling.complexity();
        let check = verify(labeling);
        let step = (params.family() == Family::Amalgamated)
            .then(|| f64::from(params.k()) / f64::from(params.n() - 1));

        Self {
            digest: compute_digest(&labels, &edges),
            timestamp: chrono::Utc::now().to_rfc3339(),
            family: params.family(),
            n: params.n(),
            m: params.m(),
            k: params.k(),
            step,
            scheme: labeling.scheme().to_string(),
            rule: labeling.rule().name().to_string(),
            order: graph.order(),
            size: graph.size(),
            labels,
            edges,
            complexity: ComplexitySummary {
                vertices: complexity.vertices,
                edges: complexity.edges,
                bound: complexity.bound,
                linear: complexity.linear(),
            },
            verification: VerificationSummary {
                weights_unique: check.weights_unique,
                distinct_weights: check.distinct_weights,
                labels_positive: check.labels_positive,
                labels_within_k: check.labels_within_k,
                weights_consistent: check.weights_consistent,
                max_label: check.max_label,
                max_weight: check.max_weight,
            },
            collisions: labeling
                .collisions()
                .iter()
                .map(|c| CollisionEntry {
                    weight: c.weight,
                    first: [c.first.lo().index(), c.first.hi().index()],
                    second: [c.second.lo().index(), c.second.hi().index()],
                })
                .collect(),
            remaining_pool: labeling
                .remaining_pool()
                .map(|pool| pool.iter().collect()),
            elapsed_s,
        }
    }
}
