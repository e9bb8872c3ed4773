//! Content digest of a labeling.

use sha2::{Digest, Sha256};

use crate::types::{EdgeEntry, LabelEntry};

/// Hex SHA-256 over the label and weight mappings.
///
/// Timestamps and timings are left out, so two constructions with the same
/// parameters always produce the same digest.
pub fn compute_digest(labels: &[LabelEntry], edges: &[EdgeEntry]) -> String {
    let mut hasher = Sha256::new();

    for entry in labels {
        hasher.update(entry.vertex.to_le_bytes());
        hasher.update(entry.label.to_le_bytes());
    }
    hasher.update(b"|");
    for entry in edges {
        hasher.update(entry.u.to_le_bytes());
        hasher.update(entry.v.to_le_bytes());
        hasher.update(entry.weight.to_le_bytes());
    }

    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(vertex: u32, label: u32) -> LabelEntry {
        LabelEntry {
            vertex,
            role: String::new(),
            label,
        }
    }

    #[test]
    fn digest_stability() {
        let labels = vec![label(0, 1), label(1, 1)];
        let edges = vec![EdgeEntry { u: 0, v: 1, weight: 2 }];
        assert_eq!(
            compute_digest(&labels, &edges),
            compute_digest(&labels, &edges)
        );
        assert_eq!(compute_digest(&labels, &edges).len(), 64);
    }

    #[test]
    fn digest_differs_for_different_labels() {
        let edges = vec![EdgeEntry { u: 0, v: 1, weight: 2 }];
        let a = compute_digest(&[label(0, 1), label(1, 1)], &edges);
        let b = compute_digest(&[label(0, 1), label(1, 2)], &edges);
        assert_ne!(a, b);
    }
}
