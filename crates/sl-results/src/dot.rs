//! Graphviz export through petgraph.

use petgraph::dot::{Config, Dot};
use petgraph::graph::{NodeIndex, UnGraph};
use sl_core::{Label, StarParams, Weight};
use sl_labeling::Labeling;

/// Diagrams above this many leaves are skipped unless forced.
pub const MAX_RENDERED_LEAVES: u32 = 100;

/// Whether a diagram for `params` is small enough to be readable.
pub fn should_render(params: &StarParams, force: bool) -> bool {
    force || params.n().saturating_mul(params.leaves_per_branch()) <= MAX_RENDERED_LEAVES
}

/// Copy a labeling into a petgraph graph: node weights are vertex labels,
/// edge weights are edge weights. Node indices match vertex indices.
pub fn to_petgraph(labeling: &Labeling) -> UnGraph<Label, Weight> {
    let graph = labeling.graph();
    let mut out = UnGraph::with_capacity(graph.order(), graph.size());
    for vertex in graph.vertices() {
        out.add_node(labeling.label(vertex.id).unwrap_or(0));
    }
    for (edge, weight) in labeling.edge_weights() {
        out.add_edge(
            NodeIndex::new(edge.lo().slot()),
            NodeIndex::new(edge.hi().slot()),
            weight,
        );
    }
    out
}

/// Render the labeling as a DOT document titled with the family name.
pub fn render_dot(labeling: &Labeling) -> String {
    let graph = to_petgraph(labeling);
    let body = Dot::with_config(&graph, &[Config::GraphContentOnly]);
    format!("graph \"{}\" {{\n{body}}}\n", labeling.params().family())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sl_labeling::construct;

    #[test]
    fn petgraph_copy_matches_labeling() {
        let labeling = construct(&StarParams::amalgamated(3, 2).unwrap()).unwrap();
        let graph = to_petgraph(&labeling);

        assert_eq!(graph.node_count(), 7);
        assert_eq!(graph.edge_count(), 6);
        assert_eq!(graph[NodeIndex::new(3)], 4);
        let edge = graph
            .find_edge(NodeIndex::new(0), NodeIndex::new(3))
            .unwrap();
        assert_eq!(graph[edge], 5);
    }

    #[test]
    fn dot_document_is_undirected() {
        let labeling = construct(&StarParams::amalgamated_three(2).unwrap()).unwrap();
        let dot = render_dot(&labeling);

        assert!(dot.starts_with("graph \"s_n_3\" {"));
        assert!(dot.contains(" -- "));
        assert!(dot.trim_end().ends_with('}'));
    }

    #[test]
    fn large_diagrams_need_force() {
        let small = StarParams::amalgamated(10, 5).unwrap();
        let large = StarParams::amalgamated(30, 5).unwrap();
        assert!(should_render(&small, false));
        assert!(!should_render(&large, false));
        assert!(should_render(&large, true));
    }
}
