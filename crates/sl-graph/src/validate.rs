//! Graph validation logic.

use std::collections::HashSet;

use sl_core::VertexId;

use crate::error::{GraphError, GraphResult};
use crate::graph::{EdgeKey, Role, Vertex};

/// Validate the allocation order: center first, then branches in increasing
/// index, then leaves grouped by their owning branch.
///
/// Returns `(branch_count, leaves_per_branch)`.
pub(crate) fn validate_layout(vertices: &[Vertex]) -> GraphResult<(u32, u32)> {
    let Some(first) = vertices.first() else {
        return Err(GraphError::AllocationOrder {
            vertex: VertexId::CENTER,
            what: "graph has no center",
        });
    };
    if first.role != Role::Center {
        return Err(GraphError::AllocationOrder {
            vertex: first.id,
            what: "first vertex must be the center",
        });
    }

    for (i, vertex) in vertices.iter().enumerate() {
        if vertex.id.slot() != i {
            return Err(GraphError::AllocationOrder {
                vertex: vertex.id,
                what: "ids must be dense and in insertion order",
            });
        }
    }

    let branch_count = vertices[1..]
        .iter()
        .take_while(|v| matches!(v.role, Role::Branch { .. }))
        .count();
    for (i, vertex) in vertices[1..=branch_count].iter().enumerate() {
        if vertex.role != (Role::Branch { index: i as u32 + 1 }) {
            return Err(GraphError::AllocationOrder {
                vertex: vertex.id,
                what: "branch indices must count up from 1",
            });
        }
    }

    let leaves = &vertices[1 + branch_count..];
    if leaves.is_empty() {
        return Ok((branch_count as u32, 0));
    }
    if branch_count == 0 || leaves.len() % branch_count != 0 {
        return Err(GraphError::AllocationOrder {
            vertex: leaves[0].id,
            what: "every branch must own the same number of leaves",
        });
    }

    let per = leaves.len() / branch_count;
    for (i, vertex) in leaves.iter().enumerate() {
        let expected = Role::Leaf {
            branch: (i / per) as u32 + 1,
            slot: (i % per) as u32 + 1,
        };
        if vertex.role != expected {
            return Err(GraphError::AllocationOrder {
                vertex: vertex.id,
                what: "leaves must be grouped by owning branch",
            });
        }
    }

    Ok((branch_count as u32, per as u32))
}

/// Validate adjacency lists against the edge list and the star roles.
pub(crate) fn validate_adjacency(
    vertices: &[Vertex],
    adjacency: &[Vec<VertexId>],
    edges: &[EdgeKey],
) -> GraphResult<()> {
    if adjacency.len() != vertices.len() {
        return Err(GraphError::InconsistentAdjacency {
            vertex: VertexId::from_index(adjacency.len().min(vertices.len()) as u32),
        });
    }

    // Each edge appears once in each endpoint's list
    let degree_sum: usize = adjacency.iter().map(Vec::len).sum();
    if degree_sum != 2 * edges.len() {
        return Err(GraphError::InconsistentAdjacency {
            vertex: VertexId::CENTER,
        });
    }
    for edge in edges {
        let (u, v) = edge.endpoints();
        if !adjacency[u.slot()].contains(&v) {
            return Err(GraphError::InconsistentAdjacency { vertex: u });
        }
        if !adjacency[v.slot()].contains(&u) {
            return Err(GraphError::InconsistentAdjacency { vertex: v });
        }
    }

    for vertex in vertices {
        let neighbors = &adjacency[vertex.id.slot()];
        let mut seen = HashSet::with_capacity(neighbors.len());
        if !neighbors.iter().all(|n| seen.insert(*n)) {
            return Err(GraphError::InconsistentAdjacency { vertex: vertex.id });
        }

        match vertex.role {
            Role::Center => {}
            Role::Branch { .. } => {
                if !neighbors.contains(&VertexId::CENTER) {
                    return Err(GraphError::AllocationOrder {
                        vertex: vertex.id,
                        what: "branch is not adjacent to the center",
                    });
                }
            }
            Role::Leaf { branch, .. } => {
                if neighbors.as_slice() != [VertexId::from_index(branch)] {
                    return Err(GraphError::AllocationOrder {
                        vertex: vertex.id,
                        what: "leaf must be adjacent to its branch only",
                    });
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertex(i: u32, role: Role) -> Vertex {
        Vertex {
            id: VertexId::from_index(i),
            role,
        }
    }

    #[test]
    fn validate_minimal_layout() {
        let vertices = vec![vertex(0, Role::Center)];
        assert_eq!(validate_layout(&vertices), Ok((0, 0)));
        assert!(validate_layout(&[]).is_err());
    }

    #[test]
    fn validate_grouped_leaves() {
        let vertices = vec![
            vertex(0, Role::Center),
            vertex(1, Role::Branch { index: 1 }),
            vertex(2, Role::Branch { index: 2 }),
            vertex(3, Role::Leaf { branch: 1, slot: 1 }),
            vertex(4, Role::Leaf { branch: 1, slot: 2 }),
            vertex(5, Role::Leaf { branch: 2, slot: 1 }),
            vertex(6, Role::Leaf { branch: 2, slot: 2 }),
        ];
        assert_eq!(validate_layout(&vertices), Ok((2, 2)));
    }

    #[test]
    fn validate_interleaved_leaves_rejected() {
        let vertices = vec![
            vertex(0, Role::Center),
            vertex(1, Role::Branch { index: 1 }),
            vertex(2, Role::Branch { index: 2 }),
            vertex(3, Role::Leaf { branch: 2, slot: 1 }),
            vertex(4, Role::Leaf { branch: 1, slot: 1 }),
        ];
        assert!(matches!(
            validate_layout(&vertices),
            Err(GraphError::AllocationOrder { .. })
        ));
    }

    #[test]
    fn validate_center_must_come_first() {
        let vertices = vec![vertex(0, Role::Branch { index: 1 })];
        assert!(validate_layout(&vertices).is_err());
    }

    #[test]
    fn validate_leaf_attached_to_wrong_branch() {
        let vertices = vec![
            vertex(0, Role::Center),
            vertex(1, Role::Branch { index: 1 }),
            vertex(2, Role::Branch { index: 2 }),
            vertex(3, Role::Leaf { branch: 1, slot: 1 }),
            vertex(4, Role::Leaf { branch: 2, slot: 1 }),
        ];
        let id = VertexId::from_index;
        let adjacency = vec![
            vec![id(1), id(2)],
            vec![id(0), id(4)],
            vec![id(0), id(3)],
            vec![id(2)],
            vec![id(1)],
        ];
        let edges = vec![
            EdgeKey::new(id(0), id(1)),
            EdgeKey::new(id(0), id(2)),
            EdgeKey::new(id(1), id(4)),
            EdgeKey::new(id(2), id(3)),
        ];
        let result = validate_adjacency(&vertices, &adjacency, &edges);
        assert!(matches!(result, Err(GraphError::AllocationOrder { .. })));
    }
}
