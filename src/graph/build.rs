use std::collections::{HashMap, HashSet};

use thiserror::Error;
use tracing::warn;

use super::model::{Graph, GraphNode, MAX_WEIGHT, MIN_WEIGHT, NodeDeclaration};

/// Data-quality problems found while building a graph. None of them are
/// fatal: the offending part of the declaration is dropped or repaired.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum BuildIssue {
    #[error("duplicate node id `{id}`; keeping the first declaration")]
    DuplicateId { id: String },

    #[error("node `{node}` lists unknown neighbor `{neighbor}`")]
    DanglingNeighbor { node: String, neighbor: String },

    #[error("node `{node}` lists itself as a neighbor")]
    SelfReference { node: String },

    #[error("node `{node}` declared weight {declared}, clamped to {clamped}")]
    WeightClamped {
        node: String,
        declared: f64,
        clamped: f32,
    },
}

#[derive(Clone, Debug)]
pub struct BuildOutcome {
    pub graph: Graph,
    pub issues: Vec<BuildIssue>,
}

impl BuildOutcome {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

fn clamp_weight(declared: f64) -> f32 {
    if declared.is_finite() {
        (declared as f32).clamp(MIN_WEIGHT, MAX_WEIGHT)
    } else {
        MIN_WEIGHT
    }
}

pub fn build(declarations: &[NodeDeclaration]) -> BuildOutcome {
    let mut issues = Vec::new();
    let mut nodes = Vec::with_capacity(declarations.len());
    let mut index_by_id = HashMap::with_capacity(declarations.len());

    for declaration in declarations {
        if index_by_id.contains_key(&declaration.id) {
            issues.push(BuildIssue::DuplicateId {
                id: declaration.id.clone(),
            });
            continue;
        }

        let weight = clamp_weight(declaration.weight);
        let in_range = declaration.weight.is_finite()
            && (f64::from(MIN_WEIGHT)..=f64::from(MAX_WEIGHT)).contains(&declaration.weight);
        if !in_range {
            issues.push(BuildIssue::WeightClamped {
                node: declaration.id.clone(),
                declared: declaration.weight,
                clamped: weight,
            });
        }

        index_by_id.insert(declaration.id.clone(), nodes.len());
        nodes.push(GraphNode {
            id: declaration.id.clone(),
            category: declaration.category.clone(),
            weight,
            neighbors: declaration.neighbors.clone(),
        });
    }

    let known_ids = nodes
        .iter()
        .map(|node| node.id.clone())
        .collect::<HashSet<_>>();

    for node in &mut nodes {
        let mut seen = HashSet::new();
        let mut neighbors = Vec::with_capacity(node.neighbors.len());

        for neighbor in node.neighbors.drain(..) {
            if neighbor == node.id {
                issues.push(BuildIssue::SelfReference {
                    node: node.id.clone(),
                });
                continue;
            }
            if !known_ids.contains(&neighbor) {
                issues.push(BuildIssue::DanglingNeighbor {
                    node: node.id.clone(),
                    neighbor,
                });
                continue;
            }
            if seen.insert(neighbor.clone()) {
                neighbors.push(neighbor);
            }
        }

        node.neighbors = neighbors;
    }

    for issue in &issues {
        warn!(%issue, "graph data-quality issue");
    }

    BuildOutcome {
        graph: Graph { nodes, index_by_id },
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decl(id: &str, category: &str, weight: f64, neighbors: &[&str]) -> NodeDeclaration {
        NodeDeclaration::new(id, category, weight, neighbors)
    }

    #[test]
    fn duplicate_ids_keep_the_first_declaration() {
        let outcome = build(&[
            decl("Python", "language", 98.0, &[]),
            decl("Python", "ml", 10.0, &[]),
        ]);

        assert_eq!(outcome.graph.len(), 1);
        assert_eq!(outcome.graph.category_of("Python"), Some("language"));
        assert_eq!(
            outcome.issues,
            vec![BuildIssue::DuplicateId {
                id: "Python".to_owned()
            }]
        );
    }

    #[test]
    fn dangling_neighbors_are_dropped_and_reported() {
        let outcome = build(&[
            decl("Git", "tool", 95.0, &["Python", "JavaScript"]),
            decl("Python", "language", 98.0, &[]),
        ]);

        let git = outcome.graph.node("Git").expect("Git is declared");
        assert_eq!(git.neighbors, vec!["Python".to_owned()]);
        assert!(outcome.issues.contains(&BuildIssue::DanglingNeighbor {
            node: "Git".to_owned(),
            neighbor: "JavaScript".to_owned(),
        }));
    }

    #[test]
    fn weights_are_clamped_into_range() {
        let outcome = build(&[
            decl("a", "x", 140.0, &[]),
            decl("b", "x", -3.5, &[]),
            decl("c", "x", f64::NAN, &[]),
            decl("d", "x", 42.0, &[]),
        ]);

        let weights = outcome
            .graph
            .nodes()
            .iter()
            .map(|node| node.weight)
            .collect::<Vec<_>>();
        assert_eq!(weights, vec![100.0, 0.0, 0.0, 42.0]);
        assert_eq!(outcome.issues.len(), 3);
    }

    #[test]
    fn repeated_and_self_neighbors_collapse() {
        let outcome = build(&[
            decl("a", "x", 1.0, &["b", "a", "b"]),
            decl("b", "x", 1.0, &[]),
        ]);

        assert_eq!(
            outcome.graph.node("a").map(|node| node.neighbors.clone()),
            Some(vec!["b".to_owned()])
        );
        assert_eq!(
            outcome.issues,
            vec![BuildIssue::SelfReference {
                node: "a".to_owned()
            }]
        );
    }

    #[test]
    fn adjacency_stays_directed() {
        let outcome = build(&[decl("A", "x", 1.0, &["B"]), decl("B", "x", 1.0, &[])]);

        assert!(outcome.is_clean());
        assert_eq!(outcome.graph.edges(), vec![(0, 1)]);
        assert!(
            outcome
                .graph
                .node("B")
                .is_some_and(|node| node.neighbors.is_empty())
        );
    }

    #[test]
    fn categories_follow_first_seen_order() {
        let outcome = build(&[
            decl("z", "zeta", 1.0, &[]),
            decl("a", "alpha", 1.0, &[]),
            decl("y", "zeta", 1.0, &[]),
        ]);

        assert_eq!(outcome.graph.categories(), vec!["zeta", "alpha"]);
        assert_eq!(outcome.graph.members("zeta").len(), 2);
    }
}
