use std::collections::HashMap;

use serde::Deserialize;

pub const MIN_WEIGHT: f32 = 0.0;
pub const MAX_WEIGHT: f32 = 100.0;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NodeDeclaration {
    pub id: String,
    pub category: String,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub neighbors: Vec<String>,
}

impl NodeDeclaration {
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        weight: f64,
        neighbors: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            weight,
            neighbors: neighbors.iter().map(|id| (*id).to_owned()).collect(),
        }
    }
}

/// A validated node. `neighbors` keeps declaration order and only names
/// nodes that exist in the same graph; adjacency is directed.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
    pub id: String,
    pub category: String,
    pub weight: f32,
    pub neighbors: Vec<String>,
}

impl GraphNode {
    pub fn has_neighbor(&self, id: &str) -> bool {
        self.neighbors.iter().any(|neighbor| neighbor == id)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    pub(super) nodes: Vec<GraphNode>,
    pub(super) index_by_id: HashMap<String, usize>,
}

impl Graph {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.index_by_id.get(id).map(|&index| &self.nodes[index])
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index_by_id.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index_by_id.contains_key(id)
    }

    pub fn category_of(&self, id: &str) -> Option<&str> {
        self.node(id).map(|node| node.category.as_str())
    }

    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for node in &self.nodes {
            if !categories.contains(&node.category.as_str()) {
                categories.push(node.category.as_str());
            }
        }
        categories
    }

    pub fn members(&self, category: &str) -> Vec<&GraphNode> {
        self.nodes
            .iter()
            .filter(|node| node.category == category)
            .collect()
    }

    /// Declared `(source, target)` index pairs.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::new();
        for (source_index, node) in self.nodes.iter().enumerate() {
            for neighbor in &node.neighbors {
                if let Some(&target_index) = self.index_by_id.get(neighbor)
                    && source_index != target_index
                {
                    edges.push((source_index, target_index));
                }
            }
        }
        edges.sort_unstable();
        edges.dedup();
        edges
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.neighbors.len()).sum()
    }
}
