use std::collections::HashMap;
use std::f32::consts::TAU;

use eframe::egui::{Pos2, Vec2, pos2, vec2};

use crate::config::LayoutConfig;
use crate::graph::Graph;

pub type NodePositions = HashMap<String, Pos2>;

fn ring_offset(index: usize, count: usize, radius: f32) -> Vec2 {
    let angle = TAU * index as f32 / count as f32;
    vec2(angle.cos(), angle.sin()) * radius
}

// Categories sit on an outer ring and members on a small ring around their
// category center. No overlap avoidance; crowded canvases can overlap.
pub fn radial_layout(
    graph: &Graph,
    canvas_width: f32,
    canvas_height: f32,
    config: &LayoutConfig,
) -> NodePositions {
    let center = pos2(canvas_width / 2.0, canvas_height / 2.0);
    let categories = graph.categories();
    let mut positions = HashMap::with_capacity(graph.len());

    for (category_index, category) in categories.iter().enumerate() {
        let category_center = center
            + ring_offset(category_index, categories.len(), config.category_radius);

        let members = graph.members(category);
        for (member_index, node) in members.iter().enumerate() {
            let offset = ring_offset(member_index, members.len(), config.member_radius);
            positions.insert(node.id.clone(), category_center + offset);
        }
    }

    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{NodeDeclaration, build};

    fn graph(declarations: &[(&str, &str)]) -> Graph {
        let declarations = declarations
            .iter()
            .map(|(id, category)| NodeDeclaration::new(*id, *category, 50.0, &[]))
            .collect::<Vec<_>>();
        build(&declarations).graph
    }

    fn close(a: Pos2, b: Pos2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn layout_is_bit_identical_across_runs() {
        let graph = graph(&[("a", "x"), ("b", "y"), ("c", "x"), ("d", "z")]);
        let config = LayoutConfig::default();

        let first = radial_layout(&graph, 800.0, 600.0, &config);
        let second = radial_layout(&graph, 800.0, 600.0, &config);
        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
    }

    #[test]
    fn members_sit_on_rings_around_category_centers() {
        let graph = graph(&[("a", "x"), ("b", "x"), ("c", "y")]);
        let positions = radial_layout(&graph, 800.0, 600.0, &LayoutConfig::default());

        // category x: angle 0 → center (600, 300); members at 0 and π.
        assert!(close(positions["a"], pos2(660.0, 300.0)));
        assert!(close(positions["b"], pos2(540.0, 300.0)));
        // category y: angle π → center (200, 300); single member at angle 0.
        assert!(close(positions["c"], pos2(260.0, 300.0)));
    }

    #[test]
    fn category_order_follows_declarations_not_alphabet() {
        let graph = graph(&[("first", "zeta"), ("second", "alpha")]);
        let positions = radial_layout(&graph, 800.0, 600.0, &LayoutConfig::default());

        assert!(positions["first"].x > 400.0);
        assert!(positions["second"].x < 400.0);
    }

    #[test]
    fn empty_graph_has_no_positions() {
        let positions = radial_layout(&Graph::default(), 800.0, 600.0, &LayoutConfig::default());
        assert!(positions.is_empty());
    }
}
