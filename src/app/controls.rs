use eframe::egui::{self, Color32, RichText, Ui};

use techgraph::theme::{StyleTokens, TokenName};
use techgraph::{Graph, HighlightState, Scene};

use super::render_utils::category_color;
use super::{TechGraphApp, ViewTab};

fn category_label(category: &str) -> String {
    match category {
        "ml" => "ML/AI".to_owned(),
        _ => {
            let mut chars = category.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

fn category_legend(graph: &Graph, tokens: &StyleTokens) -> Vec<(String, Color32)> {
    graph
        .categories()
        .into_iter()
        .map(|category| (category_label(category), category_color(category, tokens)))
        .collect()
}

fn selection_hint(scene: &Scene) -> String {
    if let HighlightState::Pinned(id) = scene.highlight().state()
        && let Some(node) = scene.graph().node(id)
    {
        format!("Click again to deselect • {:.0}% proficiency", node.weight)
    } else {
        "Click any technology to see connections • Glow intensity = proficiency level".to_owned()
    }
}

impl TechGraphApp {
    pub(super) fn draw_controls(&mut self, ui: &mut Ui) {
        let primary = self.tokens.get(TokenName::Primary);
        let mark = egui::Button::new(RichText::new("◆ techgraph").heading().color(primary))
            .frame(false);
        if ui.add(mark).clicked() {
            self.hooks.trigger_identity_mark();
        }
        if self.identity_clicks.get() > 0 {
            ui.small(format!("logo clicks: {}", self.identity_clicks.get()));
        }
        ui.separator();

        ui.label(RichText::new("View").strong());
        let mut tab = self.tab;
        ui.horizontal(|ui| {
            ui.selectable_value(&mut tab, ViewTab::TechStack, "Tech stack");
            ui.selectable_value(&mut tab, ViewTab::Network, "Network");
        });
        self.switch_tab(tab);
        ui.separator();

        self.draw_theme_picker(ui);
        ui.separator();

        self.draw_stats(ui);
    }

    fn draw_theme_picker(&mut self, ui: &mut Ui) {
        ui.label(RichText::new("Theme").strong());

        let active = self.theme.active_name();
        let mut requested = None;
        for preset in self.theme.registry().presets() {
            let label = RichText::new(preset.display_name).color(preset.colors.primary);
            if ui.selectable_label(preset.name == active, label).clicked() {
                requested = Some(preset.name);
            }
        }
        if let Some(name) = requested {
            self.theme.select(name);
        }

        let current = self.theme.current();
        ui.add_space(4.0);
        ui.label(current.description);
        ui.small(format!(
            "particles: {} · {} · speed {:.1}",
            current.particles.count,
            current.particles.pattern.label(),
            current.particles.speed
        ));

        ui.horizontal(|ui| {
            for name in TokenName::ALL {
                let color = self.tokens.get(name);
                ui.label(RichText::new("●").color(color))
                    .on_hover_text(name.as_str());
            }
        });
    }

    fn draw_stats(&self, ui: &mut Ui) {
        let graph = self.scene.graph();
        ui.label(RichText::new("Graph").strong());
        if self.tab == ViewTab::TechStack {
            ui.horizontal_wrapped(|ui| {
                for (label, color) in category_legend(graph, &self.tokens.snapshot()) {
                    ui.label(RichText::new("●").color(color));
                    ui.label(label);
                }
            });
            ui.small(selection_hint(&self.scene));
            ui.add_space(4.0);
        }
        ui.label(format!("nodes: {}", graph.len()));
        ui.label(format!("edges: {}", graph.edge_count()));
        ui.label(format!("categories: {}", graph.categories().len()));
        if self.build_issues > 0 {
            ui.label(format!("data issues dropped: {}", self.build_issues));
        }
        ui.label(format!("particles: {}", self.scene.particles().len()));

        let highlight = match self.scene.highlight().state() {
            HighlightState::Idle => "none".to_owned(),
            HighlightState::Hovering(id) => format!("hovering {id}"),
            HighlightState::Pinned(id) => format!("pinned {id}"),
        };
        ui.label(format!("highlight: {highlight}"));

        if let Some(query) = &self.last_navigation {
            ui.separator();
            ui.label(format!("last navigation: ?{query}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use techgraph::graph::build;
    use techgraph::{EngineConfig, NodeDeclaration};

    use super::*;

    fn scene() -> Scene {
        let graph = build(&[
            NodeDeclaration::new("PyTorch", "ml", 95.0, &["Python"]),
            NodeDeclaration::new("Python", "language", 98.0, &[]),
            NodeDeclaration::new("Git", "tool", 95.0, &[]),
        ])
        .graph;
        let mut scene = Scene::new(graph, &EngineConfig::default());
        scene.mount();
        scene
    }

    #[test]
    fn legend_follows_declared_categories() {
        let scene = scene();
        let tokens = StyleTokens {
            primary: Color32::WHITE,
            domain_a: Color32::RED,
            domain_b: Color32::GREEN,
            domain_c: Color32::BLUE,
        };

        let legend = category_legend(scene.graph(), &tokens);
        let labels = legend.iter().map(|(label, _)| label.as_str()).collect::<Vec<_>>();
        assert_eq!(labels, ["ML/AI", "Language", "Tool"]);
        assert_eq!(legend[0].1, Color32::BLUE);
        assert_eq!(legend[1].1, Color32::GREEN);
    }

    #[test]
    fn hint_reports_pinned_weight() {
        let mut scene = scene();
        assert!(selection_hint(&scene).starts_with("Click any technology"));

        scene.pointer_enter("Python");
        assert!(selection_hint(&scene).starts_with("Click any technology"));

        scene.click("Python");
        assert_eq!(
            selection_hint(&scene),
            "Click again to deselect • 98% proficiency"
        );

        scene.click("Python");
        assert!(selection_hint(&scene).starts_with("Click any technology"));
    }
}
