use eframe::egui::Pos2;
use tracing::debug;

use crate::config::EngineConfig;
use crate::graph::Graph;
use crate::highlight::HighlightMachine;
use crate::layout::{NodePositions, radial_layout};
use crate::particles::{Particle, ParticleGenerator};
use crate::theme::ThemePreset;

// Unmounting discards the live particles, the spawn cadence and any
// highlight; ticks and pointer events while unmounted do nothing.
pub struct Scene {
    graph: Graph,
    positions: NodePositions,
    highlight: HighlightMachine,
    particles: ParticleGenerator,
    mounted: bool,
}

impl Scene {
    pub fn new(graph: Graph, config: &EngineConfig) -> Self {
        let positions = radial_layout(
            &graph,
            config.canvas.width,
            config.canvas.height,
            &config.layout,
        );

        Self {
            graph,
            positions,
            highlight: HighlightMachine::new(),
            particles: ParticleGenerator::new(config.particle_seed),
            mounted: false,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn positions(&self) -> &NodePositions {
        &self.positions
    }

    pub fn position(&self, id: &str) -> Option<Pos2> {
        self.positions.get(id).copied()
    }

    pub fn highlight(&self) -> &HighlightMachine {
        &self.highlight
    }

    pub fn particles(&self) -> &[Particle] {
        self.particles.particles()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn mount(&mut self) {
        if !self.mounted {
            debug!(nodes = self.graph.len(), "scene mounted");
            self.mounted = true;
        }
    }

    pub fn unmount(&mut self) {
        if self.mounted {
            debug!("scene unmounted");
        }
        self.mounted = false;
        self.particles.clear();
        self.highlight.reset();
    }

    pub fn tick(&mut self, theme: Option<&ThemePreset>, now: f64) -> &[Particle] {
        if !self.mounted {
            return self.particles.particles();
        }

        match theme {
            Some(theme) => self
                .particles
                .tick(Some(&theme.particles), &theme.colors, now),
            None => self
                .particles
                .tick(None, &ThemePreset::fallback().colors, now),
        }
    }

    pub fn pointer_enter(&mut self, id: &str) {
        if self.mounted && self.graph.contains(id) {
            self.highlight.pointer_enter(id);
        }
    }

    pub fn pointer_leave(&mut self, id: &str) {
        if self.mounted {
            self.highlight.pointer_leave(id);
        }
    }

    /// Toggles the pin on `id` and reports the clicked node's category for
    /// navigation. Unknown ids are ignored.
    pub fn click(&mut self, id: &str) -> Option<&str> {
        if !self.mounted || !self.graph.contains(id) {
            return None;
        }
        self.highlight.click(id);
        self.graph.category_of(id)
    }

    pub fn is_connection_active(&self, source: &str, target: &str) -> bool {
        self.highlight
            .is_connection_active(&self.graph, source, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{NodeDeclaration, build};
    use crate::highlight::HighlightState;
    use crate::theme::ThemeRegistry;

    fn scene() -> Scene {
        let graph = build(&[
            NodeDeclaration::new("Python", "language", 98.0, &["PyTorch"]),
            NodeDeclaration::new("PyTorch", "ml", 95.0, &[]),
        ])
        .graph;
        let config = EngineConfig {
            particle_seed: Some(9),
            ..EngineConfig::default()
        };
        Scene::new(graph, &config)
    }

    #[test]
    fn layout_is_computed_on_construction() {
        let scene = scene();
        assert_eq!(scene.positions().len(), 2);
        assert!(scene.position("Python").is_some());
    }

    #[test]
    fn unmounted_scene_spawns_nothing() {
        let registry = ThemeRegistry::builtin();
        let mut scene = scene();
        assert!(scene.tick(registry.get("cnn"), 0.0).is_empty());

        scene.mount();
        assert!(!scene.tick(registry.get("cnn"), 0.0).is_empty());
    }

    #[test]
    fn unmount_discards_particles_and_highlight() {
        let registry = ThemeRegistry::builtin();
        let mut scene = scene();
        scene.mount();
        scene.tick(registry.get("gan"), 0.0);
        scene.click("Python");

        scene.unmount();
        assert!(scene.particles().is_empty());
        assert_eq!(scene.highlight().state(), &HighlightState::Idle);
        assert!(scene.tick(registry.get("gan"), 5.0).is_empty());
    }

    #[test]
    fn click_reports_category_and_pins() {
        let mut scene = scene();
        scene.mount();

        assert_eq!(scene.click("PyTorch"), Some("ml"));
        assert_eq!(
            scene.highlight().state(),
            &HighlightState::Pinned("PyTorch".to_owned())
        );
        assert_eq!(scene.click("Rust"), None);
    }

    #[test]
    fn missing_theme_still_spawns_fallback_particles() {
        let mut scene = scene();
        scene.mount();
        let domains = ThemeRegistry::builtin().default_preset().colors.domains();

        let live = scene.tick(None, 0.0);
        assert!(!live.is_empty());
        assert!(live.iter().all(|particle| domains.contains(&particle.color)));
    }

    #[test]
    fn connection_activity_follows_declared_direction() {
        let mut scene = scene();
        scene.mount();

        scene.pointer_enter("Python");
        assert!(scene.is_connection_active("Python", "PyTorch"));
        scene.pointer_leave("Python");
        scene.pointer_enter("PyTorch");
        assert!(!scene.is_connection_active("Python", "PyTorch"));
    }
}
