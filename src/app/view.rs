use eframe::egui::{Align2, Color32, CursorIcon, FontId, Pos2, Rect, Sense, Stroke, Ui, pos2, vec2};

use techgraph::particles::FIELD_EXTENT;
use techgraph::{NavigationRequest, NodeEmphasis};

use super::TechGraphApp;
use super::render_utils::{
    CanvasTransform, blend_color, category_color, draw_background, node_radius, with_alpha,
};

const ACTIVE_SCALE: f32 = 1.3;

fn field_to_screen(rect: Rect, field: Pos2) -> Pos2 {
    pos2(
        rect.left() + (field.x / FIELD_EXTENT) * rect.width(),
        rect.top() + (field.y / FIELD_EXTENT) * rect.height(),
    )
}

impl TechGraphApp {
    fn node_under_pointer(&self, transform: CanvasTransform, pointer: Pos2) -> Option<String> {
        let graph = self.scene.graph();
        graph
            .nodes()
            .iter()
            .filter_map(|node| {
                let center = transform.to_screen(self.scene.position(&node.id)?);
                let radius = node_radius(node.weight) * transform.scale();
                let distance = center.distance(pointer);
                (distance <= radius).then_some((node.id.as_str(), distance))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id.to_owned())
    }

    fn update_graph_pointer(&mut self, hovered: Option<String>, clicked: bool) {
        if self.hovered_node != hovered {
            if let Some(previous) = self.hovered_node.take() {
                self.scene.pointer_leave(&previous);
            }
            if let Some(id) = &hovered {
                self.scene.pointer_enter(id);
            }
            self.hovered_node = hovered;
        }

        if clicked
            && let Some(id) = self.hovered_node.clone()
            && let Some(category) = self.scene.click(&id).map(str::to_owned)
        {
            self.navigate(NavigationRequest { category }.query());
        }
    }

    pub(super) fn draw_tech_graph(&mut self, ui: &mut Ui) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click());
        let painter = ui.painter_at(rect);
        let tokens = self.tokens.snapshot();
        let transform =
            CanvasTransform::fit(rect, vec2(self.canvas.width, self.canvas.height));

        let hovered = response
            .hover_pos()
            .and_then(|pointer| self.node_under_pointer(transform, pointer));
        if hovered.is_some() {
            ui.ctx().output_mut(|output| output.cursor_icon = CursorIcon::PointingHand);
        }
        self.update_graph_pointer(hovered, response.clicked());

        draw_background(&painter, rect, tokens.primary);

        let now = ui.ctx().input(|input| input.time);
        self.scene.tick(Some(self.theme.current()), now);
        for particle in self.scene.particles() {
            let opacity = particle.opacity_at(now) * 0.6;
            painter.circle_filled(
                field_to_screen(rect, particle.position_at(now)),
                2.0,
                with_alpha(particle.color, opacity),
            );
        }

        let graph = self.scene.graph();
        let highlight = self.scene.highlight();
        let scale = transform.scale();

        for (source_index, target_index) in graph.edges() {
            let (source, target) = (&graph.nodes()[source_index], &graph.nodes()[target_index]);
            let (Some(start), Some(end)) = (
                self.scene.position(&source.id),
                self.scene.position(&target.id),
            ) else {
                continue;
            };

            let stroke = if self.scene.is_connection_active(&source.id, &target.id) {
                let color = category_color(&source.category, &tokens);
                Stroke::new(2.0, with_alpha(color, 0.6))
            } else {
                Stroke::new(1.0, with_alpha(Color32::WHITE, 0.03))
            };
            painter.line_segment([transform.to_screen(start), transform.to_screen(end)], stroke);
        }

        for node in graph.nodes() {
            let Some(position) = self.scene.position(&node.id) else {
                continue;
            };
            let center = transform.to_screen(position);
            let emphasis = highlight.emphasis(graph, &node.id);
            let is_active = emphasis == NodeEmphasis::Active;
            let opacity = emphasis.opacity();
            let color = category_color(&node.category, &tokens);

            let glow = node.weight / 100.0;
            let mut radius = node_radius(node.weight) * scale;
            if is_active {
                radius *= ACTIVE_SCALE;
            }

            painter.circle_filled(
                center,
                radius * (1.0 + glow),
                with_alpha(color, glow * 0.2 * opacity),
            );
            painter.circle(
                center,
                radius,
                with_alpha(color, opacity),
                Stroke::new(
                    if is_active { 2.0 } else { 1.0 },
                    with_alpha(Color32::WHITE, opacity),
                ),
            );
            painter.circle_filled(
                center,
                radius * 0.4,
                with_alpha(blend_color(color, Color32::WHITE, 0.8), 0.6),
            );

            let label_size = if is_active { 13.0 } else { 11.0 };
            painter.text(
                center + vec2(0.0, radius + 10.0),
                Align2::CENTER_CENTER,
                &node.id,
                FontId::proportional(label_size),
                with_alpha(Color32::WHITE, if is_active { 1.0 } else { 0.8 }),
            );

            if is_active {
                painter.text(
                    center + vec2(0.0, radius + 24.0),
                    Align2::CENTER_CENTER,
                    format!("{:.0}%", node.weight),
                    FontId::proportional(10.0),
                    with_alpha(color, 0.8),
                );
            }
        }
    }
}
