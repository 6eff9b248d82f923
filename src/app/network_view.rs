use eframe::egui::{Align2, Color32, CursorIcon, FontId, Sense, Stroke, Ui, pos2, vec2};

use techgraph::network::Tier;

use super::TechGraphApp;
use super::render_utils::{CanvasTransform, draw_background, with_alpha};

const IO_RADIUS: f32 = 24.0;
const HIDDEN_RADIUS: f32 = 14.0;
const LABEL_Y: f32 = 280.0;
// seconds for one pulse to travel a connection
const FLOW_PERIOD: f64 = 1.5;

fn neuron_radius(tier: Tier) -> f32 {
    if tier.is_interactive() {
        IO_RADIUS
    } else {
        HIDDEN_RADIUS
    }
}

impl TechGraphApp {
    pub(super) fn draw_network(&mut self, ui: &mut Ui) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click());
        let painter = ui.painter_at(rect);
        let colors = self.theme.current().colors;
        let transform = CanvasTransform::fit(rect, vec2(super::NETWORK_WIDTH, super::NETWORK_HEIGHT));
        let scale = transform.scale();

        self.network_hover = response
            .hover_pos()
            .map(|pointer| transform.to_canvas(pointer))
            .and_then(|point| self.network.hit_test(point, neuron_radius))
            .and_then(|id| self.network.hover_target(id));
        if self.network_hover.is_some() {
            ui.ctx().output_mut(|output| output.cursor_icon = CursorIcon::PointingHand);
        }

        if response.clicked()
            && let Some(request) = self
                .network_hover
                .and_then(|id| self.network.click(id))
        {
            self.navigate(request.query());
        }

        draw_background(&painter, rect, colors.primary);

        let now = ui.ctx().input(|input| input.time);
        for connection in self.network.connections(self.network_hover) {
            let (Some(from), Some(to)) = (
                self.network.neuron(connection.from),
                self.network.neuron(connection.to),
            ) else {
                continue;
            };
            let start = transform.to_screen(from.position);
            let end = transform.to_screen(to.position);
            let color = connection
                .domain
                .map_or(colors.primary, |domain| domain.color(&colors));

            let stroke = if connection.active {
                Stroke::new(2.0, with_alpha(color, 0.8))
            } else {
                Stroke::new(1.0, with_alpha(Color32::WHITE, 0.08))
            };
            painter.line_segment([start, end], stroke);

            if connection.active {
                let phase = ((now + connection.delay as f64 * 0.1) / FLOW_PERIOD).fract() as f32;
                painter.circle_filled(start + (end - start) * phase, 3.0 * scale, color);
            }
        }

        for neuron in self.network.neurons() {
            let center = transform.to_screen(neuron.position);
            let radius = neuron_radius(neuron.tier) * scale;
            let hovered = self.network_hover == Some(neuron.id);
            let color = neuron
                .domain
                .map_or(colors.secondary, |domain| domain.color(&colors));
            let fill = if hovered { 0.9 } else { 0.35 };

            if hovered {
                painter.circle_filled(center, radius * 1.5, with_alpha(color, 0.2));
            }
            painter.circle(
                center,
                radius,
                with_alpha(color, fill),
                Stroke::new(if hovered { 2.0 } else { 1.0 }, color),
            );

            if let Some(domain) = neuron.domain {
                painter.text(
                    center,
                    Align2::CENTER_CENTER,
                    &domain.label()[..1],
                    FontId::proportional(12.0 * scale),
                    Color32::WHITE,
                );
            }
        }

        for (layer_index, layer) in self.network.layers().iter().enumerate() {
            let Some(first) = self.network.layer_neurons(layer_index).first() else {
                continue;
            };
            painter.text(
                transform.to_screen(pos2(first.position.x, LABEL_Y)),
                Align2::CENTER_CENTER,
                layer.label,
                FontId::proportional(11.0 * scale.max(0.8)),
                with_alpha(Color32::WHITE, 0.6),
            );
        }

        if let Some(domain) = self
            .network_hover
            .and_then(|id| self.network.neuron(id))
            .and_then(|neuron| neuron.domain)
        {
            painter.text(
                rect.left_top() + vec2(12.0, 12.0),
                Align2::LEFT_TOP,
                format!("{}: click to browse", domain.label()),
                FontId::proportional(14.0),
                domain.color(&colors),
            );
        }
    }
}
