use eframe::egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2, pos2};

use techgraph::theme::StyleTokens;

pub(super) fn blend_color(base: Color32, overlay: Color32, amount: f32) -> Color32 {
    let amount = amount.clamp(0.0, 1.0);
    let inverse = 1.0 - amount;

    Color32::from_rgba_unmultiplied(
        ((base.r() as f32 * inverse) + (overlay.r() as f32 * amount)) as u8,
        ((base.g() as f32 * inverse) + (overlay.g() as f32 * amount)) as u8,
        ((base.b() as f32 * inverse) + (overlay.b() as f32 * amount)) as u8,
        ((base.a() as f32 * inverse) + (overlay.a() as f32 * amount)) as u8,
    )
}

pub(super) fn with_alpha(color: Color32, opacity: f32) -> Color32 {
    let opacity = opacity.clamp(0.0, 1.0);
    Color32::from_rgba_unmultiplied(
        color.r(),
        color.g(),
        color.b(),
        (color.a() as f32 * opacity) as u8,
    )
}

/// 8 px for weight 0 up to 20 px for weight 100.
pub(super) fn node_radius(weight: f32) -> f32 {
    8.0 + (weight.clamp(0.0, 100.0) / 100.0) * 12.0
}

const TOOL_GRAY: Color32 = Color32::from_rgb(100, 116, 139);

pub(super) fn category_color(category: &str, tokens: &StyleTokens) -> Color32 {
    match category {
        "framework" | "vision" => tokens.domain_a,
        "language" | "audio" => tokens.domain_b,
        "ml" | "symbolic" => tokens.domain_c,
        "cloud" => tokens.primary,
        _ => TOOL_GRAY,
    }
}

#[derive(Clone, Copy, Debug)]
pub(super) struct CanvasTransform {
    origin: Pos2,
    scale: f32,
}

impl CanvasTransform {
    pub(super) fn fit(rect: Rect, canvas: Vec2) -> Self {
        let scale = if canvas.x > 0.0 && canvas.y > 0.0 {
            (rect.width() / canvas.x).min(rect.height() / canvas.y)
        } else {
            1.0
        };
        let origin = rect.center() - canvas * scale * 0.5;
        Self { origin, scale }
    }

    pub(super) fn scale(self) -> f32 {
        self.scale
    }

    pub(super) fn to_screen(self, canvas: Pos2) -> Pos2 {
        self.origin + canvas.to_vec2() * self.scale
    }

    pub(super) fn to_canvas(self, screen: Pos2) -> Pos2 {
        if self.scale == 0.0 {
            return pos2(0.0, 0.0);
        }
        pos2(
            (screen.x - self.origin.x) / self.scale,
            (screen.y - self.origin.y) / self.scale,
        )
    }
}

pub(super) fn draw_background(painter: &Painter, rect: Rect, tint: Color32) {
    painter.rect_filled(rect, 0.0, Color32::from_rgb(10, 10, 15));

    let grid = Stroke::new(1.0, with_alpha(tint, 0.06));
    let step = 48.0;

    let mut x = rect.left();
    while x < rect.right() {
        painter.line_segment([pos2(x, rect.top()), pos2(x, rect.bottom())], grid);
        x += step;
    }

    let mut y = rect.top();
    while y < rect.bottom() {
        painter.line_segment([pos2(rect.left(), y), pos2(rect.right(), y)], grid);
        y += step;
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::vec2;

    use super::*;

    #[test]
    fn node_radius_spans_weight_range() {
        assert_eq!(node_radius(0.0), 8.0);
        assert_eq!(node_radius(100.0), 20.0);
        assert_eq!(node_radius(250.0), 20.0);
    }

    #[test]
    fn transform_round_trips_points() {
        let rect = Rect::from_min_size(pos2(10.0, 20.0), vec2(1600.0, 600.0));
        let transform = CanvasTransform::fit(rect, vec2(800.0, 600.0));
        assert_eq!(transform.scale(), 1.0);

        let screen = transform.to_screen(pos2(400.0, 300.0));
        assert_eq!(screen, rect.center());
        assert_eq!(transform.to_canvas(screen), pos2(400.0, 300.0));
    }

    #[test]
    fn unknown_categories_are_gray() {
        let tokens = StyleTokens::default();
        assert_eq!(category_color("quantum", &tokens), TOOL_GRAY);
    }
}
