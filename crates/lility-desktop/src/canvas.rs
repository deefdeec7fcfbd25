//! Painting the letterboxed image and its guide lines.

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke, TextureHandle};
use lility_core::session::GuideLine;
use lility_core::transform::CanvasRect;
use lility_core::{CanvasSize, CutMode, Overlay};

const GUIDE_WIDTH: f32 = 2.0;
const HOVER_DASH: f32 = 4.0;
const HOVER_GAP: f32 = 4.0;

/// The screen area the canvas occupies.
///
/// Engine coordinates are relative to the canvas' top-left corner; this
/// converts them to and from egui screen positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasView {
    pub rect: Rect,
}

impl CanvasView {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    pub fn size(&self) -> CanvasSize {
        CanvasSize::new(self.rect.width() as f64, self.rect.height() as f64)
    }

    pub fn to_local(&self, pos: Pos2) -> (f64, f64) {
        let v = pos - self.rect.min;
        (v.x as f64, v.y as f64)
    }

    pub fn to_screen(&self, (x, y): (f64, f64)) -> Pos2 {
        self.rect.min + egui::vec2(x as f32, y as f32)
    }

    pub fn screen_rect(&self, r: CanvasRect) -> Rect {
        Rect::from_min_size(
            self.to_screen((r.x, r.y)),
            egui::vec2(r.width as f32, r.height as f32),
        )
    }
}

fn guide_color(mode: CutMode) -> Color32 {
    match mode {
        CutMode::Horizontal => Color32::RED,
        CutMode::Vertical => Color32::from_rgb(0, 160, 255),
    }
}

/// Draw the image into its letterbox rectangle, then every cut with its
/// label.
pub fn paint(painter: &Painter, view: CanvasView, overlay: &Overlay, texture: &TextureHandle) {
    painter.image(
        texture.id(),
        view.screen_rect(overlay.image_rect),
        Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        Color32::WHITE,
    );

    for guide in &overlay.guides {
        let color = guide_color(guide.mode);
        painter.line_segment(
            [view.to_screen(guide.from), view.to_screen(guide.to)],
            Stroke::new(GUIDE_WIDTH, color),
        );
        painter.text(
            view.to_screen(guide.label_at),
            Align2::LEFT_TOP,
            &guide.label,
            FontId::proportional(14.0),
            color,
        );
    }
}

/// Dashed preview line under the pointer.
pub fn paint_hover(painter: &Painter, view: CanvasView, guide: &GuideLine) {
    let points = [view.to_screen(guide.from), view.to_screen(guide.to)];
    let stroke = Stroke::new(1.0, guide_color(guide.mode).gamma_multiply(0.6));
    painter.extend(Shape::dashed_line(&points, stroke, HOVER_DASH, HOVER_GAP));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_and_screen_are_inverse() {
        let view = CanvasView::new(Rect::from_min_size(egui::pos2(10.0, 40.0), egui::vec2(300.0, 200.0)));

        assert_eq!(view.to_local(egui::pos2(60.0, 90.0)), (50.0, 50.0));
        assert_eq!(view.to_screen((50.0, 50.0)), egui::pos2(60.0, 90.0));
        assert_eq!(view.size(), CanvasSize::new(300.0, 200.0));
    }

    #[test]
    fn test_screen_rect_offsets_by_canvas_origin() {
        let view = CanvasView::new(Rect::from_min_size(egui::pos2(5.0, 5.0), egui::vec2(100.0, 100.0)));
        let r = view.screen_rect(CanvasRect {
            x: 25.0,
            y: 0.0,
            width: 50.0,
            height: 100.0,
        });
        assert_eq!(r.min, egui::pos2(30.0, 5.0));
        assert_eq!(r.max, egui::pos2(80.0, 105.0));
    }
}
