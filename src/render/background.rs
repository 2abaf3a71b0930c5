//! Kartenhintergrund: Fläche plus Gradnetz mit Beschriftung.
//!
//! Kacheln werden nicht geladen; das Gradnetz gibt beim Pannen und Zoomen
//! die Orientierung.

use super::projection::MapProjector;
use crate::core::GeoPoint;
use eframe::egui;

/// Mindestabstand benachbarter Gitterlinien in Pixeln.
const MIN_LINE_SPACING_PX: f64 = 90.0;

/// Mögliche Gitterweiten in Grad (absteigend).
const GRID_STEPS_DEG: [f64; 16] = [
    30.0, 10.0, 5.0, 2.0, 1.0, 0.5, 0.2, 0.1, 0.05, 0.02, 0.01, 0.005, 0.002, 0.001, 0.0005,
    0.0002,
];

const BACKGROUND_COLOR: egui::Color32 = egui::Color32::from_rgb(236, 239, 233);
const GRID_COLOR: egui::Color32 = egui::Color32::from_rgb(205, 210, 200);
const LABEL_COLOR: egui::Color32 = egui::Color32::from_rgb(120, 125, 118);

/// Kleinste Gitterweite, deren Linien mindestens `MIN_LINE_SPACING_PX` auseinanderliegen.
pub fn grid_step_degrees(world_size_px: f64) -> f64 {
    let px_per_degree = world_size_px / 360.0;
    GRID_STEPS_DEG
        .iter()
        .rev()
        .copied()
        .find(|step| step * px_per_degree >= MIN_LINE_SPACING_PX)
        .unwrap_or(GRID_STEPS_DEG[0])
}

/// Nachkommastellen für die Beschriftung einer Gitterweite.
fn label_decimals(step: f64) -> usize {
    let mut decimals = 0;
    let mut scaled = step;
    while (scaled - scaled.round()).abs() > 1e-9 && decimals < 6 {
        scaled *= 10.0;
        decimals += 1;
    }
    decimals
}

/// Zeichnet Hintergrund und Gradnetz.
pub fn paint_background(painter: &egui::Painter, projector: &MapProjector<'_>) {
    let rect = projector.rect();
    painter.rect_filled(rect, 0.0, BACKGROUND_COLOR);

    let step = grid_step_degrees(projector.camera().world_size_px());
    let decimals = label_decimals(step);
    let top_left = projector.to_geo(rect.left_top());
    let bottom_right = projector.to_geo(rect.right_bottom());
    let stroke = egui::Stroke::new(1.0, GRID_COLOR);
    let font = egui::FontId::monospace(10.0);

    let mut lon = (top_left.lon() / step).floor() * step;
    while lon <= bottom_right.lon() {
        let x = projector.to_screen(GeoPoint::new(top_left.lat(), lon)).x;
        painter.line_segment([egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())], stroke);
        painter.text(
            egui::pos2(x + 3.0, rect.bottom() - 3.0),
            egui::Align2::LEFT_BOTTOM,
            format!("{lon:.decimals$}°"),
            font.clone(),
            LABEL_COLOR,
        );
        lon += step;
    }

    let mut lat = (bottom_right.lat() / step).floor() * step;
    while lat <= top_left.lat() {
        let y = projector.to_screen(GeoPoint::new(lat, top_left.lon())).y;
        painter.line_segment([egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)], stroke);
        painter.text(
            egui::pos2(rect.left() + 3.0, y - 2.0),
            egui::Align2::LEFT_BOTTOM,
            format!("{lat:.decimals$}°"),
            font.clone(),
            LABEL_COLOR,
        );
        lat += step;
    }
}
