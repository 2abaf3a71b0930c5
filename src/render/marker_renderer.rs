//! Start- und Ziel-Marker an den geklickten Punkten.

use super::projection::{color32, MapProjector};
use crate::core::{GeoPoint, Selection};
use crate::shared::ClientOptions;
use eframe::egui;

/// Hover-Text des Start-Markers.
pub const START_LABEL: &str = "Start point";
/// Hover-Text des Ziel-Markers.
pub const END_LABEL: &str = "End point";

fn markers(selection: &Selection) -> impl Iterator<Item = (GeoPoint, &'static str, bool)> {
    [
        selection.start().map(|p| (p, START_LABEL, true)),
        selection.end().map(|p| (p, END_LABEL, false)),
    ]
    .into_iter()
    .flatten()
}

/// Zeichnet die Marker (gefüllter Kreis mit weißem Rand).
pub fn paint_markers(
    painter: &egui::Painter,
    projector: &MapProjector<'_>,
    selection: &Selection,
    options: &ClientOptions,
) {
    for (point, _, is_start) in markers(selection) {
        let fill = if is_start {
            options.marker_color_start
        } else {
            options.marker_color_end
        };
        painter.circle(
            projector.to_screen(point),
            options.marker_radius_px,
            color32(fill),
            egui::Stroke::new(2.0, egui::Color32::WHITE),
        );
    }
}

/// Beschriftung des Markers unter dem Mauszeiger.
pub fn hovered_marker_label(
    projector: &MapProjector<'_>,
    selection: &Selection,
    pointer: egui::Pos2,
    radius_px: f32,
) -> Option<&'static str> {
    markers(selection)
        .filter(|(point, _, _)| projector.to_screen(*point).distance(pointer) <= radius_px)
        .map(|(_, label, _)| label)
        .last()
}
