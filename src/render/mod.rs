//! Karten-Rendering mit dem egui-Painter.
//!
//! Zeichenreihenfolge: Hintergrund, Segmente, Hilfslinien, Marker.
//! Alle Renderer lesen nur aus der [`RenderScene`].

mod background;
mod guide_line_renderer;
mod marker_renderer;
mod projection;
mod segment_renderer;

pub use crate::shared::RenderScene;
pub use background::grid_step_degrees;
pub use guide_line_renderer::{build_guide_lines, GuideLine, GuideLineKind};
pub use marker_renderer::{END_LABEL, START_LABEL};
pub use projection::{color32, MapProjector};
pub use segment_renderer::{
    build_segment_overlays, distance_to_polyline, SegmentOverlay, SegmentStyle,
};

use eframe::egui;

/// Zeichnet die komplette Szene in `rect`.
pub fn paint_map(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    let projector = MapProjector::new(&scene.camera, rect);
    let route = scene.route.as_deref();

    background::paint_background(painter, &projector);

    let overlays = build_segment_overlays(route);
    segment_renderer::paint_segments(painter, &projector, &overlays, &scene.options);

    let guides = build_guide_lines(&scene.selection, route);
    guide_line_renderer::paint_guide_lines(painter, &projector, &guides, &scene.options);

    marker_renderer::paint_markers(painter, &projector, &scene.selection, &scene.options);
}

/// Hover-Text an der Mausposition: Marker-Beschriftung vor Segment-Bedingung.
pub fn hover_text(scene: &RenderScene, rect: egui::Rect, pointer: egui::Pos2) -> Option<String> {
    if !rect.contains(pointer) {
        return None;
    }
    let projector = MapProjector::new(&scene.camera, rect);

    if let Some(label) = marker_renderer::hovered_marker_label(
        &projector,
        &scene.selection,
        pointer,
        scene.options.marker_radius_px,
    ) {
        return Some(label.to_string());
    }

    let overlays = build_segment_overlays(scene.route.as_deref());
    let radius = scene.options.segment_hover_radius_px.max(scene.options.segment_width_px * 0.5);
    segment_renderer::hovered_condition(&overlays, &projector, pointer, radius).map(str::to_string)
}
