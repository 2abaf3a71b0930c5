//! Segment-Renderer: zeichnet die Route als einzeln gestylte Linienstücke.
//!
//! Jedes Segment wird unabhängig gezeichnet. Segmente mit Bedingung bekommen
//! den "affected"-Stil und ein Info-Popup mit der Beschreibung, alle anderen
//! den normalen Stil ohne Popup.

use super::projection::{color32, MapProjector};
use crate::core::{GeoPoint, RouteResult, RouteSegment};
use crate::shared::ClientOptions;
use eframe::egui;
use glam::Vec2;

/// Darstellungsstil eines Segments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentStyle {
    /// Ohne Bedingung (blau)
    Normal,
    /// Mit Bedingung (orange, mit Popup)
    Affected,
}

impl SegmentStyle {
    /// Stil eines Segments anhand seiner Bedingung.
    pub fn for_segment(segment: &RouteSegment) -> Self {
        if segment.applied_condition.is_some() {
            Self::Affected
        } else {
            Self::Normal
        }
    }

    /// Farbe aus den Optionen.
    pub fn color(&self, options: &ClientOptions) -> [f32; 4] {
        match self {
            Self::Normal => options.segment_color_normal,
            Self::Affected => options.segment_color_affected,
        }
    }
}

/// Zeichenbares Overlay für ein Segment.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentOverlay<'a> {
    /// Index in `RouteResult::segments`
    pub index: usize,
    /// Stil
    pub style: SegmentStyle,
    /// Geometrie in Fahrtrichtung
    pub coordinates: &'a [GeoPoint],
    /// Popup-Text (nur bei Bedingung)
    pub popup: Option<&'a str>,
}

/// Baut die Overlays in Segment-Reihenfolge. Ohne Route: leer.
pub fn build_segment_overlays(route: Option<&RouteResult>) -> Vec<SegmentOverlay<'_>> {
    let Some(route) = route else {
        return Vec::new();
    };
    route
        .segments()
        .iter()
        .enumerate()
        .map(|(index, segment)| SegmentOverlay {
            index,
            style: SegmentStyle::for_segment(segment),
            coordinates: &segment.coordinates,
            popup: segment
                .applied_condition
                .as_ref()
                .map(|c| c.description.as_str()),
        })
        .collect()
}

/// Zeichnet alle Overlays.
pub fn paint_segments(
    painter: &egui::Painter,
    projector: &MapProjector<'_>,
    overlays: &[SegmentOverlay<'_>],
    options: &ClientOptions,
) {
    for overlay in overlays {
        let color = color32(overlay.style.color(options));
        let points: Vec<egui::Pos2> = overlay
            .coordinates
            .iter()
            .map(|p| projector.to_screen(*p))
            .collect();

        match points.as_slice() {
            [] => {}
            [single] => {
                painter.circle_filled(*single, options.segment_width_px * 0.5, color);
            }
            _ => {
                painter.add(egui::Shape::line(
                    points,
                    egui::Stroke::new(options.segment_width_px, color),
                ));
            }
        }
    }
}

/// Beschreibung des Segments mit Bedingung unter dem Mauszeiger.
///
/// Segmente ohne Bedingung liefern nie ein Popup. Bei Überlappung gewinnt
/// das zuletzt gezeichnete Segment.
pub fn hovered_condition<'a>(
    overlays: &[SegmentOverlay<'a>],
    projector: &MapProjector<'_>,
    pointer: egui::Pos2,
    radius_px: f32,
) -> Option<&'a str> {
    let pointer = Vec2::new(pointer.x, pointer.y);
    overlays
        .iter()
        .rev()
        .filter_map(|overlay| overlay.popup.map(|text| (overlay, text)))
        .find(|(overlay, _)| {
            let screen: Vec<Vec2> = overlay
                .coordinates
                .iter()
                .map(|p| {
                    let pos = projector.to_screen(*p);
                    Vec2::new(pos.x, pos.y)
                })
                .collect();
            distance_to_polyline(pointer, &screen) <= radius_px
        })
        .map(|(_, text)| text)
}

/// Kürzester Abstand eines Punkts zu einer Polyline (ein Punkt = Abstand zum Punkt).
pub fn distance_to_polyline(point: Vec2, polyline: &[Vec2]) -> f32 {
    match polyline {
        [] => f32::INFINITY,
        [single] => point.distance(*single),
        _ => polyline
            .windows(2)
            .map(|pair| distance_to_segment(point, pair[0], pair[1]))
            .fold(f32::INFINITY, f32::min),
    }
}

fn distance_to_segment(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}
