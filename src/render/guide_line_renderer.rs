//! Gestrichelte Hilfslinien zwischen Klickpunkt und gefangenem Routen-Endpunkt.

use super::projection::{color32, MapProjector};
use crate::core::{GeoPoint, RouteResult, Selection};
use crate::shared::ClientOptions;
use eframe::egui;

/// Toleranz in Grad, unter der Klick und Endpunkt als identisch gelten.
const SAME_POINT_EPSILON_DEG: f64 = 1e-9;

/// Welche Seite der Route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideLineKind {
    /// Startpunkt → erster Routenpunkt
    Start,
    /// Zielpunkt → letzter Routenpunkt
    End,
}

impl GuideLineKind {
    /// Linienfarbe aus den Optionen.
    pub fn color(&self, options: &ClientOptions) -> [f32; 4] {
        match self {
            Self::Start => options.guide_color_start,
            Self::End => options.guide_color_end,
        }
    }
}

/// Eine Hilfslinie
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideLine {
    /// Seite
    pub kind: GuideLineKind,
    /// Vom Benutzer geklickter Punkt
    pub click: GeoPoint,
    /// Endpunkt der Route
    pub endpoint: GeoPoint,
}

/// Ermittelt die zu zeichnenden Hilfslinien.
///
/// Pro Seite nur, wenn Klickpunkt und Routen-Endpunkt vorhanden sind und sich
/// unterscheiden. Ohne Route: keine.
pub fn build_guide_lines(selection: &Selection, route: Option<&RouteResult>) -> Vec<GuideLine> {
    let Some(route) = route else {
        return Vec::new();
    };

    [
        (GuideLineKind::Start, selection.start(), route.path_start()),
        (GuideLineKind::End, selection.end(), route.path_end()),
    ]
    .into_iter()
    .filter_map(|(kind, click, endpoint)| {
        let (click, endpoint) = (click?, endpoint?);
        if click.approx_eq(&endpoint, SAME_POINT_EPSILON_DEG) {
            return None;
        }
        Some(GuideLine {
            kind,
            click,
            endpoint,
        })
    })
    .collect()
}

/// Zeichnet die Hilfslinien gestrichelt.
pub fn paint_guide_lines(
    painter: &egui::Painter,
    projector: &MapProjector<'_>,
    lines: &[GuideLine],
    options: &ClientOptions,
) {
    for line in lines {
        let stroke = egui::Stroke::new(options.guide_width_px, color32(line.kind.color(options)));
        let path = [
            projector.to_screen(line.click),
            projector.to_screen(line.endpoint),
        ];
        painter.extend(egui::Shape::dashed_line(
            &path,
            stroke,
            options.guide_dash_px,
            options.guide_gap_px,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RouteSegment;

    const CLICK_START: GeoPoint = GeoPoint::new(-22.9001, -42.8202);
    const CLICK_END: GeoPoint = GeoPoint::new(-22.9298, -42.8099);
    const SNAP_START: GeoPoint = GeoPoint::new(-22.90, -42.82);
    const SNAP_END: GeoPoint = GeoPoint::new(-22.93, -42.81);

    fn selection(start: GeoPoint, end: GeoPoint) -> Selection {
        let mut selection = Selection::new();
        selection.click(start);
        selection.click(end);
        selection
    }

    fn route(first: GeoPoint, last: GeoPoint) -> RouteResult {
        RouteResult {
            segments: vec![
                RouteSegment {
                    coordinates: vec![first, GeoPoint::new(-22.915, -42.815)],
                    applied_condition: None,
                },
                RouteSegment {
                    coordinates: vec![GeoPoint::new(-22.915, -42.815), last],
                    applied_condition: None,
                },
            ],
            total_length_meters: 1.0,
            total_time_minutes: 1.0,
        }
    }

    #[test]
    fn both_sides_are_drawn_when_click_and_endpoint_differ() {
        let lines = build_guide_lines(
            &selection(CLICK_START, CLICK_END),
            Some(&route(SNAP_START, SNAP_END)),
        );

        assert_eq!(
            lines,
            vec![
                GuideLine {
                    kind: GuideLineKind::Start,
                    click: CLICK_START,
                    endpoint: SNAP_START,
                },
                GuideLine {
                    kind: GuideLineKind::End,
                    click: CLICK_END,
                    endpoint: SNAP_END,
                },
            ]
        );
    }

    #[test]
    fn no_route_means_no_guide_lines() {
        assert!(build_guide_lines(&selection(CLICK_START, CLICK_END), None).is_empty());
    }

    #[test]
    fn side_without_click_is_skipped() {
        let mut only_start = Selection::new();
        only_start.click(CLICK_START);

        let lines = build_guide_lines(&only_start, Some(&route(SNAP_START, SNAP_END)));

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].kind, GuideLineKind::Start);
    }

    #[test]
    fn identical_click_and_endpoint_draw_nothing() {
        let lines = build_guide_lines(
            &selection(SNAP_START, CLICK_END),
            Some(&route(SNAP_START, SNAP_END)),
        );

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].kind, GuideLineKind::End);
    }

    #[test]
    fn start_and_end_use_distinct_colors() {
        let options = ClientOptions::default();
        assert_ne!(
            GuideLineKind::Start.color(&options),
            GuideLineKind::End.color(&options)
        );
    }
}
