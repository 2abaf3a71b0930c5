//! Viewport-Input-Handling: Maus-Events, Drag, Scroll → AppIntent.
//!
//! Aufgeteilt in Submodule:
//! - `clicks`: Primärklick setzt Start-/Zielpunkt
//! - `pointer_delta`: Kamera-Pan während aktiver Drags
//! - `zoom`: Scroll-Zoom auf Mausposition

mod clicks;
mod pointer_delta;
mod zoom;

use super::keyboard;
use crate::app::AppIntent;
use crate::core::{GeoPoint, MapCamera};
use crate::shared::ClientOptions;

/// Bündelt die gemeinsamen Parameter für Viewport-Event-Verarbeitung.
pub(crate) struct ViewportContext<'a> {
    pub ui: &'a egui::Ui,
    pub response: &'a egui::Response,
    pub viewport_size: [f32; 2],
    pub camera: &'a MapCamera,
    pub options: &'a ClientOptions,
}

/// Verwaltet den Input-Zustand für das Viewport
#[derive(Default)]
pub struct InputState {
    /// Letzte Mausposition über der Karte (für die Status-Bar)
    hover_geo: Option<GeoPoint>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self { hover_geo: None }
    }

    /// Geo-Position unter dem Mauszeiger im letzten Frame.
    pub fn hover_geo(&self) -> Option<GeoPoint> {
        self.hover_geo
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Zentraler UI→Intent-Einstieg für Maus-, Scroll-, Drag- und
    /// Tastatur-Interaktionen im Viewport.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        camera: &MapCamera,
        options: &ClientOptions,
    ) -> Vec<AppIntent> {
        let ctx = ViewportContext {
            ui,
            response,
            viewport_size,
            camera,
            options,
        };

        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        events.extend(keyboard::collect_keyboard_intents(ui));

        self.hover_geo = response
            .hover_pos()
            .map(|pos| screen_pos_to_geo(pos, response, viewport_size, camera));

        self.handle_clicks(&ctx, &mut events);
        self.handle_pointer_delta(&ctx, &mut events);
        self.handle_scroll_zoom(&ctx, &mut events);

        events
    }
}

/// Rechnet eine Bildschirmposition in Geo-Koordinaten um.
pub(crate) fn screen_pos_to_geo(
    pointer_pos: egui::Pos2,
    response: &egui::Response,
    viewport_size: [f32; 2],
    camera: &MapCamera,
) -> GeoPoint {
    let local = pointer_pos - response.rect.min;
    camera.screen_to_geo(
        glam::Vec2::new(local.x, local.y),
        glam::Vec2::new(viewport_size[0], viewport_size[1]),
    )
}
