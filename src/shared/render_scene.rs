//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::ClientOptions;
use crate::core::{MapCamera, RouteResult, Selection};
use std::sync::Arc;

/// Read-only Daten für einen Render-Frame.
#[derive(Clone)]
pub struct RenderScene {
    /// Kamera-Zustand für diesen Frame
    pub camera: MapCamera,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Vom Benutzer gesetzte Start-/Zielpunkte
    pub selection: Selection,
    /// Aktuelles Routenergebnis (Arc für O(1)-Clone pro Frame)
    pub route: Option<Arc<RouteResult>>,
    /// Laufzeit-Optionen für Farben, Größen, Breiten
    pub options: ClientOptions,
}

impl RenderScene {
    /// Gibt zurück, ob eine Route zum Zeichnen vorliegt.
    pub fn has_route(&self) -> bool {
        self.route.is_some()
    }
}
