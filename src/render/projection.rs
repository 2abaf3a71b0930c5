//! Abbildung zwischen Geo-Koordinaten und Bildschirmpunkten im Viewport-Rechteck.

use crate::core::{GeoPoint, MapCamera};
use eframe::egui;
use glam::Vec2;

/// Projektor für einen Frame: Kamera plus Viewport-Rechteck.
#[derive(Clone, Copy)]
pub struct MapProjector<'a> {
    camera: &'a MapCamera,
    rect: egui::Rect,
}

impl<'a> MapProjector<'a> {
    /// Erstellt den Projektor für das Viewport-Rechteck `rect`.
    pub fn new(camera: &'a MapCamera, rect: egui::Rect) -> Self {
        Self { camera, rect }
    }

    /// Viewport-Rechteck
    pub fn rect(&self) -> egui::Rect {
        self.rect
    }

    /// Zugrunde liegende Kamera
    pub fn camera(&self) -> &MapCamera {
        self.camera
    }

    fn viewport_size(&self) -> Vec2 {
        Vec2::new(self.rect.width(), self.rect.height())
    }

    /// Geo-Punkt → absoluter Bildschirmpunkt.
    pub fn to_screen(&self, point: GeoPoint) -> egui::Pos2 {
        let local = self.camera.geo_to_screen(point, self.viewport_size());
        egui::pos2(self.rect.min.x + local.x, self.rect.min.y + local.y)
    }

    /// Absoluter Bildschirmpunkt → Geo-Punkt.
    pub fn to_geo(&self, pos: egui::Pos2) -> GeoPoint {
        let local = Vec2::new(pos.x - self.rect.min.x, pos.y - self.rect.min.y);
        self.camera.screen_to_geo(local, self.viewport_size())
    }
}

/// RGBA-Optionswert (sRGB, 0..1) → `Color32`.
pub fn color32(rgba: [f32; 4]) -> egui::Color32 {
    let [r, g, b, a] = rgba.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}
