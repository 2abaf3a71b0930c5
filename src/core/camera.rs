//! Web-Mercator-Kamera für Pan und Zoom über der Karte.

use super::GeoPoint;
use glam::{DVec2, Vec2};

/// Maximaler Breitengrad der Web-Mercator-Projektion.
const MAX_MERCATOR_LAT: f64 = 85.051_128_78;

/// Kamera über einer Web-Mercator-Karte.
///
/// `center` liegt im normierten Mercator-Raum (`0..1` in x und y, y nach unten),
/// `zoom` entspricht der Slippy-Map-Zoomstufe (kontinuierlich).
#[derive(Debug, Clone, PartialEq)]
pub struct MapCamera {
    /// Kartenmitte im normierten Mercator-Raum
    pub center: DVec2,
    /// Zoomstufe (Weltbreite = `TILE_SIZE * 2^zoom` Pixel)
    pub zoom: f64,
}

impl MapCamera {
    /// Kachelgröße in Pixeln bei Zoomstufe 0.
    pub const TILE_SIZE: f64 = 256.0;
    /// Minimale Zoomstufe.
    pub const ZOOM_MIN: f64 = 2.0;
    /// Maximale Zoomstufe.
    pub const ZOOM_MAX: f64 = 19.0;

    /// Erstellt eine Kamera mit Blick auf `center`.
    pub fn new(center: GeoPoint, zoom: f64) -> Self {
        Self {
            center: project(center),
            zoom: zoom.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX),
        }
    }

    /// Aktuelle Kartenmitte als geografischer Punkt.
    pub fn center_geo(&self) -> GeoPoint {
        unproject(self.center)
    }

    /// Breite der gesamten Welt in Pixeln bei aktuellem Zoom.
    pub fn world_size_px(&self) -> f64 {
        Self::TILE_SIZE * self.zoom.exp2()
    }

    /// Verschiebt die Karte um ein Pixel-Delta (Drag-Richtung).
    pub fn pan_by_pixels(&mut self, delta_px: Vec2) {
        self.center -= delta_px.as_dvec2() / self.world_size_px();
        self.center = self.center.clamp(DVec2::ZERO, DVec2::ONE);
    }

    /// Ändert den Zoom multiplikativ (Faktor 2.0 = eine Stufe hinein).
    pub fn zoom_by_clamped(&mut self, factor: f64, min: f64, max: f64) {
        if factor <= 0.0 || !factor.is_finite() {
            return;
        }
        self.zoom = (self.zoom + factor.log2()).clamp(min, max);
    }

    /// Zoomt so, dass der Punkt unter `focus_screen` an derselben Bildschirmposition bleibt.
    pub fn zoom_towards(
        &mut self,
        factor: f64,
        focus_screen: Option<Vec2>,
        viewport_size: Vec2,
        min: f64,
        max: f64,
    ) {
        let Some(focus) = focus_screen else {
            self.zoom_by_clamped(factor, min, max);
            return;
        };
        let focus_world = self.screen_to_world(focus, viewport_size);
        self.zoom_by_clamped(factor, min, max);
        let offset = (focus - viewport_size * 0.5).as_dvec2() / self.world_size_px();
        self.center = (focus_world - offset).clamp(DVec2::ZERO, DVec2::ONE);
    }

    /// Screen-Position (relativ zur Viewport-Ecke oben links) → Mercator-Raum.
    fn screen_to_world(&self, screen_pos: Vec2, viewport_size: Vec2) -> DVec2 {
        self.center + (screen_pos - viewport_size * 0.5).as_dvec2() / self.world_size_px()
    }

    /// Screen-Position (relativ zur Viewport-Ecke oben links) → geografischer Punkt.
    pub fn screen_to_geo(&self, screen_pos: Vec2, viewport_size: Vec2) -> GeoPoint {
        let world = self
            .screen_to_world(screen_pos, viewport_size)
            .clamp(DVec2::ZERO, DVec2::ONE);
        unproject(world)
    }

    /// Geografischer Punkt → Screen-Position (relativ zur Viewport-Ecke oben links).
    pub fn geo_to_screen(&self, point: GeoPoint, viewport_size: Vec2) -> Vec2 {
        let offset = (project(point) - self.center) * self.world_size_px();
        offset.as_vec2() + viewport_size * 0.5
    }
}

impl Default for MapCamera {
    fn default() -> Self {
        Self::new(GeoPoint::new(0.0, 0.0), Self::ZOOM_MIN)
    }
}

/// Projiziert einen Punkt in den normierten Mercator-Raum (`0..1`, y nach unten).
pub fn project(point: GeoPoint) -> DVec2 {
    let lat = point.lat().clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT).to_radians();
    let x = (point.lon() + 180.0) / 360.0;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / std::f64::consts::PI) / 2.0;
    DVec2::new(x, y)
}

/// Inverse von [`project`].
pub fn unproject(world: DVec2) -> GeoPoint {
    let lon = world.x * 360.0 - 180.0;
    let n = std::f64::consts::PI * (1.0 - 2.0 * world.y);
    let lat = n.sinh().atan().to_degrees();
    GeoPoint::new(lat, lon)
}
