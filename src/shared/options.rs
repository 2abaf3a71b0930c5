//! Zentrale Konfiguration für den Pequod Route Viewer.
//!
//! `ClientOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{GeoPoint, MapCamera};
use serde::{Deserialize, Serialize};

// ── Dienst ──────────────────────────────────────────────────────────

/// Standard-Basis-URL der Pequod-API.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:7777/api/pequod";
/// Umgebungsvariable, die die Basis-URL überschreibt.
pub const API_URL_ENV_VAR: &str = "PEQUOD_API_URL";
/// Gesamt-Timeout einer Routenanfrage in Sekunden.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// ── Kamera ──────────────────────────────────────────────────────────

/// Start-Mittelpunkt der Karte (Maricá, RJ).
pub const MAP_CENTER: GeoPoint = GeoPoint::new(-22.9186, -42.8186);
/// Start-Zoomstufe.
pub const MAP_INITIAL_ZOOM: f64 = 13.0;
/// Zoom-Faktor bei stufenweisem Zoom (Buttons / Shortcuts), 2.0 = eine Stufe.
pub const CAMERA_ZOOM_STEP: f64 = 2.0;
/// Zoom-Faktor pro Mausrad-Raste.
pub const CAMERA_SCROLL_ZOOM_STEP: f64 = 1.25;

// ── Segment-Rendering ──────────────────────────────────────────────

/// Farbe normaler Segmente (RGBA: #2563EB, 80 % Deckkraft).
pub const SEGMENT_COLOR_NORMAL: [f32; 4] = [0.145, 0.388, 0.922, 0.8];
/// Farbe von Segmenten mit Bedingung (RGBA: #F97316, 80 % Deckkraft).
pub const SEGMENT_COLOR_AFFECTED: [f32; 4] = [0.976, 0.451, 0.086, 0.8];
/// Linienstärke der Segmente in Pixeln.
pub const SEGMENT_WIDTH_PX: f32 = 5.0;
/// Hover-Radius um ein Segment in Pixeln (für das Info-Popup).
pub const SEGMENT_HOVER_RADIUS_PX: f32 = 6.0;

// ── Hilfslinien ────────────────────────────────────────────────────

/// Farbe der Hilfslinie zum Startpunkt (RGBA: Grün).
pub const GUIDE_COLOR_START: [f32; 4] = [0.086, 0.639, 0.290, 0.9];
/// Farbe der Hilfslinie zum Zielpunkt (RGBA: Rot).
pub const GUIDE_COLOR_END: [f32; 4] = [0.863, 0.149, 0.149, 0.9];
/// Linienstärke der Hilfslinien in Pixeln.
pub const GUIDE_WIDTH_PX: f32 = 2.0;
/// Strichlänge der Hilfslinien in Pixeln.
pub const GUIDE_DASH_PX: f32 = 8.0;
/// Lückenlänge der Hilfslinien in Pixeln.
pub const GUIDE_GAP_PX: f32 = 6.0;

// ── Marker ─────────────────────────────────────────────────────────

/// Füllfarbe des Start-Markers (RGBA: Grün).
pub const MARKER_COLOR_START: [f32; 4] = [0.086, 0.639, 0.290, 1.0];
/// Füllfarbe des Ziel-Markers (RGBA: Rot).
pub const MARKER_COLOR_END: [f32; 4] = [0.863, 0.149, 0.149, 1.0];
/// Marker-Radius in Pixeln.
pub const MARKER_RADIUS_PX: f32 = 7.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `pequod_route_viewer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientOptions {
    // ── Dienst ──────────────────────────────────────────────────
    /// Basis-URL der Pequod-API (ohne `/pathfinder/...`)
    pub api_base_url: String,
    /// Gesamt-Timeout pro Anfrage in Sekunden
    pub request_timeout_secs: u64,

    // ── Kamera ──────────────────────────────────────────────────
    /// Breitengrad der Start-Kartenmitte
    pub map_center_lat: f64,
    /// Längengrad der Start-Kartenmitte
    pub map_center_lon: f64,
    /// Start-Zoomstufe
    pub map_initial_zoom: f64,
    /// Minimale Zoomstufe
    pub camera_zoom_min: f64,
    /// Maximale Zoomstufe
    pub camera_zoom_max: f64,
    /// Zoom-Faktor bei Buttons / Shortcuts
    pub camera_zoom_step: f64,
    /// Zoom-Faktor pro Mausrad-Raste
    pub camera_scroll_zoom_step: f64,

    // ── Segmente ────────────────────────────────────────────────
    /// Farbe normaler Segmente
    pub segment_color_normal: [f32; 4],
    /// Farbe von Segmenten mit Bedingung
    pub segment_color_affected: [f32; 4],
    /// Linienstärke in Pixeln
    pub segment_width_px: f32,
    /// Hover-Radius für Info-Popups
    pub segment_hover_radius_px: f32,

    // ── Hilfslinien ─────────────────────────────────────────────
    /// Farbe der Start-Hilfslinie
    pub guide_color_start: [f32; 4],
    /// Farbe der Ziel-Hilfslinie
    pub guide_color_end: [f32; 4],
    /// Linienstärke in Pixeln
    pub guide_width_px: f32,
    /// Strichlänge in Pixeln
    pub guide_dash_px: f32,
    /// Lückenlänge in Pixeln
    pub guide_gap_px: f32,

    // ── Marker ──────────────────────────────────────────────────
    /// Füllfarbe Start-Marker
    pub marker_color_start: [f32; 4],
    /// Füllfarbe Ziel-Marker
    pub marker_color_end: [f32; 4],
    /// Marker-Radius in Pixeln
    pub marker_radius_px: f32,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: REQUEST_TIMEOUT_SECS,

            map_center_lat: MAP_CENTER.lat(),
            map_center_lon: MAP_CENTER.lon(),
            map_initial_zoom: MAP_INITIAL_ZOOM,
            camera_zoom_min: MapCamera::ZOOM_MIN,
            camera_zoom_max: MapCamera::ZOOM_MAX,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,

            segment_color_normal: SEGMENT_COLOR_NORMAL,
            segment_color_affected: SEGMENT_COLOR_AFFECTED,
            segment_width_px: SEGMENT_WIDTH_PX,
            segment_hover_radius_px: SEGMENT_HOVER_RADIUS_PX,

            guide_color_start: GUIDE_COLOR_START,
            guide_color_end: GUIDE_COLOR_END,
            guide_width_px: GUIDE_WIDTH_PX,
            guide_dash_px: GUIDE_DASH_PX,
            guide_gap_px: GUIDE_GAP_PX,

            marker_color_start: MARKER_COLOR_START,
            marker_color_end: MARKER_COLOR_END,
            marker_radius_px: MARKER_RADIUS_PX,
        }
    }
}

impl ClientOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    Self::validated(opts)
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Ersetzt unbrauchbare Kamera-Werte aus der Datei durch Standardwerte.
    ///
    /// Zoom-Grenzen müssen endlich sein und `min <= max` erfüllen,
    /// Zoom-Faktoren endlich und positiv.
    pub fn validated(mut self) -> Self {
        let limits_ok = self.camera_zoom_min.is_finite()
            && self.camera_zoom_max.is_finite()
            && self.camera_zoom_min <= self.camera_zoom_max;
        if !limits_ok {
            log::warn!(
                "Ungültige Zoom-Grenzen ({} .. {}), verwende {} .. {}",
                self.camera_zoom_min,
                self.camera_zoom_max,
                MapCamera::ZOOM_MIN,
                MapCamera::ZOOM_MAX
            );
            self.camera_zoom_min = MapCamera::ZOOM_MIN;
            self.camera_zoom_max = MapCamera::ZOOM_MAX;
        }

        if !self.map_initial_zoom.is_finite() {
            log::warn!(
                "Ungültige Start-Zoomstufe {}, verwende {}",
                self.map_initial_zoom,
                MAP_INITIAL_ZOOM
            );
            self.map_initial_zoom = MAP_INITIAL_ZOOM;
        }

        for (step, fallback, name) in [
            (&mut self.camera_zoom_step, CAMERA_ZOOM_STEP, "camera_zoom_step"),
            (
                &mut self.camera_scroll_zoom_step,
                CAMERA_SCROLL_ZOOM_STEP,
                "camera_scroll_zoom_step",
            ),
        ] {
            if !step.is_finite() || *step <= 0.0 {
                log::warn!("Ungültiger Wert für {}: {}, verwende {}", name, step, fallback);
                *step = fallback;
            }
        }

        self
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("pequod_route_viewer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("pequod_route_viewer.toml")
    }

    /// Übernimmt `PEQUOD_API_URL`, falls gesetzt und nicht leer.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(API_URL_ENV_VAR) {
            self.override_api_base_url(&url);
        }
    }

    fn override_api_base_url(&mut self, url: &str) {
        let url = url.trim();
        if url.is_empty() {
            return;
        }
        log::info!("{} überschreibt Basis-URL: {}", API_URL_ENV_VAR, url);
        self.api_base_url = url.to_string();
    }

    /// Start-Mittelpunkt als geografischer Punkt.
    pub fn map_center(&self) -> GeoPoint {
        GeoPoint::new(self.map_center_lat, self.map_center_lon)
    }

    /// Kamera in Startposition.
    pub fn initial_camera(&self) -> MapCamera {
        let mut camera = MapCamera::new(self.map_center(), self.map_initial_zoom);
        camera.zoom = self
            .map_initial_zoom
            .clamp(self.camera_zoom_min, self.camera_zoom_max);
        camera
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_service_and_marica() {
        let options = ClientOptions::default();
        assert_eq!(options.api_base_url, "http://localhost:7777/api/pequod");
        assert_eq!(options.request_timeout_secs, 30);

        let camera = options.initial_camera();
        assert!(camera.center_geo().approx_eq(&MAP_CENTER, 1e-9));
        assert_eq!(camera.zoom, 13.0);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults_per_field() {
        let options: ClientOptions = toml::from_str(
            r#"
            api_base_url = "https://pequod.example/api/pequod"
            segment_width_px = 7.5
            "#,
        )
        .unwrap();

        assert_eq!(options.api_base_url, "https://pequod.example/api/pequod");
        assert_eq!(options.segment_width_px, 7.5);
        assert_eq!(options.segment_color_normal, SEGMENT_COLOR_NORMAL);
        assert_eq!(options.map_initial_zoom, MAP_INITIAL_ZOOM);
    }

    #[test]
    fn toml_roundtrip_keeps_values() {
        let mut options = ClientOptions::default();
        options.guide_dash_px = 12.0;
        let text = toml::to_string_pretty(&options).unwrap();
        let back: ClientOptions = toml::from_str(&text).unwrap();
        assert_eq!(back, options);
    }

    fn temp_config(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!(
            "pequod_route_viewer_{}_{}.toml",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn saved_options_load_back_unchanged() {
        let path = temp_config("save_load");
        let mut options = ClientOptions::default();
        options.api_base_url = "https://pequod.example/api/pequod".into();
        options.marker_radius_px = 9.0;

        options.save_to_file(&path).unwrap();
        let loaded = ClientOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, options);
    }

    #[test]
    fn inverted_zoom_limits_fall_back_to_defaults() {
        let path = temp_config("inverted_zoom");
        std::fs::write(
            &path,
            "camera_zoom_min = 15.0\ncamera_zoom_max = 10.0\nsegment_width_px = 6.0\n",
        )
        .unwrap();

        let options = ClientOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(options.camera_zoom_min, MapCamera::ZOOM_MIN);
        assert_eq!(options.camera_zoom_max, MapCamera::ZOOM_MAX);
        // übrige Werte aus der Datei bleiben erhalten
        assert_eq!(options.segment_width_px, 6.0);
        assert_eq!(options.initial_camera().zoom, MAP_INITIAL_ZOOM);
    }

    #[test]
    fn unusable_zoom_steps_are_replaced() {
        let mut options = ClientOptions::default();
        options.camera_zoom_step = 0.0;
        options.camera_scroll_zoom_step = f64::NAN;
        options.map_initial_zoom = f64::INFINITY;

        let options = options.validated();

        assert_eq!(options.camera_zoom_step, CAMERA_ZOOM_STEP);
        assert_eq!(options.camera_scroll_zoom_step, CAMERA_SCROLL_ZOOM_STEP);
        assert_eq!(options.map_initial_zoom, MAP_INITIAL_ZOOM);
    }

    #[test]
    fn blank_override_is_ignored() {
        let mut options = ClientOptions::default();
        options.override_api_base_url("   ");
        assert_eq!(options.api_base_url, DEFAULT_API_BASE_URL);

        options.override_api_base_url(" http://10.0.0.5:7777/api/pequod ");
        assert_eq!(options.api_base_url, "http://10.0.0.5:7777/api/pequod");
    }
}
