use crate::client::{RouteQuery, ValidationError};
use crate::core::{GeoPoint, NetworkType, OptimizeFor};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Kartenklick auf die Start/Ziel-Auswahl anwenden
    ApplyMapClick { point: GeoPoint },
    /// Auswahl leeren, Anfrage zurücksetzen, Route verwerfen
    ClearSelection,
    /// Validierte Anfrage absenden
    SubmitRoute { query: RouteQuery },
    /// Anfrage wegen Validierungsfehler ablehnen (keine Netzwerkaktivität)
    RejectRouteRequest { error: ValidationError },
    /// Verkehrsnetz setzen
    SetNetworkType { network_type: NetworkType },
    /// Optimierungsziel setzen
    SetOptimizeFor { optimize_for: OptimizeFor },
    /// Geschwindigkeitsfeld übernehmen
    SetAverageSpeedInput { text: String },
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera um Pixel-Delta verschieben
    PanCamera { delta_px: glam::Vec2 },
    /// Kamera zoomen
    ZoomCamera {
        factor: f64,
        focus_screen: Option<glam::Vec2>,
    },
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Kamera zurücksetzen
    ResetCamera,
    /// Anwendung beenden
    RequestExit,
}
