use crate::core::{GeoPoint, NetworkType, OptimizeFor};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Klick auf die Karte (bereits in Geo-Koordinaten umgerechnet)
    MapClicked { point: GeoPoint },
    /// Auswahl und Route verwerfen ("Clear" / Escape)
    ClearRequested,
    /// Route anfordern ("Find route" / Enter)
    RouteSubmitRequested,
    /// Verkehrsnetz im Bedienpanel geändert
    NetworkTypeChanged { network_type: NetworkType },
    /// Optimierungsziel im Bedienpanel geändert
    OptimizeForChanged { optimize_for: OptimizeFor },
    /// Text im Geschwindigkeitsfeld geändert
    AverageSpeedInputChanged { text: String },
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Karte um ein Pixel-Delta verschieben (Drag)
    CameraPan { delta_px: glam::Vec2 },
    /// Karte zoomen (optional auf eine Screen-Position hin)
    CameraZoom {
        factor: f64,
        focus_screen: Option<glam::Vec2>,
    },
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Kamera auf Startposition zurücksetzen
    ResetCameraRequested,
    /// Anwendung beenden
    ExitRequested,
}
