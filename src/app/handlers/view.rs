//! Handler für Kamera und Viewport.

use crate::app::use_cases;
use crate::app::AppState;

/// Setzt die Kamera auf die Startposition zurück.
pub fn reset_camera(state: &mut AppState) {
    use_cases::camera::reset_camera(state);
}

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    use_cases::camera::zoom_in(state);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    use_cases::camera::zoom_out(state);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::viewport::resize(state, size);
}

/// Verschiebt die Karte um ein Pixel-Delta.
pub fn pan(state: &mut AppState, delta_px: glam::Vec2) {
    use_cases::camera::pan(state, delta_px);
}

/// Zoomt mit optionalem Fokuspunkt in Screen-Koordinaten.
pub fn zoom_towards(state: &mut AppState, factor: f64, focus_screen: Option<glam::Vec2>) {
    use_cases::camera::zoom_towards(state, factor, focus_screen);
}
