//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::AppState;

/// Setzt die Kamera auf die Startposition aus den Optionen zurück.
pub fn reset_camera(state: &mut AppState) {
    state.view.camera = state.options.initial_camera();
}

/// Zoomt die Kamera stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    state.view.camera.zoom_by_clamped(
        state.options.camera_zoom_step,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Zoomt die Kamera stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    state.view.camera.zoom_by_clamped(
        1.0 / state.options.camera_zoom_step,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Verschiebt die Karte um ein Pixel-Delta.
pub fn pan(state: &mut AppState, delta_px: glam::Vec2) {
    state.view.camera.pan_by_pixels(delta_px);
}

/// Zoomt auf eine optionale Screen-Position (Mausposition) hin.
///
/// Falls `focus_screen` angegeben ist, bleibt der Kartenpunkt unter
/// der Maus nach dem Zoom an derselben Bildschirmposition.
pub fn zoom_towards(state: &mut AppState, factor: f64, focus_screen: Option<glam::Vec2>) {
    let viewport = glam::Vec2::from(state.view.viewport_size);
    state.view.camera.zoom_towards(
        factor,
        focus_screen,
        viewport,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn reset_camera_returns_to_initial_view() {
        let mut state = AppState::new();
        state.view.camera.zoom = 17.0;
        pan(&mut state, glam::Vec2::new(300.0, -120.0));

        reset_camera(&mut state);

        assert_eq!(state.view.camera, state.options.initial_camera());
    }

    #[test]
    fn zoom_in_then_out_returns_to_original() {
        let mut state = AppState::new();
        let original = state.view.camera.zoom;

        zoom_in(&mut state);
        assert_relative_eq!(state.view.camera.zoom, original + 1.0);
        zoom_out(&mut state);

        assert_relative_eq!(state.view.camera.zoom, original, epsilon = 1e-9);
    }

    #[test]
    fn zoom_is_clamped_to_options() {
        let mut state = AppState::new();
        for _ in 0..40 {
            zoom_in(&mut state);
        }
        assert_relative_eq!(state.view.camera.zoom, state.options.camera_zoom_max);
    }

    #[test]
    fn zoom_towards_point_keeps_focus_stable() {
        let mut state = AppState::new();
        state.view.viewport_size = [800.0, 600.0];
        let focus = glam::Vec2::new(600.0, 150.0);
        let viewport = glam::Vec2::new(800.0, 600.0);
        let before = state.view.camera.screen_to_geo(focus, viewport);

        zoom_towards(&mut state, 2.0, Some(focus));

        let after = state.view.camera.screen_to_geo(focus, viewport);
        assert!(before.approx_eq(&after, 1e-9));
    }
}
