//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    RenderScene {
        camera: state.view.camera.clone(),
        viewport_size,
        selection: state.selection,
        route: state.request.result().cloned(),
        options: state.options.clone(),
    }
}
