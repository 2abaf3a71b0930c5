//! Use-Cases für die Start/Ziel-Auswahl.

use crate::app::AppState;
use crate::core::GeoPoint;

/// Wendet einen Kartenklick auf die Auswahl an.
///
/// Jeder Klick setzt die Anfrage zurück: Route und Fehlermeldung verschwinden,
/// eine laufende Antwort wird veraltet.
pub fn apply_click(state: &mut AppState, point: GeoPoint) {
    let transition = state.selection.click(point);
    log::debug!(
        "Kartenklick ({:.6}, {:.6}): {:?} → {:?}",
        point.lat(),
        point.lon(),
        transition.from,
        transition.to
    );

    if transition.left_both_set() && state.request.is_loading() {
        log::info!(
            "Laufende Anfrage {} durch neuen Startpunkt verworfen",
            state.request.request_id()
        );
    }
    reset_request(state);
}

/// Leert die Auswahl und setzt die Anfrage auf `Idle` zurück.
pub fn clear(state: &mut AppState) {
    state.selection.clear();
    reset_request(state);
    log::debug!("Auswahl und Route verworfen");
}

fn reset_request(state: &mut AppState) {
    state.request.reset();
    state.ui.status_message = None;
}
