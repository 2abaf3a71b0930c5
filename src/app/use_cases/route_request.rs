//! Use-Cases für das Absenden und Ablehnen von Routenanfragen.

use crate::app::AppState;
use crate::client::{RouteClient, RouteQuery, ValidationError};

/// Sendet eine validierte Anfrage über den Client ab.
pub fn submit(state: &mut AppState, client: &RouteClient, query: RouteQuery) {
    if state.request.is_loading() {
        log::info!("Neue Anfrage ersetzt laufende Anfrage {}", state.request.request_id());
    }
    let request_id = client.submit(&mut state.request, query);
    state.ui.status_message = Some(format!("Route requested (#{request_id})"));
}

/// Meldet einen Validierungsfehler, ohne eine Anfrage zu senden.
pub fn reject(state: &mut AppState, error: ValidationError) {
    log::info!("Routenanfrage abgelehnt: {}", error);
    state.request.reject(error);
    state.ui.status_message = None;
}

/// Übernimmt alle eingetroffenen Antworten.
///
/// Gibt die Anzahl übernommener (nicht veralteter) Antworten zurück.
pub fn poll_responses(state: &mut AppState, client: &RouteClient) -> usize {
    let applied = client.poll(&mut state.request);
    if applied > 0 {
        state.ui.status_message = None;
    }
    applied
}
