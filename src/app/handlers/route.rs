//! Handler für Routenanfragen und Anfrage-Optionen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::client::{RouteClient, RouteQuery, ValidationError};
use crate::core::{NetworkType, OptimizeFor};

/// Sendet eine validierte Anfrage ab.
pub fn submit(state: &mut AppState, client: &RouteClient, query: RouteQuery) {
    use_cases::route_request::submit(state, client, query);
}

/// Lehnt eine Anfrage mit Validierungsfehler ab.
pub fn reject(state: &mut AppState, error: ValidationError) {
    use_cases::route_request::reject(state, error);
}

/// Setzt das Verkehrsnetz.
pub fn set_network_type(state: &mut AppState, network_type: NetworkType) {
    use_cases::route_options::set_network_type(state, network_type);
}

/// Setzt das Optimierungsziel.
pub fn set_optimize_for(state: &mut AppState, optimize_for: OptimizeFor) {
    use_cases::route_options::set_optimize_for(state, optimize_for);
}

/// Übernimmt den Text des Geschwindigkeitsfeldes.
pub fn set_average_speed_input(state: &mut AppState, text: String) {
    use_cases::route_options::set_average_speed_input(state, text);
}
