//! Use-Cases für die Anfrage-Modifikatoren im Bedienpanel.

use crate::app::AppState;
use crate::client::parse_average_speed;
use crate::core::{NetworkType, OptimizeFor};

/// Setzt das Verkehrsnetz.
pub fn set_network_type(state: &mut AppState, network_type: NetworkType) {
    state.route_options.network_type = network_type;
}

/// Setzt das Optimierungsziel.
pub fn set_optimize_for(state: &mut AppState, optimize_for: OptimizeFor) {
    state.route_options.optimize_for = optimize_for;
}

/// Übernimmt den Text des Geschwindigkeitsfeldes.
///
/// Ungültiger Text lässt die Geschwindigkeit weg und markiert das Feld;
/// beim Absenden wird daraus ein Validierungsfehler.
pub fn set_average_speed_input(state: &mut AppState, text: String) {
    match parse_average_speed(&text) {
        Ok(speed) => {
            state.route_options.average_speed_kmh = speed;
            state.ui.average_speed_invalid = false;
        }
        Err(_) => {
            state.route_options.average_speed_kmh = None;
            state.ui.average_speed_invalid = true;
        }
    }
    state.ui.average_speed_input = text;
}
