//! Handler für die Start/Ziel-Auswahl.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::GeoPoint;

/// Wendet einen Kartenklick an.
pub fn apply_click(state: &mut AppState, point: GeoPoint) {
    use_cases::selection::apply_click(state, point);
}

/// Leert Auswahl und Route.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear(state);
}
