//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::client::{build_query, parse_average_speed};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::MapClicked { point } => vec![AppCommand::ApplyMapClick { point }],
        AppIntent::ClearRequested => vec![AppCommand::ClearSelection],
        AppIntent::RouteSubmitRequested => vec![map_submit(state)],
        AppIntent::NetworkTypeChanged { network_type } => {
            vec![AppCommand::SetNetworkType { network_type }]
        }
        AppIntent::OptimizeForChanged { optimize_for } => {
            vec![AppCommand::SetOptimizeFor { optimize_for }]
        }
        AppIntent::AverageSpeedInputChanged { text } => {
            vec![AppCommand::SetAverageSpeedInput { text }]
        }
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta_px } => vec![AppCommand::PanCamera { delta_px }],
        AppIntent::CameraZoom {
            factor,
            focus_screen,
        } => vec![AppCommand::ZoomCamera {
            factor,
            focus_screen,
        }],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

/// Baut die Anfrage; jede Validierungsverletzung wird zum Reject ohne Netzwerk.
fn map_submit(state: &AppState) -> AppCommand {
    // Auswahl zuerst prüfen, damit fehlende Punkte vor einem Tippfehler gemeldet werden
    let query = match build_query(&state.selection, &state.route_options) {
        Ok(query) => query,
        Err(error) => return AppCommand::RejectRouteRequest { error },
    };
    match parse_average_speed(&state.ui.average_speed_input) {
        Ok(_) => AppCommand::SubmitRoute { query },
        Err(error) => AppCommand::RejectRouteRequest { error },
    }
}
