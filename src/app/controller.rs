//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::use_cases;
use super::{AppCommand, AppIntent, AppState};
use crate::client::{CompletionDisposition, RouteClient};
use crate::shared::RenderScene;
use std::time::Duration;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
///
/// Besitzt den [`RouteClient`]; Antworten werden ausschließlich über
/// [`AppController::poll_route_responses`] im UI-Thread übernommen.
pub struct AppController {
    client: RouteClient,
}

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new(client: RouteClient) -> Self {
        Self { client }
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Auswahl ===
            AppCommand::ApplyMapClick { point } => handlers::selection::apply_click(state, point),
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === Route ===
            AppCommand::SubmitRoute { query } => {
                handlers::route::submit(state, &self.client, query)
            }
            AppCommand::RejectRouteRequest { error } => handlers::route::reject(state, error),
            AppCommand::SetNetworkType { network_type } => {
                handlers::route::set_network_type(state, network_type)
            }
            AppCommand::SetOptimizeFor { optimize_for } => {
                handlers::route::set_optimize_for(state, optimize_for)
            }
            AppCommand::SetAverageSpeedInput { text } => {
                handlers::route::set_average_speed_input(state, text)
            }

            // === Kamera & Viewport ===
            AppCommand::ResetCamera => handlers::view::reset_camera(state),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta_px } => handlers::view::pan(state, delta_px),
            AppCommand::ZoomCamera {
                factor,
                focus_screen,
            } => handlers::view::zoom_towards(state, factor, focus_screen),

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::session::request_exit(state),
        }

        Ok(())
    }

    /// Übernimmt alle bereits eingetroffenen Routen-Antworten (nicht blockierend).
    pub fn poll_route_responses(&mut self, state: &mut AppState) -> usize {
        use_cases::route_request::poll_responses(state, &self.client)
    }

    /// Wartet höchstens `timeout` auf die nächste Routen-Antwort.
    ///
    /// Für Headless-Abläufe und Tests; die UI nutzt `poll_route_responses`.
    pub fn wait_for_route_response(
        &mut self,
        state: &mut AppState,
        timeout: Duration,
    ) -> Option<CompletionDisposition> {
        let disposition = self.client.wait_next(&mut state.request, timeout);
        if disposition == Some(CompletionDisposition::Applied) {
            state.ui.status_message = None;
        }
        disposition
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
        render_scene::build(state, viewport_size)
    }
}
