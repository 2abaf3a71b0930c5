//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::client::RequestPhase;
use crate::core::GeoPoint;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState, cursor: Option<GeoPoint>) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let phase = match state.request.phase() {
                RequestPhase::Idle => "Idle",
                RequestPhase::Loading => "Loading",
                RequestPhase::Success => "Route found",
                RequestPhase::Failed => "Failed",
            };
            ui.label(format!(
                "Request: {} (#{})",
                phase,
                state.request.request_id()
            ));

            ui.separator();

            ui.label(format!(
                "Network: {} | Optimize: {}",
                state.route_options.network_type.label(),
                state.route_options.optimize_for.label()
            ));

            ui.separator();

            ui.label(format!("Zoom: {:.1}", state.view.camera.zoom));

            if let Some(cursor) = cursor {
                ui.separator();
                ui.label(format!("Cursor: {:.6}, {:.6}", cursor.lat(), cursor.lon()));
            }

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(msg);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(&state.options.api_base_url);
            });
        });
    });
}
