//! Bedienpanel (linke Seitenleiste): Anfrage-Optionen, Aktionen, Fehler und Ergebnis.

use super::format::{format_distance_km, format_minutes};
use crate::app::{AppIntent, AppState};
use crate::client::RequestPhase;
use crate::core::{NetworkType, OptimizeFor, SelectionPhase};

const ERROR_FILL: egui::Color32 = egui::Color32::from_rgb(254, 226, 226);
const ERROR_TEXT: egui::Color32 = egui::Color32::from_rgb(185, 28, 28);
const RESULT_FILL: egui::Color32 = egui::Color32::from_rgb(219, 234, 254);

/// Rendert das Bedienpanel und gibt erzeugte Events zurück.
pub fn render_control_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("control_panel")
        .default_width(240.0)
        .min_width(200.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Route");
            ui.separator();

            render_selection_hint(ui, state);
            ui.separator();

            render_network_selector(ui, state, &mut events);
            render_optimize_selector(ui, state, &mut events);
            render_speed_input(ui, state, &mut events);

            ui.separator();
            render_actions(ui, state, &mut events);

            ui.add_space(8.0);
            render_outcome(ui, state);
        });

    events
}

fn render_selection_hint(ui: &mut egui::Ui, state: &AppState) {
    let hint = match state.selection.phase() {
        SelectionPhase::Empty => "Click the map to set the start point.",
        SelectionPhase::StartSet => "Click the map to set the end point.",
        SelectionPhase::BothSet => "Ready. Press \"Find route\" or Enter.",
    };
    ui.label(hint);

    if let Some(start) = state.selection.start() {
        ui.small(format!("Start: {:.6}, {:.6}", start.lat(), start.lon()));
    }
    if let Some(end) = state.selection.end() {
        ui.small(format!("End: {:.6}, {:.6}", end.lat(), end.lon()));
    }
}

fn render_network_selector(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let current = state.route_options.network_type;
    let mut selected = current;

    ui.label("Network type:");
    egui::ComboBox::from_id_salt("network_type")
        .selected_text(selected.label())
        .show_ui(ui, |ui| {
            for network_type in NetworkType::ALL {
                ui.selectable_value(&mut selected, network_type, network_type.label());
            }
        });

    if selected != current {
        events.push(AppIntent::NetworkTypeChanged {
            network_type: selected,
        });
    }
}

fn render_optimize_selector(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let current = state.route_options.optimize_for;
    let mut selected = current;

    ui.label("Optimize for:");
    ui.horizontal(|ui| {
        for optimize_for in OptimizeFor::ALL {
            ui.radio_value(&mut selected, optimize_for, optimize_for.label());
        }
    });

    if selected != current {
        events.push(AppIntent::OptimizeForChanged {
            optimize_for: selected,
        });
    }
}

fn render_speed_input(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.label("Average speed (km/h, optional):");

    let mut text = state.ui.average_speed_input.clone();
    let hint = format!(
        "default {:.0}",
        state.route_options.network_type.default_speed_kmh()
    );
    let mut edit = egui::TextEdit::singleline(&mut text).hint_text(hint);
    if state.ui.average_speed_invalid {
        edit = edit.text_color(ERROR_TEXT);
    }
    if ui.add(edit).changed() {
        events.push(AppIntent::AverageSpeedInputChanged { text });
    }

    if state.ui.average_speed_invalid {
        ui.colored_label(ERROR_TEXT, "Enter a positive number.");
    }
}

fn render_actions(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.horizontal(|ui| {
        // Auch während Loading aktiv: eine neue Anfrage macht die laufende veraltet
        if ui.button("Find route").clicked() {
            events.push(AppIntent::RouteSubmitRequested);
        }

        let has_anything = state.selection.phase() != SelectionPhase::Empty
            || state.request.phase() != RequestPhase::Idle;
        if ui
            .add_enabled(has_anything, egui::Button::new("Clear"))
            .clicked()
        {
            events.push(AppIntent::ClearRequested);
        }
    });
}

fn render_outcome(ui: &mut egui::Ui, state: &AppState) {
    match state.request.phase() {
        RequestPhase::Idle => {}
        RequestPhase::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Calculating...");
            });
        }
        RequestPhase::Failed => {
            if let Some(error) = state.request.last_error() {
                egui::Frame::NONE
                    .fill(ERROR_FILL)
                    .corner_radius(egui::CornerRadius::same(4))
                    .inner_margin(egui::Margin::same(8))
                    .show(ui, |ui| {
                        ui.colored_label(ERROR_TEXT, error.to_string());
                    });
            }
        }
        RequestPhase::Success => {
            if let Some(result) = state.request.result() {
                egui::Frame::NONE
                    .fill(RESULT_FILL)
                    .corner_radius(egui::CornerRadius::same(4))
                    .inner_margin(egui::Margin::same(8))
                    .show(ui, |ui| {
                        egui::Grid::new("route_result").num_columns(2).show(ui, |ui| {
                            ui.strong("Distance:");
                            ui.label(format_distance_km(result.total_length_meters()));
                            ui.end_row();

                            ui.strong("Time:");
                            ui.label(format_minutes(result.total_time_minutes()));
                            ui.end_row();

                            ui.strong("Segments:");
                            ui.label(result.segments().len().to_string());
                            ui.end_row();
                        });

                        let affected = result.affected_segment_count();
                        if affected > 0 {
                            ui.small(format!(
                                "{affected} segment(s) with conditions. Hover the orange line for details."
                            ));
                        }
                    });
            }
        }
    }
}
