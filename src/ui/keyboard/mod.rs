//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tasten und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// Enter sendet die Anfrage, Escape leert die Auswahl, `+`/`-` zoomen.
/// Solange ein Textfeld fokussiert ist, gilt nur Enter.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (enter, escape, plus, minus) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::Enter),
            i.key_pressed(egui::Key::Escape),
            i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals),
            i.key_pressed(egui::Key::Minus),
        )
    });

    if enter {
        events.push(AppIntent::RouteSubmitRequested);
    }

    if ui.ctx().wants_keyboard_input() {
        return events;
    }

    if escape {
        events.push(AppIntent::ClearRequested);
    }
    if plus {
        events.push(AppIntent::ZoomInRequested);
    }
    if minus {
        events.push(AppIntent::ZoomOutRequested);
    }

    events
}

#[cfg(test)]
mod tests;
