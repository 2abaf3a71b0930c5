use super::*;

fn collect_with_key(key: egui::Key) -> Vec<AppIntent> {
    let ctx = egui::Context::default();
    let mut raw_input = egui::RawInput::default();
    raw_input.events.push(egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers: egui::Modifiers::default(),
    });

    let mut events = Vec::new();
    let _ = ctx.run(raw_input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            events = collect_keyboard_intents(ui);
        });
    });

    events
}

#[test]
fn enter_submits_route() {
    let events = collect_with_key(egui::Key::Enter);

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::RouteSubmitRequested)));
}

#[test]
fn escape_clears_selection() {
    let events = collect_with_key(egui::Key::Escape);

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::ClearRequested)));
}

#[test]
fn plus_and_minus_zoom() {
    assert!(collect_with_key(egui::Key::Plus)
        .iter()
        .any(|event| matches!(event, AppIntent::ZoomInRequested)));
    assert!(collect_with_key(egui::Key::Minus)
        .iter()
        .any(|event| matches!(event, AppIntent::ZoomOutRequested)));
}

#[test]
fn unrelated_key_emits_nothing() {
    assert!(collect_with_key(egui::Key::Q).is_empty());
}
