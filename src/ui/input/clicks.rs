//! Klick-Events: Primärklick auf die Karte.

use super::{screen_pos_to_geo, InputState, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Wandelt einen Primärklick (kein Drag) in `MapClicked` um.
    pub(crate) fn handle_clicks(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.clicked_by(egui::PointerButton::Primary) {
            return;
        }
        if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
            let point = screen_pos_to_geo(pointer_pos, ctx.response, ctx.viewport_size, ctx.camera);
            events.push(AppIntent::MapClicked { point });
        }
    }
}
