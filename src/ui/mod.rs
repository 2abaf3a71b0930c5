//! UI-Komponenten: Menü, Bedienpanel, Status-Bar, Input-Handling.

pub mod control_panel;
pub mod format;
pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Tastatur-Shortcuts und Viewport-Input sind in eigene Module ausgelagert.
pub mod menu;
pub mod status;

pub use control_panel::render_control_panel;
pub use format::{format_distance_km, format_minutes};
pub use input::InputState;
pub use menu::render_menu;
pub use status::render_status_bar;
