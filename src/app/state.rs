//! Application State: zentrale Datenhaltung.

use super::CommandLog;
use crate::client::RequestState;
use crate::core::{MapCamera, RouteOptions, Selection};
use crate::shared::ClientOptions;

/// Kamera- und Viewport-Zustand
#[derive(Clone)]
pub struct ViewState {
    /// Karten-Kamera
    pub camera: MapCamera,
    /// Aktuelle Viewport-Größe in Pixeln
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den View-Zustand in Startposition.
    pub fn new(options: &ClientOptions) -> Self {
        Self {
            camera: options.initial_camera(),
            viewport_size: [0.0, 0.0],
        }
    }
}

/// UI-bezogener Zustand (Eingabefelder, Status-Text)
#[derive(Clone, Default)]
pub struct UiState {
    /// Rohtext des Geschwindigkeitsfeldes
    pub average_speed_input: String,
    /// `true`, wenn der Text keine positive Zahl ist
    pub average_speed_invalid: bool,
    /// Optionale Statusnachricht (z.B. letzte Aktion)
    pub status_message: Option<String>,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Start/Ziel-Auswahl
    pub selection: Selection,
    /// Lade-/Fehler-/Ergebniszustand der Routenanfrage
    pub request: RequestState,
    /// Netz, Optimierungsziel, Geschwindigkeit
    pub route_options: RouteOptions,
    /// View-Zustand
    pub view: ViewState,
    /// UI-Zustand
    pub ui: UiState,
    /// Laufzeit-Optionen
    pub options: ClientOptions,
    /// Protokoll ausgeführter Commands
    pub command_log: CommandLog,
    /// Signal zum Beenden der Anwendung
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(ClientOptions::default())
    }

    /// Erstellt einen App-State mit den übergebenen Optionen.
    pub fn with_options(options: ClientOptions) -> Self {
        Self {
            selection: Selection::new(),
            request: RequestState::new(),
            route_options: RouteOptions::default(),
            view: ViewState::new(&options),
            ui: UiState::default(),
            options,
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
