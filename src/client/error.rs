//! Fehlertypen der Routenanfrage.
//!
//! Die `Display`-Ausgabe von [`RouteError`] ist gleichzeitig die Meldung,
//! die im Bedienpanel angezeigt wird.

use thiserror::Error;

/// Meldung, wenn der Dienst erfolgreich antwortet, aber keinen Pfad liefert.
pub const NO_PATH_FOUND_MESSAGE: &str = "No path found.";
/// Meldung, wenn der Routing-Dienst nicht erreichbar ist.
pub const CONNECTIVITY_MESSAGE: &str =
    "Could not reach the routing service. Check the connection and try again.";

/// Anfrage kann nicht gebaut werden (vor jeder Netzwerkaktivität erkannt).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please select a start point and a destination on the map.")]
    MissingStart,

    #[error("Please select a destination on the map.")]
    MissingEnd,

    #[error("Coordinate out of range: lat {lat}, lon {lon}")]
    CoordinateOutOfRange { lat: f64, lon: f64 },

    #[error("Average speed must be a positive number of km/h (got {0}).")]
    InvalidAverageSpeed(f64),
}

/// Für den Benutzer sichtbarer Fehler einer Routenanfrage.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// Auswahl/Optionen unvollständig oder ungültig
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Dienst hat geantwortet, aber keinen Pfad gefunden
    #[error("{0}")]
    EmptyResult(String),

    /// Fehlerstatus oder fehlerhafte Antwort des Dienstes
    #[error("{0}")]
    Api(String),

    /// Dienst nicht erreichbar
    #[error("{0}")]
    Transport(String),
}

impl RouteError {
    /// Kurzname der Fehlerklasse (für Logs und Status-Bar).
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::EmptyResult(_) => "empty-result",
            Self::Api(_) => "api",
            Self::Transport(_) => "transport",
        }
    }
}
