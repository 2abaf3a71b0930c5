//! HTTP-Transport zum Pathfinder-Dienst.

use reqwest::blocking::Client;
use std::time::Duration;
use thiserror::Error;

/// Rohantwort des Dienstes (Status + Body), vor jeder Interpretation.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    /// HTTP-Statuscode
    pub status: u16,
    /// Status-Text (z.B. "Not Found"), leer wenn unbekannt
    pub status_text: String,
    /// Body als Text
    pub body: String,
}

impl HttpReply {
    /// Gibt `true` bei 2xx zurück.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Dienst war nicht erreichbar oder die Antwort konnte nicht gelesen werden.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Underlying request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Transport unavailable: {0}")]
    Unavailable(String),
}

/// Führt eine GET-Anfrage aus. Wird aus Worker-Threads aufgerufen.
pub trait RouteTransport: Send + Sync {
    /// Sendet `GET url` und liefert Status und Body.
    fn get(&self, url: &str) -> Result<HttpReply, TransportError>;
}

/// Blockierender reqwest-Transport.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Erstellt den Transport mit Gesamt-Timeout pro Anfrage.
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("pequod-route-viewer/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl RouteTransport for HttpTransport {
    fn get(&self, url: &str) -> Result<HttpReply, TransportError> {
        log::debug!("[TRANSPORT] GET {}", url);
        let response = self.client.get(url).send()?;
        let status = response.status();
        let body = response.text()?;
        Ok(HttpReply {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}
