//! Client für den Pequod-Pathfinder: Anfrage bauen, senden, Antwort klassifizieren.
//!
//! Jede Anfrage läuft in einem eigenen Worker-Thread; das Ergebnis kommt über
//! einen Kanal zurück und wird im UI-Thread per [`RouteClient::poll`] auf den
//! [`RequestState`] angewendet. Veraltete Antworten verwirft der `RequestState`.

pub mod error;
pub mod query;
pub mod request_state;
pub mod response;
pub mod transport;

pub use error::{RouteError, ValidationError, CONNECTIVITY_MESSAGE, NO_PATH_FOUND_MESSAGE};
pub use query::{build_query, parse_average_speed, RouteQuery};
pub use request_state::{CompletionDisposition, RequestPhase, RequestState};
pub use transport::{HttpReply, HttpTransport, RouteTransport, TransportError};

use crate::core::RouteResult;
use crate::shared::ClientOptions;
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;

/// Abgeschlossene Anfrage, wie sie vom Worker-Thread zurückkommt.
#[derive(Debug)]
pub struct RouteCompletion {
    /// Beim Absenden erfasste Anfrage-ID
    pub request_id: u64,
    /// Ergebnis oder sichtbarer Fehler
    pub outcome: Result<RouteResult, RouteError>,
}

/// Callback zum Aufwecken der UI, sobald eine Antwort eingetroffen ist.
pub type Waker = Arc<dyn Fn() + Send + Sync>;

/// Sendet Routenanfragen und sammelt deren Antworten ein.
pub struct RouteClient {
    transport: Arc<dyn RouteTransport>,
    base_url: String,
    sender: Sender<RouteCompletion>,
    receiver: Receiver<RouteCompletion>,
    waker: Option<Waker>,
}

impl RouteClient {
    /// Erstellt einen Client mit beliebigem Transport.
    pub fn new(transport: Arc<dyn RouteTransport>, base_url: impl Into<String>) -> Self {
        let (sender, receiver) = crossbeam_channel::unbounded();
        Self {
            transport,
            base_url: base_url.into(),
            sender,
            receiver,
            waker: None,
        }
    }

    /// Erstellt einen HTTP-Client aus den Laufzeit-Optionen.
    pub fn from_options(options: &ClientOptions) -> anyhow::Result<Self> {
        let transport = HttpTransport::new(Duration::from_secs(options.request_timeout_secs))?;
        log::info!("Pathfinder-Endpunkt: {}", options.api_base_url);
        Ok(Self::new(Arc::new(transport), options.api_base_url.clone()))
    }

    /// Setzt den Callback, der nach jeder eingetroffenen Antwort aufgerufen wird.
    pub fn set_waker(&mut self, waker: impl Fn() + Send + Sync + 'static) {
        self.waker = Some(Arc::new(waker));
    }

    /// Startet eine Anfrage: `Loading` setzen, ID erhöhen, GET im Worker-Thread.
    ///
    /// Gibt die ID der gestarteten Anfrage zurück.
    pub fn submit(&self, state: &mut RequestState, query: RouteQuery) -> u64 {
        let request_id = state.begin();
        let url = query.to_url(&self.base_url);
        log::debug!("Routenanfrage {} gestartet: {}", request_id, url);

        let transport = Arc::clone(&self.transport);
        let sender = self.sender.clone();
        let waker = self.waker.clone();

        let spawned = std::thread::Builder::new()
            .name(format!("route-request-{request_id}"))
            .spawn(move || {
                let outcome = fetch_route(transport.as_ref(), &url, &query);
                if sender.send(RouteCompletion { request_id, outcome }).is_err() {
                    log::debug!("Antwort {} ohne Empfänger (Client beendet)", request_id);
                    return;
                }
                if let Some(waker) = waker {
                    waker();
                }
            });

        if let Err(e) = spawned {
            log::error!("Worker-Thread für Anfrage {} nicht startbar: {}", request_id, e);
            state.complete(
                request_id,
                Err(RouteError::Transport(CONNECTIVITY_MESSAGE.to_string())),
            );
        }

        request_id
    }

    /// Wendet alle bereits eingetroffenen Antworten an (nicht blockierend).
    ///
    /// Gibt die Anzahl der übernommenen (nicht veralteten) Antworten zurück.
    pub fn poll(&self, state: &mut RequestState) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.receiver.try_recv() {
            if apply(state, completion) == CompletionDisposition::Applied {
                applied += 1;
            }
        }
        applied
    }

    /// Wartet höchstens `timeout` auf die nächste Antwort und wendet sie an.
    ///
    /// Gibt `None` zurück, wenn keine Antwort eintraf.
    pub fn wait_next(
        &self,
        state: &mut RequestState,
        timeout: Duration,
    ) -> Option<CompletionDisposition> {
        match self.receiver.recv_timeout(timeout) {
            Ok(completion) => Some(apply(state, completion)),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => None,
        }
    }
}

fn apply(state: &mut RequestState, completion: RouteCompletion) -> CompletionDisposition {
    state.complete(completion.request_id, completion.outcome)
}

fn fetch_route(
    transport: &dyn RouteTransport,
    url: &str,
    query: &RouteQuery,
) -> Result<RouteResult, RouteError> {
    let reply = transport.get(url).map_err(|e| {
        log::warn!("Pathfinder nicht erreichbar ({}): {}", url, e);
        RouteError::Transport(CONNECTIVITY_MESSAGE.to_string())
    })?;
    response::classify(&reply, query)
}
