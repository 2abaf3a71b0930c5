//! Zustand der Routenanfrage mit Schutz gegen veraltete Antworten.

use super::error::{RouteError, ValidationError};
use crate::core::RouteResult;
use std::sync::Arc;

/// Phase der Routenanfrage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestPhase {
    /// Keine Anfrage / zurückgesetzt
    #[default]
    Idle,
    /// Anfrage unterwegs
    Loading,
    /// Route liegt vor
    Success,
    /// Fehler liegt vor
    Failed,
}

/// Was mit einer eingetroffenen Antwort passiert ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionDisposition {
    /// Antwort gehört zur aktuellen Anfrage und wurde übernommen
    Applied,
    /// Antwort ist veraltet (neuere Anfrage oder Reset dazwischen) und wurde verworfen
    Stale,
}

/// Lade-/Fehler-/Ergebniszustand der Routenanfrage.
///
/// `request_id` steigt bei jedem `begin`, `reject` und `reset`. Eine Antwort
/// wird nur übernommen, wenn ihre beim Absenden erfasste ID noch aktuell ist.
#[derive(Debug, Clone, Default)]
pub struct RequestState {
    phase: RequestPhase,
    last_error: Option<RouteError>,
    result: Option<Arc<RouteResult>>,
    request_id: u64,
}

impl RequestState {
    /// Erstellt einen Zustand in `Idle`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktuelle Phase
    pub fn phase(&self) -> RequestPhase {
        self.phase
    }

    /// Letzter sichtbarer Fehler
    pub fn last_error(&self) -> Option<&RouteError> {
        self.last_error.as_ref()
    }

    /// Aktuelles Ergebnis (Arc für O(1)-Clone in die RenderScene)
    pub fn result(&self) -> Option<&Arc<RouteResult>> {
        self.result.as_ref()
    }

    /// Aktueller Zählerstand
    pub fn request_id(&self) -> u64 {
        self.request_id
    }

    /// Gibt `true` zurück, solange eine Anfrage läuft.
    pub fn is_loading(&self) -> bool {
        self.phase == RequestPhase::Loading
    }

    /// Startet eine neue Anfrage und liefert deren ID.
    pub fn begin(&mut self) -> u64 {
        self.request_id += 1;
        self.phase = RequestPhase::Loading;
        self.last_error = None;
        self.result = None;
        self.request_id
    }

    /// Übernimmt eine Antwort, sofern `request_id` noch aktuell ist.
    pub fn complete(
        &mut self,
        request_id: u64,
        outcome: Result<RouteResult, RouteError>,
    ) -> CompletionDisposition {
        if request_id != self.request_id || self.phase != RequestPhase::Loading {
            log::debug!(
                "Veraltete Antwort verworfen (Anfrage {}, aktuell {})",
                request_id,
                self.request_id
            );
            return CompletionDisposition::Stale;
        }

        match outcome {
            Ok(result) => {
                self.phase = RequestPhase::Success;
                self.result = Some(Arc::new(result));
                self.last_error = None;
            }
            Err(error) => {
                log::info!("Routenanfrage {} fehlgeschlagen ({}): {}", request_id, error.kind(), error);
                self.phase = RequestPhase::Failed;
                self.result = None;
                self.last_error = Some(error);
            }
        }
        CompletionDisposition::Applied
    }

    /// Meldet einen Validierungsfehler ohne Netzwerkaktivität.
    ///
    /// Invalidiert zugleich eventuell laufende Anfragen.
    pub fn reject(&mut self, error: ValidationError) {
        self.request_id += 1;
        self.phase = RequestPhase::Failed;
        self.result = None;
        self.last_error = Some(RouteError::Validation(error));
    }

    /// Zurück auf `Idle`; laufende Anfragen werden dadurch veraltet.
    pub fn reset(&mut self) {
        self.request_id += 1;
        self.phase = RequestPhase::Idle;
        self.result = None;
        self.last_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GeoPoint, RouteSegment};

    fn result(length: f64) -> RouteResult {
        RouteResult {
            segments: vec![RouteSegment {
                coordinates: vec![GeoPoint::new(0.0, 0.0)],
                applied_condition: None,
            }],
            total_length_meters: length,
            total_time_minutes: 1.0,
        }
    }

    #[test]
    fn begin_clears_previous_outcome_and_increments_id() {
        let mut state = RequestState::new();
        let first = state.begin();
        state.complete(first, Err(RouteError::Api("boom".into())));
        assert_eq!(state.phase(), RequestPhase::Failed);

        let second = state.begin();
        assert_eq!(second, first + 1);
        assert!(state.is_loading());
        assert!(state.last_error().is_none());
        assert!(state.result().is_none());
    }

    #[test]
    fn late_response_of_superseded_request_is_discarded() {
        let mut state = RequestState::new();
        let a = state.begin();
        let b = state.begin();

        assert_eq!(state.complete(b, Ok(result(2.0))), CompletionDisposition::Applied);
        assert_eq!(state.complete(a, Ok(result(1.0))), CompletionDisposition::Stale);

        assert_eq!(state.phase(), RequestPhase::Success);
        assert_eq!(state.result().map(|r| r.total_length_meters()), Some(2.0));
    }

    #[test]
    fn response_after_reset_is_discarded() {
        let mut state = RequestState::new();
        let a = state.begin();
        state.reset();

        assert_eq!(
            state.complete(a, Err(RouteError::Transport("offline".into()))),
            CompletionDisposition::Stale
        );
        assert_eq!(state.phase(), RequestPhase::Idle);
        assert!(state.last_error().is_none());
    }

    #[test]
    fn reject_sets_validation_error_and_invalidates_in_flight() {
        let mut state = RequestState::new();
        let a = state.begin();
        state.reject(ValidationError::MissingEnd);

        assert_eq!(state.phase(), RequestPhase::Failed);
        assert!(matches!(state.last_error(), Some(RouteError::Validation(_))));
        assert_eq!(state.complete(a, Ok(result(1.0))), CompletionDisposition::Stale);
        assert!(state.result().is_none());
    }
}
