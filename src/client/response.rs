//! Validierung und Klassifizierung der Pathfinder-Antworten.
//!
//! Die JSON-Antwort wird hier gegen das erwartete Schema geprüft; fehlerhafte
//! Bodies werden zu [`RouteError::Api`], damit der Render-Code nur
//! gültige [`RouteResult`]s sieht.

use super::error::{RouteError, NO_PATH_FOUND_MESSAGE};
use super::query::RouteQuery;
use super::transport::HttpReply;
use crate::core::{AppliedCondition, GeoPoint, RouteResult, RouteSegment};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
struct WireCondition {
    description: String,
}

#[derive(Deserialize, Debug)]
struct WireSegment {
    coordinates: Vec<GeoPoint>,
    #[serde(default)]
    applied_condition: Option<WireCondition>,
}

/// Erfolgs-Body des Pathfinders. Alle Felder optional, geprüft wird danach.
#[derive(Deserialize, Debug)]
struct PathfinderBody {
    path_segments: Option<Vec<WireSegment>>,
    // Ältere Dienst-Variante: flache Koordinatenliste ohne Segmente
    path_coordinates: Option<Vec<GeoPoint>>,
    total_length_meters: Option<f64>,
    total_time_minutes: Option<f64>,
    error: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ErrorBody {
    error: Option<String>,
}

/// Ordnet eine HTTP-Antwort einem Ergebnis oder Fehler zu.
pub fn classify(reply: &HttpReply, query: &RouteQuery) -> Result<RouteResult, RouteError> {
    if !reply.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&reply.body)
            .ok()
            .and_then(|body| body.error)
            .filter(|msg| !msg.trim().is_empty())
            .unwrap_or_else(|| status_fallback_message(reply));
        log::debug!("Pathfinder antwortete mit HTTP {}: {}", reply.status, message);
        return Err(RouteError::Api(message));
    }

    let body: PathfinderBody = serde_json::from_str(&reply.body).map_err(|e| {
        log::warn!("Pathfinder-Antwort nicht lesbar: {}. Body: {}", e, reply.body);
        RouteError::Api(format!("Malformed response from routing service: {e}"))
    })?;

    let wire_segments = match (body.path_segments, body.path_coordinates) {
        (Some(segments), _) => segments,
        (None, Some(coordinates)) if !coordinates.is_empty() => vec![WireSegment {
            coordinates,
            applied_condition: None,
        }],
        _ => Vec::new(),
    };

    if wire_segments.is_empty() {
        let message = body
            .error
            .filter(|msg| !msg.trim().is_empty())
            .unwrap_or_else(|| NO_PATH_FOUND_MESSAGE.to_string());
        return Err(RouteError::EmptyResult(message));
    }

    let segments = wire_segments
        .into_iter()
        .enumerate()
        .map(|(index, wire)| convert_segment(index, wire))
        .collect::<Result<Vec<_>, _>>()?;

    let total_length_meters = body
        .total_length_meters
        .filter(|len| len.is_finite() && *len >= 0.0)
        .ok_or_else(|| {
            RouteError::Api(
                "Malformed response from routing service: missing or negative total_length_meters"
                    .to_string(),
            )
        })?;

    let total_time_minutes = match body.total_time_minutes {
        Some(minutes) if minutes.is_finite() && minutes >= 0.0 => minutes,
        Some(minutes) => {
            return Err(RouteError::Api(format!(
                "Malformed response from routing service: invalid total_time_minutes {minutes}"
            )))
        }
        None => {
            let speed = query
                .average_speed_kmh()
                .unwrap_or_else(|| query.network_type().default_speed_kmh());
            estimate_minutes(total_length_meters, speed)
        }
    };

    Ok(RouteResult {
        segments,
        total_length_meters,
        total_time_minutes,
    })
}

fn convert_segment(index: usize, wire: WireSegment) -> Result<RouteSegment, RouteError> {
    if wire.coordinates.is_empty() {
        return Err(RouteError::Api(format!(
            "Malformed response from routing service: segment {index} has no coordinates"
        )));
    }
    if let Some(bad) = wire.coordinates.iter().find(|p| !p.is_valid()) {
        return Err(RouteError::Api(format!(
            "Malformed response from routing service: segment {index} has invalid coordinate ({}, {})",
            bad.lat(),
            bad.lon()
        )));
    }
    Ok(RouteSegment {
        coordinates: wire.coordinates,
        applied_condition: wire.applied_condition.map(|c| AppliedCondition {
            description: c.description,
        }),
    })
}

fn status_fallback_message(reply: &HttpReply) -> String {
    if reply.status_text.trim().is_empty() {
        format!("API error: HTTP {}", reply.status)
    } else {
        format!("API error: {}", reply.status_text)
    }
}

/// Fahrzeit in Minuten aus Länge und Geschwindigkeit, auf 0.1 gerundet.
pub fn estimate_minutes(length_meters: f64, speed_kmh: f64) -> f64 {
    if speed_kmh <= 0.0 {
        return 0.0;
    }
    let meters_per_minute = speed_kmh * 1000.0 / 60.0;
    (length_meters / meters_per_minute * 10.0).round() / 10.0
}
