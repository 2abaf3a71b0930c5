//! Aufbau der Pathfinder-Anfrage aus Auswahl und Optionen.

use super::error::ValidationError;
use crate::core::{GeoPoint, NetworkType, OptimizeFor, RouteOptions, Selection};

/// Nachkommastellen für Koordinaten (7 ≈ 1 cm, reicht für Meter-Auflösung).
pub const COORDINATE_DECIMALS: usize = 7;

/// Fertig validierte Anfrage an den Pathfinder.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteQuery {
    network_type: NetworkType,
    start: GeoPoint,
    end: GeoPoint,
    optimize_for: OptimizeFor,
    average_speed_kmh: Option<f64>,
}

impl RouteQuery {
    /// Verkehrsnetz (Pfad-Diskriminator)
    pub fn network_type(&self) -> NetworkType {
        self.network_type
    }

    /// Startpunkt
    pub fn start(&self) -> GeoPoint {
        self.start
    }

    /// Zielpunkt
    pub fn end(&self) -> GeoPoint {
        self.end
    }

    /// Optimierungsziel
    pub fn optimize_for(&self) -> OptimizeFor {
        self.optimize_for
    }

    /// Optionale Durchschnittsgeschwindigkeit
    pub fn average_speed_kmh(&self) -> Option<f64> {
        self.average_speed_kmh
    }

    /// Query-Parameter in Sende-Reihenfolge.
    ///
    /// Zahlen werden als einfacher Dezimaltext mit `.` ausgegeben,
    /// `average_speed_kmh` fehlt ganz, wenn nicht gesetzt.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("start_lat", format_coordinate(self.start.lat())),
            ("start_lon", format_coordinate(self.start.lon())),
            ("end_lat", format_coordinate(self.end.lat())),
            ("end_lon", format_coordinate(self.end.lon())),
            ("optimize_for", self.optimize_for.as_param().to_string()),
        ];
        if let Some(speed) = self.average_speed_kmh {
            pairs.push(("average_speed_kmh", speed.to_string()));
        }
        pairs
    }

    /// Vollständige GET-URL: `{base}/pathfinder/{netz}/?{parameter}`.
    pub fn to_url(&self, base_url: &str) -> String {
        let query = self
            .query_pairs()
            .into_iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");
        format!(
            "{}/pathfinder/{}/?{}",
            base_url.trim_end_matches('/'),
            self.network_type.as_path(),
            query
        )
    }
}

fn format_coordinate(value: f64) -> String {
    format!("{value:.prec$}", prec = COORDINATE_DECIMALS)
}

/// Baut eine Anfrage aus Auswahl und Optionen.
///
/// Schlägt fehl, bevor irgendeine Netzwerkaktivität stattfindet, wenn Start
/// oder Ziel fehlen, eine Koordinate außerhalb von WGS84 liegt oder die
/// Geschwindigkeit nicht positiv ist.
pub fn build_query(
    selection: &Selection,
    options: &RouteOptions,
) -> Result<RouteQuery, ValidationError> {
    let start = selection.start().ok_or(ValidationError::MissingStart)?;
    let end = selection.end().ok_or(ValidationError::MissingEnd)?;

    for point in [start, end] {
        if !point.is_valid() {
            return Err(ValidationError::CoordinateOutOfRange {
                lat: point.lat(),
                lon: point.lon(),
            });
        }
    }

    if let Some(speed) = options.average_speed_kmh {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(ValidationError::InvalidAverageSpeed(speed));
        }
    }

    Ok(RouteQuery {
        network_type: options.network_type,
        start,
        end,
        optimize_for: options.optimize_for,
        average_speed_kmh: options.average_speed_kmh,
    })
}

/// Interpretiert die Eingabe des Geschwindigkeitsfeldes.
///
/// Leer → `Ok(None)`, positive Zahl → `Ok(Some(v))`, sonst `Err` mit dem geparsten
/// Wert (bzw. NaN bei nicht-numerischem Text).
pub fn parse_average_speed(text: &str) -> Result<Option<f64>, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value = trimmed
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidAverageSpeed(f64::NAN))?;
    if value.is_finite() && value > 0.0 {
        Ok(Some(value))
    } else {
        Err(ValidationError::InvalidAverageSpeed(value))
    }
}
