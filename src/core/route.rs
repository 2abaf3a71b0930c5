//! Routen-Domänentypen: Segmente, Bedingungen, Gesamtergebnis und Anfrage-Optionen.

use super::GeoPoint;

/// Verkehrsnetz, auf dem der Pathfinder routet (Pfad-Diskriminator der Anfrage).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NetworkType {
    /// Straßennetz für Autos
    #[default]
    Drive,
    /// Radwege
    Bike,
    /// Fußwege
    Walk,
    /// Alle Wege
    All,
}

impl NetworkType {
    /// Alle Varianten in Anzeige-Reihenfolge.
    pub const ALL: [NetworkType; 4] = [Self::Drive, Self::Bike, Self::Walk, Self::All];

    /// Pfadsegment der Anfrage-URL.
    pub fn as_path(&self) -> &'static str {
        match self {
            Self::Drive => "drive",
            Self::Bike => "bike",
            Self::Walk => "walk",
            Self::All => "all",
        }
    }

    /// Anzeigename für die UI.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Drive => "Car",
            Self::Bike => "Bicycle",
            Self::Walk => "Walking",
            Self::All => "All",
        }
    }

    /// Standard-Durchschnittsgeschwindigkeit (km/h), falls der Dienst keine Zeit liefert.
    pub fn default_speed_kmh(&self) -> f64 {
        match self {
            Self::Drive => 50.0,
            Self::Bike => 15.0,
            Self::Walk => 5.0,
            Self::All => 10.0,
        }
    }
}

/// Optimierungsziel der Routenberechnung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptimizeFor {
    /// Kürzeste Strecke
    #[default]
    Length,
    /// Schnellste Strecke
    Time,
}

impl OptimizeFor {
    /// Alle Varianten in Anzeige-Reihenfolge.
    pub const ALL: [OptimizeFor; 2] = [Self::Length, Self::Time];

    /// Wert des Query-Parameters `optimize_for`.
    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Time => "time",
        }
    }

    /// Anzeigename für die UI.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Length => "Distance (shortest)",
            Self::Time => "Time (fastest)",
        }
    }
}

/// Vom Benutzer gewählte Anfrage-Modifikatoren.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouteOptions {
    /// Verkehrsnetz
    pub network_type: NetworkType,
    /// Optimierungsziel
    pub optimize_for: OptimizeFor,
    /// Optionale Durchschnittsgeschwindigkeit; `None` wird gar nicht gesendet
    pub average_speed_kmh: Option<f64>,
}

/// Auf ein Segment angewendete Bedingung (z.B. Sperrung, Hinweis).
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedCondition {
    /// Beschreibung für das Info-Popup
    pub description: String,
}

/// Zusammenhängendes Stück der Routengeometrie.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSegment {
    /// Koordinaten in Fahrtrichtung (mindestens eine)
    pub coordinates: Vec<GeoPoint>,
    /// Optionale Bedingung dieses Segments
    pub applied_condition: Option<AppliedCondition>,
}

impl RouteSegment {
    /// Erster Punkt des Segments.
    pub fn first_point(&self) -> Option<GeoPoint> {
        self.coordinates.first().copied()
    }

    /// Letzter Punkt des Segments.
    pub fn last_point(&self) -> Option<GeoPoint> {
        self.coordinates.last().copied()
    }
}

/// Validiertes Ergebnis einer Routenanfrage.
///
/// Wird ausschließlich an der Netzwerkgrenze (`client::response`) erzeugt:
/// `segments` ist nie leer, beide Summen sind endlich und nicht negativ.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    pub(crate) segments: Vec<RouteSegment>,
    pub(crate) total_length_meters: f64,
    pub(crate) total_time_minutes: f64,
}

impl RouteResult {
    /// Segmente in Reihenfolge der Antwort.
    pub fn segments(&self) -> &[RouteSegment] {
        &self.segments
    }

    /// Gesamtlänge in Metern.
    pub fn total_length_meters(&self) -> f64 {
        self.total_length_meters
    }

    /// Geschätzte Fahrzeit in Minuten.
    pub fn total_time_minutes(&self) -> f64 {
        self.total_time_minutes
    }

    /// Anfangspunkt des Pfads (erster Punkt des ersten Segments).
    pub fn path_start(&self) -> Option<GeoPoint> {
        self.segments.first().and_then(RouteSegment::first_point)
    }

    /// Endpunkt des Pfads (letzter Punkt des letzten Segments).
    pub fn path_end(&self) -> Option<GeoPoint> {
        self.segments.last().and_then(RouteSegment::last_point)
    }

    /// Anzahl der Segmente mit angewendeter Bedingung.
    pub fn affected_segment_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| s.applied_condition.is_some())
            .count()
    }
}
