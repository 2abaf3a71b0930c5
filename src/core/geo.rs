//! Geografische Koordinate (WGS84, Dezimalgrad).

use serde::Deserialize;

/// Unveränderlicher Kartenpunkt in Dezimalgrad.
///
/// Felder sind privat: ein einmal erzeugter Punkt wird nie verändert,
/// sondern höchstens durch einen neuen ersetzt.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    /// Gültiger Breitengrad-Bereich.
    pub const LAT_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;
    /// Gültiger Längengrad-Bereich.
    pub const LON_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

    /// Erstellt einen Punkt aus Breiten- und Längengrad.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Breitengrad
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Längengrad
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Gibt `true` zurück, wenn beide Komponenten endlich und im WGS84-Bereich liegen.
    pub fn is_valid(&self) -> bool {
        Self::LAT_RANGE.contains(&self.lat) && Self::LON_RANGE.contains(&self.lon)
    }

    /// Vergleicht zwei Punkte mit Toleranz in Grad.
    pub fn approx_eq(&self, other: &GeoPoint, epsilon_deg: f64) -> bool {
        (self.lat - other.lat).abs() <= epsilon_deg && (self.lon - other.lon).abs() <= epsilon_deg
    }
}
