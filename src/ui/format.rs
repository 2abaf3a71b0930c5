//! Anzeigeformate für Routen-Kennzahlen.

/// Meter → Kilometer mit zwei Nachkommastellen ("4.20 km").
pub fn format_distance_km(length_meters: f64) -> String {
    format!("{:.2} km", length_meters / 1000.0)
}

/// Minuten mit einer Nachkommastelle ("8.1 minutes").
pub fn format_minutes(minutes: f64) -> String {
    format!("{minutes:.1} minutes")
}
