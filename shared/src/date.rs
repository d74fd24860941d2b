//! Display formatting for service timestamps.

use chrono::{DateTime, NaiveDateTime};

/// Render a service `created_at` stamp the way the UI shows it
/// (pt-BR `dd/mm/yyyy hh:mm`).
///
/// The service is expected to send ISO 8601; anything unparseable is
/// displayed verbatim rather than hidden.
pub fn format_created_at(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d/%m/%Y %H:%M").to_string();
    }
    // Some stacks emit naive stamps without an offset.
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%d/%m/%Y %H:%M").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests;
