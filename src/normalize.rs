//! Text and date normalization.
//!
//! Upstream spreadsheets are loosely formatted: dates come as ISO timestamps,
//! plain ISO days or `D/M/YYYY` strings, and the same logical column has gone
//! by several names over time. Everything here is a pure function.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::Turno;

static ISO_DATE_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\d{4}-\d{2}-\d{2}t").expect("valid regex"));
static ISO_DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));
static DAY_MONTH_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}[/-]\d{1,2}[/-]\d{2,4}$").expect("valid regex"));

/// Column names that have carried the appointment date, in priority order.
///
/// Compatibility shim for older sheets; the ISO field always wins when present.
pub const APPOINTMENT_DATE_FIELDS: [&str; 4] =
    ["fecha_turno", "fechaTurno", "Fecha turno", "fecha turno"];

/// Placeholder shown for missing dates.
pub const MISSING_DATE_PLACEHOLDER: &str = "—";

/// Lowercase and trim.
pub fn normalize_text(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Whether the value has the shape of a date.
///
/// Accepts `YYYY-MM-DDT...` (separator in either case), `YYYY-MM-DD`, and
/// day/month/year with `/` or `-`, 1-2 digit day and month, 2-4 digit year.
pub fn looks_like_date(value: Option<&str>) -> bool {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return false;
    };
    ISO_DATE_TIME.is_match(value) || ISO_DATE.is_match(value) || DAY_MONTH_YEAR.is_match(value)
}

/// Whether a request already has an appointment date.
pub fn has_date_assigned(turno: &Turno) -> bool {
    if let Some(iso) = turno.fecha_turno_iso.as_deref() {
        if !iso.is_empty() {
            return looks_like_date(Some(iso));
        }
    }

    let raw = APPOINTMENT_DATE_FIELDS
        .iter()
        .find_map(|name| turno.raw_field(name));
    looks_like_date(raw.as_deref())
}

/// Portion of an ISO timestamp before the `T` separator.
pub fn iso_date_part(iso: &str) -> &str {
    let iso = iso.trim();
    iso.split(['T', 't']).next().unwrap_or(iso)
}

/// Parse `YYYY-MM-DD`, tolerating missing zero padding.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// `DD/MM/YYYY` for display, or the placeholder for missing values.
///
/// Values that do not parse are shown unchanged.
pub fn format_display_date(value: Option<&str>) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => MISSING_DATE_PLACEHOLDER.to_string(),
        Some(raw) => parse_calendar_date(iso_date_part(raw))
            .map(|date| date.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|| raw.to_string()),
    }
}
