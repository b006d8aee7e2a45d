use chrono::{DateTime, NaiveDateTime};

use super::error::AnnotateError;
use super::types::{AgendaItem, Appointment, Locale};

/// Timestamp formats the backend has been seen emitting, tried in order.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parses a backend timestamp into the wall-clock fields it encodes.
///
/// RFC 3339 strings keep the clock fields as written; the offset is not
/// re-projected into another zone. Ordering and window membership both
/// work on the value this returns.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_local());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

/// Normalizes one appointment for display.
///
/// Pure and deterministic given `(appointment, service_name, locale)`.
/// The labels are "HH:MM" for the times and the locale's long date form
/// for the start date.
pub fn annotate(
    appointment: &Appointment,
    service_name: Option<String>,
    locale: Locale,
) -> Result<AgendaItem, AnnotateError> {
    let start_at = parse_timestamp(&appointment.start_time)
        .ok_or_else(|| AnnotateError::BadStartTime(appointment.start_time.clone()))?;
    let end_at = parse_timestamp(&appointment.end_time)
        .ok_or_else(|| AnnotateError::BadEndTime(appointment.end_time.clone()))?;

    let date_label = start_at
        .date()
        .format_localized(locale.long_date_format(), locale.chrono_locale())
        .to_string();

    Ok(AgendaItem {
        appointment: appointment.clone(),
        service_name,
        start_at,
        start_label: start_at.format("%H:%M").to_string(),
        end_label: end_at.format("%H:%M").to_string(),
        date_label,
    })
}

/// Normalizes a whole batch, dropping records whose timestamps cannot be
/// parsed so that one malformed record never sinks the list.
///
/// `service_name_of` is the per-batch lookup produced by the resolver.
pub fn annotate_all(
    appointments: &[Appointment],
    mut service_name_of: impl FnMut(&str) -> Option<String>,
    locale: Locale,
) -> Vec<AgendaItem> {
    appointments
        .iter()
        .filter_map(|appointment| {
            match annotate(appointment, service_name_of(&appointment.service_id), locale) {
                Ok(item) => Some(item),
                Err(err) => {
                    tracing::warn!(id = %appointment.id, %err, "dropping unparseable appointment");
                    None
                }
            }
        })
        .collect()
}
