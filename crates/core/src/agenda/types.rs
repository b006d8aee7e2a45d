use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A raw scheduling record exactly as the backend returns it.
///
/// Timestamps stay as the strings they arrived in; parsing happens during
/// annotation so that one malformed record cannot sink a whole fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(rename = "_id")]
    pub id: String,
    /// Calendar event linked to this record, deleted first on cancellation.
    pub event_id: String,
    pub start_time: String,
    pub end_time: String,
    /// Foreign key into the service catalog.
    pub service_id: String,
    pub client_name: String,
    pub client_phone: String,
    pub client_email: String,
}

impl Appointment {
    /// Creates an appointment with empty client details.
    pub fn new(
        id: impl Into<String>,
        event_id: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        service_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            event_id: event_id.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            service_id: service_id.into(),
            client_name: String::new(),
            client_phone: String::new(),
            client_email: String::new(),
        }
    }

    /// Sets the client contact details.
    pub fn with_client(
        mut self,
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        self.client_name = name.into();
        self.client_phone = phone.into();
        self.client_email = email.into();
        self
    }
}

/// A service catalog record referenced by an appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

/// An appointment annotated for display: resolved service name, the parsed
/// start instant, and the formatted labels a view renders directly.
///
/// Recomputed on every fetch cycle and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaItem {
    #[serde(flatten)]
    pub appointment: Appointment,
    /// `None` when the service lookup failed; rendered as a blank cell.
    pub service_name: Option<String>,
    /// Parsed start instant. All ordering and window membership uses this,
    /// never the label strings.
    pub start_at: NaiveDateTime,
    /// Start time as "HH:MM", 24-hour.
    pub start_label: String,
    /// End time as "HH:MM", 24-hour.
    pub end_label: String,
    /// Start date in the locale's long form, e.g. "05 de março de 2024".
    pub date_label: String,
}

impl AgendaItem {
    /// Calendar date the appointment starts on.
    pub fn start_date(&self) -> NaiveDate {
        self.start_at.date()
    }
}

/// Time window selecting which appointments a view displays.
///
/// Exactly one mode is active at a time; representing the selection as an
/// enum leaves no room for the contradictory flag combinations the modes
/// would otherwise allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// A single calendar day. Needs a reference date; without one the view
    /// falls back to showing everything.
    Day,
    /// The week containing today, Monday through Sunday.
    CurrentWeek,
    /// The week containing today plus seven days.
    NextWeek,
    /// No window at all.
    All,
}

/// Display locale for the formatted date label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    /// Brazilian Portuguese: "05 de março de 2024".
    #[default]
    PtBr,
    /// English: "March 05, 2024".
    En,
}

impl Locale {
    /// Strftime pattern for the long date form.
    pub fn long_date_format(self) -> &'static str {
        match self {
            Locale::PtBr => "%d de %B de %Y",
            Locale::En => "%B %d, %Y",
        }
    }

    /// The chrono locale used to spell out month names.
    pub fn chrono_locale(self) -> chrono::Locale {
        match self {
            Locale::PtBr => chrono::Locale::pt_BR,
            Locale::En => chrono::Locale::en_US,
        }
    }
}
