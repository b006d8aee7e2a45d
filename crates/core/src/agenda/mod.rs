mod annotate;
mod error;
mod filter;
mod sorting;
mod types;

pub use annotate::{annotate, annotate_all, parse_timestamp};
pub use error::AnnotateError;
pub use filter::{filter_agenda, filter_by_year, week_bounds};
pub use sorting::sort_chronologically;
pub use types::{AgendaItem, Appointment, FilterMode, Locale, Service};
