use chrono::{Datelike, Duration, NaiveDate};

use super::types::{AgendaItem, FilterMode};

/// Returns the Monday and Sunday of the week containing the given date.
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let weekday = date.weekday().num_days_from_monday() as i64;
    let monday = date - Duration::days(weekday);

    (monday, monday + Duration::days(6))
}

/// Selects the appointments that fall inside the active time window.
///
/// `today` is the injected wall-clock date; the week modes always anchor
/// on it, never on `reference_day`. The input is left untouched and the
/// output order matches the input (ordering proper is the sorter's job).
pub fn filter_agenda(
    items: &[AgendaItem],
    mode: FilterMode,
    reference_day: Option<NaiveDate>,
    today: NaiveDate,
) -> Vec<AgendaItem> {
    match mode {
        FilterMode::Day => match reference_day {
            Some(day) => items
                .iter()
                .filter(|item| item.start_date() == day)
                .cloned()
                .collect(),
            // No date picked yet: show everything, like the All mode.
            None => items.to_vec(),
        },
        FilterMode::CurrentWeek => {
            let week = today.iso_week().week();
            let (start, end) = week_bounds(today);

            // The range check alone should suffice; the week-number check
            // is kept as a safeguard against boundary dates aliasing
            // across year transitions.
            items
                .iter()
                .filter(|item| {
                    let date = item.start_date();
                    date.iso_week().week() == week && date >= start && date <= end
                })
                .cloned()
                .collect()
        }
        FilterMode::NextWeek => {
            let (start, end) = week_bounds(today + Duration::days(7));

            items
                .iter()
                .filter(|item| {
                    let date = item.start_date();
                    date >= start && date <= end
                })
                .cloned()
                .collect()
        }
        FilterMode::All => items.to_vec(),
    }
}

/// Keeps the appointments whose start date falls in the given calendar
/// year. The printable report uses this with the current year.
pub fn filter_by_year(items: &[AgendaItem], year: i32) -> Vec<AgendaItem> {
    items
        .iter()
        .filter(|item| item.start_date().year() == year)
        .cloned()
        .collect()
}
