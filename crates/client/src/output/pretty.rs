//! Pretty output formatting.

use agendo_core::agenda::{AgendaItem, Service};

/// Format a service for display.
pub fn format_service(service: &Service) -> String {
    format!("{}\n  ID: {}", service.name, service.id)
}

/// Format an appointment for display.
pub fn format_agenda_item(item: &AgendaItem) -> String {
    format!(
        "{} {} - {}\n  ID: {}\n  Client: {} | {} | {}\n  Service: {}",
        item.date_label,
        item.start_label,
        item.end_label,
        item.appointment.id,
        item.appointment.client_name,
        item.appointment.client_phone,
        item.appointment.client_email,
        // Unresolved names render blank, the row itself still shows.
        item.service_name.as_deref().unwrap_or("")
    )
}

/// Format an agenda for display.
pub fn format_agenda(items: &[AgendaItem]) -> String {
    if items.is_empty() {
        return "No appointments found.".to_string();
    }
    let mut output = format!("APPOINTMENTS ({})\n", items.len());
    output.push_str(&"-".repeat(40));
    for item in items {
        output.push_str(&format!("\n{}", format_agenda_item(item)));
        output.push('\n');
    }
    output
}
