//! Scheduling API operations.

use agendo_core::agenda::{annotate_all, AgendaItem, Appointment, Locale};

use super::AgendoClient;
use crate::error::Result;

impl AgendoClient {
    /// List all appointment records.
    pub async fn list_schedulings(&self) -> Result<Vec<Appointment>> {
        let response = self.client.get(self.url("/scheduling")).send().await?;
        self.handle_response(response).await
    }

    /// Run one full fetch cycle: list the appointments, resolve their
    /// service names concurrently, and annotate the batch for display.
    ///
    /// Resolution failures degrade to blank names and malformed records
    /// are dropped; only the scheduling fetch itself can fail.
    pub async fn fetch_agenda(&self, locale: Locale) -> Result<Vec<AgendaItem>> {
        let appointments = self.list_schedulings().await?;
        tracing::debug!(count = appointments.len(), "fetched appointments");

        let names = self.resolve_service_names(&appointments).await;

        Ok(annotate_all(
            &appointments,
            |service_id| names.get(service_id).cloned().flatten(),
            locale,
        ))
    }

    /// Cancel an appointment.
    ///
    /// Deletes the linked calendar event first and only then the
    /// scheduling record; a failed first step leaves the record in place.
    pub async fn cancel_scheduling(&self, scheduling_id: &str, event_id: &str) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/event/{}", event_id)))
            .send()
            .await?;
        self.handle_delete_response(response).await?;

        let response = self
            .client
            .delete(self.url(&format!("/scheduling/{}", scheduling_id)))
            .send()
            .await?;
        self.handle_delete_response(response).await
    }
}
