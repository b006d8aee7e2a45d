//! Service catalog API operations.

use std::collections::{HashMap, HashSet};

use agendo_core::agenda::{Appointment, Service};
use futures::future::join_all;

use super::AgendoClient;
use crate::error::Result;

impl AgendoClient {
    /// Get a service catalog record by ID.
    pub async fn get_service(&self, service_id: &str) -> Result<Service> {
        let response = self
            .client
            .get(self.url(&format!("/service/{}", service_id)))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Resolve a service ID to its display name.
    ///
    /// Fail-soft: any failure (not found, server error, network, timeout)
    /// yields `None` and a warning, never an error. A missing name renders
    /// as a blank cell.
    pub async fn resolve_service_name(&self, service_id: &str) -> Option<String> {
        match self.get_service(service_id).await {
            Ok(service) => Some(service.name),
            Err(err) => {
                tracing::warn!(%service_id, %err, "service name lookup failed");
                None
            }
        }
    }

    /// Resolve the service names for a whole batch of appointments.
    ///
    /// Looks up each distinct service ID once, concurrently, and joins the
    /// results into a memo map. One failing lookup never aborts the batch.
    pub async fn resolve_service_names(
        &self,
        appointments: &[Appointment],
    ) -> HashMap<String, Option<String>> {
        let distinct: HashSet<&str> = appointments
            .iter()
            .map(|appointment| appointment.service_id.as_str())
            .collect();

        let lookups = distinct.into_iter().map(|service_id| async move {
            (
                service_id.to_string(),
                self.resolve_service_name(service_id).await,
            )
        });

        join_all(lookups).await.into_iter().collect()
    }
}
