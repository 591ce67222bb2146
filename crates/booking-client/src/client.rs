//! Booking API HTTP client.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::config::{ApiConfig, Endpoint};
use crate::error::ClientError;
use crate::types::{Appointment, Service, Technician};

/// Source of appointment records for a customer.
///
/// Implemented by [`BookingClient`]; tests substitute their own.
#[async_trait]
pub trait AppointmentSource: Send + Sync {
    /// Fetch every appointment belonging to `user_id`.
    async fn fetch_appointments(&self, user_id: &str) -> Result<Vec<Appointment>, ClientError>;
}

#[async_trait]
impl<T: AppointmentSource + ?Sized> AppointmentSource for Arc<T> {
    async fn fetch_appointments(&self, user_id: &str) -> Result<Vec<Appointment>, ClientError> {
        (**self).fetch_appointments(user_id).await
    }
}

/// Client for the booking REST API.
#[derive(Clone)]
pub struct BookingClient {
    http: Client,
    config: ApiConfig,
}

impl BookingClient {
    /// Create a client without contacting the backend.
    pub fn new(config: ApiConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(ClientError::Http)?;

        Ok(Self { http, config })
    }

    /// Create a client and verify the backend answers its health check.
    pub async fn connect(config: ApiConfig) -> Result<Self, ClientError> {
        let client = Self::new(config)?;

        if client.health_check().await? {
            info!("Connected to booking API at {}", client.config.base_url);
            Ok(client)
        } else {
            Err(ClientError::HealthCheckFailed)
        }
    }

    /// Perform a health check against the backend.
    ///
    /// Returns `Ok(false)` when the backend answers with a non-success status.
    pub async fn health_check(&self) -> Result<bool, ClientError> {
        let url = self.config.endpoint_url(Endpoint::Health);
        debug!("Health check: {}", url);

        let resp = self
            .http
            .get(&url)
            .timeout(self.config.health_timeout)
            .send()
            .await
            .map_err(map_transport_error)?;

        Ok(resp.status().is_success())
    }

    /// Fetch the appointments of a customer.
    pub async fn fetch_appointments(&self, user_id: &str) -> Result<Vec<Appointment>, ClientError> {
        let url = self.config.customer_appointments_url(user_id);
        self.get_collection(&url).await
    }

    /// Fetch the service catalog.
    pub async fn fetch_services(&self) -> Result<Vec<Service>, ClientError> {
        let url = self.config.endpoint_url(Endpoint::Services);
        self.get_collection(&url).await
    }

    /// Fetch the technician roster.
    pub async fn fetch_technicians(&self) -> Result<Vec<Technician>, ClientError> {
        let url = self.config.endpoint_url(Endpoint::Technicians);
        self.get_collection(&url).await
    }

    /// Get the configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// GET a JSON array. An empty body or `null` yields an empty collection.
    async fn get_collection<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, ClientError> {
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(map_transport_error)?;
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }

        let items: Option<Vec<T>> = serde_json::from_str(&body)?;
        Ok(items.unwrap_or_default())
    }
}

#[async_trait]
impl AppointmentSource for BookingClient {
    async fn fetch_appointments(&self, user_id: &str) -> Result<Vec<Appointment>, ClientError> {
        BookingClient::fetch_appointments(self, user_id).await
    }
}

impl std::fmt::Debug for BookingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookingClient")
            .field("config", &self.config)
            .finish()
    }
}

fn map_transport_error(e: reqwest::Error) -> ClientError {
    if e.is_timeout() {
        ClientError::Timeout
    } else {
        ClientError::Http(e)
    }
}
