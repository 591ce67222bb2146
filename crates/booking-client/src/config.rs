//! Configuration types for booking-client.

use std::env;
use std::time::Duration;

use crate::error::ClientError;

/// Environment variable that overrides the booking API base URL.
pub const BASE_URL_ENV: &str = "SPRING_BOOT_BASE_URL";

/// Environment variable that overrides the health check timeout (milliseconds).
pub const HEALTH_TIMEOUT_ENV: &str = "BOOKING_HEALTH_TIMEOUT_MS";

/// Environment variable that overrides the general request timeout (milliseconds).
pub const REQUEST_TIMEOUT_ENV: &str = "BOOKING_REQUEST_TIMEOUT_MS";

/// Base URL used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Timeout for health checks.
pub const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_millis(3000);

/// Timeout for every other request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(10000);

/// Named endpoints exposed by the booking API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Health,
    Services,
    Technicians,
    Appointments,
    Settings,
    Booking,
    Slots,
}

impl Endpoint {
    /// Path of the endpoint relative to the base URL.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Health => "/api/health",
            Endpoint::Services => "/api/services",
            Endpoint::Technicians => "/api/technicians",
            Endpoint::Appointments => "/api/appointments",
            Endpoint::Settings => "/api/settings",
            Endpoint::Booking => "/api/bookings",
            Endpoint::Slots => "/api/slots",
        }
    }
}

/// Configuration for talking to the booking API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend (e.g., "http://localhost:8080"), without a trailing slash.
    pub base_url: String,
    /// Timeout applied to health checks.
    pub health_timeout: Duration,
    /// Timeout applied to every other request.
    pub request_timeout: Duration,
}

impl ApiConfig {
    /// Create a new configuration with the given base URL and default timeouts.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            health_timeout: HEALTH_CHECK_TIMEOUT,
            request_timeout: REQUEST_TIMEOUT,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Optional (with defaults):
    /// - `SPRING_BOOT_BASE_URL` - Default: http://localhost:8080
    /// - `BOOKING_HEALTH_TIMEOUT_MS` - Default: 3000
    /// - `BOOKING_REQUEST_TIMEOUT_MS` - Default: 10000
    pub fn from_env() -> Result<Self, ClientError> {
        let base_url = env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let mut config = Self::new(base_url);

        if let Some(ms) = millis_from_env(HEALTH_TIMEOUT_ENV)? {
            config.health_timeout = ms;
        }
        if let Some(ms) = millis_from_env(REQUEST_TIMEOUT_ENV)? {
            config.request_timeout = ms;
        }

        Ok(config)
    }

    /// Full URL of a named endpoint.
    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// URL listing the appointments of one customer.
    pub fn customer_appointments_url(&self, user_id: &str) -> String {
        format!(
            "{}/customer/{}",
            self.endpoint_url(Endpoint::Appointments),
            urlencoding::encode(user_id)
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn millis_from_env(name: &str) -> Result<Option<Duration>, ClientError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(|ms| Some(Duration::from_millis(ms)))
            .map_err(|e| ClientError::Config(format!("Invalid {}: {}", name, e))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = ApiConfig::new("http://api.example.com/");
        assert_eq!(config.base_url, "http://api.example.com");
    }

    #[test]
    fn test_endpoint_map() {
        let config = ApiConfig::default();
        assert_eq!(
            config.endpoint_url(Endpoint::Health),
            "http://localhost:8080/api/health"
        );
        assert_eq!(
            config.endpoint_url(Endpoint::Slots),
            "http://localhost:8080/api/slots"
        );
    }

    #[test]
    fn test_customer_appointments_url_encodes_id() {
        let config = ApiConfig::new("http://localhost:8080");
        assert_eq!(
            config.customer_appointments_url("user 42"),
            "http://localhost:8080/api/appointments/customer/user%2042"
        );
    }

    #[test]
    fn test_default_timeouts() {
        let config = ApiConfig::default();
        assert_eq!(config.health_timeout, Duration::from_millis(3000));
        assert_eq!(config.request_timeout, Duration::from_millis(10000));
    }
}
