//! Salon booking API client library.
//!
//! This crate is the data layer behind the salon booking screens. It provides:
//!
//! - A typed HTTP client for the booking REST API
//! - An appointment list bound to the signed-in user, with loading and error state
//! - User-facing error messages with redaction of sensitive words
//! - Email format checks for the sign-in forms
//! - The authentication provider contract
//!
//! # Example
//!
//! ```no_run
//! use booking_client::{ApiConfig, AppointmentsResource, BookingClient, User};
//!
//! # async fn example() -> Result<(), booking_client::ClientError> {
//! let client = BookingClient::new(ApiConfig::from_env()?)?;
//! let appointments = AppointmentsResource::new(client);
//!
//! appointments.mount(Some(&User::new("customer-42"))).await;
//!
//! let state = appointments.snapshot();
//! match state.error {
//!     Some(message) => println!("{}", message),
//!     None => {
//!         for appt in state.appointments {
//!             println!("{} {} - {}", appt.date, appt.time, appt.service.name);
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod appointments;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod messages;
pub mod types;
pub mod validation;

pub use appointments::{AppointmentsResource, AppointmentsState, FETCH_FAILED_MESSAGE};
pub use auth::{AuthProvider, SignInFlow, StaticAuthProvider};
pub use client::{AppointmentSource, BookingClient};
pub use config::{ApiConfig, Endpoint};
pub use error::{AuthError, ClientError};
pub use messages::{display_message, redact, user_message};
pub use types::*;
pub use validation::{is_plausible_email_domain, is_valid_email_format};

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
