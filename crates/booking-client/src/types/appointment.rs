//! Appointment records returned by the booking API.

use serde::{Deserialize, Serialize};

/// An appointment booked by a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    /// Calendar date, as sent by the backend (e.g. "2025-03-14").
    pub date: String,
    /// Start time, as sent by the backend (e.g. "14:30").
    pub time: String,
    pub status: String,
    #[serde(alias = "totalAmount")]
    pub total_amount: f64,
    #[serde(alias = "serviceType")]
    pub service_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub service: AppointmentService,
    pub technician: AppointmentTechnician,
}

impl Appointment {
    /// Whether the appointment was cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.status.eq_ignore_ascii_case("cancelled") || self.status.eq_ignore_ascii_case("canceled")
    }
}

/// Service summary embedded in an appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentService {
    pub name: String,
    pub price: f64,
}

/// Technician summary embedded in an appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentTechnician {
    pub name: String,
}
