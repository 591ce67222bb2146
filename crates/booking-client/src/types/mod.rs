//! Data types exchanged with the booking API.

pub mod appointment;
pub mod catalog;
pub mod user;

pub use appointment::{Appointment, AppointmentService, AppointmentTechnician};
pub use catalog::{Service, Technician};
pub use user::User;
