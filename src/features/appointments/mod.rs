//! Appointments - Appointment lists for the dashboards

pub mod upcoming;

pub use upcoming::{AppointmentPerspective, UpcomingAppointments};
