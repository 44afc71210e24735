//! Domain - Clinic Records
//!
//! Read-only records handed to the views. Views derive display strings from
//! them but never mutate them; optional fields may be absent.

mod appointment;
mod people;
mod prescription;
mod service;
mod stats;

pub use appointment::*;
pub use people::*;
pub use prescription::*;
pub use service::*;
pub use stats::*;
