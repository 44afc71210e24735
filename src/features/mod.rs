//! Features - Dashboard Composites
//!
//! Each composite is a pure function of records, the caller's selection, and
//! callbacks. None of them owns state or fetches data.

pub mod appointments;
pub mod prescriptions;
pub mod quick_actions;
pub mod services;
pub mod stats;
