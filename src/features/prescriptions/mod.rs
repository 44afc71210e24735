//! Prescriptions - Prescription detail view

pub mod prescription_view;

pub use prescription_view::PrescriptionView;
