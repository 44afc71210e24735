//! Dashboard summary figures, computed by the backend

use serde::{Deserialize, Serialize};

/// Headline numbers for the doctor dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DoctorStatsSummary {
    pub total_patients: u32,
    pub today_appointments: u32,
    pub pending_appointments: u32,
    /// Revenue this calendar month, in US dollars
    pub monthly_revenue: f64,
}

/// Headline numbers for the patient dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientStatsSummary {
    pub upcoming_appointments: u32,
    pub completed_appointments: u32,
    pub active_prescriptions: u32,
    /// Total paid for consultations, in US dollars
    pub total_spent: f64,
}
