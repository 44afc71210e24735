//! Stats - Dashboard stat grids

pub mod doctor_stats;
pub mod patient_stats;
pub mod stat_grid;

pub use doctor_stats::DoctorStats;
pub use patient_stats::PatientStats;
pub use stat_grid::{StatGrid, StatTile, Tone};
