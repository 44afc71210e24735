//! Services - Service cards and the doctor's service list

pub mod doctor_services;
pub mod service_card;

pub use doctor_services::DoctorServices;
pub use service_card::ServiceCard;
