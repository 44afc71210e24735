//! Demo Data - What the host feeds the dashboards
//!
//! Stands in for the backend: either a JSON file named in the config or a
//! built-in sample set relative to the current time.

use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    Appointment, AppointmentStatus, Doctor, DoctorStatsSummary, Medication, Patient,
    PatientStatsSummary, Prescription, Service, Specialty, UserSummary,
};
use crate::error::{Error, Result};
use crate::features::appointments::AppointmentPerspective;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub doctor_stats: DoctorStatsSummary,
    pub patient_stats: PatientStatsSummary,
    pub services: Vec<Service>,
    /// Appointments of the signed-in patient
    pub patient_appointments: Vec<Appointment>,
    /// Appointments of the signed-in doctor
    pub doctor_appointments: Vec<Appointment>,
    #[serde(default)]
    pub prescriptions: Vec<Prescription>,
}

impl DashboardData {
    /// Read and validate a JSON data file
    pub fn load(path: &Path) -> Result<Self> {
        tracing::info!(path = ?path, "Loading dashboard data");
        let content = std::fs::read_to_string(path)?;
        let data: Self = serde_json::from_str(&content)?;
        data.validate()?;
        Ok(data)
    }

    /// Data file when configured, sample data otherwise
    pub fn load_or_sample(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::sample(Utc::now())),
        }
    }

    /// Reject records the views cannot display
    pub fn validate(&self) -> Result<()> {
        if let Some(service) = self
            .services
            .iter()
            .find(|s| !s.price.is_finite() || s.price < 0.0)
        {
            return Err(Error::Invalid {
                message: format!(
                    "service '{}' has an invalid price {}",
                    service.name, service.price
                ),
            });
        }
        if self.patient_appointments.iter().any(|a| a.doctor.is_none()) {
            return Err(Error::MissingField {
                record: "Appointment",
                field: "doctor",
            });
        }
        if self.doctor_appointments.iter().any(|a| a.patient.is_none()) {
            return Err(Error::MissingField {
                record: "Appointment",
                field: "patient",
            });
        }
        let totals = [
            self.doctor_stats.monthly_revenue,
            self.patient_stats.total_spent,
        ];
        if totals.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(Error::Invalid {
                message: "dashboard totals must be finite and not negative".to_string(),
            });
        }
        Ok(())
    }

    pub fn appointments(&self, perspective: AppointmentPerspective) -> &[Appointment] {
        match perspective {
            AppointmentPerspective::Patient => &self.patient_appointments,
            AppointmentPerspective::Doctor => &self.doctor_appointments,
        }
    }

    /// Future, still-open appointments, soonest first.
    ///
    /// The list views show whatever they are given; this is where ordering
    /// and filtering happen.
    pub fn upcoming(
        &self,
        perspective: AppointmentPerspective,
        now: DateTime<Utc>,
    ) -> Vec<Appointment> {
        let mut upcoming: Vec<Appointment> = self
            .appointments(perspective)
            .iter()
            .filter(|a| a.scheduled_at >= now && a.status.is_cancellable())
            .cloned()
            .collect();
        upcoming.sort_by_key(|a| a.scheduled_at);
        upcoming
    }

    pub fn find_appointment(&self, id: Uuid) -> Option<&Appointment> {
        self.patient_appointments
            .iter()
            .chain(&self.doctor_appointments)
            .find(|a| a.id == id)
    }

    /// Record a status change in every list holding the appointment
    pub fn set_status(&mut self, id: Uuid, status: AppointmentStatus) -> bool {
        let mut found = false;
        for appointment in self
            .patient_appointments
            .iter_mut()
            .chain(self.doctor_appointments.iter_mut())
            .filter(|a| a.id == id)
        {
            appointment.status = status;
            found = true;
        }
        found
    }

    /// Sample data anchored at `now`
    pub fn sample(now: DateTime<Utc>) -> Self {
        let cardiology = Specialty {
            id: Uuid::new_v4(),
            name: "Cardiology".to_string(),
        };
        let dermatology = Specialty {
            id: Uuid::new_v4(),
            name: "Dermatology".to_string(),
        };

        let doctor = |first: &str, last: &str, specialty: &Specialty, years: u32| Doctor {
            id: Uuid::new_v4(),
            user: UserSummary {
                first_name: first.to_string(),
                last_name: last.to_string(),
                avatar_url: None,
            },
            specialty: Some(specialty.clone()),
            years_experience: Some(years),
            rating: Some(4.8),
        };
        let patient = |first: &str, last: &str| Patient {
            id: Uuid::new_v4(),
            user: UserSummary {
                first_name: first.to_string(),
                last_name: last.to_string(),
                avatar_url: None,
            },
            date_of_birth: None,
        };

        let lima = doctor("Ana", "Lima", &cardiology, 12);
        let costa = doctor("Rafael", "Costa", &dermatology, 7);
        let me = patient("Joana", "Souza");

        let services = vec![
            Service {
                id: Uuid::new_v4(),
                name: "General Consultation".to_string(),
                description: Some("First visit with a full cardiovascular assessment".to_string()),
                price: 120.0,
                duration_minutes: 45,
                is_active: true,
            },
            Service {
                id: Uuid::new_v4(),
                name: "Follow-up Visit".to_string(),
                description: None,
                price: 80.0,
                duration_minutes: 30,
                is_active: true,
            },
            Service {
                id: Uuid::new_v4(),
                name: "Electrocardiogram".to_string(),
                description: Some("Resting 12-lead ECG with report".to_string()),
                price: 65.5,
                duration_minutes: 20,
                is_active: true,
            },
            Service {
                id: Uuid::new_v4(),
                name: "Home Visit".to_string(),
                description: Some("Temporarily unavailable".to_string()),
                price: 250.0,
                duration_minutes: 90,
                is_active: false,
            },
        ];

        let visit = |days: i64,
                     hours: i64,
                     status,
                     doctor: &Doctor,
                     patient: &Patient,
                     service: &Service| Appointment {
            id: Uuid::new_v4(),
            scheduled_at: now + Duration::days(days) + Duration::hours(hours),
            status,
            doctor: Some(doctor.clone()),
            patient: Some(patient.clone()),
            service: Some(service.clone()),
            notes: None,
        };

        let patient_appointments = vec![
            visit(1, 2, AppointmentStatus::Confirmed, &lima, &me, &services[1]),
            visit(4, 0, AppointmentStatus::Pending, &costa, &me, &services[0]),
            visit(12, 3, AppointmentStatus::Confirmed, &lima, &me, &services[2]),
            visit(20, 1, AppointmentStatus::Pending, &costa, &me, &services[1]),
            visit(-9, 0, AppointmentStatus::Completed, &lima, &me, &services[0]),
        ];

        let mendes = patient("Carlos", "Mendes");
        let alves = patient("Beatriz", "Alves");
        let rocha = patient("Pedro", "Rocha");
        let doctor_appointments = vec![
            visit(0, 1, AppointmentStatus::Confirmed, &lima, &mendes, &services[0]),
            visit(0, 3, AppointmentStatus::Pending, &lima, &alves, &services[1]),
            patient_appointments[0].clone(),
            visit(2, 5, AppointmentStatus::Confirmed, &lima, &rocha, &services[2]),
        ];

        let prescriptions = vec![Prescription {
            id: Uuid::new_v4(),
            issued_on: (now - Duration::days(9)).date_naive(),
            valid_until: Some((now + Duration::days(21)).date_naive()),
            doctor: Some(lima.clone()),
            patient: Some(me.clone()),
            diagnosis: Some("Mild hypertension".to_string()),
            medications: vec![
                Medication {
                    name: "Losartan".to_string(),
                    dosage: "50 mg".to_string(),
                    frequency: "Once daily".to_string(),
                    duration: Some("30 days".to_string()),
                    instructions: Some("Take in the morning".to_string()),
                },
                Medication {
                    name: "Hydrochlorothiazide".to_string(),
                    dosage: "12.5 mg".to_string(),
                    frequency: "Once daily".to_string(),
                    duration: None,
                    instructions: None,
                },
            ],
            notes: Some("Measure blood pressure twice a week and bring the log.".to_string()),
        }];

        Self {
            doctor_stats: DoctorStatsSummary {
                total_patients: 1284,
                today_appointments: 2,
                pending_appointments: 1,
                monthly_revenue: 18450.0,
            },
            patient_stats: PatientStatsSummary {
                upcoming_appointments: 4,
                completed_appointments: 1,
                active_prescriptions: 1,
                total_spent: 120.0,
            },
            services,
            patient_appointments,
            doctor_appointments,
            prescriptions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-10-16T09:00:00Z")
            .expect("valid timestamp")
            .with_timezone(&Utc)
    }

    #[test]
    fn test_sample_is_valid() {
        DashboardData::sample(now()).validate().expect("sample validates");
    }

    #[test]
    fn test_upcoming_is_future_open_and_sorted() {
        let data = DashboardData::sample(now());
        let upcoming = data.upcoming(AppointmentPerspective::Patient, now());

        assert_eq!(upcoming.len(), 4);
        assert!(upcoming.windows(2).all(|w| w[0].scheduled_at <= w[1].scheduled_at));
        assert!(upcoming.iter().all(|a| a.scheduled_at >= now()));
        assert!(upcoming.iter().all(|a| a.status.is_cancellable()));
    }

    #[test]
    fn test_set_status_updates_both_lists() {
        let mut data = DashboardData::sample(now());
        let shared = data.patient_appointments[0].id;

        assert!(data.set_status(shared, AppointmentStatus::Cancelled));
        assert_eq!(data.patient_appointments[0].status, AppointmentStatus::Cancelled);
        assert_eq!(data.doctor_appointments[2].status, AppointmentStatus::Cancelled);
        assert!(!data.set_status(Uuid::new_v4(), AppointmentStatus::Cancelled));
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let mut data = DashboardData::sample(now());
        data.services[0].price = -1.0;
        assert!(matches!(data.validate(), Err(Error::Invalid { .. })));
    }

    #[test]
    fn test_non_finite_total_is_rejected() {
        for value in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let mut data = DashboardData::sample(now());
            data.doctor_stats.monthly_revenue = value;
            assert!(matches!(data.validate(), Err(Error::Invalid { .. })));

            let mut data = DashboardData::sample(now());
            data.patient_stats.total_spent = value;
            assert!(matches!(data.validate(), Err(Error::Invalid { .. })));
        }
    }

    #[test]
    fn test_negative_total_is_rejected() {
        let mut data = DashboardData::sample(now());
        data.patient_stats.total_spent = -0.01;
        assert!(matches!(data.validate(), Err(Error::Invalid { .. })));
    }

    #[test]
    fn test_patient_list_needs_doctors() {
        let mut data = DashboardData::sample(now());
        data.patient_appointments[1].doctor = None;
        assert!(matches!(
            data.validate(),
            Err(Error::MissingField { field: "doctor", .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("dashboard.json");
        let data = DashboardData::sample(now());
        std::fs::write(&path, serde_json::to_string(&data).expect("serialize")).expect("write");

        assert_eq!(DashboardData::load(&path).expect("load"), data);
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("dashboard.json");
        std::fs::write(&path, "{ \"services\": 3 }").expect("write");

        assert!(matches!(DashboardData::load(&path), Err(Error::Json { .. })));
    }
}
