//! Doctors, Patients, and the user accounts behind them

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A medical specialty (Cardiology, Dermatology, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specialty {
    pub id: Uuid,
    pub name: String,
}

/// The account fields a view needs to show a person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl UserSummary {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// A doctor as seen by dashboards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: Uuid,
    pub user: UserSummary,
    #[serde(default)]
    pub specialty: Option<Specialty>,
    #[serde(default)]
    pub years_experience: Option<u32>,
    #[serde(default)]
    pub rating: Option<f32>,
}

impl Doctor {
    /// Name with the professional prefix, e.g. `Dr. Ana Lima`
    pub fn display_name(&self) -> String {
        format!("Dr. {}", self.user.full_name())
    }

    pub fn specialty_name(&self) -> Option<&str> {
        self.specialty.as_ref().map(|s| s.name.as_str())
    }
}

/// A patient as seen by dashboards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: Uuid,
    pub user: UserSummary,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
}

impl Patient {
    pub fn display_name(&self) -> String {
        self.user.full_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first: &str, last: &str) -> UserSummary {
        UserSummary {
            first_name: first.to_string(),
            last_name: last.to_string(),
            avatar_url: None,
        }
    }

    #[test]
    fn test_doctor_display_name() {
        let doctor = Doctor {
            id: Uuid::new_v4(),
            user: user("Ana", "Lima"),
            specialty: None,
            years_experience: None,
            rating: None,
        };
        assert_eq!(doctor.display_name(), "Dr. Ana Lima");
        assert_eq!(doctor.specialty_name(), None);
    }

    #[test]
    fn test_full_name_without_last_name() {
        assert_eq!(user("Cher", "").full_name(), "Cher");
    }

    #[test]
    fn test_doctor_deserializes_without_optional_fields() {
        let json = r#"{
            "id": "6f1c1f9e-54c4-4c39-9d52-3f4a8e0b7a11",
            "user": { "first_name": "Ana", "last_name": "Lima" }
        }"#;
        let doctor: Doctor = serde_json::from_str(json).expect("parse doctor");
        assert!(doctor.specialty.is_none());
        assert!(doctor.user.avatar_url.is_none());
    }
}
