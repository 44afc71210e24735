//! Prescription - Medications issued by a doctor after a visit

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Doctor, Patient};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medication {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub instructions: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    pub id: Uuid,
    pub issued_on: NaiveDate,
    #[serde(default)]
    pub valid_until: Option<NaiveDate>,
    #[serde(default)]
    pub doctor: Option<Doctor>,
    #[serde(default)]
    pub patient: Option<Patient>,
    #[serde(default)]
    pub diagnosis: Option<String>,
    #[serde(default)]
    pub medications: Vec<Medication>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Prescription {
    /// Still valid on `today`; prescriptions without an end date never expire
    pub fn is_active_on(&self, today: NaiveDate) -> bool {
        self.valid_until.is_none_or(|until| until >= today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn test_is_active_on() {
        let mut rx = Prescription {
            id: Uuid::new_v4(),
            issued_on: date(2026, 9, 1),
            valid_until: Some(date(2026, 10, 1)),
            doctor: None,
            patient: None,
            diagnosis: None,
            medications: Vec::new(),
            notes: None,
        };
        assert!(rx.is_active_on(date(2026, 10, 1)));
        assert!(!rx.is_active_on(date(2026, 10, 2)));

        rx.valid_until = None;
        assert!(rx.is_active_on(date(2030, 1, 1)));
    }
}
