//! PrescriptionView - Read-only prescription sheet

use std::rc::Rc;

use chrono::{Local, NaiveDate};
use gpui::{
    App, ClickEvent, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div,
    prelude::*, px,
};
use gpui_component::{h_flex, v_flex};

use crate::components::composite::Card;
use crate::components::primitives::{Badge, BadgeVariant, Button};
use crate::domain::{Medication, Prescription};
use crate::theme::colors::ClinicColors;
use crate::theme::typography::Typography;
use crate::utils::format::format_date;

pub const NO_MEDICATIONS_MESSAGE: &str = "No medications prescribed";

/// One medication line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicationLine {
    pub name: SharedString,
    /// e.g. `500 mg · Every 8 hours · 7 days`
    pub regimen: SharedString,
    pub instructions: Option<SharedString>,
}

impl MedicationLine {
    pub fn new(medication: &Medication) -> Self {
        let mut parts = vec![medication.dosage.as_str(), medication.frequency.as_str()];
        if let Some(duration) = medication.duration.as_deref() {
            parts.push(duration);
        }
        let regimen = parts
            .into_iter()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(" · ");

        Self {
            name: medication.name.clone().into(),
            regimen: regimen.into(),
            instructions: medication.instructions.clone().map(Into::into),
        }
    }
}

/// Display values derived from a [`Prescription`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrescriptionSummary {
    pub issued_label: SharedString,
    pub prescriber: Option<SharedString>,
    pub patient: Option<SharedString>,
    pub diagnosis: Option<SharedString>,
    pub validity_label: SharedString,
    pub active: bool,
    pub medications: Vec<MedicationLine>,
    pub notes: Option<SharedString>,
}

impl PrescriptionSummary {
    pub fn new(prescription: &Prescription, today: NaiveDate) -> Self {
        let validity_label = match prescription.valid_until {
            Some(until) => format!("Valid until {}", format_date(until)),
            None => "No expiry".to_string(),
        };

        Self {
            issued_label: format!("Issued {}", format_date(prescription.issued_on)).into(),
            prescriber: prescription.doctor.as_ref().map(|d| d.display_name().into()),
            patient: prescription.patient.as_ref().map(|p| p.display_name().into()),
            diagnosis: prescription.diagnosis.clone().map(Into::into),
            validity_label: validity_label.into(),
            active: prescription.is_active_on(today),
            medications: prescription.medications.iter().map(MedicationLine::new).collect(),
            notes: prescription.notes.clone().map(Into::into),
        }
    }
}

#[derive(IntoElement)]
pub struct PrescriptionView {
    summary: PrescriptionSummary,
    on_print: Option<Rc<dyn Fn(&mut Window, &mut App) + 'static>>,
}

impl PrescriptionView {
    pub fn new(prescription: &Prescription) -> Self {
        Self::with_today(prescription, Local::now().date_naive())
    }

    pub fn with_today(prescription: &Prescription, today: NaiveDate) -> Self {
        Self {
            summary: PrescriptionSummary::new(prescription, today),
            on_print: None,
        }
    }

    pub fn on_print(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_print = Some(Rc::new(handler));
        self
    }
}

fn labeled(label: &'static str, value: SharedString) -> impl IntoElement {
    v_flex()
        .gap_1()
        .child(
            div()
                .text_size(px(Typography::TEXT_XS))
                .text_color(ClinicColors::text_muted())
                .child(label),
        )
        .child(
            div()
                .text_size(px(Typography::TEXT_SM))
                .text_color(ClinicColors::text_primary())
                .child(value),
        )
}

fn render_medication(line: MedicationLine) -> impl IntoElement {
    v_flex()
        .gap_1()
        .p_3()
        .rounded_md()
        .bg(ClinicColors::surface_muted())
        .child(
            h_flex()
                .gap_2()
                .child(div().text_color(ClinicColors::primary()).child("💊"))
                .child(
                    div()
                        .text_size(px(Typography::TEXT_SM))
                        .font_weight(gpui::FontWeight::SEMIBOLD)
                        .text_color(ClinicColors::text_primary())
                        .child(line.name),
                ),
        )
        .child(
            div()
                .text_size(px(Typography::TEXT_XS))
                .text_color(ClinicColors::text_secondary())
                .child(line.regimen),
        )
        .when_some(line.instructions, |el, instructions| {
            el.child(
                div()
                    .text_size(px(Typography::TEXT_XS))
                    .italic()
                    .text_color(ClinicColors::text_muted())
                    .child(instructions),
            )
        })
}

impl RenderOnce for PrescriptionView {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let summary = self.summary;

        let status = if summary.active {
            Badge::new("Active").variant(BadgeVariant::Success)
        } else {
            Badge::new("Expired").variant(BadgeVariant::Neutral)
        };

        let mut actions = h_flex().gap_2().child(status);
        if let Some(handler) = self.on_print {
            actions = actions.child(
                Button::outline("prescription-print", "Print")
                    .on_click(move |_: &ClickEvent, window, cx| handler(window, cx)),
            );
        }

        let medications = if summary.medications.is_empty() {
            div()
                .py_4()
                .text_size(px(Typography::TEXT_SM))
                .text_color(ClinicColors::text_muted())
                .child(NO_MEDICATIONS_MESSAGE)
                .into_any_element()
        } else {
            v_flex()
                .gap_2()
                .children(summary.medications.into_iter().map(render_medication))
                .into_any_element()
        };

        Card::new()
            .title("Prescription")
            .subtitle(summary.issued_label)
            .actions(actions)
            .child(
                h_flex()
                    .gap_8()
                    .when_some(summary.prescriber, |el, name| {
                        el.child(labeled("Prescribed by", name))
                    })
                    .when_some(summary.patient, |el, name| el.child(labeled("Patient", name)))
                    .when_some(summary.diagnosis, |el, diagnosis| {
                        el.child(labeled("Diagnosis", diagnosis))
                    }),
            )
            .child(medications)
            .when_some(summary.notes, |card, notes| card.child(labeled("Notes", notes)))
            .footer(
                div()
                    .text_size(px(Typography::TEXT_XS))
                    .text_color(ClinicColors::text_muted())
                    .child(summary.validity_label),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn prescription(medications: Vec<Medication>) -> Prescription {
        Prescription {
            id: Uuid::new_v4(),
            issued_on: date(2026, 10, 1),
            valid_until: Some(date(2026, 11, 1)),
            doctor: None,
            patient: None,
            diagnosis: Some("Acute sinusitis".to_string()),
            medications,
            notes: None,
        }
    }

    fn amoxicillin(duration: Option<&str>) -> Medication {
        Medication {
            name: "Amoxicillin".to_string(),
            dosage: "500 mg".to_string(),
            frequency: "Every 8 hours".to_string(),
            duration: duration.map(str::to_string),
            instructions: Some("Take with food".to_string()),
        }
    }

    #[test]
    fn test_medication_regimen() {
        assert_eq!(
            MedicationLine::new(&amoxicillin(Some("7 days"))).regimen.as_ref(),
            "500 mg · Every 8 hours · 7 days"
        );
        assert_eq!(
            MedicationLine::new(&amoxicillin(None)).regimen.as_ref(),
            "500 mg · Every 8 hours"
        );
    }

    #[test]
    fn test_summary_labels() {
        let summary =
            PrescriptionSummary::new(&prescription(vec![amoxicillin(None)]), date(2026, 10, 16));
        assert_eq!(summary.issued_label.as_ref(), "Issued Thu, Oct 1, 2026");
        assert_eq!(summary.validity_label.as_ref(), "Valid until Sun, Nov 1, 2026");
        assert!(summary.active);
        assert!(summary.prescriber.is_none());
        assert_eq!(summary.medications.len(), 1);
    }

    #[test]
    fn test_expired_and_empty() {
        let summary = PrescriptionSummary::new(&prescription(Vec::new()), date(2026, 12, 1));
        assert!(!summary.active);
        assert!(summary.medications.is_empty());
    }

    #[test]
    fn test_no_expiry() {
        let mut rx = prescription(Vec::new());
        rx.valid_until = None;
        let summary = PrescriptionSummary::new(&rx, date(2030, 1, 1));
        assert_eq!(summary.validity_label.as_ref(), "No expiry");
        assert!(summary.active);
    }
}
