//! UpcomingAppointments - The next few visits on a dashboard
//!
//! Shows the first [`UPCOMING_LIMIT`] appointments exactly as supplied. The
//! caller sorts and filters; this view does neither.

use std::rc::Rc;

use chrono::{Local, NaiveDate};
use gpui::{
    App, ClickEvent, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};
use gpui_component::{h_flex, v_flex};
use uuid::Uuid;

use crate::components::composite::Card;
use crate::components::primitives::{Avatar, AvatarSize, Badge, Button};
use crate::domain::{Appointment, AppointmentStatus};
use crate::theme::colors::ClinicColors;
use crate::theme::typography::Typography;
use crate::utils::format::{format_relative_day, format_time, local_date};

pub const UPCOMING_LIMIT: usize = 3;
pub const NO_APPOINTMENTS_MESSAGE: &str = "No upcoming appointments";

/// Whose dashboard the list sits on; decides who the "other party" is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppointmentPerspective {
    /// Patient dashboard, rows name the doctor
    #[default]
    Patient,
    /// Doctor dashboard, rows name the patient
    Doctor,
}

/// Display values for one appointment row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentRow {
    pub id: Uuid,
    pub counterpart: SharedString,
    pub avatar_url: Option<SharedString>,
    pub detail: SharedString,
    pub day_label: SharedString,
    pub time_label: SharedString,
    pub status: AppointmentStatus,
}

impl AppointmentRow {
    pub fn new(
        appointment: &Appointment,
        perspective: AppointmentPerspective,
        today: NaiveDate,
    ) -> Self {
        let service_name = appointment.service.as_ref().map(|s| s.name.clone());

        let (counterpart, avatar_url, detail) = match perspective {
            AppointmentPerspective::Patient => match &appointment.doctor {
                Some(doctor) => (
                    doctor.display_name(),
                    doctor.user.avatar_url.clone(),
                    doctor
                        .specialty_name()
                        .map(str::to_string)
                        .or(service_name)
                        .unwrap_or_else(|| "General consultation".to_string()),
                ),
                None => (
                    "Doctor not assigned".to_string(),
                    None,
                    service_name.unwrap_or_else(|| "General consultation".to_string()),
                ),
            },
            AppointmentPerspective::Doctor => {
                let (name, avatar) = match &appointment.patient {
                    Some(patient) => (patient.display_name(), patient.user.avatar_url.clone()),
                    None => ("Unknown patient".to_string(), None),
                };
                (name, avatar, service_name.unwrap_or_else(|| "Consultation".to_string()))
            }
        };

        Self {
            id: appointment.id,
            counterpart: counterpart.into(),
            avatar_url: avatar_url.map(Into::into),
            detail: detail.into(),
            day_label: format_relative_day(local_date(&appointment.scheduled_at), today).into(),
            time_label: format_time(&appointment.scheduled_at.with_timezone(&Local)).into(),
            status: appointment.status,
        }
    }
}

/// Rows for the first [`UPCOMING_LIMIT`] appointments, in supplied order
pub fn upcoming_rows(
    appointments: &[Appointment],
    perspective: AppointmentPerspective,
    today: NaiveDate,
) -> Vec<AppointmentRow> {
    appointments
        .iter()
        .take(UPCOMING_LIMIT)
        .map(|appointment| AppointmentRow::new(appointment, perspective, today))
        .collect()
}

#[derive(IntoElement)]
pub struct UpcomingAppointments {
    appointments: Vec<Appointment>,
    perspective: AppointmentPerspective,
    today: NaiveDate,
    on_select: Option<Rc<dyn Fn(Uuid, &mut Window, &mut App) + 'static>>,
    on_view_all: Option<Rc<dyn Fn(&mut Window, &mut App) + 'static>>,
}

impl UpcomingAppointments {
    pub fn new(appointments: Vec<Appointment>) -> Self {
        Self {
            appointments,
            perspective: AppointmentPerspective::Patient,
            today: Local::now().date_naive(),
            on_select: None,
            on_view_all: None,
        }
    }

    pub fn perspective(mut self, perspective: AppointmentPerspective) -> Self {
        self.perspective = perspective;
        self
    }

    /// Reference day for "Today"/"Tomorrow" labels
    pub fn today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn on_select(mut self, handler: impl Fn(Uuid, &mut Window, &mut App) + 'static) -> Self {
        self.on_select = Some(Rc::new(handler));
        self
    }

    pub fn on_view_all(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_view_all = Some(Rc::new(handler));
        self
    }

    pub fn rows(&self) -> Vec<AppointmentRow> {
        upcoming_rows(&self.appointments, self.perspective, self.today)
    }
}

fn render_row(
    row: AppointmentRow,
    on_select: Option<Rc<dyn Fn(Uuid, &mut Window, &mut App) + 'static>>,
) -> impl IntoElement {
    let id = row.id;

    h_flex()
        .id(SharedString::from(format!("appointment-{id}")))
        .w_full()
        .gap_3()
        .px_3()
        .py_3()
        .rounded_md()
        .hover(|s| s.bg(ClinicColors::surface_muted()))
        .child(
            Avatar::new(row.counterpart.clone())
                .image_url(row.avatar_url)
                .size(AvatarSize::Medium),
        )
        .child(
            v_flex()
                .flex_1()
                .gap_1()
                .child(
                    div()
                        .text_size(px(Typography::TEXT_SM))
                        .font_weight(gpui::FontWeight::SEMIBOLD)
                        .text_color(ClinicColors::text_primary())
                        .child(row.counterpart),
                )
                .child(
                    div()
                        .text_size(px(Typography::TEXT_XS))
                        .text_color(ClinicColors::text_secondary())
                        .child(row.detail),
                ),
        )
        .child(
            v_flex()
                .items_end()
                .gap_1()
                .child(
                    div()
                        .text_size(px(Typography::TEXT_SM))
                        .text_color(ClinicColors::text_primary())
                        .child(row.day_label),
                )
                .child(
                    div()
                        .text_size(px(Typography::TEXT_XS))
                        .text_color(ClinicColors::text_muted())
                        .child(row.time_label),
                ),
        )
        .child(Badge::status(row.status))
        .when_some(on_select, |el, handler| {
            el.cursor_pointer()
                .on_click(move |_: &ClickEvent, window, cx| handler(id, window, cx))
        })
}

impl RenderOnce for UpcomingAppointments {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let rows = self.rows();

        let mut card = Card::new()
            .title("Upcoming Appointments")
            .padded(false);

        if let Some(handler) = self.on_view_all {
            card = card.actions(
                Button::ghost("appointments-view-all", "View all")
                    .on_click(move |_: &ClickEvent, window, cx| handler(window, cx)),
            );
        }

        if rows.is_empty() {
            return card.child(
                div()
                    .px_5()
                    .py_8()
                    .flex()
                    .justify_center()
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(ClinicColors::text_muted())
                    .child(NO_APPOINTMENTS_MESSAGE),
            );
        }

        let on_select = self.on_select;
        card.child(
            v_flex()
                .px_2()
                .py_2()
                .children(rows.into_iter().map(|row| render_row(row, on_select.clone()))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Doctor, Patient, Specialty, UserSummary};
    use chrono::{Duration, TimeZone, Utc};

    fn user(first: &str, last: &str) -> UserSummary {
        UserSummary {
            first_name: first.to_string(),
            last_name: last.to_string(),
            avatar_url: None,
        }
    }

    fn appointment(doctor_last: &str, days_from_now: i64) -> Appointment {
        let base = Utc
            .with_ymd_and_hms(2026, 10, 16, 12, 0, 0)
            .single()
            .expect("valid timestamp");
        Appointment {
            id: Uuid::new_v4(),
            scheduled_at: base + Duration::days(days_from_now),
            status: AppointmentStatus::Confirmed,
            doctor: Some(Doctor {
                id: Uuid::new_v4(),
                user: user("Ana", doctor_last),
                specialty: Some(Specialty {
                    id: Uuid::new_v4(),
                    name: "Cardiology".to_string(),
                }),
                years_experience: None,
                rating: None,
            }),
            patient: Some(Patient {
                id: Uuid::new_v4(),
                user: user("Joao", "Souza"),
                date_of_birth: None,
            }),
            service: None,
            notes: None,
        }
    }

    #[test]
    fn test_empty_list_yields_no_rows() {
        let rows = upcoming_rows(&[], AppointmentPerspective::Patient, Local::now().date_naive());
        assert!(rows.is_empty());
    }

    #[test]
    fn test_takes_first_three_in_supplied_order() {
        // Deliberately unsorted: the view must not reorder
        let list = vec![
            appointment("Zeta", 9),
            appointment("Alpha", 1),
            appointment("Mid", 4),
            appointment("Late", 2),
        ];
        let rows = upcoming_rows(&list, AppointmentPerspective::Patient, Local::now().date_naive());
        let names: Vec<&str> = rows.iter().map(|r| r.counterpart.as_ref()).collect();
        assert_eq!(names, ["Dr. Ana Zeta", "Dr. Ana Alpha", "Dr. Ana Mid"]);
    }

    #[test]
    fn test_doctor_perspective_names_patient() {
        let appt = appointment("Lima", 0);
        let today = local_date(&appt.scheduled_at);
        let row = AppointmentRow::new(&appt, AppointmentPerspective::Doctor, today);
        assert_eq!(row.counterpart.as_ref(), "Joao Souza");
        assert_eq!(row.detail.as_ref(), "Consultation");
        assert_eq!(row.day_label.as_ref(), "Today");
    }

    #[test]
    fn test_patient_perspective_shows_specialty() {
        let appt = appointment("Lima", 1);
        let today = local_date(&appt.scheduled_at) - Duration::days(1);
        let row = AppointmentRow::new(&appt, AppointmentPerspective::Patient, today);
        assert_eq!(row.detail.as_ref(), "Cardiology");
        assert_eq!(row.day_label.as_ref(), "Tomorrow");
        assert_eq!(row.status, AppointmentStatus::Confirmed);
    }

    #[test]
    fn test_missing_doctor_is_a_valid_row() {
        let mut appt = appointment("Lima", 3);
        appt.doctor = None;
        let today = Local::now().date_naive();
        let row = AppointmentRow::new(&appt, AppointmentPerspective::Patient, today);
        assert_eq!(row.counterpart.as_ref(), "Doctor not assigned");
        assert!(row.avatar_url.is_none());
    }
}
