//! QuickActions - Shortcut tiles for the most common tasks

use std::rc::Rc;

use gpui::{
    App, ClickEvent, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    StatefulInteractiveElement, Styled, Window, div, px,
};
use gpui_component::{h_flex, v_flex};

use crate::components::composite::Card;
use crate::config::Role;
use crate::theme::colors::ClinicColors;
use crate::theme::typography::Typography;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuickActionKind {
    BookAppointment,
    ViewAppointments,
    ViewPrescriptions,
    FindDoctors,
    ManageServices,
    ManageSchedule,
    ViewPatients,
    EditProfile,
}

impl QuickActionKind {
    pub fn label(&self) -> &'static str {
        match self {
            QuickActionKind::BookAppointment => "Book Appointment",
            QuickActionKind::ViewAppointments => "My Appointments",
            QuickActionKind::ViewPrescriptions => "Prescriptions",
            QuickActionKind::FindDoctors => "Find Doctors",
            QuickActionKind::ManageServices => "Manage Services",
            QuickActionKind::ManageSchedule => "Manage Schedule",
            QuickActionKind::ViewPatients => "My Patients",
            QuickActionKind::EditProfile => "Edit Profile",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            QuickActionKind::BookAppointment => "Schedule a new visit",
            QuickActionKind::ViewAppointments => "See past and upcoming visits",
            QuickActionKind::ViewPrescriptions => "Review your medications",
            QuickActionKind::FindDoctors => "Browse specialists",
            QuickActionKind::ManageServices => "Prices and durations",
            QuickActionKind::ManageSchedule => "Set your availability",
            QuickActionKind::ViewPatients => "Records and history",
            QuickActionKind::EditProfile => "Update your details",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            QuickActionKind::BookAppointment => "＋",
            QuickActionKind::ViewAppointments => "📅",
            QuickActionKind::ViewPrescriptions => "💊",
            QuickActionKind::FindDoctors => "🔍",
            QuickActionKind::ManageServices => "🩺",
            QuickActionKind::ManageSchedule => "🕒",
            QuickActionKind::ViewPatients => "👥",
            QuickActionKind::EditProfile => "👤",
        }
    }

    fn element_id(&self) -> &'static str {
        match self {
            QuickActionKind::BookAppointment => "quick-book-appointment",
            QuickActionKind::ViewAppointments => "quick-view-appointments",
            QuickActionKind::ViewPrescriptions => "quick-view-prescriptions",
            QuickActionKind::FindDoctors => "quick-find-doctors",
            QuickActionKind::ManageServices => "quick-manage-services",
            QuickActionKind::ManageSchedule => "quick-manage-schedule",
            QuickActionKind::ViewPatients => "quick-view-patients",
            QuickActionKind::EditProfile => "quick-edit-profile",
        }
    }
}

#[derive(IntoElement)]
pub struct QuickActions {
    actions: Vec<QuickActionKind>,
    on_action: Option<Rc<dyn Fn(QuickActionKind, &mut Window, &mut App) + 'static>>,
}

impl QuickActions {
    pub fn new(actions: Vec<QuickActionKind>) -> Self {
        Self {
            actions,
            on_action: None,
        }
    }

    /// The standard set for a dashboard
    pub fn for_role(role: Role) -> Self {
        let actions = match role {
            Role::Patient => vec![
                QuickActionKind::BookAppointment,
                QuickActionKind::ViewAppointments,
                QuickActionKind::ViewPrescriptions,
                QuickActionKind::FindDoctors,
            ],
            Role::Doctor => vec![
                QuickActionKind::ManageSchedule,
                QuickActionKind::ViewPatients,
                QuickActionKind::ManageServices,
                QuickActionKind::EditProfile,
            ],
        };
        Self::new(actions)
    }

    pub fn on_action(
        mut self,
        handler: impl Fn(QuickActionKind, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_action = Some(Rc::new(handler));
        self
    }

    pub fn actions(&self) -> &[QuickActionKind] {
        &self.actions
    }
}

impl RenderOnce for QuickActions {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let on_action = self.on_action;

        let tiles = self.actions.into_iter().map(|kind| {
            let mut tile = h_flex()
                .id(kind.element_id())
                .gap_3()
                .p_3()
                .rounded_md()
                .border_1()
                .border_color(ClinicColors::border())
                .cursor_pointer()
                .hover(|s| s.bg(ClinicColors::surface_muted()))
                .child(
                    div()
                        .flex_none()
                        .size(px(36.0))
                        .rounded_md()
                        .flex()
                        .items_center()
                        .justify_center()
                        .bg(ClinicColors::primary_soft())
                        .text_color(ClinicColors::primary())
                        .child(kind.glyph()),
                )
                .child(
                    v_flex()
                        .child(
                            div()
                                .text_size(px(Typography::TEXT_SM))
                                .font_weight(gpui::FontWeight::MEDIUM)
                                .text_color(ClinicColors::text_primary())
                                .child(kind.label()),
                        )
                        .child(
                            div()
                                .text_size(px(Typography::TEXT_XS))
                                .text_color(ClinicColors::text_muted())
                                .child(kind.description()),
                        ),
                );

            if let Some(handler) = on_action.clone() {
                tile = tile.on_click(move |_: &ClickEvent, window, cx| handler(kind, window, cx));
            }
            tile
        });

        Card::new()
            .title("Quick Actions")
            .child(v_flex().gap_2().children(tiles))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_sets_do_not_overlap() {
        let patient = QuickActions::for_role(Role::Patient);
        let doctor = QuickActions::for_role(Role::Doctor);
        assert_eq!(patient.actions().len(), 4);
        assert_eq!(doctor.actions().len(), 4);
        assert!(patient.actions().iter().all(|a| !doctor.actions().contains(a)));
        assert_eq!(patient.actions()[0], QuickActionKind::BookAppointment);
    }
}
