//! Dashboard - Host state and the dashboard view
//!
//! `DashboardState` owns everything the stateless views are fed: the loaded
//! data, the chosen service, and the cancellation dialog. `render_dashboard`
//! builds the page from it and is the content of the shell's error boundary.

use std::path::PathBuf;
use std::time::Duration;

use chrono::{Local, Utc};
use gpui::{
    AnyElement, App, AppContext, Context, Entity, IntoElement, ParentElement, Styled, Task, Window,
    div, prelude::*, px,
};
use gpui_component::{h_flex, v_flex};
use uuid::Uuid;

use crate::app::demo::DashboardData;
use crate::components::composite::{Alert, AlertKind, AlertProps, ConfirmDialog};
use crate::components::visibility::DialogState;
use crate::config::Role;
use crate::domain::AppointmentStatus;
use crate::error::{Error, Result};
use crate::features::appointments::{AppointmentPerspective, UpcomingAppointments};
use crate::features::prescriptions::PrescriptionView;
use crate::features::quick_actions::{QuickActionKind, QuickActions};
use crate::features::services::DoctorServices;
use crate::features::stats::{DoctorStats, PatientStats};
use crate::theme::colors::ClinicColors;
use crate::theme::typography::Typography;

/// How long the simulated cancellation request takes
const CANCEL_LATENCY: Duration = Duration::from_millis(1200);

/// Progress of an appointment cancellation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CancelFlow {
    dialog: DialogState,
    pending: Option<Uuid>,
    loading: bool,
}

impl CancelFlow {
    pub fn dialog(&self) -> DialogState {
        self.dialog
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn pending(&self) -> Option<Uuid> {
        self.pending
    }

    /// Open the dialog for `id`. Ignored while a request is in flight.
    pub fn request(&mut self, id: Uuid) -> bool {
        if self.loading {
            return false;
        }
        self.pending = Some(id);
        self.dialog = DialogState::open();
        true
    }

    /// Start the request, returning the appointment it is for
    pub fn begin(&mut self) -> Option<Uuid> {
        if self.loading || !self.dialog.is_open() {
            return None;
        }
        let id = self.pending?;
        self.loading = true;
        Some(id)
    }

    /// Hide the dialog. An in-flight request keeps running.
    pub fn close(&mut self) {
        self.dialog = DialogState::closed();
        if !self.loading {
            self.pending = None;
        }
    }

    /// Request finished, returning the appointment it was for
    pub fn finish(&mut self) -> Option<Uuid> {
        self.loading = false;
        self.dialog = DialogState::closed();
        self.pending.take()
    }
}

pub struct DashboardState {
    role: Role,
    data_file: Option<PathBuf>,
    data: Result<DashboardData>,
    selected_service: Option<Uuid>,
    cancel: CancelFlow,
    cancel_task: Option<Task<()>>,
    notice: Option<Entity<Alert>>,
    fail_next_render: bool,
}

impl DashboardState {
    pub fn new(role: Role, data_file: Option<PathBuf>, _cx: &mut Context<Self>) -> Self {
        let data = load_data(data_file.as_deref());
        Self::with_data(role, data_file, data)
    }

    fn with_data(role: Role, data_file: Option<PathBuf>, data: Result<DashboardData>) -> Self {
        Self {
            role,
            data_file,
            data,
            selected_service: None,
            cancel: CancelFlow::default(),
            cancel_task: None,
            notice: None,
            fail_next_render: false,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn data(&self) -> std::result::Result<&DashboardData, &Error> {
        self.data.as_ref()
    }

    pub fn set_role(&mut self, role: Role, cx: &mut Context<Self>) {
        if self.apply_role(role) {
            tracing::info!(role = role.label(), "Switching dashboard");
            cx.notify();
        }
    }

    /// Switch dashboards. A cancel dialog that was not confirmed yet belongs to
    /// the list it was opened from and is closed.
    fn apply_role(&mut self, role: Role) -> bool {
        if self.role == role {
            return false;
        }
        self.role = role;
        self.selected_service = None;
        if !self.cancel.is_loading() {
            self.cancel.close();
        }
        true
    }

    /// Make the next dashboard render fail
    pub fn simulate_failure(&mut self, cx: &mut Context<Self>) {
        tracing::warn!("Simulating a dashboard render failure");
        self.fail_next_render = true;
        cx.notify();
    }

    /// Read the data again and forget all transient state
    pub fn reload(&mut self, cx: &mut Context<Self>) {
        tracing::info!("Reloading dashboard");
        self.data = load_data(self.data_file.as_deref());
        self.selected_service = None;
        self.cancel = CancelFlow::default();
        self.cancel_task = None;
        self.notice = None;
        self.fail_next_render = false;
        cx.notify();
    }

    fn select_service(&mut self, id: Uuid, cx: &mut Context<Self>) {
        tracing::debug!(service = %id, "Service selected");
        self.selected_service = Some(id);
        cx.notify();
    }

    fn request_cancel(&mut self, id: Uuid, cx: &mut Context<Self>) {
        let cancellable = self
            .data
            .as_ref()
            .ok()
            .and_then(|data| data.find_appointment(id))
            .is_some_and(|a| a.status.is_cancellable());

        if !cancellable {
            self.show_notice(
                AlertProps::new(AlertKind::Warning, "This appointment can no longer be cancelled."),
                cx,
            );
            return;
        }

        if self.cancel.request(id) {
            cx.notify();
        }
    }

    fn close_cancel(&mut self, cx: &mut Context<Self>) {
        self.cancel.close();
        cx.notify();
    }

    fn confirm_cancel(&mut self, cx: &mut Context<Self>) {
        let Some(id) = self.cancel.begin() else {
            return;
        };
        tracing::info!(appointment = %id, "Cancelling appointment");
        cx.notify();

        let task = cx.spawn(async move |handle, cx| {
            cx.background_executor().timer(CANCEL_LATENCY).await;
            let _ = handle.update(cx, |state, cx| state.finish_cancel(cx));
        });
        self.cancel_task = Some(task);
    }

    fn finish_cancel(&mut self, cx: &mut Context<Self>) {
        self.cancel_task = None;
        let Some(id) = self.cancel.finish() else {
            return;
        };

        let updated = self
            .data
            .as_mut()
            .is_ok_and(|data| data.set_status(id, AppointmentStatus::Cancelled));
        if updated {
            tracing::info!(appointment = %id, "Appointment cancelled");
            self.show_notice(
                AlertProps::new(AlertKind::Success, "The appointment was cancelled.")
                    .title("Appointment cancelled"),
                cx,
            );
        } else {
            tracing::warn!(appointment = %id, "Cancelled appointment no longer loaded");
        }
        cx.notify();
    }

    fn quick_action(&mut self, kind: QuickActionKind, cx: &mut Context<Self>) {
        tracing::info!(action = ?kind, "Quick action selected");
        if kind == QuickActionKind::BookAppointment {
            self.show_notice(
                AlertProps::new(AlertKind::Info, "Pick a service below to start booking."),
                cx,
            );
        }
    }

    /// Replace the notice with a fresh alert instance
    fn show_notice(&mut self, props: AlertProps, cx: &mut Context<Self>) {
        let dashboard = cx.entity().downgrade();
        self.notice = Some(cx.new(|cx| {
            Alert::new(props, cx).on_close(move |_, cx| {
                let _ = dashboard.update(cx, |state, cx| {
                    state.notice = None;
                    cx.notify();
                });
            })
        }));
        cx.notify();
    }
}

fn load_data(path: Option<&std::path::Path>) -> Result<DashboardData> {
    let data = DashboardData::load_or_sample(path);
    if let Err(e) = &data {
        tracing::error!(error = %e, "Failed to load dashboard data");
    }
    data
}

fn section_title(title: &'static str) -> impl IntoElement {
    div()
        .text_size(px(Typography::TEXT_LG))
        .font_weight(gpui::FontWeight::SEMIBOLD)
        .text_color(ClinicColors::text_primary())
        .child(title)
}

/// Build the dashboard for the current role.
///
/// Missing or invalid data surfaces as an `Err` for the enclosing boundary.
pub fn render_dashboard(
    state: &Entity<DashboardState>,
    _window: &mut Window,
    cx: &mut App,
) -> Result<AnyElement> {
    let dashboard = state.read(cx);
    if dashboard.fail_next_render {
        return Err(Error::render("The dashboard could not be drawn."));
    }
    let data = dashboard.data().map_err(|e| Error::Render {
        message: e.user_message(),
    })?;

    let role = dashboard.role;
    let perspective = match role {
        Role::Patient => AppointmentPerspective::Patient,
        Role::Doctor => AppointmentPerspective::Doctor,
    };
    let today = Local::now().date_naive();

    let stats = match role {
        Role::Patient => PatientStats::new(data.patient_stats.clone()).into_any_element(),
        Role::Doctor => DoctorStats::new(data.doctor_stats.clone()).into_any_element(),
    };

    let upcoming = UpcomingAppointments::new(data.upcoming(perspective, Utc::now()))
        .perspective(perspective)
        .today(today)
        .on_select({
            let state = state.clone();
            move |id, _, cx| state.update(cx, |s, cx| s.request_cancel(id, cx))
        })
        .on_view_all(|_, _| tracing::info!("View all appointments requested"));

    let quick_actions = QuickActions::for_role(role).on_action({
        let state = state.clone();
        move |kind, _, cx| state.update(cx, |s, cx| s.quick_action(kind, cx))
    });

    let services = DoctorServices::new(data.services.clone())
        .selected(dashboard.selected_service)
        .on_select({
            let state = state.clone();
            move |id, _, cx| state.update(cx, |s, cx| s.select_service(id, cx))
        });

    let prescription = match role {
        Role::Patient => data.prescriptions.first().map(|p| {
            PrescriptionView::with_today(p, today)
                .on_print(|_, _| tracing::info!("Prescription print requested"))
        }),
        Role::Doctor => None,
    };

    let cancel = &dashboard.cancel;
    let dialog = ConfirmDialog::new("cancel-appointment", cancel.dialog())
        .title("Cancel appointment")
        .message("The time slot will be released. This cannot be undone.")
        .confirm_label("Cancel appointment")
        .cancel_label("Keep it")
        .dangerous(true)
        .loading(cancel.is_loading())
        .on_confirm({
            let state = state.clone();
            move |_, cx| state.update(cx, |s, cx| s.confirm_cancel(cx))
        })
        .on_cancel({
            let state = state.clone();
            move |_, cx| state.update(cx, |s, cx| s.close_cancel(cx))
        });

    let content = v_flex()
        .id("dashboard")
        .size_full()
        .overflow_y_scroll()
        .gap_5()
        .p_6()
        .children(dashboard.notice.clone())
        .child(stats)
        .child(
            h_flex()
                .items_start()
                .gap_5()
                .child(div().flex_1().child(upcoming))
                .child(div().w(px(320.0)).flex_none().child(quick_actions)),
        )
        .child(
            v_flex()
                .gap_3()
                .child(section_title(match role {
                    Role::Patient => "Book a service",
                    Role::Doctor => "Your services",
                }))
                .child(services),
        )
        .children(prescription);

    Ok(div()
        .relative()
        .size_full()
        .child(content)
        .child(dialog)
        .into_any_element())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient_dashboard() -> DashboardState {
        DashboardState::with_data(Role::Patient, None, Ok(DashboardData::sample(Utc::now())))
    }

    #[test]
    fn test_request_opens_dialog() {
        let mut flow = CancelFlow::default();
        let id = Uuid::new_v4();

        assert!(flow.request(id));
        assert!(flow.dialog().is_open());
        assert_eq!(flow.pending(), Some(id));
        assert!(!flow.is_loading());
    }

    #[test]
    fn test_close_before_confirm_forgets_appointment() {
        let mut flow = CancelFlow::default();
        flow.request(Uuid::new_v4());
        flow.close();

        assert!(!flow.dialog().is_open());
        assert_eq!(flow.pending(), None);
        assert_eq!(flow.begin(), None);
    }

    #[test]
    fn test_begin_then_finish() {
        let mut flow = CancelFlow::default();
        let id = Uuid::new_v4();
        flow.request(id);

        assert_eq!(flow.begin(), Some(id));
        assert!(flow.is_loading());
        assert!(flow.dialog().is_open());
        assert_eq!(flow.begin(), None);

        assert_eq!(flow.finish(), Some(id));
        assert!(!flow.is_loading());
        assert!(!flow.dialog().is_open());
    }

    #[test]
    fn test_close_while_loading_keeps_request() {
        let mut flow = CancelFlow::default();
        let id = Uuid::new_v4();
        flow.request(id);
        flow.begin();
        flow.close();

        assert!(!flow.dialog().is_open());
        assert!(flow.is_loading());
        assert!(!flow.request(Uuid::new_v4()));
        assert_eq!(flow.finish(), Some(id));
    }

    #[test]
    fn test_switching_role_closes_unconfirmed_dialog() {
        let mut state = patient_dashboard();
        let id = Uuid::new_v4();
        state.selected_service = Some(Uuid::new_v4());
        state.cancel.request(id);

        assert!(state.apply_role(Role::Doctor));
        assert_eq!(state.role(), Role::Doctor);
        assert!(!state.cancel.dialog().is_open());
        assert_eq!(state.cancel.pending(), None);
        assert_eq!(state.cancel.begin(), None);
        assert_eq!(state.selected_service, None);
    }

    #[test]
    fn test_switching_role_keeps_confirmed_request() {
        let mut state = patient_dashboard();
        let id = Uuid::new_v4();
        state.cancel.request(id);
        state.cancel.begin();

        assert!(state.apply_role(Role::Doctor));
        assert!(state.cancel.is_loading());
        assert_eq!(state.cancel.finish(), Some(id));
    }

    #[test]
    fn test_same_role_is_a_no_op() {
        let mut state = patient_dashboard();
        let id = Uuid::new_v4();
        state.cancel.request(id);

        assert!(!state.apply_role(Role::Patient));
        assert!(state.cancel.dialog().is_open());
        assert_eq!(state.cancel.pending(), Some(id));
    }
}
