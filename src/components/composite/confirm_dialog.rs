//! ConfirmDialog Component
//!
//! A [`Modal`] with a message and a cancel/confirm pair. `loading` holds both
//! actions back while the caller's confirm is in flight.

use std::rc::Rc;

use gpui::{
    App, ClickEvent, ElementId, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
    Window, div, px,
};
use gpui_component::h_flex;

use crate::components::composite::modal::{CloseHandler, Modal, ModalWidth};
use crate::components::primitives::{Button, ButtonVariant};
use crate::components::visibility::{DialogGate, DialogRequest, DialogState, DialogTrigger};
use crate::theme::colors::ClinicColors;
use crate::theme::typography::Typography;

const DEFAULT_CONFIRM_LABEL: &str = "Confirm";
const DEFAULT_CANCEL_LABEL: &str = "Cancel";

/// How the two actions render for a given set of props
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmControls {
    pub cancel_enabled: bool,
    pub confirm_enabled: bool,
    /// Confirm shows the busy indicator instead of its label
    pub confirm_busy: bool,
    pub confirm_variant: ButtonVariant,
}

#[derive(IntoElement)]
pub struct ConfirmDialog {
    id: ElementId,
    state: DialogState,
    title: SharedString,
    message: SharedString,
    confirm_label: SharedString,
    cancel_label: SharedString,
    dangerous: bool,
    loading: bool,
    on_confirm: Option<Rc<dyn Fn(&mut Window, &mut App) + 'static>>,
    on_cancel: Option<CloseHandler>,
}

impl ConfirmDialog {
    pub fn new(id: impl Into<ElementId>, state: impl Into<DialogState>) -> Self {
        Self {
            id: id.into(),
            state: state.into(),
            title: "Are you sure?".into(),
            message: SharedString::default(),
            confirm_label: DEFAULT_CONFIRM_LABEL.into(),
            cancel_label: DEFAULT_CANCEL_LABEL.into(),
            dangerous: false,
            loading: false,
            on_confirm: None,
            on_cancel: None,
        }
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = title.into();
        self
    }

    pub fn message(mut self, message: impl Into<SharedString>) -> Self {
        self.message = message.into();
        self
    }

    pub fn confirm_label(mut self, label: impl Into<SharedString>) -> Self {
        self.confirm_label = label.into();
        self
    }

    pub fn cancel_label(mut self, label: impl Into<SharedString>) -> Self {
        self.cancel_label = label.into();
        self
    }

    /// Render the confirm action as destructive
    pub fn dangerous(mut self, dangerous: bool) -> Self {
        self.dangerous = dangerous;
        self
    }

    /// The caller's confirm is in flight
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn on_confirm(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_confirm = Some(Rc::new(handler));
        self
    }

    /// Called by the cancel action, the close control, and the backdrop
    pub fn on_cancel(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_cancel = Some(Rc::new(handler));
        self
    }

    fn gate(&self) -> DialogGate {
        DialogGate::new(self.state, self.loading)
    }

    pub fn controls(&self) -> ConfirmControls {
        let enabled = self.gate().actions_enabled();
        ConfirmControls {
            cancel_enabled: enabled,
            confirm_enabled: enabled,
            confirm_busy: self.loading,
            confirm_variant: if self.dangerous {
                ButtonVariant::Danger
            } else {
                ButtonVariant::Primary
            },
        }
    }
}

fn action_listener(
    gate: DialogGate,
    trigger: DialogTrigger,
    expected: DialogRequest,
    handler: Rc<dyn Fn(&mut Window, &mut App) + 'static>,
) -> impl Fn(&ClickEvent, &mut Window, &mut App) + 'static {
    move |_event, window, cx| {
        if gate.resolve(trigger) == Some(expected) {
            handler(window, cx);
        }
    }
}

impl RenderOnce for ConfirmDialog {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let controls = self.controls();
        let gate = self.gate();

        let mut cancel = Button::outline("confirm-dialog-cancel", self.cancel_label)
            .disabled(!controls.cancel_enabled);
        if let Some(handler) = self.on_cancel.clone() {
            cancel = cancel.on_click(action_listener(
                gate,
                DialogTrigger::Cancel,
                DialogRequest::Close,
                handler,
            ));
        }

        let mut confirm = Button::new("confirm-dialog-confirm", self.confirm_label)
            .variant(controls.confirm_variant)
            .disabled(!controls.confirm_enabled)
            .loading(controls.confirm_busy);
        if let Some(handler) = self.on_confirm {
            confirm = confirm.on_click(action_listener(
                gate,
                DialogTrigger::Confirm,
                DialogRequest::Confirm,
                handler,
            ));
        }

        Modal::new(self.id, self.state)
            .title(self.title)
            .width(ModalWidth::Small)
            .on_close_rc(self.on_cancel)
            .child(
                div()
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(ClinicColors::text_secondary())
                    .child(self.message),
            )
            .footer(h_flex().gap_3().child(cancel).child(confirm))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_disables_both_actions() {
        let dialog = ConfirmDialog::new("cancel-visit", DialogState::open()).loading(true);
        let controls = dialog.controls();
        assert!(!controls.cancel_enabled);
        assert!(!controls.confirm_enabled);
        assert!(controls.confirm_busy);
    }

    #[test]
    fn test_clearing_loading_reenables_actions() {
        let dialog = ConfirmDialog::new("cancel-visit", DialogState::open())
            .loading(true)
            .loading(false);
        let controls = dialog.controls();
        assert!(controls.cancel_enabled);
        assert!(controls.confirm_enabled);
        assert!(!controls.confirm_busy);
        assert!(dialog.state.is_open());
    }

    #[test]
    fn test_dangerous_only_changes_severity() {
        let safe = ConfirmDialog::new("a", DialogState::open()).controls();
        let danger = ConfirmDialog::new("b", DialogState::open())
            .dangerous(true)
            .controls();
        assert_eq!(safe.confirm_variant, ButtonVariant::Primary);
        assert_eq!(danger.confirm_variant, ButtonVariant::Danger);
        assert_eq!(safe.confirm_enabled, danger.confirm_enabled);
        assert_eq!(safe.cancel_enabled, danger.cancel_enabled);
    }

    #[test]
    fn test_closed_dialog_has_no_live_actions() {
        let controls = ConfirmDialog::new("c", DialogState::closed()).controls();
        assert!(!controls.cancel_enabled);
        assert!(!controls.confirm_enabled);
    }

    #[test]
    fn test_default_labels() {
        let dialog = ConfirmDialog::new("d", false);
        assert_eq!(dialog.confirm_label.as_ref(), DEFAULT_CONFIRM_LABEL);
        assert_eq!(dialog.cancel_label.as_ref(), DEFAULT_CANCEL_LABEL);
    }
}
