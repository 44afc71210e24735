//! Visibility - Who owns the open/closed state
//!
//! Dialogs are controlled: the caller holds a [`DialogState`] and the dialog
//! can only ask to be closed. Alerts are uncontrolled: each instance holds an
//! [`AlertVisibility`] that only ever goes from shown to hidden.
//!
//! ```text
//! DialogState     caller ──open/closed──▶ dialog ──Close request──▶ caller
//! AlertVisibility Visible ──dismiss()──▶ Hidden  (terminal)
//! ```

/// Caller-owned open flag for dialogs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DialogState {
    open: bool,
}

impl DialogState {
    pub fn open() -> Self {
        Self { open: true }
    }

    pub fn closed() -> Self {
        Self { open: false }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

impl From<bool> for DialogState {
    fn from(open: bool) -> Self {
        Self { open }
    }
}

/// Instance-owned visibility for alerts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertVisibility {
    visible: bool,
}

impl Default for AlertVisibility {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl AlertVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Hide for good. Returns `true` only for the call that hid it.
    pub fn dismiss(&mut self) -> bool {
        std::mem::replace(&mut self.visible, false)
    }
}

/// A user gesture on a dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogTrigger {
    /// The close control in the panel header
    CloseControl,
    /// A click on the backdrop outside the panel
    Backdrop,
    /// The cancel action of a confirm dialog
    Cancel,
    /// The confirm action of a confirm dialog
    Confirm,
}

/// What a dialog asks its caller to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogRequest {
    Close,
    Confirm,
}

/// Resolves gestures against the caller's state and the in-flight flag.
///
/// Close control and backdrop stay live while `loading`; only the cancel and
/// confirm actions are held back so an async confirm cannot be sent twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DialogGate {
    pub state: DialogState,
    pub loading: bool,
}

impl DialogGate {
    pub fn new(state: DialogState, loading: bool) -> Self {
        Self { state, loading }
    }

    pub fn resolve(&self, trigger: DialogTrigger) -> Option<DialogRequest> {
        if !self.state.is_open() {
            return None;
        }
        match trigger {
            DialogTrigger::CloseControl | DialogTrigger::Backdrop => Some(DialogRequest::Close),
            DialogTrigger::Cancel if !self.loading => Some(DialogRequest::Close),
            DialogTrigger::Confirm if !self.loading => Some(DialogRequest::Confirm),
            DialogTrigger::Cancel | DialogTrigger::Confirm => None,
        }
    }

    /// Whether the cancel and confirm actions accept input
    pub fn actions_enabled(&self) -> bool {
        self.state.is_open() && !self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TRIGGERS: [DialogTrigger; 4] = [
        DialogTrigger::CloseControl,
        DialogTrigger::Backdrop,
        DialogTrigger::Cancel,
        DialogTrigger::Confirm,
    ];

    #[test]
    fn test_closed_dialog_ignores_every_trigger() {
        for loading in [false, true] {
            let gate = DialogGate::new(DialogState::closed(), loading);
            for trigger in ALL_TRIGGERS {
                assert_eq!(gate.resolve(trigger), None, "{trigger:?}");
            }
            assert!(!gate.actions_enabled());
        }
    }

    #[test]
    fn test_close_paths_request_close_and_never_confirm() {
        let gate = DialogGate::new(DialogState::open(), false);
        assert_eq!(gate.resolve(DialogTrigger::CloseControl), Some(DialogRequest::Close));
        assert_eq!(gate.resolve(DialogTrigger::Backdrop), Some(DialogRequest::Close));
        assert_eq!(gate.resolve(DialogTrigger::Cancel), Some(DialogRequest::Close));
        assert_eq!(gate.resolve(DialogTrigger::Confirm), Some(DialogRequest::Confirm));
    }

    #[test]
    fn test_loading_holds_back_actions_only() {
        let gate = DialogGate::new(DialogState::open(), true);
        assert!(!gate.actions_enabled());
        assert_eq!(gate.resolve(DialogTrigger::Cancel), None);
        assert_eq!(gate.resolve(DialogTrigger::Confirm), None);
        assert_eq!(gate.resolve(DialogTrigger::Backdrop), Some(DialogRequest::Close));
        assert_eq!(gate.resolve(DialogTrigger::CloseControl), Some(DialogRequest::Close));
    }

    #[test]
    fn test_clearing_loading_reenables_without_touching_state() {
        let mut gate = DialogGate::new(DialogState::open(), true);
        gate.loading = false;
        assert!(gate.actions_enabled());
        assert!(gate.state.is_open());
        assert_eq!(gate.resolve(DialogTrigger::Confirm), Some(DialogRequest::Confirm));
    }

    #[test]
    fn test_alert_visibility_dismisses_once() {
        let mut visibility = AlertVisibility::new();
        assert!(visibility.is_visible());
        assert!(visibility.dismiss());
        assert!(!visibility.is_visible());
        assert!(!visibility.dismiss());
        assert!(!visibility.is_visible());
    }
}
