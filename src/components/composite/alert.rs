//! Alert Component
//!
//! An uncontrolled notice. Each `Alert` entity owns its visibility: it starts
//! shown, and once the user dismisses it, it stays hidden for the life of the
//! entity. Showing it again means creating a new entity.

use std::rc::Rc;

use gpui::{
    App, ClickEvent, Context, Empty, InteractiveElement, IntoElement, ParentElement, Render, Rgba,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};
use gpui_component::{h_flex, v_flex};

use crate::components::visibility::AlertVisibility;
use crate::theme::colors::ClinicColors;
use crate::theme::typography::Typography;

/// Notice severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Success,
    Warning,
    Error,
}

impl AlertKind {
    pub fn glyph(&self) -> &'static str {
        match self {
            AlertKind::Info => "ℹ",
            AlertKind::Success => "✓",
            AlertKind::Warning => "⚠",
            AlertKind::Error => "✕",
        }
    }

    /// Title used when the caller supplies none
    pub fn default_title(&self) -> &'static str {
        match self {
            AlertKind::Info => "Information",
            AlertKind::Success => "Success",
            AlertKind::Warning => "Warning",
            AlertKind::Error => "Error",
        }
    }

    /// (background, accent)
    pub fn colors(&self) -> (Rgba, Rgba) {
        match self {
            AlertKind::Info => (ClinicColors::info_soft(), ClinicColors::info()),
            AlertKind::Success => (ClinicColors::success_soft(), ClinicColors::success()),
            AlertKind::Warning => (ClinicColors::warning_soft(), ClinicColors::warning()),
            AlertKind::Error => (ClinicColors::danger_soft(), ClinicColors::danger()),
        }
    }
}

/// What the caller passes in
#[derive(Debug, Clone, PartialEq)]
pub struct AlertProps {
    pub kind: AlertKind,
    pub title: Option<SharedString>,
    pub message: SharedString,
    pub closeable: bool,
}

impl AlertProps {
    pub fn new(kind: AlertKind, message: impl Into<SharedString>) -> Self {
        Self {
            kind,
            title: None,
            message: message.into(),
            closeable: true,
        }
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn closeable(mut self, closeable: bool) -> Self {
        self.closeable = closeable;
        self
    }

    pub fn display_title(&self) -> SharedString {
        self.title
            .clone()
            .unwrap_or_else(|| self.kind.default_title().into())
    }
}

/// Props plus the instance-owned visibility
#[derive(Debug, Clone, PartialEq)]
pub struct AlertState {
    props: AlertProps,
    visibility: AlertVisibility,
}

impl AlertState {
    pub fn new(props: AlertProps) -> Self {
        Self {
            props,
            visibility: AlertVisibility::new(),
        }
    }

    pub fn props(&self) -> &AlertProps {
        &self.props
    }

    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    /// New props from the caller. Visibility is untouched.
    pub fn apply_props(&mut self, props: AlertProps) {
        self.props = props;
    }

    /// Returns `true` when this call hid the alert and `on_close` is due
    pub fn dismiss(&mut self) -> bool {
        self.props.closeable && self.visibility.dismiss()
    }
}

pub struct Alert {
    state: AlertState,
    on_close: Option<Rc<dyn Fn(&mut Window, &mut App) + 'static>>,
}

impl Alert {
    pub fn new(props: AlertProps, _cx: &mut Context<Self>) -> Self {
        Self {
            state: AlertState::new(props),
            on_close: None,
        }
    }

    /// Called once, when the user dismisses the alert
    pub fn on_close(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_close = Some(Rc::new(handler));
        self
    }

    fn dismiss(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if !self.state.dismiss() {
            return;
        }
        tracing::debug!(kind = ?self.state.props().kind, "Alert dismissed");
        cx.notify();
        if let Some(handler) = self.on_close.clone() {
            handler(window, cx);
        }
    }
}

impl Render for Alert {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if !self.state.is_visible() {
            return Empty.into_any_element();
        }

        let props = self.state.props();
        let (bg, accent) = props.kind.colors();

        h_flex()
            .w_full()
            .items_start()
            .gap_3()
            .px_4()
            .py_3()
            .rounded_md()
            .bg(bg)
            .border_l_4()
            .border_color(accent)
            .child(
                div()
                    .flex_none()
                    .text_color(accent)
                    .text_size(px(Typography::TEXT_BASE))
                    .child(props.kind.glyph()),
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
                            .child(props.display_title()),
                    )
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_SM))
                            .text_color(ClinicColors::text_secondary())
                            .child(props.message.clone()),
                    ),
            )
            .when(props.closeable, |el| {
                el.child(
                    div()
                        .id("alert-dismiss")
                        .flex_none()
                        .px_1()
                        .rounded_sm()
                        .text_color(ClinicColors::text_muted())
                        .cursor_pointer()
                        .hover(|s| s.text_color(ClinicColors::text_primary()))
                        .on_click(cx.listener(|this, _: &ClickEvent, window, cx| {
                            this.dismiss(window, cx);
                        }))
                        .child("×"),
                )
            })
            .into_any_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dismiss_fires_once() {
        let mut state = AlertState::new(AlertProps::new(AlertKind::Success, "Saved"));
        assert!(state.is_visible());
        assert!(state.dismiss());
        assert!(!state.is_visible());
        assert!(!state.dismiss());
    }

    #[test]
    fn test_same_props_do_not_bring_it_back() {
        let props = AlertProps::new(AlertKind::Warning, "Card expires soon");
        let mut state = AlertState::new(props.clone());
        state.dismiss();
        state.apply_props(props);
        assert!(!state.is_visible());
    }

    #[test]
    fn test_not_closeable_cannot_be_dismissed() {
        let mut state =
            AlertState::new(AlertProps::new(AlertKind::Error, "Payment failed").closeable(false));
        assert!(!state.dismiss());
        assert!(state.is_visible());
    }

    #[test]
    fn test_default_title_per_kind() {
        assert_eq!(
            AlertProps::new(AlertKind::Info, "x").display_title().as_ref(),
            "Information"
        );
        assert_eq!(
            AlertProps::new(AlertKind::Error, "x")
                .title("Upload failed")
                .display_title()
                .as_ref(),
            "Upload failed"
        );
    }

    #[test]
    fn test_each_kind_has_its_own_glyph() {
        let glyphs = [
            AlertKind::Info.glyph(),
            AlertKind::Success.glyph(),
            AlertKind::Warning.glyph(),
            AlertKind::Error.glyph(),
        ];
        for (i, a) in glyphs.iter().enumerate() {
            for b in &glyphs[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
