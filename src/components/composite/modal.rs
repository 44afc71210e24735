//! Modal Component
//!
//! A controlled modal dialog. The caller owns the [`DialogState`]; the modal
//! renders nothing while it is closed and only ever *asks* to be closed.

use std::rc::Rc;

use gpui::{
    AnyElement, App, ClickEvent, ElementId, Empty, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::components::visibility::{DialogGate, DialogRequest, DialogState, DialogTrigger};
use crate::theme::colors::ClinicColors;
use crate::theme::typography::Typography;

/// Close callback shared by the close control and the backdrop
pub type CloseHandler = Rc<dyn Fn(&mut Window, &mut App) + 'static>;

/// Panel width
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalWidth {
    Small,
    #[default]
    Medium,
    Large,
}

impl ModalWidth {
    fn pixels(&self) -> f32 {
        match self {
            ModalWidth::Small => 400.0,
            ModalWidth::Medium => 520.0,
            ModalWidth::Large => 720.0,
        }
    }
}

/// Modal component
#[derive(IntoElement)]
pub struct Modal {
    id: ElementId,
    state: DialogState,
    title: Option<SharedString>,
    children: Vec<AnyElement>,
    footer: Option<AnyElement>,
    on_close: Option<CloseHandler>,
    show_close_button: bool,
    width: ModalWidth,
}

impl Modal {
    /// Create a new modal for the caller's state
    pub fn new(id: impl Into<ElementId>, state: impl Into<DialogState>) -> Self {
        Self {
            id: id.into(),
            state: state.into(),
            title: None,
            children: Vec::new(),
            footer: None,
            on_close: None,
            show_close_button: true,
            width: ModalWidth::Medium,
        }
    }

    /// Set the header title
    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add a child element to the body
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    /// Set the footer row, usually action buttons
    pub fn footer(mut self, footer: impl IntoElement) -> Self {
        self.footer = Some(footer.into_any_element());
        self
    }

    /// Set the close handler
    pub fn on_close(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_close = Some(Rc::new(handler));
        self
    }

    pub(crate) fn on_close_rc(mut self, handler: Option<CloseHandler>) -> Self {
        self.on_close = handler;
        self
    }

    /// Hide the close button
    pub fn hide_close_button(mut self) -> Self {
        self.show_close_button = false;
        self
    }

    /// Set the panel width
    pub fn width(mut self, width: ModalWidth) -> Self {
        self.width = width;
        self
    }
}

fn close_listener(
    gate: DialogGate,
    trigger: DialogTrigger,
    handler: CloseHandler,
) -> impl Fn(&ClickEvent, &mut Window, &mut App) + 'static {
    move |_event, window, cx| {
        if gate.resolve(trigger) == Some(DialogRequest::Close) {
            tracing::debug!(?trigger, "Dialog close requested");
            handler(window, cx);
        }
    }
}

impl RenderOnce for Modal {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        if !self.state.is_open() {
            return Empty.into_any_element();
        }

        let gate = DialogGate::new(self.state, false);
        let on_close = self.on_close;
        let show_header = self.title.is_some() || self.show_close_button;

        let header = div()
            .px_6()
            .py_4()
            .border_b_1()
            .border_color(ClinicColors::border())
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .text_size(px(Typography::TEXT_LG))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(ClinicColors::text_primary())
                    .children(self.title),
            )
            .when(self.show_close_button, |el| {
                el.child(
                    div()
                        .id("modal-close")
                        .size(px(28.0))
                        .rounded_md()
                        .flex()
                        .items_center()
                        .justify_center()
                        .text_color(ClinicColors::text_muted())
                        .text_size(px(Typography::TEXT_LG))
                        .cursor_pointer()
                        .hover(|s| s.bg(ClinicColors::surface_muted()))
                        .when_some(on_close.clone(), |el, handler| {
                            el.on_click(close_listener(gate, DialogTrigger::CloseControl, handler))
                        })
                        .child("×"),
                )
            });

        let panel = div()
            .id("modal-panel")
            .occlude()
            .bg(ClinicColors::surface())
            .rounded_lg()
            .shadow_lg()
            .w(px(self.width.pixels()))
            .max_w_full()
            .flex()
            .flex_col()
            .when(show_header, |el| el.child(header))
            .child(
                div()
                    .px_6()
                    .py_4()
                    .flex()
                    .flex_col()
                    .gap_4()
                    .children(self.children),
            )
            .when_some(self.footer, |el, footer| {
                el.child(
                    div()
                        .px_6()
                        .py_4()
                        .border_t_1()
                        .border_color(ClinicColors::border())
                        .flex()
                        .justify_end()
                        .gap_3()
                        .child(footer),
                )
            });

        // Backdrop
        div()
            .id(self.id)
            .absolute()
            .inset_0()
            .occlude()
            .bg(ClinicColors::backdrop())
            .flex()
            .items_center()
            .justify_center()
            .when_some(on_close, |el, handler| {
                el.on_click(close_listener(gate, DialogTrigger::Backdrop, handler))
            })
            .child(panel)
            .into_any_element()
    }
}
