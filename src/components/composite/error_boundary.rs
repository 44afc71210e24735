//! ErrorBoundary Component
//!
//! Wraps a render closure that returns `Result<AnyElement>`. The first `Err`
//! is recorded, reported to a [`DiagnosticSink`], and replaced by a fallback
//! view with a single reload action. A boundary that has captured an error
//! never calls its content again; the host recovers by mounting a new one.
//!
//! Only errors returned from the render closure are contained. Failures in
//! click handlers or spawned tasks belong to whoever issued them.

use std::rc::Rc;

use gpui::{
    AnyElement, App, ClickEvent, Context, IntoElement, ParentElement, Render, SharedString, Styled,
    Window, div, px,
};
use gpui_component::v_flex;

use crate::components::primitives::Button;
use crate::error::{Error, Result};
use crate::theme::colors::ClinicColors;
use crate::theme::typography::Typography;

pub const FALLBACK_TITLE: &str = "Something went wrong";
pub const DEFAULT_ERROR_MESSAGE: &str = "An unexpected error occurred";
pub const RELOAD_LABEL: &str = "Reload page";

/// Where captured render failures are reported
pub trait DiagnosticSink {
    fn report(&self, error: &Error);
}

/// Reports through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, error: &Error) {
        tracing::error!(error = %error, "View failed to render, showing fallback");
    }
}

/// Content of the fallback view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackView {
    pub title: SharedString,
    pub message: SharedString,
    pub action_label: SharedString,
}

impl FallbackView {
    pub fn for_error(error: &Error) -> Self {
        Self {
            title: FALLBACK_TITLE.into(),
            message: error
                .user_message()
                .map(SharedString::from)
                .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.into()),
            action_label: RELOAD_LABEL.into(),
        }
    }
}

/// Outcome of a contained render
#[derive(Debug, Clone, PartialEq)]
pub enum Contained<T> {
    Rendered(T),
    Fallback(FallbackView),
}

/// One-shot capture of a render failure
#[derive(Debug, Default)]
pub struct ErrorCapture {
    error: Option<Error>,
}

impl ErrorCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Run `render` unless a failure was already captured.
    pub fn contain<T>(
        &mut self,
        sink: &dyn DiagnosticSink,
        render: impl FnOnce() -> Result<T>,
    ) -> Contained<T> {
        if let Some(error) = &self.error {
            return Contained::Fallback(FallbackView::for_error(error));
        }

        match render() {
            Ok(value) => Contained::Rendered(value),
            Err(error) => {
                sink.report(&error);
                let fallback = FallbackView::for_error(&error);
                self.error = Some(error);
                Contained::Fallback(fallback)
            }
        }
    }
}

type ContentFn = Box<dyn Fn(&mut Window, &mut App) -> Result<AnyElement> + 'static>;

pub struct ErrorBoundary {
    capture: ErrorCapture,
    content: ContentFn,
    sink: Rc<dyn DiagnosticSink>,
    on_reload: Option<Rc<dyn Fn(&mut Window, &mut App) + 'static>>,
}

impl ErrorBoundary {
    pub fn new(
        content: impl Fn(&mut Window, &mut App) -> Result<AnyElement> + 'static,
        _cx: &mut Context<Self>,
    ) -> Self {
        Self {
            capture: ErrorCapture::new(),
            content: Box::new(content),
            sink: Rc::new(TracingSink),
            on_reload: None,
        }
    }

    /// The fallback's recovery action
    pub fn on_reload(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_reload = Some(Rc::new(handler));
        self
    }

    fn render_fallback(&self, fallback: FallbackView) -> AnyElement {
        let mut reload = Button::primary("error-boundary-reload", fallback.action_label);
        if let Some(handler) = self.on_reload.clone() {
            reload = reload.on_click(move |_: &ClickEvent, window, cx| {
                tracing::info!("Reload requested from error fallback");
                handler(window, cx);
            });
        }

        v_flex()
            .size_full()
            .items_center()
            .justify_center()
            .gap_3()
            .p_8()
            .child(
                div()
                    .text_size(px(32.0))
                    .text_color(ClinicColors::danger())
                    .child("⚠"),
            )
            .child(
                div()
                    .text_size(px(Typography::TEXT_XL))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(ClinicColors::text_primary())
                    .child(fallback.title),
            )
            .child(
                div()
                    .max_w(px(480.0))
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(ClinicColors::text_secondary())
                    .child(fallback.message),
            )
            .child(reload)
            .into_any_element()
    }
}

impl Render for ErrorBoundary {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let sink = self.sink.clone();
        let content = &self.content;
        let contained = self.capture.contain(sink.as_ref(), || content(window, cx));

        match contained {
            Contained::Rendered(element) => element,
            Contained::Fallback(fallback) => self.render_fallback(fallback),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        reports: RefCell<Vec<String>>,
    }

    impl DiagnosticSink for RecordingSink {
        fn report(&self, error: &Error) {
            self.reports.borrow_mut().push(error.to_string());
        }
    }

    #[test]
    fn test_transparent_when_render_succeeds() {
        let sink = RecordingSink::default();
        let mut capture = ErrorCapture::new();

        let out = capture.contain(&sink, || Ok("dashboard"));
        assert_eq!(out, Contained::Rendered("dashboard"));
        assert!(!capture.has_error());
        assert!(sink.reports.borrow().is_empty());
    }

    #[test]
    fn test_failure_shows_fallback_and_reports_once() {
        let sink = RecordingSink::default();
        let mut capture = ErrorCapture::new();

        let out = capture.contain::<()>(&sink, || Err(Error::render("stats unavailable")));
        match out {
            Contained::Fallback(view) => {
                assert_eq!(view.title.as_ref(), FALLBACK_TITLE);
                assert_eq!(view.message.as_ref(), "stats unavailable");
                assert_eq!(view.action_label.as_ref(), RELOAD_LABEL);
            }
            Contained::Rendered(_) => panic!("expected fallback"),
        }
        assert!(capture.has_error());
        assert_eq!(sink.reports.borrow().len(), 1);
    }

    #[test]
    fn test_captured_boundary_does_not_retry() {
        let sink = RecordingSink::default();
        let mut capture = ErrorCapture::new();
        let _ = capture.contain::<()>(&sink, || Err(Error::render("boom")));

        let mut called = false;
        let out = capture.contain(&sink, || {
            called = true;
            Ok(())
        });

        assert!(!called);
        assert!(matches!(out, Contained::Fallback(_)));
        assert_eq!(sink.reports.borrow().len(), 1);
    }

    #[test]
    fn test_default_message_when_error_has_none() {
        let view = FallbackView::for_error(&Error::Render { message: None });
        assert_eq!(view.message.as_ref(), DEFAULT_ERROR_MESSAGE);
    }
}
