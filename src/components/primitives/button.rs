//! Button Component

use gpui::{
    App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::theme::colors::ClinicColors;
use crate::theme::typography::Typography;

/// Label shown while an action is in flight
pub const BUSY_LABEL: &str = "Processing...";

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button (teal)
    #[default]
    Primary,
    /// Secondary button (gray)
    Secondary,
    /// Bordered button on a transparent background
    Outline,
    /// Destructive action (red)
    Danger,
    /// Ghost button (transparent)
    Ghost,
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Small button
    Small,
    /// Medium button (default)
    #[default]
    Medium,
    /// Large button
    Large,
}

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    loading: bool,
    full_width: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Primary,
            size: ButtonSize::Medium,
            disabled: false,
            loading: false,
            full_width: false,
            on_click: None,
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the button size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set whether the button is loading
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Stretch to the width of the parent
    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    /// Set the click handler
    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Create a primary button
    pub fn primary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Primary)
    }

    /// Create a secondary button
    pub fn secondary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Secondary)
    }

    /// Create an outline button
    pub fn outline(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Outline)
    }

    /// Create a danger button
    pub fn danger(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Danger)
    }

    /// Create a ghost button
    pub fn ghost(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Ghost)
    }

    /// Whether a click reaches the handler
    pub fn is_interactive(&self) -> bool {
        !self.disabled && !self.loading
    }

    /// The text actually shown
    pub fn display_label(&self) -> SharedString {
        if self.loading {
            BUSY_LABEL.into()
        } else {
            self.label.clone()
        }
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg_color, text_color, hover_bg, border_color) = match self.variant {
            ButtonVariant::Primary => (
                ClinicColors::primary(),
                ClinicColors::text_on_color(),
                ClinicColors::primary_hover(),
                ClinicColors::primary(),
            ),
            ButtonVariant::Secondary => (
                ClinicColors::surface_muted(),
                ClinicColors::text_primary(),
                ClinicColors::border(),
                ClinicColors::surface_muted(),
            ),
            ButtonVariant::Outline => (
                gpui::rgba(0x00000000),
                ClinicColors::text_primary(),
                ClinicColors::surface_muted(),
                ClinicColors::border_strong(),
            ),
            ButtonVariant::Danger => (
                ClinicColors::danger(),
                ClinicColors::text_on_color(),
                ClinicColors::danger_hover(),
                ClinicColors::danger(),
            ),
            ButtonVariant::Ghost => (
                gpui::rgba(0x00000000),
                ClinicColors::text_secondary(),
                ClinicColors::surface_muted(),
                gpui::rgba(0x00000000),
            ),
        };

        let (padding_x, padding_y, font_size) = match self.size {
            ButtonSize::Small => (px(10.0), px(4.0), px(Typography::TEXT_XS)),
            ButtonSize::Medium => (px(16.0), px(8.0), px(Typography::TEXT_SM)),
            ButtonSize::Large => (px(24.0), px(12.0), px(Typography::TEXT_BASE)),
        };

        let interactive = self.is_interactive();
        let label = self.display_label();

        let mut element = div()
            .id(self.id)
            .flex()
            .items_center()
            .justify_center()
            .gap_2()
            .px(padding_x)
            .py(padding_y)
            .bg(bg_color)
            .border_1()
            .border_color(border_color)
            .text_color(text_color)
            .text_size(font_size)
            .font_weight(gpui::FontWeight::MEDIUM)
            .rounded_md()
            .when(self.full_width, |el| el.w_full())
            .when(self.loading, |el| el.child("⟳"))
            .child(label);

        if interactive {
            element = element.cursor_pointer().hover(|s| s.bg(hover_bg));

            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        } else {
            element = element.opacity(0.5).cursor_not_allowed();
        }

        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_replaces_label_and_blocks_clicks() {
        let button = Button::primary("save", "Save").loading(true);
        assert!(!button.is_interactive());
        assert_eq!(button.display_label().as_ref(), BUSY_LABEL);
    }

    #[test]
    fn test_disabled_keeps_label() {
        let button = Button::secondary("back", "Back").disabled(true);
        assert!(!button.is_interactive());
        assert_eq!(button.display_label().as_ref(), "Back");
    }

    #[test]
    fn test_default_is_interactive() {
        assert!(Button::ghost("more", "More").is_interactive());
    }
}
