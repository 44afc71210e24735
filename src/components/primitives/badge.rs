//! Badge Component
//!
//! Small rounded label for statuses and markers.

use gpui::{
    App, IntoElement, ParentElement, RenderOnce, Rgba, SharedString, Styled, Window, div, px,
};

use crate::domain::AppointmentStatus;
use crate::theme::colors::ClinicColors;
use crate::theme::typography::Typography;

/// Badge color scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Neutral,
    Primary,
    Success,
    Warning,
    Danger,
    Info,
}

impl BadgeVariant {
    /// (background, text)
    pub fn colors(&self) -> (Rgba, Rgba) {
        match self {
            BadgeVariant::Neutral => {
                (ClinicColors::surface_muted(), ClinicColors::text_secondary())
            }
            BadgeVariant::Primary => (ClinicColors::primary_soft(), ClinicColors::primary_hover()),
            BadgeVariant::Success => (ClinicColors::success_soft(), ClinicColors::success()),
            BadgeVariant::Warning => (ClinicColors::warning_soft(), ClinicColors::warning()),
            BadgeVariant::Danger => (ClinicColors::danger_soft(), ClinicColors::danger()),
            BadgeVariant::Info => (ClinicColors::info_soft(), ClinicColors::info()),
        }
    }
}

impl From<AppointmentStatus> for BadgeVariant {
    fn from(status: AppointmentStatus) -> Self {
        match status {
            AppointmentStatus::Pending => BadgeVariant::Warning,
            AppointmentStatus::Confirmed => BadgeVariant::Info,
            AppointmentStatus::Completed => BadgeVariant::Success,
            AppointmentStatus::Cancelled => BadgeVariant::Danger,
            AppointmentStatus::NoShow => BadgeVariant::Neutral,
        }
    }
}

/// Badge size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeSize {
    Small,
    #[default]
    Medium,
}

#[derive(IntoElement)]
pub struct Badge {
    label: SharedString,
    variant: BadgeVariant,
    size: BadgeSize,
}

impl Badge {
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            variant: BadgeVariant::Neutral,
            size: BadgeSize::Medium,
        }
    }

    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: BadgeSize) -> Self {
        self.size = size;
        self
    }

    /// Badge for an appointment status
    pub fn status(status: AppointmentStatus) -> Self {
        Self::new(status.label()).variant(status.into())
    }
}

impl RenderOnce for Badge {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg, fg) = self.variant.colors();
        let (padding_x, padding_y, font_size) = match self.size {
            BadgeSize::Small => (px(6.0), px(1.0), px(11.0)),
            BadgeSize::Medium => (px(8.0), px(2.0), px(Typography::TEXT_XS)),
        };

        div()
            .flex_none()
            .px(padding_x)
            .py(padding_y)
            .rounded_full()
            .bg(bg)
            .text_color(fg)
            .text_size(font_size)
            .font_weight(gpui::FontWeight::MEDIUM)
            .child(self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_variants() {
        assert_eq!(BadgeVariant::from(AppointmentStatus::Pending), BadgeVariant::Warning);
        assert_eq!(BadgeVariant::from(AppointmentStatus::Completed), BadgeVariant::Success);
        assert_eq!(BadgeVariant::from(AppointmentStatus::Cancelled), BadgeVariant::Danger);
    }
}
