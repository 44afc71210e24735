//! StatGrid - Row of headline figures

use gpui::{
    App, IntoElement, ParentElement, RenderOnce, Rgba, SharedString, Styled, Window, div,
    prelude::*, px,
};
use gpui_component::{h_flex, v_flex};

use crate::theme::colors::ClinicColors;
use crate::theme::typography::Typography;

/// Accent color of a tile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Primary,
    Success,
    Warning,
    Info,
}

impl Tone {
    /// (icon background, icon foreground)
    fn colors(&self) -> (Rgba, Rgba) {
        match self {
            Tone::Primary => (ClinicColors::primary_soft(), ClinicColors::primary()),
            Tone::Success => (ClinicColors::success_soft(), ClinicColors::success()),
            Tone::Warning => (ClinicColors::warning_soft(), ClinicColors::warning()),
            Tone::Info => (ClinicColors::info_soft(), ClinicColors::info()),
        }
    }
}

/// One figure, already formatted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatTile {
    pub label: SharedString,
    pub value: SharedString,
    pub tone: Tone,
    pub glyph: &'static str,
    pub hint: Option<SharedString>,
}

impl StatTile {
    pub fn new(
        label: impl Into<SharedString>,
        value: impl Into<SharedString>,
        tone: Tone,
        glyph: &'static str,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            tone,
            glyph,
            hint: None,
        }
    }

    pub fn hint(mut self, hint: impl Into<SharedString>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

#[derive(IntoElement)]
pub struct StatGrid {
    tiles: Vec<StatTile>,
}

impl StatGrid {
    pub fn new(tiles: Vec<StatTile>) -> Self {
        Self { tiles }
    }
}

fn render_tile(tile: StatTile) -> impl IntoElement {
    let (icon_bg, icon_fg) = tile.tone.colors();

    h_flex()
        .flex_1()
        .min_w(px(200.0))
        .gap_4()
        .p_5()
        .bg(ClinicColors::surface())
        .rounded_lg()
        .border_1()
        .border_color(ClinicColors::border())
        .shadow_sm()
        .child(
            div()
                .flex_none()
                .size(px(44.0))
                .rounded_lg()
                .flex()
                .items_center()
                .justify_center()
                .bg(icon_bg)
                .text_color(icon_fg)
                .text_size(px(Typography::TEXT_XL))
                .child(tile.glyph),
        )
        .child(
            v_flex()
                .gap_1()
                .child(
                    div()
                        .text_size(px(Typography::TEXT_SM))
                        .text_color(ClinicColors::text_secondary())
                        .child(tile.label),
                )
                .child(
                    div()
                        .text_size(px(Typography::TEXT_2XL))
                        .font_weight(gpui::FontWeight::BOLD)
                        .text_color(ClinicColors::text_primary())
                        .child(tile.value),
                )
                .when_some(tile.hint, |el, hint| {
                    el.child(
                        div()
                            .text_size(px(Typography::TEXT_XS))
                            .text_color(ClinicColors::text_muted())
                            .child(hint),
                    )
                }),
        )
}

impl RenderOnce for StatGrid {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        h_flex()
            .w_full()
            .flex_wrap()
            .gap_4()
            .children(self.tiles.into_iter().map(render_tile))
    }
}
