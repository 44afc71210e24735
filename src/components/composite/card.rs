//! Card Component
//!
//! Container with optional header, actions, and footer around a body.
//! Regions that are not supplied are not emitted at all.

use gpui::{
    AnyElement, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div,
    prelude::*, px,
};
use gpui_component::{h_flex, v_flex};

use crate::theme::colors::ClinicColors;
use crate::theme::typography::Typography;

/// Drop shadow strength
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardShadow {
    None,
    #[default]
    Small,
    Medium,
}

/// Which regions a card emits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardRegions {
    pub header: bool,
    pub footer: bool,
}

impl CardRegions {
    pub fn resolve(
        has_title: bool,
        has_subtitle: bool,
        has_actions: bool,
        has_footer: bool,
    ) -> Self {
        Self {
            header: has_title || has_subtitle || has_actions,
            footer: has_footer,
        }
    }
}

#[derive(IntoElement)]
pub struct Card {
    title: Option<SharedString>,
    subtitle: Option<SharedString>,
    actions: Option<AnyElement>,
    footer: Option<AnyElement>,
    children: Vec<AnyElement>,
    bordered: bool,
    shadow: CardShadow,
    padded: bool,
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl Card {
    pub fn new() -> Self {
        Self {
            title: None,
            subtitle: None,
            actions: None,
            footer: None,
            children: Vec::new(),
            bordered: true,
            shadow: CardShadow::Small,
            padded: true,
        }
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<SharedString>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Trailing, right-aligned header content
    pub fn actions(mut self, actions: impl IntoElement) -> Self {
        self.actions = Some(actions.into_any_element());
        self
    }

    /// Content below a divider
    pub fn footer(mut self, footer: impl IntoElement) -> Self {
        self.footer = Some(footer.into_any_element());
        self
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = impl IntoElement>) -> Self {
        self.children
            .extend(children.into_iter().map(IntoElement::into_any_element));
        self
    }

    pub fn bordered(mut self, bordered: bool) -> Self {
        self.bordered = bordered;
        self
    }

    pub fn shadow(mut self, shadow: CardShadow) -> Self {
        self.shadow = shadow;
        self
    }

    /// Pad the body; off for edge-to-edge lists
    pub fn padded(mut self, padded: bool) -> Self {
        self.padded = padded;
        self
    }

    pub fn regions(&self) -> CardRegions {
        CardRegions::resolve(
            self.title.is_some(),
            self.subtitle.is_some(),
            self.actions.is_some(),
            self.footer.is_some(),
        )
    }
}

impl RenderOnce for Card {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let regions = self.regions();

        let mut card = v_flex()
            .w_full()
            .bg(ClinicColors::surface())
            .rounded_lg()
            .overflow_hidden()
            .when(self.bordered, |el| {
                el.border_1().border_color(ClinicColors::border())
            });

        card = match self.shadow {
            CardShadow::None => card,
            CardShadow::Small => card.shadow_sm(),
            CardShadow::Medium => card.shadow_md(),
        };

        if regions.header {
            card = card.child(
                h_flex()
                    .px_5()
                    .pt_4()
                    .when(!self.padded, |el| el.pb_4())
                    .items_start()
                    .justify_between()
                    .gap_4()
                    .child(
                        v_flex()
                            .gap_1()
                            .when_some(self.title, |el, title| {
                                el.child(
                                    div()
                                        .text_size(px(Typography::TEXT_BASE))
                                        .font_weight(gpui::FontWeight::SEMIBOLD)
                                        .text_color(ClinicColors::text_primary())
                                        .child(title),
                                )
                            })
                            .when_some(self.subtitle, |el, subtitle| {
                                el.child(
                                    div()
                                        .text_size(px(Typography::TEXT_SM))
                                        .text_color(ClinicColors::text_secondary())
                                        .child(subtitle),
                                )
                            }),
                    )
                    .when_some(self.actions, |el, actions| {
                        el.child(h_flex().flex_none().gap_2().child(actions))
                    }),
            );
        }

        card = card.child(
            v_flex()
                .gap_3()
                .when(self.padded, |el| el.px_5().py_4())
                .children(self.children),
        );

        if regions.footer {
            card = card.when_some(self.footer, |el, footer| {
                el.child(
                    div()
                        .px_5()
                        .py_3()
                        .border_t_1()
                        .border_color(ClinicColors::border())
                        .child(footer),
                )
            });
        }

        card
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_only_has_no_header_or_footer() {
        let regions = CardRegions::resolve(false, false, false, false);
        assert!(!regions.header);
        assert!(!regions.footer);
    }

    #[test]
    fn test_any_header_part_emits_header() {
        assert!(CardRegions::resolve(true, false, false, false).header);
        assert!(CardRegions::resolve(false, true, false, false).header);
        assert!(CardRegions::resolve(false, false, true, false).header);
    }

    #[test]
    fn test_footer_is_independent_of_header() {
        let regions = CardRegions::resolve(false, false, false, true);
        assert!(!regions.header);
        assert!(regions.footer);
    }

    #[test]
    fn test_card_defaults() {
        let card = Card::new().title("Upcoming");
        assert!(card.regions().header);
        assert!(!card.regions().footer);
        assert!(card.bordered);
        assert_eq!(card.shadow, CardShadow::Small);
    }
}
