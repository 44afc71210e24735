//! ServiceCard - One bookable service, optionally highlighted as selected

use std::rc::Rc;

use gpui::{
    App, ClickEvent, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};
use gpui_component::{h_flex, v_flex};
use uuid::Uuid;

use crate::components::primitives::{Badge, BadgeSize, BadgeVariant};
use crate::domain::Service;
use crate::theme::colors::ClinicColors;
use crate::theme::typography::Typography;
use crate::utils::format::truncate;

pub const SELECTED_LABEL: &str = "Selected";
/// Longer descriptions are cut with an ellipsis
pub const DESCRIPTION_MAX_CHARS: usize = 140;

/// Selection callback, receives the service id
pub type SelectHandler = Rc<dyn Fn(Uuid, &mut Window, &mut App) + 'static>;

/// Display values derived from a [`Service`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCardModel {
    pub id: Uuid,
    pub name: SharedString,
    pub description: Option<SharedString>,
    pub price_label: SharedString,
    pub duration_label: SharedString,
    pub selected: bool,
}

impl ServiceCardModel {
    pub fn new(service: &Service, selected: bool) -> Self {
        Self {
            id: service.id,
            name: service.name.clone().into(),
            description: service
                .description
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(|d| SharedString::from(truncate(d, DESCRIPTION_MAX_CHARS))),
            price_label: service.price_label().into(),
            duration_label: service.duration_label().into(),
            selected,
        }
    }

    /// Clicking only selects an item that is not already selected
    pub fn accepts_click(&self) -> bool {
        !self.selected
    }
}

#[derive(IntoElement)]
pub struct ServiceCard {
    model: ServiceCardModel,
    on_select: Option<SelectHandler>,
}

impl ServiceCard {
    pub fn from_model(model: ServiceCardModel) -> Self {
        Self {
            model,
            on_select: None,
        }
    }

    pub fn on_select(mut self, handler: impl Fn(Uuid, &mut Window, &mut App) + 'static) -> Self {
        self.on_select = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for ServiceCard {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let model = self.model;
        let id = model.id;
        let accepts_click = model.accepts_click();

        let (border, bg) = if model.selected {
            (ClinicColors::primary(), ClinicColors::primary_soft())
        } else {
            (ClinicColors::border(), ClinicColors::surface())
        };

        let mut card = div()
            .id(SharedString::from(format!("service-{id}")))
            .w_full()
            .p_4()
            .rounded_lg()
            .border_2()
            .border_color(border)
            .bg(bg)
            .child(
                h_flex()
                    .items_start()
                    .justify_between()
                    .gap_3()
                    .child(
                        v_flex()
                            .flex_1()
                            .gap_1()
                            .child(
                                div()
                                    .text_size(px(Typography::TEXT_BASE))
                                    .font_weight(gpui::FontWeight::SEMIBOLD)
                                    .text_color(ClinicColors::text_primary())
                                    .child(model.name),
                            )
                            .when_some(model.description, |el, description| {
                                el.child(
                                    div()
                                        .text_size(px(Typography::TEXT_SM))
                                        .text_color(ClinicColors::text_secondary())
                                        .child(description),
                                )
                            }),
                    )
                    .when(model.selected, |el| {
                        el.child(
                            Badge::new(SELECTED_LABEL)
                                .variant(BadgeVariant::Primary)
                                .size(BadgeSize::Small),
                        )
                    }),
            )
            .child(
                h_flex()
                    .mt_3()
                    .justify_between()
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_LG))
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(ClinicColors::primary())
                            .child(model.price_label),
                    )
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_SM))
                            .text_color(ClinicColors::text_muted())
                            .child(format!("⏱ {}", model.duration_label)),
                    ),
            );

        if accepts_click {
            card = card
                .cursor_pointer()
                .hover(|s| s.border_color(ClinicColors::border_strong()));

            if let Some(handler) = self.on_select {
                card = card.on_click(move |_: &ClickEvent, window, cx| handler(id, window, cx));
            }
        }

        card
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(description: Option<&str>) -> Service {
        Service {
            id: Uuid::new_v4(),
            name: "General Consultation".to_string(),
            description: description.map(str::to_string),
            price: 80.0,
            duration_minutes: 45,
            is_active: true,
        }
    }

    #[test]
    fn test_model_formats_price_and_duration() {
        let model = ServiceCardModel::new(&service(Some("Routine check-up")), false);
        assert_eq!(model.price_label.as_ref(), "$80.00");
        assert_eq!(model.duration_label.as_ref(), "45 min");
        assert_eq!(model.description.as_ref().map(SharedString::as_str), Some("Routine check-up"));
    }

    #[test]
    fn test_missing_or_blank_description_is_absent() {
        assert!(ServiceCardModel::new(&service(None), false).description.is_none());
        assert!(ServiceCardModel::new(&service(Some("  ")), false).description.is_none());
    }

    #[test]
    fn test_long_description_is_shortened() {
        let long = "x".repeat(DESCRIPTION_MAX_CHARS + 20);
        let model = ServiceCardModel::new(&service(Some(&long)), false);
        let description = model.description.expect("description");
        assert_eq!(description.chars().count(), DESCRIPTION_MAX_CHARS);
        assert!(description.ends_with("..."));
    }

    #[test]
    fn test_selected_card_ignores_clicks() {
        let s = service(None);
        assert!(!ServiceCardModel::new(&s, true).accepts_click());
        assert!(ServiceCardModel::new(&s, false).accepts_click());
    }
}
