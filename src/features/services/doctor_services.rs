//! DoctorServices - Selectable list of a doctor's active services

use std::rc::Rc;

use gpui::{App, IntoElement, ParentElement, RenderOnce, Styled, Window, div, px};
use gpui_component::v_flex;
use uuid::Uuid;

use super::service_card::{SelectHandler, ServiceCard, ServiceCardModel};
use crate::components::composite::Card;
use crate::domain::Service;
use crate::theme::colors::ClinicColors;
use crate::theme::typography::Typography;

pub const NO_SERVICES_MESSAGE: &str = "No services available";

/// Active services in supplied order, with the selection resolved.
///
/// `None` means the empty state is shown instead of a list.
pub fn service_models(
    services: &[Service],
    selected: Option<Uuid>,
) -> Option<Vec<ServiceCardModel>> {
    let models: Vec<ServiceCardModel> = services
        .iter()
        .filter(|service| service.is_active)
        .map(|service| ServiceCardModel::new(service, selected == Some(service.id)))
        .collect();

    (!models.is_empty()).then_some(models)
}

#[derive(IntoElement)]
pub struct DoctorServices {
    services: Vec<Service>,
    selected_service_id: Option<Uuid>,
    on_select: Option<SelectHandler>,
}

impl DoctorServices {
    pub fn new(services: Vec<Service>) -> Self {
        Self {
            services,
            selected_service_id: None,
            on_select: None,
        }
    }

    pub fn selected(mut self, id: Option<Uuid>) -> Self {
        self.selected_service_id = id;
        self
    }

    pub fn on_select(mut self, handler: impl Fn(Uuid, &mut Window, &mut App) + 'static) -> Self {
        self.on_select = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for DoctorServices {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let card = Card::new()
            .title("Services")
            .subtitle("Choose the consultation to book");

        let Some(models) = service_models(&self.services, self.selected_service_id) else {
            return card.child(
                div()
                    .py_6()
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(ClinicColors::text_muted())
                    .child(NO_SERVICES_MESSAGE),
            );
        };

        let on_select = self.on_select;
        card.child(v_flex().gap_3().children(models.into_iter().map(|model| {
            let card = ServiceCard::from_model(model);
            match on_select.clone() {
                Some(handler) => card.on_select(move |id, window, cx| handler(id, window, cx)),
                None => card,
            }
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(name: &str, is_active: bool) -> Service {
        Service {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
            price: 50.0,
            duration_minutes: 30,
            is_active,
        }
    }

    #[test]
    fn test_exactly_the_matching_item_is_selected() {
        let services = vec![
            service("Consultation", true),
            service("Follow-up", true),
            service("ECG", true),
        ];
        let models = service_models(&services, Some(services[1].id)).expect("non-empty");

        let selected: Vec<usize> = models
            .iter()
            .enumerate()
            .filter(|(_, m)| m.selected)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(selected, [1]);
    }

    #[test]
    fn test_inactive_only_list_shows_empty_state() {
        assert_eq!(service_models(&[service("Retired", false)], None), None);
        assert_eq!(service_models(&[], None), None);
    }

    #[test]
    fn test_inactive_services_are_skipped_in_order() {
        let services = vec![
            service("A", true),
            service("B", false),
            service("C", true),
        ];
        let names: Vec<String> = service_models(&services, None)
            .expect("non-empty")
            .into_iter()
            .map(|m| m.name.to_string())
            .collect();
        assert_eq!(names, ["A", "C"]);
    }

    #[test]
    fn test_unknown_selection_selects_nothing() {
        let services = vec![service("A", true), service("B", true)];
        let models = service_models(&services, Some(Uuid::new_v4())).expect("non-empty");
        assert!(models.iter().all(|m| !m.selected));
    }
}
