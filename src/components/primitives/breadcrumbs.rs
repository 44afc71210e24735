//! Breadcrumbs Component

use std::rc::Rc;

use gpui::{
    App, ClickEvent, Empty, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};
use gpui_component::h_flex;

use crate::theme::colors::ClinicColors;
use crate::theme::typography::Typography;

/// One step of the trail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbItem {
    pub label: SharedString,
    pub navigable: bool,
}

impl BreadcrumbItem {
    pub fn link(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            navigable: true,
        }
    }

    pub fn text(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            navigable: false,
        }
    }
}

#[derive(IntoElement)]
pub struct Breadcrumbs {
    items: Vec<BreadcrumbItem>,
    on_navigate: Option<Rc<dyn Fn(usize, &mut Window, &mut App) + 'static>>,
}

impl Breadcrumbs {
    pub fn new(items: impl IntoIterator<Item = BreadcrumbItem>) -> Self {
        Self {
            items: items.into_iter().collect(),
            on_navigate: None,
        }
    }

    /// Called with the index of the clicked item
    pub fn on_navigate(mut self, handler: impl Fn(usize, &mut Window, &mut App) + 'static) -> Self {
        self.on_navigate = Some(Rc::new(handler));
        self
    }

    /// Whether the item at `index` responds to clicks; the last item is the
    /// current page and never does.
    pub fn is_clickable(&self, index: usize) -> bool {
        index + 1 < self.items.len() && self.items.get(index).is_some_and(|item| item.navigable)
    }
}

impl RenderOnce for Breadcrumbs {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        if self.items.is_empty() {
            return Empty.into_any_element();
        }

        let clickable: Vec<bool> = (0..self.items.len()).map(|i| self.is_clickable(i)).collect();
        let last = self.items.len() - 1;
        let mut trail = h_flex().gap_2().text_size(px(Typography::TEXT_SM));

        for (index, item) in self.items.into_iter().enumerate() {
            if index > 0 {
                trail = trail.child(div().text_color(ClinicColors::text_muted()).child("›"));
            }

            let mut crumb = div()
                .id(("breadcrumb", index))
                .child(item.label);

            crumb = if index == last {
                crumb
                    .text_color(ClinicColors::text_primary())
                    .font_weight(gpui::FontWeight::MEDIUM)
            } else {
                crumb.text_color(ClinicColors::text_secondary())
            };

            if clickable[index] {
                crumb = crumb
                    .cursor_pointer()
                    .hover(|s| s.text_color(ClinicColors::primary()))
                    .when_some(self.on_navigate.clone(), |el, handler| {
                        el.on_click(move |_event: &ClickEvent, window, cx| {
                            handler(index, window, cx)
                        })
                    });
            }

            trail = trail.child(crumb);
        }

        trail.into_any_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_item_is_never_clickable() {
        let crumbs = Breadcrumbs::new([
            BreadcrumbItem::link("Dashboard"),
            BreadcrumbItem::text("Records"),
            BreadcrumbItem::link("Prescription"),
        ]);
        assert!(crumbs.is_clickable(0));
        assert!(!crumbs.is_clickable(1));
        assert!(!crumbs.is_clickable(2));
        assert!(!crumbs.is_clickable(3));
    }
}
