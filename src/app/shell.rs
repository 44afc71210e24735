//! Shell - Window root with header and the guarded dashboard
//!
//! The dashboard is rendered inside an [`ErrorBoundary`]. Reloading from the
//! fallback resets the dashboard state and mounts a new boundary, since a
//! boundary that captured an error stays in its fallback.

use gpui::{
    AppContext, ClickEvent, Context, Entity, IntoElement, ParentElement, Render, Styled, Window,
    div, prelude::*, px,
};
use gpui_component::h_flex;

use crate::app::dashboard::{DashboardState, render_dashboard};
use crate::components::composite::ErrorBoundary;
use crate::components::primitives::{BreadcrumbItem, Breadcrumbs, Button, ButtonSize};
use crate::config::AppConfig;
use crate::theme::colors::ClinicColors;
use crate::theme::typography::Typography;

pub struct Shell {
    dashboard: Entity<DashboardState>,
    boundary: Entity<ErrorBoundary>,
}

impl Shell {
    pub fn new(config: &AppConfig, cx: &mut Context<Self>) -> Self {
        let dashboard = cx.new(|cx| DashboardState::new(config.role, config.data_file.clone(), cx));
        let boundary = Self::mount_boundary(&dashboard, cx);
        Self {
            dashboard,
            boundary,
        }
    }

    fn mount_boundary(
        dashboard: &Entity<DashboardState>,
        cx: &mut Context<Self>,
    ) -> Entity<ErrorBoundary> {
        let shell = cx.entity().downgrade();
        let dashboard = dashboard.clone();

        cx.new(|cx| {
            cx.observe(&dashboard, |_, _, cx| cx.notify()).detach();
            ErrorBoundary::new(
                move |window, cx| render_dashboard(&dashboard, window, cx),
                cx,
            )
            .on_reload(move |_, cx| {
                let _ = shell.update(cx, |shell, cx| shell.reload(cx));
            })
        })
    }

    fn reload(&mut self, cx: &mut Context<Self>) {
        self.dashboard.update(cx, |state, cx| state.reload(cx));
        self.boundary = Self::mount_boundary(&self.dashboard, cx);
        cx.notify();
    }

    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let role = self.dashboard.read(cx).role();
        let switch_label = format!("Switch to {} view", role.toggled().label());

        h_flex()
            .w_full()
            .flex_none()
            .justify_between()
            .items_center()
            .px_6()
            .py_3()
            .bg(ClinicColors::surface())
            .border_b_1()
            .border_color(ClinicColors::border())
            .child(
                h_flex()
                    .gap_4()
                    .items_center()
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_LG))
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(ClinicColors::primary())
                            .child("Clinic"),
                    )
                    .child(
                        Breadcrumbs::new([
                            BreadcrumbItem::link("Home"),
                            BreadcrumbItem::text(format!("{} dashboard", role.label())),
                        ])
                        .on_navigate(|index, _, _| {
                            tracing::info!(index, "Breadcrumb navigation requested");
                        }),
                    ),
            )
            .child(
                h_flex()
                    .gap_2()
                    .child(
                        Button::ghost("simulate-failure", "Simulate failure")
                            .size(ButtonSize::Small)
                            .on_click(cx.listener(|this, _: &ClickEvent, _, cx| {
                                this.dashboard.update(cx, |state, cx| state.simulate_failure(cx));
                            })),
                    )
                    .child(
                        Button::outline("switch-role", switch_label)
                            .size(ButtonSize::Small)
                            .on_click(cx.listener(|this, _: &ClickEvent, _, cx| {
                                this.dashboard.update(cx, |state, cx| {
                                    let next = state.role().toggled();
                                    state.set_role(next, cx);
                                });
                                cx.notify();
                            })),
                    ),
            )
    }
}

impl Render for Shell {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(ClinicColors::background())
            .child(self.render_header(cx))
            .child(
                div()
                    .flex_1()
                    .relative()
                    .overflow_hidden()
                    .child(self.boundary.clone()),
            )
    }
}
