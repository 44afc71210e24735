//! Application - App initialization and window management

use gpui::{
    App, AppContext, Application, Bounds, KeyBinding, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, actions, px,
};

use crate::app::shell::Shell;
use crate::config::AppConfig;

actions!(clinic, [Quit]);

/// Open the main window and run until it is closed
pub fn run_app(config: AppConfig) {
    Application::new().run(move |cx: &mut App| {
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());
        cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let bounds = Bounds::centered(
            None,
            gpui::size(px(config.window_width), px(config.window_height)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Clinic")),
                ..Default::default()
            }),
            ..Default::default()
        };

        tracing::info!(role = config.role.label(), "Opening main window");
        if let Err(e) = cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Shell::new(&config, cx))
        }) {
            tracing::error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
