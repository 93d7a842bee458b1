//! Application - App Initialization and Window Management

use gpui::{
    App, AppContext, Application, Bounds, KeyBinding, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions, actions, px, size,
};

use crate::app::entities::{AppEntities, AppServices};
use crate::app::workspace::Workspace;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::domain::config::AppConfig;
use crate::features::users::controller::UsersController;
use crate::i18n::{Locale, t};
use crate::services::UserService;

actions!(admin_dashboard, [Quit]);

/// Run the dashboard window until it is closed
pub fn run_app(config: AppConfig) {
    Application::new().run(move |cx: &mut App| {
        gpui_component::init(cx);

        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());
        cx.bind_keys([
            KeyBinding::new("cmd-q", Quit, None),
            KeyBinding::new("ctrl-q", Quit, None),
        ]);

        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let (users, event_rx) = match UserService::from_config(&config) {
            Ok(pair) => pair,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create user service");
                cx.quit();
                return;
            }
        };

        let entities = AppEntities::init(config.table.effective_page_size(), cx);
        cx.set_global(entities.clone());
        cx.set_global(AppServices { users, config });

        let bounds = Bounds::centered(
            None,
            size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from(t(Locale::default(), "app-title"))),
                ..Default::default()
            }),
            ..Default::default()
        };

        let window_entities = entities.clone();
        if let Err(e) = cx.open_window(window_options, move |window, cx| {
            cx.new(|cx| Workspace::new(window_entities, event_rx, window, cx))
        }) {
            tracing::error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        UsersController::new(entities).refresh(cx);
        cx.activate(true);
    });
}
