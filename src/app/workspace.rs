//! Workspace - Main Shell with Layout and Event Pump
//!
//! Header, the users page and the status bar. The event pump applies
//! service events to the entities in arrival order.

use gpui::{
    App, ClickEvent, Context, Entity, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window, div, px,
};

use crate::app::entities::AppEntities;
use crate::constants::STATUS_BAR_HEIGHT;
use crate::eventing::AppEvent;
use crate::features::users::page::UsersPage;
use crate::i18n::{t, t_count};
use crate::state::LogLevel;
use crate::theme::colors::DashColors;
use crate::utils::format_time;

pub struct Workspace {
    entities: AppEntities,
    users_page: Entity<UsersPage>,
}

impl Workspace {
    pub fn new(
        entities: AppEntities,
        event_rx: flume::Receiver<AppEvent>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let users_page = cx.new(|cx| UsersPage::new(entities.clone(), window, cx));

        Self::start_event_pump(event_rx, entities.clone(), cx);

        cx.observe(&entities.i18n, |_this, _, cx| cx.notify()).detach();
        cx.observe(&entities.logs, |_this, _, cx| cx.notify()).detach();
        cx.observe(&entities.table, |_this, _, cx| cx.notify()).detach();

        Self {
            entities,
            users_page,
        }
    }

    /// Start the event pump that dispatches service events to UI
    fn start_event_pump(
        event_rx: flume::Receiver<AppEvent>,
        entities: AppEntities,
        cx: &mut Context<Self>,
    ) {
        cx.spawn(async move |_this, cx| {
            while let Ok(event) = event_rx.recv_async().await {
                let entities = entities.clone();
                let _ = cx.update(|cx: &mut App| {
                    dispatch_event(event, &entities, cx);
                });
            }
        })
        .detach();
    }

    fn render_header(&self, cx: &Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let entities = self.entities.clone();

        div()
            .h(px(48.0))
            .w_full()
            .bg(DashColors::header_bg())
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            .child(
                div()
                    .text_color(DashColors::header_text())
                    .text_size(px(18.0))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .child(t(locale, "app-title")),
            )
            .child(
                div()
                    .id("lang-switcher")
                    .px_3()
                    .py_1()
                    .rounded_md()
                    .bg(gpui::rgba(0xffffff22))
                    .text_color(DashColors::header_text())
                    .text_size(px(13.0))
                    .cursor_pointer()
                    .hover(|s| s.bg(gpui::rgba(0xffffff44)))
                    .on_click(move |_event: &ClickEvent, _window, cx| {
                        entities.i18n.update(cx, |i18n, cx| {
                            i18n.toggle_locale();
                            cx.notify();
                        });
                    })
                    .child(locale.toggled().display_name()),
            )
    }

    fn render_status_bar(&self, cx: &Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let selected = self.entities.table.read(cx).selection().len();

        let (color, message) = match self.entities.logs.read(cx).latest() {
            Some(entry) => {
                let color = match entry.level {
                    LogLevel::Error => DashColors::danger(),
                    LogLevel::Warn => DashColors::warning(),
                    LogLevel::Info | LogLevel::Debug => DashColors::text_secondary(),
                };
                (color, format!("{} {}", format_time(&entry.timestamp), entry.message))
            }
            None => (DashColors::text_secondary(), t(locale, "status-ready")),
        };

        div()
            .h(px(STATUS_BAR_HEIGHT))
            .w_full()
            .px_4()
            .flex()
            .items_center()
            .justify_between()
            .bg(DashColors::status_bar_bg())
            .border_t_1()
            .border_color(DashColors::border())
            .text_xs()
            .child(div().text_color(color).child(message))
            .child(
                div()
                    .text_color(DashColors::text_secondary())
                    .child(t_count(locale, "status-selected", selected)),
            )
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(DashColors::background())
            .child(self.render_header(cx))
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    .child(self.users_page.clone()),
            )
            .child(self.render_status_bar(cx))
    }
}

/// Dispatch an AppEvent to the appropriate entity
fn dispatch_event(event: AppEvent, entities: &AppEntities, cx: &mut App) {
    match event {
        AppEvent::Log {
            level,
            message,
            timestamp,
        } => {
            entities.logs.update(cx, |logs, cx| {
                logs.push(level, message, timestamp);
                cx.notify();
            });
        }
        AppEvent::UsersLoaded { users } => {
            entities.table.update(cx, |table, cx| {
                table.load(users);
                cx.notify();
            });
        }
        AppEvent::UsersLoadFailed { message } => {
            entities.table.update(cx, |table, cx| {
                table.fail_load(message);
                cx.notify();
            });
        }
        AppEvent::ExportFinished { path } => {
            entities.logs.update(cx, |logs, cx| {
                logs.push_now(LogLevel::Info, format!("Exported to {}", path.display()));
                cx.notify();
            });
        }
        AppEvent::ExportFailed { message } => {
            entities.logs.update(cx, |logs, cx| {
                logs.push_now(LogLevel::Error, format!("Export failed: {message}"));
                cx.notify();
            });
        }
    }
}
