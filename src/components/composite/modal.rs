//! Modal Component
//!
//! Backdrop plus dialog box, with an optional confirm/cancel footer.

use gpui::{
    AnyElement, App, ClickEvent, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::components::primitives::button::Button;
use crate::theme::colors::DashColors;

type Handler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// Footer action of a modal
struct Action {
    label: SharedString,
    danger: bool,
    handler: Handler,
}

#[derive(IntoElement)]
pub struct Modal {
    title: SharedString,
    children: Vec<AnyElement>,
    on_close: Option<Handler>,
    confirm: Option<Action>,
    cancel: Option<Action>,
}

impl Modal {
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            children: Vec::new(),
            on_close: None,
            confirm: None,
            cancel: None,
        }
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    /// Close button in the title bar
    pub fn on_close(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_close = Some(Box::new(handler));
        self
    }

    /// Destructive confirm button in the footer
    pub fn on_confirm(
        mut self,
        label: impl Into<SharedString>,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.confirm = Some(Action {
            label: label.into(),
            danger: true,
            handler: Box::new(handler),
        });
        self
    }

    pub fn on_cancel(
        mut self,
        label: impl Into<SharedString>,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.cancel = Some(Action {
            label: label.into(),
            danger: false,
            handler: Box::new(handler),
        });
        self
    }
}

fn action_button(id: &'static str, action: Action) -> Button {
    let button = if action.danger {
        Button::danger(id, action.label)
    } else {
        Button::secondary(id, action.label)
    };
    button.on_click(action.handler)
}

impl RenderOnce for Modal {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let has_footer = self.confirm.is_some() || self.cancel.is_some();

        let mut footer = div().flex().justify_end().gap_2().px_6().pb_4();
        if let Some(cancel) = self.cancel {
            footer = footer.child(action_button("modal-cancel", cancel));
        }
        if let Some(confirm) = self.confirm {
            footer = footer.child(action_button("modal-confirm", confirm));
        }

        div()
            .id("modal-backdrop")
            .absolute()
            .inset_0()
            .bg(DashColors::backdrop())
            .flex()
            .items_center()
            .justify_center()
            .occlude()
            .child(
                div()
                    .bg(DashColors::content_bg())
                    .rounded_lg()
                    .shadow_lg()
                    .min_w(px(360.0))
                    .max_w(px(520.0))
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .px_6()
                            .py_4()
                            .border_b_1()
                            .border_color(DashColors::border())
                            .flex()
                            .items_center()
                            .justify_between()
                            .child(
                                div()
                                    .text_size(px(16.0))
                                    .font_weight(gpui::FontWeight::SEMIBOLD)
                                    .text_color(DashColors::text_primary())
                                    .child(self.title),
                            )
                            .when_some(self.on_close, |el, handler| {
                                el.child(
                                    div()
                                        .id("modal-close")
                                        .size(px(24.0))
                                        .rounded_sm()
                                        .flex()
                                        .items_center()
                                        .justify_center()
                                        .text_color(DashColors::text_muted())
                                        .cursor_pointer()
                                        .hover(|s| s.bg(DashColors::table_row_hover()))
                                        .on_click(handler)
                                        .child("×"),
                                )
                            }),
                    )
                    .child(
                        div()
                            .px_6()
                            .py_4()
                            .flex()
                            .flex_col()
                            .gap_4()
                            .text_sm()
                            .text_color(DashColors::text_primary())
                            .children(self.children),
                    )
                    .when(has_footer, |el| el.child(footer)),
            )
    }
}
