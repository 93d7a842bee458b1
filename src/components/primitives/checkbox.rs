//! Checkbox Component

use gpui::{
    App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    StatefulInteractiveElement, Styled, Window, div, px,
};

use crate::theme::colors::DashColors;

type ChangeHandler = Box<dyn Fn(&bool, &mut Window, &mut App) + 'static>;

/// A checkbox; the handler receives the value it is toggled to
#[derive(IntoElement)]
pub struct Checkbox {
    id: ElementId,
    checked: bool,
    disabled: bool,
    on_change: Option<ChangeHandler>,
}

impl Checkbox {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            checked: false,
            disabled: false,
            on_change: None,
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_change(mut self, handler: impl Fn(&bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Checkbox {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let checked = self.checked;

        let (bg, border) = if checked {
            (DashColors::checkbox_checked(), DashColors::checkbox_checked())
        } else {
            (DashColors::input_bg(), DashColors::input_border())
        };

        let mut checkbox = div()
            .id(self.id)
            .size(px(16.0))
            .rounded_sm()
            .border_1()
            .border_color(border)
            .bg(bg)
            .flex()
            .items_center()
            .justify_center()
            .text_color(DashColors::text_light())
            .text_size(px(11.0))
            .child(if checked { "✓" } else { "" });

        if self.disabled {
            checkbox = checkbox.opacity(0.5);
        } else {
            checkbox = checkbox.cursor_pointer();
            if let Some(handler) = self.on_change {
                checkbox = checkbox.on_click(move |_event, window, cx| {
                    handler(&!checked, window, cx);
                });
            }
        }

        checkbox
    }
}
