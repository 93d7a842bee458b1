//! Pagination Component
//!
//! First/previous/numbered/next/last controls plus a "go to page" field.

use std::rc::Rc;

use gpui::{
    AnyElement, App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, px,
};

use crate::state::pagination::page_window;
use crate::theme::colors::DashColors;

/// Numbered buttons shown at once
const PAGE_BUTTONS: usize = 5;

/// Navigation request from the pagination bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    First,
    Previous,
    Page(usize),
    Next,
    Last,
}

type NavHandler = Rc<dyn Fn(PageNav, &mut Window, &mut App) + 'static>;

#[derive(IntoElement)]
pub struct Pagination {
    page: usize,
    page_count: usize,
    summary: SharedString,
    go_to: Option<AnyElement>,
    on_navigate: Option<NavHandler>,
}

impl Pagination {
    pub fn new(page: usize, page_count: usize) -> Self {
        Self {
            page,
            page_count,
            summary: SharedString::default(),
            go_to: None,
            on_navigate: None,
        }
    }

    /// Left-hand text, e.g. "Showing 1-10 of 46"
    pub fn summary(mut self, summary: impl Into<SharedString>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Slot for the "go to page" field
    pub fn go_to(mut self, element: impl IntoElement) -> Self {
        self.go_to = Some(element.into_any_element());
        self
    }

    pub fn on_navigate(mut self, handler: impl Fn(PageNav, &mut Window, &mut App) + 'static) -> Self {
        self.on_navigate = Some(Rc::new(handler));
        self
    }
}

fn nav_button(
    id: impl Into<ElementId>,
    label: impl Into<SharedString>,
    nav: PageNav,
    enabled: bool,
    active: bool,
    handler: Option<NavHandler>,
) -> impl IntoElement {
    let text_color = if active {
        DashColors::text_light()
    } else if enabled {
        DashColors::text_primary()
    } else {
        DashColors::text_muted()
    };

    let mut button = div()
        .id(id.into())
        .min_w(px(28.0))
        .px_2()
        .py_1()
        .rounded_sm()
        .flex()
        .justify_center()
        .text_sm()
        .text_color(text_color)
        .child(label.into());

    if active {
        button = button.bg(DashColors::info());
    } else if enabled {
        button = button
            .cursor_pointer()
            .hover(|s| s.bg(DashColors::table_row_hover()));
        if let Some(handler) = handler {
            button = button.on_click(move |_event, window, cx| handler(nav, window, cx));
        }
    }

    button
}

impl RenderOnce for Pagination {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let page = self.page;
        let count = self.page_count;
        let can_prev = page > 1;
        let can_next = page < count;
        let handler = self.on_navigate;

        let mut controls = div()
            .flex()
            .items_center()
            .gap_1()
            .child(nav_button("page-first", "«", PageNav::First, can_prev, false, handler.clone()))
            .child(nav_button("page-prev", "‹", PageNav::Previous, can_prev, false, handler.clone()));

        for n in page_window(page, count, PAGE_BUTTONS) {
            controls = controls.child(nav_button(
                ElementId::Name(format!("page-{n}").into()),
                n.to_string(),
                PageNav::Page(n),
                true,
                n == page,
                handler.clone(),
            ));
        }

        controls = controls
            .child(nav_button("page-next", "›", PageNav::Next, can_next, false, handler.clone()))
            .child(nav_button("page-last", "»", PageNav::Last, can_next, false, handler));

        let mut bar = div()
            .w_full()
            .px_4()
            .py_2()
            .flex()
            .items_center()
            .justify_between()
            .border_t_1()
            .border_color(DashColors::border())
            .child(
                div()
                    .text_sm()
                    .text_color(DashColors::text_secondary())
                    .child(self.summary),
            )
            .child(controls);

        if let Some(go_to) = self.go_to {
            bar = bar.child(go_to);
        }

        bar
    }
}
