//! Users Page
//!
//! Search box, toolbar, the member table with inline editing, pagination
//! and the delete confirmation dialog.

use gpui::{
    App, ClickEvent, Context, Entity, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Subscription, Window, div, prelude::*, px,
};
use gpui_component::Sizable;
use gpui_component::input::{Input, InputEvent, InputState};

use crate::app::entities::AppEntities;
use crate::components::composite::modal::Modal;
use crate::components::composite::pagination::Pagination;
use crate::components::primitives::button::Button;
use crate::components::primitives::checkbox::Checkbox;
use crate::constants::{
    ACTIONS_COLUMN_WIDTH, CHECKBOX_COLUMN_WIDTH, TABLE_HEADER_HEIGHT, TABLE_ROW_HEIGHT,
};
use crate::domain::user::{UserColumn, UserRecord};
use crate::features::users::controller::UsersController;
use crate::i18n::{Locale, delete_prompt_text, range_summary, t};
use crate::state::{DeletePrompt, EditToggle, LoadState};
use crate::theme::colors::DashColors;

/// Owned copy of a visible row
struct RowModel {
    index: usize,
    user: UserRecord,
    selected: bool,
    editing: bool,
}

fn column_label(locale: Locale, column: UserColumn) -> String {
    match column {
        UserColumn::Name => t(locale, "col-name"),
        UserColumn::Email => t(locale, "col-email"),
        UserColumn::Role => t(locale, "col-role"),
    }
}

/// Write `value` into an input unless it already shows it
fn sync_value(state: &Entity<InputState>, value: String, window: &mut Window, cx: &mut App) {
    if state.read(cx).value().to_string() != value {
        state.update(cx, |state, cx| state.set_value(value, window, cx));
    }
}

pub struct UsersPage {
    entities: AppEntities,
    controller: UsersController,
    search_input: Entity<InputState>,
    goto_input: Entity<InputState>,
    /// Inline editor fields, in `UserColumn::ALL` order
    edit_inputs: [Entity<InputState>; 3],
    page_input_invalid: bool,
    pending_delete: Option<DeletePrompt>,
    _subscriptions: Vec<Subscription>,
}

impl UsersPage {
    pub fn new(entities: AppEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let controller = UsersController::new(entities.clone());
        let locale = entities.i18n.read(cx).locale;
        let mut subscriptions = Vec::new();

        let search_input = cx.new(|cx| {
            InputState::new(window, cx)
                .clean_on_escape()
                .placeholder(t(locale, "search-placeholder"))
        });
        let goto_input = cx.new(|cx| InputState::new(window, cx));
        let edit_inputs = UserColumn::ALL.map(|_| cx.new(|cx| InputState::new(window, cx)));

        // Table state drives the inputs after resets and button navigation
        subscriptions.push(cx.observe_in(&entities.table, window, |this, _, window, cx| {
            this.sync_inputs(window, cx);
            cx.notify();
        }));
        subscriptions.push(cx.observe_in(&entities.i18n, window, |this, i18n, window, cx| {
            let placeholder = t(i18n.read(cx).locale, "search-placeholder");
            this.search_input.update(cx, |state, cx| {
                state.set_placeholder(placeholder, window, cx);
            });
            cx.notify();
        }));

        subscriptions.push(cx.subscribe(&search_input, |this, state, event, cx| {
            if matches!(event, InputEvent::Change) {
                let query = state.read(cx).value().to_string();
                if this.entities.table.read(cx).filter() != query {
                    this.controller.set_filter(query, cx);
                }
            }
        }));

        subscriptions.push(cx.subscribe(&goto_input, |this, state, event, cx| match event {
            InputEvent::Change => {
                let input = state.read(cx).value().to_string();
                if this.entities.table.read(cx).page_input() != input {
                    this.page_input_invalid = false;
                    this.controller.set_page_input(input, cx);
                    cx.notify();
                }
            }
            InputEvent::PressEnter { .. } => this.submit_page_input(cx),
            _ => {}
        }));

        for column in UserColumn::ALL {
            let input = &edit_inputs[column.position()];
            subscriptions.push(cx.subscribe(input, move |this, state, event, cx| match event {
                InputEvent::Change => {
                    let value = state.read(cx).value().to_string();
                    let table = this.entities.table.read(cx);
                    let changed = table.editing().is_some()
                        && table.draft_value(column) != Some(value.as_str());
                    if changed {
                        this.controller.edit_field(column, value, cx);
                    }
                }
                InputEvent::PressEnter { .. } => this.save_edit(cx),
                _ => {}
            }));
        }

        Self {
            entities,
            controller,
            search_input,
            goto_input,
            edit_inputs,
            page_input_invalid: false,
            pending_delete: None,
            _subscriptions: subscriptions,
        }
    }

    fn edit_input(&self, column: UserColumn) -> &Entity<InputState> {
        &self.edit_inputs[column.position()]
    }

    fn sync_inputs(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let (filter, page_input) = {
            let table = self.entities.table.read(cx);
            (table.filter().to_string(), table.page_input().to_string())
        };
        sync_value(&self.search_input, filter, window, cx);
        sync_value(&self.goto_input, page_input, window, cx);
    }

    // ==================== Paging ====================

    fn submit_page_input(&mut self, cx: &mut Context<Self>) {
        self.page_input_invalid = !self.controller.submit_page_input(cx);
        cx.notify();
    }

    // ==================== Editing ====================

    fn toggle_edit(&mut self, index: usize, window: &mut Window, cx: &mut Context<Self>) {
        if self.controller.begin_or_save_edit(index, cx) != EditToggle::Started {
            return;
        }

        for column in UserColumn::ALL {
            let draft = self
                .entities
                .table
                .read(cx)
                .draft_value(column)
                .unwrap_or_default()
                .to_string();
            sync_value(self.edit_input(column), draft, window, cx);
        }
        self.edit_input(UserColumn::Name)
            .update(cx, |state, cx| state.focus(window, cx));
    }

    fn save_edit(&mut self, cx: &mut Context<Self>) {
        if let Some(index) = self.entities.table.read(cx).editing() {
            self.controller.begin_or_save_edit(index, cx);
        }
    }

    // ==================== Deleting ====================

    fn request_row_delete(&mut self, index: usize, cx: &mut Context<Self>) {
        self.pending_delete = self.controller.row_delete_prompt(index, cx);
        cx.notify();
    }

    fn request_selected_delete(&mut self, cx: &mut Context<Self>) {
        self.pending_delete = self.controller.selected_delete_prompt(cx);
        cx.notify();
    }

    fn confirm_pending_delete(&mut self, cx: &mut Context<Self>) {
        if let Some(prompt) = self.pending_delete.take() {
            self.controller.confirm_delete(prompt, cx);
        }
        cx.notify();
    }

    // ==================== Rendering ====================

    fn render_toolbar(&self, locale: Locale, cx: &mut Context<Self>) -> impl IntoElement {
        let table = self.entities.table.read(cx);
        let nothing_selected = table.selection().is_empty();
        let loading = table.load_state().is_loading();

        div()
            .w_full()
            .flex()
            .items_center()
            .gap_2()
            .child(div().flex_1().child(Input::new(&self.search_input).w_full()))
            .child(
                Button::danger("delete-selected", t(locale, "action-delete-selected"))
                    .disabled(nothing_selected)
                    .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| {
                        this.request_selected_delete(cx);
                    })),
            )
            .child(
                Button::secondary("export", t(locale, "action-export")).on_click(cx.listener(
                    |this, _: &ClickEvent, _window, cx| {
                        this.controller.export(cx);
                    },
                )),
            )
            .child(
                Button::primary("refresh", t(locale, "action-refresh"))
                    .disabled(loading)
                    .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| {
                        this.controller.refresh(cx);
                    })),
            )
    }

    fn render_header_row(
        &self,
        locale: Locale,
        page_selected: bool,
        page_empty: bool,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let mut header = div()
            .h(px(TABLE_HEADER_HEIGHT))
            .w_full()
            .flex()
            .items_center()
            .bg(DashColors::table_header_bg())
            .border_b_1()
            .border_color(DashColors::border())
            .text_sm()
            .font_weight(gpui::FontWeight::SEMIBOLD)
            .text_color(DashColors::text_secondary())
            .child(
                div().w(px(CHECKBOX_COLUMN_WIDTH)).flex().justify_center().child(
                    Checkbox::new("select-page")
                        .checked(page_selected)
                        .disabled(page_empty)
                        .on_change(cx.listener(|this, _: &bool, _window, cx| {
                            this.controller.toggle_select_page(cx);
                        })),
                ),
            );

        for column in UserColumn::ALL {
            header = header.child(div().flex_1().px_2().child(column_label(locale, column)));
        }

        header.child(
            div()
                .w(px(ACTIONS_COLUMN_WIDTH))
                .px_2()
                .child(t(locale, "col-actions")),
        )
    }

    fn render_cell(&self, row: &RowModel, column: UserColumn) -> impl IntoElement {
        let cell = div().flex_1().px_2().overflow_hidden();

        if row.editing {
            cell.child(Input::new(self.edit_input(column)).small())
        } else {
            cell.child(row.user.get(column).to_string())
        }
    }

    fn render_row(&self, locale: Locale, row: RowModel, cx: &mut Context<Self>) -> impl IntoElement {
        let index = row.index;
        let bg = if row.editing {
            DashColors::table_row_editing()
        } else if row.selected {
            DashColors::table_row_selected()
        } else {
            DashColors::content_bg()
        };
        let edit_label = if row.editing {
            t(locale, "action-save")
        } else {
            t(locale, "action-edit")
        };

        let mut line = div()
            .id(("row", index))
            .h(px(TABLE_ROW_HEIGHT))
            .w_full()
            .flex()
            .items_center()
            .bg(bg)
            .border_b_1()
            .border_color(DashColors::border())
            .text_sm()
            .text_color(DashColors::text_primary())
            .when(!row.editing && !row.selected, |el| {
                el.hover(|s| s.bg(DashColors::table_row_hover()))
            })
            .child(
                div().w(px(CHECKBOX_COLUMN_WIDTH)).flex().justify_center().child(
                    Checkbox::new(("select", index))
                        .checked(row.selected)
                        .on_change(cx.listener(move |this, _: &bool, _window, cx| {
                            this.controller.toggle_select(index, cx);
                        })),
                ),
            );

        for column in UserColumn::ALL {
            line = line.child(self.render_cell(&row, column));
        }

        line.child(
            div()
                .w(px(ACTIONS_COLUMN_WIDTH))
                .px_2()
                .flex()
                .gap_1()
                .child(
                    Button::ghost(("edit", index), edit_label)
                        .small()
                        .on_click(cx.listener(move |this, _: &ClickEvent, window, cx| {
                            this.toggle_edit(index, window, cx);
                        })),
                )
                .when(row.editing, |el| {
                    el.child(
                        Button::ghost(("cancel", index), t(locale, "action-cancel"))
                            .small()
                            .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| {
                                this.controller.cancel_edit(cx);
                            })),
                    )
                })
                .child(
                    Button::ghost(("delete", index), t(locale, "action-delete"))
                        .small()
                        .on_click(cx.listener(move |this, _: &ClickEvent, _window, cx| {
                            this.request_row_delete(index, cx);
                        })),
                ),
        )
    }

    fn render_placeholder(&self, locale: Locale, cx: &mut Context<Self>) -> Option<impl IntoElement> {
        let table = self.entities.table.read(cx);
        let (text, color) = match table.load_state() {
            LoadState::Loading if table.is_empty() => {
                (t(locale, "table-loading"), DashColors::text_secondary())
            }
            LoadState::Failed(message) if table.is_empty() => (
                format!("{}: {message}", t(locale, "table-load-failed")),
                DashColors::danger(),
            ),
            _ if table.is_empty() => (t(locale, "table-no-data"), DashColors::text_muted()),
            _ if table.filtered_len() == 0 => (t(locale, "table-no-match"), DashColors::text_muted()),
            _ => return None,
        };

        Some(
            div()
                .w_full()
                .py_8()
                .flex()
                .justify_center()
                .text_sm()
                .text_color(color)
                .child(text),
        )
    }

    fn render_go_to(&self, locale: Locale, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .flex()
            .items_center()
            .gap_2()
            .text_sm()
            .text_color(DashColors::text_secondary())
            .child(t(locale, "pagination-go-to"))
            .child(div().w(px(64.0)).child(Input::new(&self.goto_input).small()))
            .child(
                Button::secondary("go-to-submit", t(locale, "pagination-go"))
                    .small()
                    .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| {
                        this.submit_page_input(cx);
                    })),
            )
            .when(self.page_input_invalid, |el| {
                el.child(
                    div()
                        .text_color(DashColors::danger())
                        .child(t(locale, "pagination-invalid")),
                )
            })
    }

    fn render_confirm(&self, locale: Locale, prompt: &DeletePrompt, cx: &mut Context<Self>) -> impl IntoElement {
        Modal::new(t(locale, "confirm-title"))
            .child(delete_prompt_text(locale, prompt))
            .on_close(cx.listener(|this, _: &ClickEvent, _window, cx| {
                this.pending_delete = None;
                cx.notify();
            }))
            .on_cancel(
                t(locale, "action-cancel"),
                cx.listener(|this, _: &ClickEvent, _window, cx| {
                    this.pending_delete = None;
                    cx.notify();
                }),
            )
            .on_confirm(
                t(locale, "action-delete"),
                cx.listener(|this, _: &ClickEvent, _window, cx| {
                    this.confirm_pending_delete(cx);
                }),
            )
    }
}

impl Render for UsersPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;

        let (rows, page, page_count, summary, page_selected) = {
            let table = self.entities.table.read(cx);
            let view = table.view();
            let start = (view.page - 1) * table.page_size();
            let summary = range_summary(locale, start, view.rows.len(), view.filtered_len);
            let rows: Vec<RowModel> = view
                .rows
                .iter()
                .map(|row| RowModel {
                    index: row.index,
                    user: row.user.clone(),
                    selected: row.selected,
                    editing: row.editing,
                })
                .collect();
            (rows, view.page, view.page_count, summary, view.page_selected)
        };

        let page_empty = rows.is_empty();
        let controller = self.controller.clone();

        let mut body = div().id("table-body").flex_1().overflow_y_scroll();
        match self.render_placeholder(locale, cx) {
            Some(placeholder) => body = body.child(placeholder),
            None => {
                for row in rows {
                    body = body.child(self.render_row(locale, row, cx));
                }
            }
        }

        let confirm = self
            .pending_delete
            .clone()
            .map(|prompt| self.render_confirm(locale, &prompt, cx));

        div()
            .id("users-page")
            .relative()
            .size_full()
            .flex()
            .flex_col()
            .p_4()
            .gap_4()
            .child(self.render_toolbar(locale, cx))
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    .bg(DashColors::content_bg())
                    .border_1()
                    .border_color(DashColors::border())
                    .rounded_md()
                    .child(self.render_header_row(locale, page_selected, page_empty, cx))
                    .child(body)
                    .child(
                        Pagination::new(page, page_count)
                            .summary(summary)
                            .go_to(self.render_go_to(locale, cx))
                            .on_navigate(move |nav, _window, cx| controller.navigate(nav, cx)),
                    ),
            )
            .children(confirm)
    }
}
