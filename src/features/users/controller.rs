//! Users Controller
//!
//! Routes page actions to the table engine and the background services.

use gpui::App;

use crate::app::entities::{AppEntities, AppServices};
use crate::components::composite::pagination::PageNav;
use crate::domain::user::UserColumn;
use crate::helpers::export_dir;
use crate::state::{Answered, DeletePrompt, EditToggle, LogLevel};

#[derive(Clone)]
pub struct UsersController {
    entities: AppEntities,
}

impl UsersController {
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    fn log(&self, level: LogLevel, message: impl Into<String>, cx: &mut App) {
        self.entities.logs.update(cx, |logs, cx| {
            logs.push_now(level, message);
            cx.notify();
        });
    }

    /// Fetch the member list again; the table resets when it arrives
    pub fn refresh(&self, cx: &mut App) {
        self.entities.table.update(cx, |table, cx| {
            table.begin_loading();
            cx.notify();
        });
        self.log(LogLevel::Info, "Loading members...", cx);

        if let Some(services) = cx.try_global::<AppServices>() {
            services.users.load_users();
        }
    }

    pub fn set_filter(&self, query: String, cx: &mut App) {
        self.entities.table.update(cx, |table, cx| {
            table.set_filter(query);
            cx.notify();
        });
    }

    pub fn navigate(&self, nav: PageNav, cx: &mut App) {
        self.entities.table.update(cx, |table, cx| {
            match nav {
                PageNav::First => table.first_page(),
                PageNav::Previous => {
                    table.previous_page();
                }
                PageNav::Page(page) => table.set_page(page),
                PageNav::Next => {
                    table.next_page();
                }
                PageNav::Last => table.last_page(),
            }
            cx.notify();
        });
    }

    pub fn set_page_input(&self, input: String, cx: &mut App) {
        self.entities.table.update(cx, |table, cx| {
            table.set_page_input(input);
            cx.notify();
        });
    }

    /// Returns false when the typed page was rejected
    pub fn submit_page_input(&self, cx: &mut App) -> bool {
        self.entities.table.update(cx, |table, cx| {
            let accepted = table.submit_page_input().is_ok();
            cx.notify();
            accepted
        })
    }

    pub fn toggle_select(&self, index: usize, cx: &mut App) {
        self.entities.table.update(cx, |table, cx| {
            if table.toggle_select(index) {
                cx.notify();
            }
        });
    }

    pub fn toggle_select_page(&self, cx: &mut App) {
        self.entities.table.update(cx, |table, cx| {
            if table.toggle_select_page() {
                cx.notify();
            }
        });
    }

    pub fn begin_or_save_edit(&self, index: usize, cx: &mut App) -> EditToggle {
        let toggle = self.entities.table.update(cx, |table, cx| {
            let toggle = table.begin_or_save_edit(index);
            cx.notify();
            toggle
        });
        if toggle == EditToggle::Saved {
            self.log(LogLevel::Info, "Saved changes", cx);
        }
        toggle
    }

    pub fn edit_field(&self, column: UserColumn, value: String, cx: &mut App) {
        self.entities.table.update(cx, |table, cx| {
            if table.edit_field(column, value) {
                cx.notify();
            }
        });
    }

    pub fn cancel_edit(&self, cx: &mut App) {
        self.entities.table.update(cx, |table, cx| {
            if table.cancel_edit() {
                cx.notify();
            }
        });
    }

    /// The prompt deleting `index` would raise, without deleting anything
    pub fn row_delete_prompt(&self, index: usize, cx: &mut App) -> Option<DeletePrompt> {
        let mut asked = None;
        self.entities.table.update(cx, |table, _cx| {
            table.delete_row(index, &mut |prompt: &DeletePrompt| {
                asked = Some(prompt.clone());
                false
            });
        });
        asked
    }

    /// The prompt deleting the selection would raise; none when nothing is selected
    pub fn selected_delete_prompt(&self, cx: &mut App) -> Option<DeletePrompt> {
        let mut asked = None;
        self.entities.table.update(cx, |table, _cx| {
            table.delete_selected(&mut |prompt: &DeletePrompt| {
                asked = Some(prompt.clone());
                false
            });
        });
        asked
    }

    /// Carry out a delete the user has confirmed
    pub fn confirm_delete(&self, prompt: DeletePrompt, cx: &mut App) {
        let removed = self.entities.table.update(cx, |table, cx| {
            let removed = match prompt {
                DeletePrompt::Row { index, .. } => {
                    usize::from(table.delete_row(index, &mut Answered(true)))
                }
                DeletePrompt::Selected { .. } => table.delete_selected(&mut Answered(true)),
            };
            cx.notify();
            removed
        });
        if removed > 0 {
            self.log(LogLevel::Info, format!("Deleted {removed} row(s)"), cx);
        }
    }

    /// Encode the whole working set and write it in the background
    pub fn export(&self, cx: &mut App) {
        let Some((file_stem, dir)) = cx.try_global::<AppServices>().map(|services| {
            (
                services.config.export.file_stem.clone(),
                export_dir(&services.config.export),
            )
        }) else {
            return;
        };

        let dir = match dir {
            Ok(dir) => dir,
            Err(e) => {
                tracing::error!(error = %e, "No export directory");
                self.log(LogLevel::Error, format!("Export failed: {e}"), cx);
                return;
            }
        };

        let artifact = match self.entities.table.read(cx).export(&file_stem) {
            Ok(artifact) => artifact,
            Err(e) => {
                tracing::error!(error = %e, "Failed to encode export");
                self.log(LogLevel::Error, format!("Export failed: {e}"), cx);
                return;
            }
        };

        if let Some(services) = cx.try_global::<AppServices>() {
            services.users.export(artifact, dir);
        }
    }
}
