//! UserTable - Interactive state of the member table
//!
//! Owns the working set of members plus the search query, page cursor, row
//! selection and inline edit mode, and keeps them consistent with each other.
//!
//! Rows are identified by their position in the working set. Anything that
//! refers to a row (selection, edit cursor) is remapped whenever rows are
//! removed, and "the rows on the current page" is always recomputed from the
//! current state rather than remembered:
//!
//! ```text
//! working set ──filter──▶ filtered positions ──page cursor──▶ view slice
//! ```

use std::sync::Arc;

use tracing::{debug, info};

use crate::constants::DEFAULT_PAGE_SIZE;
use crate::domain::user::{UserColumn, UserRecord};
use crate::error::Result;
use crate::export::ExportArtifact;
use crate::state::confirm::{Confirm, DeletePrompt};
use crate::state::edit::{EditDraft, EditMode};
use crate::state::filter::FilterQuery;
use crate::state::load_state::LoadState;
use crate::state::pagination::Pager;
use crate::state::selection::{SelectionSet, shift_after_batch_delete, shift_after_delete};

/// One rendered row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRow<'a> {
    /// Position in the working set
    pub index: usize,
    pub user: &'a UserRecord,
    pub selected: bool,
    pub editing: bool,
}

/// Everything the table view renders for the current state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSlice<'a> {
    pub rows: Vec<ViewRow<'a>>,
    pub page: usize,
    pub page_count: usize,
    pub filtered_len: usize,
    pub total_len: usize,
    pub can_previous: bool,
    pub can_next: bool,
    /// Header checkbox: current page non-empty and fully selected
    pub page_selected: bool,
}

/// Result of the per-row edit/save toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditToggle {
    Started,
    Saved,
    Ignored,
}

/// State machine behind the member table
#[derive(Debug, Clone)]
pub struct UserTable {
    users: Vec<UserRecord>,
    filter: FilterQuery,
    pager: Pager,
    selection: SelectionSet,
    edit: EditMode,
    load_state: LoadState,
}

impl Default for UserTable {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl UserTable {
    pub fn new(page_size: usize) -> Self {
        Self {
            users: Vec::new(),
            filter: FilterQuery::default(),
            pager: Pager::new(page_size),
            selection: SelectionSet::new(),
            edit: EditMode::Idle,
            load_state: LoadState::Idle,
        }
    }

    // ==================== Loading ====================

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn begin_loading(&mut self) {
        self.load_state = LoadState::Loading;
    }

    /// Replace the working set wholesale; all UI state starts over
    pub fn load(&mut self, users: Vec<UserRecord>) {
        info!(count = users.len(), "Loading members into table");
        self.users = users;
        self.filter = FilterQuery::default();
        self.pager = Pager::new(self.pager.page_size());
        self.selection.clear();
        self.edit = EditMode::Idle;
        self.load_state = LoadState::Ready;
    }

    /// Record a failed fetch; the rows already loaded stay as they are
    pub fn fail_load(&mut self, message: impl Into<Arc<str>>) {
        self.load_state = LoadState::Failed(message.into());
    }

    // ==================== Rows ====================

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    // ==================== Filter ====================

    pub fn filter(&self) -> &str {
        self.filter.as_str()
    }

    /// Set the search query and go back to the first page
    pub fn set_filter(&mut self, query: impl Into<String>) {
        self.filter = FilterQuery::new(query);
        let len = self.filtered_len();
        self.pager.first(len);
    }

    /// Working-set positions that match the query, in order
    pub fn filtered_indices(&self) -> Vec<usize> {
        self.users
            .iter()
            .enumerate()
            .filter(|(_, user)| self.filter.matches(user))
            .map(|(index, _)| index)
            .collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.users.iter().filter(|user| self.filter.matches(user)).count()
    }

    // ==================== Pagination ====================

    pub fn page(&self) -> usize {
        self.pager.page()
    }

    pub fn page_size(&self) -> usize {
        self.pager.page_size()
    }

    pub fn page_count(&self) -> usize {
        self.pager.page_count(self.filtered_len())
    }

    /// Text shown in the "go to page" box
    pub fn page_input(&self) -> &str {
        self.pager.input()
    }

    pub fn set_page(&mut self, page: usize) {
        let len = self.filtered_len();
        self.pager.set_page(page, len);
    }

    pub fn first_page(&mut self) {
        let len = self.filtered_len();
        self.pager.first(len);
    }

    pub fn last_page(&mut self) {
        let len = self.filtered_len();
        self.pager.last(len);
    }

    pub fn next_page(&mut self) -> bool {
        let len = self.filtered_len();
        self.pager.next(len)
    }

    pub fn previous_page(&mut self) -> bool {
        let len = self.filtered_len();
        self.pager.previous(len)
    }

    /// Text typed into the "go to page" box so far
    pub fn set_page_input(&mut self, input: impl Into<String>) {
        self.pager.set_input(input);
    }

    /// Submit whatever is in the "go to page" box
    pub fn submit_page_input(&mut self) -> Result<usize> {
        let input = self.pager.input().to_string();
        self.go_to_page(&input)
    }

    /// Free-form page entry; invalid text is kept but does not navigate
    pub fn go_to_page(&mut self, input: &str) -> Result<usize> {
        let len = self.filtered_len();
        self.pager.go_to(input, len).inspect_err(|e| debug!(error = %e, "Ignoring page input"))
    }

    /// Working-set positions of the rows on the current page
    pub fn page_indices(&self) -> Vec<usize> {
        let filtered = self.filtered_indices();
        let range = self.pager.range(filtered.len());
        filtered[range].to_vec()
    }

    /// Derive the rendered rows from the current state
    pub fn view(&self) -> ViewSlice<'_> {
        let filtered = self.filtered_indices();
        let filtered_len = filtered.len();
        let page_indices = &filtered[self.pager.range(filtered_len)];

        let rows = page_indices
            .iter()
            .map(|&index| ViewRow {
                index,
                user: &self.users[index],
                selected: self.selection.contains(index),
                editing: self.edit.is_editing(index),
            })
            .collect();

        ViewSlice {
            rows,
            page: self.pager.page(),
            page_count: self.pager.page_count(filtered_len),
            filtered_len,
            total_len: self.users.len(),
            can_previous: self.pager.can_previous(),
            can_next: self.pager.can_next(filtered_len),
            page_selected: self.selection.contains_all(page_indices),
        }
    }

    // ==================== Selection ====================

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Toggle one row. Only rows on the current page can be toggled.
    pub fn toggle_select(&mut self, index: usize) -> bool {
        if !self.page_indices().contains(&index) {
            debug!(index, "Ignoring selection of a row that is not on screen");
            return false;
        }
        self.selection.toggle(index);
        true
    }

    /// Header checkbox: select exactly the current page, or clear it if it
    /// is already fully selected
    pub fn toggle_select_page(&mut self) -> bool {
        let page = self.page_indices();
        if page.is_empty() {
            return false;
        }
        if self.selection.contains_all(&page) {
            self.selection.remove_all(&page);
        } else {
            self.selection.replace(page);
        }
        true
    }

    // ==================== Editing ====================

    /// Row currently in edit mode
    pub fn editing(&self) -> Option<usize> {
        self.edit.index()
    }

    /// Draft value of `column` for the row under edit
    pub fn draft_value(&self, column: UserColumn) -> Option<&str> {
        self.edit.draft().and_then(|draft| draft.get(column))
    }

    /// Edit/save toggle of a row.
    ///
    /// Starting an edit on another row drops that row's unsaved draft.
    pub fn begin_or_save_edit(&mut self, index: usize) -> EditToggle {
        if index >= self.users.len() {
            debug!(index, len = self.users.len(), "Ignoring edit of a missing row");
            return EditToggle::Ignored;
        }

        if self.edit.is_editing(index) {
            if let Some((index, draft)) = self.edit.take() {
                draft.apply_to(&mut self.users[index]);
                info!(index, "Saved row edit");
            }
            // A saved edit can move the row out of the filtered set
            let len = self.filtered_len();
            self.pager.clamp(len);
            return EditToggle::Saved;
        }

        if let Some(previous) = self.edit.index() {
            debug!(previous, index, "Discarding unsaved edit");
        }
        self.edit = EditMode::Editing {
            index,
            draft: EditDraft::from_record(&self.users[index]),
        };
        EditToggle::Started
    }

    /// Write a draft value; false when no row is being edited
    pub fn edit_field(&mut self, column: UserColumn, value: impl Into<String>) -> bool {
        match self.edit.draft_mut() {
            Some(draft) => {
                draft.set(column, value);
                true
            }
            None => false,
        }
    }

    /// Same as [`Self::edit_field`] addressed by column id
    pub fn edit_field_by_id(&mut self, column_id: &str, value: impl Into<String>) -> bool {
        match UserColumn::from_id(column_id) {
            Some(column) => self.edit_field(column, value),
            None => {
                debug!(column_id, "Ignoring edit of an unknown column");
                false
            }
        }
    }

    /// Leave edit mode without saving
    pub fn cancel_edit(&mut self) -> bool {
        self.edit.take().is_some()
    }

    // ==================== Deleting ====================

    /// Delete one row after `confirm` approves it
    pub fn delete_row(&mut self, index: usize, confirm: &mut impl Confirm) -> bool {
        let Some(user) = self.users.get(index) else {
            debug!(index, len = self.users.len(), "Ignoring delete of a missing row");
            return false;
        };

        let prompt = DeletePrompt::Row {
            index,
            name: user.name.clone(),
        };
        if !confirm.confirm(&prompt) {
            return false;
        }

        let removed = self.users.remove(index);
        self.selection.remap_after_delete(index);
        self.edit.remap(|cursor| shift_after_delete(cursor, index));
        let len = self.filtered_len();
        self.pager.clamp(len);

        info!(index, id = %removed.id, "Deleted row");
        self.debug_check();
        true
    }

    /// Delete every selected row in one batch after `confirm` approves it.
    ///
    /// Returns the number of rows removed.
    pub fn delete_selected(&mut self, confirm: &mut impl Confirm) -> usize {
        let removed: Vec<usize> = self
            .selection
            .iter()
            .filter(|&index| index < self.users.len())
            .collect();
        if removed.is_empty() {
            return 0;
        }

        let prompt = DeletePrompt::Selected {
            count: removed.len(),
        };
        if !confirm.confirm(&prompt) {
            return 0;
        }

        let mut position = 0;
        self.users.retain(|_| {
            let keep = removed.binary_search(&position).is_err();
            position += 1;
            keep
        });
        self.selection.clear();
        self.edit.remap(|cursor| shift_after_batch_delete(cursor, &removed));
        let len = self.filtered_len();
        self.pager.clamp(len);

        info!(count = removed.len(), remaining = self.users.len(), "Deleted selected rows");
        self.debug_check();
        removed.len()
    }

    // ==================== Export ====================

    /// Spreadsheet of the whole working set, ignoring filter and page
    pub fn export(&self, file_stem: &str) -> Result<ExportArtifact> {
        ExportArtifact::from_users(file_stem, &self.users)
    }

    fn debug_check(&self) {
        debug_assert!(self.selection.iter().all(|index| index < self.users.len()));
        debug_assert!(self.edit.index().is_none_or(|index| index < self.users.len()));
        debug_assert!(self.pager.page() <= self.page_count());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::confirm::Answered;

    /// 23 members; exactly three have "Zeta" in their name
    fn members() -> Vec<UserRecord> {
        (0..23)
            .map(|i| {
                let name = if i % 8 == 3 {
                    format!("Zeta Member {i}")
                } else {
                    format!("Member {i}")
                };
                let role = if i % 5 == 0 { "admin" } else { "member" };
                UserRecord::new(
                    (i + 1).to_string(),
                    name,
                    format!("user{i}@mailinator.com"),
                    role,
                )
            })
            .collect()
    }

    fn loaded() -> UserTable {
        let mut table = UserTable::new(10);
        table.load(members());
        table
    }

    fn yes() -> Answered {
        Answered(true)
    }

    fn selected(table: &UserTable) -> Vec<usize> {
        table.selection().iter().collect()
    }

    #[test]
    fn test_load_resets_ui_state() {
        let mut table = loaded();
        table.set_filter("member 1");
        table.toggle_select(table.page_indices()[0]);
        table.begin_or_save_edit(1);
        table.fail_load("boom");

        table.load(members());
        assert_eq!(table.filter(), "");
        assert_eq!(table.page(), 1);
        assert!(table.selection().is_empty());
        assert_eq!(table.editing(), None);
        assert_eq!(table.load_state(), &LoadState::Ready);
    }

    #[test]
    fn test_failed_load_keeps_rows() {
        let mut table = UserTable::default();
        table.begin_loading();
        assert!(table.load_state().is_loading());
        table.fail_load("connection refused");
        assert!(table.is_empty());
        assert_eq!(table.load_state().error(), Some("connection refused"));
        table.fail_load(String::from("HTTP 500"));
        assert_eq!(table.load_state(), &LoadState::Failed(Arc::from("HTTP 500")));
        assert!(table.view().rows.is_empty());
        assert_eq!(table.view().page_count, 1);
    }

    #[test]
    fn test_refresh_keeps_rows_visible_while_loading() {
        let mut table = loaded();
        table.next_page();
        table.begin_loading();
        assert!(table.load_state().is_loading());
        assert!(!table.is_empty());
        assert_eq!(table.view().rows.len(), 10);
        assert_eq!(table.page(), 2);
    }

    #[test]
    fn test_filter_resets_page_and_keeps_selection() {
        let mut table = loaded();
        table.toggle_select(2);
        table.set_page(3);
        table.set_filter("zeta");
        assert_eq!(table.page(), 1);
        assert_eq!(selected(&table), vec![2]);
        assert_eq!(table.len(), 23);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let mut once = loaded();
        once.set_filter("admin");
        let mut twice = loaded();
        twice.set_filter("admin");
        twice.set_filter("admin");
        assert_eq!(once.view(), twice.view());
    }

    #[test]
    fn test_filter_matches_email_and_role_case_insensitively() {
        let mut table = loaded();
        table.set_filter("ADMIN");
        assert_eq!(table.filtered_len(), 5);
        table.set_filter("user22@");
        assert_eq!(table.filtered_indices(), vec![22]);
    }

    #[test]
    fn test_view_rows_carry_working_set_positions() {
        let mut table = loaded();
        table.set_filter("zeta");
        let view = table.view();
        let indices: Vec<usize> = view.rows.iter().map(|row| row.index).collect();
        assert_eq!(indices, vec![3, 11, 19]);
        assert_eq!(view.filtered_len, 3);
        assert_eq!(view.total_len, 23);
    }

    #[test]
    fn test_page_stays_in_bounds() {
        let mut table = loaded();
        table.set_page(50);
        assert_eq!(table.page(), 3);
        assert!(!table.next_page());
        assert_eq!(table.page(), 3);
        assert_eq!(table.view().rows.len(), 3);

        table.first_page();
        assert!(!table.previous_page());
        assert_eq!(table.page(), 1);

        table.set_filter("zeta");
        table.last_page();
        assert_eq!(table.page(), 1);
        assert_eq!(table.page_count(), 1);
    }

    #[test]
    fn test_go_to_page_ignores_bad_input() {
        let mut table = loaded();
        assert_eq!(table.go_to_page("2").expect("valid page"), 2);
        assert!(table.go_to_page("seven").is_err());
        assert!(table.go_to_page("9").is_err());
        assert_eq!(table.page(), 2);
        assert_eq!(table.page_input(), "9");
    }

    #[test]
    fn test_typed_page_input_submits_on_demand() {
        let mut table = loaded();
        table.set_page_input("3");
        assert_eq!(table.page(), 1);
        assert_eq!(table.submit_page_input().expect("valid page"), 3);
        assert_eq!(table.page(), 3);

        table.set_page_input("0");
        assert!(table.submit_page_input().is_err());
        assert_eq!(table.page(), 3);
        assert_eq!(table.page_input(), "0");
    }

    #[test]
    fn test_select_only_visible_rows() {
        let mut table = loaded();
        assert!(table.toggle_select(4));
        assert!(!table.toggle_select(15));
        assert!(!table.toggle_select(99));
        assert_eq!(selected(&table), vec![4]);
        assert!(table.toggle_select(4));
        assert!(table.selection().is_empty());
    }

    #[test]
    fn test_select_page_uses_current_page() {
        let mut table = loaded();
        table.set_page(3);
        assert!(table.toggle_select_page());
        assert_eq!(selected(&table), vec![20, 21, 22]);
        assert!(table.view().page_selected);
    }

    #[test]
    fn test_select_page_twice_restores_selection() {
        let mut table = loaded();
        assert!(table.toggle_select_page());
        assert_eq!(selected(&table), (0..10).collect::<Vec<_>>());
        assert!(table.toggle_select_page());
        assert!(table.selection().is_empty());

        // Starting from a fully selected page
        table.toggle_select_page();
        let before = selected(&table);
        table.toggle_select_page();
        table.toggle_select_page();
        assert_eq!(selected(&table), before);
    }

    #[test]
    fn test_select_page_replaces_partial_selection() {
        let mut table = loaded();
        table.toggle_select(1);
        table.set_page(2);
        table.toggle_select(12);
        table.toggle_select_page();
        assert_eq!(selected(&table), (10..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_select_page_drops_rows_picked_on_other_pages() {
        let mut table = loaded();
        table.set_page(2);
        table.toggle_select(15);
        table.first_page();

        table.toggle_select_page();
        assert_eq!(selected(&table), (0..10).collect::<Vec<_>>());
        table.toggle_select_page();
        assert!(table.selection().is_empty());
    }

    #[test]
    fn test_select_page_follows_filter() {
        let mut table = loaded();
        table.set_filter("zeta");
        table.toggle_select_page();
        assert_eq!(selected(&table), vec![3, 11, 19]);
    }

    #[test]
    fn test_select_page_on_empty_page_is_noop() {
        let mut table = UserTable::default();
        assert!(!table.toggle_select_page());
        assert!(!table.view().page_selected);
    }

    #[test]
    fn test_edit_commit_changes_only_edited_field() {
        let mut table = loaded();
        let before = table.users()[4].clone();

        assert_eq!(table.begin_or_save_edit(4), EditToggle::Started);
        assert!(table.edit_field_by_id("name", "X"));
        assert_eq!(table.draft_value(UserColumn::Name), Some("X"));
        assert_eq!(table.users()[4].name, before.name);
        assert_eq!(table.begin_or_save_edit(4), EditToggle::Saved);

        let after = &table.users()[4];
        assert_eq!(after.name, "X");
        assert_eq!(after.id, before.id);
        assert_eq!(after.email, before.email);
        assert_eq!(after.role, before.role);
        assert_eq!(table.editing(), None);
    }

    #[test]
    fn test_switching_rows_discards_draft() {
        let mut table = loaded();
        table.begin_or_save_edit(1);
        table.edit_field(UserColumn::Role, "owner");
        assert_eq!(table.begin_or_save_edit(2), EditToggle::Started);
        assert_eq!(table.editing(), Some(2));
        assert_eq!(table.users()[1].role, "member");
        assert_eq!(table.draft_value(UserColumn::Role), Some("member"));
    }

    #[test]
    fn test_cancel_edit_discards_draft() {
        let mut table = loaded();
        table.begin_or_save_edit(0);
        table.edit_field(UserColumn::Email, "changed@x.io");
        assert!(table.cancel_edit());
        assert_eq!(table.editing(), None);
        assert_eq!(table.users()[0].email, "user0@mailinator.com");
        assert!(!table.cancel_edit());
    }

    #[test]
    fn test_edit_field_requires_edit_mode() {
        let mut table = loaded();
        assert!(!table.edit_field(UserColumn::Name, "nobody"));
        table.begin_or_save_edit(0);
        assert!(!table.edit_field_by_id("id", "999"));
        assert_eq!(table.begin_or_save_edit(99), EditToggle::Ignored);
        assert_eq!(table.editing(), Some(0));
    }

    #[test]
    fn test_saved_edit_reclamps_page() {
        let mut table = loaded();
        table.set_filter("zeta");
        table.begin_or_save_edit(3);
        table.edit_field(UserColumn::Name, "Alpha");
        table.begin_or_save_edit(3);
        assert_eq!(table.filtered_len(), 2);
        assert_eq!(table.page(), 1);
    }

    #[test]
    fn test_delete_row_remaps_selection_and_cursor() {
        let mut table = loaded();
        for index in [2, 5, 9] {
            table.toggle_select(index);
        }
        table.begin_or_save_edit(9);

        assert!(table.delete_row(5, &mut yes()));
        assert_eq!(table.len(), 22);
        assert_eq!(selected(&table), vec![2, 8]);
        assert_eq!(table.editing(), Some(8));
        assert_eq!(table.users()[8].id, "10");
    }

    #[test]
    fn test_delete_row_under_edit_clears_cursor() {
        let mut table = loaded();
        table.begin_or_save_edit(7);
        table.toggle_select(3);
        assert!(table.delete_row(7, &mut yes()));
        assert_eq!(table.editing(), None);
        assert_eq!(selected(&table), vec![3]);
    }

    #[test]
    fn test_delete_row_needs_confirmation() {
        let mut table = loaded();
        let mut prompts = Vec::new();
        let mut decline = |prompt: &DeletePrompt| {
            prompts.push(prompt.clone());
            false
        };
        assert!(!table.delete_row(0, &mut decline));
        assert_eq!(table.len(), 23);
        assert_eq!(
            prompts,
            vec![DeletePrompt::Row {
                index: 0,
                name: "Member 0".to_string()
            }]
        );
        assert!(!table.delete_row(23, &mut yes()));
    }

    #[test]
    fn test_delete_last_row_on_last_page_moves_back() {
        let mut table = UserTable::new(10);
        table.load(members().into_iter().take(11).collect());
        table.last_page();
        assert_eq!(table.page(), 2);
        assert!(table.delete_row(10, &mut yes()));
        assert_eq!(table.page(), 1);
    }

    #[test]
    fn test_delete_selected_is_one_batch() {
        let mut table = loaded();
        for index in [1, 2, 6] {
            table.toggle_select(index);
        }
        table.begin_or_save_edit(8);

        assert_eq!(table.delete_selected(&mut yes()), 3);
        assert_eq!(table.len(), 20);
        assert!(table.selection().is_empty());
        assert_eq!(table.editing(), Some(5));
        let ids: Vec<&str> = table.users()[..4].iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4", "5", "6"]);
    }

    #[test]
    fn test_delete_selected_clears_cursor_on_removed_row() {
        let mut table = loaded();
        table.toggle_select(4);
        table.begin_or_save_edit(4);
        table.delete_selected(&mut yes());
        assert_eq!(table.editing(), None);
    }

    #[test]
    fn test_delete_selected_declined_or_empty() {
        let mut table = loaded();
        let mut asked = 0;
        let mut decline = |_: &DeletePrompt| {
            asked += 1;
            false
        };
        assert_eq!(table.delete_selected(&mut decline), 0);

        table.toggle_select(0);
        assert_eq!(table.delete_selected(&mut Answered(false)), 0);
        assert_eq!(selected(&table), vec![0]);
        assert_eq!(table.len(), 23);
        assert_eq!(asked, 0);
    }

    #[test]
    fn test_export_ignores_filter_and_page() {
        let mut table = loaded();
        table.set_filter("zeta");
        table.set_page(1);
        let artifact = table.export("UserTable").expect("export");
        let text = String::from_utf8(artifact.bytes).expect("utf8");
        assert_eq!(text.lines().count(), 1 + 23);
        assert_eq!(artifact.file_name, "UserTable.csv");
        assert_eq!(table.filter(), "zeta");
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut table = loaded();
        assert_eq!(table.len(), 23);

        table.set_filter("Zeta");
        let view = table.view();
        assert_eq!(view.rows.len(), 3);
        assert_eq!(view.page, 1);

        table.set_filter("");
        let view = table.view();
        assert_eq!(view.page, 1);
        assert_eq!(view.rows.len(), 10);

        assert!(table.toggle_select_page());
        assert_eq!(table.selection().len(), 10);
        assert_eq!(table.delete_selected(&mut yes()), 10);

        assert_eq!(table.len(), 13);
        assert!(table.selection().is_empty());
        assert_eq!(table.page_count(), 2);
    }
}
