//! Edit - Single-row inline edit mode

use std::collections::BTreeMap;

use crate::domain::user::{UserColumn, UserRecord};

/// Draft values for the row under edit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditDraft {
    fields: BTreeMap<UserColumn, String>,
}

impl EditDraft {
    /// Seed a draft with the row's current values
    pub fn from_record(user: &UserRecord) -> Self {
        let fields = UserColumn::ALL
            .into_iter()
            .map(|column| (column, user.get(column).to_string()))
            .collect();
        Self { fields }
    }

    pub fn get(&self, column: UserColumn) -> Option<&str> {
        self.fields.get(&column).map(String::as_str)
    }

    pub fn set(&mut self, column: UserColumn, value: impl Into<String>) {
        self.fields.insert(column, value.into());
    }

    /// Write drafted fields into `user`; columns without a draft keep their value
    pub fn apply_to(self, user: &mut UserRecord) {
        for (column, value) in self.fields {
            user.set(column, value);
        }
    }
}

/// At most one row is editable at a time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Idle,
    Editing { index: usize, draft: EditDraft },
}

impl EditMode {
    /// Row under edit
    pub fn index(&self) -> Option<usize> {
        match self {
            EditMode::Idle => None,
            EditMode::Editing { index, .. } => Some(*index),
        }
    }

    pub fn is_editing(&self, row: usize) -> bool {
        self.index() == Some(row)
    }

    pub fn draft(&self) -> Option<&EditDraft> {
        match self {
            EditMode::Idle => None,
            EditMode::Editing { draft, .. } => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut EditDraft> {
        match self {
            EditMode::Idle => None,
            EditMode::Editing { draft, .. } => Some(draft),
        }
    }

    /// Leave edit mode, handing back whatever was being edited
    pub fn take(&mut self) -> Option<(usize, EditDraft)> {
        match std::mem::take(self) {
            EditMode::Idle => None,
            EditMode::Editing { index, draft } => Some((index, draft)),
        }
    }

    /// Move the cursor with the rows; drops edit mode if `remap` yields `None`
    pub fn remap(&mut self, remap: impl FnOnce(usize) -> Option<usize>) {
        if let EditMode::Editing { index, .. } = self {
            match remap(*index) {
                Some(moved) => *index = moved,
                None => *self = EditMode::Idle,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_merges_field_by_field() {
        let mut user = UserRecord::new("7", "Old", "old@x.io", "member");
        let mut draft = EditDraft::default();
        draft.set(UserColumn::Email, "new@x.io");
        draft.apply_to(&mut user);
        assert_eq!(user, UserRecord::new("7", "Old", "new@x.io", "member"));
    }

    #[test]
    fn test_seeded_draft_reflects_row() {
        let user = UserRecord::new("7", "Ann", "ann@x.io", "admin");
        let draft = EditDraft::from_record(&user);
        assert_eq!(draft.get(UserColumn::Name), Some("Ann"));
        assert_eq!(draft.get(UserColumn::Role), Some("admin"));
    }

    #[test]
    fn test_remap_moves_or_drops_cursor() {
        let mut mode = EditMode::Editing {
            index: 4,
            draft: EditDraft::default(),
        };
        mode.remap(|index| Some(index - 1));
        assert_eq!(mode.index(), Some(3));
        mode.remap(|_| None);
        assert_eq!(mode, EditMode::Idle);
    }

    #[test]
    fn test_take_resets_to_idle() {
        let mut mode = EditMode::Editing {
            index: 1,
            draft: EditDraft::default(),
        };
        assert_eq!(mode.take().map(|(index, _)| index), Some(1));
        assert_eq!(mode.index(), None);
        assert!(mode.take().is_none());
    }
}
