//! User - Member Record and Table Columns

use serde::{Deserialize, Serialize};

/// A single member record as served by the remote endpoint.
///
/// Field order is also the export column order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl UserRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    /// Read a displayed column
    pub fn get(&self, column: UserColumn) -> &str {
        match column {
            UserColumn::Name => &self.name,
            UserColumn::Email => &self.email,
            UserColumn::Role => &self.role,
        }
    }

    /// Overwrite a displayed column
    pub fn set(&mut self, column: UserColumn, value: impl Into<String>) {
        let value = value.into();
        match column {
            UserColumn::Name => self.name = value,
            UserColumn::Email => self.email = value,
            UserColumn::Role => self.role = value,
        }
    }
}

/// Editable, filterable data columns in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UserColumn {
    Name,
    Email,
    Role,
}

impl UserColumn {
    pub const ALL: [UserColumn; 3] = [UserColumn::Name, UserColumn::Email, UserColumn::Role];

    /// Stable column id
    pub fn id(self) -> &'static str {
        match self {
            UserColumn::Name => "name",
            UserColumn::Email => "email",
            UserColumn::Role => "role",
        }
    }

    /// Index into [`UserColumn::ALL`]
    pub fn position(self) -> usize {
        self as usize
    }

    /// Resolve a column id; `None` for unknown ids
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|column| column.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_ids_round_trip() {
        for column in UserColumn::ALL {
            assert_eq!(UserColumn::from_id(column.id()), Some(column));
        }
        assert_eq!(UserColumn::from_id("id"), None);
        assert_eq!(UserColumn::from_id("Name"), None);
    }

    #[test]
    fn test_position_matches_display_order() {
        for (i, column) in UserColumn::ALL.into_iter().enumerate() {
            assert_eq!(column.position(), i);
        }
    }

    #[test]
    fn test_set_touches_only_one_field() {
        let mut user = UserRecord::new("1", "Aaron Miles", "aaron@mailinator.com", "member");
        user.set(UserColumn::Role, "admin");
        assert_eq!(user.role, "admin");
        assert_eq!(user.get(UserColumn::Name), "Aaron Miles");
        assert_eq!(user.id, "1");
    }

    #[test]
    fn test_deserialize_remote_payload() {
        let payload = r#"[
            {"id":"1","name":"Aaron Miles","email":"aaron@mailinator.com","role":"member"},
            {"id":"2","name":"Aishwarya Naik","email":"aishwarya@mailinator.com","role":"admin"}
        ]"#;
        let users: Vec<UserRecord> = serde_json::from_str(payload).expect("valid payload");
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].role, "admin");
    }
}
